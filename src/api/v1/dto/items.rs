/*
 * Responsibility
 * - Response DTO for the protected item lists
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    /// Scheme that authenticated the request.
    pub scheme: &'static str,
    pub items: Vec<&'static str>,
}
