/*
 * Responsibility
 * - Public surface of v1 (routes(), handlers for app-level mounting)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
