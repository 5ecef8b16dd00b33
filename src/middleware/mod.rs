/*
 * Responsibility
 * - Public interface of the middleware layer
 * - auth::require(...) per route group, cors/http for the whole app
 */
pub mod auth;
pub mod cors;
pub mod http;
