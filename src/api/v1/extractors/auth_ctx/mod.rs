/*!
 * Authenticated principal extractor
 *
 * Responsibility:
 * - Hand the Principal that middleware::auth stored in request extensions to handlers
 *
 * Public API:
 * - Authenticated
 */

mod core;

pub use self::core::Authenticated;
