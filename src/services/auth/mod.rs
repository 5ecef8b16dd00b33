pub mod basic;
pub mod error;
pub mod factory;
pub mod header;
pub mod registry;
pub mod scheme;
pub mod session;

pub use basic::{BASIC_SCHEME, BasicCredentialSplit, BasicScheme};
pub use factory::build_scheme_registry;
pub use registry::{RegistryError, SchemeRegistry};
pub use scheme::{AuthScheme, Principal};
pub use session::{SESSION_SCHEME, SessionIdScheme};
