//! Fluent builder and named registry for CORS (Cross-Origin Resource Sharing)
//! policies.
//!
//! A [`PolicyBuilder`] accumulates allowed origins, methods, headers, exposed
//! headers, credential support and the preflight cache duration, then
//! [`build`](PolicyBuilder::build)s an owned [`Policy`] snapshot. Policies can
//! be grouped by name in [`CorsOptions`] for whatever layer enforces them.

mod builder;
pub mod constants;
mod options;
mod policy;
mod util;

pub use builder::PolicyBuilder;
pub use options::CorsOptions;
pub use policy::{Policy, ValidationError};
pub use util::contains_wildcard;
