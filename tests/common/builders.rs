#![allow(dead_code)]

use cors_policy::constants::method;
use cors_policy::{Policy, PolicyBuilder};
use std::time::Duration;

pub const EXISTING_ORIGIN: &str = "http://existing.com";
pub const EXISTING_HEADER: &str = "Existing";
pub const EXISTING_METHOD: &str = method::GET;
pub const EXISTING_EXPOSED_HEADER: &str = "ExistingExposed";

/// Policy assembled by hand, the way a caller seeds a builder.
pub fn existing_policy() -> Policy {
    Policy {
        origins: vec![EXISTING_ORIGIN.into()],
        methods: vec![EXISTING_METHOD.into()],
        headers: vec![EXISTING_HEADER.into()],
        exposed_headers: vec![EXISTING_EXPOSED_HEADER.into()],
        supports_credentials: true,
        preflight_max_age: Some(Duration::from_secs(12)),
        ..Policy::default()
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn seeded(policy: &Policy) -> PolicyBuilder {
    PolicyBuilder::from_policy(policy)
}
