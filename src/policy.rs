use crate::util::join_braced;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Resolved CORS settings produced by [`PolicyBuilder::build`](crate::PolicyBuilder::build).
///
/// Every list is owned by the policy itself, so a built policy never observes
/// later changes to the builder (or to the policy the builder was seeded from).
/// The `allow_any_*` flags mirror whether the matching list holds `*`; they are
/// derived by the builder and ignored when a policy is used as a seed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    pub origins: Vec<String>,
    pub methods: Vec<String>,
    pub headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_any_origin: bool,
    pub allow_any_method: bool,
    pub allow_any_header: bool,
    pub supports_credentials: bool,
    /// How long a preflight response may be cached. `None` means the
    /// `Access-Control-Max-Age` header is not advertised at all.
    pub preflight_max_age: Option<Duration>,
}

/// Configuration combinations a browser would refuse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "allow any origin is combined with credentials; browsers reject a wildcard origin on credentialed responses"
    )]
    AnyOriginWithCredentials,
}

impl Policy {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allow_any_origin && self.supports_credentials {
            return Err(ValidationError::AnyOriginWithCredentials);
        }

        Ok(())
    }

    /// Whole seconds advertised through `Access-Control-Max-Age`, if any.
    pub fn preflight_max_age_secs(&self) -> Option<u64> {
        self.preflight_max_age.map(|age| age.as_secs())
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "allow_any_header: {}, allow_any_method: {}, allow_any_origin: {}, ",
            self.allow_any_header, self.allow_any_method, self.allow_any_origin
        )?;
        match self.preflight_max_age_secs() {
            Some(secs) => write!(f, "preflight_max_age: {secs}s, ")?,
            None => write!(f, "preflight_max_age: none, ")?,
        }
        write!(
            f,
            "supports_credentials: {}, origins: {}, methods: {}, headers: {}, exposed_headers: {}",
            self.supports_credentials,
            join_braced(&self.origins),
            join_braced(&self.methods),
            join_braced(&self.headers),
            join_braced(&self.exposed_headers)
        )
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
