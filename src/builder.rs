use crate::constants::WILDCARD;
use crate::policy::Policy;
use crate::util::contains_wildcard;
use std::time::Duration;

/// Fluent accumulator for [`Policy`] settings.
///
/// Configuration methods append to (or overwrite) the builder's own state and
/// return the same builder, so calls can be chained. [`build`](Self::build)
/// takes a snapshot and may be called any number of times.
///
/// ```
/// use cors_policy::PolicyBuilder;
/// use std::time::Duration;
///
/// let policy = PolicyBuilder::new()
///     .with_origins(["https://app.example.com"])
///     .with_methods(["GET", "POST"])
///     .allow_any_header()
///     .set_preflight_max_age(Duration::from_secs(600))
///     .allow_credentials()
///     .build();
///
/// assert!(policy.allow_any_header);
/// assert!(!policy.allow_any_origin);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PolicyBuilder {
    origins: Vec<String>,
    methods: Vec<String>,
    headers: Vec<String>,
    exposed_headers: Vec<String>,
    supports_credentials: bool,
    preflight_max_age: Option<Duration>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the builder with copies of `policy`'s lists, credentials and max age.
    ///
    /// The `allow_any_*` flags of `policy` are not carried over; [`build`](Self::build)
    /// derives them again from the copied lists.
    pub fn from_policy(policy: &Policy) -> Self {
        Self {
            origins: policy.origins.clone(),
            methods: policy.methods.clone(),
            headers: policy.headers.clone(),
            exposed_headers: policy.exposed_headers.clone(),
            supports_credentials: policy.supports_credentials,
            preflight_max_age: policy.preflight_max_age,
        }
    }

    /// Seeds the builder with `origins`, kept verbatim and in order.
    pub fn from_origins<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_origins<I, S>(&mut self, origins: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins.extend(origins.into_iter().map(Into::into));
        self
    }

    /// Appends `*` to the origins; entries added earlier are kept.
    pub fn allow_any_origin(&mut self) -> &mut Self {
        self.origins.push(WILDCARD.to_owned());
        self
    }

    pub fn with_methods<I, S>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods.extend(methods.into_iter().map(Into::into));
        self
    }

    pub fn allow_any_method(&mut self) -> &mut Self {
        self.methods.push(WILDCARD.to_owned());
        self
    }

    pub fn with_headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(headers.into_iter().map(Into::into));
        self
    }

    pub fn allow_any_header(&mut self) -> &mut Self {
        self.headers.push(WILDCARD.to_owned());
        self
    }

    pub fn with_exposed_headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers
            .extend(headers.into_iter().map(Into::into));
        self
    }

    /// Overwrites any max age set earlier.
    pub fn set_preflight_max_age(&mut self, max_age: Duration) -> &mut Self {
        self.preflight_max_age = Some(max_age);
        self
    }

    pub fn allow_credentials(&mut self) -> &mut Self {
        self.supports_credentials = true;
        self
    }

    pub fn disallow_credentials(&mut self) -> &mut Self {
        self.supports_credentials = false;
        self
    }

    /// Produces an independent [`Policy`] from the current state.
    pub fn build(&self) -> Policy {
        tracing::trace!(
            origins = self.origins.len(),
            methods = self.methods.len(),
            headers = self.headers.len(),
            exposed_headers = self.exposed_headers.len(),
            "building CORS policy"
        );

        Policy {
            origins: self.origins.clone(),
            methods: self.methods.clone(),
            headers: self.headers.clone(),
            exposed_headers: self.exposed_headers.clone(),
            allow_any_origin: contains_wildcard(&self.origins),
            allow_any_method: contains_wildcard(&self.methods),
            allow_any_header: contains_wildcard(&self.headers),
            supports_credentials: self.supports_credentials,
            preflight_max_age: self.preflight_max_age,
        }
    }
}

impl From<&Policy> for PolicyBuilder {
    fn from(policy: &Policy) -> Self {
        Self::from_policy(policy)
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
