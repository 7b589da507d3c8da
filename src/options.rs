use crate::builder::PolicyBuilder;
use crate::constants::DEFAULT_POLICY_NAME;
use crate::policy::{Policy, ValidationError};
use indexmap::IndexMap;

/// Named set of CORS policies, including the default one.
///
/// Policies are kept in registration order. Registering a name that already
/// exists replaces the stored policy without moving it.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    default_policy_name: String,
    policies: IndexMap<String, Policy>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            default_policy_name: DEFAULT_POLICY_NAME.to_owned(),
            policies: IndexMap::new(),
        }
    }
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_policy_name(&self) -> &str {
        &self.default_policy_name
    }

    /// Points the default at another name. Policies already registered are
    /// left untouched.
    pub fn set_default_policy_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.default_policy_name = name.into();
        self
    }

    pub fn add_default_policy(&mut self, policy: Policy) -> &mut Self {
        let name = self.default_policy_name.clone();
        self.add_policy(name, policy)
    }

    pub fn add_default_policy_with<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut PolicyBuilder),
    {
        let name = self.default_policy_name.clone();
        self.add_policy_with(name, configure)
    }

    pub fn add_policy(&mut self, name: impl Into<String>, policy: Policy) -> &mut Self {
        let name = name.into();
        let replaced = self.policies.insert(name.clone(), policy).is_some();
        tracing::debug!(name = %name, replaced, "registered CORS policy");
        self
    }

    /// Registers the policy produced by running `configure` on a fresh builder.
    ///
    /// ```
    /// use cors_policy::CorsOptions;
    ///
    /// let mut options = CorsOptions::new();
    /// options.add_policy_with("public", |builder| {
    ///     builder.allow_any_origin().with_methods(["GET"]);
    /// });
    ///
    /// assert!(options.get_policy("public").is_some_and(|p| p.allow_any_origin));
    /// ```
    pub fn add_policy_with<F>(&mut self, name: impl Into<String>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut PolicyBuilder),
    {
        let mut builder = PolicyBuilder::new();
        configure(&mut builder);
        self.add_policy(name, builder.build())
    }

    /// Like [`add_policy`](Self::add_policy), but refuses policies that fail
    /// [`Policy::validate`]. Nothing is registered on error.
    pub fn try_add_policy(
        &mut self,
        name: impl Into<String>,
        policy: Policy,
    ) -> Result<&mut Self, ValidationError> {
        let name = name.into();
        if let Err(error) = policy.validate() {
            tracing::warn!(name = %name, %error, "rejected CORS policy");
            return Err(error);
        }

        Ok(self.add_policy(name, policy))
    }

    pub fn get_policy(&self, name: &str) -> Option<&Policy> {
        self.policies.get(name)
    }

    pub fn default_policy(&self) -> Option<&Policy> {
        self.get_policy(&self.default_policy_name)
    }

    /// Removes `name`, keeping the remaining policies in order.
    pub fn remove_policy(&mut self, name: &str) -> Option<Policy> {
        let removed = self.policies.shift_remove(name);
        if removed.is_some() {
            tracing::debug!(name = %name, "removed CORS policy");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Policy)> {
        self.policies
            .iter()
            .map(|(name, policy)| (name.as_str(), policy))
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
