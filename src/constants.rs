/// Sentinel entry meaning "any value" in an origin, method, or header list.
pub const WILDCARD: &str = "*";

/// Name under which [`CorsOptions`](crate::CorsOptions) stores its default policy.
pub const DEFAULT_POLICY_NAME: &str = "__DefaultCorsPolicy";

pub mod header {
    pub const ACCEPT: &str = "Accept";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_TYPE: &str = "Content-Type";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const PUT: &str = "PUT";
}
