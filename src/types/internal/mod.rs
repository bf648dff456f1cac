pub mod context;

pub use context::RequestContext;

use serde::{Deserialize, Serialize};

/// JWT claims issued by the external auth provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the user id
    pub sub: String,
    /// Expiration timestamp (epoch seconds)
    pub exp: i64,
    /// Issued-at timestamp (epoch seconds)
    pub iat: i64,
}
