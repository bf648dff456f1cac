use poem_openapi::{auth::Bearer, SecurityScheme};

use crate::errors::internal::TokenError;
use crate::services::TokenService;
use crate::types::internal::RequestContext;

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// Validate the bearer token and build the explicit caller context.
///
/// Runs before any side effect; a missing header is rejected by the security
/// scheme itself, a bad token here.
pub fn authenticate(tokens: &TokenService, auth: &BearerAuth) -> Result<RequestContext, TokenError> {
    let claims = tokens.validate_jwt(&auth.0.token)?;
    Ok(RequestContext::new(claims.sub))
}
