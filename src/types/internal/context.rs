/// Identity of the authenticated caller, extracted from the bearer token.
///
/// Passed explicitly into every mutating operation so the lifecycle rules can
/// be exercised in tests without any ambient session state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_id: String,
}

impl RequestContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
