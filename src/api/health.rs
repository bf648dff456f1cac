use poem_openapi::{payload::PlainText, OpenApi, Tags};

/// Health check API
pub struct HealthApi;

/// API tags for health endpoints
#[derive(Tags)]
enum HealthTags {
    /// Service health endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Liveness probe
    #[oai(path = "/health", method = "get", tag = "HealthTags::Health")]
    async fn health(&self) -> PlainText<&'static str> {
        PlainText("ok")
    }
}
