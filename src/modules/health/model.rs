use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    /// RFC 3339 server time
    pub timestamp: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}
