use serde::Serialize;

/// Response body for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
