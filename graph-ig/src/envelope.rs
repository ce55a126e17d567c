//! Response envelope shapes shared across endpoints.

use serde::Deserialize;

/// List envelope: `{ "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataList<T> {
    /// The wrapped resources, in the order the API returned them.
    pub data: Vec<T>,
}

/// Creation envelope: `{ "id": "..." }`.
#[derive(Debug, Clone, Deserialize)]
pub struct IdResponse {
    /// Identifier assigned by the remote system.
    pub id: String,
}

/// Toggle/delete envelope: `{ "success": true }`.
#[derive(Debug, Clone, Deserialize)]
pub struct SuccessResponse {
    /// Whether the remote accepted the operation.
    pub success: bool,
}
