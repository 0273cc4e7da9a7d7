use serde::{Deserialize, Serialize};

// These are the minimum fields we need to surface a remote failure
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub code: usize,
    pub message: String,
}
