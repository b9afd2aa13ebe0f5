use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub books: usize,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ErrorResponse {
    pub detail: String,
}
