use serde::{Deserialize, Serialize};

/// JSON body returned for every error response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    pub error: String,
}
