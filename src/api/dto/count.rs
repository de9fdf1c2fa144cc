//! DTO for the link count endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Count;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

impl From<Count> for CountResponse {
    fn from(count: Count) -> Self {
        Self { count: count.count }
    }
}
