use serde::{Deserialize, Serialize};

use crate::models::Activity;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RateOrderRequest {
    pub rating: u8,
}

#[derive(Debug, Deserialize)]
pub struct ActivityPage {
    pub results: Vec<Activity>,
    pub count: i64,
}
