use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AgentPurchaseRequest {
    pub package: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentPurchaseResponse {
    pub message: String,
    pub purchase_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClaimBonusRequest {
    pub bonus_id: i64,
}
