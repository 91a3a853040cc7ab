use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub(crate) struct PurchasePackageRequest {
    pub package: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchasePackageResponse {
    pub message: String,
    pub purchase_id: i64,
    #[serde(default)]
    pub bonus_amount: Option<Decimal>,
    #[serde(default)]
    pub is_upgrade: bool,
    #[serde(default)]
    pub is_premium_upgrade: bool,
    #[serde(default)]
    pub previous_rate: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClaimResponse {
    pub message: String,
}

/// Row in the tier comparison table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageFeature {
    pub name: String,
    pub basic: bool,
    pub standard: bool,
    pub premium: bool,
}
