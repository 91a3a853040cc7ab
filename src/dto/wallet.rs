use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepositMethod {
    Stk,
    Manual,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepositRequest {
    pub amount: Decimal,
    pub deposit_method: DepositMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpesa_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepositResponse {
    pub message: String,
    #[serde(default)]
    pub checkout_id: Option<String>,
    #[serde(default)]
    pub deposit_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WithdrawRequest {
    pub amount: Decimal,
    pub mpesa_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawResponse {
    pub message: String,
    pub request_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalData {
    pub views_earnings_balance: Decimal,
    pub can_withdraw: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalOutcome {
    pub success: bool,
    pub message: String,
    pub new_balance: Decimal,
}

/// Deposit form bounds. Served client-side; the backend re-validates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositConfig {
    pub quick_amounts: Vec<Decimal>,
    pub minimum_amount: Decimal,
    pub maximum_amount: Decimal,
}

impl Default for DepositConfig {
    fn default() -> Self {
        Self {
            quick_amounts: [100, 500, 1000, 2000, 5000]
                .into_iter()
                .map(Decimal::from)
                .collect(),
            minimum_amount: Decimal::from(50),
            maximum_amount: Decimal::from(100_000),
        }
    }
}
