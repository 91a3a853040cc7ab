use crate::client::ApiClient;
use crate::dto::wallet::{
    DepositConfig, DepositMethod, DepositRequest, DepositResponse, WithdrawRequest,
    WithdrawResponse, WithdrawalData, WithdrawalOutcome,
};
use crate::error::{ApiError, ApiResult};
use crate::models::{Transaction, WalletBalance};

pub async fn balance(client: &ApiClient) -> ApiResult<WalletBalance> {
    client.get("/wallet/", "Failed to fetch wallet balance").await
}

pub async fn deposit(client: &ApiClient, payload: &DepositRequest) -> ApiResult<DepositResponse> {
    match payload.deposit_method {
        DepositMethod::Stk => {
            let number = payload.phone_number.as_deref().unwrap_or_default();
            if !is_mpesa_number(number) {
                return Err(ApiError::Validation(
                    "Enter a valid M-Pesa number (e.g. 0712345678)".to_string(),
                ));
            }
        }
        DepositMethod::Manual => {
            if payload.mpesa_code.as_deref().unwrap_or_default().trim().is_empty() {
                return Err(ApiError::Validation(
                    "Enter the M-Pesa confirmation code".to_string(),
                ));
            }
        }
    }
    client
        .post("/wallet/deposit/", payload, "Failed to process deposit")
        .await
}

pub async fn withdraw_main(
    client: &ApiClient,
    payload: &WithdrawRequest,
) -> ApiResult<WithdrawResponse> {
    if !is_mpesa_number(&payload.mpesa_number) {
        return Err(ApiError::Validation(
            "Enter a valid M-Pesa number (e.g. 0712345678)".to_string(),
        ));
    }
    client
        .post("/wallet/withdraw/main/", payload, "Failed to process withdrawal")
        .await
}

pub async fn withdraw_referral(
    client: &ApiClient,
    payload: &WithdrawRequest,
) -> ApiResult<WithdrawResponse> {
    if !is_mpesa_number(&payload.mpesa_number) {
        return Err(ApiError::Validation(
            "Enter a valid M-Pesa number (e.g. 0712345678)".to_string(),
        ));
    }
    client
        .post(
            "/wallet/withdraw/referral/",
            payload,
            "Failed to process withdrawal",
        )
        .await
}

pub async fn transactions(client: &ApiClient) -> ApiResult<Vec<Transaction>> {
    client
        .get("/wallet/transactions/", "Failed to fetch transaction history")
        .await
}

pub async fn withdrawal_data(client: &ApiClient) -> ApiResult<WithdrawalData> {
    client
        .get("/withdraw/", "Failed to fetch withdrawal data")
        .await
}

pub async fn request_withdrawal(
    client: &ApiClient,
    amount: rust_decimal::Decimal,
) -> ApiResult<WithdrawalOutcome> {
    client
        .post(
            "/withdraw/",
            &serde_json::json!({ "amount": amount }),
            "Failed to process withdrawal",
        )
        .await
}

/// Not a backend call: the deposit form bounds ship with the client.
pub fn deposit_config() -> DepositConfig {
    DepositConfig::default()
}

/// Kenyan mobile number as M-Pesa accepts it: local `07xx`/`01xx` form or
/// international `+254`/`254` form.
fn is_mpesa_number(number: &str) -> bool {
    let digits = if let Some(rest) = number.strip_prefix("+254") {
        format!("0{rest}")
    } else if let Some(rest) = number.strip_prefix("254") {
        format!("0{rest}")
    } else {
        number.to_string()
    };
    digits.len() == 10
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits.starts_with("07") || digits.starts_with("01"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mpesa_number_formats() {
        assert!(is_mpesa_number("0712345678"));
        assert!(is_mpesa_number("0112345678"));
        assert!(is_mpesa_number("+254712345678"));
        assert!(is_mpesa_number("254712345678"));
        assert!(!is_mpesa_number("0812345678"));
        assert!(!is_mpesa_number("071234567"));
        assert!(!is_mpesa_number("07123456789"));
        assert!(!is_mpesa_number("07a2345678"));
        assert!(!is_mpesa_number(""));
    }
}
