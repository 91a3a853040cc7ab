use reqwest::StatusCode;
use serde_json::Value;

use crate::client::ApiClient;
use crate::dto::lipa::{
    InstallmentPaymentRequest, LipaRegistrationForm, RawInstallmentOrder,
};
use crate::error::{ApiError, ApiResult};
use crate::models::{InstallmentOrder, InstallmentPayment, LipaRegistration};

pub async fn register(
    client: &ApiClient,
    form: LipaRegistrationForm,
) -> ApiResult<LipaRegistration> {
    client
        .post_multipart(
            "/dashboard/lipa/register/",
            form.into_form()?,
            "Registration failed",
        )
        .await
}

/// The current user's KYC record. `Ok(None)` when the user never registered:
/// the endpoint answers 404, or an empty body, or a record with neither a
/// name nor a status.
pub async fn registration(client: &ApiClient) -> ApiResult<Option<LipaRegistration>> {
    let value = match client
        .get_value(
            "/dashboard/lipa/registration/",
            "Failed to fetch Lipa Mdogo Mdogo registration",
        )
        .await
    {
        Ok(value) => value,
        Err(ApiError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let has_name = value
        .get("full_name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty());
    let has_status = value.get("status").is_some();
    if !has_name && !has_status {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

pub async fn installment_orders(client: &ApiClient) -> ApiResult<Vec<InstallmentOrder>> {
    let raw: Vec<RawInstallmentOrder> = client
        .get(
            "/dashboard/installment/orders/",
            "Failed to fetch installment orders",
        )
        .await?;
    Ok(raw.into_iter().map(RawInstallmentOrder::normalize).collect())
}

pub async fn pay_installment(
    client: &ApiClient,
    payload: &InstallmentPaymentRequest,
) -> ApiResult<InstallmentPayment> {
    client
        .post(
            "/dashboard/installment/pay/",
            payload,
            "Failed to make installment payment",
        )
        .await
}
