use serde::Deserialize;

use crate::client::ApiClient;
use crate::dto::accounts::{
    AuthResponse, ChangePasswordRequest, CommissionList, LoginRequest, ReferralList,
    ReferralQuery, RegisterRequest, UpdateProfileRequest, VerifyEmailRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::models::{DashboardStats, ReferralStats, User};

pub async fn register(client: &ApiClient, payload: &RegisterRequest) -> ApiResult<AuthResponse> {
    if !is_e164(&payload.phone_number) {
        return Err(ApiError::Validation(
            "Phone number must be in international format (e.g. +254712345678)".to_string(),
        ));
    }
    let auth: AuthResponse = client
        .post("/accounts/register/", payload, "Registration failed")
        .await?;
    client.store_token(&auth.token)?;
    Ok(auth)
}

pub async fn login(client: &ApiClient, payload: &LoginRequest) -> ApiResult<AuthResponse> {
    let auth: AuthResponse = client
        .post("/accounts/login/", payload, "Login failed")
        .await?;
    client.store_token(&auth.token)?;
    Ok(auth)
}

/// Client-side only: the backend keeps no session beyond the token.
pub fn logout(client: &ApiClient) -> ApiResult<()> {
    client.clear_token()
}

pub async fn verify_email(client: &ApiClient, code: &str) -> ApiResult<()> {
    client
        .post_unit(
            "/accounts/users/verify-email/",
            &VerifyEmailRequest {
                verification_code: code.to_string(),
            },
            "Invalid verification code",
        )
        .await
}

pub async fn resend_verification_code(client: &ApiClient) -> ApiResult<()> {
    client
        .get_value("/accounts/users/verify-email/", "Failed to resend code")
        .await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub message: String,
    pub user: User,
}

pub async fn update_profile(
    client: &ApiClient,
    payload: &UpdateProfileRequest,
) -> ApiResult<ProfileUpdate> {
    client
        .patch("/accounts/users/update/", payload, "Failed to update profile")
        .await
}

#[derive(Debug, Deserialize)]
struct PasswordChanged {
    #[allow(dead_code)]
    message: String,
    new_token: String,
}

/// The server rotates the token on password change; the new one replaces
/// the stored session token so follow-up calls keep working.
pub async fn change_password(
    client: &ApiClient,
    payload: &ChangePasswordRequest,
) -> ApiResult<()> {
    let changed: PasswordChanged = client
        .post(
            "/accounts/users/change-password/",
            payload,
            "Failed to change password",
        )
        .await?;
    client.store_token(&changed.new_token)?;
    Ok(())
}

/// Degrades to zeroed stats on failure: the dashboard renders either way.
pub async fn dashboard_stats(client: &ApiClient) -> DashboardStats {
    match client
        .get("/accounts/users/dashboard-stats/", "Failed to fetch dashboard stats")
        .await
    {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(error = %err, "dashboard stats fetch failed");
            DashboardStats::default()
        }
    }
}

pub async fn referral_stats(client: &ApiClient) -> ReferralStats {
    match client
        .get("/accounts/users/referral-stats/", "Failed to fetch referral stats")
        .await
    {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(error = %err, "referral stats fetch failed");
            ReferralStats::default()
        }
    }
}

pub async fn referrals(client: &ApiClient, query: &ReferralQuery) -> ApiResult<ReferralList> {
    client
        .get_query(
            "/accounts/users/referrals/",
            &query.to_pairs(),
            "Failed to fetch referrals",
        )
        .await
}

pub async fn commission_history(
    client: &ApiClient,
    query: &ReferralQuery,
) -> ApiResult<CommissionList> {
    client
        .get_query(
            "/accounts/users/commissions/",
            &query.to_pairs(),
            "Failed to fetch commission history",
        )
        .await
}

fn is_e164(phone: &str) -> bool {
    let Some(digits) = phone.strip_prefix('+') else {
        return false;
    };
    (10..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e164_validation() {
        assert!(is_e164("+254712345678"));
        assert!(is_e164("+12025550123"));
        assert!(!is_e164("0712345678"));
        assert!(!is_e164("+2547"));
        assert!(!is_e164("+2547123456789012345"));
        assert!(!is_e164("+2547a2345678"));
    }

    // Registration/login responses send a trimmed user body without the
    // marketer/verification flags; the model must default them.
    #[test]
    fn trimmed_user_body_decodes() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "username": "amina",
            "email": "amina@example.com",
            "phone_number": "+254712345678",
            "referral_code": "AMINA1"
        }))
        .unwrap();
        assert!(!user.is_marketer);
        assert!(!user.is_email_verified);
    }
}
