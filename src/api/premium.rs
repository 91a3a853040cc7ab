use crate::client::ApiClient;
use crate::dto::packages::ClaimResponse;
use crate::dto::premium::{AgentPurchaseRequest, AgentPurchaseResponse, ClaimBonusRequest};
use crate::error::ApiResult;
use crate::models::{AgentPurchase, AgentVerificationPackage, CashbackBonus, WeeklyBonus};

pub async fn agent_packages(client: &ApiClient) -> ApiResult<Vec<AgentVerificationPackage>> {
    let mut packages: Vec<AgentVerificationPackage> = client
        .get("/premium/packages/", "Failed to fetch agent packages")
        .await?;
    for package in &mut packages {
        package.image = client.media_url(&package.image);
    }
    Ok(packages)
}

pub async fn purchase_agent_package(
    client: &ApiClient,
    package_id: i64,
) -> ApiResult<AgentPurchaseResponse> {
    client
        .post(
            "/premium/purchase/",
            &AgentPurchaseRequest { package: package_id },
            "Failed to purchase package",
        )
        .await
}

pub async fn agent_purchases(client: &ApiClient) -> ApiResult<Vec<AgentPurchase>> {
    client
        .get("/premium/purchases/", "Failed to fetch agent purchases")
        .await
}

pub async fn cashback_bonuses(client: &ApiClient) -> ApiResult<Vec<CashbackBonus>> {
    client
        .get("/premium/cashback/", "Failed to fetch cashback bonuses")
        .await
}

pub async fn weekly_bonuses(client: &ApiClient) -> ApiResult<Vec<WeeklyBonus>> {
    client
        .get("/premium/weekly-bonus/", "Failed to fetch weekly bonuses")
        .await
}

pub async fn claim_cashback_bonus(client: &ApiClient, bonus_id: i64) -> ApiResult<ClaimResponse> {
    client
        .post(
            "/premium/cashback/claim/",
            &ClaimBonusRequest { bonus_id },
            "Failed to claim cashback bonus",
        )
        .await
}

pub async fn claim_weekly_bonus(client: &ApiClient, bonus_id: i64) -> ApiResult<ClaimResponse> {
    client
        .post(
            "/premium/weekly-bonus/claim/",
            &ClaimBonusRequest { bonus_id },
            "Failed to claim weekly bonus",
        )
        .await
}
