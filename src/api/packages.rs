use crate::client::ApiClient;
use crate::dto::packages::{
    ClaimResponse, PackageFeature, PurchasePackageRequest, PurchasePackageResponse,
};
use crate::error::ApiResult;
use crate::models::{Package, Purchase, UserPackage};

pub async fn packages(client: &ApiClient) -> ApiResult<Vec<Package>> {
    client.get("/packages/", "Failed to fetch packages").await
}

pub async fn purchase_package(
    client: &ApiClient,
    package_id: i64,
) -> ApiResult<PurchasePackageResponse> {
    client
        .post(
            "/packages/purchase/",
            &PurchasePackageRequest { package: package_id },
            "Failed to purchase package",
        )
        .await
}

pub async fn purchases(client: &ApiClient) -> ApiResult<Vec<Purchase>> {
    client
        .get("/packages/purchases/", "Failed to fetch purchases")
        .await
}

/// The active purchase, if any. Expiry is a derived state: the first
/// purchase with days remaining counts as active.
pub async fn current_package(client: &ApiClient) -> ApiResult<Option<UserPackage>> {
    let purchases = purchases(client).await?;
    Ok(purchases
        .into_iter()
        .find(|p| p.days_remaining > 0)
        .map(|p| UserPackage {
            name: p.package.name,
            rate_per_view: p.package.rate_per_view,
            expiry_date: p.expiry_date,
            days_remaining: p.days_remaining,
            bonus_amount: p.bonus_amount,
            claim_cost: p.claim_cost,
            claimed: p.claimed,
        }))
}

/// Static tier comparison content; not a backend call.
pub fn package_features() -> Vec<PackageFeature> {
    let rows = [
        ("Access to advertisements", true, true, true),
        ("Instant earnings", true, true, true),
        ("24/7 support", true, true, true),
        ("Priority ad access", false, true, true),
        ("Exclusive high-rate ads", false, false, true),
    ];
    rows.into_iter()
        .map(|(name, basic, standard, premium)| PackageFeature {
            name: name.to_string(),
            basic,
            standard,
            premium,
        })
        .collect()
}

pub async fn claim_cashback(client: &ApiClient) -> ApiResult<ClaimResponse> {
    client
        .post(
            "/packages/cashback/claim/",
            &serde_json::json!({}),
            "Failed to claim cashback",
        )
        .await
}
