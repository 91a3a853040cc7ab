use crate::client::ApiClient;
use crate::dto::orders::{ActivityPage, RateOrderRequest};
use crate::error::ApiResult;
use crate::models::{Activity, Order, TrackingInfo};
use crate::response::Paginated;

pub async fn orders(client: &ApiClient) -> ApiResult<Vec<Order>> {
    let mut orders: Vec<Order> = client
        .get("/dashboard/orders/", "Failed to fetch orders")
        .await?;
    for order in &mut orders {
        for item in &mut order.items {
            item.product.main_image = client.media_url(&item.product.main_image);
        }
    }
    Ok(orders)
}

pub async fn cancel_order(client: &ApiClient, order_id: i64) -> ApiResult<()> {
    client
        .post_empty_unit(
            &format!("/dashboard/orders/{order_id}/cancel/"),
            "Failed to cancel order",
        )
        .await
}

pub async fn track_order(client: &ApiClient, order_id: i64) -> ApiResult<TrackingInfo> {
    client
        .get(
            &format!("/dashboard/orders/{order_id}/track/"),
            "Failed to fetch tracking info",
        )
        .await
}

pub async fn confirm_delivery(client: &ApiClient, order_id: i64) -> ApiResult<()> {
    client
        .post_empty_unit(
            &format!("/dashboard/orders/{order_id}/confirm-delivery/"),
            "Failed to confirm delivery",
        )
        .await
}

pub async fn rate_order(client: &ApiClient, order_id: i64, rating: u8) -> ApiResult<()> {
    client
        .post_unit(
            &format!("/dashboard/orders/{order_id}/rate/"),
            &RateOrderRequest { rating },
            "Failed to submit rating",
        )
        .await
}

pub async fn recent_activities(
    client: &ApiClient,
    page: i64,
    page_size: i64,
) -> ApiResult<ActivityPage> {
    let value = client
        .get_value_query(
            "/dashboard/recent-activity/",
            &[("page", page.to_string()), ("page_size", page_size.to_string())],
            "Failed to fetch recent activities",
        )
        .await?;
    let page = Paginated::<Activity>::from_value(value)?;
    Ok(ActivityPage {
        results: page.results,
        count: page.count,
    })
}
