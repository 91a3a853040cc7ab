use crate::client::ApiClient;
use crate::dto::store::{
    AddToCartRequest, Cart, CartMutation, CheckoutRequest, CouponValidation, ProductPage,
    ProductQuery, RemoveCartItemRequest, UpdateCartItemRequest, ValidateCouponRequest,
};
use crate::error::ApiResult;
use crate::models::{Category, Order, Product};
use crate::response::Paginated;

pub async fn featured_products(client: &ApiClient) -> ApiResult<Vec<Product>> {
    let mut products: Vec<Product> = client
        .get("/dashboard/products/", "Failed to fetch featured products")
        .await?;
    products.iter_mut().for_each(|p| absolutize_images(client, p));
    Ok(products)
}

pub async fn all_products(client: &ApiClient) -> ApiResult<Vec<Product>> {
    let mut products: Vec<Product> = client
        .get("/dashboard/all-products/", "Failed to fetch products")
        .await?;
    products.iter_mut().for_each(|p| absolutize_images(client, p));
    Ok(products)
}

/// Filtered/paginated product listing. The endpoint answers with either the
/// paginated envelope or a bare array depending on the filters, so decode
/// through [`Paginated`].
pub async fn products(client: &ApiClient, query: &ProductQuery) -> ApiResult<ProductPage> {
    let value = client
        .get_value_query(
            "/dashboard/all-products/",
            &query.to_pairs(),
            "Failed to fetch products",
        )
        .await?;
    let page = Paginated::<Product>::from_value(value)?;
    let mut results = page.results;
    results.iter_mut().for_each(|p| absolutize_images(client, p));
    Ok(ProductPage {
        results,
        count: page.count,
        next: page.next,
        previous: page.previous,
    })
}

pub async fn product(client: &ApiClient, id: i64) -> ApiResult<Product> {
    let mut product: Product = client
        .get(&format!("/dashboard/products/{id}/"), "Failed to fetch product")
        .await?;
    absolutize_images(client, &mut product);
    Ok(product)
}

pub async fn categories(client: &ApiClient) -> ApiResult<Vec<Category>> {
    client
        .get("/dashboard/categories/", "Failed to fetch categories")
        .await
}

pub async fn cart(client: &ApiClient) -> ApiResult<Cart> {
    let mut cart: Cart = client.get("/dashboard/cart/", "Failed to fetch cart").await?;
    cart.items
        .iter_mut()
        .for_each(|item| absolutize_images(client, &mut item.product));
    Ok(cart)
}

/// Item count for the cart badge; an unreachable cart service shows as zero
/// rather than an error state.
pub async fn cart_count(client: &ApiClient) -> i64 {
    match cart(client).await {
        Ok(cart) => cart.items.iter().map(|item| item.quantity).sum(),
        Err(err) => {
            tracing::warn!(error = %err, "cart unavailable, reporting empty");
            0
        }
    }
}

pub async fn add_to_cart(client: &ApiClient, payload: &AddToCartRequest) -> ApiResult<CartMutation> {
    client
        .post("/dashboard/cart/add/", payload, "Failed to add to cart")
        .await
}

pub async fn update_cart_item(
    client: &ApiClient,
    payload: &UpdateCartItemRequest,
) -> ApiResult<CartMutation> {
    client
        .post("/dashboard/cart/update/", payload, "Failed to update cart")
        .await
}

pub async fn remove_from_cart(client: &ApiClient, cart_item_id: i64) -> ApiResult<CartMutation> {
    client
        .post(
            "/dashboard/cart/remove/",
            &RemoveCartItemRequest { cart_item_id },
            "Failed to remove item",
        )
        .await
}

pub async fn checkout(client: &ApiClient, payload: &CheckoutRequest) -> ApiResult<Order> {
    client
        .post("/dashboard/checkout/", payload, "Failed to create order")
        .await
}

pub async fn validate_coupon(client: &ApiClient, code: &str) -> ApiResult<CouponValidation> {
    client
        .post(
            "/dashboard/coupon/validate/",
            &ValidateCouponRequest {
                coupon_code: code.to_string(),
            },
            "Invalid coupon code",
        )
        .await
}

fn absolutize_images(client: &ApiClient, product: &mut Product) {
    product.main_image = client.media_url(&product.main_image);
    for sub in &mut product.sub_images {
        sub.image.file = client.media_url(&sub.image.file);
    }
}
