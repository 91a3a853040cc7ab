use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CartItem, DiscountType, Product};

#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ProductQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        pairs
    }
}

#[derive(Debug, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddToCartRequest {
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateCartItemRequest {
    pub cart_item_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RemoveCartItemRequest {
    pub cart_item_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CartMutation {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub item: Option<CartItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Full,
    Installment,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    pub address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<Decimal>,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_months: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ValidateCouponRequest {
    pub coupon_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CouponValidation {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ProductPage {
    pub results: Vec<Product>,
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
}
