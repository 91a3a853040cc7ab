use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub referral_code: String,
    #[serde(default)]
    pub is_marketer: bool,
    #[serde(default)]
    pub is_verified_agent: bool,
    #[serde(default)]
    pub is_email_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentPlanOption {
    pub months: u32,
    pub monthly_payment: Decimal,
    pub deposit_required: Decimal,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiscountType {
    Percent,
    Fixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub id: i64,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i64,
    pub image: ImageFile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFile {
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub sub_images: Vec<ProductImage>,
    pub category: Category,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub specifications: Option<String>,
    #[serde(default)]
    pub supports_installments: bool,
    #[serde(default)]
    pub installment_plans: Vec<InstallmentPlanOption>,
    #[serde(default)]
    pub available_coupons: Vec<Coupon>,
    #[serde(default)]
    pub discounted_price: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub product: Product,
    pub quantity: i64,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    pub deposit_balance: Decimal,
    pub views_earnings_balance: Decimal,
    pub referral_balance: Decimal,
    #[serde(default)]
    pub total_balance: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Commission,
    Purchase,
    Refund,
    InstallmentPayment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceType {
    Deposit,
    ViewsEarnings,
    Referral,
    Main,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionMetadata {
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub installment_id: Option<i64>,
    #[serde(default)]
    pub commission_source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub description: String,
    pub status: TransactionStatus,
    pub balance_type: BalanceType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<TransactionMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_earnings: Decimal,
    pub active_package: Option<String>,
    pub ads_viewed_today: i64,
    pub referrals_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub validity_days: i64,
    pub rate_per_view: Decimal,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub bonus_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub package: Package,
    pub purchase_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub days_remaining: i64,
    #[serde(default)]
    pub bonus_amount: Option<Decimal>,
    #[serde(default)]
    pub claim_cost: Option<Decimal>,
    #[serde(default)]
    pub claimed: bool,
}

/// The currently active package, as the ads/packages pages display it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPackage {
    pub name: String,
    pub rate_per_view: Decimal,
    pub expiry_date: DateTime<Utc>,
    pub days_remaining: i64,
    #[serde(default)]
    pub bonus_amount: Option<Decimal>,
    #[serde(default)]
    pub claim_cost: Option<Decimal>,
    #[serde(default)]
    pub claimed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advert {
    pub id: i64,
    pub title: String,
    pub file: String,
    pub rate_category: Decimal,
    pub upload_date: DateTime<Utc>,
    #[serde(default)]
    pub can_submit: bool,
    #[serde(default)]
    pub has_submitted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub user: i64,
    pub advert: i64,
    pub advert_title: String,
    pub views_count: i64,
    pub screenshot: String,
    pub earnings: Decimal,
    pub submission_date: DateTime<Utc>,
}

// The stats endpoint does not always send the referral-link fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferralStats {
    pub total_referrals: i64,
    pub active_referrals: i64,
    pub total_commission: Decimal,
    pub this_month_commission: Decimal,
    pub pending_commission: Decimal,
    pub referral_code: String,
    pub referral_link: String,
    pub commission_rate: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralStatus {
    Pending,
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferredUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub date_joined: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Referral {
    pub id: i64,
    pub referred_user: ReferredUser,
    pub commission_earned: Decimal,
    pub status: ReferralStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionType {
    SignupBonus,
    PurchaseCommission,
    ActivityBonus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionStatus {
    Pending,
    Approved,
    Paid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionTransaction {
    pub id: i64,
    pub referral: i64,
    pub transaction_type: CommissionType,
    pub amount: Decimal,
    pub description: String,
    pub status: CommissionStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Statuses worth polling the tracking endpoint for.
    pub fn is_in_transit(self) -> bool {
        matches!(self, OrderStatus::Processing | OrderStatus::Shipped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Full,
    Installment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemProduct {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub main_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub product: OrderItemProduct,
    pub quantity: i64,
    pub price: Decimal,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstallmentStatus {
    Active,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentPaymentSummary {
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentOrder {
    pub id: i64,
    pub order: i64,
    pub total_amount: Decimal,
    pub deposit_amount: Decimal,
    pub remaining_amount: Decimal,
    pub monthly_payment: Decimal,
    pub months: u32,
    pub status: InstallmentStatus,
    #[serde(default)]
    pub next_payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub initial_deposit: Option<Decimal>,
    #[serde(default)]
    pub payments: Vec<InstallmentPaymentSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentPayment {
    pub id: i64,
    pub installment_order: i64,
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LipaStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LipaRegistration {
    pub id: i64,
    pub user: i64,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub status: LipaStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub id_front: Option<String>,
    #[serde(default)]
    pub id_back: Option<String>,
    #[serde(default)]
    pub passport_photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user: i64,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub payment_type: PaymentType,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub delivery_fee: Decimal,
    #[serde(default)]
    pub coupon_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub installment_order: Option<InstallmentOrder>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub discounted_total: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryGuy {
    pub name: String,
    pub vehicle_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackingInfo {
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub estimated_delivery: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_minutes: Option<u64>,
    #[serde(default)]
    pub delivery_guy: Option<DeliveryGuy>,
    #[serde(default)]
    pub history: Vec<TrackingEvent>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub preparation_steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub action: String,
    pub action_display: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub related_object_detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentVerificationPackage {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub validity_days: i64,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgentPurchaseStatus {
    Active,
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPurchase {
    pub id: i64,
    pub package: AgentVerificationPackage,
    pub purchase_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub status: AgentPurchaseStatus,
    pub days_remaining: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashbackBonus {
    pub id: i64,
    pub user: i64,
    pub amount: Decimal,
    pub claim_cost: Decimal,
    pub claimed: bool,
    #[serde(default)]
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyBonus {
    pub id: i64,
    pub user: i64,
    pub amount: Decimal,
    pub claim_cost: Decimal,
    pub claimed: bool,
    #[serde(default)]
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub week_start: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub referral_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportMessage {
    pub id: i64,
    pub content: String,
    pub user: SupportUser,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub like_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentionedUser {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportComment {
    pub id: i64,
    pub message: i64,
    pub user: SupportUser,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub parent_comment: Option<i64>,
    #[serde(default)]
    pub mentioned_users: Vec<MentionedUser>,
}
