use chrono::{DateTime, NaiveDate, Utc};
use reqwest::multipart::Form;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FileUpload;
use crate::error::ApiResult;
use crate::models::{InstallmentOrder, InstallmentPaymentSummary, InstallmentStatus};

/// KYC registration payload: three document uploads plus the personal
/// details, sent as one multipart form.
#[derive(Debug, Clone)]
pub struct LipaRegistrationForm {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub id_front: FileUpload,
    pub id_back: FileUpload,
    pub passport_photo: FileUpload,
}

impl LipaRegistrationForm {
    pub(crate) fn into_form(self) -> ApiResult<Form> {
        Ok(Form::new()
            .text("full_name", self.full_name)
            .text("date_of_birth", self.date_of_birth.to_string())
            .text("address", self.address)
            .part("id_front", self.id_front.into_part()?)
            .part("id_back", self.id_back.into_part()?)
            .part("passport_photo", self.passport_photo.into_part()?))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallmentPaymentRequest {
    pub installment_order_id: i64,
    pub amount: Decimal,
}

/// Installment orders as the backend actually serializes them: some rows use
/// legacy field spellings (`remaining_balance`, `due_date`,
/// `installment_status`). Normalized into [`InstallmentOrder`] before
/// reaching callers.
#[derive(Debug, Deserialize)]
pub(crate) struct RawInstallmentOrder {
    pub id: i64,
    pub order: i64,
    pub total_amount: Decimal,
    pub deposit_amount: Decimal,
    #[serde(default)]
    pub remaining_amount: Option<Decimal>,
    #[serde(default)]
    pub remaining_balance: Option<Decimal>,
    pub monthly_payment: Decimal,
    pub months: u32,
    #[serde(default)]
    pub status: Option<InstallmentStatus>,
    #[serde(default)]
    pub installment_status: Option<InstallmentStatus>,
    #[serde(default)]
    pub next_payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub initial_deposit: Option<Decimal>,
    #[serde(default)]
    pub payments: Vec<InstallmentPaymentSummary>,
}

impl RawInstallmentOrder {
    pub(crate) fn normalize(self) -> InstallmentOrder {
        InstallmentOrder {
            id: self.id,
            order: self.order,
            total_amount: self.total_amount,
            deposit_amount: self.deposit_amount,
            remaining_amount: self
                .remaining_amount
                .or(self.remaining_balance)
                .unwrap_or(Decimal::ZERO),
            monthly_payment: self.monthly_payment,
            months: self.months,
            status: self
                .status
                .or(self.installment_status)
                .unwrap_or(InstallmentStatus::Active),
            next_payment_date: self.next_payment_date.or(self.due_date),
            created_at: self.created_at,
            initial_deposit: self.initial_deposit,
            payments: self.payments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_field_spellings_are_normalized() {
        let raw: RawInstallmentOrder = serde_json::from_value(json!({
            "id": 4,
            "order": 9,
            "total_amount": "1000.00",
            "deposit_amount": "400.00",
            "remaining_balance": "600.00",
            "monthly_payment": "200.00",
            "months": 3,
            "installment_status": "OVERDUE",
            "due_date": "2025-09-01T00:00:00Z",
            "created_at": "2025-08-01T00:00:00Z"
        }))
        .unwrap();
        let order = raw.normalize();
        assert_eq!(order.remaining_amount, Decimal::new(60000, 2));
        assert_eq!(order.status, InstallmentStatus::Overdue);
        assert!(order.next_payment_date.is_some());
    }

    #[test]
    fn modern_fields_win_over_legacy() {
        let raw: RawInstallmentOrder = serde_json::from_value(json!({
            "id": 4,
            "order": 9,
            "total_amount": "1000.00",
            "deposit_amount": "400.00",
            "remaining_amount": "500.00",
            "remaining_balance": "600.00",
            "monthly_payment": "200.00",
            "months": 3,
            "status": "ACTIVE",
            "created_at": "2025-08-01T00:00:00Z"
        }))
        .unwrap();
        let order = raw.normalize();
        assert_eq!(order.remaining_amount, Decimal::new(50000, 2));
        assert_eq!(order.status, InstallmentStatus::Active);
        assert!(order.next_payment_date.is_none());
    }
}
