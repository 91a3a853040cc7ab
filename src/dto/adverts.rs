use reqwest::multipart::Form;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::FileUpload;
use crate::error::ApiResult;
use crate::models::{Advert, Submission, UserPackage};

#[derive(Debug, Deserialize)]
pub struct AdvertBoard {
    pub adverts: Vec<Advert>,
    #[serde(default)]
    pub user_package: Option<UserPackage>,
}

#[derive(Debug, Clone)]
pub struct AdvertSubmissionForm {
    pub advert_id: i64,
    pub views_count: i64,
    pub screenshot: FileUpload,
}

impl AdvertSubmissionForm {
    pub(crate) fn into_form(self) -> ApiResult<Form> {
        Ok(Form::new()
            .text("advert_id", self.advert_id.to_string())
            .text("views_count", self.views_count.to_string())
            .part("screenshot", self.screenshot.into_part()?))
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmissionHistory {
    pub submissions: Vec<Submission>,
    #[serde(default)]
    pub total_earnings: Decimal,
}
