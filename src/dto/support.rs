use reqwest::multipart::Form;
use serde::Serialize;

use super::FileUpload;
use crate::error::ApiResult;

#[derive(Debug, Clone, Default)]
pub struct SupportQuery {
    pub search: Option<String>,
    pub page: Option<i64>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub user_id: Option<i64>,
}

impl SupportQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        // "all" is the UI's no-filter sentinel, not a server value.
        if let Some(category) = self.category.as_ref().filter(|c| *c != "all") {
            pairs.push(("category", category.clone()));
        }
        if let Some(priority) = self.priority.as_ref().filter(|p| *p != "all") {
            pairs.push(("priority", priority.clone()));
        }
        if let Some(user_id) = self.user_id {
            pairs.push(("user_id", user_id.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct NewSupportMessage {
    pub content: String,
    pub image: Option<FileUpload>,
}

impl NewSupportMessage {
    pub(crate) fn into_form(self) -> ApiResult<Form> {
        let mut form = Form::new().text("content", self.content);
        if let Some(image) = self.image {
            form = form.part("image", image.into_part()?);
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment: Option<i64>,
}
