use crate::client::ApiClient;
use crate::dto::support::{NewComment, NewSupportMessage, SupportQuery};
use crate::error::{ApiError, ApiResult};
use crate::models::{MentionedUser, SupportComment, SupportMessage};
use crate::response::Paginated;

pub async fn messages(
    client: &ApiClient,
    query: &SupportQuery,
) -> ApiResult<Paginated<SupportMessage>> {
    let value = client
        .get_value_query(
            "/support/messages/",
            &query.to_pairs(),
            "Failed to fetch support messages",
        )
        .await?;
    Paginated::from_value(value)
}

pub async fn create_message(
    client: &ApiClient,
    message: NewSupportMessage,
) -> ApiResult<SupportMessage> {
    client
        .post_multipart(
            "/support/messages/",
            message.into_form()?,
            "Failed to create support message",
        )
        .await
}

pub async fn like_message(client: &ApiClient, message_id: i64) -> ApiResult<()> {
    client
        .post_unit(
            &format!("/support/messages/{message_id}/like/"),
            &serde_json::json!({ "message": message_id }),
            "Failed to like message",
        )
        .await
}

pub async fn comments(
    client: &ApiClient,
    message_id: i64,
    page: Option<i64>,
) -> ApiResult<Paginated<SupportComment>> {
    let mut pairs = Vec::new();
    if let Some(page) = page {
        pairs.push(("page", page.to_string()));
    }
    let value = client
        .get_value_query(
            &format!("/support/messages/{message_id}/comment/"),
            &pairs,
            "Failed to fetch comments",
        )
        .await?;
    Paginated::from_value(value)
}

pub async fn create_comment(
    client: &ApiClient,
    message_id: i64,
    payload: &NewComment,
) -> ApiResult<SupportComment> {
    if payload.content.trim().is_empty() {
        return Err(ApiError::Validation(
            "Comment content cannot be empty".to_string(),
        ));
    }
    client
        .post(
            &format!("/support/messages/{message_id}/comment/"),
            payload,
            "Failed to create comment",
        )
        .await
}

/// Username search for @-mentions in comments.
pub async fn users(client: &ApiClient, search: &str) -> ApiResult<Vec<MentionedUser>> {
    client
        .get_query(
            "/support/users/",
            &[("search", search.to_string())],
            "Failed to fetch users",
        )
        .await
}
