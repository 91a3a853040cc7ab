use bytes::Bytes;

use crate::client::ApiClient;
use crate::dto::adverts::{AdvertBoard, AdvertSubmissionForm, SubmissionHistory};
use crate::error::ApiResult;
use crate::models::Submission;

pub async fn adverts(client: &ApiClient) -> ApiResult<AdvertBoard> {
    client.get("/adverts/", "Failed to fetch adverts").await
}

/// Raw advert media for local viewing before submission.
pub async fn download_advert(client: &ApiClient, advert_id: i64) -> ApiResult<Bytes> {
    client
        .get_bytes(
            &format!("/adverts/{advert_id}/download/"),
            "Failed to download advert",
        )
        .await
}

pub async fn submit_advert(
    client: &ApiClient,
    form: AdvertSubmissionForm,
) -> ApiResult<Submission> {
    client
        .post_multipart("/adverts/submit/", form.into_form()?, "Failed to submit advert")
        .await
}

pub async fn submissions(client: &ApiClient) -> ApiResult<SubmissionHistory> {
    client
        .get("/submissions/", "Failed to fetch submission history")
        .await
}
