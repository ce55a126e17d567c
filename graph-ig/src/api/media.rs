//! IG Media operations.

use crate::client::InstagramApi;
use crate::envelope::{DataList, IdResponse, SuccessResponse};
use crate::query::QueryBuilder;
use crate::types::{Comment, Insight, Media, MediaChild};
use crate::Result;

/// Parameters for [`InstagramApi::get_media`].
#[derive(Debug, Clone)]
pub struct GetMediaRequest {
    /// The IG Media ID.
    pub media_id: u64,
    /// Fields to include in the response.
    pub fields: Vec<String>,
}

/// Parameters for [`InstagramApi::set_comments_enabled`].
#[derive(Debug, Clone)]
pub struct SetCommentsEnabledRequest {
    /// The IG Media ID.
    pub media_id: u64,
    /// `true` enables comments, `false` disables them.
    pub comment_enabled: bool,
}

/// Parameters for [`InstagramApi::create_comment`].
#[derive(Debug, Clone)]
pub struct CreateCommentRequest {
    /// The IG Media ID to comment on.
    pub media_id: u64,
    /// Comment text.
    pub message: String,
}

/// Parameters for [`InstagramApi::get_comments`].
#[derive(Debug, Clone)]
pub struct GetCommentsRequest {
    /// The IG Media ID.
    pub media_id: u64,
}

/// Parameters for [`InstagramApi::get_media_children`].
#[derive(Debug, Clone)]
pub struct GetMediaChildrenRequest {
    /// The album IG Media ID.
    pub media_id: u64,
}

/// Parameters for [`InstagramApi::get_media_insights`].
#[derive(Debug, Clone)]
pub struct GetMediaInsightsRequest {
    /// The IG Media ID.
    pub media_id: u64,
    /// Metrics to return.
    pub metrics: Vec<String>,
    /// How to break the result set into subsets.
    pub breakdown: Option<String>,
}

impl InstagramApi {
    /// Get an IG Media object.
    pub async fn get_media(&self, request: GetMediaRequest) -> Result<Media> {
        let path = QueryBuilder::new()
            .push_list("fields", &request.fields)
            .append_to(&request.media_id.to_string());
        self.get_json(&path).await
    }

    /// Enable or disable comments on an IG Media.
    pub async fn set_comments_enabled(
        &self,
        request: SetCommentsEnabledRequest,
    ) -> Result<SuccessResponse> {
        let path = QueryBuilder::new()
            .push("comment_enabled", request.comment_enabled)
            .append_to(&request.media_id.to_string());
        self.post_json(&path).await
    }

    /// Create an IG Comment on an IG Media object.
    pub async fn create_comment(&self, request: CreateCommentRequest) -> Result<IdResponse> {
        let path = QueryBuilder::new()
            .push_encoded("message", &request.message)
            .append_to(&format!("{}/comments", request.media_id));
        self.post_json(&path).await
    }

    /// Get the comments on an IG Media object.
    pub async fn get_comments(&self, request: GetCommentsRequest) -> Result<DataList<Comment>> {
        self.get_json(&format!("{}/comments", request.media_id))
            .await
    }

    /// Get the IG Media objects on an album IG Media.
    pub async fn get_media_children(
        &self,
        request: GetMediaChildrenRequest,
    ) -> Result<DataList<MediaChild>> {
        self.get_json(&format!("{}/children", request.media_id))
            .await
    }

    /// Get insights data on an IG Media object.
    pub async fn get_media_insights(
        &self,
        request: GetMediaInsightsRequest,
    ) -> Result<DataList<Insight>> {
        let path = QueryBuilder::new()
            .push_list("metric", &request.metrics)
            .push_opt("breakdown", request.breakdown.as_deref())
            .append_to(&format!("{}/insights", request.media_id));
        self.get_json(&path).await
    }
}
