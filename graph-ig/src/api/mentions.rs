//! @Mention operations.

use crate::client::InstagramApi;
use crate::envelope::IdResponse;
use crate::query::{QueryBuilder, field_selector};
use crate::types::{MentionedComment, MentionedMedia};
use crate::Result;

/// Parameters for [`InstagramApi::create_mention_reply`].
#[derive(Debug, Clone)]
pub struct CreateMentionReplyRequest {
    /// The IG User who was @mentioned.
    pub user_id: u64,
    /// The media ID from the mention notification payload.
    pub media_id: u64,
    /// Comment to reply to; when unset, the comment is created on the
    /// media object itself.
    pub comment_id: Option<u64>,
    /// Reply text.
    pub message: String,
}

/// Parameters for [`InstagramApi::get_mentioned_comment`].
#[derive(Debug, Clone)]
pub struct GetMentionedCommentRequest {
    /// The IG User who was @mentioned.
    pub user_id: u64,
    /// The comment ID from the mention notification payload.
    pub comment_id: u64,
    /// Comment fields to include.
    pub fields: Vec<String>,
}

/// Parameters for [`InstagramApi::get_mentioned_media`].
#[derive(Debug, Clone)]
pub struct GetMentionedMediaRequest {
    /// The IG User who was @mentioned.
    pub user_id: u64,
    /// The media ID from the mention notification payload.
    pub media_id: u64,
    /// Media fields to include.
    pub fields: Vec<String>,
}

impl InstagramApi {
    /// Reply to a media object or comment the user was @mentioned in.
    /// Returns the full creation envelope.
    pub async fn create_mention_reply(
        &self,
        request: CreateMentionReplyRequest,
    ) -> Result<IdResponse> {
        let path = QueryBuilder::new()
            .push("media_id", request.media_id)
            .push_opt("comment_id", request.comment_id)
            .push_encoded("message", &request.message)
            .append_to(&format!("{}/mentions", request.user_id));
        self.post_json(&path).await
    }

    /// Get a comment the user was @mentioned in.
    pub async fn get_mentioned_comment(
        &self,
        request: GetMentionedCommentRequest,
    ) -> Result<MentionedComment> {
        let selector = field_selector(
            "mentioned_comment",
            "comment_id",
            &request.comment_id.to_string(),
            &request.fields,
        );
        let path = QueryBuilder::new()
            .push("fields", selector)
            .append_to(&request.user_id.to_string());
        self.get_json(&path).await
    }

    /// Get a media object the user was @mentioned in by caption.
    pub async fn get_mentioned_media(
        &self,
        request: GetMentionedMediaRequest,
    ) -> Result<MentionedMedia> {
        let selector = field_selector(
            "mentioned_media",
            "media_id",
            &request.media_id.to_string(),
            &request.fields,
        );
        let path = QueryBuilder::new()
            .push("fields", selector)
            .append_to(&request.user_id.to_string());
        self.get_json(&path).await
    }
}
