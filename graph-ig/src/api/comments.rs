//! IG Comment operations.

use crate::client::InstagramApi;
use crate::query::QueryBuilder;
use crate::types::{Comment, CommentReply};
use crate::Result;

/// Parameters for [`InstagramApi::get_comment`].
#[derive(Debug, Clone)]
pub struct GetCommentRequest {
    /// The IG Comment ID.
    pub comment_id: u64,
    /// Fields to include in the response.
    pub fields: Vec<String>,
}

/// Parameters for [`InstagramApi::set_comment_visibility`].
#[derive(Debug, Clone)]
pub struct SetCommentVisibilityRequest {
    /// The IG Comment ID.
    pub comment_id: u64,
    /// `true` hides the comment, `false` shows it again.
    pub hide: bool,
}

/// Parameters for [`InstagramApi::delete_comment`].
#[derive(Debug, Clone)]
pub struct DeleteCommentRequest {
    /// The IG Comment ID.
    pub comment_id: u64,
}

/// Parameters for [`InstagramApi::reply_to_comment`].
#[derive(Debug, Clone)]
pub struct ReplyToCommentRequest {
    /// The IG Comment ID being replied to.
    pub comment_id: u64,
    /// Reply text.
    pub message: String,
}

/// Parameters for [`InstagramApi::get_comment_replies`].
#[derive(Debug, Clone)]
pub struct GetCommentRepliesRequest {
    /// The IG Comment ID.
    pub comment_id: u64,
}

impl InstagramApi {
    /// Get an IG Comment.
    pub async fn get_comment(&self, request: GetCommentRequest) -> Result<Comment> {
        let path = QueryBuilder::new()
            .push_list("fields", &request.fields)
            .append_to(&request.comment_id.to_string());
        self.get_json(&path).await
    }

    /// Hide or unhide a comment on an IG Media. Returns the remote
    /// success flag.
    pub async fn set_comment_visibility(
        &self,
        request: SetCommentVisibilityRequest,
    ) -> Result<bool> {
        let path = QueryBuilder::new()
            .push("hide", request.hide)
            .append_to(&request.comment_id.to_string());
        self.post_success(&path).await
    }

    /// Delete a comment on an IG Media. Returns the remote success flag.
    pub async fn delete_comment(&self, request: DeleteCommentRequest) -> Result<bool> {
        self.delete_success(&request.comment_id.to_string()).await
    }

    /// Reply to a comment on an IG Media. Returns the ID of the created
    /// reply.
    pub async fn reply_to_comment(&self, request: ReplyToCommentRequest) -> Result<String> {
        let path = QueryBuilder::new()
            .push_encoded("message", &request.message)
            .append_to(&format!("{}/replies", request.comment_id));
        self.post_id(&path).await
    }

    /// Get all replies below a comment.
    pub async fn get_comment_replies(
        &self,
        request: GetCommentRepliesRequest,
    ) -> Result<Vec<CommentReply>> {
        self.get_data(&format!("{}/replies", request.comment_id))
            .await
    }
}
