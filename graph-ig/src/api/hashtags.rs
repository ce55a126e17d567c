//! IG Hashtag operations.

use crate::client::InstagramApi;
use crate::envelope::DataList;
use crate::query::QueryBuilder;
use crate::types::{Hashtag, Media};
use crate::{Result, TransportError};

/// Parameters for [`InstagramApi::search_hashtag`].
#[derive(Debug, Clone)]
pub struct SearchHashtagRequest {
    /// The IG User performing the query.
    pub user_id: u64,
    /// Hashtag name to look up, without the leading `#`.
    pub query: String,
}

/// Parameters for [`InstagramApi::get_hashtag`].
#[derive(Debug, Clone)]
pub struct GetHashtagRequest {
    /// The IG Hashtag ID.
    pub hashtag_id: u64,
    /// Fields to include; defaults to `id,name` when empty.
    pub fields: Vec<String>,
}

/// Parameters for [`InstagramApi::get_hashtag_recent_media`].
#[derive(Debug, Clone)]
pub struct GetHashtagRecentMediaRequest {
    /// The IG Hashtag ID.
    pub hashtag_id: u64,
    /// The IG User performing the query.
    pub user_id: u64,
    /// Fields to include; defaults to `id` when empty.
    pub fields: Vec<String>,
}

/// Parameters for [`InstagramApi::get_hashtag_top_media`].
#[derive(Debug, Clone)]
pub struct GetHashtagTopMediaRequest {
    /// The IG Hashtag ID.
    pub hashtag_id: u64,
    /// The IG User performing the query.
    pub user_id: u64,
    /// Fields to include in the response.
    pub fields: Vec<String>,
}

/// Parameters for [`InstagramApi::get_recently_searched_hashtags`].
#[derive(Debug, Clone)]
pub struct GetRecentlySearchedHashtagsRequest {
    /// The IG User ID.
    pub user_id: u64,
    /// Results per page (max 30); defaults to 25.
    pub limit: Option<u32>,
}

impl InstagramApi {
    /// Look up a hashtag's ID by name. Returns the ID of the first match.
    pub async fn search_hashtag(&self, request: SearchHashtagRequest) -> Result<String> {
        let path = QueryBuilder::new()
            .push("user_id", request.user_id)
            .push_encoded("q", &request.query)
            .append_to("ig_hashtag_search");
        let matches: Vec<Hashtag> = self.get_data(&path).await?;
        matches
            .into_iter()
            .next()
            .map(|hashtag| hashtag.id)
            .ok_or_else(|| {
                TransportError::Json("hashtag search returned an empty data array".to_string())
                    .into()
            })
    }

    /// Get information about an IG Hashtag.
    pub async fn get_hashtag(&self, request: GetHashtagRequest) -> Result<Hashtag> {
        let fields = if request.fields.is_empty() {
            vec!["id".to_string(), "name".to_string()]
        } else {
            request.fields
        };
        let path = QueryBuilder::new()
            .push_list("fields", &fields)
            .append_to(&request.hashtag_id.to_string());
        self.get_json(&path).await
    }

    /// Get the most recently published media tagged with a hashtag.
    pub async fn get_hashtag_recent_media(
        &self,
        request: GetHashtagRecentMediaRequest,
    ) -> Result<Vec<Media>> {
        let fields = if request.fields.is_empty() {
            vec!["id".to_string()]
        } else {
            request.fields
        };
        let path = QueryBuilder::new()
            .push("user_id", request.user_id)
            .push_list("fields", &fields)
            .append_to(&format!("{}/recent_media", request.hashtag_id));
        self.get_data(&path).await
    }

    /// Get the most popular media tagged with a hashtag.
    pub async fn get_hashtag_top_media(
        &self,
        request: GetHashtagTopMediaRequest,
    ) -> Result<DataList<Media>> {
        let path = QueryBuilder::new()
            .push("user_id", request.user_id)
            .push_list("fields", &request.fields)
            .append_to(&format!("{}/top_media", request.hashtag_id));
        self.get_json(&path).await
    }

    /// Get the hashtags an IG User queried within the last 7 days.
    pub async fn get_recently_searched_hashtags(
        &self,
        request: GetRecentlySearchedHashtagsRequest,
    ) -> Result<DataList<Hashtag>> {
        let path = QueryBuilder::new()
            .push("limit", request.limit.unwrap_or(25))
            .append_to(&format!("{}/recently_searched_hashtags", request.user_id));
        self.get_json(&path).await
    }
}
