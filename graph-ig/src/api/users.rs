//! IG User operations.

use crate::client::InstagramApi;
use crate::envelope::DataList;
use crate::query::{QueryBuilder, field_selector};
use crate::types::{BusinessDiscovery, Insight, Media, PageIgUser, Story, TaggedMedia, UserProfile};
use crate::Result;

/// Parameters for [`InstagramApi::get_user`].
#[derive(Debug, Clone)]
pub struct GetUserRequest {
    /// The IG User ID.
    pub user_id: u64,
    /// Fields to include in the response.
    pub fields: Vec<String>,
    /// Optional per-call token override.
    pub access_token: Option<String>,
}

/// Parameters for [`InstagramApi::get_business_discovery`].
#[derive(Debug, Clone)]
pub struct GetBusinessDiscoveryRequest {
    /// The IG User performing the query.
    pub user_id: u64,
    /// Username of the Business or Creator account being looked up.
    pub username: String,
    /// Fields to include for the discovered account.
    pub fields: Vec<String>,
}

/// Parameters for [`InstagramApi::get_user_insights`].
#[derive(Debug, Clone)]
pub struct GetUserInsightsRequest {
    /// The IG User ID.
    pub user_id: u64,
    /// Metrics to return.
    pub metrics: Vec<String>,
    /// A period compatible with the requested metrics.
    pub period: String,
    /// Start of the range, Unix timestamp.
    pub since: Option<u64>,
    /// End of the range, Unix timestamp.
    pub until: Option<u64>,
}

/// Parameters for [`InstagramApi::get_user_media`].
#[derive(Debug, Clone)]
pub struct GetUserMediaRequest {
    /// The IG User ID.
    pub user_id: u64,
}

/// Parameters for [`InstagramApi::get_live_media`].
#[derive(Debug, Clone)]
pub struct GetLiveMediaRequest {
    /// The IG User ID.
    pub user_id: u64,
    /// Fields to include for each live IG Media.
    pub fields: Vec<String>,
    /// Start of the range, Unix timestamp.
    pub since: Option<u64>,
    /// End of the range, Unix timestamp.
    pub until: Option<u64>,
}

/// Parameters for [`InstagramApi::get_stories`].
#[derive(Debug, Clone)]
pub struct GetStoriesRequest {
    /// The IG User ID.
    pub user_id: u64,
}

/// Parameters for [`InstagramApi::get_tagged_media`].
#[derive(Debug, Clone)]
pub struct GetTaggedMediaRequest {
    /// The IG User ID.
    pub user_id: u64,
    /// Fields to include for each tagged IG Media.
    pub fields: Vec<String>,
}

/// Parameters for [`InstagramApi::get_page_ig_user`].
#[derive(Debug, Clone)]
pub struct GetPageIgUserRequest {
    /// The Facebook Page ID.
    pub page_id: u64,
    /// Fields to include; defaults to `instagram_business_account`.
    pub fields: Vec<String>,
}

impl InstagramApi {
    /// Get data for an Instagram Business or Creator account.
    pub async fn get_user(&self, request: GetUserRequest) -> Result<UserProfile> {
        let path = QueryBuilder::new()
            .push_list("fields", &request.fields)
            .push_opt("access_token", request.access_token.as_deref())
            .append_to(&request.user_id.to_string());
        self.get_json(&path).await
    }

    /// Get data about another Business or Creator account by username.
    pub async fn get_business_discovery(
        &self,
        request: GetBusinessDiscoveryRequest,
    ) -> Result<BusinessDiscovery> {
        let selector = field_selector(
            "business_discovery",
            "username",
            &request.username,
            &request.fields,
        );
        let path = QueryBuilder::new()
            .push("fields", selector)
            .append_to(&request.user_id.to_string());
        self.get_json(&path).await
    }

    /// Get insights on an IG User.
    pub async fn get_user_insights(
        &self,
        request: GetUserInsightsRequest,
    ) -> Result<DataList<Insight>> {
        let path = QueryBuilder::new()
            .push_list("metric", &request.metrics)
            .push("period", &request.period)
            .push_opt("since", request.since)
            .push_opt("until", request.until)
            .append_to(&format!("{}/insights", request.user_id));
        self.get_json(&path).await
    }

    /// Get the collection of IG Media on an IG User.
    pub async fn get_user_media(&self, request: GetUserMediaRequest) -> Result<DataList<Media>> {
        self.get_json(&format!("{}/media", request.user_id)).await
    }

    /// Get the live video IG Media on an IG User.
    pub async fn get_live_media(&self, request: GetLiveMediaRequest) -> Result<DataList<Media>> {
        let path = QueryBuilder::new()
            .push_list("fields", &request.fields)
            .push_opt("since", request.since)
            .push_opt("until", request.until)
            .append_to(&format!("{}/live_media", request.user_id));
        self.get_json(&path).await
    }

    /// Get the story IG Media objects on an IG User.
    pub async fn get_stories(&self, request: GetStoriesRequest) -> Result<DataList<Story>> {
        self.get_json(&format!("{}/stories", request.user_id)).await
    }

    /// Get the IG Media objects the user has been tagged in.
    pub async fn get_tagged_media(
        &self,
        request: GetTaggedMediaRequest,
    ) -> Result<DataList<TaggedMedia>> {
        let path = QueryBuilder::new()
            .push_list("fields", &request.fields)
            .append_to(&format!("{}/tags", request.user_id));
        self.get_json(&path).await
    }

    /// Get the Instagram Business Account connected to a Facebook Page.
    pub async fn get_page_ig_user(&self, request: GetPageIgUserRequest) -> Result<PageIgUser> {
        let fields = if request.fields.is_empty() {
            vec!["instagram_business_account".to_string()]
        } else {
            request.fields
        };
        let path = QueryBuilder::new()
            .push_list("fields", &fields)
            .append_to(&request.page_id.to_string());
        self.get_json(&path).await
    }
}

