//! Content publishing operations.
//!
//! Publishing is a two-step flow: create an IG Container for the media,
//! poll its status, then publish the container. The container's status
//! transitions are owned entirely by the remote system.

use serde::Serialize;

use crate::client::InstagramApi;
use crate::envelope::IdResponse;
use crate::query::QueryBuilder;
use crate::types::{Container, PublishingLimit};
use crate::api::shopping::ProductTagSpec;
use crate::{Result, TransportError};

/// Kind of container being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
    CarouselAlbum,
    Reels,
}

impl MediaType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::CarouselAlbum => "CAROUSEL_ALBUM",
            Self::Reels => "REELS",
        }
    }
}

/// A public account to tag in the published image.
#[derive(Debug, Clone, Serialize)]
pub struct UserTagSpec {
    pub username: String,
    /// Horizontal position, 0.0..=1.0 from the left edge.
    pub x: f64,
    /// Vertical position, 0.0..=1.0 from the top edge.
    pub y: f64,
}

/// Parameters for [`InstagramApi::create_media_container`].
#[derive(Debug, Clone)]
pub struct CreateMediaContainerRequest {
    /// The app user's app-scoped user ID.
    pub user_id: u64,
    /// Caption text; may include hashtags and @mentions.
    pub caption: Option<String>,
    /// Container IDs of carousel entries, up to 10.
    pub children: Option<Vec<u64>>,
    /// Reels only: cover image for the Reels tab.
    pub cover_url: Option<String>,
    /// Required for images: path to the image.
    pub image_url: Option<String>,
    /// Whether this image or video appears in a carousel.
    pub is_carousel_item: Option<bool>,
    /// Page ID of a location to tag.
    pub location_id: Option<u64>,
    /// The type of container being created.
    pub media_type: Option<MediaType>,
    /// Product tags to attach on publish.
    pub product_tags: Option<Vec<ProductTagSpec>>,
    /// Reels only: also surface the reel in the Feed tab.
    pub share_to_feed: Option<bool>,
    /// Videos and reels: cover frame location in milliseconds.
    pub thumb_offset: Option<u64>,
    /// Accounts to tag in the image.
    pub user_tags: Option<Vec<UserTagSpec>>,
    /// Required for videos and reels: path to the video.
    pub video_url: Option<String>,
}

/// Parameters for [`InstagramApi::get_container`].
#[derive(Debug, Clone)]
pub struct GetContainerRequest {
    /// The IG Container ID.
    pub container_id: u64,
    /// Fields to include in the response.
    pub fields: Vec<String>,
}

/// Parameters for [`InstagramApi::publish_media_container`].
#[derive(Debug, Clone)]
pub struct PublishMediaContainerRequest {
    /// The app user's app-scoped user ID.
    pub user_id: u64,
    /// The container to publish.
    pub creation_id: u64,
}

/// Parameters for [`InstagramApi::get_publishing_limit`].
#[derive(Debug, Clone)]
pub struct GetPublishingLimitRequest {
    /// The IG User ID.
    pub user_id: u64,
    /// Fields to return; defaults to `quota_usage`.
    pub fields: Vec<String>,
    /// Window start, a Unix timestamp no older than 24 hours.
    pub since: Option<u64>,
}

impl InstagramApi {
    /// Create an IG Container for the post publishing flow. Returns the
    /// full creation envelope with the container ID.
    pub async fn create_media_container(
        &self,
        request: CreateMediaContainerRequest,
    ) -> Result<IdResponse> {
        let mut query = QueryBuilder::new()
            .push_opt_encoded("caption", request.caption.as_deref())
            .push_opt(
                "children",
                request.children.map(|ids| {
                    ids.iter()
                        .map(|id| id.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                }),
            )
            .push_opt("cover_url", request.cover_url.as_deref())
            .push_opt("image_url", request.image_url.as_deref())
            .push_opt("is_carousel_item", request.is_carousel_item)
            .push_opt("location_id", request.location_id)
            .push_opt("media_type", request.media_type.map(MediaType::as_str));

        if let Some(product_tags) = &request.product_tags {
            let tags = serde_json::to_string(product_tags)
                .map_err(|e| TransportError::Json(e.to_string()))?;
            query = query.push_encoded("product_tags", &tags);
        }
        query = query
            .push_opt("share_to_feed", request.share_to_feed)
            .push_opt("thumb_offset", request.thumb_offset);
        if let Some(user_tags) = &request.user_tags {
            let tags = serde_json::to_string(user_tags)
                .map_err(|e| TransportError::Json(e.to_string()))?;
            query = query.push_encoded("user_tags", &tags);
        }
        let path = query
            .push_opt("video_url", request.video_url.as_deref())
            .append_to(&format!("{}/media", request.user_id));

        self.post_json(&path).await
    }

    /// Get an IG Container.
    pub async fn get_container(&self, request: GetContainerRequest) -> Result<Container> {
        let path = QueryBuilder::new()
            .push_list("fields", &request.fields)
            .append_to(&request.container_id.to_string());
        self.get_json(&path).await
    }

    /// Publish a finished IG Container. Returns the full creation envelope
    /// with the published media ID.
    pub async fn publish_media_container(
        &self,
        request: PublishMediaContainerRequest,
    ) -> Result<IdResponse> {
        let path = QueryBuilder::new()
            .push("creation_id", request.creation_id)
            .append_to(&format!("{}/media_publish", request.user_id));
        self.post_json(&path).await
    }

    /// Get how often the user has published containers in the queried
    /// window (the last 24 hours when `since` is unset).
    pub async fn get_publishing_limit(
        &self,
        request: GetPublishingLimitRequest,
    ) -> Result<PublishingLimit> {
        let fields = if request.fields.is_empty() {
            vec!["quota_usage".to_string()]
        } else {
            request.fields
        };
        let path = QueryBuilder::new()
            .push_list("fields", &fields)
            .push_opt("since", request.since)
            .append_to(&format!("{}/content_publishing_limit", request.user_id));
        self.get_json(&path).await
    }
}
