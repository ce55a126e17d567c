//! Typed projections of Graph API resources.
//!
//! All of these are read-only mirrors of remote JSON. Which fields the API
//! includes depends on the `fields` selection of the request, so everything
//! beyond the identifier is optional.

use serde::Deserialize;

use crate::envelope::DataList;

/// The Instagram account that authored a comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentAuthor {
    pub id: String,
    pub username: Option<String>,
}

/// The media object a comment was left on.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentMedia {
    pub id: String,
    pub media_product_type: Option<String>,
}

/// An IG Comment.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: Option<String>,
    pub from: Option<CommentAuthor>,
    pub username: Option<String>,
    pub hidden: Option<bool>,
    pub like_count: Option<u64>,
    pub media: Option<CommentMedia>,
    pub parent_id: Option<String>,
    pub replies: Option<DataList<Comment>>,
    pub timestamp: Option<String>,
}

/// A reply below an IG Comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentReply {
    pub id: String,
    pub text: Option<String>,
    pub timestamp: Option<String>,
}

/// Publish status of an IG Container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerStatus {
    Expired,
    Error,
    Finished,
    InProgress,
    Published,
}

/// A pending media upload unit. Status transitions are owned entirely by
/// the remote system; this client only observes them.
#[derive(Debug, Clone, Deserialize)]
pub struct Container {
    pub id: String,
    pub status: Option<String>,
    pub status_code: Option<ContainerStatus>,
}

/// An Instagram hashtag. IDs are static and global.
#[derive(Debug, Clone, Deserialize)]
pub struct Hashtag {
    pub id: String,
    pub name: Option<String>,
}

/// An IG Media object.
#[derive(Debug, Clone, Deserialize)]
pub struct Media {
    pub id: String,
    pub caption: Option<String>,
    pub comments_count: Option<u64>,
    pub like_count: Option<u64>,
    pub media_product_type: Option<String>,
    pub media_type: Option<String>,
    pub media_url: Option<String>,
    pub permalink: Option<String>,
    pub thumbnail_url: Option<String>,
    pub timestamp: Option<String>,
    pub username: Option<String>,
}

/// One entry of an album IG Media's `children` edge.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaChild {
    pub id: String,
    pub media_type: Option<String>,
    pub media_url: Option<String>,
}

/// A single measured value of an insights metric.
///
/// Values are numbers for plain metrics and nested objects when a
/// breakdown was requested, so the payload stays dynamic.
#[derive(Debug, Clone, Deserialize)]
pub struct InsightValue {
    pub value: serde_json::Value,
    pub end_time: Option<String>,
}

/// One insights metric series.
#[derive(Debug, Clone, Deserialize)]
pub struct Insight {
    pub id: Option<String>,
    pub name: Option<String>,
    pub period: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub values: Option<Vec<InsightValue>>,
}

/// A product tag attached to an IG Media.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductTag {
    pub product_id: Option<u64>,
    pub merchant_id: Option<u64>,
    pub name: Option<String>,
    pub price_string: Option<String>,
    pub review_status: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// A product catalog available to an IG User's shop.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub catalog_id: Option<String>,
    pub catalog_name: Option<String>,
    pub shop_name: Option<String>,
    pub product_count: Option<u64>,
}

/// A tag-eligible product returned by catalog search.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub product_id: Option<u64>,
    pub merchant_id: Option<u64>,
    pub product_name: Option<String>,
    pub image_url: Option<String>,
    pub retailer_id: Option<String>,
    pub review_status: Option<String>,
}

/// Review outcome of an appealed product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Approved,
    Rejected,
    Pending,
    Outdated,
    NoReview,
    #[serde(rename = "")]
    Unreviewed,
}

/// Appeal metadata for a rejected product.
#[derive(Debug, Clone, Deserialize)]
pub struct AppealStatus {
    pub eligible_for_appeal: bool,
    pub product_id: String,
    pub review_status: ReviewStatus,
}

/// An Instagram Business or Creator account profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: Option<String>,
    pub ig_id: Option<u64>,
    pub username: Option<String>,
    pub name: Option<String>,
    pub biography: Option<String>,
    pub website: Option<String>,
    pub profile_picture_url: Option<String>,
    pub followers_count: Option<u64>,
    pub follows_count: Option<u64>,
    pub media_count: Option<u64>,
}

/// Business-discovery lookup result for another account.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessDiscovery {
    pub business_discovery: UserProfile,
    pub id: Option<String>,
}

/// A comment in which the queried user was @mentioned.
#[derive(Debug, Clone, Deserialize)]
pub struct MentionedCommentData {
    pub id: String,
    pub text: Option<String>,
    pub like_count: Option<u64>,
    pub timestamp: Option<String>,
}

/// Response shape of a `mentioned_comment` field query.
#[derive(Debug, Clone, Deserialize)]
pub struct MentionedComment {
    pub mentioned_comment: MentionedCommentData,
    pub id: Option<String>,
}

/// Response shape of a `mentioned_media` field query.
#[derive(Debug, Clone, Deserialize)]
pub struct MentionedMedia {
    pub mentioned_media: Media,
    pub id: Option<String>,
}

/// Publishing quota configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaConfig {
    pub quota_total: u64,
    pub quota_duration: u64,
}

/// Container-publish count within the queried window.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaUsage {
    pub quota_usage: u64,
    pub config: Option<QuotaConfig>,
}

/// Response shape of the content-publishing-limit endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishingLimit {
    pub data: Option<Vec<QuotaUsage>>,
}

/// A story IG Media object.
#[derive(Debug, Clone, Deserialize)]
pub struct Story {
    pub id: String,
    pub media_type: Option<String>,
    pub media_url: Option<String>,
}

/// An IG Media in which the queried user was tagged.
#[derive(Debug, Clone, Deserialize)]
pub struct TaggedMedia {
    pub id: Option<String>,
    pub media_type: Option<String>,
    pub media_url: Option<String>,
    pub permalink: Option<String>,
}

/// Instagram Business Account linked to a Facebook Page.
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramBusinessAccount {
    pub id: String,
}

/// Response shape when reading a Page's linked IG User.
#[derive(Debug, Clone, Deserialize)]
pub struct PageIgUser {
    pub instagram_business_account: Option<InstagramBusinessAccount>,
    pub id: Option<String>,
}
