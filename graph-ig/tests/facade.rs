//! End-to-end facade behavior against a mocked Graph API server.

use graph_ig::{
    Config, CreateCommentRequest, DeleteCommentRequest, GetBusinessDiscoveryRequest,
    GetCommentRepliesRequest, GetCommentRequest, InstagramApi, PublishMediaContainerRequest,
    SearchHashtagRequest, SetCommentVisibilityRequest,
};
use wiremock::matchers::{method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

fn api(base_url: &str) -> InstagramApi {
    InstagramApi::new(Config::new().access_token("test-token").base_url(base_url)).unwrap()
}

/// Matches the raw query string byte for byte, before any decoding.
struct RawQuery(&'static str);

impl Match for RawQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query() == Some(self.0)
    }
}

#[test]
fn construction_requires_a_resolvable_credential() {
    assert!(InstagramApi::new(Config::new().access_token("t")).is_ok());
    if std::env::var(graph_ig::ACCESS_TOKEN_ENV).is_err() {
        let err = InstagramApi::new(Config::new()).unwrap_err();
        assert!(matches!(err, graph_ig::Error::MissingAccessToken));
        assert!(err.to_string().contains("USER_ACCESS_TOKEN"));
    }
}

#[tokio::test]
async fn get_comment_builds_a_deterministic_path_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123456789"))
        .and(RawQuery("fields=id,text"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "123456789", "text": "nice"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let comment = api(&server.uri())
        .get_comment(GetCommentRequest {
            comment_id: 123456789,
            fields: vec!["id".into(), "text".into()],
        })
        .await
        .unwrap();

    assert_eq!(comment.id, "123456789");
    assert_eq!(comment.text.as_deref(), Some("nice"));
}

#[tokio::test]
async fn list_unwrapping_returns_the_inner_data_array_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/555/replies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"id": "3"}, {"id": "1"}, {"id": "2"}]
        })))
        .mount(&server)
        .await;

    let replies = api(&server.uri())
        .get_comment_replies(GetCommentRepliesRequest { comment_id: 555 })
        .await
        .unwrap();

    let ids: Vec<&str> = replies.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);
}

#[tokio::test]
async fn visibility_and_delete_unwrap_the_success_flag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/777"))
        .and(RawQuery("hide=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/777"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": false})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server.uri());

    let hidden = api
        .set_comment_visibility(SetCommentVisibilityRequest {
            comment_id: 777,
            hide: true,
        })
        .await
        .unwrap();
    assert!(hidden);

    let deleted = api
        .delete_comment(DeleteCommentRequest { comment_id: 777 })
        .await
        .unwrap();
    assert!(!deleted);
}

#[tokio::test]
async fn create_comment_percent_encodes_the_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/comments"))
        .and(RawQuery("message=a%20b%26c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "9"})))
        .expect(1)
        .mount(&server)
        .await;

    let created = api(&server.uri())
        .create_comment(CreateCommentRequest {
            media_id: 1,
            message: "a b&c".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, "9");
}

#[tokio::test]
async fn hashtag_search_joins_parameters_with_ampersands() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ig_hashtag_search"))
        .and(RawQuery("user_id=17841&q=coffee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"id": "17873440459141021", "name": "coffee"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hashtag_id = api(&server.uri())
        .search_hashtag(SearchHashtagRequest {
            user_id: 17841,
            query: "coffee".into(),
        })
        .await
        .unwrap();

    assert_eq!(hashtag_id, "17873440459141021");
}

#[tokio::test]
async fn business_discovery_passes_the_field_selector_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/17841"))
        .and(RawQuery(
            "fields=business_discovery.username(thechef){followers_count,media_count}",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "business_discovery": {"username": "thechef", "followers_count": 1234},
            "id": "17841"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let discovery = api(&server.uri())
        .get_business_discovery(GetBusinessDiscoveryRequest {
            user_id: 17841,
            username: "thechef".into(),
            fields: vec!["followers_count".into(), "media_count".into()],
        })
        .await
        .unwrap();

    assert_eq!(discovery.business_discovery.followers_count, Some(1234));
}

#[tokio::test]
async fn publish_returns_the_full_creation_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/17841/media_publish"))
        .and(RawQuery("creation_id=8901"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "5566"})))
        .expect(1)
        .mount(&server)
        .await;

    let published = api(&server.uri())
        .publish_media_container(PublishMediaContainerRequest {
            user_id: 17841,
            creation_id: 8901,
        })
        .await
        .unwrap();

    assert_eq!(published.id, "5566");
}

#[tokio::test]
async fn domain_errors_surface_through_the_facade_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/401"))
        .respond_with(ResponseTemplate::new(400).set_body_raw(
            r#"{"error":{"message":"Invalid","code":100,"type":"OAuthException","fbtrace_id":"abc"}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let err = api(&server.uri())
        .get_comment(GetCommentRequest {
            comment_id: 401,
            fields: vec![],
        })
        .await
        .unwrap_err();

    let api_error = err.as_api_error().expect("expected normalized Graph API error");
    assert_eq!(api_error.code, 100);
    assert_eq!(api_error.error_type, "OAuthException");
    assert_eq!(api_error.fbtrace_id, "abc");
    assert_eq!(api_error.message, "Invalid");
}

#[tokio::test]
async fn missing_data_field_is_a_shape_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/888/replies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .mount(&server)
        .await;

    let err = api(&server.uri())
        .get_comment_replies(GetCommentRepliesRequest { comment_id: 888 })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        graph_ig::Error::Transport(graph_ig::TransportError::Json(_))
    ));
}

#[tokio::test]
async fn concurrent_calls_each_receive_their_own_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/100"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "100", "text": "first"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/200"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "200", "text": "second"})),
        )
        .mount(&server)
        .await;

    let api = api(&server.uri());
    let (first, second) = tokio::join!(
        api.get_comment(GetCommentRequest {
            comment_id: 100,
            fields: vec![],
        }),
        api.get_comment(GetCommentRequest {
            comment_id: 200,
            fields: vec![],
        }),
    );

    let first = first.unwrap();
    let second = second.unwrap();
    assert_eq!(first.id, "100");
    assert_eq!(first.text.as_deref(), Some("first"));
    assert_eq!(second.id, "200");
    assert_eq!(second.text.as_deref(), Some("second"));
}
