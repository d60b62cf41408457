//! End-to-end tests: typed routes through `Client` and `HttpTransport`
//! against a mock Dropbox server.
//!
//! These tests verify that:
//! - Results decode into the declared record or union variant
//! - Structured route errors are kept apart from auth and opaque failures
//! - Download content streams arrive untouched
//! - Deprecated routes notify once per call

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use futures::{StreamExt, stream};
use schematic::error::Void;
use schematic::{
    ApiError, AuthError, Client, ClientConfig, HttpTransport, Notifier, RouteDescriptor,
};
use schematic_definitions::dropbox::file_properties::{self, TemplatesListForTeam};
use schematic_definitions::dropbox::paper::{self, DocLookupError, RefPaperDoc};
use schematic_definitions::dropbox::sharing::{self, GetSharedLinkMetadataArg, SharedLinkMetadata};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[derive(Default)]
struct CountingNotifier {
    seen: AtomicUsize,
}

impl Notifier for CountingNotifier {
    fn notice(&self, _route: &RouteDescriptor) {
        self.seen.fetch_add(1, Ordering::SeqCst);
    }
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .all_hosts(Url::parse(&server.uri()).unwrap())
        .access_token("sl.test-token")
        .build()
        .unwrap()
}

type CountingClient = Client<HttpTransport, Arc<CountingNotifier>>;

fn client_for(server: &MockServer) -> (CountingClient, Arc<CountingNotifier>) {
    let notifier = Arc::new(CountingNotifier::default());
    let client = Client::new(config_for(server))
        .unwrap()
        .with_notifier(Arc::clone(&notifier));
    (client, notifier)
}

impl CountingNotifier {
    fn count(&self) -> usize {
        self.seen.load(Ordering::SeqCst)
    }
}

fn file_link() -> serde_json::Value {
    json!({
        ".tag": "file",
        "url": "https://www.dropbox.com/s/2sn712vy1ovegw8/Prime_Numbers.txt?dl=0",
        "name": "Prime_Numbers.txt",
        "link_permissions": {
            "can_revoke": false,
            "allow_download": true,
            "resolved_visibility": {".tag": "public"}
        },
        "client_modified": "2015-05-12T15:50:38Z",
        "server_modified": "2015-05-12T15:50:38Z",
        "rev": "a1c10ce0dd78",
        "size": 7212,
        "id": "id:a4ayc_80_OEAAAAAAAAAXw",
        "path_lower": "/homework/math/prime_numbers.txt"
    })
}

// =============================================================================
// Success decoding
// =============================================================================

#[tokio::test]
async fn shared_link_metadata_decodes_file_variant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/sharing/get_shared_link_metadata"))
        .and(header("authorization", "Bearer sl.test-token"))
        .and(body_json(json!({"url": "https://db.tt/prime"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_link()))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server);
    let link = client
        .call::<sharing::GetSharedLinkMetadata>(&GetSharedLinkMetadataArg::new(
            "https://db.tt/prime",
        ))
        .await
        .unwrap();

    let file = link.file().expect("file variant");
    assert_eq!(file.name, "Prime_Numbers.txt");
    assert!(link.folder().is_none());
    assert_eq!(serde_json::to_value(&link).unwrap(), file_link());
    assert_eq!(notifier.count(), 0);
}

#[tokio::test]
async fn unknown_link_subtype_is_unspecified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/sharing/get_shared_link_metadata"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({".tag": "album", "url": "https://db.tt/a", "photos": 3})),
        )
        .mount(&server)
        .await;

    let link = client_for(&server)
        .0
        .call::<sharing::GetSharedLinkMetadata>(&GetSharedLinkMetadataArg::new("https://db.tt/a"))
        .await
        .unwrap();

    assert_eq!(link, SharedLinkMetadata::Unspecified);
}

#[tokio::test]
async fn argless_route_sends_null_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/file_properties/templates/list_for_team"))
        .and(body_json(serde_json::Value::Null))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"template_ids": ["ptid:1a5n2i6d3OYEAAAAAAAAAYa"]})),
        )
        .mount(&server)
        .await;

    let templates = client_for(&server)
        .0
        .call::<TemplatesListForTeam>(&())
        .await
        .unwrap();
    assert_eq!(templates.template_ids, vec!["ptid:1a5n2i6d3OYEAAAAAAAAAYa"]);
}

// =============================================================================
// Error classification
// =============================================================================

#[tokio::test]
async fn route_error_is_structured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/paper/docs/archive"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error_summary": "x/bad/",
            "error": {".tag": "doc_not_found"}
        })))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server);
    let err = client
        .call::<paper::DocsArchive>(&RefPaperDoc::new("uaSvRuxvnkFa12PTkBv5q"))
        .await
        .unwrap_err();

    assert_eq!(err.endpoint_error(), Some(&DocLookupError::DocNotFound));
    assert_eq!(err.summary(), Some("x/bad/"));
    assert_eq!(err.status(), Some(409));
    assert_eq!(notifier.count(), 1);
}

#[tokio::test]
async fn void_error_route_keeps_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/sharing/list_folders"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error_summary": "other/...",
            "error": {}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .0
        .call::<sharing::ListFolders>(&Default::default())
        .await
        .unwrap_err();

    match err {
        ApiError::Endpoint(e) => {
            assert_eq!(e.summary, "other/...");
            assert_eq!(e.error, Void {});
        }
        other => panic!("expected endpoint error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_failure_is_opaque() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .0
        .call::<sharing::ListFolders>(&Default::default())
        .await
        .unwrap_err();

    match err {
        ApiError::Opaque { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, Bytes::from_static(b"<html>Bad Gateway</html>"));
        }
        other => panic!("expected opaque error, got {other:?}"),
    }
}

#[tokio::test]
async fn expired_token_wins_over_route_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error_summary": "expired_access_token/",
            "error": {".tag": "expired_access_token"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .0
        .call::<paper::DocsArchive>(&RefPaperDoc::new("doc"))
        .await
        .unwrap_err();

    match err {
        ApiError::Auth(auth) => {
            assert_eq!(auth, AuthError::ExpiredAccessToken);
            assert!(auth.is_refreshable());
        }
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_reports_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "30")
                .set_body_json(json!({
                    "error_summary": "too_many_requests/..",
                    "error": {"reason": {".tag": "too_many_requests"}}
                })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .0
        .call::<sharing::ListFolders>(&Default::default())
        .await
        .unwrap_err();

    match err {
        ApiError::Auth(auth) => assert_eq!(auth.retry_after(), Some(30)),
        other => panic!("expected rate limit, got {other:?}"),
    }
}

#[tokio::test]
async fn team_route_without_token_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .all_hosts(Url::parse(&server.uri()).unwrap())
        .app_credentials("key", "secret")
        .build()
        .unwrap();
    let err = Client::new(config)
        .unwrap()
        .call::<file_properties::TemplatesListForTeam>(&())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Auth(AuthError::MissingCredential { .. })
    ));
}

// =============================================================================
// Content routes
// =============================================================================

#[tokio::test]
async fn shared_link_file_streams_content() {
    let payload: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/sharing/get_shared_link_file"))
        .and(header("Dropbox-API-Arg", r#"{"url":"https://db.tt/prime"}"#))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Dropbox-API-Result", file_link().to_string().as_str())
                .set_body_bytes(payload.clone()),
        )
        .mount(&server)
        .await;

    let download = client_for(&server)
        .0
        .download::<sharing::GetSharedLinkFile>(&GetSharedLinkMetadataArg::new(
            "https://db.tt/prime",
        ))
        .await
        .unwrap();

    assert_eq!(download.result.file().map(|f| f.size), Some(7212));

    let (_, content) = download.collect().await.unwrap();
    assert_eq!(content.as_ref(), payload.as_slice());
}

#[tokio::test]
async fn paper_upload_sends_content_and_notifies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/paper/docs/create"))
        .and(header("Dropbox-API-Arg", r#"{"import_format":{".tag":"markdown"}}"#))
        .and(header("content-type", "application/octet-stream"))
        .respond_with(|request: &Request| {
            assert_eq!(request.body, b"# Notes\n\nFirst draft.");
            ResponseTemplate::new(200).set_body_json(json!({
                "doc_id": "uaSvRuxvnkFa12PTkBv5q",
                "revision": 456736745,
                "title": "Notes"
            }))
        })
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server);
    let content = stream::iter(vec![
        Ok(Bytes::from_static(b"# Notes\n\n")),
        Ok(Bytes::from_static(b"First draft.")),
    ])
    .boxed();

    let created = client
        .upload::<paper::DocsCreate>(
            &paper::PaperDocCreateArgs {
                import_format: paper::ImportFormat::Markdown,
                parent_folder_id: None,
            },
            content,
        )
        .await
        .unwrap();

    assert_eq!(created.title, "Notes");
    assert_eq!(notifier.count(), 1);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_see_their_own_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/file_properties/templates/get_for_user"))
        .respond_with(|request: &Request| {
            let arg: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
            let id = arg["template_id"].as_str().unwrap_or_default().to_string();
            ResponseTemplate::new(200).set_body_json(json!({
                "name": id,
                "description": format!("template {id}"),
                "fields": []
            }))
        })
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server);
    let client = Arc::new(client);
    let handles: Vec<_> = (0..128)
        .map(|i| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                let id = format!("ptid:{i}");
                let template = client
                    .call::<file_properties::TemplatesGetForUser>(&file_properties::GetTemplateArg {
                        template_id: id.clone(),
                    })
                    .await
                    .unwrap();
                (id, template.name)
            })
        })
        .collect();

    for handle in handles {
        let (sent, received) = handle.await.unwrap();
        assert_eq!(sent, received);
    }
    assert_eq!(notifier.count(), 0);
}
