use std::net::TcpListener;

use podscript_engine::{ClientSettings, GenerationClient, GenerationError, ReqwestGenerationClient};
use podscript_core::{
    build_request, FormState, GenerationParams, InputMode, RequestPayload, SelectedFile,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: String) -> ReqwestGenerationClient {
    ReqwestGenerationClient::new(ClientSettings {
        base_url,
        ..ClientSettings::default()
    })
    .expect("client builds")
}

fn text_payload(text: &str) -> RequestPayload {
    let form = FormState {
        mode: InputMode::Text,
        text: text.to_string(),
        ..FormState::default()
    };
    build_request(&form).expect("valid form")
}

fn episode_json() -> serde_json::Value {
    json!({
        "title": "Ep 1",
        "intro": "Hi",
        "segments": [{"heading": "A", "content": "B"}],
        "outro": "Bye",
        "show_notes": [{"time": "00:10", "note": "x"}, {"time": null, "note": "y"}]
    })
}

/// A port nothing listens on.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn text_request_posts_json_and_parses_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(json!({
            "text": "an article",
            "model": "gemini-1.5-flash",
            "max_words": 1200,
            "speaking_wpm": 150,
            "include_timestamps": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(episode_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let result = client
        .generate(&text_payload("an article"))
        .await
        .expect("generation ok");

    assert_eq!(result.title.as_deref(), Some("Ep 1"));
    assert_eq!(result.segments.len(), 1);
    assert_eq!(result.show_notes.len(), 2);
    assert_eq!(result.show_notes[1].time, None);
}

#[tokio::test]
async fn url_request_posts_url_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(json!({
            "url": "https://example.com/post",
            "model": "m",
            "max_words": 500,
            "speaking_wpm": 140,
            "include_timestamps": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let payload = RequestPayload::Url {
        url: "https://example.com/post".to_string(),
        params: GenerationParams {
            model: "m".to_string(),
            max_words: 500,
            speaking_wpm: 140,
            include_timestamps: false,
        },
    };
    let result = client_for(server.uri())
        .generate(&payload)
        .await
        .expect("generation ok");
    assert!(result.segments.is_empty());
    assert_eq!(result.resolved().title, "Podcast Episode");
}

#[tokio::test]
async fn file_request_posts_multipart_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate/file"))
        .and(header_exists("content-type"))
        .and(body_string_contains("name=\"file\"; filename=\"talk.txt\""))
        .and(body_string_contains("file contents here"))
        .and(body_string_contains("name=\"speaking_wpm\""))
        .and(body_string_contains("name=\"include_timestamps\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(episode_json()))
        .expect(1)
        .mount(&server)
        .await;

    let form = FormState {
        mode: InputMode::File,
        file: Some(SelectedFile {
            file_name: "talk.txt".to_string(),
            bytes: b"file contents here".to_vec(),
        }),
        ..FormState::default()
    };
    let payload = build_request(&form).expect("file selected");

    let result = client_for(server.uri())
        .generate(&payload)
        .await
        .expect("generation ok");
    assert_eq!(result.title.as_deref(), Some("Ep 1"));
}

#[tokio::test]
async fn error_status_uses_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_string("{\"detail\":\"Source text is too short after cleaning\"}"),
        )
        .mount(&server)
        .await;

    let err = client_for(server.uri())
        .generate(&text_payload("short"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        GenerationError::Transport {
            status: 422,
            message: "{\"detail\":\"Source text is too short after cleaning\"}".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "{\"detail\":\"Source text is too short after cleaning\"}"
    );
}

#[tokio::test]
async fn error_status_without_body_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(server.uri())
        .generate(&text_payload("anything"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Internal Server Error");
    assert!(matches!(err, GenerationError::Transport { status: 500, .. }));
}

#[tokio::test]
async fn invalid_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(server.uri())
        .generate(&text_payload("anything"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Decode(_)));
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let err = client_for(closed_port_url())
        .generate(&text_payload("anything"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Network(_)));
}

#[tokio::test]
async fn bad_base_url_is_reported() {
    let err = client_for("not a base".to_string())
        .generate(&text_payload("anything"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::InvalidBaseUrl { .. }));
}

#[tokio::test]
async fn health_reports_ok_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    assert!(client_for(server.uri()).health().await.expect("health ok"));
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(episode_json()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(format!("{}/api", server.uri()))
        .generate(&text_payload("an article"))
        .await
        .expect("generation ok");
    assert_eq!(result.title.as_deref(), Some("Ep 1"));

    let healthy = client_for(format!("{}/api/", server.uri()))
        .health()
        .await
        .expect("health ok");
    assert!(healthy);
}
