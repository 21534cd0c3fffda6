use anyhow::Result;
use mockito::Matcher;
use serde_json::json;

use super::ChatResponse;
use super::ErrorResponse;
use super::TranscriptApi;
use crate::domain::models::Backend;
use crate::domain::models::ChatPrompt;

impl TranscriptApi {
    pub fn with_url(url: String) -> TranscriptApi {
        return TranscriptApi { url };
    }
}

fn error_body(err: &str) -> Result<String> {
    return Ok(serde_json::to_string(&ErrorResponse {
        error: Some(err.to_string()),
    })?);
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create();

    let backend = TranscriptApi::with_url(format!("{}/api", server.url()));
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/api/health").with_status(503).create();

    let backend = TranscriptApi::with_url(format!("{}/api", server.url()));
    let res = backend.health_check().await;

    assert_eq!(res.unwrap_err().to_string(), "Backend server is not running");
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks_when_unreachable() {
    let backend = TranscriptApi::with_url("http://127.0.0.1:1/api".to_string());
    let res = backend.health_check().await;

    assert_eq!(res.unwrap_err().to_string(), "Backend server is not running");
}

#[tokio::test]
async fn it_tolerates_trailing_slashes() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/api/health").with_status(204).create();

    let backend = TranscriptApi::with_url(format!("{}/api/", server.url()));
    assert!(backend.health_check().await.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_initializes_videos() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/initialize")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "video_id": "abc123" })))
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "message": "Video initialized successfully",
                "video_id": "abc123"
            })
            .to_string(),
        )
        .create();

    let backend = TranscriptApi::with_url(format!("{}/api", server.url()));
    backend.initialize("abc123").await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_initializes_videos_without_a_body() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/api/initialize").with_status(200).create();

    let backend = TranscriptApi::with_url(format!("{}/api", server.url()));
    backend.initialize("abc123").await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_initialize_with_backend_error() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/initialize")
        .with_status(400)
        .with_body(error_body("No captions available for this video")?)
        .create();

    let backend = TranscriptApi::with_url(format!("{}/api", server.url()));
    let res = backend.initialize("abc123").await;

    assert_eq!(
        res.unwrap_err().to_string(),
        "No captions available for this video"
    );
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_initialize_with_generic_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/initialize")
        .with_status(500)
        .with_body("<html>Internal Server Error</html>")
        .create();

    let backend = TranscriptApi::with_url(format!("{}/api", server.url()));
    let res = backend.initialize("abc123").await;

    assert_eq!(res.unwrap_err().to_string(), "Failed to initialize video");
    mock.assert();
}

#[tokio::test]
async fn it_gets_chat_responses() -> Result<()> {
    let body = serde_json::to_string(&ChatResponse {
        response: Some("The video is about X.".to_string()),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/chat")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "video_id": "abc123",
            "question": "What is the video about?"
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let backend = TranscriptApi::with_url(format!("{}/api", server.url()));
    let res = backend
        .chat(ChatPrompt::new("abc123", "What is the video about?"))
        .await?;

    assert_eq!(res, "The video is about X.");
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_chat_with_backend_error() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/chat")
        .with_status(400)
        .with_body(error_body("Video not initialized")?)
        .create();

    let backend = TranscriptApi::with_url(format!("{}/api", server.url()));
    let res = backend.chat(ChatPrompt::new("abc123", "Hello?")).await;

    assert_eq!(res.unwrap_err().to_string(), "Video not initialized");
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_chat_with_generic_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/chat")
        .with_status(500)
        .with_body(r#"{"error": ""}"#)
        .create();

    let backend = TranscriptApi::with_url(format!("{}/api", server.url()));
    let res = backend.chat(ChatPrompt::new("abc123", "Hello?")).await;

    assert_eq!(res.unwrap_err().to_string(), "Failed to get response");
    mock.assert();
}

#[tokio::test]
async fn it_fails_chat_without_response_field() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create();

    let backend = TranscriptApi::with_url(format!("{}/api", server.url()));
    let res = backend.chat(ChatPrompt::new("abc123", "Hello?")).await;

    assert_eq!(res.unwrap_err().to_string(), "Failed to get response");
    mock.assert();
}
