//! Submission controller against a mocked gateway.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sora_client::error::{GENERATION_FAILED, SUBMISSION_FAILED};
use sora_client::form::{CONFIG_INVALID_JSON, CONFIG_NOT_OBJECT, PROMPT_REQUIRED};
use sora_client::state::{QUEUED_MESSAGE, READY_MESSAGE};
use sora_client::{GatewayClient, GatewayClientConfig, SubmissionController, SubmissionState};

fn controller(gateway: &MockServer) -> SubmissionController {
    let client = GatewayClient::new(GatewayClientConfig {
        base_url: gateway.uri(),
    })
    .unwrap();
    SubmissionController::new(client)
}

async fn mount_no_calls(gateway: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(gateway)
        .await;
}

#[tokio::test]
async fn test_queued_job() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobId": "job_1",
            "status": "queued"
        })))
        .expect(1)
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("A paper boat drifting down a rainy street");
    let state = controller.submit().await;

    let outcome = state.outcome().expect("success state");
    assert_eq!(outcome.job_id, "job_1");
    assert_eq!(outcome.message, QUEUED_MESSAGE);
    assert!(outcome.video_url.is_none());
    assert!(outcome.config_echo.is_none());
    assert_eq!(controller.state(), state);
    assert!(controller.can_submit());
}

#[tokio::test]
async fn test_completed_job_with_video() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobId": "job_2",
            "status": "completed",
            "videoUrl": "https://x/video.mp4",
            "thumbnailUrl": "https://x/thumb.jpg"
        })))
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Northern lights over a frozen lake");
    let state = controller.submit().await;

    let outcome = state.outcome().expect("success state");
    assert_eq!(outcome.message, READY_MESSAGE);
    assert_eq!(outcome.video_url.as_deref(), Some("https://x/video.mp4"));
    assert_eq!(outcome.thumbnail_url.as_deref(), Some("https://x/thumb.jpg"));
}

#[tokio::test]
async fn test_request_body_and_config_echo() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({
            "prompt": "Skyline at dusk",
            "config": { "duration": 30, "aspect_ratio": "16:9" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobId": "job_3",
            "status": "queued"
        })))
        .expect(1)
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("  Skyline at dusk  ");
    controller.set_config_text(r#"{ "duration": 30, "aspect_ratio": "16:9" }"#);
    let state = controller.submit().await;

    let echo = state.outcome().and_then(|o| o.config_echo.clone()).unwrap();
    assert_eq!(echo["duration"], 30);
    assert_eq!(echo["aspect_ratio"], "16:9");
}

#[tokio::test]
async fn test_blank_config_not_sent() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({ "prompt": "Only words" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobId": "job_4",
            "status": "queued"
        })))
        .expect(1)
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Only words");
    controller.set_config_text("   ");
    assert!(controller.submit().await.outcome().is_some());
}

#[tokio::test]
async fn test_invalid_config_never_reaches_network() {
    let gateway = MockServer::start().await;
    mount_no_calls(&gateway).await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Valid prompt");
    controller.set_config_text("{ \"duration\": 30,");
    let state = controller.submit().await;

    assert_eq!(state, SubmissionState::error(CONFIG_INVALID_JSON));
}

#[tokio::test]
async fn test_non_object_config_rejected_locally() {
    let gateway = MockServer::start().await;
    mount_no_calls(&gateway).await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Valid prompt");
    controller.set_config_text("[\"16:9\"]");

    assert_eq!(
        controller.submit().await,
        SubmissionState::error(CONFIG_NOT_OBJECT)
    );
}

#[tokio::test]
async fn test_validation_messages_joined() {
    let gateway = MockServer::start().await;
    mount_no_calls(&gateway).await;

    let mut controller = controller(&gateway);
    controller.set_prompt("   ");
    controller.set_config_text("not json");
    let state = controller.submit().await;

    assert_eq!(
        state.message(),
        Some(format!("{} {}", PROMPT_REQUIRED, CONFIG_INVALID_JSON).as_str())
    );
}

#[tokio::test]
async fn test_gateway_error_message_surfaced() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "Video API returned 503: rate limited"
        })))
        .expect(1)
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Anything");

    assert_eq!(
        controller.submit().await,
        SubmissionState::error("Video API returned 503: rate limited")
    );
}

#[tokio::test]
async fn test_field_errors_fall_back_to_generic_message() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "prompt": ["Required"] }
        })))
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Anything");

    assert_eq!(
        controller.submit().await,
        SubmissionState::error(GENERATION_FAILED)
    );
}

#[tokio::test]
async fn test_non_json_error_body_falls_back() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Anything");

    assert_eq!(
        controller.submit().await,
        SubmissionState::error(GENERATION_FAILED)
    );
}

#[tokio::test]
async fn test_unexpected_success_body() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Anything");
    let state = controller.submit().await;

    let message = state.message().unwrap();
    assert!(message.starts_with("Unexpected gateway response"));
}

#[tokio::test]
async fn test_network_failure_becomes_error() {
    let client = GatewayClient::new(GatewayClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
    })
    .unwrap();
    let mut controller = SubmissionController::new(client);
    controller.set_prompt("Anything");

    let state = controller.submit().await;

    match state {
        SubmissionState::Error { message } => {
            assert!(!message.is_empty());
            assert_ne!(message, SUBMISSION_FAILED);
        }
        other => panic!("expected error state, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submitting_published_then_abandoned() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "jobId": "job_slow", "status": "queued" }))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Slow render");
    let mut states = controller.subscribe();

    {
        let submit = controller.submit();
        tokio::pin!(submit);
        tokio::select! {
            _ = &mut submit => panic!("submission should still be in flight"),
            changed = states.changed() => {
                changed.unwrap();
                assert!(states.borrow_and_update().is_submitting());
            }
        }
    }

    assert!(controller.state().is_idle());
    assert!(controller.can_submit());
}

#[tokio::test]
async fn test_preset_resets_state() {
    let gateway = MockServer::start().await;
    mount_no_calls(&gateway).await;

    let mut controller = controller(&gateway);
    controller.set_config_text("{");
    assert!(matches!(
        controller.submit().await,
        SubmissionState::Error { .. }
    ));

    assert!(controller.load_preset("product-launch"));
    assert!(controller.state().is_idle());

    let preset = controller.presets().find("product-launch").unwrap().clone();
    assert_eq!(controller.prompt(), preset.prompt);
    assert_eq!(controller.config_text(), preset.config_text());
}

#[tokio::test]
async fn test_preset_resets_success_state() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobId": "job_7",
            "status": "completed",
            "videoUrl": "https://cdn.example/job_7.mp4"
        })))
        .expect(1)
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Lanterns over a harbor");
    assert!(controller.submit().await.outcome().is_some());

    assert!(controller.load_preset("nature-documentary"));
    assert!(controller.state().is_idle());
    assert!(controller.can_submit());

    let preset = controller.presets().find("nature-documentary").unwrap().clone();
    assert_eq!(controller.prompt(), preset.prompt);
    assert_eq!(controller.config_text(), preset.config_text());
}

#[tokio::test]
async fn test_preset_without_config_clears_config_text() {
    let gateway = MockServer::start().await;

    let mut controller = controller(&gateway);
    controller.set_config_text("{\"duration\": 5}");

    assert!(controller.load_preset("city-timelapse"));
    assert_eq!(controller.config_text(), "");
    assert!(!controller.prompt().is_empty());
}

#[tokio::test]
async fn test_unknown_preset_is_noop() {
    let gateway = MockServer::start().await;
    mount_no_calls(&gateway).await;

    let mut controller = controller(&gateway);
    controller.set_prompt("keep me");
    controller.set_config_text("{");
    let before = controller.submit().await;

    assert!(!controller.load_preset("does-not-exist"));
    assert_eq!(controller.state(), before);
    assert_eq!(controller.prompt(), "keep me");
    assert_eq!(controller.config_text(), "{");
}

#[tokio::test]
async fn test_reset_clears_form() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobId": "job_5",
            "status": "queued"
        })))
        .mount(&gateway)
        .await;

    let mut controller = controller(&gateway);
    controller.set_prompt("Something");
    controller.set_config_text("{}");
    controller.submit().await;
    assert!(controller.state().outcome().is_some());

    let mut states = controller.subscribe();
    controller.reset();

    assert_eq!(controller.prompt(), "");
    assert_eq!(controller.config_text(), "");
    assert!(controller.state().is_idle());
    assert!(states.has_changed().unwrap());
    assert!(states.borrow_and_update().is_idle());
}
