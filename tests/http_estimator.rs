//! Live estimator adapter against a mock chat-completions gateway.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stalewatch::adapters::live::estimator::{HttpEstimator, API_KEY_VAR};
use stalewatch::ports::CompletionEstimator;
use stalewatch::{AssigneeActivity, EstimateRequest, IssueState, IssueSummary, RepoStats, Risk};

fn request() -> EstimateRequest {
    EstimateRequest {
        issue: IssueSummary {
            title: "Fix flaky test".into(),
            number: 42,
            state: IssueState::Open,
            assignee: Some("bob".into()),
            created_at: "2024-05-01T09:00:00Z".parse().unwrap(),
            updated_at: "2024-05-20T14:30:00Z".parse().unwrap(),
            comments: 3,
            has_pull_request: false,
        },
        assignee_activity: AssigneeActivity {
            contributions: 120,
            recent_activity: Some("14 commits".into()),
            other_assigned_issues: 2,
        },
        repo_stats: RepoStats { avg_time_to_close: Some(5.5), open_issues: 17 },
    }
}

fn estimator(server: &MockServer) -> HttpEstimator {
    std::env::set_var(API_KEY_VAR, "test-key");
    HttpEstimator::new(
        format!("{}/v1/chat/completions", server.uri()),
        "test-model",
        Duration::from_secs(5),
    )
}

fn chat_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
}

#[tokio::test]
async fn parses_a_well_formed_gateway_response() {
    let server = MockServer::start().await;
    let content = json!({
        "completionProbability": 85,
        "estimatedDays": 3,
        "isUserActive": true,
        "risk": "low",
        "reasoning": "Assignee is highly active.",
        "recommendation": "No action needed."
    })
    .to_string();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(&content)))
        .expect(1)
        .mount(&server)
        .await;

    let analysis = estimator(&server).estimate(&request()).await.unwrap();
    assert_eq!(analysis.completion_probability, 85);
    assert_eq!(analysis.estimated_days, 3);
    assert!(analysis.is_user_active);
    assert_eq!(analysis.risk, Risk::Low);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = estimator(&server).estimate(&request()).await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn malformed_analysis_content_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("not json at all")))
        .mount(&server)
        .await;

    let err = estimator(&server).estimate(&request()).await.unwrap_err();
    assert!(err.to_string().contains("malformed analysis"));
}

#[tokio::test]
async fn response_without_choices_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = estimator(&server).estimate(&request()).await.unwrap_err();
    assert!(err.to_string().contains("no choices"));
}

#[tokio::test]
async fn out_of_range_probability_is_an_error() {
    let server = MockServer::start().await;
    let content = json!({
        "completionProbability": 250,
        "estimatedDays": 3,
        "isUserActive": true,
        "risk": "low",
        "reasoning": "r",
        "recommendation": "r"
    })
    .to_string();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(&content)))
        .mount(&server)
        .await;

    let err = estimator(&server).estimate(&request()).await.unwrap_err();
    assert!(err.to_string().contains("out-of-range"));
}

#[tokio::test]
async fn hung_gateway_hits_the_bounded_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_body("{}"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    std::env::set_var(API_KEY_VAR, "test-key");
    let estimator = HttpEstimator::new(
        format!("{}/v1/chat/completions", server.uri()),
        "test-model",
        Duration::from_millis(100),
    );

    let err = estimator.estimate(&request()).await.unwrap_err();
    assert!(err.to_string().contains("request failed"));
}
