//! Integration tests for the chat crate
//!
//! Tests the full prompt and completion flows with a mocked chat API.

use chat::{ChatClient, ChatConfig, ChatError, ChatMessage};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> ChatConfig {
    ChatConfig {
        api_key: Some("test-api-key".to_string()),
        base_url: base_url.to_string(),
        timeout_ms: 5000,
        ..Default::default()
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
}

// ============ Prompt Tests ============

#[tokio::test]
async fn prompt_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_json(serde_json::json!({
            "model": "gpt-4",
            "messages": [
                {"role": "assistant", "content": "You are a helpful assistant."},
                {"role": "user", "content": "What is the capital of France?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Paris.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(test_config(&server.uri())).expect("Failed to create client");

    let reply = client.prompt("What is the capital of France?", &[]).await;

    assert_eq!(reply.expect("prompt should succeed"), "Paris.");
}

#[tokio::test]
async fn prompt_forwards_history_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_json(serde_json::json!({
            "model": "gpt-4",
            "messages": [
                {"role": "assistant", "content": "You are a helpful assistant."},
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello!"},
                {"role": "user", "content": "How are you?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Great!")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(test_config(&server.uri())).expect("Failed to create client");
    let history = vec![ChatMessage::user("Hi"), ChatMessage::assistant("Hello!")];

    let reply = client.prompt("How are you?", &history).await;

    assert_eq!(reply.expect("prompt should succeed"), "Great!");
}

#[tokio::test]
async fn prompt_omits_empty_persona() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_json(serde_json::json!({
            "model": "gpt-4",
            "messages": [
                {"role": "user", "content": "Hi"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hello!")))
        .expect(1)
        .mount(&server)
        .await;

    let config = ChatConfig {
        persona: String::new(),
        ..test_config(&server.uri())
    };
    let client = ChatClient::new(config).expect("Failed to create client");

    let reply = client.prompt("Hi", &[]).await;

    assert_eq!(reply.expect("prompt should succeed"), "Hello!");
}

// ============ Completion Tests ============

#[tokio::test]
async fn complete_sends_messages_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_json(serde_json::json!({
            "model": "gpt-4",
            "messages": [
                {"role": "system", "content": "Answer in one word."},
                {"role": "user", "content": "Capital of France?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Paris")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(test_config(&server.uri())).expect("Failed to create client");
    let messages = vec![
        ChatMessage::system("Answer in one word."),
        ChatMessage::user("Capital of France?"),
    ];

    let reply = client.complete(&messages).await;

    assert_eq!(reply.expect("completion should succeed"), "Paris");
}

#[tokio::test]
async fn complete_takes_the_first_choice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(test_config(&server.uri())).expect("Failed to create client");

    let reply = client.complete(&[ChatMessage::user("Hi")]).await;

    assert_eq!(reply.expect("completion should succeed"), "first");
}

// ============ Error Tests ============

#[tokio::test]
async fn status_error_carries_code_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(test_config(&server.uri())).expect("Failed to create client");

    let result = client.prompt("Hi", &[]).await;

    assert!(matches!(
        result,
        Err(ChatError::Status { code: 401, ref body }) if body == "invalid key"
    ));
}

#[tokio::test]
async fn empty_choices_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(test_config(&server.uri())).expect("Failed to create client");

    let result = client.prompt("Hi", &[]).await;

    assert!(matches!(result, Err(ChatError::EmptyResponse)));
}

#[tokio::test]
async fn missing_content_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"role": "assistant"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(test_config(&server.uri())).expect("Failed to create client");

    let result = client.prompt("Hi", &[]).await;

    assert!(matches!(result, Err(ChatError::EmptyResponse)));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(test_config(&server.uri())).expect("Failed to create client");

    let result = client.prompt("Hi", &[]).await;

    assert!(matches!(result, Err(ChatError::InvalidResponse(_))));
}
