//! Integration tests for the Telegram gateway
//!
//! The Bot API is replaced by a wiremock server; tests inspect the requests
//! the gateway made.

use pretty_assertions::assert_eq;
use teloxide::Bot;
use tutorbot::TelegramGateway;
use tutorcore::dialogue::keyboards;
use tutorcore::{ChatGateway, ChatKey, Reply, TopicCatalog};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CHAT: ChatKey = ChatKey(4242);

fn message_json(extra: serde_json::Value) -> serde_json::Value {
    let mut result = serde_json::json!({
        "message_id": 1,
        "date": 1_700_000_000,
        "chat": {"id": CHAT.0, "type": "private", "first_name": "Test"},
        "from": {"id": CHAT.0, "is_bot": false, "first_name": "Test"}
    });
    if let (Some(target), Some(extra)) = (result.as_object_mut(), extra.as_object()) {
        for (k, v) in extra {
            target.insert(k.clone(), v.clone());
        }
    }
    serde_json::json!({"ok": true, "result": result})
}

async fn mock_bot_api(server: &MockServer, api_method: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path_regex(format!("(?i)^/bot[^/]+/{}$", api_method)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn gateway(server: &MockServer) -> TelegramGateway {
    let bot = Bot::new("123456:TEST").set_api_url(server.uri().parse().unwrap());
    TelegramGateway::new(bot)
}

#[tokio::test]
async fn test_reply_sends_text_keyboard_and_parse_mode() {
    let server = MockServer::start().await;
    mock_bot_api(&server, "sendmessage", message_json(serde_json::json!({"text": "ok"}))).await;

    let reply = Reply::text("Тема: *Arrays*\nОбери:")
        .markdown_v2()
        .with_keyboard(keyboards::sub_menu());
    gateway(&server).reply(CHAT, reply).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    assert_eq!(body["chat_id"], CHAT.0);
    assert_eq!(body["text"], "Тема: *Arrays*\nОбери:");
    assert_eq!(body["parse_mode"], "MarkdownV2");
    assert_eq!(body["reply_markup"]["resize_keyboard"], true);
    assert_eq!(body["reply_markup"]["keyboard"][0][1]["text"], "Практика");
    assert_eq!(body["reply_markup"]["keyboard"][1][0]["text"], "Назад");
}

#[tokio::test]
async fn test_plain_reply_has_no_parse_mode() {
    let server = MockServer::start().await;
    mock_bot_api(&server, "sendmessage", message_json(serde_json::json!({"text": "ok"}))).await;

    let catalog = TopicCatalog::builtin();
    let reply = Reply::text("Привіт! Обери тему:").with_keyboard(keyboards::main_menu(&catalog));
    gateway(&server).reply(CHAT, reply).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("parse_mode").is_none());
    assert_eq!(body["reply_markup"]["keyboard"][0][0]["text"], catalog.topics()[0].title.as_str());
}

#[tokio::test]
async fn test_send_document_uploads_file_under_given_name() {
    let server = MockServer::start().await;
    mock_bot_api(
        &server,
        "senddocument",
        message_json(serde_json::json!({
            "document": {"file_id": "doc-id", "file_unique_id": "doc-uid", "file_size": 11}
        })),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("staged.bin");
    std::fs::write(&path, b"%PDF-arrays").unwrap();
    let file = tokio::fs::File::open(&path).await.unwrap();

    gateway(&server)
        .send_document(CHAT, file, "arrays_practice.pdf".to_string())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("arrays_practice.pdf"));
    assert!(body.contains("%PDF-arrays"));
}

#[tokio::test]
async fn test_api_error_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let result = gateway(&server).reply(CHAT, Reply::text("hi")).await;

    assert!(matches!(result, Err(tutorcore::AppError::Telegram(_))));
}
