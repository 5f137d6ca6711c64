//! Integration tests for the training socket against a loopback
//! tungstenite server.

use futures_util::{SinkExt, StreamExt};
use mlplay::config::Config;
use mlplay::stream::StreamMessage;
use mlplay::websocket::{connect_training, WsEvent};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

async fn drain(rx: &mut mpsc::UnboundedReceiver<WsEvent>) -> Vec<WsEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_frames_decode_in_order_and_close_fires_once() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();
        ws.send(Message::Text(
            r#"{"epoch":1,"loss":0.9,"accuracy":0.5,"progress":0.1}"#.to_string(),
        ))
        .await
        .unwrap();
        ws.send(Message::Text("warmup finished".to_string()))
            .await
            .unwrap();
        ws.close(None).await.unwrap();
    });

    let config = Config::new().with_api_base(format!("http://{}/api", addr));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = connect_training(&config, "sess-1", tx).await.unwrap();

    let events = drain(&mut rx).await;
    server.await.unwrap();

    assert_eq!(events.len(), 3);
    match &events[0] {
        WsEvent::Message(StreamMessage::Json(value)) => {
            assert_eq!(value["epoch"], 1);
        }
        other => panic!("expected decoded JSON frame, got {:?}", other),
    }
    match &events[1] {
        WsEvent::Message(StreamMessage::Raw(raw)) => {
            assert_eq!(raw, "warmup finished");
        }
        other => panic!("expected raw passthrough frame, got {:?}", other),
    }
    assert!(matches!(events[2], WsEvent::Closed));

    // The channel is exhausted: Closed arrived exactly once.
    assert!(rx.recv().await.is_none());

    // Disposal after natural close is a no-op, twice over.
    handle.close();
    handle.close();
    assert!(handle.is_closed());
}

#[tokio::test]
async fn test_caller_close_is_idempotent_and_silent() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Server holds the connection open until the client closes it.
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();
        while let Some(msg) = ws.next().await {
            if matches!(msg, Ok(Message::Close(_)) | Err(_)) {
                break;
            }
        }
    });

    let config = Config::new().with_api_base(format!("http://{}/api", addr));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = connect_training(&config, "sess-2", tx).await.unwrap();

    handle.close();
    handle.close();
    assert!(handle.is_closed());

    // A caller-initiated close never reports Closed.
    assert!(rx.recv().await.is_none());
    server.await.unwrap();
}

#[tokio::test]
async fn test_ws_url_derives_scheme_from_api_base() {
    let config = Config::new().with_api_base("https://play.example.com/api");
    assert_eq!(
        config.training_ws_url("abc"),
        "wss://play.example.com/ws/sessions/abc/training"
    );
}
