/*
[INPUT]:  WebSocket path, credentials and reconnect configuration
[OUTPUT]: Parsed stream messages via channels, with keepalive and reconnect
[POS]:    WebSocket layer - connection lifecycle handling
[UPDATE]: When changing keepalive, reconnect or subscription logic
*/

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{Mutex, mpsc, watch};
use tokio::time::MissedTickBehavior;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Request;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tracing::{debug, info, warn};

use crate::auth::{Credentials, RequestSigner};
use crate::http::client::{API_KEY_HEADER, SIGNATURE_HEADER, SUBACCOUNT_HEADER, TIMESTAMP_HEADER};
use crate::http::{Result, ValrError};
use crate::ws::message::{StreamMessage, TradeEvent};

/// Base URL for the VALR WebSocket API
const DEFAULT_WS_BASE_URL: &str = "wss://api.valr.com";
const DEFAULT_RECONNECT_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_PING_INTERVAL: Duration = Duration::from_secs(30);
const MESSAGE_BUFFER: usize = 100;
const PING_MESSAGE: &str = r#"{"type":"PING"}"#;
const PARSE_FAIL_LOG_LIMIT: usize = 3;
const RAW_LOG_MAX_BYTES: usize = 1024;

static PARSE_FAIL_LOG_COUNT: AtomicUsize = AtomicUsize::new(0);

/// The two VALR WebSocket endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WsPath {
    /// Account events: balance updates, order status, account trades
    Account,
    /// Market data: orderbook, market summary, trades
    Trade,
}

impl WsPath {
    pub fn as_str(self) -> &'static str {
        match self {
            WsPath::Account => "/ws/account",
            WsPath::Trade => "/ws/trade",
        }
    }
}

/// WebSocket client configuration
#[derive(Debug, Clone)]
pub struct WsConfig {
    pub base_url: String,
    /// Fixed delay between reconnect attempts
    pub reconnect_interval: Duration,
    /// Idle time before a keepalive PING is sent
    pub ping_interval: Duration,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WS_BASE_URL.to_string(),
            reconnect_interval: DEFAULT_RECONNECT_INTERVAL,
            ping_interval: DEFAULT_PING_INTERVAL,
        }
    }
}

/// Why a connection session ended
enum SessionEnd {
    /// disconnect() was called or the client was dropped
    Shutdown,
    /// The message receiver was dropped; no point reconnecting
    ReceiverDropped,
    /// The socket failed or closed; the supervisor will reconnect
    ConnectionLost(String),
}

/// WebSocket client for the VALR streams.
///
/// `connect` spawns a supervisor task that keeps one socket open: it signs
/// the upgrade request, forwards parsed messages to the channel handed out by
/// [`take_receiver`](Self::take_receiver), sends a keepalive PING after
/// `ping_interval` without traffic, and reopens the socket after
/// `reconnect_interval` whenever it drops. The server replays an
/// `AUTHENTICATED` message on every (re)connect; consumers use it as the
/// signal to resubscribe.
#[derive(Debug)]
pub struct ValrWebSocket {
    config: WsConfig,
    credentials: Credentials,
    path: WsPath,
    message_tx: mpsc::Sender<StreamMessage>,
    message_rx: Option<mpsc::Receiver<StreamMessage>>,
    outbound_tx: Arc<Mutex<Option<mpsc::Sender<WsMessage>>>>,
    shutdown_tx: Option<watch::Sender<bool>>,
}

impl ValrWebSocket {
    /// Create a new WebSocket client for the given stream
    pub fn new(credentials: Credentials, path: WsPath) -> Self {
        Self::with_config(credentials, path, WsConfig::default())
    }

    /// Create a new WebSocket client with custom configuration
    pub fn with_config(credentials: Credentials, path: WsPath, config: WsConfig) -> Self {
        let (message_tx, message_rx) = mpsc::channel(MESSAGE_BUFFER);
        Self {
            config,
            credentials,
            path,
            message_tx,
            message_rx: Some(message_rx),
            outbound_tx: Arc::new(Mutex::new(None)),
            shutdown_tx: None,
        }
    }

    /// Get the message receiver
    pub fn take_receiver(&mut self) -> Option<mpsc::Receiver<StreamMessage>> {
        self.message_rx.take()
    }

    /// Connect and keep the connection alive until [`disconnect`](Self::disconnect).
    ///
    /// Calling this while already connected tears the old session down first.
    pub fn connect(&mut self) {
        self.disconnect();

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        self.shutdown_tx = Some(shutdown_tx);

        tokio::spawn(run_supervisor(
            self.config.clone(),
            self.credentials.clone(),
            self.path,
            self.message_tx.clone(),
            Arc::clone(&self.outbound_tx),
            shutdown_rx,
        ));
    }

    /// Close the connection and stop reconnecting
    pub fn disconnect(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(true);
        }
    }

    /// Subscribe to a trade stream event for the given pairs
    pub async fn subscribe(&self, event: TradeEvent, pairs: &[&str]) -> Result<()> {
        self.send_subscription(event, pairs).await
    }

    /// Clear the subscription for a trade stream event.
    ///
    /// An empty pairs list removes the subscription on the server side.
    pub async fn unsubscribe(&self, event: TradeEvent) -> Result<()> {
        self.send_subscription(event, &[]).await
    }

    async fn send_subscription(&self, event: TradeEvent, pairs: &[&str]) -> Result<()> {
        let message = serde_json::json!({
            "type": "SUBSCRIBE",
            "subscriptions": [
                {
                    "event": event.as_str(),
                    "pairs": pairs,
                }
            ]
        });
        self.send_text(message.to_string()).await?;
        info!(event = event.as_str(), pairs = pairs.len(), "ws subscription sent");
        Ok(())
    }

    async fn send_text(&self, payload: String) -> Result<()> {
        let sender = {
            let guard = self.outbound_tx.lock().await;
            guard.clone().ok_or(ValrError::NotConnected)?
        };

        sender
            .send(WsMessage::Text(payload.into()))
            .await
            .map_err(|_| ValrError::NotConnected)
    }
}

impl Drop for ValrWebSocket {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Reconnect loop: run sessions until shutdown, waiting the fixed interval
/// between attempts.
async fn run_supervisor(
    config: WsConfig,
    credentials: Credentials,
    path: WsPath,
    message_tx: mpsc::Sender<StreamMessage>,
    outbound_state: Arc<Mutex<Option<mpsc::Sender<WsMessage>>>>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        match run_session(
            &config,
            &credentials,
            path,
            &message_tx,
            &outbound_state,
            &mut shutdown_rx,
        )
        .await
        {
            SessionEnd::Shutdown => break,
            SessionEnd::ReceiverDropped => {
                info!(path = path.as_str(), "message receiver dropped, stopping");
                break;
            }
            SessionEnd::ConnectionLost(reason) => {
                warn!(
                    path = path.as_str(),
                    reason = %reason,
                    delay_secs = config.reconnect_interval.as_secs(),
                    "connection lost, reconnecting"
                );
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(config.reconnect_interval) => {}
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    info!(path = path.as_str(), "websocket client stopped");
}

/// Run one connection until it ends, pumping messages both ways
async fn run_session(
    config: &WsConfig,
    credentials: &Credentials,
    path: WsPath,
    message_tx: &mpsc::Sender<StreamMessage>,
    outbound_state: &Arc<Mutex<Option<mpsc::Sender<WsMessage>>>>,
    shutdown_rx: &mut watch::Receiver<bool>,
) -> SessionEnd {
    let request = match signed_ws_request(config, credentials, path) {
        Ok(request) => request,
        Err(err) => return SessionEnd::ConnectionLost(err.to_string()),
    };

    info!(path = path.as_str(), "connecting websocket");
    let (ws_stream, _response) = match connect_async(request).await {
        Ok(connected) => connected,
        Err(err) => return SessionEnd::ConnectionLost(err.to_string()),
    };
    info!(path = path.as_str(), "websocket connected");

    let (mut write, mut read) = ws_stream.split();
    let (outbound_tx, mut outbound_rx) = mpsc::channel(MESSAGE_BUFFER);
    *outbound_state.lock().await = Some(outbound_tx);

    let mut ping_timer = tokio::time::interval(config.ping_interval);
    ping_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // push the first tick one full interval out
    ping_timer.reset();

    let end = loop {
        tokio::select! {
            biased;

            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    let _ = write.send(WsMessage::Close(None)).await;
                    break SessionEnd::Shutdown;
                }
            }

            outbound = outbound_rx.recv() => {
                match outbound {
                    Some(message) => {
                        if write.send(message).await.is_err() {
                            break SessionEnd::ConnectionLost("send failed".to_string());
                        }
                    }
                    None => {
                        let _ = write.send(WsMessage::Close(None)).await;
                        break SessionEnd::Shutdown;
                    }
                }
            }

            incoming = read.next() => {
                // any inbound traffic counts as liveness
                ping_timer.reset();
                match incoming {
                    Some(Ok(WsMessage::Close(frame))) => {
                        let reason = frame
                            .map(|f| format!("close frame: {} {}", f.code, f.reason))
                            .unwrap_or_else(|| "close frame".to_string());
                        break SessionEnd::ConnectionLost(reason);
                    }
                    Some(Ok(WsMessage::Ping(payload))) => {
                        if write.send(WsMessage::Pong(payload)).await.is_err() {
                            break SessionEnd::ConnectionLost("pong send failed".to_string());
                        }
                    }
                    Some(Ok(WsMessage::Pong(_))) => {}
                    Some(Ok(message)) => {
                        if let Some(parsed) = parse_message(message)
                            && message_tx.send(parsed).await.is_err()
                        {
                            break SessionEnd::ReceiverDropped;
                        }
                    }
                    Some(Err(err)) => break SessionEnd::ConnectionLost(err.to_string()),
                    None => break SessionEnd::ConnectionLost("stream ended".to_string()),
                }
            }

            _ = ping_timer.tick() => {
                debug!(path = path.as_str(), "sending keepalive ping");
                if write.send(WsMessage::Text(PING_MESSAGE.into())).await.is_err() {
                    break SessionEnd::ConnectionLost("ping send failed".to_string());
                }
            }
        }
    };

    *outbound_state.lock().await = None;
    end
}

/// Build the upgrade request carrying the signed VALR headers.
///
/// Signed exactly like a REST GET on the stream path with an empty body.
fn signed_ws_request(config: &WsConfig, credentials: &Credentials, path: WsPath) -> Result<Request> {
    let url = format!("{}{}", config.base_url, path.as_str());
    let mut request = url
        .into_client_request()
        .map_err(|err| ValrError::WebSocket(err.to_string()))?;

    let timestamp = Utc::now().timestamp_millis();
    let signature = RequestSigner::new(credentials).sign_request(timestamp, "GET", path.as_str(), "");

    let headers = request.headers_mut();
    headers.insert(API_KEY_HEADER, header_value(credentials.api_key())?);
    headers.insert(SIGNATURE_HEADER, header_value(&signature)?);
    headers.insert(TIMESTAMP_HEADER, header_value(&timestamp.to_string())?);
    if let Some(subaccount_id) = credentials.subaccount_id() {
        headers.insert(SUBACCOUNT_HEADER, header_value(subaccount_id)?);
    }

    Ok(request)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| ValrError::Config("header value contains invalid characters".to_string()))
}

fn parse_message(message: WsMessage) -> Option<StreamMessage> {
    let text: String = match message {
        WsMessage::Text(text) => text.to_string(),
        WsMessage::Binary(bytes) => String::from_utf8(bytes.to_vec()).ok()?,
        _ => return None,
    };

    match serde_json::from_str::<StreamMessage>(&text) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log_parse_fail_once(&err, &text);
            Some(StreamMessage::Other)
        }
    }
}

fn log_parse_fail_once(err: &serde_json::Error, raw: &str) {
    let count = PARSE_FAIL_LOG_COUNT.fetch_add(1, Ordering::Relaxed);
    if count < PARSE_FAIL_LOG_LIMIT {
        let preview = truncate_for_log(raw, RAW_LOG_MAX_BYTES);
        warn!(
            sample_index = count + 1,
            sample_limit = PARSE_FAIL_LOG_LIMIT,
            error = %err,
            bytes = raw.len(),
            message = %preview,
            "ws message parse failed"
        );
    }
}

fn truncate_for_log(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut out = String::with_capacity(max_len + 3);
    out.push_str(&value[..max_len]);
    out.push_str("...");
    out
}
