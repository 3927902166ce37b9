//! Bridge server and client.
//!
//! NDJSON over a Unix domain socket: each connection carries method calls,
//! one JSON document per line, answered in order on the same connection.

use crate::{ChannelError, ChannelResult};
use bridge_protocol_types::{error_codes, Method, MethodCall, Reply};
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, error, info, warn};

/// Handler function type for bridge methods.
pub type HandlerFn =
    Box<dyn Fn(MethodCall) -> Pin<Box<dyn Future<Output = Reply> + Send>> + Send + Sync>;

/// Bridge server that listens on a Unix domain socket.
pub struct BridgeServer {
    socket_path: PathBuf,
    handlers: Arc<RwLock<HashMap<Method, HandlerFn>>>,
    shutdown_tx: broadcast::Sender<()>,
}

impl BridgeServer {
    /// Create a new bridge server.
    pub fn new(socket_path: &Path) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            socket_path: socket_path.to_path_buf(),
            handlers: Arc::new(RwLock::new(HashMap::new())),
            shutdown_tx,
        }
    }

    /// Register a handler for a method.
    pub async fn register_handler<F, Fut>(&self, method: Method, handler: F)
    where
        F: Fn(MethodCall) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Reply> + Send + 'static,
    {
        let boxed_handler: HandlerFn = Box::new(move |call| Box::pin(handler(call)));
        self.handlers.write().await.insert(method, boxed_handler);
    }

    /// Get a shutdown receiver.
    pub fn shutdown_receiver(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Get a shutdown sender (for handlers that need to trigger shutdown).
    pub fn shutdown_sender(&self) -> broadcast::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Trigger shutdown.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }

    /// Start the server and listen for connections.
    pub async fn run(&self) -> ChannelResult<()> {
        // Remove a stale socket file from a previous run
        if self.socket_path.exists() {
            std::fs::remove_file(&self.socket_path)?;
        }

        if let Some(parent) = self.socket_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let listener = UnixListener::bind(&self.socket_path)?;
        info!(path = %self.socket_path.display(), "Bridge listening");

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let handlers = self.handlers.clone();

        loop {
            tokio::select! {
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((stream, _)) => {
                            let handlers = handlers.clone();
                            tokio::spawn(async move {
                                if let Err(e) = handle_connection(stream, handlers).await {
                                    error!(error = %e, "Connection error");
                                }
                            });
                        }
                        Err(e) => {
                            error!(error = %e, "Accept error");
                        }
                    }
                }
                _ = shutdown_rx.recv() => {
                    info!("Bridge shutting down");
                    break;
                }
            }
        }

        // Cleanup socket file
        let _ = std::fs::remove_file(&self.socket_path);

        Ok(())
    }
}

/// Handle a single client connection.
async fn handle_connection(
    stream: UnixStream,
    handlers: Arc<RwLock<HashMap<Method, HandlerFn>>>,
) -> ChannelResult<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    debug!("Client connected");

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            debug!("Client disconnected");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!(call = %trimmed, "Received call");

        let call = match MethodCall::from_json(trimmed) {
            Ok(call) => call,
            Err(e) => {
                warn!(error = %e, "Failed to parse call");
                let reply =
                    Reply::error("", error_codes::PARSE_ERROR, &format!("Parse error: {}", e));
                let reply_json = reply.to_json()?;
                writer.write_all(reply_json.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
                continue;
            }
        };

        // A method name outside the surface is still answered, with the
        // call's own id, rather than dropped.
        let reply = match Method::from_name(&call.method) {
            Some(method) => {
                let handlers = handlers.read().await;
                match handlers.get(&method) {
                    Some(handler) => handler(call).await,
                    None => Reply::not_implemented(&call.id, method.name()),
                }
            }
            None => Reply::not_implemented(&call.id, &call.method),
        };

        let reply_json = reply.to_json()?;
        debug!(reply = %reply_json, "Sending reply");

        writer.write_all(reply_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

/// Bridge client for talking to a running daemon.
pub struct BridgeClient {
    socket_path: PathBuf,
}

impl BridgeClient {
    /// Create a new bridge client.
    pub fn new(socket_path: &Path) -> Self {
        Self {
            socket_path: socket_path.to_path_buf(),
        }
    }

    /// Send a call and wait for its reply.
    pub async fn call(&self, call: MethodCall) -> ChannelResult<Reply> {
        let stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|e| ChannelError::Socket(format!("Failed to connect: {}", e)))?;

        let (reader, mut writer) = stream.into_split();
        let mut reader = BufReader::new(reader);

        // Send call
        let call_json = call.to_json()?;
        writer.write_all(call_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        // Read reply
        let mut line = String::new();
        reader.read_line(&mut line).await?;

        if line.is_empty() {
            return Err(ChannelError::ConnectionClosed);
        }

        let reply = Reply::from_json(line.trim())?;
        Ok(reply)
    }

    /// Send a method call with no arguments.
    pub async fn call_method(&self, method: Method) -> ChannelResult<Reply> {
        self.call(MethodCall::new(method)).await
    }

    /// Send a method call with arguments.
    pub async fn call_with_args(
        &self,
        method: Method,
        args: serde_json::Value,
    ) -> ChannelResult<Reply> {
        self.call(MethodCall::with_args(method, args)).await
    }

    /// Check whether a bridge daemon is listening.
    pub async fn is_bridge_running(&self) -> bool {
        self.call_method(Method::Health).await.is_ok()
    }
}
