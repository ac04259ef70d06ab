use super::message_builder::MessageBuilder;
use ferrous_proxy_application::ports::ResponseSender;
use ferrous_proxy_application::RequestContext;
use std::net::SocketAddr;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{error, warn};

/// Serialized reply waiting for the transport to write it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundResponse {
    pub client: SocketAddr,
    pub bytes: Vec<u8>,
}

/// Hands finalized responses to the transport task over a bounded channel.
///
/// Never blocks: a full or closed channel drops the response with a warning.
#[derive(Clone)]
pub struct ChannelResponseSender {
    tx: mpsc::Sender<OutboundResponse>,
}

impl ChannelResponseSender {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<OutboundResponse>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }
}

impl ResponseSender for ChannelResponseSender {
    fn send(&self, ctx: &RequestContext) {
        let Some(response) = ctx.response.as_ref() else {
            warn!(client = %ctx.client, "No response to send");
            return;
        };

        let bytes = match MessageBuilder::serialize(response) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, client = %ctx.client, "Failed to serialize response");
                return;
            }
        };

        let outbound = OutboundResponse {
            client: ctx.client,
            bytes,
        };

        match self.tx.try_send(outbound) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(client = %ctx.client, "Response queue full, dropping response");
            }
            Err(TrySendError::Closed(_)) => {
                warn!(client = %ctx.client, "Response queue closed, dropping response");
            }
        }
    }
}
