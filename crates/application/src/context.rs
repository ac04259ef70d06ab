use ferrous_proxy_domain::DomainError;
use hickory_proto::op::{Message, MessageType};
use std::net::SocketAddr;

/// State of one in-flight query, owned by the task processing it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub query: Message,
    pub client: SocketAddr,
    pub is_local_client: bool,
    /// Empty until a response has been decided.
    pub response: Option<Message>,
}

impl RequestContext {
    pub fn new(query: Message, client: SocketAddr, is_local_client: bool) -> Self {
        Self {
            query,
            client,
            is_local_client,
            response: None,
        }
    }

    /// Parse a query received on the wire.
    pub fn from_wire(
        bytes: &[u8],
        client: SocketAddr,
        is_local_client: bool,
    ) -> Result<Self, DomainError> {
        let query = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS query: {}", e))
        })?;

        if query.message_type() != MessageType::Query {
            return Err(DomainError::InvalidDnsMessage(
                "Expected a query, got a response".to_string(),
            ));
        }

        Ok(Self::new(query, client, is_local_client))
    }

    /// First question name in ASCII (wire) form, without the trailing dot.
    pub fn query_domain(&self) -> Option<String> {
        self.query
            .queries()
            .first()
            .map(|q| q.name().to_ascii().trim_end_matches('.').to_string())
    }
}
