use super::rcode::rcode_name;
use hickory_proto::op::Message;
use std::fmt;

/// Error that stops a request and names the exact response to send.
///
/// Both the cause and the response are always present. The response must
/// answer the originating query (same id and question).
#[derive(Debug)]
pub struct TerminalResponse {
    cause: anyhow::Error,
    response: Message,
}

impl TerminalResponse {
    pub fn new(cause: impl Into<anyhow::Error>, response: Message) -> Self {
        Self {
            cause: cause.into(),
            response,
        }
    }

    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }

    pub fn response(&self) -> &Message {
        &self.response
    }

    pub fn into_response(self) -> Message {
        self.response
    }

    /// First `TerminalResponse` anywhere in the cause chain of `err`.
    pub fn find_in(err: &anyhow::Error) -> Option<&TerminalResponse> {
        err.chain().find_map(|e| e.downcast_ref::<TerminalResponse>())
    }
}

impl fmt::Display for TerminalResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; respond with {}",
            self.cause,
            rcode_name(self.response.response_code())
        )
    }
}

impl std::error::Error for TerminalResponse {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.cause)
    }
}
