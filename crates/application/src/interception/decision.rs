use super::terminal::TerminalResponse;

/// Outcome of one interceptor call.
#[derive(Debug)]
pub enum Decision {
    /// Resolve the request normally.
    Continue,
    /// Stop and answer with the carried response.
    Respond(TerminalResponse),
    /// Stop for any other reason.
    ///
    /// A `TerminalResponse` nested anywhere in the error chain still wins
    /// over the generic failure response.
    Fail(anyhow::Error),
}

impl Decision {
    pub fn fail(err: impl Into<anyhow::Error>) -> Self {
        Decision::Fail(err.into())
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Decision::Continue)
    }
}

impl From<TerminalResponse> for Decision {
    fn from(terminal: TerminalResponse) -> Self {
        Decision::Respond(terminal)
    }
}

impl From<anyhow::Result<()>> for Decision {
    fn from(result: anyhow::Result<()>) -> Self {
        match result {
            Ok(()) => Decision::Continue,
            Err(err) => Decision::Fail(err),
        }
    }
}
