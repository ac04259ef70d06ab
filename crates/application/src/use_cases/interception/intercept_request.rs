use crate::context::RequestContext;
use crate::interception::{Decision, TerminalResponse};
use crate::ports::{MessageLogger, ProxyHandle, RequestInterceptor, ResponseFactory, ResponseSender};
use hickory_proto::op::Message;
use std::sync::Arc;
use tracing::debug;

pub struct InterceptRequestUseCase {
    interceptor: Arc<dyn RequestInterceptor>,
    messages: Arc<dyn ResponseFactory>,
    message_logger: Arc<dyn MessageLogger>,
    sender: Arc<dyn ResponseSender>,
}

impl InterceptRequestUseCase {
    pub fn new(
        interceptor: Arc<dyn RequestInterceptor>,
        messages: Arc<dyn ResponseFactory>,
        message_logger: Arc<dyn MessageLogger>,
        sender: Arc<dyn ResponseSender>,
    ) -> Self {
        Self {
            interceptor,
            messages,
            message_logger,
            sender,
        }
    }

    /// Run the interceptor for one request.
    ///
    /// Returns `true` when resolution should proceed; the response slot is
    /// then left untouched. On `false` the response slot is filled and the
    /// response has already been handed to the sender.
    pub fn execute(&self, ctx: &mut RequestContext) -> bool {
        let proxy = ProxyHandle::new(self.messages.as_ref());

        let response = match self.interceptor.decide(&proxy, ctx) {
            Decision::Continue => return true,
            Decision::Respond(terminal) => {
                debug!(error = %terminal, client = %ctx.client, "Request intercepted");
                terminal.into_response()
            }
            Decision::Fail(err) => {
                debug!(
                    error = %format_args!("{:#}", err),
                    client = %ctx.client,
                    "Request intercepted"
                );
                self.response_for_error(&err, &ctx.query)
            }
        };

        self.message_logger.log_message(&response);
        ctx.response = Some(response);
        self.sender.send(ctx);

        false
    }

    fn response_for_error(&self, err: &anyhow::Error, query: &Message) -> Message {
        match TerminalResponse::find_in(err) {
            Some(terminal) => terminal.response().clone(),
            None => self.messages.servfail(query),
        }
    }
}
