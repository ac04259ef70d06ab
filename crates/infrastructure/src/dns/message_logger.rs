use ferrous_proxy_application::interception::rcode_name;
use ferrous_proxy_application::ports::MessageLogger;
use hickory_proto::op::Message;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMessageLogger;

impl MessageLogger for TracingMessageLogger {
    fn log_message(&self, message: &Message) {
        let question = message
            .queries()
            .first()
            .map(|q| format!("{} {:?}", q.name(), q.query_type()))
            .unwrap_or_default();

        debug!(
            id = message.id(),
            rcode = %rcode_name(message.response_code()),
            question = %question,
            answers = message.answers().len(),
            "DNS message"
        );
    }
}
