use ferrous_proxy_application::ports::ResponseFactory;
use hickory_proto::op::{Message, MessageType, ResponseCode};

/// Builds bare replies (no answers) that echo the query header and questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct HickoryResponseFactory;

impl ResponseFactory for HickoryResponseFactory {
    fn reply(&self, query: &Message, code: ResponseCode) -> Message {
        let mut response = Message::new(query.id(), MessageType::Response, query.op_code());
        response.set_recursion_desired(query.recursion_desired());
        response.set_recursion_available(true);
        response.set_response_code(code);

        for question in query.queries() {
            response.add_query(question.clone());
        }

        response
    }
}
