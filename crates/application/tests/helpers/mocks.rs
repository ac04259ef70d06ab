use ferrous_proxy_application::ports::{
    MessageLogger, ProxyHandle, RequestInterceptor, ResponseFactory, ResponseSender,
};
use ferrous_proxy_application::{Decision, RequestContext};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RecordType};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Mutex;

pub const CLIENT: &str = "192.168.1.100:53000";

pub fn query(id: u16, domain: &str, record_type: RecordType) -> Message {
    let mut q = Query::new();
    q.set_name(Name::from_str(domain).unwrap());
    q.set_query_type(record_type);
    q.set_query_class(hickory_proto::rr::DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(q);
    message
}

pub fn context(id: u16, domain: &str) -> RequestContext {
    RequestContext::new(
        query(id, domain, RecordType::A),
        CLIENT.parse::<SocketAddr>().unwrap(),
        true,
    )
}

#[derive(Default)]
pub struct MockResponseFactory;

impl ResponseFactory for MockResponseFactory {
    fn reply(&self, query: &Message, code: ResponseCode) -> Message {
        let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
        response.set_response_code(code);
        for q in query.queries() {
            response.add_query(q.clone());
        }
        response
    }
}

#[derive(Default)]
pub struct RecordingMessageLogger {
    messages: Mutex<Vec<Message>>,
}

impl RecordingMessageLogger {
    pub fn logged(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }
}

impl MessageLogger for RecordingMessageLogger {
    fn log_message(&self, message: &Message) {
        self.messages.lock().unwrap().push(message.clone());
    }
}

#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<RequestContext>>,
}

impl RecordingSender {
    pub fn sent(&self) -> Vec<RequestContext> {
        self.sent.lock().unwrap().clone()
    }
}

impl ResponseSender for RecordingSender {
    fn send(&self, ctx: &RequestContext) {
        self.sent.lock().unwrap().push(ctx.clone());
    }
}

type DecideFn = dyn Fn(&ProxyHandle<'_>, &RequestContext) -> Decision + Send + Sync;

pub struct ScriptedInterceptor {
    decide: Box<DecideFn>,
}

impl ScriptedInterceptor {
    pub fn new<F>(decide: F) -> Self
    where
        F: Fn(&ProxyHandle<'_>, &RequestContext) -> Decision + Send + Sync + 'static,
    {
        Self {
            decide: Box::new(decide),
        }
    }
}

impl RequestInterceptor for ScriptedInterceptor {
    fn decide(&self, proxy: &ProxyHandle<'_>, ctx: &RequestContext) -> Decision {
        (self.decide)(proxy, ctx)
    }
}
