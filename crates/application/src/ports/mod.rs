mod message_logger;
mod request_interceptor;
mod response_factory;
mod response_sender;

pub use message_logger::MessageLogger;
pub use request_interceptor::{ProxyHandle, RequestInterceptor};
pub use response_factory::ResponseFactory;
pub use response_sender::ResponseSender;
