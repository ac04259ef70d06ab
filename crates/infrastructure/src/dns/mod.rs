pub mod message_builder;
pub mod message_logger;
pub mod responder;
pub mod responses;

pub use message_builder::MessageBuilder;
pub use message_logger::TracingMessageLogger;
pub use responder::{ChannelResponseSender, OutboundResponse};
pub use responses::HickoryResponseFactory;
