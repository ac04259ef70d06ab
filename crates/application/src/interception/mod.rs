mod decision;
mod noop;
mod rcode;
mod terminal;

pub use decision::Decision;
pub use noop::NoopInterceptor;
pub use rcode::rcode_name;
pub use terminal::TerminalResponse;
