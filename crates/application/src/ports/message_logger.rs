use hickory_proto::op::Message;

pub trait MessageLogger: Send + Sync {
    /// Record a finalized message. Must never fail the request.
    fn log_message(&self, message: &Message);
}
