use crate::context::RequestContext;

pub trait ResponseSender: Send + Sync {
    /// Deliver `ctx.response` to `ctx.client`.
    ///
    /// Delivery failures are the sender's concern and are not reported back.
    fn send(&self, ctx: &RequestContext);
}
