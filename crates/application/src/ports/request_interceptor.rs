use super::ResponseFactory;
use crate::context::RequestContext;
use crate::interception::Decision;

/// Read-only view of the proxy handed to interceptors.
#[derive(Clone, Copy)]
pub struct ProxyHandle<'a> {
    messages: &'a dyn ResponseFactory,
}

impl<'a> ProxyHandle<'a> {
    pub fn new(messages: &'a dyn ResponseFactory) -> Self {
        Self { messages }
    }

    /// Builder for replies to the query being inspected.
    pub fn messages(&self) -> &'a dyn ResponseFactory {
        self.messages
    }
}

/// Policy hook run once per request before resolution starts.
///
/// One instance serves every in-flight request concurrently. The context is
/// only borrowed, so the response slot can be filled exclusively through the
/// returned [`Decision`].
pub trait RequestInterceptor: Send + Sync {
    fn decide(&self, proxy: &ProxyHandle<'_>, ctx: &RequestContext) -> Decision;
}
