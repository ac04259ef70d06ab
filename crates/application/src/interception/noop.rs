use super::decision::Decision;
use crate::context::RequestContext;
use crate::ports::{ProxyHandle, RequestInterceptor};

/// Interceptor used when no policy is configured. Always continues.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInterceptor;

impl RequestInterceptor for NoopInterceptor {
    fn decide(&self, _proxy: &ProxyHandle<'_>, _ctx: &RequestContext) -> Decision {
        Decision::Continue
    }
}
