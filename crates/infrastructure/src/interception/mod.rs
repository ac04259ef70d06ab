mod rules;

pub use rules::RuleInterceptor;

use ferrous_proxy_application::ports::RequestInterceptor;
use ferrous_proxy_application::NoopInterceptor;
use ferrous_proxy_domain::InterceptionConfig;
use std::sync::Arc;
use tracing::info;

/// Pick the interceptor for a configuration. Inactive configs get the no-op one.
pub fn build_interceptor(config: &InterceptionConfig) -> Arc<dyn RequestInterceptor> {
    if !config.is_active() {
        info!("Request interception disabled");
        return Arc::new(NoopInterceptor);
    }

    info!(
        rules = config.rules.len(),
        refuse_non_local = config.refuse_non_local,
        "Request interception enabled"
    );
    Arc::new(RuleInterceptor::new(config))
}
