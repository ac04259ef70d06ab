use anyhow::anyhow;
use ferrous_proxy_application::ports::{ProxyHandle, RequestInterceptor};
use ferrous_proxy_application::{Decision, RequestContext, TerminalResponse};
use ferrous_proxy_domain::{InterceptionConfig, InterceptionRule, RuleAction};
use hickory_proto::rr::Name;

/// Domain rules from configuration. The first matching rule wins.
pub struct RuleInterceptor {
    rules: Vec<InterceptionRule>,
    refuse_non_local: bool,
}

impl RuleInterceptor {
    pub fn new(config: &InterceptionConfig) -> Self {
        Self {
            rules: config.rules.iter().map(to_ascii_rule).collect(),
            refuse_non_local: config.refuse_non_local,
        }
    }

    fn apply(
        &self,
        rule: &InterceptionRule,
        proxy: &ProxyHandle<'_>,
        ctx: &RequestContext,
    ) -> Decision {
        let cause = anyhow!(rule.reason());
        let messages = proxy.messages();

        let response = match rule.action {
            RuleAction::Nxdomain => messages.nxdomain(&ctx.query),
            RuleAction::Refused => messages.refused(&ctx.query),
            RuleAction::Servfail => messages.servfail(&ctx.query),
            RuleAction::Fail => {
                return Decision::Fail(cause.context(format!("rule for {}", rule.domain)));
            }
        };

        TerminalResponse::new(cause, response).into()
    }
}

impl RequestInterceptor for RuleInterceptor {
    fn decide(&self, proxy: &ProxyHandle<'_>, ctx: &RequestContext) -> Decision {
        if self.refuse_non_local && !ctx.is_local_client {
            let cause = anyhow!("client {} is not local", ctx.client.ip());
            return TerminalResponse::new(cause, proxy.messages().refused(&ctx.query)).into();
        }

        let Some(domain) = ctx.query_domain() else {
            return Decision::Continue;
        };

        match self.rules.iter().find(|rule| rule.matches_domain(&domain)) {
            Some(rule) => self.apply(rule, proxy, ctx),
            None => Decision::Continue,
        }
    }
}

/// Rules are matched against the wire form of the query name, so Unicode
/// rule domains are converted to punycode up front.
fn to_ascii_rule(rule: &InterceptionRule) -> InterceptionRule {
    let domain = match Name::from_utf8(&rule.domain) {
        Ok(name) => name.to_ascii(),
        Err(_) => rule.domain.clone(),
    };

    InterceptionRule {
        domain,
        ..rule.clone()
    }
}
