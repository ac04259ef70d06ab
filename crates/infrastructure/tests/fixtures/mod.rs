#![allow(dead_code)]

use ferrous_proxy_application::use_cases::InterceptRequestUseCase;
use ferrous_proxy_application::RequestContext;
use ferrous_proxy_domain::{InterceptionConfig, InterceptionRule, RuleAction};
use ferrous_proxy_infrastructure::dns::{
    ChannelResponseSender, HickoryResponseFactory, MessageBuilder, OutboundResponse,
    TracingMessageLogger,
};
use ferrous_proxy_infrastructure::interception::build_interceptor;
use hickory_proto::rr::RecordType;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const LOCAL_CLIENT: &str = "192.168.1.20:40000";
pub const REMOTE_CLIENT: &str = "203.0.113.7:40000";

pub fn rule(domain: &str, action: RuleAction) -> InterceptionRule {
    InterceptionRule {
        domain: domain.to_string(),
        action,
        reason: None,
    }
}

pub fn interception_config(rules: Vec<InterceptionRule>) -> InterceptionConfig {
    InterceptionConfig {
        enabled: true,
        refuse_non_local: false,
        local_networks: vec![],
        rules,
    }
}

pub fn request(id: u16, domain: &str, client: &str, is_local: bool) -> RequestContext {
    let query = MessageBuilder::build_query_with_id(id, domain, RecordType::A).unwrap();
    RequestContext::new(query, client.parse::<SocketAddr>().unwrap(), is_local)
}

pub fn pipeline(
    config: &InterceptionConfig,
) -> (InterceptRequestUseCase, mpsc::Receiver<OutboundResponse>) {
    let (sender, rx) = ChannelResponseSender::new(64);
    let use_case = InterceptRequestUseCase::new(
        build_interceptor(config),
        Arc::new(HickoryResponseFactory),
        Arc::new(TracingMessageLogger),
        Arc::new(sender),
    );
    (use_case, rx)
}
