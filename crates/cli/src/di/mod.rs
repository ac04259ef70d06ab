use ferrous_proxy_application::use_cases::InterceptRequestUseCase;
use ferrous_proxy_domain::{ClientLocality, Config};
use ferrous_proxy_infrastructure::dns::{
    ChannelResponseSender, HickoryResponseFactory, OutboundResponse, TracingMessageLogger,
};
use ferrous_proxy_infrastructure::interception::build_interceptor;
use std::sync::Arc;
use tokio::sync::mpsc;

const RESPONSE_QUEUE_CAPACITY: usize = 1024;

pub struct InterceptionServices {
    pub use_case: Arc<InterceptRequestUseCase>,
    pub locality: ClientLocality,
    pub responses: mpsc::Receiver<OutboundResponse>,
}

impl InterceptionServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let locality = ClientLocality::new(&config.interception.local_networks)?;
        let (sender, responses) = ChannelResponseSender::new(RESPONSE_QUEUE_CAPACITY);

        let use_case = Arc::new(InterceptRequestUseCase::new(
            build_interceptor(&config.interception),
            Arc::new(HickoryResponseFactory),
            Arc::new(TracingMessageLogger),
            Arc::new(sender),
        ));

        Ok(Self {
            use_case,
            locality,
            responses,
        })
    }
}
