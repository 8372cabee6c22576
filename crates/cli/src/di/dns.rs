use ferrous_relay_application::use_cases::{ForwardQueryUseCase, HandleDnsQueryUseCase};
use ferrous_relay_domain::{Config, ResponseMode};
use ferrous_relay_infrastructure::dns::UdpTransport;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub mode: ResponseMode,
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mode = config.dns.response_mode()?;
        let policy = config.dns.response_policy();

        match mode.upstream() {
            None => info!(
                placeholder = %policy.placeholder_address,
                ttl = policy.answer_ttl,
                "Answering every question locally"
            ),
            Some(upstream) => info!(
                upstream = %upstream,
                timeout_ms = config.dns.query_timeout,
                "Forwarding questions upstream"
            ),
        }

        let transport = Arc::new(UdpTransport::new(config.dns.query_timeout()));
        let forwarder = Arc::new(ForwardQueryUseCase::new(transport, policy.clone()));
        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(mode, policy, forwarder));

        Ok(Self {
            mode,
            handler_use_case,
        })
    }
}
