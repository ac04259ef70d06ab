use clap::Parser;
use ferrous_proxy_application::interception::rcode_name;
use ferrous_proxy_application::RequestContext;
use ferrous_proxy_domain::CliOverrides;
use ferrous_proxy_infrastructure::dns::MessageBuilder;
use hickory_proto::op::Message;
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-proxy")]
#[command(version)]
#[command(about = "Ferrous Proxy - dry-run the pre-resolution interception policy")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Domain to query
    #[arg(short = 'd', long)]
    domain: String,

    /// Record type (A, AAAA, MX, ...)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: String,

    /// Client address the query appears to come from
    #[arg(long, default_value = "127.0.0.1")]
    client: IpAddr,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Ignore the interception section of the config
    #[arg(long)]
    no_interception: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        disable_interception: cli.no_interception,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Ferrous Proxy v{}", env!("CARGO_PKG_VERSION"));

    let mut services = di::InterceptionServices::new(&config)?;

    let record_type = MessageBuilder::parse_record_type(&cli.record_type)?;
    let query = MessageBuilder::build_query(&cli.domain, record_type)?;
    let client = SocketAddr::new(cli.client, 0);
    let is_local = services.locality.is_local(cli.client);

    debug!(client = %client, is_local, "Client classified");

    let mut ctx = RequestContext::new(query, client, is_local);

    if services.use_case.execute(&mut ctx) {
        println!("continue");
        return Ok(());
    }

    if let Some(response) = ctx.response.as_ref() {
        let wire_len = services
            .responses
            .try_recv()
            .map(|outbound| outbound.bytes.len())
            .unwrap_or_default();
        println!("{}", describe(response, wire_len));
    }

    Ok(())
}

fn describe(response: &Message, wire_len: usize) -> String {
    format!(
        "stop id={} status={} bytes={}",
        response.id(),
        rcode_name(response.response_code()),
        wire_len
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::{MessageType, OpCode, ResponseCode};

    #[test]
    fn test_describe_stop() {
        let mut response = Message::new(42, MessageType::Response, OpCode::Query);
        response.set_response_code(ResponseCode::NXDomain);

        assert_eq!(describe(&response, 29), "stop id=42 status=NXDOMAIN bytes=29");
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["ferrous-proxy", "--domain", "example.com"]);

        assert_eq!(cli.record_type, "A");
        assert_eq!(cli.client, IpAddr::from([127, 0, 0, 1]));
        assert!(!cli.no_interception);
    }
}
