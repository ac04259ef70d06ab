use crate::DomainError;
use ipnetwork::IpNetwork;
use std::net::IpAddr;

/// Decides whether a client address belongs to the local network.
///
/// Loopback, private, link-local and unique-local addresses are always
/// local. Additional networks come from configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientLocality {
    networks: Vec<IpNetwork>,
}

impl ClientLocality {
    pub fn new(cidrs: &[String]) -> Result<Self, DomainError> {
        let networks = cidrs
            .iter()
            .map(|cidr| {
                cidr.parse::<IpNetwork>()
                    .map_err(|e| DomainError::InvalidCidr(format!("{}: {}", cidr, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { networks })
    }

    pub fn is_local(&self, ip: IpAddr) -> bool {
        if is_builtin_local(ip) {
            return true;
        }

        self.networks.iter().any(|net| net.contains(ip))
    }
}

fn is_builtin_local(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_loopback() || v4.is_private() || v4.is_link_local(),
        IpAddr::V6(v6) => {
            if let Some(mapped) = v6.to_ipv4_mapped() {
                return is_builtin_local(IpAddr::V4(mapped));
            }
            let first = v6.segments()[0];
            v6.is_loopback() || (first & 0xfe00) == 0xfc00 || (first & 0xffc0) == 0xfe80
        }
    }
}
