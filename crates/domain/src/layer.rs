use chrono::{DateTime, Utc};
use std::net::IpAddr;

/// Capture metadata the upstream source supplies with every packet.
#[derive(Debug, Clone, Copy)]
pub struct PacketMeta {
    pub timestamp: DateTime<Utc>,
    pub wire_length: u32,
    pub captured_length: u32,
}

/// One parsed protocol segment of a packet, in wire order.
///
/// The set is closed: the wire decoder drops anything it does not recognize
/// before the classifier ever sees it.
#[derive(Debug, Clone)]
pub enum Layer {
    Ethernet,
    Arp,
    Ipv4 {
        source: IpAddr,
        destination: IpAddr,
    },
    Ipv6 {
        source: IpAddr,
        destination: IpAddr,
    },
    Tcp {
        source_port: u16,
        destination_port: u16,
    },
    Udp {
        source_port: u16,
        destination_port: u16,
    },
    Icmpv4,
    Icmpv6,
    Tls,
    Dns(DnsMessage),
}

/// A packet after the wire decoder has run: metadata plus ordered layers.
#[derive(Debug, Clone)]
pub struct DecodedPacket {
    pub meta: PacketMeta,
    pub layers: Vec<Layer>,
}

/// An already-decoded DNS message as handed to the transaction decoder.
#[derive(Debug, Clone, Default)]
pub struct DnsMessage {
    pub id: u16,
    pub response: bool,
    pub questions: Vec<DnsQuestion>,
    pub answers: Vec<DnsAnswer>,
}

#[derive(Debug, Clone)]
pub struct DnsQuestion {
    pub name: String,
    pub record_type: String,
}

/// One answer record, reduced to what the transaction decoder consumes.
/// CNAME-style records carry `alias`, address records carry `address`, and
/// any other record type carries neither.
#[derive(Debug, Clone, Default)]
pub struct DnsAnswer {
    pub alias: Option<String>,
    pub address: Option<IpAddr>,
}

impl DnsAnswer {
    pub fn alias(name: impl Into<String>) -> Self {
        Self {
            alias: Some(name.into()),
            address: None,
        }
    }

    pub fn address(address: IpAddr) -> Self {
        Self {
            alias: None,
            address: Some(address),
        }
    }
}
