use chrono::{DateTime, Utc};
use std::fmt;

/// Topmost recognized protocol of a packet. The classifier assigns the tag
/// of the last recognized layer, so deeper encapsulation wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Eth,
    Arp,
    Ipv4,
    Ipv6,
    Tcp,
    Udp,
    Icmpv4,
    Icmpv6,
    Tls,
    Dns,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Eth => "ETH",
            Protocol::Arp => "ARP",
            Protocol::Ipv4 => "IPv4",
            Protocol::Ipv6 => "IPv6",
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
            Protocol::Icmpv4 => "ICMPv4",
            Protocol::Icmpv6 => "ICMPv6",
            Protocol::Tls => "TLS",
            Protocol::Dns => "DNS",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized per-packet summary handed to presentation. Created once per
/// packet and never mutated afterwards; ports stay empty for protocols that
/// have none.
#[derive(Debug, Clone)]
pub struct PacketRecord {
    pub timestamp: DateTime<Utc>,
    pub wire_length: u32,
    pub captured_length: u32,
    pub source: String,
    pub destination: String,
    pub source_port: String,
    pub destination_port: String,
    pub protocol: Protocol,
}
