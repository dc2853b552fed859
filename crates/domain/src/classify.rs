use crate::dns_transaction::DnsTransaction;
use crate::layer::{DecodedPacket, Layer};
use crate::packet_record::{PacketRecord, Protocol};

/// Outcome of running the classifier over one packet.
///
/// `record` is `None` when no layer was recognized, which is distinct from a
/// sparse record whose optional fields are legitimately empty.
#[derive(Debug, Clone)]
pub struct Classification {
    pub record: Option<PacketRecord>,
    pub transaction: Option<DnsTransaction>,
}

/// Fold over the packet's layers in wire order.
///
/// Every recognized layer overwrites the protocol tag, so the tag ends up on
/// the innermost recognized layer. Address and port pairs are set
/// independently by whichever IP/transport layer carries them. A DNS layer
/// is decoded on the spot with the source address accumulated so far; IP
/// precedes DNS in any real capture, so the address is resolved by then.
pub fn classify(packet: &DecodedPacket) -> Classification {
    let meta = &packet.meta;

    let mut protocol = None;
    let mut source = String::new();
    let mut destination = String::new();
    let mut source_port = String::new();
    let mut destination_port = String::new();
    let mut transaction = None;

    for layer in &packet.layers {
        match layer {
            Layer::Ethernet => protocol = Some(Protocol::Eth),
            Layer::Arp => protocol = Some(Protocol::Arp),
            Layer::Ipv4 {
                source: src,
                destination: dst,
            } => {
                source = src.to_string();
                destination = dst.to_string();
                protocol = Some(Protocol::Ipv4);
            }
            Layer::Ipv6 {
                source: src,
                destination: dst,
            } => {
                source = src.to_string();
                destination = dst.to_string();
                protocol = Some(Protocol::Ipv6);
            }
            Layer::Tcp {
                source_port: sp,
                destination_port: dp,
            } => {
                source_port = sp.to_string();
                destination_port = dp.to_string();
                protocol = Some(Protocol::Tcp);
            }
            Layer::Udp {
                source_port: sp,
                destination_port: dp,
            } => {
                source_port = sp.to_string();
                destination_port = dp.to_string();
                protocol = Some(Protocol::Udp);
            }
            Layer::Icmpv4 => protocol = Some(Protocol::Icmpv4),
            Layer::Icmpv6 => protocol = Some(Protocol::Icmpv6),
            Layer::Tls => protocol = Some(Protocol::Tls),
            Layer::Dns(message) => {
                transaction = Some(DnsTransaction::decode(message, &source, meta.timestamp));
                protocol = Some(Protocol::Dns);
            }
        }
    }

    let record = protocol.map(|protocol| PacketRecord {
        timestamp: meta.timestamp,
        wire_length: meta.wire_length,
        captured_length: meta.captured_length,
        source,
        destination,
        source_port,
        destination_port,
        protocol,
    });

    Classification {
        record,
        transaction,
    }
}
