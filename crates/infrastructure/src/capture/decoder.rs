use etherparse::{
    EtherType, Ethernet2HeaderSlice, IpNumber, Ipv4HeaderSlice, Ipv6HeaderSlice, TcpHeaderSlice,
    UdpHeaderSlice,
};
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::RData;
use packtrace_domain::{DnsAnswer, DnsMessage, DnsQuestion, Layer};
use std::net::IpAddr;
use tracing::debug;

const DNS_PORT: u16 = 53;
const ETHERNET_HEADER_LEN: usize = 14;
const UDP_HEADER_LEN: usize = 8;

/// Walk the wire bytes outer to inner and emit one `Layer` per recognized
/// protocol, preserving wire order. An unrecognized or truncated layer ends
/// the walk; everything collected so far stays.
pub fn decode_layers(data: &[u8]) -> Vec<Layer> {
    let mut layers = Vec::new();

    let Ok(eth) = Ethernet2HeaderSlice::from_slice(data) else {
        return layers;
    };
    layers.push(Layer::Ethernet);

    let ether_type = eth.ether_type();
    let payload = &data[ETHERNET_HEADER_LEN..];

    if ether_type == EtherType::ARP {
        layers.push(Layer::Arp);
    } else if ether_type == EtherType::IPV4 {
        decode_ipv4(payload, &mut layers);
    } else if ether_type == EtherType::IPV6 {
        decode_ipv6(payload, &mut layers);
    }

    layers
}

fn decode_ipv4(data: &[u8], layers: &mut Vec<Layer>) {
    let Ok(ip) = Ipv4HeaderSlice::from_slice(data) else {
        return;
    };
    layers.push(Layer::Ipv4 {
        source: IpAddr::V4(ip.source_addr()),
        destination: IpAddr::V4(ip.destination_addr()),
    });

    let header_len = ip.slice().len();
    decode_transport(ip.protocol(), &data[header_len..], layers);
}

fn decode_ipv6(data: &[u8], layers: &mut Vec<Layer>) {
    let Ok(ip) = Ipv6HeaderSlice::from_slice(data) else {
        return;
    };
    layers.push(Layer::Ipv6 {
        source: IpAddr::V6(ip.source_addr()),
        destination: IpAddr::V6(ip.destination_addr()),
    });

    // Extension headers are not walked; a transport directly after the
    // fixed header covers the captures this decoder targets.
    let header_len = ip.slice().len();
    decode_transport(ip.next_header(), &data[header_len..], layers);
}

fn decode_transport(protocol: IpNumber, data: &[u8], layers: &mut Vec<Layer>) {
    if protocol == IpNumber::TCP {
        decode_tcp(data, layers);
    } else if protocol == IpNumber::UDP {
        decode_udp(data, layers);
    } else if protocol == IpNumber::ICMP {
        layers.push(Layer::Icmpv4);
    } else if protocol == IpNumber::IPV6_ICMP {
        layers.push(Layer::Icmpv6);
    }
}

fn decode_tcp(data: &[u8], layers: &mut Vec<Layer>) {
    let Ok(tcp) = TcpHeaderSlice::from_slice(data) else {
        return;
    };
    layers.push(Layer::Tcp {
        source_port: tcp.source_port(),
        destination_port: tcp.destination_port(),
    });

    let header_len = tcp.slice().len();
    if looks_like_tls(&data[header_len..]) {
        layers.push(Layer::Tls);
    }
}

fn decode_udp(data: &[u8], layers: &mut Vec<Layer>) {
    let Ok(udp) = UdpHeaderSlice::from_slice(data) else {
        return;
    };
    let source_port = udp.source_port();
    let destination_port = udp.destination_port();
    layers.push(Layer::Udp {
        source_port,
        destination_port,
    });

    if source_port == DNS_PORT || destination_port == DNS_PORT {
        // Bound by the UDP length field so ethernet padding never reaches
        // the DNS parser.
        let end = (udp.length() as usize).clamp(UDP_HEADER_LEN, data.len());
        match decode_dns(&data[UDP_HEADER_LEN..end]) {
            Some(message) => layers.push(Layer::Dns(message)),
            None => debug!("Port 53 payload did not parse as DNS"),
        }
    }
}

/// TLS record header: content type 20-23 followed by the 0x03 version byte.
fn looks_like_tls(payload: &[u8]) -> bool {
    payload.len() >= 3 && (20..=23).contains(&payload[0]) && payload[1] == 3
}

fn decode_dns(payload: &[u8]) -> Option<DnsMessage> {
    let message = Message::from_vec(payload).ok()?;
    Some(convert_message(&message))
}

/// Reduce a hickory message to the decoded form the classifier consumes:
/// questions verbatim, answers collapsed to alias/address/neither.
pub fn convert_message(message: &Message) -> DnsMessage {
    let questions = message
        .queries
        .iter()
        .map(|query| DnsQuestion {
            name: trim_root(&query.name().to_utf8()),
            record_type: query.query_type().to_string(),
        })
        .collect();

    let answers = message
        .answers
        .iter()
        .map(|record| match &record.data {
            RData::A(a) => DnsAnswer::address(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => DnsAnswer::address(IpAddr::V6(aaaa.0)),
            RData::CNAME(canonical) => DnsAnswer::alias(trim_root(&canonical.to_utf8())),
            _ => DnsAnswer::default(),
        })
        .collect();

    DnsMessage {
        id: message.id,
        response: message.message_type == MessageType::Response,
        questions,
        answers,
    }
}

fn trim_root(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_string()
}
