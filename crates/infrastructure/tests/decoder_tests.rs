use etherparse::PacketBuilder;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, CNAME};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use packtrace_domain::Layer;
use packtrace_infrastructure::capture::decoder::decode_layers;
use std::net::Ipv4Addr;
use std::str::FromStr;

fn encode(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

fn query_message(id: u16, domain: &str) -> Message {
    let mut query = Query::new();
    query.set_name(Name::from_str(domain).unwrap());
    query.set_query_type(RecordType::A);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.add_query(query);
    message
}

fn udp_packet(source_port: u16, destination_port: u16, payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2([0x02, 0, 0, 0, 0, 1], [0x02, 0, 0, 0, 0, 2])
        .ipv4([192, 168, 0, 42], [8, 8, 8, 8], 64)
        .udp(source_port, destination_port);
    let mut packet = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut packet, payload).unwrap();
    packet
}

fn tcp_packet(source_port: u16, destination_port: u16, payload: &[u8]) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2([0x02, 0, 0, 0, 0, 1], [0x02, 0, 0, 0, 0, 2])
        .ipv4([192, 168, 0, 42], [10, 0, 0, 1], 64)
        .tcp(source_port, destination_port, 1000, 64240);
    let mut packet = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut packet, payload).unwrap();
    packet
}

fn ethernet_frame(ether_type: u16, payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![0x02, 0, 0, 0, 0, 2, 0x02, 0, 0, 0, 0, 1];
    frame.extend_from_slice(&ether_type.to_be_bytes());
    frame.extend_from_slice(payload);
    frame
}

#[test]
fn test_udp_dns_query_decodes_full_stack() {
    let payload = encode(&query_message(0x1234, "example.com."));
    let packet = udp_packet(40000, 53, &payload);

    let layers = decode_layers(&packet);
    assert_eq!(layers.len(), 4);
    assert!(matches!(layers[0], Layer::Ethernet));
    assert!(matches!(layers[1], Layer::Ipv4 { .. }));
    assert!(matches!(
        layers[2],
        Layer::Udp {
            source_port: 40000,
            destination_port: 53,
        }
    ));

    let Layer::Ipv4 {
        source,
        destination,
    } = &layers[1]
    else {
        panic!("expected IPv4 layer");
    };
    assert_eq!(source.to_string(), "192.168.0.42");
    assert_eq!(destination.to_string(), "8.8.8.8");

    let Layer::Dns(message) = &layers[3] else {
        panic!("expected DNS layer");
    };
    assert_eq!(message.id, 0x1234);
    assert!(!message.response);
    assert_eq!(message.questions.len(), 1);
    assert_eq!(message.questions[0].name, "example.com");
    assert_eq!(message.questions[0].record_type, "A");
}

#[test]
fn test_dns_response_answers_collapse_to_alias_and_address() {
    let mut message = Message::new(77, MessageType::Response, OpCode::Query);
    let mut query = Query::new();
    query.set_name(Name::from_str("www.example.com.").unwrap());
    query.set_query_type(RecordType::A);
    query.set_query_class(DNSClass::IN);
    message.add_query(query);
    message.add_answer(Record::from_rdata(
        Name::from_str("www.example.com.").unwrap(),
        300,
        RData::CNAME(CNAME(Name::from_str("cdn.example.com.").unwrap())),
    ));
    message.add_answer(Record::from_rdata(
        Name::from_str("cdn.example.com.").unwrap(),
        300,
        RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
    ));

    let packet = udp_packet(53, 40000, &encode(&message));
    let layers = decode_layers(&packet);

    let Some(Layer::Dns(decoded)) = layers.last() else {
        panic!("expected DNS layer");
    };
    assert!(decoded.response);
    assert_eq!(decoded.id, 77);
    assert_eq!(decoded.answers.len(), 2);
    assert_eq!(decoded.answers[0].alias.as_deref(), Some("cdn.example.com"));
    assert!(decoded.answers[0].address.is_none());
    assert_eq!(
        decoded.answers[1].address.map(|a| a.to_string()),
        Some("93.184.216.34".to_string())
    );
    assert!(decoded.answers[1].alias.is_none());
}

#[test]
fn test_udp_off_port_53_is_not_dns() {
    let payload = encode(&query_message(1, "example.com."));
    let packet = udp_packet(1000, 2000, &payload);

    let layers = decode_layers(&packet);
    assert_eq!(layers.len(), 3);
    assert!(matches!(layers[2], Layer::Udp { .. }));
}

#[test]
fn test_tcp_with_tls_record_payload() {
    let packet = tcp_packet(51000, 443, &[0x16, 0x03, 0x01, 0x00, 0x05]);

    let layers = decode_layers(&packet);
    assert_eq!(layers.len(), 4);
    assert!(matches!(
        layers[2],
        Layer::Tcp {
            source_port: 51000,
            destination_port: 443,
        }
    ));
    assert!(matches!(layers[3], Layer::Tls));
}

#[test]
fn test_tcp_plain_payload_is_not_tls() {
    let packet = tcp_packet(51000, 80, b"GET / HTTP/1.1\r\n");

    let layers = decode_layers(&packet);
    assert_eq!(layers.len(), 3);
    assert!(matches!(layers[2], Layer::Tcp { .. }));
}

#[test]
fn test_ipv6_udp_addresses() {
    let builder = PacketBuilder::ethernet2([0x02, 0, 0, 0, 0, 1], [0x02, 0, 0, 0, 0, 2])
        .ipv6(
            [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
            64,
        )
        .udp(5353, 5353);
    let mut packet = Vec::with_capacity(builder.size(4));
    builder.write(&mut packet, &[0, 1, 2, 3]).unwrap();

    let layers = decode_layers(&packet);
    assert_eq!(layers.len(), 3);
    let Layer::Ipv6 {
        source,
        destination,
    } = &layers[1]
    else {
        panic!("expected IPv6 layer");
    };
    assert_eq!(source.to_string(), "2001:db8::1");
    assert_eq!(destination.to_string(), "2001:db8::2");
}

#[test]
fn test_icmpv4_tagged() {
    let builder = PacketBuilder::ethernet2([0x02, 0, 0, 0, 0, 1], [0x02, 0, 0, 0, 0, 2])
        .ipv4([192, 168, 0, 42], [8, 8, 8, 8], 64)
        .icmpv4_echo_request(1, 2);
    let mut packet = Vec::with_capacity(builder.size(0));
    builder.write(&mut packet, &[]).unwrap();

    let layers = decode_layers(&packet);
    assert_eq!(layers.len(), 3);
    assert!(matches!(layers[2], Layer::Icmpv4));
}

#[test]
fn test_arp_tagged_after_ethernet() {
    let packet = ethernet_frame(0x0806, &[0u8; 28]);

    let layers = decode_layers(&packet);
    assert_eq!(layers.len(), 2);
    assert!(matches!(layers[0], Layer::Ethernet));
    assert!(matches!(layers[1], Layer::Arp));
}

#[test]
fn test_unknown_ethertype_stops_after_ethernet() {
    let packet = ethernet_frame(0x88B5, &[0u8; 16]);

    let layers = decode_layers(&packet);
    assert_eq!(layers.len(), 1);
    assert!(matches!(layers[0], Layer::Ethernet));
}

#[test]
fn test_short_frame_yields_no_layers() {
    let layers = decode_layers(&[0u8; 6]);
    assert!(layers.is_empty());
}

#[test]
fn test_garbage_on_port_53_yields_no_dns_layer() {
    let packet = udp_packet(40000, 53, &[0xFF; 5]);

    let layers = decode_layers(&packet);
    assert_eq!(layers.len(), 3);
    assert!(matches!(layers[2], Layer::Udp { .. }));
}
