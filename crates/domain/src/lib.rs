//! packtrace domain layer
pub mod classify;
pub mod config;
pub mod dns_transaction;
pub mod errors;
pub mod layer;
pub mod packet_record;

pub use classify::{classify, Classification};
pub use config::Config;
pub use dns_transaction::{DnsTransaction, Role, StoredTransaction};
pub use errors::DomainError;
pub use layer::{DecodedPacket, DnsAnswer, DnsMessage, DnsQuestion, Layer, PacketMeta};
pub use packet_record::{PacketRecord, Protocol};
