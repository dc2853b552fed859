use crate::layer::DnsMessage;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// Query/response classification of a DNS transaction, driven solely by the
/// message's response flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Query,
    Response,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Query => "query",
            Role::Response => "response",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "query" => Some(Role::Query),
            "response" => Some(Role::Response),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reconstructed DNS transaction, ready to persist.
#[derive(Debug, Clone)]
pub struct DnsTransaction {
    /// RFC3339 text, stored verbatim.
    pub timestamp: String,
    pub source: String,
    pub domain: String,
    pub query_type: String,
    /// Ordered alias chain; every alias is followed by a `,`, the last one
    /// included. The stored format depends on that trailing separator.
    pub alias_path: String,
    pub addresses: Vec<String>,
    pub role: Role,
    /// Protocol-level transaction id. Not unique; kept as an audit field.
    pub correlation_id: u16,
}

impl DnsTransaction {
    /// Build a transaction from a decoded message plus packet context.
    ///
    /// When the message carries several questions, later ones overwrite
    /// earlier ones and only the last survives.
    pub fn decode(message: &DnsMessage, source: &str, timestamp: DateTime<Utc>) -> Self {
        let mut domain = String::new();
        let mut query_type = String::new();
        for question in &message.questions {
            domain = question.name.clone();
            query_type = question.record_type.clone();
        }

        let mut alias_path = String::new();
        let mut addresses = Vec::new();
        for answer in &message.answers {
            if let Some(alias) = &answer.alias {
                alias_path.push_str(alias);
                alias_path.push(',');
            }
            if let Some(address) = &answer.address {
                addresses.push(address.to_string());
            }
        }

        let role = if message.response {
            Role::Response
        } else {
            Role::Query
        };

        Self {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            source: source.to_string(),
            domain,
            query_type,
            alias_path,
            addresses,
            role,
            correlation_id: message.id,
        }
    }

    /// Comma-joined answer addresses, the form the store persists.
    pub fn joined_addresses(&self) -> String {
        self.addresses.join(",")
    }
}

/// One durable row: a [`DnsTransaction`] plus the rowid and the timestamp
/// re-parsed into a temporal type.
#[derive(Debug, Clone)]
pub struct StoredTransaction {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub domain: String,
    pub query_type: String,
    pub alias_path: String,
    pub response_addresses: String,
    pub role: Role,
    /// Nullable: rows written before correlation ids were recorded.
    pub correlation_id: Option<u16>,
}
