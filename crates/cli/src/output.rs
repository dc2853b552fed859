use packtrace_application::ports::{DistinctQuery, MostQueriedDomain, TimeBucket};
use packtrace_domain::{PacketRecord, StoredTransaction};

pub fn print_packet(record: &PacketRecord, ordinal: u64) {
    println!(
        "PACKET: {} | {} | length {} read: {} | {} src: {}:{}, dst: {}:{}",
        ordinal,
        record.timestamp,
        record.wire_length,
        record.captured_length,
        record.protocol,
        record.source,
        record.source_port,
        record.destination,
        record.destination_port,
    );
}

fn banner(title: &str) {
    println!("{}", "*".repeat(40));
    println!("\t{title}");
    println!("{}", "*".repeat(40));
}

pub fn print_most_queried(rows: &[MostQueriedDomain]) {
    banner("Most Queried Domains");
    for row in rows {
        println!(
            "Count: {} | Domain: {} | (correlation ids: {})",
            row.count, row.domain, row.correlation_ids,
        );
    }
    println!("{}", "*".repeat(40));
}

pub fn print_over_time(rows: &[TimeBucket]) {
    banner("Queries Over Time");
    for row in rows {
        println!("{} | {}", row.bucket, row.count);
    }
}

pub fn print_unique(rows: &[DistinctQuery]) {
    banner("Unique Domains");
    for row in rows {
        println!("{} | {} | {}", row.source, row.domain, row.role);
    }
}

pub fn print_recent(rows: &[StoredTransaction]) {
    banner("Recent Transactions");
    for row in rows {
        println!(
            "#{} {} | {} | {} {} | {} | aliases: {} | answers: {}",
            row.id,
            row.timestamp,
            row.source,
            row.query_type,
            row.domain,
            row.role,
            row.alias_path,
            row.response_addresses,
        );
    }
}
