use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// Device to listen on. When unset, the first up, running,
    /// non-loopback device with an address is picked.
    #[serde(default)]
    pub device: Option<String>,

    /// Optional BPF filter applied to the live session.
    #[serde(default)]
    pub bpf: Option<String>,

    #[serde(default = "default_snaplen")]
    pub snaplen: i32,

    #[serde(default = "default_true")]
    pub promiscuous: bool,

    /// Read timeout for the pcap handle. Short enough that shutdown is
    /// noticed promptly between reads.
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: i32,

    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Halt the sniff session on the first unclassifiable packet or
    /// failed insert instead of skipping it.
    #[serde(default)]
    pub strict: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device: None,
            bpf: None,
            snaplen: default_snaplen(),
            promiscuous: true,
            read_timeout_ms: default_read_timeout_ms(),
            channel_capacity: default_channel_capacity(),
            strict: false,
        }
    }
}

fn default_snaplen() -> i32 {
    65535
}

fn default_true() -> bool {
    true
}

fn default_read_timeout_ms() -> i32 {
    100
}

fn default_channel_capacity() -> usize {
    10_000
}
