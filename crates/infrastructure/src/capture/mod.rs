pub mod decoder;

use chrono::{DateTime, TimeZone, Utc};
use packtrace_domain::config::CaptureConfig;
use packtrace_domain::{DecodedPacket, DomainError, PacketMeta};
use pcap::{Capture, Device, Error as PcapError, PacketHeader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// List capture devices as pcap reports them.
pub fn list_devices() -> Result<Vec<Device>, DomainError> {
    Device::list().map_err(|e| DomainError::CaptureError(e.to_string()))
}

/// Pick the first device that looks like a real network interface: up,
/// running, not loopback, and carrying at least one address. Falls back to
/// any up device.
pub fn default_device() -> Result<String, DomainError> {
    let devices = list_devices()?;

    for device in &devices {
        if device.name == "any" || device.flags.is_loopback() {
            continue;
        }
        if device.flags.is_up() && device.flags.is_running() && !device.addresses.is_empty() {
            return Ok(device.name.clone());
        }
    }

    for device in &devices {
        if device.name != "any" && device.flags.is_up() {
            return Ok(device.name.clone());
        }
    }

    Err(DomainError::NoUsableDevice)
}

/// A running live-capture session. Decoded packets arrive on `packets` in
/// capture order; cancelling the token stops the read loop.
pub struct CaptureSession {
    pub handle: JoinHandle<()>,
    pub packets: mpsc::Receiver<DecodedPacket>,
    pub cancel: CancellationToken,
}

/// Open a live session on `device` and stream decoded packets until the
/// token is cancelled or the receiver is dropped.
pub fn start(device: &str, cfg: &CaptureConfig) -> Result<CaptureSession, DomainError> {
    let selected = Device::list()
        .map_err(|e| DomainError::CaptureError(e.to_string()))?
        .into_iter()
        .find(|d| d.name == device)
        .ok_or_else(|| DomainError::DeviceNotFound(device.to_string()))?;

    let mut capture = Capture::from_device(selected)
        .map_err(|e| DomainError::CaptureError(e.to_string()))?
        .promisc(cfg.promiscuous)
        .snaplen(cfg.snaplen)
        .immediate_mode(true)
        .timeout(cfg.read_timeout_ms)
        .open()
        .map_err(|e| DomainError::CaptureError(e.to_string()))?;

    if let Some(bpf) = &cfg.bpf {
        capture
            .filter(bpf, true)
            .map_err(|e| DomainError::CaptureError(e.to_string()))?;
    }

    info!(device, "Capture started");

    let (tx, rx) = mpsc::channel(cfg.channel_capacity);
    let cancel = CancellationToken::new();
    let stop = cancel.clone();

    let handle = tokio::task::spawn_blocking(move || {
        loop {
            if stop.is_cancelled() {
                break;
            }

            match capture.next_packet() {
                Ok(packet) => {
                    let meta = PacketMeta {
                        timestamp: packet_timestamp(packet.header),
                        wire_length: packet.header.len,
                        captured_length: packet.header.caplen,
                    };
                    let layers = decoder::decode_layers(packet.data);

                    if tx.blocking_send(DecodedPacket { meta, layers }).is_err() {
                        info!("Packet channel closed, stopping capture");
                        break;
                    }
                }
                // Timeouts are expected; loop back to check the stop token.
                Err(PcapError::TimeoutExpired) => continue,
                Err(e) => {
                    warn!(error = %e, "Error reading packet");
                    continue;
                }
            }
        }
        info!("Capture loop terminated");
    });

    Ok(CaptureSession {
        handle,
        packets: rx,
        cancel,
    })
}

fn packet_timestamp(header: &PacketHeader) -> DateTime<Utc> {
    let nanos = (header.ts.tv_usec as u32).saturating_mul(1000);
    Utc.timestamp_opt(header.ts.tv_sec as i64, nanos)
        .single()
        .unwrap_or_else(Utc::now)
}
