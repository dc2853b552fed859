use crate::di::UseCases;
use crate::output;
use packtrace_domain::Config;
use packtrace_infrastructure::capture;
use tracing::{error, info};

/// Feed the capture channel through the pipeline one packet at a time, so
/// the stored log follows capture order.
pub async fn run(config: &Config, use_cases: &UseCases, count: Option<u64>) -> anyhow::Result<()> {
    let device = match &config.capture.device {
        Some(device) => device.clone(),
        None => capture::default_device()?,
    };

    let mut session = capture::start(&device, &config.capture)?;

    let interrupt = session.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, stopping capture");
            interrupt.cancel();
        }
    });

    let mut ordinal: u64 = 0;
    while let Some(packet) = session.packets.recv().await {
        match use_cases.record_packet.execute(&packet).await {
            Ok(Some(record)) => {
                output::print_packet(&record, ordinal);
                ordinal += 1;
            }
            Ok(None) => {}
            Err(e) => {
                session.cancel.cancel();
                error!(error = %e, "Halting sniff session");
                return Err(e.into());
            }
        }

        if let Some(limit) = count {
            if ordinal >= limit {
                break;
            }
        }
    }

    session.cancel.cancel();
    Ok(())
}
