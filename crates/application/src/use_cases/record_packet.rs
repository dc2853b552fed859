use crate::ports::TransactionStore;
use packtrace_domain::{classify, DecodedPacket, DomainError, PacketRecord};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs one packet through the pipeline: classify, decode any DNS layer,
/// persist the transaction, hand the record back for presentation.
///
/// Packets are expected one at a time in capture order; the insert is
/// awaited before the caller feeds the next packet, so log order matches
/// capture order.
pub struct RecordPacketUseCase {
    store: Arc<dyn TransactionStore>,
    strict: bool,
}

impl RecordPacketUseCase {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self {
            store,
            strict: false,
        }
    }

    /// Halt on unclassifiable packets and failed inserts instead of
    /// skipping them.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub async fn execute(
        &self,
        packet: &DecodedPacket,
    ) -> Result<Option<PacketRecord>, DomainError> {
        let classification = classify(packet);

        if let Some(transaction) = &classification.transaction {
            match self.store.insert(transaction).await {
                Ok(()) => {}
                Err(e) if self.strict => return Err(e),
                Err(e) => {
                    warn!(
                        error = %e,
                        domain = %transaction.domain,
                        "Failed to persist DNS transaction, skipping"
                    );
                }
            }
        }

        if classification.record.is_none() {
            if self.strict {
                return Err(DomainError::UnclassifiablePacket);
            }
            debug!("No recognized layer in packet, skipping");
        }

        Ok(classification.record)
    }
}
