//! Sequential batch submission of raw transactions.

use dioxus_logger::tracing;

use crate::server::{
    error::node::NodeError,
    model::broadcast::{BatchEntry, BatchItem, BatchOutcome, BatchResult, BatchStatus},
    node::NodeClient,
};

pub const INVALID_HEX: &str = "invalid hex";

/// Error text reported for a failed submission; node-reported errors keep only their message.
fn failure_message(error: NodeError) -> String {
    match error {
        NodeError::Rpc { message, .. } => message,
        other => other.to_string(),
    }
}

pub struct BroadcastEngine<'a> {
    node: &'a dyn NodeClient,
}

impl<'a> BroadcastEngine<'a> {
    pub fn new(node: &'a dyn NodeClient) -> Self {
        Self { node }
    }

    /// Submit `items` one after another in the given order.
    ///
    /// Every item gets an entry with its 1-based position. Blank hex is never sent to the
    /// node. Without `continue_on_error` processing stops after the first failed entry, so the
    /// result may hold fewer entries than `items`.
    pub async fn broadcast_batch(
        &self,
        items: Vec<BatchItem>,
        continue_on_error: bool,
    ) -> BatchResult {
        let mut entries = Vec::with_capacity(items.len());

        for (position, item) in items.into_iter().enumerate() {
            let index = position + 1;
            let raw_hex = item.raw_hex.trim();

            let outcome = if raw_hex.is_empty() {
                BatchOutcome::Failed {
                    error: INVALID_HEX.to_string(),
                }
            } else {
                match self.node.submit_raw_transaction(raw_hex).await {
                    Ok(txid) => BatchOutcome::Sent { txid },
                    Err(e) => {
                        tracing::warn!(index, "Failed to broadcast transaction: {}", e);

                        BatchOutcome::Failed {
                            error: failure_message(e),
                        }
                    }
                }
            };

            let entry = BatchEntry {
                index,
                requested_id: item.requested_id,
                outcome,
            };
            let failed = !entry.is_ok();
            entries.push(entry);

            if failed && !continue_on_error {
                break;
            }
        }

        BatchResult {
            status: BatchStatus::from_entries(&entries),
            entries,
        }
    }
}
