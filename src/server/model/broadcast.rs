use crate::model::broadcast::{BroadcastEntryDto, BroadcastResponseDto, PendingTransactionDto};

/// Raw transaction queued for submission.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchItem {
    /// Transaction id the caller expects, echoed back in the result
    pub requested_id: Option<String>,
    pub raw_hex: String,
}

impl BatchItem {
    /// Queue a pending transaction, `None` when it carries no hex.
    pub fn from_pending(pending: PendingTransactionDto) -> Option<Self> {
        let raw_hex = pending.hex.filter(|hex| !hex.is_empty())?;
        Some(Self {
            requested_id: pending.txid,
            raw_hex,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BatchOutcome {
    Sent { txid: String },
    Failed { error: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct BatchEntry {
    /// 1-based position in the submitted batch
    pub index: usize,
    pub requested_id: Option<String>,
    pub outcome: BatchOutcome,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Sent { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchStatus {
    Success,
    Partial,
    Error,
}

impl BatchStatus {
    /// `Success` when something was sent and nothing failed, `Partial` when both happened,
    /// `Error` when nothing was sent.
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let any_ok = entries.iter().any(BatchEntry::is_ok);
        let any_error = entries.iter().any(|e| !e.is_ok());

        match (any_ok, any_error) {
            (true, false) => Self::Success,
            (true, true) => Self::Partial,
            (false, _) => Self::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Partial => "partial",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BatchResult {
    pub status: BatchStatus,
    pub entries: Vec<BatchEntry>,
}

impl From<BatchEntry> for BroadcastEntryDto {
    fn from(entry: BatchEntry) -> Self {
        let (status, sent_txid, error) = match entry.outcome {
            BatchOutcome::Sent { txid } => ("ok", Some(txid), None),
            BatchOutcome::Failed { error } => ("error", None, Some(error)),
        };

        Self {
            index: entry.index,
            requested_txid: entry.requested_id,
            sent_txid,
            status: status.to_string(),
            error,
        }
    }
}

impl From<BatchResult> for BroadcastResponseDto {
    fn from(result: BatchResult) -> Self {
        let results: Vec<BroadcastEntryDto> =
            result.entries.into_iter().map(Into::into).collect();

        Self {
            status: result.status.as_str().to_string(),
            count: results.len(),
            results,
        }
    }
}
