use async_trait::async_trait;
use mintgate::{
    model::mint::GenerateTxRequestDto,
    server::{
        constructor::TransactionConstructor,
        error::constructor::ConstructorError,
        model::constructor::{ConstructedMint, MintRequest, PendingTransaction},
    },
};

/// Constructor answering with canned transactions instead of running a script.
pub struct StaticConstructor {
    /// Raw hex of the mint transactions, in broadcast order; `Err` rejects every mint
    mint: Result<Vec<String>, String>,
}

impl StaticConstructor {
    pub fn with_pending(hexes: &[&str]) -> Self {
        Self {
            mint: Ok(hexes.iter().map(|hex| hex.to_string()).collect()),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            mint: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl TransactionConstructor for StaticConstructor {
    async fn construct_mint(
        &self,
        _request: &MintRequest,
    ) -> Result<ConstructedMint, ConstructorError> {
        let hexes = self.mint.clone().map_err(ConstructorError::Rejected)?;

        let pending: Vec<PendingTransaction> = hexes
            .into_iter()
            .map(|hex| PendingTransaction {
                txid: Some(format!("{}-txid", hex)),
                hex,
            })
            .collect();

        Ok(ConstructedMint {
            final_txid: pending.last().and_then(|p| p.txid.clone()),
            pending,
            instructions: "Broadcast the transactions in order".to_string(),
        })
    }

    async fn construct_transfer(
        &self,
        request: &GenerateTxRequestDto,
    ) -> Result<String, ConstructorError> {
        self.mint.as_ref().map_err(|e| ConstructorError::Rejected(e.clone()))?;

        Ok(format!("{:016x}", request.amount))
    }
}
