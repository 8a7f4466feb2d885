use std::{path::PathBuf, process::Stdio};

use async_trait::async_trait;
use dioxus_logger::tracing;
use serde::Deserialize;
use tokio::{io::AsyncWriteExt, process::Command};

use crate::{
    model::mint::GenerateTxRequestDto,
    server::{
        constructor::TransactionConstructor,
        error::constructor::ConstructorError,
        model::constructor::{ConstructedMint, MintRequest, PendingTransaction},
    },
};

/// Output fragments the mint script prints when it refuses a request.
const REJECTION_MARKERS: [&str; 6] = [
    "Not enough funds",
    "Invalid number of arguments",
    "Data must be a valid hex string",
    "No data to mint",
    "Content type too long",
    "dust",
];

const FINAL_TRANSACTION_PREFIX: &str = "Final transaction:";

/// Runs the node.js constructor scripts.
///
/// Mint content is written to the script's stdin (`-` placeholder argument) so large
/// inscriptions never hit argument length limits; transfers are sent as JSON on stdin.
#[derive(Clone)]
pub struct ScriptConstructor {
    program: String,
    script_dir: PathBuf,
    mint_script: String,
    transfer_script: String,
}

#[derive(Deserialize)]
struct MintScriptOutput {
    #[serde(default, rename = "pendingTransactions")]
    pending_transactions: Vec<PendingTransaction>,
    #[serde(default)]
    instructions: String,
}

#[derive(Deserialize)]
struct TransferScriptOutput {
    #[serde(rename = "txHex")]
    tx_hex: String,
}

impl ScriptConstructor {
    pub fn new(script_dir: PathBuf, mint_script: String, transfer_script: String) -> Self {
        Self {
            program: "node".to_string(),
            script_dir,
            mint_script,
            transfer_script,
        }
    }

    /// Use another interpreter than `node`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn mint_args(request: &MintRequest) -> Vec<String> {
        let mut args = vec![
            "mint".to_string(),
            request.receiving_address.clone(),
            request.content_type.clone(),
            "-".to_string(),
            request.sending_address.clone(),
            request.privkey.clone(),
            request.utxo.clone(),
            request.vout.to_string(),
            request.script_hex.clone(),
            request.utxo_amount_sats.to_string(),
        ];

        if let Some(payment) = &request.payment {
            args.push(payment.address.clone());
            args.push(payment.price_sats.to_string());
        }

        args
    }

    async fn run(
        &self,
        script: &str,
        args: &[String],
        envs: Vec<(&'static str, String)>,
        stdin: &[u8],
    ) -> Result<(bool, String, String), ConstructorError> {
        let mut child = Command::new(&self.program)
            .arg(script)
            .args(args)
            .envs(envs)
            .current_dir(&self.script_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut child_stdin) = child.stdin.take() {
            child_stdin.write_all(stdin).await?;
        }

        let output = child.wait_with_output().await?;

        Ok((
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}

/// Classifies a failed run: known refusals become `Rejected`, anything else `Failed`.
pub fn classify_failure(stdout: &str, stderr: &str) -> ConstructorError {
    let message = if stderr.is_empty() { stdout } else { stderr };

    let rejected = REJECTION_MARKERS
        .iter()
        .any(|marker| stdout.contains(marker) || stderr.contains(marker));

    if rejected {
        ConstructorError::Rejected(message.to_string())
    } else {
        ConstructorError::Failed(message.to_string())
    }
}

/// Parses the mint script output.
///
/// The JSON document is taken between the first `{` and the last `}`; anything printed
/// around it is ignored apart from an optional `Final transaction: <txid>` line.
pub fn parse_mint_output(stdout: &str) -> Result<ConstructedMint, ConstructorError> {
    let final_txid = stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix(FINAL_TRANSACTION_PREFIX))
        .map(|txid| txid.trim().to_string())
        .filter(|txid| !txid.is_empty());

    let json = match (stdout.find('{'), stdout.rfind('}')) {
        (Some(start), Some(end)) if start < end => &stdout[start..=end],
        _ => {
            return Err(ConstructorError::InvalidOutput(
                "no JSON document in output".to_string(),
            ))
        }
    };

    let output: MintScriptOutput = serde_json::from_str(json)
        .map_err(|e| ConstructorError::InvalidOutput(e.to_string()))?;

    Ok(ConstructedMint {
        final_txid,
        pending: output.pending_transactions,
        instructions: output.instructions,
    })
}

#[async_trait]
impl TransactionConstructor for ScriptConstructor {
    async fn construct_mint(&self, request: &MintRequest) -> Result<ConstructedMint, ConstructorError> {
        let args = Self::mint_args(request);
        let (success, stdout, stderr) = self
            .run(
                &self.mint_script,
                &args,
                request.policy.env_overrides(),
                request.content_hex.as_bytes(),
            )
            .await?;

        if !success {
            tracing::warn!(
                sending_address = %request.sending_address,
                "Mint construction failed: {}",
                if stderr.is_empty() { &stdout } else { &stderr }
            );
            return Err(classify_failure(&stdout, &stderr));
        }

        // Refusals are sometimes printed with a zero exit code instead of a JSON document
        parse_mint_output(&stdout).map_err(|e| {
            if REJECTION_MARKERS.iter().any(|m| stdout.contains(m)) {
                ConstructorError::Rejected(stdout.clone())
            } else {
                e
            }
        })
    }

    async fn construct_transfer(
        &self,
        request: &GenerateTxRequestDto,
    ) -> Result<String, ConstructorError> {
        let input = serde_json::to_vec(request)
            .map_err(|e| ConstructorError::InvalidOutput(e.to_string()))?;

        let (success, stdout, stderr) = self
            .run(&self.transfer_script, &[], Vec::new(), &input)
            .await?;

        if !success {
            return Err(classify_failure(&stdout, &stderr));
        }

        let output: TransferScriptOutput = serde_json::from_str(&stdout)
            .map_err(|e| ConstructorError::InvalidOutput(e.to_string()))?;

        Ok(output.tx_hex)
    }
}
