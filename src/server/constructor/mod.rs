//! External transaction constructor.
//!
//! Key handling, script building and signing happen outside this service. The
//! [`TransactionConstructor`] trait is the request/response seam; [`script::ScriptConstructor`]
//! implements it by running the constructor scripts as child processes.

pub mod script;

use async_trait::async_trait;

use crate::{
    model::mint::GenerateTxRequestDto,
    server::{
        error::constructor::ConstructorError,
        model::constructor::{ConstructedMint, MintRequest},
    },
};

#[async_trait]
pub trait TransactionConstructor: Send + Sync {
    /// Build and sign the commit/reveal transactions of an ordinal mint.
    async fn construct_mint(&self, request: &MintRequest) -> Result<ConstructedMint, ConstructorError>;

    /// Build and sign a plain transfer, returning the raw transaction hex.
    async fn construct_transfer(
        &self,
        request: &GenerateTxRequestDto,
    ) -> Result<String, ConstructorError>;
}
