//! # Existence Verifier Service

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::abi::{decode_uint256, encode_get_block_no, encode_get_object_count};
use shared_types::{ChainContext, HashIdentifier, LedgerClient};
use tracing::{debug, instrument};

use crate::domain::errors::VerificationError;
use crate::domain::result::{narrow, VerificationResult};
use crate::ports::inbound::VerificationApi;

/// Existence Verifier service.
///
/// `getBlockNo` is always read for `context.account`, the same account that
/// stamps. Another party's recording of the same hash is not consulted.
pub struct ExistenceVerifier {
    ledger: Arc<dyn LedgerClient>,
    context: Arc<ChainContext>,
}

impl ExistenceVerifier {
    pub fn new(ledger: Arc<dyn LedgerClient>, context: Arc<ChainContext>) -> Self {
        Self { ledger, context }
    }
}

#[async_trait]
impl VerificationApi for ExistenceVerifier {
    #[instrument(skip(self), fields(hash = %hash))]
    async fn verify(&self, hash: &HashIdentifier) -> Result<VerificationResult, VerificationError> {
        let raw = self
            .ledger
            .call(self.context.contract, encode_get_object_count(hash))
            .await?;
        let occurrence_count = narrow(decode_uint256(&raw)?, "occurrence count")?;

        if occurrence_count == 0 {
            debug!("Hash not recorded");
            return Err(VerificationError::HashNotFound(*hash));
        }

        let raw = self
            .ledger
            .call(
                self.context.contract,
                encode_get_block_no(hash, &self.context.account),
            )
            .await?;
        let first_block = narrow(decode_uint256(&raw)?, "block number")?;

        debug!(occurrence_count, first_block, "Hash recorded");
        Ok(VerificationResult {
            hash: *hash,
            occurrence_count,
            first_block,
        })
    }
}
