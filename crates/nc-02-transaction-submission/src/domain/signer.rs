//! # Transaction Signer (secp256k1)
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization (EIP-2)
//! - Key material never appears in `Debug` output and is zeroized on drop

use k256::ecdsa::{RecoveryId, Signature, SigningKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use shared_types::{keccak256, Address};
use zeroize::Zeroizing;

use super::errors::{CredentialError, SubmissionError};
use super::transaction::{LedgerTransaction, SignedTransaction};

/// The private signing key authorizing transactions for the configured account.
pub struct Credential {
    key: SigningKey,
    address: Address,
}

impl Credential {
    /// Load from hex, with or without a `0x` prefix.
    pub fn from_hex(secret: &str) -> Result<Self, CredentialError> {
        let digits = secret.trim().trim_start_matches("0x");
        let bytes = Zeroizing::new(hex::decode(digits).map_err(|_| CredentialError::InvalidHex)?);
        Self::from_slice(&bytes)
    }

    /// Load from raw 32-byte scalar.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CredentialError> {
        let key = SigningKey::from_slice(bytes).map_err(|_| CredentialError::InvalidKey)?;
        let address = address_of(&key);
        Ok(Self { key, address })
    }

    /// Ethereum address controlled by this key.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Sign a transaction with EIP-155 replay protection.
    pub fn sign(&self, tx: &LedgerTransaction) -> Result<SignedTransaction, SubmissionError> {
        let digest = tx.signing_hash();

        let (signature, recovery_id): (Signature, RecoveryId) = self
            .key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| SubmissionError::SigningFailed(e.to_string()))?;

        // Normalizing S negates the point, so the parity flips with it
        let (signature, recovery_id) = match signature.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (signature, recovery_id),
        };

        let parity = u64::from(recovery_id.is_y_odd());
        let v = tx
            .chain_id
            .checked_mul(2)
            .and_then(|c| c.checked_add(35 + parity))
            .ok_or_else(|| SubmissionError::SigningFailed("chain id out of range".into()))?;

        let (r, s) = signature.split_bytes();
        let (r, s): ([u8; 32], [u8; 32]) = (r.into(), s.into());
        let raw = tx.encode_signed(v, &r, &s);
        Ok(SignedTransaction::new(raw, tx.nonce))
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("address", &self.address)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Last 20 bytes of keccak256 of the uncompressed public key (without the 0x04 prefix).
fn address_of(key: &SigningKey) -> Address {
    let point = key.verifying_key().to_encoded_point(false);
    let digest = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&digest[12..])
}
