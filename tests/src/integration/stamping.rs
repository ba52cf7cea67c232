//! # Stamping Flows
//!
//! normalize → submit → confirm → verify against one shared `FakeLedger`.
//!
//! ## Flows Tested
//!
//! 1. **Submission → Confirmation**: a broadcast transaction is pending until
//!    mined, then confirmed at or after the pre-submission height
//! 2. **Submission → Verification**: mined hashes are counted, first block kept
//! 3. **Concurrent submission**: one account, no shared nonces
//! 4. **Bounded waits**: exact poll budget, no background work

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::Duration;

    use nc_01_hash_normalizer::{normalize, normalize_batch};
    use nc_02_transaction_submission::{
        Credential, StampService, StampingApi, SubmissionError, SubmitterConfig,
    };
    use nc_03_confirmation_tracker::{
        ConfirmationApi, ConfirmationTracker, TrackerError, TrackerPolicy,
    };
    use nc_04_existence_verifier::{ExistenceVerifier, VerificationApi, VerificationError};
    use shared_types::{tx_hash_hex, LedgerError, ReceiptStatus};

    use crate::fake_ledger::{FakeLedger, TEST_PRIVATE_KEY};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Stack {
        ledger: Arc<FakeLedger>,
        stamping: Arc<StampService>,
        tracker: ConfirmationTracker,
        verifier: ExistenceVerifier,
    }

    fn stack(height: u64) -> Stack {
        let ledger = Arc::new(FakeLedger::new(height));
        let context = Arc::new(ledger.context());
        let credential = Arc::new(Credential::from_hex(TEST_PRIVATE_KEY).unwrap());

        Stack {
            stamping: Arc::new(StampService::new(
                ledger.clone(),
                context.clone(),
                credential,
                SubmitterConfig::default(),
            )),
            tracker: ConfirmationTracker::new(ledger.clone()),
            verifier: ExistenceVerifier::new(ledger.clone(), context),
            ledger,
        }
    }

    fn fast(max_attempts: u32) -> TrackerPolicy {
        TrackerPolicy::new(max_attempts, Duration::from_millis(5))
    }

    // =============================================================================
    // SUBMISSION → CONFIRMATION
    // =============================================================================

    #[tokio::test]
    async fn test_stamp_is_pending_until_mined() {
        let s = stack(50);
        let hashes = normalize_batch(&["abcd", "0xbeef"]).unwrap();

        let submitted = s.stamping.stamp(&hashes).await.unwrap();
        let tx_id = tx_hash_hex(&submitted.tx_hash);

        assert_eq!(submitted.hash_count, 2);
        assert_eq!(s.ledger.pending_count(), 1);
        assert_eq!(s.tracker.get_receipt(&tx_id).await.unwrap(), ReceiptStatus::Pending);

        let block = s.ledger.mine();

        match s.tracker.get_receipt(&tx_id).await.unwrap() {
            ReceiptStatus::Confirmed { block_number, .. } => assert_eq!(block_number, block),
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_await_receipt_sees_block_mined_later() {
        let s = stack(10);
        let before = s.ledger.height();
        let hashes = normalize_batch(&["01"]).unwrap();
        let submitted = s.stamping.stamp(&hashes).await.unwrap();

        let miner = {
            let ledger = s.ledger.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                ledger.mine()
            })
        };

        let receipt = s
            .tracker
            .await_receipt(&tx_hash_hex(&submitted.tx_hash), fast(200))
            .await
            .unwrap();

        assert!(receipt.block_number >= before);
        assert_eq!(receipt.block_number, miner.await.unwrap());
        assert_eq!(receipt.transaction_hash, submitted.tx_hash);
    }

    #[tokio::test]
    async fn test_await_receipt_times_out_when_never_mined() {
        let s = stack(10);
        let submitted = s
            .stamping
            .stamp(&normalize_batch(&["01"]).unwrap())
            .await
            .unwrap();

        let err = s
            .tracker
            .await_receipt(&tx_hash_hex(&submitted.tx_hash), fast(3))
            .await
            .unwrap_err();

        assert_eq!(err, TrackerError::ConfirmationTimeout { attempts: 3 });
        assert_eq!(s.ledger.request_count("eth_getTransactionReceipt"), 3);
    }

    // =============================================================================
    // SUBMISSION → VERIFICATION
    // =============================================================================

    #[tokio::test]
    async fn test_stamp_then_verify() {
        let s = stack(200);
        let hash = normalize("0xabcdef").unwrap();

        s.stamping.stamp(&[hash]).await.unwrap();
        let first = s.ledger.mine();

        let result = s.verifier.verify(&hash).await.unwrap();
        assert_eq!(result.occurrence_count, 1);
        assert_eq!(result.first_block, first);

        // Re-stamping counts again but keeps the first block
        s.stamping.stamp(&[hash]).await.unwrap();
        s.ledger.mine();

        let result = s.verifier.verify(&hash).await.unwrap();
        assert_eq!(result.occurrence_count, 2);
        assert_eq!(result.first_block, first);
    }

    #[tokio::test]
    async fn test_unmined_hash_is_not_found() {
        let s = stack(5);
        let hash = normalize("1234").unwrap();

        s.stamping.stamp(&[hash]).await.unwrap();

        let err = s.verifier.verify(&hash).await.unwrap_err();
        assert_eq!(err, VerificationError::HashNotFound(hash));
    }

    #[tokio::test]
    async fn test_padded_and_exact_forms_are_the_same_hash() {
        let s = stack(5);
        let short = normalize("abcd").unwrap();
        let full = normalize(&format!("abcd{}", "00".repeat(30))).unwrap();

        s.stamping.stamp(&[short]).await.unwrap();
        s.ledger.mine();

        assert_eq!(s.verifier.verify(&full).await.unwrap().occurrence_count, 1);
    }

    // =============================================================================
    // NONCE DISCIPLINE
    // =============================================================================

    #[tokio::test]
    async fn test_empty_batch_touches_no_ledger() {
        let s = stack(5);

        let err = s.stamping.stamp(&[]).await.unwrap_err();

        assert_eq!(err, SubmissionError::EmptyBatch);
        assert!(s.ledger.requests().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_stamps_use_distinct_consecutive_nonces() {
        let s = stack(5);
        let mut handles = Vec::new();
        for i in 0..12u8 {
            let stamping = s.stamping.clone();
            handles.push(tokio::spawn(async move {
                let hash = normalize(&format!("{i:02x}")).unwrap();
                stamping.stamp(&[hash]).await
            }));
        }

        let mut nonces = Vec::new();
        let mut tx_hashes = HashSet::new();
        for handle in handles {
            let submitted = handle.await.unwrap().unwrap();
            nonces.push(submitted.nonce);
            tx_hashes.insert(submitted.tx_hash);
        }
        nonces.sort_unstable();

        assert_eq!(nonces, (0..12).collect::<Vec<u64>>());
        assert_eq!(tx_hashes.len(), 12);
        assert_eq!(s.ledger.pending_count(), 12);
    }

    #[tokio::test]
    async fn test_external_submission_is_respected() {
        let s = stack(5);
        let first = s.stamping.stamp(&[normalize("01").unwrap()]).await.unwrap();

        s.ledger.external_submission();
        let second = s.stamping.stamp(&[normalize("02").unwrap()]).await.unwrap();

        assert_eq!(first.nonce, 0);
        assert_eq!(second.nonce, 2);
    }

    #[tokio::test]
    async fn test_rejected_submission_does_not_burn_a_nonce() {
        let s = stack(5);
        s.ledger.reject_next_send(LedgerError::Rpc {
            code: -32000,
            message: "insufficient funds for gas * price + value".into(),
        });

        let err = s.stamping.stamp(&[normalize("01").unwrap()]).await.unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::SubmissionFailed(LedgerError::Rpc { .. })
        ));

        let retry = s.stamping.stamp(&[normalize("01").unwrap()]).await.unwrap();
        assert_eq!(retry.nonce, 0);
    }

    #[tokio::test]
    async fn test_unreachable_ledger_fails_submission() {
        let s = stack(5);
        s.ledger.set_connected(false);

        let err = s.stamping.stamp(&[normalize("01").unwrap()]).await.unwrap_err();

        match err {
            SubmissionError::SubmissionFailed(cause) => assert!(cause.is_unreachable()),
            other => panic!("expected submission failure, got {other:?}"),
        }
    }

    // =============================================================================
    // BOUNDED WAITS
    // =============================================================================

    #[tokio::test]
    async fn test_next_block_wait_has_exact_budget() {
        let s = stack(42);

        let err = s.tracker.await_next_block(fast(3)).await.unwrap_err();

        assert_eq!(err, TrackerError::ConfirmationTimeout { attempts: 3 });
        // Baseline read plus one read per attempt
        assert_eq!(s.ledger.request_count("eth_blockNumber"), 4);
    }

    #[tokio::test]
    async fn test_next_block_wait_returns_new_height() {
        let s = stack(42);
        let ledger = s.ledger.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(15)).await;
            ledger.mine();
        });

        let height = s.tracker.await_next_block(fast(200)).await.unwrap();

        assert_eq!(height, 43);
    }
}
