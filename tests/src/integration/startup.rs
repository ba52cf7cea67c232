//! # Startup Wiring
//!
//! `SubsystemContainer` refuses to start on an incomplete ABI, a credential
//! that does not match the configured account, or an unreachable ledger.

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use node_runtime::container::load_contract_interface;
    use node_runtime::SubsystemContainer;
    use shared_types::Address;

    use crate::fake_ledger::{FakeLedger, TEST_CHAIN_ID};
    use crate::integration::fixtures::{abi_file, node_config, CONTRACT_ARTIFACT};

    #[tokio::test]
    async fn test_container_reads_chain_context_once() {
        let ledger = Arc::new(FakeLedger::default());
        let abi = abi_file(CONTRACT_ARTIFACT);
        let config = node_config(&ledger, &abi);

        let container = SubsystemContainer::with_ledger(config, ledger.clone())
            .await
            .unwrap();

        assert_eq!(container.context.chain_id, TEST_CHAIN_ID);
        assert_eq!(container.context.network_id, TEST_CHAIN_ID.to_string());
        assert_eq!(*container.context, ledger.context());
        assert_eq!(ledger.request_count("eth_chainId"), 1);
        assert_eq!(
            container.contract.function_names(),
            vec!["put", "getObjectCount", "getBlockNo"]
        );
    }

    #[tokio::test]
    async fn test_mismatched_wallet_address_aborts() {
        let ledger = Arc::new(FakeLedger::default());
        let abi = abi_file(CONTRACT_ARTIFACT);
        let mut config = node_config(&ledger, &abi);
        config.wallet.address = Address::repeat_byte(0x11);

        let err = SubsystemContainer::with_ledger(config, ledger.clone())
            .await
            .err()
            .unwrap();

        assert!(err.to_string().contains("WALLET_ADDRESS"));
        // Checked before the ledger is contacted
        assert!(ledger.requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_private_key_aborts() {
        let ledger = Arc::new(FakeLedger::default());
        let abi = abi_file(CONTRACT_ARTIFACT);
        let mut config = node_config(&ledger, &abi);
        config.wallet.private_key = "0xnot-a-key".into();

        let result = SubsystemContainer::with_ledger(config, ledger).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_ledger_aborts() {
        let ledger = Arc::new(FakeLedger::default());
        ledger.set_connected(false);
        let abi = abi_file(CONTRACT_ARTIFACT);
        let config = node_config(&ledger, &abi);

        let err = SubsystemContainer::with_ledger(config, ledger)
            .await
            .err()
            .unwrap();

        assert!(err.to_string().contains("Cannot connect"));
    }

    #[test]
    fn test_abi_without_required_function_is_rejected() {
        let abi = abi_file(
            r#"[{"type": "function", "name": "put", "inputs": [{"type": "bytes32[]"}]}]"#,
        );

        let err = load_contract_interface(abi.path()).unwrap_err();

        assert!(format!("{err:#}").contains("getObjectCount(bytes32)"));
    }

    #[test]
    fn test_missing_abi_file_is_rejected() {
        let err = load_contract_interface(Path::new("/nonexistent/abi.json")).unwrap_err();
        assert!(err.to_string().contains("Cannot read contract ABI"));
    }
}
