//! Quote Record Repository Tests
//!
//! Runs the snapshot-backed repository and adapter against real files in a
//! temp directory.

use core_kernel::{HealthCheckable, PortError};
use domain_records::QuoteRecordPatch;
use infra_store::{QuoteRecordRepository, StoreError};
use test_utils::{RecordFixtures, TempStore};

fn ids(records: &[domain_records::QuoteRecord]) -> Vec<String> {
    records.iter().map(|record| record.id.clone()).collect()
}

mod seeding_tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_store_is_seeded() {
        let store = TempStore::new();
        let repo = store.seeded_repository();
        assert!(!store.path().exists());

        let records = repo.list().await.unwrap();

        assert_eq!(ids(&records), vec!["Q1001", "Q1002", "Q1003", "Q1004", "Q1005"]);
        assert!(store.path().exists());
        assert_eq!(store.read_snapshot().as_array().unwrap().len(), 5);
    }

    /// A store emptied by deletes is never re-seeded
    #[tokio::test]
    async fn test_seed_written_once() {
        let store = TempStore::new();
        let repo = store.seeded_repository();

        repo.delete("Q1001").await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 4);

        let reopened = store.seeded_repository();
        assert_eq!(reopened.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unseeded_store_starts_empty() {
        let store = TempStore::new();
        let repo = store.empty_repository();

        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(store.read_snapshot(), serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_custom_seed() {
        let store = TempStore::new();
        let repo = QuoteRecordRepository::with_seed(store.path(), vec![RecordFixtures::full("Q1")]);

        let record = repo.get("Q1").await.unwrap();
        assert_eq!(record, RecordFixtures::full("Q1"));
        assert_eq!(repo.path().await, store.path());
    }
}

mod upsert_tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_round_trip() {
        let store = TempStore::new();
        let repo = store.empty_repository();

        let created = repo.upsert("Q2000", RecordFixtures::full_patch()).await.unwrap();
        let fetched = repo.get("Q2000").await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched, RecordFixtures::full("Q2000"));
    }

    /// A new record holds only the fields supplied
    #[tokio::test]
    async fn test_upsert_adds_no_defaults() {
        let store = TempStore::new();
        let repo = store.empty_repository();

        repo.upsert("Q2000", QuoteRecordPatch::new().customer("Ada Byron"))
            .await
            .unwrap();

        assert_eq!(
            store.read_snapshot(),
            serde_json::json!([{ "id": "Q2000", "customer": "Ada Byron" }])
        );
    }

    #[tokio::test]
    async fn test_upsert_merges_existing() {
        let store = TempStore::new();
        let repo = store.seeded_repository();

        let record = repo
            .upsert("Q1002", QuoteRecordPatch::new().premium("$900.00"))
            .await
            .unwrap();

        assert_eq!(record.premium.as_deref(), Some("$900.00"));
        assert_eq!(record.customer.as_deref(), Some("Sarah Johnson"));
        assert_eq!(repo.list().await.unwrap().len(), 5);
    }

    /// Concurrent writers never lose each other's records
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_upserts() {
        let store = TempStore::new();
        let repo = store.empty_repository();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.upsert(&format!("Q{}", 3000 + i), QuoteRecordPatch::new().status("new"))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let records = repo.list().await.unwrap();
        assert_eq!(records.len(), 20);
        assert_eq!(store.read_snapshot().as_array().unwrap().len(), 20);
    }
}

mod not_found_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_record() {
        let store = TempStore::new();
        let repo = store.seeded_repository();
        repo.list().await.unwrap();
        let before = store.read_snapshot();

        assert!(repo.get("Q9999").await.unwrap_err().is_not_found());
        assert!(repo
            .update("Q9999", QuoteRecordPatch::new().status("contacted"))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(repo.delete("Q9999").await.unwrap_err().is_not_found());

        assert_eq!(store.read_snapshot(), before);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let store = TempStore::new();
        let repo = store.seeded_repository();

        let record = repo
            .update("Q1001", QuoteRecordPatch::new().status("contacted"))
            .await
            .unwrap();

        assert!(record.is_contacted());
        assert!(repo.get("Q1001").await.unwrap().is_contacted());
    }
}

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_preserves_order() {
        let store = TempStore::new();
        let repo = store.seeded_repository();

        let removed = repo.delete("Q1003").await.unwrap();

        assert_eq!(removed.customer.as_deref(), Some("Michael Brown"));
        assert_eq!(
            ids(&repo.list().await.unwrap()),
            vec!["Q1001", "Q1002", "Q1004", "Q1005"]
        );
    }
}

mod corruption_tests {
    use super::*;

    #[tokio::test]
    async fn test_corrupt_snapshot_is_an_error() {
        let store = TempStore::new();
        store.write_raw("{ not json");
        let repo = store.seeded_repository();

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));

        // The corrupt file is left for inspection
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn test_adapter_maps_corruption_to_storage() {
        let store = TempStore::new();
        store.write_raw("[{\"customer\": \"no id\"}]");
        let port = store.seeded_port();

        let err = port.list().await.unwrap_err();
        assert!(matches!(err, PortError::Storage { .. }));
    }
}

mod adapter_tests {
    use super::*;

    #[tokio::test]
    async fn test_adapter_not_found() {
        let store = TempStore::new();
        let port = store.seeded_port();

        let err = port.get("Q9999").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_adapter_round_trip() {
        let store = TempStore::new();
        let port = store.empty_port();

        port.upsert("Q2000", RecordFixtures::full_patch()).await.unwrap();
        let record = port.update("Q2000", QuoteRecordPatch::new().status("contacted")).await.unwrap();

        assert!(record.is_contacted());
        assert_eq!(port.delete("Q2000").await.unwrap().id, "Q2000");
        assert!(port.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health_check() {
        let store = TempStore::new();
        let port = store.seeded_port();

        let health = port.health_check().await;
        assert!(health.is_healthy());
        assert_eq!(health.message.as_deref(), Some("5 records"));

        store.write_raw("garbage");
        assert!(!port.health_check().await.is_healthy());
    }
}
