//! Record Service Tests
//!
//! Exercises the back-office operations against the in-memory mock port.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_records::ports::mock::MockQuoteRecordPort;
use domain_records::{
    record_patch_from_quote, QuoteRecordPatch, QuoteSummary, RecordError, RecordService,
    STATUS_CONTACTED,
};
use test_utils::{QuoteRecordBuilder, RecordFixtures};

fn service_with(records: Vec<domain_records::QuoteRecord>) -> RecordService {
    RecordService::new(Arc::new(MockQuoteRecordPort::with_records(records)))
}

fn sample_summary() -> QuoteSummary {
    QuoteSummary {
        quoted_on: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        vehicle: "2023 Standard".to_string(),
        coverage: "Standard".to_string(),
        premium: Money::new(dec!(834.74)),
        zip: "90210".to_string(),
    }
}

mod patch_tests {
    use super::*;

    #[test]
    fn test_patch_from_quote_formats_fields() {
        let patch = record_patch_from_quote(&sample_summary());

        assert_eq!(patch.date.as_deref(), Some("2026-10-16"));
        assert_eq!(patch.premium.as_deref(), Some("$834.74"));
        assert_eq!(patch.status.as_deref(), Some("new"));
        assert_eq!(patch.vehicle.as_deref(), Some("2023 Standard"));
        assert!(patch.customer.is_none());
    }

    /// Large premiums get thousands separators
    #[test]
    fn test_patch_premium_thousands() {
        let mut summary = sample_summary();
        summary.premium = Money::new(dec!(1234.5));

        let patch = record_patch_from_quote(&summary);
        assert_eq!(patch.premium.as_deref(), Some("$1,234.50"));
    }
}

mod mark_contacted_tests {
    use super::*;

    #[tokio::test]
    async fn test_mark_contacted_sets_status() {
        let service = service_with(vec![QuoteRecordBuilder::new("Q1001").status("new").build()]);

        let record = service.mark_contacted("Q1001").await.unwrap();

        assert!(record.is_contacted());
        assert_eq!(record.status.as_deref(), Some(STATUS_CONTACTED));
        assert!(service.get("Q1001").await.unwrap().is_contacted());
    }

    #[tokio::test]
    async fn test_mark_contacted_keeps_other_fields() {
        let service = service_with(vec![RecordFixtures::full("Q1001")]);

        let record = service.mark_contacted("Q1001").await.unwrap();

        assert_eq!(record.customer.as_deref(), Some("Ada Byron"));
        assert_eq!(record.premium.as_deref(), Some("$834.74"));
    }

    /// Unknown ids are reported, not created
    #[tokio::test]
    async fn test_mark_contacted_unknown_id() {
        let service = service_with(Vec::new());

        let err = service.mark_contacted("Q9999").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, RecordError::NotFound(ref id) if id == "Q9999"));
        assert!(service.list().await.unwrap().is_empty());
    }
}

mod save_tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_then_merges() {
        let service = service_with(Vec::new());

        service
            .save("Q2000", QuoteRecordPatch::new().customer("Ada Byron"))
            .await
            .unwrap();
        let record = service
            .save("Q2000", QuoteRecordPatch::new().email("ada@example.com"))
            .await
            .unwrap();

        assert_eq!(record.customer.as_deref(), Some("Ada Byron"));
        assert_eq!(record.email.as_deref(), Some("ada@example.com"));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_record_quote_merges_contact() {
        let service = service_with(Vec::new());
        let contact = QuoteRecordPatch::new()
            .customer("Ada Byron")
            .email("ada@example.com")
            .status("ignored");

        let record = service
            .record_quote("QM-20261016-1000", &sample_summary(), contact)
            .await
            .unwrap();

        assert_eq!(record.id, "QM-20261016-1000");
        assert_eq!(record.customer.as_deref(), Some("Ada Byron"));
        assert_eq!(record.phone, None);
        assert_eq!(record.status.as_deref(), Some("new"));
        assert_eq!(record.premium.as_deref(), Some("$834.74"));
    }
}

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_preserves_order() {
        let service = service_with(vec![
            QuoteRecordBuilder::new("Q1").build(),
            QuoteRecordBuilder::new("Q2").build(),
            QuoteRecordBuilder::new("Q3").build(),
        ]);

        let removed = service.delete("Q2").await.unwrap();
        assert_eq!(removed.id, "Q2");

        let ids: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|record| record.id)
            .collect();
        assert_eq!(ids, vec!["Q1", "Q3"]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let service = service_with(vec![QuoteRecordBuilder::new("Q1").build()]);

        assert!(service.delete("Q2").await.unwrap_err().is_not_found());
        assert_eq!(service.list().await.unwrap().len(), 1);
    }
}
