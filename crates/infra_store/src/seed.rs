//! Seed records
//!
//! Written to a fresh store the first time it is opened, so the back-office
//! tool has something to show on first run.

use domain_records::{QuoteRecord, QuoteRecordPatch};

/// The five mock records a new store starts with
pub fn mock_records() -> Vec<QuoteRecord> {
    vec![
        QuoteRecord::from_patch(
            "Q1001",
            QuoteRecordPatch::new()
                .customer("John Smith")
                .email("john.smith@example.com")
                .phone("(555) 123-4567")
                .date("2025-03-15")
                .vehicle("2022 Toyota Camry")
                .coverage("Standard")
                .premium("$1,245.00")
                .status("new")
                .zip("90210"),
        ),
        QuoteRecord::from_patch(
            "Q1002",
            QuoteRecordPatch::new()
                .customer("Sarah Johnson")
                .email("sarah.j@example.com")
                .phone("(555) 234-5678")
                .date("2025-03-14")
                .vehicle("2020 Honda Civic")
                .coverage("Basic")
                .premium("$876.50")
                .status("contacted")
                .zip("10001"),
        ),
        QuoteRecord::from_patch(
            "Q1003",
            QuoteRecordPatch::new()
                .customer("Michael Brown")
                .email("mbrown@example.com")
                .phone("(555) 345-6789")
                .date("2025-03-12")
                .vehicle("2023 BMW X5")
                .coverage("Premium")
                .premium("$2,150.75")
                .status("converted")
                .zip("60601"),
        ),
        QuoteRecord::from_patch(
            "Q1004",
            QuoteRecordPatch::new()
                .customer("Emily Davis")
                .email("emily.davis@example.com")
                .phone("(555) 456-7890")
                .date("2025-03-10")
                .vehicle("2019 Ford F-150")
                .coverage("Standard")
                .premium("$1,432.25")
                .status("new")
                .zip("75201"),
        ),
        QuoteRecord::from_patch(
            "Q1005",
            QuoteRecordPatch::new()
                .customer("David Wilson")
                .email("dwilson@example.com")
                .phone("(555) 567-8901")
                .date("2025-03-08")
                .vehicle("2021 Tesla Model 3")
                .coverage("Premium")
                .premium("$1,987.00")
                .status("lost")
                .zip("98101"),
        ),
    ]
}
