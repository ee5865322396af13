use chrono::{DateTime, TimeZone, Utc};
use skufind_core::{FindabilityRecord, FindabilityStatus, FindabilityUpdate};

/// SKUs present in every freshly seeded registry, in seed order.
pub const SEED_SKUS: [&str; 3] = ["AA0001", "BB0002", "CC0003"];

fn stamp(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

/// The example records a registry starts with.
pub fn seed_records() -> Vec<FindabilityRecord> {
    vec![
        FindabilityRecord::from_update(
            "AA0001",
            FindabilityUpdate::new(FindabilityStatus::Found, 0.95)
                .with_detail("location", "Warehouse A, Section 3, Shelf 2")
                .with_detail("quantity", 150)
                .with_detail("condition", "Good")
                .with_detail("category", "Electronics")
                .with_detail("supplier", "TechCorp Inc.")
                .with_recommendation("SKU is easily locatable with clear labeling")
                .with_recommendation("Consider adding RFID tags for better tracking")
                .with_recommendation("Stock levels are adequate for current demand"),
            stamp(2024, 1, 15, 10, 30),
        ),
        FindabilityRecord::from_update(
            "BB0002",
            FindabilityUpdate::new(FindabilityStatus::PartiallyFound, 0.65)
                .with_detail("location", "Warehouse B, Section 1 (approximate)")
                .with_detail("quantity", 25)
                .with_detail("condition", "Good")
                .with_detail("category", "Clothing")
                .with_detail("supplier", "FashionPlus Ltd.")
                .with_recommendation("Improve location accuracy with better signage")
                .with_recommendation("Consider reorganizing warehouse layout")
                .with_recommendation("Implement barcode scanning system"),
            stamp(2024, 1, 14, 15, 45),
        ),
        FindabilityRecord::from_update(
            "CC0003",
            FindabilityUpdate::new(FindabilityStatus::NotFound, 0.10)
                .with_detail("location", "Unknown")
                .with_detail("quantity", 0)
                .with_detail("condition", "Unknown")
                .with_detail("category", "Home & Garden")
                .with_detail("supplier", "GreenThumb Co.")
                .with_recommendation("Conduct full warehouse audit")
                .with_recommendation("Check for misplacement in wrong sections")
                .with_recommendation("Verify if SKU was returned to supplier")
                .with_recommendation("Update inventory management system"),
            stamp(2024, 1, 13, 9, 15),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order_matches_seed_skus() {
        let skus: Vec<String> = seed_records().into_iter().map(|r| r.sku).collect();
        assert_eq!(skus, SEED_SKUS);
    }

    #[test]
    fn test_seed_timestamps_are_fixed() {
        let records = seed_records();
        assert_eq!(records[0].last_updated.to_rfc3339(), "2024-01-15T10:30:00+00:00");
        assert_eq!(records[2].last_updated.to_rfc3339(), "2024-01-13T09:15:00+00:00");
    }
}
