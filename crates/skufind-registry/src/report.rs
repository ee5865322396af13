use crate::registry::SkuRegistry;
use serde::Serialize;
use skufind_core::{FindabilityRecord, SkuFindResult};

const RULE_WIDTH: usize = 50;

/// Looks `sku` up in a freshly seeded registry.
///
/// Nothing is shared between calls; use a [`SkuRegistry`] directly to see
/// writes.
pub fn find_findability_status(sku: &str) -> Option<FindabilityRecord> {
    SkuRegistry::new().lookup(sku)
}

/// Renders the multi-line findability report for `sku`.
///
/// `record` is the result of a lookup; `None` renders the not-found line.
pub fn render_report(sku: &str, record: Option<&FindabilityRecord>) -> String {
    let Some(record) = record else {
        return format!("❌ SKU {sku} not found in database");
    };

    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        format!("📦 SKU Findability Report for {sku}"),
        rule.clone(),
        format!("Status: {}", record.status),
        format!("Confidence Score: {:.2}", record.confidence_score),
        format!(
            "Last Updated: {}",
            record.last_updated.format("%Y-%m-%d %H:%M:%S")
        ),
        String::new(),
        "📍 Location Details:".to_string(),
    ];
    lines.extend(
        record
            .details
            .iter()
            .map(|(key, value)| format!("  {}: {value}", title_case(key))),
    );
    lines.push(String::new());
    lines.push("💡 Recommendations:".to_string());
    lines.extend(
        record
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| format!("  {}. {rec}", i + 1)),
    );
    lines.push(rule);
    lines.join("\n")
}

/// Renders one `sku: STATUS (Confidence: x.xx)` line per record.
pub fn render_summary(records: &[FindabilityRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "  {}: {} (Confidence: {:.2})",
                r.sku, r.status, r.confidence_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a record, a list of records or a lookup result as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> SkuFindResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest: `shelf_id` becomes `Shelf_Id`.
fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
