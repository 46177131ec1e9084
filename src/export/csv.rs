//! CSV export of the allocation breakdown

use serde::Serialize;
use std::io::Write;

use crate::engine::{Allocation, BucketKind};
use crate::error::{GaugeError, GaugeResult};

#[derive(Debug, Serialize)]
struct BucketRecord<'a> {
    bucket: &'a str,
    kind: &'static str,
    goal_id: String,
    amount: String,
    share: String,
}

fn kind_name(kind: &BucketKind) -> &'static str {
    match kind {
        BucketKind::BalanceLeft => "balance_left",
        BucketKind::Goal(_) => "goal",
        BucketKind::Strategy => "strategy",
        BucketKind::GeneralSavings => "general_savings",
        BucketKind::Housing => "housing",
        BucketKind::Transport => "transport",
        BucketKind::Food => "food",
        BucketKind::Utilities => "utilities",
        BucketKind::Debt => "debt",
        BucketKind::Subscriptions => "subscriptions",
        BucketKind::Subsidies => "subsidies",
    }
}

/// Write one row per allocation bucket, in bucket order
///
/// Amounts have two decimals and shares four, as plain numbers without a
/// currency symbol.
pub fn export_buckets_csv<W: Write>(allocation: &Allocation, writer: W) -> GaugeResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    for (i, bucket) in allocation.buckets.iter().enumerate() {
        let goal_id = match &bucket.kind {
            BucketKind::Goal(id) => id.as_uuid().to_string(),
            _ => String::new(),
        };
        out.serialize(BucketRecord {
            bucket: &bucket.label,
            kind: kind_name(&bucket.kind),
            goal_id,
            amount: format!("{:.2}", bucket.amount),
            share: format!("{:.4}", allocation.share(i)),
        })
        .map_err(|e| GaugeError::Export(e.to_string()))?;
    }

    out.flush().map_err(|e| GaugeError::Export(e.to_string()))
}
