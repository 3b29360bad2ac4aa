//! Analytics report
//!
//! Fixed-shape output of one engine run. Every list is already ranked and
//! truncated; presentation renders it as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::overview::{CategoryPopularity, HeadlineCounts, RevenueSummary};
use crate::pricing::{PriceTrend, RegionIncome};
use crate::regional::{RegionBalance, RegionDemand};
use crate::seasonal::SeasonalSignals;
use crate::shortage::Shortage;
use crate::utilization::ItemUsage;
use crate::windows::DemandWindow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Evaluation time used for date defaulting.
    pub evaluated_at: DateTime<Utc>,
    pub headline: HeadlineCounts,
    pub revenue: RevenueSummary,
    pub popularity: CategoryPopularity,
    pub shortages: Vec<Shortage>,
    pub demand_windows: Vec<DemandWindow>,
    pub low_utilization: Vec<ItemUsage>,
    pub top_demand: Vec<ItemUsage>,
    pub price_trends: Vec<PriceTrend>,
    pub supply_vs_demand: Vec<RegionBalance>,
    pub income_by_region: Vec<RegionIncome>,
    pub seasonal: SeasonalSignals,
    pub regional_demand: Vec<RegionDemand>,
}

impl AnalyticsReport {
    /// SHA-256 over the canonical JSON encoding.
    ///
    /// Every field is a struct or an ordered list, so the encoding is
    /// deterministic and equal reports hash equally. The encoding is
    /// streamed straight into the hasher.
    pub fn checksum(&self) -> Result<String, serde_json::Error> {
        let mut hasher = Sha256::new();
        serde_json::to_writer(&mut hasher, self)?;
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Dashboard label for the most booked category, `"N/A"` with no
    /// completed bookings.
    pub fn most_booked_label(&self) -> String {
        match &self.popularity.most_booked {
            Some(top) => format!("{} ({} bookings)", top.category, top.bookings),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use chrono::TimeZone;

    #[test]
    fn test_checksum_is_sha256_of_json() {
        let now = Utc.with_ymd_and_hms(2024, 9, 15, 0, 0, 0).unwrap();
        let report = compute(&[], &[], &[], now);

        let json = serde_json::to_vec(&report).unwrap();
        let expected = format!("{:x}", Sha256::digest(&json));

        assert_eq!(report.checksum().unwrap(), expected);
    }
}
