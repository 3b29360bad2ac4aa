//! Analytics engine
//!
//! Runs every view over one snapshot. Views are independent of each other;
//! the engine only wires inputs to them and applies configured limits.

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use types::booking::Booking;
use types::item::Item;
use types::snapshot::RecordSnapshot;
use types::user::User;

use crate::config::AnalyticsConfig;
use crate::overview::{category_popularity, headline_counts, revenue};
use crate::pricing::{income_by_region, price_trends};
use crate::regional::{regional_demand, supply_vs_demand};
use crate::report::AnalyticsReport;
use crate::seasonal::seasonal_signals;
use crate::shortage::shortages;
use crate::utilization::{booking_counts, low_utilization, top_demand};
use crate::windows::demand_windows;

/// Stateless report builder. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    pub fn new(config: AnalyticsConfig) -> Self {
        info!(
            shortage_limit = config.shortage_limit,
            demand_window_limit = config.demand_window_limit,
            regional_demand_limit = config.regional_demand_limit,
            "AnalyticsEngine initialized"
        );
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(AnalyticsConfig::default())
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Compute the full report.
    ///
    /// `now` stands in for any missing booking date; pass a fixed value to
    /// get reproducible output.
    pub fn compute(
        &self,
        bookings: &[Booking],
        items: &[Item],
        users: &[User],
        now: DateTime<Utc>,
    ) -> AnalyticsReport {
        let cfg = &self.config;
        let counts = booking_counts(bookings);

        let report = AnalyticsReport {
            evaluated_at: now,
            headline: headline_counts(bookings, items, users),
            revenue: revenue(bookings),
            popularity: category_popularity(bookings),
            shortages: shortages(bookings, items, cfg.shortage_limit),
            demand_windows: demand_windows(bookings, cfg.demand_window_limit),
            low_utilization: low_utilization(items, &counts, cfg.low_utilization_limit),
            top_demand: top_demand(items, &counts, cfg.top_machines_limit),
            price_trends: price_trends(bookings, items, cfg.price_trend_limit),
            supply_vs_demand: supply_vs_demand(bookings, items, cfg.supply_demand_limit),
            income_by_region: income_by_region(bookings, cfg.income_region_limit),
            seasonal: seasonal_signals(bookings, now),
            regional_demand: regional_demand(bookings, items, cfg.regional_demand_limit),
        };

        debug!(
            bookings = bookings.len(),
            items = items.len(),
            users = users.len(),
            completed = report.revenue.completed_bookings,
            shortages = report.shortages.len(),
            "Analytics report computed"
        );

        report
    }

    pub fn compute_snapshot(&self, snapshot: &RecordSnapshot, now: DateTime<Utc>) -> AnalyticsReport {
        self.compute(&snapshot.bookings, &snapshot.items, &snapshot.users, now)
    }
}

/// Compute a report with the default configuration.
pub fn compute(
    bookings: &[Booking],
    items: &[Item],
    users: &[User],
    now: DateTime<Utc>,
) -> AnalyticsReport {
    AnalyticsEngine::default().compute(bookings, items, users, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_inputs_produce_zeroed_report() {
        let report = compute(&[], &[], &[], now());

        assert_eq!(report.revenue.total_revenue, Decimal::ZERO);
        assert_eq!(report.revenue.avg_booking_value, Decimal::ZERO);
        assert_eq!(report.headline.total_items, 0);
        assert!(report.popularity.most_booked.is_none());
        assert_eq!(report.most_booked_label(), "N/A");
        assert!(report.shortages.is_empty());
        assert!(report.demand_windows.is_empty());
        assert!(report.low_utilization.is_empty());
        assert!(report.top_demand.is_empty());
        assert!(report.price_trends.is_empty());
        assert!(report.supply_vs_demand.is_empty());
        assert!(report.income_by_region.is_empty());
        assert!(report.regional_demand.is_empty());
        assert_eq!(report.seasonal.harvest.len(), 3);
    }

    #[test]
    fn test_config_limits_applied() {
        let config = AnalyticsConfig {
            top_machines_limit: 1,
            ..AnalyticsConfig::default()
        };
        let engine = AnalyticsEngine::new(config);
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}, {"id": 3, "name": "c"}]"#,
        )
        .unwrap();

        let report = engine.compute(&[], &items, &[], now());
        assert_eq!(report.top_demand.len(), 1);
        assert_eq!(report.low_utilization.len(), 3);
    }

    #[test]
    fn test_checksum_stable_for_same_input() {
        let snapshot = RecordSnapshot::default();
        let engine = AnalyticsEngine::with_defaults();
        let a = engine.compute_snapshot(&snapshot, now());
        let b = engine.compute_snapshot(&snapshot, now());
        assert_eq!(a.checksum().unwrap(), b.checksum().unwrap());
        assert_eq!(a.checksum().unwrap().len(), 64);
    }
}
