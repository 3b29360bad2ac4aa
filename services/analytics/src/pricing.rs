//! Price and income views
//!
//! Average realized price per machine, and completed-booking income per
//! region.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::booking::Booking;
use types::ids::ItemId;
use types::item::Item;

use crate::tally::Tally;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTrend {
    pub item_id: ItemId,
    /// Display name when the item is present in the snapshot.
    pub name: Option<String>,
    pub average_price: Decimal,
    /// Completed bookings contributing to the average.
    pub samples: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionIncome {
    pub region: String,
    pub total: Decimal,
}

#[derive(Debug, Default, Clone)]
struct PriceAccum {
    sum: Decimal,
    samples: u64,
}

/// Average price per item over completed bookings with a positive price,
/// highest first. Sums saturate at `Decimal::MAX`.
pub fn price_trends(bookings: &[Booking], items: &[Item], limit: usize) -> Vec<PriceTrend> {
    let mut by_item: Tally<ItemId, PriceAccum> = Tally::new();
    for booking in bookings.iter().filter(|b| b.is_completed()) {
        let price = booking.price();
        if let Some(item_id) = booking.item_id {
            if price > Decimal::ZERO {
                let accum = by_item.entry(item_id);
                accum.sum = accum.sum.saturating_add(price);
                accum.samples += 1;
            }
        }
    }

    let mut names: HashMap<ItemId, &str> = HashMap::new();
    for item in items {
        names.entry(item.id).or_insert(item.name.as_str());
    }

    let mut trends: Vec<PriceTrend> = by_item
        .into_entries()
        .into_iter()
        .map(|(item_id, accum)| PriceTrend {
            item_id,
            name: names.get(&item_id).map(|n| n.to_string()),
            average_price: accum.sum / Decimal::from(accum.samples),
            samples: accum.samples,
        })
        .collect();

    trends.sort_by(|a, b| b.average_price.cmp(&a.average_price));
    trends.truncate(limit);
    trends
}

/// Completed-booking income per region, highest first. Totals saturate at
/// the `Decimal` bounds.
pub fn income_by_region(bookings: &[Booking], limit: usize) -> Vec<RegionIncome> {
    let mut by_region: Tally<&str, Decimal> = Tally::new();
    for booking in bookings.iter().filter(|b| b.is_completed()) {
        let total = by_region.entry(booking.region());
        *total = total.saturating_add(booking.price());
    }

    let mut incomes: Vec<RegionIncome> = by_region
        .into_entries()
        .into_iter()
        .map(|(region, total)| RegionIncome {
            region: region.to_string(),
            total,
        })
        .collect();

    incomes.sort_by(|a, b| b.total.cmp(&a.total));
    incomes.truncate(limit);
    incomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::booking::BookingStatus;
    use types::ids::BookingId;
    use types::item::ItemStatus;

    fn completed(id: u64, item_id: u64, location: Option<&str>, price: Option<i64>) -> Booking {
        Booking {
            id: BookingId::new(id),
            item_id: Some(ItemId::new(item_id)),
            item_category: None,
            location: location.map(str::to_string),
            status: BookingStatus::Completed,
            start_time: None,
            date: None,
            final_price: price.map(Decimal::from),
        }
    }

    #[test]
    fn test_price_trend_averages_and_order() {
        let bookings = vec![
            completed(1, 1, None, Some(100)),
            completed(2, 1, None, Some(200)),
            completed(3, 2, None, Some(500)),
            completed(4, 3, None, Some(0)),
            completed(5, 3, None, None),
        ];
        let items = vec![Item {
            id: ItemId::new(2),
            name: "Combine".to_string(),
            category: None,
            location: None,
            available: true,
            status: ItemStatus::Approved,
        }];

        let trends = price_trends(&bookings, &items, 10);
        assert_eq!(trends.len(), 2, "zero and missing prices contribute nothing");
        assert_eq!(trends[0].item_id, ItemId::new(2));
        assert_eq!(trends[0].name.as_deref(), Some("Combine"));
        assert_eq!(trends[0].average_price, Decimal::from(500));
        assert_eq!(trends[1].average_price, Decimal::from(150));
        assert_eq!(trends[1].samples, 2);
        assert_eq!(trends[1].name, None);
    }

    #[test]
    fn test_price_trend_skips_uncompleted() {
        let mut pending = completed(1, 1, None, Some(800));
        pending.status = BookingStatus::PendingPayment;
        assert!(price_trends(&[pending], &[], 10).is_empty());
    }

    #[test]
    fn test_income_by_region() {
        let bookings = vec![
            completed(1, 1, Some("Nashik"), Some(100)),
            completed(2, 1, None, Some(700)),
            completed(3, 2, Some("Nashik"), Some(300)),
            completed(4, 2, Some("Satara"), None),
        ];
        let incomes = income_by_region(&bookings, 10);
        let rows: Vec<(&str, Decimal)> =
            incomes.iter().map(|r| (r.region.as_str(), r.total)).collect();
        assert_eq!(
            rows,
            vec![
                ("Unknown", Decimal::from(700)),
                ("Nashik", Decimal::from(400)),
                ("Satara", Decimal::ZERO),
            ]
        );
    }

    #[test]
    fn test_equal_averages_keep_first_encountered_order() {
        let bookings = vec![
            completed(1, 5, None, Some(200)),
            completed(2, 3, None, Some(100)),
            completed(3, 3, None, Some(300)),
            completed(4, 9, None, Some(200)),
            completed(5, 4, None, Some(900)),
        ];
        let order: Vec<u64> = price_trends(&bookings, &[], 10)
            .iter()
            .map(|t| t.item_id.get())
            .collect();
        assert_eq!(order, vec![4, 5, 3, 9]);
    }

    #[test]
    fn test_equal_incomes_keep_first_encountered_order() {
        let bookings = vec![
            completed(1, 1, Some("Satara"), Some(300)),
            completed(2, 1, Some("Akola"), Some(100)),
            completed(3, 1, Some("Nashik"), Some(300)),
            completed(4, 1, Some("Akola"), Some(200)),
        ];
        let regions: Vec<String> = income_by_region(&bookings, 10)
            .into_iter()
            .map(|r| r.region)
            .collect();
        assert_eq!(regions, vec!["Satara", "Akola", "Nashik"]);
    }

    #[test]
    fn test_sums_saturate_on_huge_prices() {
        let huge = Decimal::from_i128_with_scale(5 * 10i128.pow(28), 0);
        let mut a = completed(1, 7, Some("Nashik"), None);
        a.final_price = Some(huge);
        let mut b = completed(2, 7, Some("Nashik"), None);
        b.final_price = Some(huge);
        let bookings = vec![a, b];

        let trends = price_trends(&bookings, &[], 10);
        assert_eq!(trends[0].samples, 2);
        assert_eq!(trends[0].average_price, Decimal::MAX / Decimal::from(2));

        let incomes = income_by_region(&bookings, 10);
        assert_eq!(incomes[0].total, Decimal::MAX);
    }
}
