//! Machine utilization
//!
//! Per-item booking counts drive two views: machines nobody has booked,
//! and the machines booked most.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use types::booking::Booking;
use types::ids::ItemId;
use types::item::Item;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUsage {
    pub item_id: ItemId,
    pub name: String,
    /// Bookings of any status referencing this item.
    pub bookings: u64,
}

/// Bookings per referenced item. Bookings without an item are skipped.
pub fn booking_counts(bookings: &[Booking]) -> HashMap<ItemId, u64> {
    let mut counts = HashMap::new();
    for item_id in bookings.iter().filter_map(|b| b.item_id) {
        *counts.entry(item_id).or_insert(0) += 1;
    }
    counts
}

fn usage(item: &Item, counts: &HashMap<ItemId, u64>) -> ItemUsage {
    ItemUsage {
        item_id: item.id,
        name: item.name.clone(),
        bookings: counts.get(&item.id).copied().unwrap_or(0),
    }
}

/// Items with no bookings at all, in input order.
pub fn low_utilization(
    items: &[Item],
    counts: &HashMap<ItemId, u64>,
    limit: usize,
) -> Vec<ItemUsage> {
    items
        .iter()
        .map(|item| usage(item, counts))
        .filter(|u| u.bookings == 0)
        .take(limit)
        .collect()
}

/// Items by booking count, descending. Ties keep input order.
pub fn top_demand(items: &[Item], counts: &HashMap<ItemId, u64>, limit: usize) -> Vec<ItemUsage> {
    let mut ranked: Vec<ItemUsage> = items.iter().map(|item| usage(item, counts)).collect();
    ranked.sort_by(|a, b| b.bookings.cmp(&a.bookings));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::booking::BookingStatus;
    use types::ids::BookingId;
    use types::item::ItemStatus;

    fn item(id: u64) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("machine-{id}"),
            category: None,
            location: None,
            available: true,
            status: ItemStatus::Approved,
        }
    }

    fn booking_for(id: u64, item_id: Option<u64>) -> Booking {
        Booking {
            id: BookingId::new(id),
            item_id: item_id.map(ItemId::new),
            item_category: None,
            location: None,
            status: BookingStatus::Confirmed,
            start_time: None,
            date: None,
            final_price: None,
        }
    }

    #[test]
    fn test_low_utilization_in_input_order() {
        let items: Vec<Item> = (1..=4).map(item).collect();
        let bookings = vec![booking_for(1, Some(2)), booking_for(2, None)];
        let counts = booking_counts(&bookings);

        let low = low_utilization(&items, &counts, 10);
        let ids: Vec<u64> = low.iter().map(|u| u.item_id.get()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!(low.iter().all(|u| u.bookings == 0));
    }

    #[test]
    fn test_low_utilization_limit() {
        let items: Vec<Item> = (1..=15).map(item).collect();
        let low = low_utilization(&items, &HashMap::new(), 10);
        assert_eq!(low.len(), 10);
        assert_eq!(low[9].item_id, ItemId::new(10));
    }

    #[test]
    fn test_top_demand_stable_ties() {
        let items: Vec<Item> = (1..=4).map(item).collect();
        let bookings = vec![
            booking_for(1, Some(3)),
            booking_for(2, Some(3)),
            booking_for(3, Some(2)),
            booking_for(4, Some(4)),
            // references an item missing from the snapshot
            booking_for(5, Some(99)),
        ];
        let counts = booking_counts(&bookings);

        let top = top_demand(&items, &counts, 10);
        let ranked: Vec<(u64, u64)> = top.iter().map(|u| (u.item_id.get(), u.bookings)).collect();
        assert_eq!(ranked, vec![(3, 2), (2, 1), (4, 1), (1, 0)]);
    }
}
