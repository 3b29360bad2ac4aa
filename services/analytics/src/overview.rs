//! Headline figures
//!
//! Revenue from completed bookings, which category gets booked most, and
//! the population counts shown on the dashboard header.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::booking::Booking;
use types::category::ItemCategory;
use types::item::Item;
use types::user::User;

use crate::tally::Tally;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Sum of `final_price` over completed bookings (absent counts as 0),
    /// saturating at the `Decimal` bounds.
    pub total_revenue: Decimal,
    pub completed_bookings: u64,
    /// `total_revenue / completed_bookings`, or 0 with no completed bookings.
    pub avg_booking_value: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: ItemCategory,
    pub bookings: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPopularity {
    /// Completed bookings per category, in first-encountered order.
    pub counts: Vec<CategoryCount>,
    /// Highest count; ties go to the category encountered first.
    pub most_booked: Option<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineCounts {
    pub total_farmers: u64,
    pub total_suppliers: u64,
    pub total_items: u64,
    pub total_completed_bookings: u64,
}

pub fn revenue(bookings: &[Booking]) -> RevenueSummary {
    let mut total_revenue = Decimal::ZERO;
    let mut completed_bookings: u64 = 0;

    for booking in bookings.iter().filter(|b| b.is_completed()) {
        total_revenue = total_revenue.saturating_add(booking.price());
        completed_bookings += 1;
    }

    let avg_booking_value = if completed_bookings > 0 {
        total_revenue / Decimal::from(completed_bookings)
    } else {
        Decimal::ZERO
    };

    RevenueSummary {
        total_revenue,
        completed_bookings,
        avg_booking_value,
    }
}

pub fn category_popularity(bookings: &[Booking]) -> CategoryPopularity {
    let mut tally: Tally<ItemCategory, u64> = Tally::new();
    for booking in bookings.iter().filter(|b| b.is_completed()) {
        tally.increment(booking.category());
    }

    let most_booked = tally.first_max().map(|(&category, bookings)| CategoryCount {
        category,
        bookings,
    });

    let counts = tally
        .into_entries()
        .into_iter()
        .map(|(category, bookings)| CategoryCount { category, bookings })
        .collect();

    CategoryPopularity {
        counts,
        most_booked,
    }
}

pub fn headline_counts(bookings: &[Booking], items: &[Item], users: &[User]) -> HeadlineCounts {
    HeadlineCounts {
        total_farmers: users.iter().filter(|u| u.is_farmer()).count() as u64,
        total_suppliers: users.iter().filter(|u| u.is_supplier()).count() as u64,
        total_items: items.len() as u64,
        total_completed_bookings: bookings.iter().filter(|b| b.is_completed()).count() as u64,
    }
}
