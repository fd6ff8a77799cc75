//! Search-and-sort projection for the bookings list page.

use shared::{Booking, BookingTableView};

use crate::domain::store::BookingStore;

/// The full store, narrowed by a case-insensitive search on customer name
/// or booking id, ascending by start time. Admin sessions get
/// reschedule/delete affordances per row.
pub fn booking_table(store: &BookingStore, search: &str, is_admin: bool) -> BookingTableView {
    let mut bookings: Vec<Booking> = store
        .filter_by_search(search)
        .into_iter()
        .cloned()
        .collect();
    bookings.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    BookingTableView {
        bookings,
        admin_actions: is_admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_bookings;

    const DATE: &str = "2026-03-14";

    fn store() -> BookingStore {
        BookingStore::new(seed_bookings(DATE))
    }

    #[test]
    fn test_unfiltered_table_sorts_by_start_time() {
        let view = booking_table(&store(), "", false);
        let ids: Vec<_> = view.bookings.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["BK001", "BK002", "BK003", "BK004"]);
        assert!(!view.admin_actions);
    }

    #[test]
    fn test_search_matches_customer_or_id() {
        let view = booking_table(&store(), "SARAH", false);
        assert_eq!(view.bookings.len(), 1);
        assert_eq!(view.bookings[0].id, "BK004");

        let view = booking_table(&store(), "bk003", false);
        assert_eq!(view.bookings.len(), 1);
        assert_eq!(view.bookings[0].customer, "Mike Johnson");

        let view = booking_table(&store(), "nobody", false);
        assert!(view.bookings.is_empty());
    }

    #[test]
    fn test_admin_flag_flows_through() {
        assert!(booking_table(&store(), "", true).admin_actions);
    }
}
