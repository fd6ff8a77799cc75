//! Today-at-a-glance projection for the dashboard page.

use shared::{format_date_label, parse_minutes, Booking, BookingStatus, DashboardView};

use crate::domain::store::BookingStore;

/// How close a booking's start has to be to raise a starting-soon alert.
pub const ALERT_WINDOW_MINUTES: u32 = 30;

/// Build the dashboard projection for `today`.
///
/// `now_minutes` is the wall clock as minutes since midnight, passed in
/// explicitly so the alert window is a pure function of its inputs.
pub fn dashboard_view(store: &BookingStore, today: &str, now_minutes: u32) -> DashboardView {
    let todays = store.filter_by_date(today);

    let starting_soon = todays
        .iter()
        .filter(|b| !is_done(b) && starts_within(b, now_minutes, ALERT_WINDOW_MINUTES))
        .map(|b| (*b).clone())
        .collect();

    let mut upcoming: Vec<Booking> = todays
        .iter()
        .filter(|b| b.booking_status != BookingStatus::Completed)
        .map(|b| (*b).clone())
        .collect();
    upcoming.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    let mut completed: Vec<Booking> = todays
        .iter()
        .filter(|b| b.booking_status == BookingStatus::Completed)
        .map(|b| (*b).clone())
        .collect();
    completed.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    DashboardView {
        date_label: format_date_label(today),
        starting_soon,
        upcoming,
        completed,
    }
}

fn is_done(booking: &Booking) -> bool {
    matches!(
        booking.booking_status,
        BookingStatus::CheckedIn | BookingStatus::Completed
    )
}

fn starts_within(booking: &Booking, now_minutes: u32, window: u32) -> bool {
    match parse_minutes(&booking.start_time) {
        Ok(start) => start > now_minutes && start - now_minutes <= window,
        Err(_) => false,
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
    fn test_alert_window_boundaries() {
        let store = store();
        // BK001 starts at 09:00 (540 minutes).

        // 29 minutes out: alert.
        let view = dashboard_view(&store, DATE, 511);
        assert_eq!(view.starting_soon.len(), 1);
        assert_eq!(view.starting_soon[0].id, "BK001");

        // Exactly 30 minutes out: still an alert.
        let view = dashboard_view(&store, DATE, 510);
        assert_eq!(view.starting_soon.len(), 1);

        // 31 minutes out: too early.
        let view = dashboard_view(&store, DATE, 509);
        assert!(view.starting_soon.is_empty());

        // Already started: no alert.
        let view = dashboard_view(&store, DATE, 540);
        assert!(view.starting_soon.is_empty());
    }

    #[test]
    fn test_checked_in_bookings_do_not_alert() {
        let store = store();
        // BK003 (checked-in) starts at 14:00 (840 minutes); 20 minutes out.
        let view = dashboard_view(&store, DATE, 820);
        assert!(view.starting_soon.is_empty());
    }

    #[test]
    fn test_upcoming_excludes_completed_and_sorts_by_start() {
        let mut bookings = seed_bookings(DATE);
        bookings[0].booking_status = shared::BookingStatus::Completed;
        let store = BookingStore::new(bookings);

        let view = dashboard_view(&store, DATE, 0);
        let upcoming_ids: Vec<_> = view.upcoming.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(upcoming_ids, vec!["BK002", "BK003", "BK004"]);

        let completed_ids: Vec<_> = view.completed.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(completed_ids, vec!["BK001"]);
    }

    #[test]
    fn test_other_dates_are_ignored() {
        let store = store();
        let view = dashboard_view(&store, "2026-03-15", 511);
        assert!(view.starting_soon.is_empty());
        assert!(view.upcoming.is_empty());
        assert!(view.completed.is_empty());
    }

    #[test]
    fn test_date_label_is_long_form() {
        let view = dashboard_view(&store(), DATE, 0);
        assert_eq!(view.date_label, "Saturday, March 14, 2026");
    }
}
