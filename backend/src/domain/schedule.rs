//! Hourly-grid projection for the schedule page.

use shared::{CourtFilter, ScheduleCell, ScheduleGrid, ScheduleRow};

use crate::domain::store::BookingStore;

/// The facility's courts, left to right in the grid.
pub const COURTS: [u32; 3] = [1, 2, 3];

/// First and last hourly slot shown on the schedule.
pub const FIRST_SLOT_HOUR: u32 = 6;
pub const LAST_SLOT_HOUR: u32 = 23;

/// Hourly slot labels, "06:00" through "23:00".
pub fn time_slots() -> Vec<String> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .map(|hour| format!("{:02}:00", hour))
        .collect()
}

/// Build the schedule grid for one date.
///
/// A booking appears only in the cell matching its exact
/// `(court, date, start_time)`; spans longer than an hour are not repeated
/// in later slots. Admin grids mark bookings draggable and enable the
/// drop targets; staff grids are static.
pub fn schedule_grid(
    store: &BookingStore,
    date: &str,
    court_filter: CourtFilter,
    is_admin: bool,
) -> ScheduleGrid {
    let courts: Vec<u32> = match court_filter {
        CourtFilter::All => COURTS.to_vec(),
        CourtFilter::Only(court) => vec![court],
    };
    let days_bookings = store.filter_by_date(date);

    let rows = time_slots()
        .into_iter()
        .map(|time| {
            let cells = courts
                .iter()
                .map(|&court| {
                    let booking = days_bookings
                        .iter()
                        .find(|b| b.court == court && b.start_time == time)
                        .map(|b| (*b).clone());
                    ScheduleCell {
                        court,
                        time: time.clone(),
                        draggable: is_admin && booking.is_some(),
                        booking,
                    }
                })
                .collect();
            ScheduleRow { time, cells }
        })
        .collect();

    ScheduleGrid {
        date: date.to_string(),
        courts,
        rows,
        admin_controls: is_admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_bookings;
    use shared::Booking;

    const DATE: &str = "2026-03-14";

    fn store() -> BookingStore {
        BookingStore::new(seed_bookings(DATE))
    }

    fn cell_at<'a>(grid: &'a ScheduleGrid, time: &str, court: u32) -> &'a ScheduleCell {
        grid.rows
            .iter()
            .find(|r| r.time == time)
            .unwrap()
            .cells
            .iter()
            .find(|c| c.court == court)
            .unwrap()
    }

    fn booking_at<'a>(grid: &'a ScheduleGrid, time: &str, court: u32) -> Option<&'a Booking> {
        cell_at(grid, time, court).booking.as_ref()
    }

    #[test]
    fn test_grid_covers_hourly_slots_for_all_courts() {
        let grid = schedule_grid(&store(), DATE, CourtFilter::All, false);
        assert_eq!(grid.rows.len(), 18);
        assert_eq!(grid.rows.first().unwrap().time, "06:00");
        assert_eq!(grid.rows.last().unwrap().time, "23:00");
        assert_eq!(grid.courts, vec![1, 2, 3]);
        assert!(grid.rows.iter().all(|r| r.cells.len() == 3));
    }

    #[test]
    fn test_bookings_land_in_their_starting_slot_only() {
        let grid = schedule_grid(&store(), DATE, CourtFilter::All, false);
        assert_eq!(booking_at(&grid, "09:00", 1).unwrap().id, "BK001");
        assert_eq!(booking_at(&grid, "14:00", 1).unwrap().id, "BK003");
        // BK003 runs until 15:30 but does not occupy the 15:00 slot.
        assert!(booking_at(&grid, "15:00", 1).is_none());
        assert!(booking_at(&grid, "10:00", 1).is_none());
    }

    #[test]
    fn test_court_filter_narrows_columns() {
        let grid = schedule_grid(&store(), DATE, CourtFilter::Only(2), false);
        assert_eq!(grid.courts, vec![2]);
        assert!(grid.rows.iter().all(|r| r.cells.len() == 1));
        assert_eq!(booking_at(&grid, "10:00", 2).unwrap().id, "BK002");
    }

    #[test]
    fn test_admin_grid_marks_drag_affordances() {
        let admin_grid = schedule_grid(&store(), DATE, CourtFilter::All, true);
        assert!(admin_grid.admin_controls);
        assert!(cell_at(&admin_grid, "09:00", 1).draggable);
        // Empty cells are drop targets, not drag sources.
        assert!(!cell_at(&admin_grid, "06:00", 1).draggable);

        let staff_grid = schedule_grid(&store(), DATE, CourtFilter::All, false);
        assert!(!staff_grid.admin_controls);
        assert!(!cell_at(&staff_grid, "09:00", 1).draggable);
    }

    #[test]
    fn test_other_dates_render_empty() {
        let grid = schedule_grid(&store(), "2026-03-15", CourtFilter::All, false);
        assert!(grid
            .rows
            .iter()
            .all(|r| r.cells.iter().all(|c| c.booking.is_none())));
    }
}
