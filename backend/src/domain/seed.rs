//! The fixed dataset the booking store starts from.

use shared::{ActivityLogEntry, Booking, BookingStatus, PaymentMethod, PaymentStatus};

/// The four seeded bookings, dated `date` so the dashboard and schedule
/// have something to show on first launch.
pub fn seed_bookings(date: &str) -> Vec<Booking> {
    vec![
        Booking {
            id: "BK001".to_string(),
            customer: "John Doe".to_string(),
            phone: "+1-555-0101".to_string(),
            court: 1,
            date: date.to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            duration: "1 hour".to_string(),
            price: 50.0,
            payment_status: PaymentStatus::Paid,
            payment_method: PaymentMethod::Card,
            booking_status: BookingStatus::Confirmed,
            notes: "Regular customer".to_string(),
            code: "1234".to_string(),
            staff: "Admin User".to_string(),
            activity_log: vec![
                ActivityLogEntry::new("08:30", "Booking created"),
                ActivityLogEntry::new("08:45", "Payment confirmed"),
            ],
        },
        Booking {
            id: "BK002".to_string(),
            customer: "Jane Smith".to_string(),
            phone: "+1-555-0102".to_string(),
            court: 2,
            date: date.to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            duration: "1 hour".to_string(),
            price: 50.0,
            payment_status: PaymentStatus::Unpaid,
            payment_method: PaymentMethod::Cash,
            booking_status: BookingStatus::Pending,
            notes: String::new(),
            code: "2345".to_string(),
            staff: "Staff User".to_string(),
            activity_log: vec![ActivityLogEntry::new("09:00", "Booking created")],
        },
        Booking {
            id: "BK003".to_string(),
            customer: "Mike Johnson".to_string(),
            phone: "+1-555-0103".to_string(),
            court: 1,
            date: date.to_string(),
            start_time: "14:00".to_string(),
            end_time: "15:30".to_string(),
            duration: "1.5 hours".to_string(),
            price: 75.0,
            payment_status: PaymentStatus::Paid,
            payment_method: PaymentMethod::Online,
            booking_status: BookingStatus::CheckedIn,
            notes: "Requested better lighting".to_string(),
            code: "3456".to_string(),
            staff: "Admin User".to_string(),
            activity_log: vec![
                ActivityLogEntry::new("13:30", "Booking created"),
                ActivityLogEntry::new("13:35", "Payment confirmed"),
                ActivityLogEntry::new("13:55", "Customer checked in"),
            ],
        },
        Booking {
            id: "BK004".to_string(),
            customer: "Sarah Williams".to_string(),
            phone: "+1-555-0104".to_string(),
            court: 3,
            date: date.to_string(),
            start_time: "16:00".to_string(),
            end_time: "17:00".to_string(),
            duration: "1 hour".to_string(),
            price: 50.0,
            payment_status: PaymentStatus::Unpaid,
            payment_method: PaymentMethod::Cash,
            booking_status: BookingStatus::Confirmed,
            notes: String::new(),
            code: "4567".to_string(),
            staff: "Staff User".to_string(),
            activity_log: vec![
                ActivityLogEntry::new("15:00", "Booking created"),
                ActivityLogEntry::new("15:30", "Booking confirmed"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_is_dated_and_unique() {
        let bookings = seed_bookings("2026-03-14");
        assert_eq!(bookings.len(), 4);
        assert!(bookings.iter().all(|b| b.date == "2026-03-14"));

        let ids: HashSet<_> = bookings.iter().map(|b| b.id.as_str()).collect();
        let codes: HashSet<_> = bookings.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_seed_slots_do_not_collide() {
        let bookings = seed_bookings("2026-03-14");
        let slots: HashSet<_> = bookings
            .iter()
            .map(|b| (b.court, b.start_time.as_str()))
            .collect();
        assert_eq!(slots.len(), 4);
    }
}
