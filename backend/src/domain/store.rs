//! The in-memory booking collection.

use crate::domain::errors::DomainError;
use shared::{ActivityLogEntry, Booking};

/// Ordered, process-wide collection of bookings.
///
/// All access is synchronous and single-threaded; the store is owned by
/// `BookingService` and lives for the process lifetime. There is no
/// persistence layer behind it.
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Public lookup by verification code; deliberately has no role check.
    pub fn find_by_code(&self, code: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.code == code)
    }

    pub fn filter_by_date(&self, date: &str) -> Vec<&Booking> {
        self.bookings.iter().filter(|b| b.date == date).collect()
    }

    /// Case-insensitive substring match on customer name or booking id.
    /// An empty term matches everything.
    pub fn filter_by_search(&self, term: &str) -> Vec<&Booking> {
        let term = term.trim().to_lowercase();
        self.bookings
            .iter()
            .filter(|b| {
                term.is_empty()
                    || b.customer.to_lowercase().contains(&term)
                    || b.id.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn insert(&mut self, booking: Booking) -> Result<(), DomainError> {
        if self.find_by_id(&booking.id).is_some() {
            return Err(DomainError::DuplicateId(booking.id));
        }
        self.bookings.push(booking);
        Ok(())
    }

    /// Apply `mutator` to the booking, then append exactly one audit entry
    /// stamped `log_time` ("HH:MM"). Returns a snapshot of the updated
    /// record.
    pub fn update(
        &mut self,
        id: &str,
        log_time: &str,
        action: &str,
        mutator: impl FnOnce(&mut Booking),
    ) -> Result<Booking, DomainError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        mutator(booking);
        booking
            .activity_log
            .push(ActivityLogEntry::new(log_time, action));
        Ok(booking.clone())
    }

    /// Remove the booking entirely. No tombstone is kept.
    pub fn delete(&mut self, id: &str) -> Result<Booking, DomainError> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        Ok(self.bookings.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_bookings;

    fn store() -> BookingStore {
        BookingStore::new(seed_bookings("2026-03-14"))
    }

    #[test]
    fn test_find_by_id_and_code() {
        let store = store();
        assert_eq!(store.find_by_id("BK003").unwrap().customer, "Mike Johnson");
        assert!(store.find_by_id("BK999").is_none());
        assert_eq!(store.find_by_code("2345").unwrap().id, "BK002");
        assert!(store.find_by_code("0000").is_none());
    }

    #[test]
    fn test_filter_by_date() {
        let store = store();
        assert_eq!(store.filter_by_date("2026-03-14").len(), 4);
        assert!(store.filter_by_date("2026-03-15").is_empty());
    }

    #[test]
    fn test_filter_by_search_is_case_insensitive() {
        let store = store();
        let by_name = store.filter_by_search("jane");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "BK002");

        let by_id = store.filter_by_search("bk00");
        assert_eq!(by_id.len(), 4);

        assert_eq!(store.filter_by_search("").len(), 4);
        assert!(store.filter_by_search("nobody").is_empty());
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = store();
        let duplicate = store.find_by_id("BK001").unwrap().clone();
        let err = store.insert(duplicate).unwrap_err();
        assert_eq!(err, DomainError::DuplicateId("BK001".to_string()));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_update_mutates_and_appends_one_entry() {
        let mut store = store();
        let before = store.find_by_id("BK002").unwrap().activity_log.len();

        let updated = store
            .update("BK002", "10:15", "Court changed", |b| b.court = 3)
            .unwrap();

        assert_eq!(updated.court, 3);
        assert_eq!(updated.activity_log.len(), before + 1);
        let entry = updated.activity_log.last().unwrap();
        assert_eq!(entry.time, "10:15");
        assert_eq!(entry.action, "Court changed");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = store();
        let err = store
            .update("BK999", "10:15", "noop", |_| {})
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound("BK999".to_string()));
    }

    #[test]
    fn test_delete_removes_record() {
        let mut store = store();
        let deleted = store.delete("BK004").unwrap();
        assert_eq!(deleted.customer, "Sarah Williams");
        assert_eq!(store.len(), 3);
        assert!(store.find_by_id("BK004").is_none());

        assert_eq!(
            store.delete("BK004").unwrap_err(),
            DomainError::NotFound("BK004".to_string())
        );
    }
}
