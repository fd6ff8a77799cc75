//! Action handlers over the booking store.
//!
//! Every mutating handler validates before it touches the store and
//! appends exactly one audit entry to the affected booking. Rejections
//! leave the store as it was. Results carry `success_message` strings for
//! the notice banner.

use log::{info, warn};
use rand::Rng;
use shared::{
    add_minutes, duration_label, parse_minutes, today_iso, ActivityLogEntry, Booking,
    BookingStatus, PaymentMethod, PaymentStatus,
};

use crate::domain::commands::bookings::{
    CheckInResult, CreateBookingCommand, CreateBookingResult, DeleteResult, MoveCommand,
    MoveOutcome, MovePlan, PlannedMove, RescheduleCommand, RescheduleResult,
};
use crate::domain::errors::DomainError;
use crate::domain::models::Session;
use crate::domain::store::BookingStore;

/// Owns the booking store and applies the role-gated actions to it.
pub struct BookingService {
    store: BookingStore,
}

impl BookingService {
    /// A service seeded with the fixed mock dataset, dated today.
    pub fn new() -> Self {
        Self::with_bookings(crate::domain::seed::seed_bookings(&today_iso()))
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            store: BookingStore::new(bookings),
        }
    }

    /// Read access for the view projections.
    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn bookings(&self) -> &[Booking] {
        self.store.bookings()
    }

    /// Snapshot of one booking, for the detail modal.
    pub fn get(&self, id: &str) -> Option<Booking> {
        self.store.find_by_id(id).cloned()
    }

    /// Unauthenticated lookup by verification code, exact match.
    pub fn find_by_code(&self, code: &str) -> Result<Booking, DomainError> {
        self.store
            .find_by_code(code)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("code {}", code)))
    }

    /// Transition a booking to checked-in. Permitted for any role; the
    /// detail modal hides the button once the booking is checked in, so the
    /// store itself does not guard against re-invocation.
    pub fn check_in(&mut self, id: &str, session: &Session) -> Result<CheckInResult, DomainError> {
        let action = format!("Customer checked in by {}", session.name);
        let booking = self.store.update(id, &now_label(), &action, |b| {
            b.booking_status = BookingStatus::CheckedIn;
        })?;
        info!("Checked in {} ({})", booking.id, booking.customer);
        Ok(CheckInResult {
            booking,
            success_message: "Customer checked in!".to_string(),
        })
    }

    /// Create a new booking with defaults: price 50, unpaid, payment method
    /// undecided, status pending.
    pub fn create_booking(
        &mut self,
        command: CreateBookingCommand,
        session: &Session,
    ) -> Result<CreateBookingResult, DomainError> {
        session.require_admin("add bookings")?;
        if command.customer_name.trim().is_empty() || command.phone.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        validate_slot_times(&command.date, &command.start_time, &command.end_time)?;
        let duration = duration_label(&command.start_time, &command.end_time)
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        // Sequence-based id and a random 4-digit code: neither survives
        // deletions or large stores without collisions.
        let id = Booking::generate_id(self.store.len());
        let code = generate_booking_code();

        let booking = Booking {
            id: id.clone(),
            customer: command.customer_name.trim().to_string(),
            phone: command.phone.trim().to_string(),
            court: command.court,
            date: command.date,
            start_time: command.start_time,
            end_time: command.end_time,
            duration,
            price: 50.0,
            payment_status: PaymentStatus::Unpaid,
            payment_method: PaymentMethod::Pending,
            booking_status: BookingStatus::Pending,
            notes: String::new(),
            code: code.clone(),
            staff: session.name.clone(),
            activity_log: vec![ActivityLogEntry::new(
                now_label(),
                format!("Booking created by {}", session.name),
            )],
        };
        self.store.insert(booking.clone())?;
        info!("Created booking {} for {}", id, booking.customer);
        Ok(CreateBookingResult {
            booking,
            success_message: format!(
                "Booking created successfully! Verification code: {}",
                code
            ),
        })
    }

    /// Move a booking to a new court/date/time span, recomputing its
    /// duration label. Deliberately does not check slot conflicts; the
    /// drag-move path is the only one that does.
    pub fn reschedule(
        &mut self,
        command: RescheduleCommand,
        session: &Session,
    ) -> Result<RescheduleResult, DomainError> {
        session.require_admin("reschedule bookings")?;
        validate_slot_times(&command.date, &command.start_time, &command.end_time)?;
        let duration = duration_label(&command.start_time, &command.end_time)
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let action = format!("Booking rescheduled by {}", session.name);
        let booking = self.store.update(&command.booking_id, &now_label(), &action, |b| {
            b.court = command.court;
            b.date = command.date.clone();
            b.start_time = command.start_time.clone();
            b.end_time = command.end_time.clone();
            b.duration = duration.clone();
        })?;
        info!("Rescheduled booking {}", booking.id);
        Ok(RescheduleResult {
            booking,
            success_message: "Booking rescheduled successfully!".to_string(),
        })
    }

    /// Remove a booking entirely. The frontend asks for confirmation
    /// before calling this and closes any modal showing the record.
    pub fn delete_booking(
        &mut self,
        id: &str,
        session: &Session,
    ) -> Result<DeleteResult, DomainError> {
        session.require_admin("delete bookings")?;
        let booking = self.store.delete(id)?;
        warn!("Deleted booking {} ({})", booking.id, booking.customer);
        Ok(DeleteResult {
            booking,
            success_message: "Booking deleted successfully".to_string(),
        })
    }

    /// Validate a drag-move without committing it. The returned plan feeds
    /// the confirmation dialog; declining simply drops it.
    pub fn plan_move(
        &self,
        command: &MoveCommand,
        session: &Session,
    ) -> Result<MovePlan, DomainError> {
        session.require_admin("move bookings")?;
        let booking = self
            .store
            .find_by_id(&command.booking_id)
            .ok_or_else(|| DomainError::NotFound(command.booking_id.clone()))?;

        if booking.court == command.new_court && booking.start_time == command.new_time {
            return Ok(MovePlan::Unchanged);
        }
        self.ensure_slot_free(
            &command.booking_id,
            command.new_court,
            &booking.date,
            &command.new_time,
        )?;

        let minutes = slot_minutes(&booking.start_time, &booking.end_time)?;
        let new_end_time = add_minutes(&command.new_time, minutes)
            .map_err(|e| DomainError::Validation(e.to_string()))?;
        Ok(MovePlan::Move(PlannedMove {
            booking_id: booking.id.clone(),
            customer: booking.customer.clone(),
            new_court: command.new_court,
            new_time: command.new_time.clone(),
            new_end_time,
        }))
    }

    /// Commit a drag-move: preserve the duration, shift the end time, and
    /// record who moved it. A same-position target is a no-op with no
    /// audit entry.
    pub fn move_booking(
        &mut self,
        command: MoveCommand,
        session: &Session,
    ) -> Result<MoveOutcome, DomainError> {
        let plan = self.plan_move(&command, session)?;
        let MovePlan::Move(plan) = plan else {
            return Ok(MoveOutcome::Unchanged);
        };

        let action = format!(
            "Booking moved to Court {} at {} by {}",
            plan.new_court, plan.new_time, session.name
        );
        let booking = self.store.update(&plan.booking_id, &now_label(), &action, |b| {
            b.court = plan.new_court;
            b.start_time = plan.new_time.clone();
            b.end_time = plan.new_end_time.clone();
        })?;
        info!(
            "Moved booking {} to court {} at {}",
            booking.id, plan.new_court, plan.new_time
        );
        Ok(MoveOutcome::Moved {
            booking,
            success_message: format!(
                "Booking moved to Court {} at {}",
                plan.new_court, plan.new_time
            ),
        })
    }

    fn ensure_slot_free(
        &self,
        moving_id: &str,
        court: u32,
        date: &str,
        time: &str,
    ) -> Result<(), DomainError> {
        let occupied = self.store.bookings().iter().any(|b| {
            b.id != moving_id && b.court == court && b.date == date && b.start_time == time
        });
        if occupied {
            Err(DomainError::SlotConflict {
                court,
                time: time.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_slot_times(date: &str, start: &str, end: &str) -> Result<(), DomainError> {
    if date.trim().is_empty() || start.trim().is_empty() || end.trim().is_empty() {
        return Err(DomainError::Validation(
            "Please fill in all required fields".to_string(),
        ));
    }
    // "HH:MM" labels order lexicographically within a day.
    if start >= end {
        return Err(DomainError::Validation(
            "End time must be after start time".to_string(),
        ));
    }
    Ok(())
}

fn slot_minutes(start: &str, end: &str) -> Result<u32, DomainError> {
    let start = parse_minutes(start).map_err(|e| DomainError::Validation(e.to_string()))?;
    let end = parse_minutes(end).map_err(|e| DomainError::Validation(e.to_string()))?;
    Ok(end.saturating_sub(start))
}

/// Current wall-clock time as an "HH:MM" audit label.
fn now_label() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

fn generate_booking_code() -> String {
    rand::thread_rng().gen_range(1000..10000).to_string()
}
