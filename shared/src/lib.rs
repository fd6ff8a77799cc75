use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single reserved time slot on a court for a customer.
///
/// Bookings are held in an in-memory store and mutated in place; the
/// `activity_log` is append-only and records every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking ID in format "BK" + zero-padded sequence number (e.g. "BK001")
    pub id: String,
    /// Customer display name
    pub customer: String,
    /// Customer phone number
    pub phone: String,
    /// Court number (the facility has courts 1-3)
    pub court: u32,
    /// Booking date (ISO 8601, YYYY-MM-DD)
    pub date: String,
    /// Start of the slot, 24-hour "HH:MM"
    pub start_time: String,
    /// End of the slot, 24-hour "HH:MM"; always after `start_time`
    pub end_time: String,
    /// Display label derived from start/end ("1 hour", "1.5 hours")
    pub duration: String,
    /// Booking price in the facility's currency
    pub price: f64,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub booking_status: BookingStatus,
    /// Free-text notes entered by staff
    pub notes: String,
    /// 4-digit verification code for unauthenticated lookup
    pub code: String,
    /// Display name of the staff member who created the booking
    pub staff: String,
    /// Append-only audit trail; entries are never edited or removed
    pub activity_log: Vec<ActivityLogEntry>,
}

/// One entry in a booking's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    /// Wall-clock time of the action, 24-hour "HH:MM"
    pub time: String,
    /// What happened, e.g. "Booking created by Admin User"
    pub action: String,
}

impl ActivityLogEntry {
    pub fn new(time: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            action: action.into(),
        }
    }
}

/// Lifecycle state of a booking.
///
/// Only `checked-in` is reachable through an action handler; `confirmed`
/// and `completed` appear in seeded data but have no transition of their
/// own in this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    Completed,
}

impl BookingStatus {
    /// Badge text shown next to a booking in lists and the schedule grid.
    pub fn badge_label(&self) -> &'static str {
        match self {
            BookingStatus::CheckedIn => "Checked In",
            BookingStatus::Completed => "Completed",
            BookingStatus::Pending | BookingStatus::Confirmed => "Not Yet",
        }
    }
}

/// Whether a booking has been paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

/// How a booking was (or will be) paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
    Online,
    /// Not decided yet; the default for newly created bookings
    Pending,
}

impl Booking {
    /// Generate the next booking ID from the current store length.
    ///
    /// Sequence-based: deleting a booking frees its number for reuse, so
    /// ids are only unique while no deletions have occurred.
    pub fn generate_id(store_len: usize) -> String {
        format!("BK{:03}", store_len + 1)
    }
}

/// Errors from parsing 24-hour "HH:MM" time labels.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeParseError {
    InvalidFormat(String),
    InvalidHour(String),
    InvalidMinute(String),
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeParseError::InvalidFormat(t) => write!(f, "Invalid time format: {}", t),
            TimeParseError::InvalidHour(t) => write!(f, "Invalid hour in time: {}", t),
            TimeParseError::InvalidMinute(t) => write!(f, "Invalid minute in time: {}", t),
        }
    }
}

impl std::error::Error for TimeParseError {}

/// Minutes since midnight for a 24-hour "HH:MM" label.
pub fn parse_minutes(time: &str) -> Result<u32, TimeParseError> {
    let (hour, minute) = time
        .split_once(':')
        .ok_or_else(|| TimeParseError::InvalidFormat(time.to_string()))?;
    let hour: u32 = hour
        .parse()
        .map_err(|_| TimeParseError::InvalidHour(time.to_string()))?;
    let minute: u32 = minute
        .parse()
        .map_err(|_| TimeParseError::InvalidMinute(time.to_string()))?;
    if hour > 23 {
        return Err(TimeParseError::InvalidHour(time.to_string()));
    }
    if minute > 59 {
        return Err(TimeParseError::InvalidMinute(time.to_string()));
    }
    Ok(hour * 60 + minute)
}

/// "HH:MM" label for minutes since midnight; wraps past midnight.
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes % (24 * 60);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Shift an "HH:MM" label forward by a number of minutes.
pub fn add_minutes(time: &str, minutes: u32) -> Result<String, TimeParseError> {
    Ok(format_minutes(parse_minutes(time)? + minutes))
}

/// Display label for the span between two "HH:MM" labels, e.g. "1 hour",
/// "1.5 hours". `start` must be before `end`.
pub fn duration_label(start: &str, end: &str) -> Result<String, TimeParseError> {
    let start = parse_minutes(start)?;
    let end = parse_minutes(end)?;
    let hours = end.saturating_sub(start) as f64 / 60.0;
    if hours == 1.0 {
        Ok("1 hour".to_string())
    } else {
        Ok(format!("{} hours", hours))
    }
}

/// Today's date as an ISO 8601 string (local time).
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Long-form label for an ISO date, e.g. "Wednesday, August 6, 2026".
/// Falls back to the raw string when it does not parse.
pub fn format_date_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Court selection for the schedule view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourtFilter {
    All,
    Only(u32),
}

impl CourtFilter {
    pub fn label(&self) -> String {
        match self {
            CourtFilter::All => "All Courts".to_string(),
            CourtFilter::Only(court) => format!("Court {}", court),
        }
    }
}

/// Display model for the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Long-form label for today's date
    pub date_label: String,
    /// Today's bookings starting within the next 30 minutes that are not
    /// yet checked in or completed
    pub starting_soon: Vec<Booking>,
    /// Today's non-completed bookings, ascending by start time
    pub upcoming: Vec<Booking>,
    /// Today's completed bookings, ascending by start time
    pub completed: Vec<Booking>,
}

/// Display model for the schedule page: hourly slots crossed with the
/// selected court set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    /// The date the grid was built for (ISO 8601)
    pub date: String,
    /// Courts shown, left to right
    pub courts: Vec<u32>,
    /// One row per hourly slot, 06:00 through 23:00
    pub rows: Vec<ScheduleRow>,
    /// Whether drag-and-drop editing is offered (admin sessions only)
    pub admin_controls: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Slot label, "HH:00"
    pub time: String,
    pub cells: Vec<ScheduleCell>,
}

/// One grid cell. A booking appears only in the cell matching its starting
/// slot, even when its duration spans several slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCell {
    pub court: u32,
    pub time: String,
    pub booking: Option<Booking>,
    /// True when the cell's booking can be drag-moved (admin sessions)
    pub draggable: bool,
}

/// Display model for the bookings list page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingTableView {
    /// Matching bookings, ascending by start time
    pub bookings: Vec<Booking>,
    /// Whether reschedule/delete affordances are shown per row
    pub admin_actions: bool,
}

/// Read-only projection of the current session for the settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsView {
    pub name: String,
    pub email: String,
    pub role_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_pads_to_three_digits() {
        assert_eq!(Booking::generate_id(0), "BK001");
        assert_eq!(Booking::generate_id(4), "BK005");
        assert_eq!(Booking::generate_id(99), "BK100");
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("00:00").unwrap(), 0);
        assert_eq!(parse_minutes("09:30").unwrap(), 570);
        assert_eq!(parse_minutes("23:00").unwrap(), 1380);

        assert!(parse_minutes("9am").is_err());
        assert!(parse_minutes("24:00").is_err());
        assert!(parse_minutes("12:60").is_err());
        assert!(parse_minutes("").is_err());
    }

    #[test]
    fn test_format_minutes_wraps_past_midnight() {
        assert_eq!(format_minutes(570), "09:30");
        assert_eq!(format_minutes(24 * 60 + 30), "00:30");
    }

    #[test]
    fn test_add_minutes() {
        assert_eq!(add_minutes("09:00", 60).unwrap(), "10:00");
        assert_eq!(add_minutes("09:00", 90).unwrap(), "10:30");
        assert_eq!(add_minutes("23:30", 60).unwrap(), "00:30");
    }

    #[test]
    fn test_duration_label() {
        assert_eq!(duration_label("09:00", "10:00").unwrap(), "1 hour");
        assert_eq!(duration_label("09:00", "10:30").unwrap(), "1.5 hours");
        assert_eq!(duration_label("14:00", "16:00").unwrap(), "2 hours");
        assert_eq!(duration_label("14:00", "14:30").unwrap(), "0.5 hours");
    }

    #[test]
    fn test_format_date_label() {
        assert_eq!(format_date_label("2026-08-06"), "Thursday, August 6, 2026");
        // Unparseable input passes through untouched
        assert_eq!(format_date_label("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_status_badge_labels() {
        assert_eq!(BookingStatus::Pending.badge_label(), "Not Yet");
        assert_eq!(BookingStatus::Confirmed.badge_label(), "Not Yet");
        assert_eq!(BookingStatus::CheckedIn.badge_label(), "Checked In");
        assert_eq!(BookingStatus::Completed.badge_label(), "Completed");
    }

    #[test]
    fn test_status_wire_spellings() {
        // The enumerations keep the original kebab/lowercase spellings on
        // the wire.
        assert_eq!(
            serde_json::to_string(&BookingStatus::CheckedIn).unwrap(),
            "\"checked-in\""
        );
        assert_eq!(
            serde_json::to_string(&BookingStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Unpaid).unwrap(),
            "\"unpaid\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Online).unwrap(),
            "\"online\""
        );
    }

    #[test]
    fn test_court_filter_labels() {
        assert_eq!(CourtFilter::All.label(), "All Courts");
        assert_eq!(CourtFilter::Only(2).label(), "Court 2");
    }
}
