//! # App State Module
//!
//! The central application state for the court tracker: the domain
//! services, the current session, the active page, per-view filter state,
//! and the modal/form state. Everything the UI needs lives on
//! `CourtTrackerApp`; there are no module-level singletons.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use shared::{Booking, CourtFilter};

use court_tracker_backend::domain::bookings::PlannedMove;
use court_tracker_backend::domain::{AuthService, BookingService, Session};

/// Pages reachable from the main navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Schedule,
    Bookings,
    Settings,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Dashboard,
        Page::Schedule,
        Page::Bookings,
        Page::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Schedule => "Schedule",
            Page::Bookings => "Bookings",
            Page::Settings => "Settings",
        }
    }
}

/// Form state for the shared add/reschedule booking modal.
#[derive(Debug, Clone)]
pub struct BookingFormState {
    pub visible: bool,
    /// `Some(id)` when rescheduling an existing booking; `None` when adding.
    pub editing_id: Option<String>,
    pub customer_name: String,
    pub phone: String,
    pub court: u32,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    /// Validation error shown inside the modal
    pub error: Option<String>,
}

impl BookingFormState {
    pub fn hidden(today: NaiveDate) -> Self {
        Self {
            visible: false,
            editing_id: None,
            customer_name: String::new(),
            phone: String::new(),
            court: 1,
            date: today,
            start_time: String::new(),
            end_time: String::new(),
            error: None,
        }
    }

    /// Blank form for a brand-new booking.
    pub fn open_add(&mut self, today: NaiveDate) {
        *self = Self::hidden(today);
        self.visible = true;
    }

    /// Prefilled form for rescheduling. Customer name and phone stay
    /// hidden and immutable.
    pub fn open_reschedule(&mut self, booking: &Booking) {
        self.visible = true;
        self.editing_id = Some(booking.id.clone());
        self.customer_name.clear();
        self.phone.clear();
        self.court = booking.court;
        self.date = NaiveDate::parse_from_str(&booking.date, "%Y-%m-%d")
            .unwrap_or_else(|_| chrono::Local::now().date_naive());
        self.start_time = booking.start_time.clone();
        self.end_time = booking.end_time.clone();
        self.error = None;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.editing_id = None;
        self.error = None;
    }
}

/// Modal visibility and pending-confirmation state.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// Booking shown in the read-only detail modal
    pub selected_booking: Option<String>,
    /// Booking awaiting delete confirmation
    pub confirm_delete: Option<String>,
    /// Validated drag-move awaiting confirmation
    pub pending_move: Option<PlannedMove>,
}

impl ModalState {
    pub fn hide_all(&mut self) {
        self.selected_booking = None;
        self.confirm_delete = None;
        self.pending_move = None;
    }
}

/// Main application struct for the egui court tracker.
pub struct CourtTrackerApp {
    pub auth: AuthService,
    pub bookings: BookingService,

    /// Current session; `None` renders the login page
    pub session: Option<Session>,
    pub current_page: Page,

    // Login form
    pub login_email: String,
    pub login_password: String,

    // Notice banners
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Schedule view state
    pub schedule_date: NaiveDate,
    pub court_filter: CourtFilter,
    pub code_lookup: String,

    // Bookings view state
    pub booking_search: String,
    /// Present to mirror the list controls; the listing itself filters by
    /// search only.
    pub booking_date_filter: NaiveDate,

    pub modals: ModalState,
    pub booking_form: BookingFormState,
}

impl CourtTrackerApp {
    pub fn new() -> Result<Self> {
        info!("Initializing Court Tracker app");
        let today = chrono::Local::now().date_naive();
        Ok(Self {
            auth: AuthService::new(),
            bookings: BookingService::new(),
            session: None,
            current_page: Page::Dashboard,
            login_email: String::new(),
            login_password: String::new(),
            error_message: None,
            success_message: None,
            schedule_date: today,
            court_filter: CourtFilter::All,
            code_lookup: String::new(),
            booking_search: String::new(),
            booking_date_filter: today,
            modals: ModalState::default(),
            booking_form: BookingFormState::hidden(today),
        })
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.role.is_admin())
            .unwrap_or(false)
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
        self.clear_messages();
    }

    /// Drop the session and return to the login screen.
    pub fn logout(&mut self) {
        info!("Logging out");
        self.session = None;
        self.current_page = Page::Dashboard;
        self.modals.hide_all();
        self.booking_form.close();
        self.clear_messages();
        self.login_password.clear();
    }

    /// Open the read-only detail modal for a booking.
    pub fn open_booking_modal(&mut self, id: impl Into<String>) {
        self.modals.selected_booking = Some(id.into());
    }
}
