//! Client-side route table.
//!
//! Pages are a tagged enum; the table binds each path to an optional guard
//! that is evaluated before the page is produced.

pub mod guard;

use reqwest::Url;

use crate::session::AuthContext;

pub use guard::{Guard, GuardOutcome, HOME_PATH, require_admin, require_login};

/// Placeholder origin used to parse and build relative paths
const APP_ORIGIN: &str = "http://app.local";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminTab {
    Dashboard,
    Operators,
    Buses,
    Routes,
    Trips,
    Analytics,
}

impl AdminTab {
    /// Tabs in display order
    pub const ALL: [AdminTab; 6] = [
        AdminTab::Dashboard,
        AdminTab::Operators,
        AdminTab::Buses,
        AdminTab::Routes,
        AdminTab::Trips,
        AdminTab::Analytics,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "/admin",
            AdminTab::Operators => "/admin/operators",
            AdminTab::Buses => "/admin/buses",
            AdminTab::Routes => "/admin/routes",
            AdminTab::Trips => "/admin/trips",
            AdminTab::Analytics => "/admin/analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Operators => "Operators",
            AdminTab::Buses => "Buses",
            AdminTab::Routes => "Routes",
            AdminTab::Trips => "Trips",
            AdminTab::Analytics => "Analytics",
        }
    }

    fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.path() == path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Tickets,
    BookingConfirmation,
    BookingPayment { ticket_id: String },
    PaymentSuccess { ticket_id: String },
    Profile,
    ResetPassword,
    VerifyEmail,
    Admin(AdminTab),
}

impl Page {
    /// Path without query string
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Tickets => "/tickets",
            Page::BookingConfirmation => "/booking/confirmation",
            Page::BookingPayment { .. } => "/booking/payment",
            Page::PaymentSuccess { .. } => "/payment/success",
            Page::Profile => "/profile",
            Page::ResetPassword => "/reset-password",
            Page::VerifyEmail => "/verify-email",
            Page::Admin(tab) => tab.path(),
        }
    }

    fn ticket_id(&self) -> Option<&str> {
        match self {
            Page::BookingPayment { ticket_id } | Page::PaymentSuccess { ticket_id } => {
                Some(ticket_id)
            }
            _ => None,
        }
    }

    /// Path plus query, e.g. `/payment/success?ticketId=t1`
    pub fn href(&self) -> String {
        let Some(ticket_id) = self.ticket_id() else {
            return self.path().to_string();
        };

        match app_url(self.path()) {
            Some(mut url) => {
                url.query_pairs_mut().append_pair("ticketId", ticket_id);
                format!("{}?{}", url.path(), url.query().unwrap_or_default())
            }
            None => format!("{}?ticketId={}", self.path(), ticket_id),
        }
    }

    /// Parse a path with optional query. Payment pages need a `ticketId`.
    pub fn parse(path_and_query: &str) -> Option<Page> {
        let url = app_url(path_and_query)?;
        let path = match url.path().trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        let ticket_id = || {
            url.query_pairs()
                .find(|(key, _)| key == "ticketId")
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        };

        let page = match path {
            "/" => Page::Home,
            "/tickets" => Page::Tickets,
            "/booking/confirmation" => Page::BookingConfirmation,
            "/booking/payment" => Page::BookingPayment {
                ticket_id: ticket_id()?,
            },
            "/payment/success" => Page::PaymentSuccess {
                ticket_id: ticket_id()?,
            },
            "/profile" => Page::Profile,
            "/reset-password" => Page::ResetPassword,
            "/verify-email" => Page::VerifyEmail,
            other => Page::Admin(AdminTab::from_path(other)?),
        };
        Some(page)
    }
}

fn app_url(path: &str) -> Option<Url> {
    Url::parse(APP_ORIGIN).ok()?.join(path).ok()
}

/// One row of the route table
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub path: &'static str,
    pub guard: Option<Guard>,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: "/", guard: None },
    RouteDef { path: "/tickets", guard: None },
    RouteDef { path: "/booking/confirmation", guard: None },
    RouteDef { path: "/booking/payment", guard: None },
    RouteDef { path: "/payment/success", guard: None },
    RouteDef { path: "/profile", guard: Some(require_login) },
    RouteDef { path: "/reset-password", guard: None },
    RouteDef { path: "/verify-email", guard: None },
    RouteDef { path: "/admin", guard: Some(require_admin) },
    RouteDef { path: "/admin/operators", guard: Some(require_admin) },
    RouteDef { path: "/admin/buses", guard: Some(require_admin) },
    RouteDef { path: "/admin/routes", guard: Some(require_admin) },
    RouteDef { path: "/admin/trips", guard: Some(require_admin) },
    RouteDef { path: "/admin/analytics", guard: Some(require_admin) },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(String),
    NotFound,
}

/// Match a path against the table and run its guard
pub fn resolve(path_and_query: &str, ctx: &AuthContext) -> Resolution {
    let Some(page) = Page::parse(path_and_query) else {
        return Resolution::NotFound;
    };

    let guard = ROUTES
        .iter()
        .find(|route| route.path == page.path())
        .and_then(|route| route.guard);

    match guard.map_or(GuardOutcome::Allow, |guard| guard(ctx)) {
        GuardOutcome::Allow => Resolution::Render(page),
        GuardOutcome::Redirect(to) => {
            tracing::debug!(from = page.path(), to = %to, "Route guard redirect");
            Resolution::Redirect(to)
        }
    }
}
