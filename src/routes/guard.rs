use crate::session::AuthContext;

/// Where guards send visitors they turn away
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(String),
}

pub type Guard = fn(&AuthContext) -> GuardOutcome;

/// Redirect home once auth has loaded and nobody is signed in.
/// While auth is loading the page is allowed through.
pub fn require_login(ctx: &AuthContext) -> GuardOutcome {
    if ctx.is_loading() || ctx.is_logged_in() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(HOME_PATH.to_string())
    }
}

/// Require admin role
pub fn require_admin(ctx: &AuthContext) -> GuardOutcome {
    if ctx.is_loading() || ctx.is_admin() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(HOME_PATH.to_string())
    }
}
