use crate::session::auth::AuthContext;

/// State that must start over when a different user signs in or out
pub trait Resettable {
    fn reset(&mut self);
}

/// Owns per-user state and resets it when the signed-in identity changes.
///
/// Observations made while auth is still loading are ignored.
#[derive(Debug)]
pub struct IdentityScope<S> {
    state: S,
    key: Option<String>,
}

impl<S: Resettable> IdentityScope<S> {
    pub fn new(state: S, ctx: &AuthContext) -> Self {
        Self {
            state,
            key: ctx.identity_key().map(str::to_string),
        }
    }

    /// Returns true when the state was reset
    pub fn observe(&mut self, ctx: &AuthContext) -> bool {
        if ctx.is_loading() {
            return false;
        }

        let key = ctx.identity_key();
        if key == self.key.as_deref() {
            return false;
        }

        tracing::info!(from = ?self.key, to = ?key, "Identity changed, resetting state");
        self.key = key.map(str::to_string);
        self.state.reset();
        true
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}
