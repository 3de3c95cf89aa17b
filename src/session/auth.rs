use crate::entities::user::UserRole;
use crate::utils::jwt::{decode_claims, Claims};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
    pub role: UserRole,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// Auth state not resolved yet
    Loading,
    Authenticated(Identity),
    Unauthenticated,
}

/// Auth state handed to guards and page state explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub status: AuthStatus,
}

impl AuthContext {
    pub fn loading() -> Self {
        Self {
            status: AuthStatus::Loading,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            status: AuthStatus::Unauthenticated,
        }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            status: AuthStatus::Authenticated(identity),
        }
    }

    /// Resolve from the bearer token; an invalid or expired token counts as
    /// signed out.
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Self::unauthenticated();
        };

        match decode_claims(token) {
            Ok(claims) => Self::authenticated(claims.into()),
            Err(e) => {
                tracing::debug!("Ignoring bearer token: {}", e);
                Self::unauthenticated()
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, AuthStatus::Loading)
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.status, AuthStatus::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.status {
            AuthStatus::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.identity().is_some_and(|i| i.role == UserRole::Admin)
    }

    /// Key that changes whenever a different user (or nobody) is signed in
    pub fn identity_key(&self) -> Option<&str> {
        self.identity().map(|i| i.user_id.as_str())
    }
}
