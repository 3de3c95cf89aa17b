//! Client-side session state: who is signed in, the durable session id and
//! the reset hook run when the signed-in identity changes.

pub mod auth;
pub mod id;
pub mod scope;
pub mod store;

pub use auth::{AuthContext, AuthStatus, Identity};
pub use id::{SESSION_ID_KEY, generate_session_id, session_id};
pub use scope::{IdentityScope, Resettable};
pub use store::{FileStore, MemoryStore, SessionStore};
