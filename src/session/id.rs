use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use uuid::Builder;

use crate::error::ApiResult;
use crate::session::store::SessionStore;

pub const SESSION_ID_KEY: &str = "sessionId";

/// Return the persisted session id, creating and storing one on first use.
/// The id never rotates on its own.
pub fn session_id(store: &dyn SessionStore) -> ApiResult<String> {
    if let Some(id) = store.get(SESSION_ID_KEY)?.filter(|id| !id.is_empty()) {
        return Ok(id);
    }

    let id = generate_session_id();
    store.set(SESSION_ID_KEY, &id)?;
    tracing::info!(session_id = %id, "Created new session id");
    Ok(id)
}

/// UUIDv4-formatted id from the OS generator, or from a time-seeded
/// generator when the OS source is unavailable. The fallback is not
/// guaranteed unique.
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; 16];
    if let Err(e) = OsRng.try_fill_bytes(&mut bytes) {
        tracing::warn!("OS random source unavailable, using seeded fallback: {}", e);
        bytes = fallback_bytes();
    }
    format_id(bytes)
}

fn fallback_bytes() -> [u8; 16] {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let mut bytes = [0u8; 16];
    StdRng::seed_from_u64(nanos ^ u64::from(std::process::id())).fill_bytes(&mut bytes);
    bytes
}

fn format_id(bytes: [u8; 16]) -> String {
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}
