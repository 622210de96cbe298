//! Opaque token generation for sessions.

use rand::rngs::OsRng;
use rand::RngCore;

/// Byte length of a session id before hex encoding.
const SESSION_ID_LEN: usize = 16;

/// Byte length of a refresh token before hex encoding.
const REFRESH_TOKEN_LEN: usize = 32;

/// Generates a fresh random session id (32 hex characters).
pub fn session_id() -> String {
    random_hex(SESSION_ID_LEN)
}

/// Generates a fresh random refresh token (64 hex characters).
pub fn refresh_token() -> String {
    random_hex(REFRESH_TOKEN_LEN)
}

fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
