// src/session.rs
//
// Anonymous visitor sessions. The site has no accounts; the session
// cookie exists only to scope persisted view state (view mode, current
// page) to one browser for the duration of a visit. The raw token lives
// in the cookie; the database only ever sees its SHA-256 hash.

use astra::Request;
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

pub const COOKIE_NAME: &str = "sid";
const TOKEN_BYTES: usize = 32;

/// The resolved session for one request.
pub struct Session {
    /// SHA-256 of the raw token; the view_state rows key off this.
    pub hash: [u8; 32],
    /// Set-Cookie value to attach when the visitor had no session yet.
    pub set_cookie: Option<String>,
}

/// Reads the session cookie from the request, minting a fresh token when
/// none is present.
pub fn establish(req: &Request) -> Session {
    if let Some(token) = cookie_value(req, COOKIE_NAME) {
        return Session {
            hash: hash_token(&token),
            set_cookie: None,
        };
    }

    let token = generate_token(&mut OsRng, TOKEN_BYTES);
    Session {
        hash: hash_token(&token),
        set_cookie: Some(format!("{COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax")),
    }
}

/// Generate a URL-safe token from random bytes.
/// Base64 URL-safe, no padding; 32 bytes -> ~43 char token.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// Hash a token using SHA-256. Store this output in the DB, never the token.
pub fn hash_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

fn cookie_value(req: &Request, name: &str) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    for pair in header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if parts.next() == Some(name) {
            let value = parts.next()?.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
