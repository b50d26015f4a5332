//! Prefix-tagged identifier generation.
//!
//! Identifiers have the shape `<PREFIX>-<epoch millis>-<base36 suffix>`.
//! Uniqueness is probabilistic: two calls in the same millisecond differ only
//! in the random suffix. There is no shared mutable state, so generation is
//! safe from concurrent call sites.

use chrono::Utc;
use rand::Rng;

// Random suffix window: 9 base36 digits, not left-padded, so short suffixes
// are possible for small draws.
const SUFFIX_WINDOW: u64 = 36u64.pow(9);

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = [0u8; 13];
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = BASE36[(n % 36) as usize];
        n /= 36;
    }
    String::from_utf8_lossy(&buf[i..]).into_owned()
}

/// Generate an identifier for the given prefix.
///
/// Any prefix is accepted, including the empty string (which yields a
/// leading-dash identifier).
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = base36(rand::rng().random::<u64>() % SUFFIX_WINDOW);
    format!("{prefix}-{millis}-{suffix}")
}

pub fn generate_job_id() -> String {
    generate_id("JOB")
}

pub fn generate_project_id() -> String {
    generate_id("PRJ")
}

pub fn generate_event_id() -> String {
    generate_id("EV")
}

pub fn generate_alert_id() -> String {
    generate_id("ALERT")
}

pub fn generate_message_id() -> String {
    generate_id("MSG")
}
