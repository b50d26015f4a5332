/// Length of an operator PIN, in digits.
pub const PIN_LENGTH: usize = 4;

/// Shape-only check for a PIN candidate: exactly four ASCII decimal digits.
///
/// This validates format, not correctness; matching against a real operator
/// record is the directory lookup's job. Keeping the two apart lets the
/// terminal short-circuit feedback (e.g. disable submit) before any lookup.
pub fn validate_pin_format(candidate: &str) -> bool {
    candidate.len() == PIN_LENGTH && candidate.bytes().all(|b| b.is_ascii_digit())
}
