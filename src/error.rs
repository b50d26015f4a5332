use thiserror::Error;

/// Why a login attempt was denied. The two kinds are surfaced separately so
/// the terminal can give distinct feedback before and after the directory
/// lookup; neither ever tears down the session machine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("PIN must be exactly 4 digits")]
    InvalidPinFormat,

    #[error("no operator matches the supplied PIN")]
    NoMatchingOperator,
}

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// A zero production target makes progress undefined. This is a defect in
    /// upstream job data and fails loudly rather than dividing by zero.
    #[error("job {job_id} has a zero production target")]
    InvalidJobTarget { job_id: String },

    #[error("Machine not found: {0}")]
    MachineNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_messages() {
        assert_eq!(
            AuthError::InvalidPinFormat.to_string(),
            "PIN must be exactly 4 digits"
        );
        assert_eq!(
            AuthError::NoMatchingOperator.to_string(),
            "no operator matches the supplied PIN"
        );
    }

    #[test]
    fn auth_error_converts_into_terminal_error() {
        let err: TerminalError = AuthError::NoMatchingOperator.into();
        assert!(matches!(
            err,
            TerminalError::Auth(AuthError::NoMatchingOperator)
        ));
    }

    #[test]
    fn invalid_target_names_the_job() {
        let err = TerminalError::InvalidJobTarget {
            job_id: "JOB-1-a".into(),
        };
        assert_eq!(err.to_string(), "job JOB-1-a has a zero production target");
    }
}
