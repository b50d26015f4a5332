use crate::error::AuthError;

use super::operator::{Operator, OperatorLookup};
use super::pin::validate_pin_format;

/// The two states of a terminal session.
///
/// A session is either fully unauthenticated or fully authenticated; the
/// enum leaves no room for a partial state, and the machine binding only
/// exists on the authenticated side. PIN lookup is synchronous with respect
/// to this machine, so no intermediate "authenticating" state is needed.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Unauthenticated,
    Authenticated {
        operator: Operator,
        machine_id: Option<String>,
    },
}

impl Default for Session {
    fn default() -> Self {
        Session::Unauthenticated
    }
}

impl Session {
    pub fn new() -> Self {
        Session::Unauthenticated
    }

    /// Attempt the `Unauthenticated -> Authenticated` transition.
    ///
    /// The PIN format gate runs first and fails with
    /// [`AuthError::InvalidPinFormat`] before any lookup; a well-formed PIN
    /// with no directory match fails with [`AuthError::NoMatchingOperator`].
    /// On failure the session stays exactly as it was.
    pub fn login(
        &mut self,
        pin: &str,
        directory: &impl OperatorLookup,
    ) -> Result<Operator, AuthError> {
        if !validate_pin_format(pin) {
            return Err(AuthError::InvalidPinFormat);
        }
        match directory.find_by_pin(pin) {
            Some(operator) => {
                *self = Session::Authenticated {
                    operator: operator.clone(),
                    machine_id: None,
                };
                Ok(operator)
            }
            None => Err(AuthError::NoMatchingOperator),
        }
    }

    /// Explicit logout. Clears the operator and any machine binding.
    pub fn logout(&mut self) {
        *self = Session::Unauthenticated;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn operator(&self) -> Option<&Operator> {
        match self {
            Session::Authenticated { operator, .. } => Some(operator),
            Session::Unauthenticated => None,
        }
    }

    pub fn machine_id(&self) -> Option<&str> {
        match self {
            Session::Authenticated { machine_id, .. } => machine_id.as_deref(),
            Session::Unauthenticated => None,
        }
    }

    /// Bind the session to a machine. Returns false (and does nothing) when
    /// unauthenticated, since there is no machine context without an operator.
    pub fn bind_machine(&mut self, id: impl Into<String>) -> bool {
        match self {
            Session::Authenticated { machine_id, .. } => {
                *machine_id = Some(id.into());
                true
            }
            Session::Unauthenticated => false,
        }
    }
}
