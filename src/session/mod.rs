mod operator;
mod pin;
mod state;

pub use operator::{Operator, OperatorDirectory, OperatorLookup, Role};
pub use pin::{PIN_LENGTH, validate_pin_format};
pub use state::Session;
