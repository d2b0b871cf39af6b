//! # Captured panic payloads.
//!
//! A panic can carry any `Box<dyn Any + Send>`. [`Fault`] sorts the payload into the
//! three shapes that matter for reporting:
//!
//! ```text
//! panic!("literal")                        → Fault::Message
//! panic!("formatted {x}")                  → Fault::Message
//! panic_any(Box<dyn Error + Send + Sync>)  → Fault::Error
//! panic_any(anything else)                 → Fault::Opaque
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;

/// Payload of an intercepted panic.
#[non_exhaustive]
pub enum Fault {
    /// Textual payload (`&'static str` or `String`).
    Message(String),
    /// Boxed error raised with [`std::panic::panic_any`].
    Error(Box<dyn Error + Send + Sync>),
    /// Payload of any other type, kept untouched for downcasting.
    Opaque(Box<dyn Any + Send>),
}

impl Fault {
    /// Classifies a raw payload as returned by `catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<String>() {
            Ok(msg) => return Fault::Message(*msg),
            Err(other) => other,
        };
        let payload = match payload.downcast::<&'static str>() {
            Ok(msg) => return Fault::Message((*msg).to_owned()),
            Err(other) => other,
        };
        match payload.downcast::<Box<dyn Error + Send + Sync>>() {
            Ok(err) => Fault::Error(*err),
            Err(other) => Fault::Opaque(other),
        }
    }

    /// Returns the panic message, if the payload was textual.
    pub fn message(&self) -> Option<&str> {
        match self {
            Fault::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use taskmaster::Fault;
    ///
    /// let fault = Fault::Message("boom".into());
    /// assert_eq!(fault.as_label(), "fault_message");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            Fault::Message(_) => "fault_message",
            Fault::Error(_) => "fault_error",
            Fault::Opaque(_) => "fault_opaque",
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Message(msg) => f.write_str(msg),
            Fault::Error(err) => write!(f, "{err}"),
            Fault::Opaque(_) => f.write_str("<non-textual panic payload>"),
        }
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Message(msg) => f.debug_tuple("Message").field(msg).finish(),
            Fault::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Fault::Opaque(_) => f.debug_tuple("Opaque").finish_non_exhaustive(),
        }
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Fault::Error(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
