//! Localized speech payloads.
//!
//! Treated as opaque strings; the defaults are the skill's shipped locale.

/// Speech text spoken by each handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechCatalog {
    /// Spoken when a launch binds a gadget.
    pub launch: String,
    /// Spoken when a launch finds no connected gadget.
    pub no_gadgets: String,
    /// Spoken when the user declines.
    pub farewell: String,
    /// Spoken by the fallback on any failure.
    pub apology: String,
    /// Optional acknowledgement spoken after sending a command.
    pub command_ack: Option<String>,
}

impl Default for SpeechCatalog {
    fn default() -> Self {
        Self {
            launch: "Vamos al lío".to_string(),
            no_gadgets: "No se encontraron gadgets. Inténtalo de nuevo después de conectar tu gadget."
                .to_string(),
            farewell: "Deu!".to_string(),
            apology: "I'm sorry, something went wrong!".to_string(),
            command_ack: None,
        }
    }
}
