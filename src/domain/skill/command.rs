//! Gadget command codes and the intents that trigger them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic command understood by the gadget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandCode {
    #[serde(rename = "TVOFF")]
    TvOff,
    #[serde(rename = "TVON")]
    TvOn,
    #[serde(rename = "SOURCE")]
    Source,
    #[serde(rename = "REBOOT")]
    Reboot,
    #[serde(rename = "UPGRADE")]
    Upgrade,
}

/// Intent name → command code, in registration order.
const COMMAND_INTENTS: [(&str, CommandCode); 5] = [
    ("TVOffIntent", CommandCode::TvOff),
    ("TVOnIntent", CommandCode::TvOn),
    ("SourceIntent", CommandCode::Source),
    ("RebootIntent", CommandCode::Reboot),
    ("UpgradeIntent", CommandCode::Upgrade),
];

impl CommandCode {
    /// Returns the directive name sent to the gadget.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandCode::TvOff => "TVOFF",
            CommandCode::TvOn => "TVON",
            CommandCode::Source => "SOURCE",
            CommandCode::Reboot => "REBOOT",
            CommandCode::Upgrade => "UPGRADE",
        }
    }

    /// Returns the intent that triggers this command.
    pub fn intent_name(&self) -> &'static str {
        COMMAND_INTENTS
            .iter()
            .find(|(_, code)| code == self)
            .map(|(intent, _)| *intent)
            .unwrap_or_default()
    }

    /// All command intents in registration order.
    pub fn catalogue() -> impl Iterator<Item = (&'static str, CommandCode)> {
        COMMAND_INTENTS.into_iter()
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
