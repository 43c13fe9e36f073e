//! Screen state enum — which content view the dashboard is showing.

use std::fmt;

use crate::input::KeyOutcome;

/// Identifies the active content view. Switched by the F5–F8 keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenState {
    #[default]
    Settings,
    FileSelection,
    LastRunSummary,
    LogMessages,
    /// Rendering fallback. No key produces it; drawn as an alert if it ever
    /// becomes active.
    Unknown,
}

impl ScreenState {
    /// Views reachable by a navigation key, in navigation-bar order.
    pub const NAVIGABLE: [ScreenState; 4] = [
        Self::Settings,
        Self::FileSelection,
        Self::LastRunSummary,
        Self::LogMessages,
    ];

    /// Function key number (5-8) that selects this view. Unknown has none.
    pub fn function_key(self) -> Option<u8> {
        match self {
            Self::Settings => Some(5),
            Self::FileSelection => Some(6),
            Self::LastRunSummary => Some(7),
            Self::LogMessages => Some(8),
            Self::Unknown => None,
        }
    }

    /// View selected by function key `n`. Returns None for other keys.
    pub fn from_function_key(n: u8) -> Option<Self> {
        match n {
            5 => Some(Self::Settings),
            6 => Some(Self::FileSelection),
            7 => Some(Self::LastRunSummary),
            8 => Some(Self::LogMessages),
            _ => None,
        }
    }

    /// Next state after `outcome`. Navigation is flat: the target wins
    /// regardless of where we are; every other outcome keeps the state.
    pub fn apply(self, outcome: &KeyOutcome) -> Self {
        match outcome {
            KeyOutcome::Navigate(target) => *target,
            KeyOutcome::Resize | KeyOutcome::Quit | KeyOutcome::Unsupported { .. } => self,
        }
    }

    /// Header drawn on the first row of the content region.
    pub fn header(self) -> &'static str {
        match self {
            Self::Settings => "SETTINGS SCREEN",
            Self::FileSelection => "FILE SELECTION SCREEN",
            Self::LastRunSummary => "LAST RUN SUMMARY",
            Self::LogMessages => "LOG MESSAGES",
            Self::Unknown => "UNKNOWN KEY PRESSED",
        }
    }

    /// Short label for the navigation bar and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::FileSelection => "File Selection",
            Self::LastRunSummary => "Run Results",
            Self::LogMessages => "Log Messages",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ScreenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
