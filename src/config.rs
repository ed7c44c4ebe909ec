use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;
pub const DEFAULT_MAX_HISTORY_COUNT: usize = 5;
pub const MIN_HISTORY_COUNT: usize = 1;
pub const MAX_HISTORY_COUNT: usize = 50;

/// Knobs for a single run of the assignment engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub allow_self_assignment: bool,
    pub enforce_group_constraints: bool,
    pub max_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            allow_self_assignment: false,
            enforce_group_constraints: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// User-facing settings stored alongside the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How many generated lists the history keeps, newest first.
    pub max_history_count: usize,
    pub allow_history_assignment_view: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_history_count: DEFAULT_MAX_HISTORY_COUNT,
            allow_history_assignment_view: false,
        }
    }
}

impl AppConfig {
    /// Replaces a history cap outside `MIN_HISTORY_COUNT..=MAX_HISTORY_COUNT`
    /// with the default. Settings read from disk bypass the setters.
    pub fn sanitized(self) -> Self {
        if (MIN_HISTORY_COUNT..=MAX_HISTORY_COUNT).contains(&self.max_history_count) {
            self
        } else {
            Self {
                max_history_count: DEFAULT_MAX_HISTORY_COUNT,
                ..self
            }
        }
    }
}
