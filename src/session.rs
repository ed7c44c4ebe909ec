use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::model::{GeneratedList, Group, Participant};

/// Everything the application keeps between runs.
///
/// Ops take the session explicitly instead of reaching into shared state.
/// `history` is newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub participants: Vec<Participant>,
    pub groups: Vec<Group>,
    pub current_list: Option<GeneratedList>,
    pub history: Vec<GeneratedList>,
    pub config: AppConfig,
}
