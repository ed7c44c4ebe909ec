use crate::config::{AppConfig, MAX_HISTORY_COUNT, MIN_HISTORY_COUNT};
use crate::error::{SantaError, SantaResult};
use crate::ops::list_ops;
use crate::session::Session;

/// Changes the history cap. Lowering it trims the history right away.
pub fn set_max_history_count(session: &mut Session, count: usize) -> SantaResult<AppConfig> {
    if !(MIN_HISTORY_COUNT..=MAX_HISTORY_COUNT).contains(&count) {
        return Err(SantaError::OutOfRange {
            field: "Max history count".into(),
            min: MIN_HISTORY_COUNT,
            max: MAX_HISTORY_COUNT,
        });
    }

    let old = session.config.max_history_count;
    session.config.max_history_count = count;
    if count < old {
        list_ops::trim_history(session, count);
    }
    Ok(session.config)
}

pub fn set_allow_history_assignment_view(session: &mut Session, allow: bool) -> AppConfig {
    session.config.allow_history_assignment_view = allow;
    session.config
}

pub fn reset_config(session: &mut Session) -> AppConfig {
    session.config = AppConfig::default();
    session.config
}
