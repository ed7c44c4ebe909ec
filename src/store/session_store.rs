use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::SantaResult;
use crate::ops::list_ops;
use crate::session::Session;

/// Reads the session file. A missing file yields an empty session; a file
/// that exists but does not parse is an error. An out-of-range history cap
/// falls back to the default and the history is trimmed to the cap.
pub fn load(path: &Path) -> SantaResult<Session> {
    let json = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no session file, starting empty");
            return Ok(Session::default());
        }
        Err(e) => return Err(e.into()),
    };

    let mut session: Session = serde_json::from_str(&json)?;
    let config = session.config.sanitized();
    if config != session.config {
        warn!(
            max_history_count = session.config.max_history_count,
            "history cap out of range, using default"
        );
        session.config = config;
    }
    list_ops::trim_history(&mut session, config.max_history_count);

    debug!(
        path = %path.display(),
        participants = session.participants.len(),
        history = session.history.len(),
        "loaded session"
    );
    Ok(session)
}

/// Writes the session as pretty JSON, creating parent directories as needed.
pub fn save(path: &Path, session: &Session) -> SantaResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(session)?;
    fs::write(path, json)?;
    Ok(())
}
