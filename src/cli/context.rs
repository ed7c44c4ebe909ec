use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::SantaError;
use crate::model::*;
use crate::queries::roster_queries;
use crate::session::Session;
use crate::store::session_store;

pub struct CLIContext {
    pub session: Session,
    pub path: PathBuf,
}

impl CLIContext {
    pub fn new(session: Session, path: PathBuf) -> Self {
        Self { session, path }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Persist the session. Failures are reported but do not end the REPL.
    pub fn save(&self) {
        if let Err(e) = session_store::save(&self.path, &self.session) {
            println!("Warning: could not save {}: {}", self.path.display(), e);
        }
    }

    /// Find a participant on the live roster by name query.
    /// Prints a message if not found or ambiguous.
    pub fn find_participant(&self, args: &str) -> Option<Participant> {
        pick(
            args,
            roster_queries::find_participants(args, &self.session.participants),
            |p| p.name.as_str(),
            "participant",
        )
    }

    pub fn find_group(&self, args: &str) -> Option<Group> {
        pick(
            args,
            roster_queries::find_groups(args, &self.session.groups),
            |g| g.name.as_str(),
            "group",
        )
    }

    /// Print an error.
    pub fn print_error(&self, e: &SantaError) {
        println!("Error: {}", e);
    }
}

fn pick<T: Clone>(query: &str, matches: Vec<&T>, name: impl Fn(&T) -> &str, kind: &str) -> Option<T> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    match matches.len() {
        0 => {
            println!("No {} found matching '{}'", kind, query);
            None
        }
        1 => Some(matches[0].clone()),
        _ => {
            if let Some(exact) = matches.iter().find(|m| name(**m).eq_ignore_ascii_case(query)) {
                return Some((*exact).clone());
            }
            println!("Multiple matches found:");
            for m in &matches {
                println!("  {}", name(*m));
            }
            println!("Please be more specific.");
            None
        }
    }
}
