pub mod context;
pub mod participant_commands;
pub mod group_commands;
pub mod list_commands;
pub mod history_commands;
pub mod config_commands;

use std::path::Path;

use crate::store::session_store;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(path: &Path) {
    println!("Secret Santa");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let session = match session_store::load(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading {}: {}", path.display(), e);
            eprintln!("Fix or remove the file, or use --file to pick another one.");
            return;
        }
    };

    if !session.participants.is_empty() {
        println!(
            "Loaded {} participants and {} groups from {}",
            session.participants.len(),
            session.groups.len(),
            path.display()
        );
    }

    let mut ctx = CLIContext::new(session, path.to_path_buf());
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Participants
            "participants" | "list" | "ls" => participant_commands::list(ctx),
            "add" => participant_commands::add(ctx, args),
            "remove" | "rm" => participant_commands::remove(ctx, args),
            "clear-participants" => participant_commands::clear(ctx),

            // Groups
            "groups" => group_commands::list(ctx),
            "add-group" => group_commands::add(ctx, args),
            "remove-group" => group_commands::remove(ctx, args),
            "group-add" => group_commands::add_members(ctx, args),
            "group-remove" => group_commands::remove_members(ctx, args),
            "check-groups" => group_commands::check(ctx),

            // Drawing
            "generate" | "draw" => list_commands::generate(ctx),
            "show" => list_commands::show(ctx),
            "reveal" => list_commands::reveal(ctx, args),
            "stats" => list_commands::print_stats(ctx),
            "clear" => list_commands::clear(ctx),

            // History
            "history" => history_commands::list(ctx),
            "load" => history_commands::load(ctx, args),
            "forget" => history_commands::remove(ctx, args),
            "clear-history" => history_commands::clear(ctx),

            // Settings
            "config" => config_commands::show(ctx),
            "set-history" => config_commands::set_history(ctx, args),
            "set-history-view" => config_commands::set_history_view(ctx, args),
            "reset-config" => config_commands::reset(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Participants:
    participants            List participants and their groups
    add [name]              Add a participant
    remove <name>           Remove a participant (also from groups)
    clear-participants      Remove everyone (and all groups)

  Groups (members never draw each other):
    groups                  List groups
    add-group [name]        Create a group and pick members
    remove-group <name>     Delete a group
    group-add <group>       Add members to a group
    group-remove <group>    Remove members from a group
    check-groups            Check groups before drawing

  Drawing:
    generate                Draw a new list
    show                    Show who has seen their assignment
    reveal <name>           Show one giver their receiver
    stats                   Show statistics
    clear                   Clear the current list

  History:
    history                 List previous draws
    load <n>                Make history entry n current again
    forget <n>              Delete history entry n
    clear-history           Delete all history

  Settings:
    config                  Show settings
    set-history <n>         Keep the n newest draws (1-50)
    set-history-view on|off Show pairings in 'history'
    reset-config            Restore default settings

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Names are case-insensitive and partial matches work
  - Set RUST_LOG=santa=debug to see how many attempts a draw took"#);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_splits_on_first_space() {
        assert_eq!(parse_command("add  Mary Jane "), ("add", "Mary Jane"));
        assert_eq!(parse_command("generate"), ("generate", ""));
        assert_eq!(parse_command("reveal\tBob"), ("reveal", "Bob"));
    }
}
