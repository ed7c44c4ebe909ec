use crate::cli::context::CLIContext;
use crate::model::{GeneratedList, Id};
use crate::ops::*;
use crate::queries::*;

pub fn list(ctx: &CLIContext) {
    let history = &ctx.session.history;
    if history.is_empty() {
        println!("No history yet.");
        return;
    }

    let current_id = ctx.session.current_list.as_ref().map(|l| l.id);
    println!("History ({}):", history.len());
    for (i, list) in history.iter().enumerate() {
        println!("  {}. {}", i + 1, entry_summary(list, current_id));

        if ctx.session.config.allow_history_assignment_view {
            for a in &list.assignments {
                println!(
                    "       {} -> {}",
                    list.participant_name(a.giver_id).unwrap_or("(unknown)"),
                    list.participant_name(a.receiver_id).unwrap_or("(unknown)")
                );
            }
        }
    }
}

/// A history line with the short id and reveal progress.
fn entry_summary(list: &GeneratedList, current_id: Option<Id<GeneratedList>>) -> String {
    let s = assignment_queries::list_stats(list);
    let marker = if Some(list.id) == current_id { " (current)" } else { "" };
    format!(
        "{} [{}] - {} assignments, {} revealed{}",
        list.timestamp.format("%Y-%m-%d %H:%M"),
        list.id.short(),
        s.total_assignments,
        s.revealed_count,
        marker
    )
}

pub fn load(ctx: &mut CLIContext, args: &str) {
    let Some(list_id) = entry_at(ctx, args, "load") else { return };

    match list_ops::load_from_history(&mut ctx.session, list_id) {
        Ok(list) => {
            ctx.save();
            println!("Loaded list from {}", list.timestamp.format("%Y-%m-%d %H:%M"));
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove(ctx: &mut CLIContext, args: &str) {
    let Some(list_id) = entry_at(ctx, args, "forget") else { return };

    match list_ops::remove_from_history(&mut ctx.session, list_id) {
        Ok(_) => {
            ctx.save();
            println!("Removed history entry.");
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn clear(ctx: &mut CLIContext) {
    list_ops::clear_history(&mut ctx.session);
    ctx.save();
    println!("History cleared.");
}

fn entry_at(ctx: &CLIContext, args: &str, command: &str) -> Option<Id<GeneratedList>> {
    let entry = args
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| ctx.session.history.get(n.wrapping_sub(1)));
    if entry.is_none() {
        println!("Usage: {} <number>  (see 'history')", command);
    }
    entry.map(|l| l.id)
}
