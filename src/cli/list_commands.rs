use crate::cli::context::CLIContext;
use crate::ops::*;
use crate::queries::*;
use crate::validation;

pub fn generate(ctx: &mut CLIContext) {
    if let Some(current) = &ctx.session.current_list {
        if !assignment_queries::revealed(current).is_empty() {
            let confirm = ctx
                .prompt("Some assignments were already revealed. Draw again anyway? (y/N): ")
                .unwrap_or_default();
            if !confirm.eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return;
            }
        }
    }

    match list_ops::generate(&mut ctx.session) {
        Ok(list) => {
            ctx.save();
            println!("Drew {} assignments. Use 'reveal <name>' to let each giver see theirs.", list.assignments.len());
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show(ctx: &CLIContext) {
    let Some(list) = &ctx.session.current_list else {
        println!("No current list. Use 'generate' to draw one.");
        return;
    };

    println!();
    println!("Drawn {}", list.timestamp.format("%Y-%m-%d %H:%M"));
    for a in &list.assignments {
        let giver = list.participant_name(a.giver_id).unwrap_or("(unknown)");
        match a.revealed_at {
            Some(at) if a.revealed => println!("  {} - revealed {}", giver, at.format("%Y-%m-%d %H:%M")),
            _ => println!("  {} - not yet revealed", giver),
        }
    }
    println!();
}

/// Shows one giver their receiver after they confirm their own name.
pub fn reveal(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: reveal <name>");
        return;
    }
    let Some(list) = &ctx.session.current_list else {
        println!("No current list. Use 'generate' to draw one.");
        return;
    };

    let giver = roster_queries::participant_by_name(args, &list.participants).or_else(|| {
        match roster_queries::find_participants(args, &list.participants).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    });
    let Some(giver) = giver.cloned() else {
        println!("No participant found matching '{}' in the current list", args.trim());
        return;
    };
    let Some(assignment) = assignment_queries::assignment_for_giver(giver.id, &list.assignments).cloned() else {
        println!("{} has no assignment in the current list", giver.name);
        return;
    };
    let receiver = list.participant_name(assignment.receiver_id).unwrap_or("(unknown)").to_string();

    if assignment.revealed {
        println!("{} has already seen their assignment.", giver.name);
    }

    let typed = ctx.prompt(&format!("{}, type your name to confirm: ", giver.name)).unwrap_or_default();
    if let Err(e) = validation::verification_name(&typed, &giver.name) {
        ctx.print_error(&e);
        return;
    }

    match list_ops::reveal_assignment(&mut ctx.session, assignment.id) {
        Ok(_) => {
            ctx.save();
            println!();
            println!("  {}, you are getting a gift for: {}", giver.name, receiver);
            println!();
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn print_stats(ctx: &CLIContext) {
    println!();
    println!("Participants: {}", ctx.session.participants.len());
    println!("Groups: {}", ctx.session.groups.len());

    match &ctx.session.current_list {
        Some(list) => {
            let s = assignment_queries::list_stats(list);
            println!("Current list: {} assignments", s.total_assignments);
            println!("  Revealed: {}, waiting: {}", s.revealed_count, s.unrevealed_count);
            println!("  In a group: {}, ungrouped: {}", s.participants_with_groups, s.participants_without_groups);
        }
        None => println!("Current list: (none)"),
    }
    println!("History: {} of {}", ctx.session.history.len(), ctx.session.config.max_history_count);
    println!();
}

pub fn clear(ctx: &mut CLIContext) {
    list_ops::clear_current(&mut ctx.session);
    ctx.save();
    println!("Current list cleared.");
}
