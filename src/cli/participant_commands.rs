use crate::cli::context::CLIContext;
use crate::ops::*;
use crate::queries::*;

pub fn list(ctx: &CLIContext) {
    let participants = &ctx.session.participants;
    if participants.is_empty() {
        println!("No participants yet. Use 'add <name>' to add one.");
        return;
    }

    println!("Participants ({}):", participants.len());
    for p in participants {
        let groups = roster_queries::groups_for_participant(p.id, &ctx.session.groups);
        if groups.is_empty() {
            println!("  {}", p.name);
        } else {
            let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
            println!("  {} [{}]", p.name, names.join(", "));
        }
    }
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Name: ") {
            Some(s) if !s.is_empty() => s,
            _ => { println!("Name cannot be empty."); return; }
        }
    };

    match participant_ops::add_participant(&mut ctx.session, &name) {
        Ok(p) => {
            println!("Added {}", p.name);
            ctx.save();
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: remove <name>");
        return;
    }
    let Some(participant) = ctx.find_participant(args) else { return };

    match participant_ops::remove_participant(&mut ctx.session, participant.id) {
        Ok(p) => {
            println!("Removed {}", p.name);
            ctx.save();
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn clear(ctx: &mut CLIContext) {
    let confirm = ctx.prompt("Remove all participants and groups? (y/N): ").unwrap_or_default();
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return;
    }
    participant_ops::clear_participants(&mut ctx.session);
    ctx.save();
    println!("Cleared all participants and groups.");
}
