use crate::cli::context::CLIContext;
use crate::model::*;
use crate::ops::*;
use crate::queries::*;

pub fn list(ctx: &CLIContext) {
    let groups = &ctx.session.groups;
    if groups.is_empty() {
        println!("No groups yet. Use 'add-group <name>' to create one.");
        return;
    }

    println!("Groups ({}):", groups.len());
    for group in groups {
        let members = roster_queries::member_names(group, &ctx.session.participants);
        if members.is_empty() {
            println!("  {} (no members)", group.name);
        } else {
            println!("  {}: {}", group.name, members.join(", "));
        }
    }
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Group name: ") {
            Some(s) if !s.is_empty() => s,
            _ => { println!("Name cannot be empty."); return; }
        }
    };

    let group = match group_ops::create_group(&mut ctx.session, &name) {
        Ok(g) => g,
        Err(e) => { ctx.print_error(&e); return; }
    };

    println!("Add members (enter numbers separated by spaces, or press Enter to skip):");
    let chosen = choose_participants(ctx);
    let mut added = 0;
    for id in chosen {
        match group_ops::add_member(&mut ctx.session, group.id, id) {
            Ok(_) => added += 1,
            Err(e) => ctx.print_error(&e),
        }
    }

    ctx.save();
    println!("Created group: {} with {} members", group.name, added);
}

pub fn remove(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: remove-group <name>");
        return;
    }
    let Some(group) = ctx.find_group(args) else { return };

    match group_ops::remove_group(&mut ctx.session, group.id) {
        Ok(g) => {
            println!("Removed group: {}", g.name);
            ctx.save();
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn add_members(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: group-add <group>");
        return;
    }
    let Some(group) = ctx.find_group(args) else { return };

    println!("Add to {} (enter numbers separated by spaces):", group.name);
    for id in choose_participants(ctx) {
        match group_ops::add_member(&mut ctx.session, group.id, id) {
            Ok(g) => println!("{} now has {} members", g.name, g.participant_ids.len()),
            Err(e) => ctx.print_error(&e),
        }
    }
    ctx.save();
}

pub fn remove_members(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: group-remove <group>");
        return;
    }
    let Some(group) = ctx.find_group(args) else { return };

    let members: Vec<&Participant> = group
        .participant_ids
        .iter()
        .filter_map(|id| roster_queries::participant_by_id(*id, &ctx.session.participants))
        .collect();
    if members.is_empty() {
        println!("{} has no members.", group.name);
        return;
    }
    for (i, p) in members.iter().enumerate() {
        println!("  {}. {}", i + 1, p.name);
    }

    let input = ctx.prompt("Remove: ").unwrap_or_default();
    let ids: Vec<Id<Participant>> = input
        .split_whitespace()
        .filter_map(|s| s.parse::<usize>().ok())
        .filter_map(|i| members.get(i.wrapping_sub(1)).map(|p| p.id))
        .collect();

    for id in ids {
        match group_ops::remove_member(&mut ctx.session, group.id, id) {
            Ok(Some(g)) => println!("{} now has {} members", g.name, g.participant_ids.len()),
            Ok(None) => println!("{} was empty and has been removed", group.name),
            Err(e) => ctx.print_error(&e),
        }
    }
    ctx.save();
}

pub fn check(ctx: &CLIContext) {
    match group_ops::validate_groups(&ctx.session) {
        Ok(()) => println!("Groups look good."),
        Err(e) => ctx.print_error(&e),
    }
}

/// Numbered pick list over the live roster.
fn choose_participants(ctx: &CLIContext) -> Vec<Id<Participant>> {
    let people = &ctx.session.participants;
    for (i, p) in people.iter().enumerate() {
        println!("  {}. {}", i + 1, p.name);
    }

    let input = ctx.prompt("Members: ").unwrap_or_default();
    input
        .split_whitespace()
        .filter_map(|s| s.parse::<usize>().ok())
        .filter_map(|i| people.get(i.wrapping_sub(1)).map(|p| p.id))
        .collect()
}
