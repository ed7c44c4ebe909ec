use crate::cli::context::CLIContext;
use crate::config::AppConfig;
use crate::ops::*;

pub fn show(ctx: &CLIContext) {
    print_config(&ctx.session.config);
}

pub fn set_history(ctx: &mut CLIContext, args: &str) {
    let Ok(count) = args.trim().parse::<usize>() else {
        println!("Usage: set-history <number>");
        return;
    };

    match settings_ops::set_max_history_count(&mut ctx.session, count) {
        Ok(config) => {
            ctx.save();
            print_config(&config);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn set_history_view(ctx: &mut CLIContext, args: &str) {
    let allow = match args.trim().to_lowercase().as_str() {
        "on" | "yes" | "true" => true,
        "off" | "no" | "false" => false,
        _ => { println!("Usage: set-history-view on|off"); return; }
    };

    let config = settings_ops::set_allow_history_assignment_view(&mut ctx.session, allow);
    ctx.save();
    print_config(&config);
}

pub fn reset(ctx: &mut CLIContext) {
    let config = settings_ops::reset_config(&mut ctx.session);
    ctx.save();
    print_config(&config);
}

fn print_config(config: &AppConfig) {
    println!("History size: {}", config.max_history_count);
    println!(
        "Show assignments in history: {}",
        if config.allow_history_assignment_view { "on" } else { "off" }
    );
}
