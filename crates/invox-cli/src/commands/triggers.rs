//! Triggers command - list the phrases the parser understands.

use clap::Args;
use console::style;

use invox_core::{global_rules, item_rules};

/// Arguments for the triggers command.
#[derive(Args)]
pub struct TriggersArgs {
    /// Show only global field triggers
    #[arg(long, conflicts_with = "items")]
    global: bool,

    /// Show only item field triggers
    #[arg(long)]
    items: bool,
}

pub fn run(args: TriggersArgs) -> anyhow::Result<()> {
    let show_global = !args.items;
    let show_items = !args.global;

    if show_global {
        println!("{}", style("Global fields").bold());
        for rule in global_rules().rules() {
            println!(
                "  {:<22} {}",
                rule.destination.to_string(),
                rule.triggers.join(", ")
            );
        }
    }

    if show_items {
        if show_global {
            println!();
        }
        println!("{}", style("Item fields").bold());
        for rule in item_rules().rules() {
            println!(
                "  {:<22} {}",
                rule.destination.to_string(),
                rule.triggers.join(", ")
            );
        }
    }

    Ok(())
}
