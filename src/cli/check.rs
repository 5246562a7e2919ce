//! Opt-out check for a single block.

use anyhow::Result;
use decor_settings::block::{BlockDescriptor, BlockKind};
use decor_settings::store::SettingsStore;
use owo_colors::OwoColorize;

/// Explain how the current settings treat one block.
pub fn check_block(
    store: &SettingsStore,
    name: &str,
    kind: BlockKind,
    experimental: bool,
) -> Result<()> {
    store.load();

    let block = BlockDescriptor::new(name)
        .with_kind(kind)
        .with_experimental(experimental);
    let settings = store.settings();
    let rules = settings.optout.matching_rules(&block);

    let verdict = if settings.is_opted_out(Some(&block)) {
        "opted out".red().bold().to_string()
    } else {
        "enabled".green().bold().to_string()
    };

    println!("{} ({}): {}", block_label(&block), kind.label(), verdict);
    if !rules.is_empty() {
        println!("  {} {}", "rules:".dimmed(), rules.join(", "));
    }
    println!(
        "  {} {}",
        "registration:".dimmed(),
        settings.registration_decision(Some(&block)).label()
    );

    Ok(())
}

fn block_label(block: &BlockDescriptor) -> String {
    block
        .name()
        .map(ToString::to_string)
        .unwrap_or_else(|| "<unnamed>".to_string())
}
