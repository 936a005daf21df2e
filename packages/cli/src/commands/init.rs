use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use pagebuilder_editor::ToolboxDropPolicy;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// What dropping a palette entry onto a placed element does
    #[arg(short, long, value_enum, default_value_t = DropPolicyArg::Insert)]
    pub toolbox_drop: DropPolicyArg,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DropPolicyArg {
    Insert,
    Ignore,
}

impl From<DropPolicyArg> for ToolboxDropPolicy {
    fn from(arg: DropPolicyArg) -> Self {
        match arg {
            DropPolicyArg::Insert => ToolboxDropPolicy::Insert,
            DropPolicyArg::Ignore => ToolboxDropPolicy::Ignore,
        }
    }
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = Config::path(cwd);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing page builder...".bright_blue().bold());

    let config = Config::with_toolbox_drop(args.toolbox_drop.into());

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Ready!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Write an event script (see: pagebuilder palette)");
    println!("  2. Run: pagebuilder replay events.json");

    Ok(())
}
