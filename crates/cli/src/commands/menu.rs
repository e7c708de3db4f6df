//! fyp-portal menu command

use access::menu_for_name;
use clap::Args;
use console::style;
use shared::{display_role_name, EvaluatorKind};

#[derive(Debug, Args)]
pub struct MenuCommand {
    /// Role to derive the menu for
    #[arg(short, long)]
    pub role: String,

    /// Treat the evaluator as external
    #[arg(long)]
    pub external: bool,
}

impl MenuCommand {
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let kind = self.external.then_some(EvaluatorKind::External);
        let menu = menu_for_name(&self.role, kind);

        if json {
            println!("{}", serde_json::to_string_pretty(&menu)?);
            return Ok(());
        }

        if menu.is_empty() {
            println!(
                "No menu for role '{}' (unknown role shows no navigation)",
                self.role
            );
            return Ok(());
        }

        println!("Menu for {}:", display_role_name(&self.role, kind));
        for entry in menu {
            println!(
                "  {:<24} {:<16} {}",
                entry.label,
                style(entry.icon.as_str()).dim(),
                style(entry.target_path).cyan()
            );
        }

        Ok(())
    }
}
