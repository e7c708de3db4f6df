//! fyp-portal check command

use access::{can_access, Decision, RouteTable};
use clap::Args;
use console::style;
use shared::{Actor, Role};

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Path to check
    #[arg(short, long)]
    pub path: String,

    /// Role of the actor; omit to check anonymous access
    #[arg(short, long)]
    pub role: Option<String>,
}

impl CheckCommand {
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let table = RouteTable::standard();

        let actor = match &self.role {
            Some(role) => Some(Actor::mock(role.parse::<Role>()?, None, "check@fyp.local")),
            None => None,
        };

        let route = match table.find(&self.path) {
            Some(route) => route,
            None => {
                if json {
                    println!("{}", serde_json::json!({ "path": self.path, "found": false }));
                } else {
                    println!("{} {}", style("not found:").yellow(), self.path);
                }
                return Ok(());
            }
        };

        let decision = can_access(actor.as_ref(), route);

        if json {
            println!(
                "{}",
                serde_json::json!({
                    "path": route.path,
                    "found": true,
                    "decision": decision,
                    "redirectTarget": decision.redirect_target(),
                })
            );
            return Ok(());
        }

        let who = actor
            .as_ref()
            .map(|a| a.role.as_str())
            .unwrap_or("anonymous");
        match decision {
            Decision::Allow => println!("{} {} may view {}", style("allow:").green(), who, route.path),
            _ => println!(
                "{} {} is sent to {}",
                style("redirect:").red(),
                who,
                decision.redirect_target().unwrap_or("?")
            ),
        }

        Ok(())
    }
}
