//! fyp-portal routes command

use access::RouteTable;
use clap::Args;
use console::style;

#[derive(Debug, Args)]
pub struct RoutesCommand {
    /// Only show routes admitting this role
    #[arg(short, long)]
    pub role: Option<String>,
}

impl RoutesCommand {
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let table = RouteTable::standard();

        let routes: Vec<_> = match &self.role {
            Some(role) => {
                let role = role.parse::<shared::Role>()?;
                table
                    .routes()
                    .iter()
                    .filter(|r| r.public || r.admits(role))
                    .collect()
            }
            None => table.routes().iter().collect(),
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&routes)?);
            return Ok(());
        }

        for route in routes {
            let audience = if route.public {
                "public".to_string()
            } else if route.allowed_roles.is_empty() {
                "any authenticated".to_string()
            } else {
                route
                    .allowed_roles
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            println!("{:<36} {}", route.path, style(audience).dim());
        }

        Ok(())
    }
}
