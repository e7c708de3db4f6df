//! Interactive mode - simulated login and navigation REPL

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use portal::{NavigationOutcome, PortalCore};
use shared::{EvaluatorKind, NullLogger, Role};

/// Interactive CLI driving a PortalCore session
pub struct InteractivePortal {
    portal: PortalCore,
}

impl InteractivePortal {
    pub fn new() -> Self {
        // The REPL prints its own feedback; keep the injected logger quiet
        Self {
            portal: PortalCore::new(Arc::new(NullLogger)),
        }
    }

    /// Build over an existing core (tests inject a zero-latency verifier)
    pub fn with_portal(portal: PortalCore) -> Self {
        Self { portal }
    }

    /// Run the interactive session
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("{}", style("FYP Portal").bold());
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            if !self.portal.is_authenticated() {
                self.login_flow().await?;
                if let Some(actor) = self.portal.current_actor() {
                    println!();
                    println!(
                        "Welcome, {} ({})",
                        style(&actor.display_name).green(),
                        actor.role_label()
                    );
                    self.print_menu();
                }
                continue;
            }

            // Print prompt
            let role = self
                .portal
                .current_actor()
                .map(|a| a.role.as_str())
                .unwrap_or("anonymous");
            print!("[{}] > ", role);
            io::stdout().flush()?;

            // Read input
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(should_exit) if should_exit => break,
                Ok(_) => continue,
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            }
        }

        Ok(())
    }

    /// Prompt for role and credentials, then attempt the login
    async fn login_flow(&mut self) -> anyhow::Result<()> {
        let theme = ColorfulTheme::default();

        let role_labels: Vec<&str> = Role::ALL.iter().map(|r| r.display_name(None)).collect();
        let idx = Select::with_theme(&theme)
            .with_prompt("Select role")
            .items(&role_labels)
            .default(0)
            .interact()?;
        let role = Role::ALL[idx];

        let kind = if role == Role::Evaluator {
            let kinds = ["Internal", "External"];
            let k = Select::with_theme(&theme)
                .with_prompt("Evaluator kind")
                .items(&kinds)
                .default(0)
                .interact()?;
            Some(if k == 1 {
                EvaluatorKind::External
            } else {
                EvaluatorKind::Internal
            })
        } else {
            None
        };

        let email: String = Input::with_theme(&theme)
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?;

        let password = Password::with_theme(&theme)
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        spinner.set_message("Signing in...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = self.portal.login(&email, &password, role, kind).await;
        spinner.finish_and_clear();

        if let Err(e) = result {
            // Recoverable: the form stays editable, the loop re-prompts
            println!("{} {}", style("Login failed:").red(), e);
        }

        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /menu       - Show the navigation menu");
                println!("  /go <path>  - Navigate to a path");
                println!("  /whoami     - Show the current session");
                println!("  /audit      - Show audit statistics");
                println!("  /logout     - End the session");
                println!("  /quit       - Exit");
            }
            "/menu" => {
                self.print_menu();
            }
            "/go" => match parts.get(1) {
                Some(path) => self.navigate(path),
                None => println!("Usage: /go <path>"),
            },
            "/whoami" => match self.portal.current_actor() {
                Some(actor) => {
                    println!("{} <{}>", actor.display_name, actor.email);
                    println!("  id:   {}", actor.id);
                    println!("  role: {}", actor.role_label());
                }
                None => println!("Not signed in"),
            },
            "/audit" => {
                let stats = self.portal.audit_stats();
                println!(
                    "{} audit entries, {} denials",
                    stats.total_entries, stats.denial_count
                );
                for entry in self.portal.recent_denials(5) {
                    println!(
                        "  {} {:?} {}",
                        entry.timestamp,
                        entry.event_type,
                        entry.path.as_deref().unwrap_or("-")
                    );
                }
            }
            "/logout" => {
                self.portal.logout();
                println!("Signed out");
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }

    fn navigate(&mut self, path: &str) {
        match self.portal.navigate(path) {
            NavigationOutcome::Allowed { path } => {
                println!("{} {}", style("->").green(), path);
            }
            NavigationOutcome::Redirect { target, .. } => {
                println!("{} redirected to {}", style("->").yellow(), target);
            }
            NavigationOutcome::NotFound => {
                // Router catch-all: unknown paths land on the login page
                println!("{} no such page, redirected to /login", style("->").yellow());
            }
        }
    }

    fn print_menu(&self) {
        let menu = self.portal.menu();
        if menu.is_empty() {
            println!("(no menu - not signed in)");
            return;
        }
        for entry in menu {
            println!(
                "  {:<24} {}",
                entry.label,
                style(entry.target_path).cyan()
            );
        }
    }
}

impl Default for InteractivePortal {
    fn default() -> Self {
        Self::new()
    }
}
