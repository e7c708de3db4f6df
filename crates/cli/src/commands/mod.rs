//! CLI subcommands

mod check;
mod menu;
mod routes;

pub use check::CheckCommand;
pub use menu::MenuCommand;
pub use routes::RoutesCommand;
