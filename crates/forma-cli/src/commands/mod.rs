use forma_config::FormaConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod catalog;
pub mod kinds;
pub mod schema;
pub mod validate;

/// Route a parsed command to its handler.
///
/// Returns `Ok(false)` when the command completed but found invalid input.
pub fn dispatch(command: &Commands, config: &FormaConfig, flags: &GlobalFlags) -> anyhow::Result<bool> {
    match command {
        Commands::Validate(args) => validate::handle(args, config, flags),
        Commands::Schema(args) => schema::handle(args, flags).map(|()| true),
        Commands::Kinds => kinds::handle(flags).map(|()| true),
    }
}
