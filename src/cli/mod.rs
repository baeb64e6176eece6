//! Command-line interface module
//!
//! Argument parsing, config assembly and one handler per subcommand.

pub mod args;
pub mod config;
pub mod describe;
pub mod generate;
pub mod init;

pub use args::*;
pub use config::{load_effective_config, resolve_workspace};
pub use describe::handle_describe_command;
pub use generate::handle_generate_command;
pub use init::handle_init_command;
