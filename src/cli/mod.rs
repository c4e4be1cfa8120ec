//! CLI module for versepager
//!
//! - Argument parsing (`args`)
//! - Layering file, environment and flags into a render config
//!   (`config_builder`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod config_builder;
pub mod setup;

// Re-export commonly used types for convenience
pub use args::Cli;
pub use config_builder::{
    build_render_config, build_selection, resolve_color_mode, resolve_highlighting, EnvOverrides,
};
pub use setup::{init_logging, level_for_verbosity};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
