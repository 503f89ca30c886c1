//! Configuration file management.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, MateConfig, ResolveOptions, ResolvedConfig, load_resolved,
    resolve_config,
};
