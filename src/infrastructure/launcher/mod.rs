//! Launcher support: starting the UI process

mod process;

pub use process::{spawn_ui, LaunchCommand};
