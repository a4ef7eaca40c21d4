//! Startup diagnostics
//!
//! Event routing for the dashboard is not implemented yet; the only behavior
//! carried by this module is the announcement emitted when the program starts.

use tracing::info;

/// Diagnostic line emitted once at program start.
pub const STARTUP_MESSAGE: &str = "[EMS] script starting";

/// Announce that the program has started.
///
/// Unconditional and parameterless; emits exactly one event and has no side
/// effects beyond the write itself.
pub fn announce_start() {
    info!("{}", STARTUP_MESSAGE);
}
