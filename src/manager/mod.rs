// ABOUTME: Session orchestration: readiness polling and the interactive loop.
// ABOUTME: Glue between the daemon client and the terminal.

mod interactive;
mod session;
mod wait;

pub use interactive::{InteractiveError, SENTINEL, run_interactive};
pub use session::{SessionConfig, run_session};
pub use wait::{WaitError, wait_until_running};
