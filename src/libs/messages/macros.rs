//! Output macros for user-facing messages.
//!
//! Every macro checks debug mode once per process and routes the message:
//!
//! ```text
//! msg_*!(Message) ─▶ debug mode? ─┬─ yes ─▶ tracing::{info,warn,error,debug}!
//!                                 └─ no ──▶ println! / eprintln!
//! ```
//!
//! Debug mode is on when `TIMESHEET_DEBUG` or `RUST_LOG` is set. In that mode
//! `main` installs a `tracing-subscriber` so messages are interleaved with the
//! request and pipeline events logged by the library.
//!
//! ```rust
//! use timesheet::libs::messages::Message;
//! use timesheet::{msg_print, msg_warning};
//!
//! msg_print!(Message::HoursRemaining(1.5));
//! msg_warning!(Message::HoursOverbooked(-0.5));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Environment variable that enables debug mode without configuring `RUST_LOG`.
pub const DEBUG_ENV: &str = "TIMESHEET_DEBUG";

/// Returns `true` when `TIMESHEET_DEBUG` or `RUST_LOG` is set. Cached on first use.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message to stdout, or logs it at info level in debug mode.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix to stderr, or logs it at error level
/// in debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
///
/// Warnings describe a state the user should look at, such as an overbooked
/// day, but never stop the command.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix. Silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
