//! Process-wide settings accessor.
//!
//! Responsibilities:
//! - Hold the settings built at startup for code that cannot receive them explicitly.
//!
//! Invariants:
//! - The stored settings are written at most once and never mutated.
//! - Later `install` calls keep the first settings and return them.

use std::sync::OnceLock;

use crate::settings::Settings;

static INSTALLED: OnceLock<Settings> = OnceLock::new();

/// Store `settings` for the lifetime of the process.
///
/// Returns the stored settings, which are the previously installed ones if
/// `install` was already called.
pub fn install(settings: Settings) -> &'static Settings {
    let mut fresh = false;
    let stored = INSTALLED.get_or_init(|| {
        fresh = true;
        settings
    });
    if fresh {
        tracing::debug!(profile = %stored.profile(), "Installed process-wide settings");
    } else {
        tracing::warn!(
            profile = %stored.profile(),
            "Settings already installed; keeping the first instance"
        );
    }
    stored
}

/// The settings stored by [`install`], if any.
pub fn installed() -> Option<&'static Settings> {
    INSTALLED.get()
}
