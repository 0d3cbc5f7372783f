//! Subsystem-tagged logging on top of `tracing`.
//!
//! Records carry a `subsystem` field (`music` or `sfx`). Debug records of a
//! subsystem are dropped unless its debug toggle is on.

use std::fmt::Display;

use strum::IntoStaticStr;
use tracing::{debug, error, info, warn};

use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum LogLevel {
    Debug,
    Important,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Subsystem {
    Music,
    Sfx,
}

/// Per-subsystem debug gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogGate {
    music_debug: bool,
    sfx_debug: bool,
}

impl LogGate {
    pub fn new(music_debug: bool, sfx_debug: bool) -> Self {
        Self {
            music_debug,
            sfx_debug,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.log_music_debug, settings.log_sfx_debug)
    }

    /// Gate that lets every record through
    pub fn verbose() -> Self {
        Self::new(true, true)
    }

    pub fn is_enabled(&self, level: LogLevel, subsystem: Subsystem) -> bool {
        if level != LogLevel::Debug {
            return true;
        }
        match subsystem {
            Subsystem::Music => self.music_debug,
            Subsystem::Sfx => self.sfx_debug,
        }
    }

    pub fn log(&self, level: LogLevel, subsystem: Subsystem, message: impl Display) {
        if !self.is_enabled(level, subsystem) {
            return;
        }
        let subsystem: &'static str = subsystem.into();
        match level {
            LogLevel::Debug => debug!(subsystem = subsystem, "{}", message),
            LogLevel::Important => info!(subsystem = subsystem, "{}", message),
            LogLevel::Warning => warn!(subsystem = subsystem, "{}", message),
            LogLevel::Error => error!(subsystem = subsystem, "{}", message),
        }
    }

    pub fn debug(&self, subsystem: Subsystem, message: impl Display) {
        self.log(LogLevel::Debug, subsystem, message);
    }

    pub fn important(&self, subsystem: Subsystem, message: impl Display) {
        self.log(LogLevel::Important, subsystem, message);
    }

    pub fn warning(&self, subsystem: Subsystem, message: impl Display) {
        self.log(LogLevel::Warning, subsystem, message);
    }

    pub fn error(&self, subsystem: Subsystem, message: impl Display) {
        self.log(LogLevel::Error, subsystem, message);
    }
}

impl Default for LogGate {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
