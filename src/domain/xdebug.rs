use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Requested Xdebug state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XdebugMode {
    On,
    Off,
}

impl XdebugMode {
    pub fn enabled(&self) -> bool {
        matches!(self, XdebugMode::On)
    }

    pub fn label(&self) -> &'static str {
        match self {
            XdebugMode::On => "on",
            XdebugMode::Off => "off",
        }
    }
}

impl FromStr for XdebugMode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "on" => Ok(XdebugMode::On),
            "off" => Ok(XdebugMode::Off),
            other => Err(AppError::Usage(format!("Unknown mode '{other}', use on|off"))),
        }
    }
}

impl fmt::Display for XdebugMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
