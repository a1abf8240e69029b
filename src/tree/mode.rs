//! Tree modes selected from the command line

use std::fmt;
use std::str::FromStr;

use crate::error::TreeError;

/// Whether hidden/VCS-metadata entries appear in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeMode {
    /// Hidden/VCS-metadata entries are excluded
    #[default]
    Min,
    /// Every entry is included
    Full,
}

impl TreeMode {
    pub fn name(&self) -> &'static str {
        match self {
            TreeMode::Min => "min",
            TreeMode::Full => "full",
        }
    }

    pub fn include_hidden(&self) -> bool {
        matches!(self, TreeMode::Full)
    }

    /// Parse a mode name, falling back to `Min` for anything unrecognized.
    pub fn from_name_or_default(name: Option<&str>) -> Self {
        match name.map(str::parse::<TreeMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                log::debug!("{}, using 'min'", e);
                TreeMode::Min
            }
            None => TreeMode::Min,
        }
    }
}

impl FromStr for TreeMode {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(TreeMode::Min),
            "full" => Ok(TreeMode::Full),
            _ => Err(TreeError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for TreeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
