use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SignscaleError, SignscaleResult};

/// Directory holding the Liberation font family on common Linux installs.
pub const DEFAULT_FONT_DIR: &str = "/usr/share/fonts/truetype/liberation";

/// Environment variable naming a directory that replaces [`DEFAULT_FONT_DIR`].
///
/// The directory must hold files with the Liberation file names.
pub const FONT_DIR_ENV: &str = "SIGNSCALE_FONT_DIR";

/// The fixed set of sign fonts offered to the user.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FontChoice {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl FontChoice {
    pub const ALL: [FontChoice; 3] = [FontChoice::Sans, FontChoice::Serif, FontChoice::Mono];

    /// Human-facing label shown in font pickers.
    pub fn label(self) -> &'static str {
        match self {
            FontChoice::Sans => "Arial-like (Liberation Sans)",
            FontChoice::Serif => "Times-like (Liberation Serif)",
            FontChoice::Mono => "Courier-like (Liberation Mono)",
        }
    }

    /// Short identifier used on the command line and in job files.
    pub fn name(self) -> &'static str {
        match self {
            FontChoice::Sans => "sans",
            FontChoice::Serif => "serif",
            FontChoice::Mono => "mono",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            FontChoice::Sans => "LiberationSans-Regular.ttf",
            FontChoice::Serif => "LiberationSerif-Regular.ttf",
            FontChoice::Mono => "LiberationMono-Regular.ttf",
        }
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontChoice {
    type Err = SignscaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FontChoice::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s) || c.label() == s)
            .ok_or_else(|| {
                SignscaleError::validation(format!(
                    "unknown font '{s}' (expected one of: sans, serif, mono)"
                ))
            })
    }
}

/// Font configuration: where each [`FontChoice`] (and the caption face) lives on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontTable {
    sans: PathBuf,
    serif: PathBuf,
    mono: PathBuf,
}

impl Default for FontTable {
    fn default() -> Self {
        Self::from_dir(DEFAULT_FONT_DIR)
    }
}

impl FontTable {
    /// Map every choice to its Liberation file name under `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            sans: dir.join(FontChoice::Sans.file_name()),
            serif: dir.join(FontChoice::Serif.file_name()),
            mono: dir.join(FontChoice::Mono.file_name()),
        }
    }

    /// Table rooted at `$SIGNSCALE_FONT_DIR` when set and non-empty, else at [`DEFAULT_FONT_DIR`].
    pub fn from_env() -> Self {
        Self::from_dir(font_dir_from(std::env::var_os(FONT_DIR_ENV)))
    }

    pub fn with_path(mut self, choice: FontChoice, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match choice {
            FontChoice::Sans => self.sans = path,
            FontChoice::Serif => self.serif = path,
            FontChoice::Mono => self.mono = path,
        }
        self
    }

    pub fn path(&self, choice: FontChoice) -> &Path {
        match choice {
            FontChoice::Sans => &self.sans,
            FontChoice::Serif => &self.serif,
            FontChoice::Mono => &self.mono,
        }
    }

    /// Caption annotations always use the sans face, independent of the sign font.
    pub fn caption_path(&self) -> &Path {
        &self.sans
    }

    pub fn load(&self, choice: FontChoice) -> SignscaleResult<Vec<u8>> {
        read_font(self.path(choice))
    }

    pub fn load_caption(&self) -> SignscaleResult<Vec<u8>> {
        read_font(self.caption_path())
    }
}

fn font_dir_from(var: Option<OsString>) -> PathBuf {
    match var {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_FONT_DIR),
    }
}

fn read_font(path: &Path) -> SignscaleResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| SignscaleError::font(format!("failed to read font '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
