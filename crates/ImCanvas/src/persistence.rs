//! Theme persistence as JSON.

use std::fs;
use std::path::Path;

use crate::error::ThemeError;
use crate::theme::Theme;

impl Theme {
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a theme saved with [`Theme::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let theme = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "theme loaded");
        Ok(theme)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ThemeError> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
