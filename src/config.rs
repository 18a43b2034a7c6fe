use crate::error::{CertGenError, Result};
use certgen_common::RenderConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default config location
pub const CONFIG_ENV: &str = "CERTGEN_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub single_line_template: Option<PathBuf>,
    pub multi_line_template: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load from `explicit`, then `$CERTGEN_CONFIG`, then the default path
    ///
    /// A missing default file yields the built-in configuration; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Read a JSON config; relative paths inside it are relative to the file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CertGenError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.render.resolve_font_paths(base);
        for template in [&mut config.single_line_template, &mut config.multi_line_template] {
            if let Some(p) = template.as_mut() {
                if p.is_relative() {
                    *p = base.join(&*p);
                }
            }
        }

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CertGenError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("certgen").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/nonexistent/certgen.json")));
        assert!(matches!(result, Err(CertGenError::FileNotFound(_))));
    }

    #[test]
    fn test_save_and_load_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("conf").join("config.json");

        let mut config = Config::default();
        config.single_line_template = Some(PathBuf::from("single.png"));
        config.render.max_line_width = 80;
        config.save(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        let base = dir.path().join("conf");
        assert_eq!(loaded.render.max_line_width, 80);
        assert_eq!(loaded.single_line_template, Some(base.join("single.png")));
        assert!(loaded.multi_line_template.is_none());
        assert_eq!(
            loaded.render.paper_title.font,
            base.join("fonts/Lora-VariableFont_wght.ttf")
        );
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CertGenError::JsonParse(_))));
    }
}
