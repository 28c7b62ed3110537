//! Settings loaded from an optional TOML file.
//!
//! Every field has a default, so an empty file (or none at all) gives the
//! stock layout: `dotnet ../CSharpProgram/bin/CSharpProgram.dll` and
//! `java -cp ../JavaProgram/target/classes com.example.App`, served on
//! `0.0.0.0:8000` for a browser app at `http://localhost:3000`.
//!
//! `server.host` may be an IP literal or a host name; names are resolved
//! when the server starts and the first address returned is bound.

use anyhow::{Context, Result, bail};
use axum::http::HeaderValue;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::consts::{
    DEFAULT_ALLOWED_ORIGIN, DEFAULT_ASSEMBLY, DEFAULT_CLASSPATH, DEFAULT_DOTNET, DEFAULT_HOST,
    DEFAULT_JAVA, DEFAULT_MAIN_CLASS, DEFAULT_PORT, default_config_path,
};

/// Whether the two collaborators run one after the other or together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Parallel,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// The single browser origin allowed by CORS.
    pub allowed_origin: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CSharpSettings {
    pub launcher: String,
    pub assembly: PathBuf,
    pub working_dir: Option<PathBuf>,
}

impl Default for CSharpSettings {
    fn default() -> Self {
        Self {
            launcher: DEFAULT_DOTNET.to_string(),
            assembly: PathBuf::from(DEFAULT_ASSEMBLY),
            working_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct JavaSettings {
    pub launcher: String,
    pub classpath: String,
    pub main_class: String,
    pub working_dir: Option<PathBuf>,
}

impl Default for JavaSettings {
    fn default() -> Self {
        Self {
            launcher: DEFAULT_JAVA.to_string(),
            classpath: DEFAULT_CLASSPATH.to_string(),
            main_class: DEFAULT_MAIN_CLASS.to_string(),
            working_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub execution: ExecutionMode,
    pub server: ServerSettings,
    pub csharp: CSharpSettings,
    pub java: JavaSettings,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid config file")
    }

    /// Read settings from a file that must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Resolve settings: an explicit path must exist; otherwise the default
    /// file is used when present, and built-in defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.csharp.launcher.trim().is_empty() {
            bail!("csharp.launcher must not be empty");
        }
        if self.csharp.assembly.as_os_str().is_empty() {
            bail!("csharp.assembly must not be empty");
        }
        if self.java.launcher.trim().is_empty() {
            bail!("java.launcher must not be empty");
        }
        if self.java.main_class.trim().is_empty() {
            bail!("java.main_class must not be empty");
        }
        HeaderValue::from_str(&self.server.allowed_origin).with_context(|| {
            format!(
                "server.allowed_origin is not a valid origin: {:?}",
                self.server.allowed_origin
            )
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.execution, ExecutionMode::Sequential);
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.server.allowed_origin, "http://localhost:3000");
        assert_eq!(settings.java.main_class, "com.example.App");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            execution = "parallel"

            [server]
            port = 9000

            [java]
            classpath = "/opt/app/classes"
            "#,
        )
        .unwrap();

        assert_eq!(settings.execution, ExecutionMode::Parallel);
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.java.classpath, "/opt/app/classes");
        assert_eq!(settings.java.launcher, "java");
        assert_eq!(settings.csharp, CSharpSettings::default());
    }

    #[test]
    fn unknown_execution_mode_is_rejected() {
        assert!(Settings::from_toml(r#"execution = "sometimes""#).is_err());
    }

    #[test]
    fn validate_rejects_empty_launcher() {
        let mut settings = Settings::default();
        settings.csharp.launcher = "  ".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("csharp.launcher"));
    }

    #[test]
    fn validate_rejects_bad_origin() {
        let mut settings = Settings::default();
        settings.server.allowed_origin = "http://bad\norigin".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[csharp]\nlauncher = \"/usr/share/dotnet/dotnet\"\nworking_dir = \"/srv/cs\"\n",
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.csharp.launcher, "/usr/share/dotnet/dotnet");
        assert_eq!(settings.csharp.working_dir, Some(PathBuf::from("/srv/cs")));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
