//! Generation settings.
//!
//! Settings are read from a `modelgen.toml` file:
//!
//! ```toml
//! [imports]
//! ignored_packages = ["java.lang"]
//!
//! [format]
//! indent = "spaces4"
//! line_ending = "lf"
//! ```

use crate::dependency::DependencyManager;
use crate::error::{CodegenError, CodegenResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "modelgen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Import handling.
    pub imports: ImportsConfig,

    /// Text layout of generated code.
    pub format: FormatConfig,
}

/// Import handling configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportsConfig {
    /// Packages whose types never need an import line.
    pub ignored_packages: Vec<String>,
}

/// Text layout configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub indent: IndentStyle,
    pub line_ending: LineEnding,
}

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Two spaces per level
    Spaces2,

    /// Four spaces per level
    #[default]
    Spaces4,

    /// One tab per level
    Tabs,
}

impl IndentStyle {
    /// Get the indentation string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndentStyle::Spaces2 => "  ",
            IndentStyle::Spaces4 => "    ",
            IndentStyle::Tabs => "\t",
        }
    }

    /// Create an indentation string for the given depth.
    pub fn indent(&self, depth: usize) -> String {
        self.as_str().repeat(depth)
    }
}

/// Line ending style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Unix-style line endings (LF)
    #[default]
    Lf,

    /// Windows-style line endings (CRLF)
    CrLf,
}

impl LineEnding {
    /// Get the line ending string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl FormatConfig {
    /// Indent every non-empty line of `text` by one level.
    pub fn indent_block(&self, text: &str) -> String {
        let newline = self.line_ending.as_str();
        let indent = self.indent.as_str();
        let mut out = String::with_capacity(text.len());
        for (i, line) in text.split(newline).enumerate() {
            if i > 0 {
                out.push_str(newline);
            }
            if !line.is_empty() {
                out.push_str(indent);
                out.push_str(line);
            }
        }
        out
    }

    /// Join `lines`, terminating each with the configured line ending.
    pub fn lines<I, S>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let newline = self.line_ending.as_str();
        lines.into_iter().fold(String::new(), |mut out, line| {
            out.push_str(line.as_ref());
            out.push_str(newline);
            out
        })
    }
}

impl CodegenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> CodegenResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CodegenResult<Self> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            debug!(path = %config_path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| CodegenError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config = Self::from_toml_str(&content)?;
        debug!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Add a package whose types never need an import line.
    pub fn with_ignored_package(mut self, package: impl Into<String>) -> Self {
        self.imports.ignored_packages.push(package.into());
        self
    }

    /// Set the indentation style.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.format.indent = indent;
        self
    }

    /// Set the line ending style.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.format.line_ending = line_ending;
        self
    }

    /// The dependency manager every unit starts from.
    pub fn dependency_manager(&self) -> DependencyManager {
        DependencyManager::with_ignored_packages(self.imports.ignored_packages.iter().cloned())
    }

    fn validate(&self) -> CodegenResult<()> {
        for package in &self.imports.ignored_packages {
            if package.is_empty() || package.starts_with('.') || package.ends_with('.') {
                return Err(CodegenError::Config(format!(
                    "`{package}` is not a valid package name"
                )));
            }
        }
        Ok(())
    }
}
