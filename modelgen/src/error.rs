//! Error types for the generation engine.
//!
//! A model with no applicable transform is not an error: rendering simply
//! yields nothing. [`CodegenError`] covers transforms that fail while
//! producing a result, plus configuration loading.
//!
//! # Example
//! ```rust,ignore
//! use modelgen::CodegenError;
//!
//! let error = CodegenError::failed("field has no type");
//! if let Some(path) = error.render_path() {
//!     eprintln!("failed at {path}");
//! }
//! ```

use crate::render_stack::RenderPath;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering models or loading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodegenError {
    /// A transform failed while rendering a model.
    ///
    /// `path` is the render stack at the innermost failure, root first.
    /// Enclosing renders propagate this variant unchanged.
    #[error("transform `{transform}` failed while rendering {path}: {source}")]
    Render {
        transform: &'static str,
        path: RenderPath,
        #[source]
        source: Box<CodegenError>,
    },

    /// A transform reported a failure of its own.
    #[error("{0}")]
    Failed(String),

    /// A registered hierarchy cast did not accept the model it was given.
    #[error("model of type `{from}` could not be viewed as `{to}`")]
    Upcast {
        from: &'static str,
        to: &'static str,
    },

    /// The dependency manager was reached while
    /// [`Generator::with_dependencies`](crate::Generator::with_dependencies)
    /// held it, usually by rendering from inside the closure.
    #[error("dependency manager is in use by an enclosing `with_dependencies` call")]
    DependenciesBusy,

    /// Configuration values were rejected.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("formatting failed: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Convenience alias for results returned by the engine.
pub type CodegenResult<T> = Result<T, CodegenError>;

impl CodegenError {
    /// Create a [`CodegenError::Failed`] from any message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Wrap an arbitrary error.
    pub fn other(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Box::new(error))
    }

    /// The render stack recorded when a transform failed, if any.
    pub fn render_path(&self) -> Option<&RenderPath> {
        match self {
            Self::Render { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The name of the transform that failed, if any.
    pub fn failed_transform(&self) -> Option<&'static str> {
        match self {
            Self::Render { transform, .. } => Some(*transform),
            _ => None,
        }
    }

    /// The error underneath any render annotation.
    pub fn root_cause(&self) -> &CodegenError {
        match self {
            Self::Render { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns true if this error already carries a render path.
    pub fn is_annotated(&self) -> bool {
        matches!(self, Self::Render { .. })
    }
}
