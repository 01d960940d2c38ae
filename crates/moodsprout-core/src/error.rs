//! Core error types for moodsprout-core.
//!
//! This module defines the error hierarchy using thiserror. Note that
//! completing a task before any mood is chosen is not an error: the session
//! answers with an advisory directive instead.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for moodsprout-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A mood's task list was empty, so no task can be shown for it
    #[error("Mood '{mood}' has no tasks")]
    EmptyTaskList { mood: String },

    /// The requested mood is not in the task catalog
    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    /// Task catalog errors
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Task catalog errors.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Catalog file could not be read
    #[error("Failed to read task catalog from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// Catalog text is not valid TOML or has the wrong shape
    #[error("Failed to parse task catalog: {0}")]
    ParseFailed(String),

    /// The same mood was declared twice
    #[error("Mood '{0}' is declared more than once")]
    DuplicateMood(String),

    /// The catalog declares no moods at all
    #[error("Task catalog has no moods")]
    NoMoods,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not name a configuration value
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// No home/config directory could be determined or created
    #[error("Configuration directory unavailable: {0}")]
    NoConfigDir(String),
}

impl From<toml::de::Error> for ContentError {
    fn from(err: toml::de::Error) -> Self {
        ContentError::ParseFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
