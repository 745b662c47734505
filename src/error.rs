//! Error Handling Infrastructure
//!
//! This module defines all error types used throughout Roster.
//!
//! # Error Categories
//! - `ConnectionFailed`: database connection errors (fatal at startup)
//! - `QueryFailed`: statement execution errors (recovered at the menu loop)
//! - `PromptFailed`: terminal prompt errors (broken pipe, no TTY)
//! - `ConfigError`: configuration file or environment resolution errors

use thiserror::Error;

/// Main error type for Roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Database connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Statement execution failed
    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    /// Interactive prompt failed
    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    /// Configuration error (unreadable file, invalid JSON, missing env var)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RosterError {
    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed(message.into())
    }

    /// Create a query failed error
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::QueryFailed(message.into())
    }

    /// Create a prompt failed error
    pub fn prompt_failed(message: impl Into<String>) -> Self {
        Self::PromptFailed(message.into())
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
