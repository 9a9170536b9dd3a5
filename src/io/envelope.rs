//! JSON output envelope for commands run with `--json`.
//!
//! Every JSON response has the same outer shape so scripts can check
//! `status` / `code` without knowing the payload.

use serde::{Deserialize, Serialize};

use super::ExitCode;

/// Schema version for this envelope format.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Message type for stream discrimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Successful result
    Result,
    /// Error occurred
    Error,
}

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

/// Machine-readable result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    InvalidInput,
    DivisionByZero,
    EmptyInput,
    Overflow,
}

impl ResultCode {
    /// Process exit code matching this result.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Ok => ExitCode::Success,
            Self::InvalidInput => ExitCode::InvalidArguments,
            Self::DivisionByZero | Self::EmptyInput | Self::Overflow => ExitCode::ArithmeticError,
        }
    }
}

/// Unified JSON output envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    #[serde(rename = "type")]
    pub message_type: MessageType,

    pub status: Status,

    pub code: ResultCode,

    /// Unix exit code (0-255)
    pub exit_code: u8,

    /// Human-readable message
    pub message: String,

    /// Result payload (null on error)
    pub data: Option<T>,

    pub meta: Meta,
}

/// Response metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Schema version (semver)
    pub schema_version: String,

    /// Command that produced the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Number of inputs consumed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// Original expression, e.g. `7 / 2`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: None,
            count: None,
            query: None,
        }
    }
}

impl<T> Envelope<T> {
    /// Create a success envelope with data.
    pub fn success(data: T) -> Self {
        Self {
            message_type: MessageType::Result,
            status: Status::Success,
            code: ResultCode::Ok,
            exit_code: ExitCode::Success.into(),
            message: "Operation completed successfully".to_string(),
            data: Some(data),
            meta: Meta::default(),
        }
    }

    /// Create an error envelope. The exit code follows from `code`.
    pub fn error(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Error,
            status: Status::Error,
            code,
            exit_code: code.exit_code().into(),
            message: message.into(),
            data: None,
            meta: Meta::default(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.meta.command = Some(command.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.meta.count = Some(count);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.meta.query = Some(query.into());
        self
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}
