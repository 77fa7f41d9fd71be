use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown pattern '{name}'{}", suggestion_hint(.suggestion))]
    UnknownPattern {
        name: String,
        suggestion: Option<String>,
    },

    #[error("No command assigned to the remote control")]
    NoCommand,

    #[error("Build finished without the {part} step")]
    MissingPart { part: &'static str },

    #[error("Memento index {index} out of range (caretaker holds {len})")]
    MementoOutOfRange { index: usize, len: usize },

    #[error("Failed to parse expression at position {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("Undefined variable '{0}'")]
    UndefinedVariable(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Invalid shape type '{0}' (expected circle or square)")]
    UnknownShape(String),

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{name}'?)"),
        None => String::new(),
    }
}

impl PatternError {
    pub fn unknown_pattern(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownPattern {
            name: name.into(),
            suggestion,
        }
    }

    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
