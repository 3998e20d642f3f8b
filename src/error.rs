use thiserror::Error;

/// Failure of a value parser to decode a token into its target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected an integer, found '{0}'")]
    Integer(String),
    #[error("integer out of range: '{0}'")]
    OutOfRange(String),
    #[error("expected a number, found '{0}'")]
    Float(String),
    #[error("expected 'true' or 'false', found '{0}'")]
    Bool(String),
}

/// Token does not start with the `--` flag marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to split '{token}'")]
pub struct SplitError {
    pub token: String,
}

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// `--help` was seen. `message` is the rendered help text.
    #[error("{message}")]
    Help { message: String },
    /// Token count outside `[min, max]`. `help` is the rendered help text.
    #[error("expected between {min} and {max} flags, got {given}")]
    Arity { given: usize, min: usize, max: usize, help: String },
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error("flag never set: '{name}'{}", did_you_mean(.suggestions))]
    UnknownFlag { name: String, suggestions: Vec<String> },
    #[error("unable to parse '{token}' for --{flag}: {source}")]
    Decode {
        token: String,
        flag: String,
        #[source]
        source: DecodeError,
    },
    /// Structural problem in a flag set (see [`crate::FlagSet::validate`]).
    #[error("invalid flag set: {0}")]
    Spec(String),
}

impl Error {
    /// Process exit status a CLI front end should use for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Help { .. } | Self::Arity { .. } => 1,
            _ => 2,
        }
    }

    /// Rendered help text, for the errors that carry it.
    #[must_use]
    pub fn help_text(&self) -> Option<&str> {
        match self {
            Self::Help { message } => Some(message),
            Self::Arity { help, .. } => Some(help),
            _ => None,
        }
    }
}

fn did_you_mean(items: &[String]) -> String {
    let alts = match items.len() {
        0 => return String::new(),
        1 => format!("'{}'", items[0]),
        2 => format!("'{}' or '{}'", items[0], items[1]),
        _ => {
            // 'a', 'b', or 'c'
            let mut s = String::new();
            for (i, it) in items.iter().enumerate() {
                if i > 0 {
                    s.push_str(if i + 1 == items.len() { ", or " } else { ", " });
                }
                s.push('\'');
                s.push_str(it);
                s.push('\'');
            }
            s
        }
    };
    format!(". Did you mean {alts}?")
}

/// Result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;
