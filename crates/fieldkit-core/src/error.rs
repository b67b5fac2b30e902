use crate::ThisError;

///
/// Error
///
/// Top-level error for field reads and writes.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Field(#[from] FieldError),
}

impl Error {
    /// Return the validation failure, if this is one.
    #[must_use]
    pub const fn as_validate(&self) -> Option<&ValidateError> {
        match self {
            Self::Validate(err) => Some(err),
            Self::Field(_) => None,
        }
    }
}

///
/// ValidateIssue
///
/// Raw failure reported by a validator, before field context is attached.
/// `kind` is the reporting validator's `ValidatorKind::KIND`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct ValidateIssue {
    pub kind: &'static str,
    pub message: String,
}

impl ValidateIssue {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

///
/// ValidateError
///
/// A rejected field write. Displays as the validator message alone so the
/// caller sees e.g. `-20 must be > 0`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{issue}")]
pub struct ValidateError {
    pub entity: &'static str,
    pub field: &'static str,
    pub storage_key: String,
    pub issue: ValidateIssue,
}

impl ValidateError {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.issue.message
    }
}

///
/// FieldError
///
/// Storage-level failures. None of these occur for records built through
/// their constructors; they surface raw store manipulation or descriptors
/// used outside a registry.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FieldError {
    #[error("field on '{entity}' has no storage key; declare it through an entity registry")]
    Unbound { entity: &'static str },

    #[error("'{key}' has not been assigned")]
    Unset { key: String },

    #[error("'{key}' holds a {found} value, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

///
/// TESTS
///
