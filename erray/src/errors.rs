//! Failures raised while building a registry.

pub type Result<T> = std::result::Result<T, BuildError>;

/// A malformed spec list.
///
/// Element-level variants carry the zero-based position of the offending spec
/// and a debug rendering of the value that failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("error definition expects a list of specs, instead got: {found}")]
    InvalidSpecContainer { found: String },
    #[error("error definition expects a non-empty list of specs")]
    EmptySpecContainer,
    #[error("spec #{index} is an already constructed error ({found}); a name or a spec record is expected")]
    SpecIsErrorInstance { index: usize, found: String },
    #[error("spec #{index} is missing a \"name\" field: {found}")]
    MissingName { index: usize, found: String },
    #[error("spec #{index} expects \"message\" to be a string or a function, instead got {type_name}: {found}")]
    InvalidMessageType {
        index: usize,
        type_name: &'static str,
        found: String,
    },
    #[error("spec #{index} expects \"code\" to be {expected}, instead got {type_name}: {found}")]
    InvalidCodeType {
        index: usize,
        /// What was expected: any number, or an integer within the `i64` range.
        expected: &'static str,
        type_name: &'static str,
        found: String,
    },
    #[error("spec #{index} must be a name or a spec record, instead got: {found}")]
    InvalidSpecShape { index: usize, found: String },
    #[error("spec #{index} expects \"name\" to be a string, instead got: {found}")]
    InvalidNameType { index: usize, found: String },
    #[error("spec #{index} name must contain only ASCII letters, instead got {name:?}")]
    InvalidNameFormat { index: usize, name: String },
    #[error("spec #{index} reuses the name {name:?}; names must be unique")]
    DuplicateName { index: usize, name: String },
}

/// Fieldless discriminant of [`BuildError`], for matching without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildErrorKind {
    InvalidSpecContainer,
    EmptySpecContainer,
    SpecIsErrorInstance,
    MissingName,
    InvalidMessageType,
    InvalidCodeType,
    InvalidSpecShape,
    InvalidNameType,
    InvalidNameFormat,
    DuplicateName,
}

impl BuildError {
    pub fn kind(&self) -> BuildErrorKind {
        match self {
            BuildError::InvalidSpecContainer { .. } => BuildErrorKind::InvalidSpecContainer,
            BuildError::EmptySpecContainer => BuildErrorKind::EmptySpecContainer,
            BuildError::SpecIsErrorInstance { .. } => BuildErrorKind::SpecIsErrorInstance,
            BuildError::MissingName { .. } => BuildErrorKind::MissingName,
            BuildError::InvalidMessageType { .. } => BuildErrorKind::InvalidMessageType,
            BuildError::InvalidCodeType { .. } => BuildErrorKind::InvalidCodeType,
            BuildError::InvalidSpecShape { .. } => BuildErrorKind::InvalidSpecShape,
            BuildError::InvalidNameType { .. } => BuildErrorKind::InvalidNameType,
            BuildError::InvalidNameFormat { .. } => BuildErrorKind::InvalidNameFormat,
            BuildError::DuplicateName { .. } => BuildErrorKind::DuplicateName,
        }
    }

    /// Position of the offending spec, if the failure concerns a single element.
    pub fn index(&self) -> Option<usize> {
        match self {
            BuildError::InvalidSpecContainer { .. } | BuildError::EmptySpecContainer => None,
            BuildError::SpecIsErrorInstance { index, .. }
            | BuildError::MissingName { index, .. }
            | BuildError::InvalidMessageType { index, .. }
            | BuildError::InvalidCodeType { index, .. }
            | BuildError::InvalidSpecShape { index, .. }
            | BuildError::InvalidNameType { index, .. }
            | BuildError::InvalidNameFormat { index, .. }
            | BuildError::DuplicateName { index, .. } => Some(*index),
        }
    }
}
