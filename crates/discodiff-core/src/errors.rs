use thiserror::Error;

/// Result type alias using DiffError
pub type Result<T> = std::result::Result<T, DiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, log assertions, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Comparison
    /// The input pair violates a structural precondition of the engine
    /// (e.g. two sibling resources sharing a name)
    PreconditionViolation,

    // Loading
    /// Document bytes are not valid UTF-8 JSON or do not match the discovery schema
    InvalidDocument,
    /// Configuration file is unreadable or malformed
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::PreconditionViolation => "ERR_PRECONDITION_VIOLATION",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus free-form
/// context for debugging. Every [`DiffError`] converts into one.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (a dotted element id or a file path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for discodiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffError {
    /// Two sibling elements of a name-keyed sequence share the same name,
    /// so the sequence has no well-defined keyed reading
    #[error("Duplicate key '{key}' in {collection}")]
    DuplicateKey { collection: String, key: String },

    /// Document text could not be parsed into the document model
    #[error("Invalid document: {reason}")]
    InvalidDocument { reason: String },

    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Filesystem access failed
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    /// A diff tree could not be serialized
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl From<DiffError> for ExError {
    fn from(err: DiffError) -> Self {
        match err {
            DiffError::DuplicateKey { collection, key } => {
                ExError::new(ExErrorKind::PreconditionViolation)
                    .with_op("index_by_name")
                    .with_entity_id(collection)
                    .with_message(format!("duplicate key '{}'", key))
            }

            DiffError::InvalidDocument { reason } => {
                ExError::new(ExErrorKind::InvalidDocument).with_message(reason)
            }

            DiffError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            DiffError::Io { path, reason } => ExError::new(ExErrorKind::Io)
                .with_entity_id(path)
                .with_message(reason),

            DiffError::Serialization { reason } => {
                ExError::new(ExErrorKind::Serialization).with_message(reason)
            }
        }
    }
}
