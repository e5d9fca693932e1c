use crate::codes::{add_error_code, DataKeys};
use crate::model::{ErrorNode, Metadata};
use serde_json::Value;
use thiserror::Error;

/// Result type alias using CodeError
pub type Result<T> = std::result::Result<T, CodeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and external API responses. The kind-level code
/// is distinct from the caller-assigned error code stored in an error's
/// metadata: the former classifies the failure mechanically, the latter is
/// whatever domain code the raising site chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    OutOfRange,
    AlreadyExists,
    NotFound,

    // Metadata
    MetadataUnavailable,

    // Composite
    Aggregate,

    // Integration/IO
    Io,
    Serialization,
    ExternalService,
    Timeout,
    Concurrency,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::OutOfRange => "ERR_OUT_OF_RANGE",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::MetadataUnavailable => "ERR_METADATA_UNAVAILABLE",
            ExErrorKind::Aggregate => "ERR_AGGREGATE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling, a metadata
/// store for caller-assigned error codes, and the links (a single source,
/// or a list of components for composite errors) that make up an error
/// tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
    metadata: Option<Metadata>,
    source: Option<Box<ExError>>,
    components: Option<Vec<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
            metadata: Some(Metadata::new()),
            source: None,
            components: None,
        }
    }

    /// Create a composite error from several concurrent failures
    pub fn composite(kind: ExErrorKind, components: impl IntoIterator<Item = ExError>) -> Self {
        let mut err = Self::new(kind);
        err.components = Some(components.into_iter().collect());
        err
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Append a component, turning this error into a composite
    pub fn with_component(mut self, component: ExError) -> Self {
        self.components.get_or_insert_with(Vec::new).push(component);
        self
    }

    /// Drop the metadata store, modelling an error type that has none
    pub fn without_metadata(mut self) -> Self {
        self.metadata = None;
        self
    }

    /// Attach an arbitrary metadata entry, creating the store if needed
    pub fn with_metadata_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .set(key, value);
        self
    }

    /// Tag this error with an error code under the default keys
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`add_error_code`].
    pub fn with_error_code(mut self, error_code: &str) -> Result<Self> {
        add_error_code(&mut self, error_code, &DataKeys::default())?;
        Ok(self)
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable kind-level code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// Get the component errors, if this is a composite
    pub fn components(&self) -> Option<&[ExError]> {
        self.components.as_deref()
    }

    /// Get the metadata store, if any
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
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
        if let Some(components) = &self.components {
            write!(f, " ({} components)", components.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // Composites without a source report their first component.
        let next = match &self.components {
            Some(components) if self.source.is_none() => components.first(),
            _ => self.source.as_deref(),
        };
        next.map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl ErrorNode for ExError {
    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    fn metadata_mut(&mut self) -> Option<&mut Metadata> {
        self.metadata.as_mut()
    }

    fn cause(&self) -> Option<&dyn ErrorNode> {
        self.source.as_deref().map(|s| s as &dyn ErrorNode)
    }

    fn components(&self) -> Option<Vec<&dyn ErrorNode>> {
        self.components
            .as_ref()
            .map(|c| c.iter().map(|e| e as &dyn ErrorNode).collect())
    }
}

// ========== End Error Facility ==========

/// Failures of the code store and vector builder
///
/// Only argument and state violations are errors. A code that was never
/// stored is a normal `None`, never a `CodeError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// A string argument is empty or only white space
    #[error("Parameter '{param}' is white space")]
    BlankArgument { param: &'static str },

    /// The plain-code key and the vector key are the same
    #[error("error_code_key cannot equal error_codes_vector_key; both are '{key}'")]
    KeysEqual { key: String },

    /// The target error has no metadata store
    #[error("Parameter '{param}' is unavailable: the error has no metadata store")]
    MetadataUnavailable { param: &'static str },

    /// The key is already present in the error's metadata
    #[error("node.metadata keys already contain '{key}'")]
    KeyOccupied { key: String },
}

impl CodeError {
    /// Get the canonical kind for this failure
    pub fn kind(&self) -> ExErrorKind {
        match self {
            CodeError::BlankArgument { .. } => ExErrorKind::InvalidInput,
            CodeError::KeysEqual { .. } => ExErrorKind::OutOfRange,
            CodeError::MetadataUnavailable { .. } => ExErrorKind::MetadataUnavailable,
            CodeError::KeyOccupied { .. } => ExErrorKind::AlreadyExists,
        }
    }

    /// Get the stable kind-level code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

/// Conversion from CodeError to ExError
impl From<CodeError> for ExError {
    fn from(err: CodeError) -> Self {
        ExError::new(err.kind()).with_message(err.to_string())
    }
}
