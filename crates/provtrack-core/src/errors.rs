use provtrack_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ProvenanceError
pub type Result<T> = std::result::Result<T, ProvenanceError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling
/// and assertions in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Contract violations
    InvalidInput,
    InvalidConfig,

    // Record store
    NotFound,
    AlreadyExists,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) plus whatever context the failing
/// operation could attach: the operation name, the record label and project
/// involved, and the id of the comparison request.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    record_label: Option<String>,
    project: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            record_label: None,
            project: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add record label context
    pub fn with_record_label(mut self, label: impl Into<String>) -> Self {
        self.record_label = Some(label.into());
        self
    }

    /// Add project context
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn record_label(&self) -> Option<&str> {
        self.record_label.as_deref()
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

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
        if let Some(project) = &self.project {
            write!(f, " (project: {})", project)?;
        }
        if let Some(label) = &self.record_label {
            write!(f, " (record: {})", label)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for provtrack operations
///
/// Computing a difference or a pairing never fails; these errors come from
/// the surrounding plumbing: looking records up, decoding record documents
/// and loading configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProvenanceError {
    // ===== Record store =====
    /// No record with this label exists in the project
    #[error("Record not found: {label} (project {project})")]
    RecordNotFound { project: String, label: String },

    /// A record with this label is already stored in the project
    #[error("Record already exists: {label} (project {project})")]
    DuplicateRecord { project: String, label: String },

    // ===== Contract violations =====
    /// Parameter document is not a mapping at its root
    #[error("Invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// Similarity threshold outside [0, 1] or not a finite number
    #[error("Invalid similarity threshold: {value}")]
    InvalidThreshold { value: f64 },

    // ===== Configuration =====
    /// Configuration document could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Configuration file could not be read
    #[error("Cannot read configuration file {path}: {message}")]
    ConfigIo { path: String, message: String },

    // ===== Generic =====
    /// JSON encoding/decoding failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<serde_json::Error> for ProvenanceError {
    fn from(err: serde_json::Error) -> Self {
        ProvenanceError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ProvenanceError {
    fn from(err: toml::de::Error) -> Self {
        ProvenanceError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

/// Conversion from the domain error to the canonical structured error
impl From<ProvenanceError> for ExError {
    fn from(err: ProvenanceError) -> Self {
        match err {
            ProvenanceError::RecordNotFound { project, label } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_project(project)
                    .with_record_label(label)
                    .with_message("Record not found")
            }
            ProvenanceError::DuplicateRecord { project, label } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_project(project)
                    .with_record_label(label)
                    .with_message("Record already exists")
            }
            ProvenanceError::InvalidParameters { reason } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_message(format!("Invalid parameters: {}", reason))
            }
            ProvenanceError::InvalidThreshold { value } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!(
                    "Similarity threshold must be a finite number in [0, 1], got {}",
                    value
                )),
            ProvenanceError::InvalidConfig { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_message(format!("Invalid configuration: {}", reason)),
            ProvenanceError::ConfigIo { path, message } => ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_message(format!("{}: {}", path, message)),
            ProvenanceError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            ProvenanceError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
