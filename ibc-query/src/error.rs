use displaydoc::Display;
use ibc_core_client::types::error::ClientError;
use ibc_core_host::types::error::{CodecError, DecodingError, IdentifierError};

/// Codespace of failures not owned by the client module: malformed requests
/// and internal errors.
pub const SDK_CODESPACE: &str = "sdk";
/// Codespace of the client module's domain failures.
pub const CLIENT_CODESPACE: &str = "client";

pub const CODE_INTERNAL: u32 = 1;
pub const CODE_UNKNOWN_REQUEST: u32 = 6;

pub const CODE_CLIENT_EXISTS: u32 = 101;
pub const CODE_CLIENT_NOT_FOUND: u32 = 102;
pub const CODE_CLIENT_FROZEN: u32 = 103;
pub const CODE_CONSENSUS_STATE_NOT_FOUND: u32 = 104;
pub const CODE_INVALID_HEIGHT: u32 = 105;
pub const CODE_CONFLICTING_UPDATE: u32 = 106;
pub const CODE_ROOT_NOT_FOUND: u32 = 107;
pub const CODE_COMMITTER_NOT_FOUND: u32 = 108;
pub const CODE_INVALID_CLIENT: u32 = 109;

/// The main error type of the ibc-query crate. This type mainly
/// serves to surface lower-level errors that occur when executing
/// ibc-query's codepaths.
#[derive(Debug, Display)]
pub enum QueryError {
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// client error: `{0}`
    Client(ClientError),
    /// codec error: `{0}`
    Codec(CodecError),
}

impl QueryError {
    pub fn invalid_json<T: ToString>(description: T) -> Self {
        Self::Decoding(DecodingError::InvalidJson {
            description: description.to_string(),
        })
    }

    pub fn unknown_path<T: ToString>(path: T) -> Self {
        Self::Decoding(DecodingError::UnknownQueryPath(path.to_string()))
    }

    /// The codespace the error is reported under.
    pub fn codespace(&self) -> &'static str {
        self.classify().0
    }

    /// The numeric code the error is reported with, unique within its
    /// codespace.
    pub fn code(&self) -> u32 {
        self.classify().1
    }

    fn classify(&self) -> (&'static str, u32) {
        match self {
            Self::Decoding(_) => (SDK_CODESPACE, CODE_UNKNOWN_REQUEST),
            Self::Codec(_) => (SDK_CODESPACE, CODE_INTERNAL),
            Self::Client(e) => classify_client_error(e),
        }
    }
}

fn classify_client_error(e: &ClientError) -> (&'static str, u32) {
    let code = match e {
        ClientError::Decoding(_) => return (SDK_CODESPACE, CODE_UNKNOWN_REQUEST),
        ClientError::Host(_) | ClientError::Codec(_) => return (SDK_CODESPACE, CODE_INTERNAL),
        ClientError::AlreadyExists { .. } => CODE_CLIENT_EXISTS,
        ClientError::ClientNotFound { .. } => CODE_CLIENT_NOT_FOUND,
        ClientError::ClientFrozen { .. } => CODE_CLIENT_FROZEN,
        ClientError::ConsensusStateNotFound { .. } => CODE_CONSENSUS_STATE_NOT_FOUND,
        ClientError::InvalidHeight { .. } | ClientError::ZeroHeight => CODE_INVALID_HEIGHT,
        ClientError::ConflictingUpdate { .. } => CODE_CONFLICTING_UPDATE,
        ClientError::RootNotFound { .. } => CODE_ROOT_NOT_FOUND,
        ClientError::CommitterNotFound { .. } => CODE_COMMITTER_NOT_FOUND,
        ClientError::MismatchedHeight { .. }
        | ClientError::InvalidTrustingPeriod { .. }
        | ClientError::InvalidStatus(_)
        | ClientError::MissingRawField { .. }
        | ClientError::InvalidRawField { .. } => CODE_INVALID_CLIENT,
    };
    (CLIENT_CODESPACE, code)
}

/// The caller-visible form of a failed query.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub codespace: String,
    pub code: u32,
    pub log: String,
}

impl From<&QueryError> for ErrorResponse {
    fn from(e: &QueryError) -> Self {
        Self {
            codespace: e.codespace().to_string(),
            code: e.code(),
            log: e.to_string(),
        }
    }
}

impl From<QueryError> for ErrorResponse {
    fn from(e: QueryError) -> Self {
        Self::from(&e)
    }
}

impl From<ClientError> for QueryError {
    fn from(e: ClientError) -> Self {
        Self::Client(e)
    }
}

impl From<DecodingError> for QueryError {
    fn from(e: DecodingError) -> Self {
        Self::Decoding(e)
    }
}

impl From<IdentifierError> for QueryError {
    fn from(e: IdentifierError) -> Self {
        Self::Decoding(DecodingError::Identifier(e))
    }
}

impl From<CodecError> for QueryError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decoding(e) => Some(e),
            Self::Client(e) => Some(e),
            Self::Codec(e) => Some(e),
        }
    }
}
