use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("not initialized: no recipient declaration found")]
    NotInitialized,

    #[error("already initialized (use --force to add a recipient)")]
    AlreadyInitialized,

    #[error("secret already exists: {0}")]
    AlreadyExists(String),

    #[error("secret does not exist: {0}")]
    NotFound(String),

    #[error("no attribute '{0}' in secret")]
    AttributeNotFound(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("edit aborted")]
    EditAborted,

    #[error("required tool not found: {0}")]
    DependencyMissing(String),

    #[error("external tool failed: {0}")]
    ToolFailed(String),

    #[error("unsupported session type")]
    UnsupportedSession,

    #[error("invalid secret name: {0}")]
    InvalidName(String),

    #[error("invalid attribute key: {0}")]
    InvalidAttribute(String),

    #[error("password charset is empty")]
    EmptyCharset,

    #[error("wordlist unavailable: {0}")]
    Wordlist(String),

    #[error("bad arguments: {0}")]
    BadArguments(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("secret is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
