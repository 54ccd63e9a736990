use bitcoin::Txid;
use thiserror::Error;

/// Crate-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum ForensicsError {
    /// A script's opcode/push stream could not be walked
    #[error("Malformed script: {reason}")]
    MalformedScript { reason: String },

    /// The length-prefixed payload convention was violated
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(#[from] EncodingError),

    /// Output script matches no known address-producing template
    #[error("Unrecognised script pattern in output {index}: {script_hex}")]
    UnrecognizedScriptPattern { index: usize, script_hex: String },

    /// A previous transaction could not be resolved for fee computation
    #[error("Previous transaction unresolvable for input {input_index} ({txid}:{vout}): {reason}")]
    PreviousTxUnresolvable {
        input_index: usize,
        txid: Txid,
        vout: u32,
        reason: String,
    },

    /// Transaction shape not defined for the requested analysis (e.g. zero outputs)
    #[error("Malformed transaction: {0}")]
    MalformedTransaction(String),

    /// Output index does not exist in the transaction
    #[error("Output index {index} out of range (transaction has {len} outputs)")]
    OutputIndexOutOfRange { index: usize, len: usize },

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Violations of the embedded payload convention
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Fewer bytes than the fixed length/checksum prefix
    #[error("payload prefix missing: {available} bytes available, {required} required")]
    TooShort { available: usize, required: usize },

    /// Declared length runs past the end of the data
    #[error("declared length {declared} exceeds {available} available bytes")]
    LengthExceedsData { declared: usize, available: usize },

    /// CRC-32 of the payload does not match the prefix
    #[error("checksum mismatch: prefix says {expected:#010x}, payload hashes to {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// Payload cannot be described by a 32-bit length
    #[error("payload of {len} bytes exceeds the 32-bit length prefix")]
    PayloadTooLarge { len: usize },
}

/// Failures reported by a transaction lookup collaborator
#[derive(Error, Debug)]
pub enum LookupError {
    /// The lookup has no record of the transaction
    #[error("Transaction not found: {txid}")]
    NotFound { txid: Txid },

    /// The backing store failed
    #[error("Lookup backend error: {0}")]
    Backend(String),
}

/// RPC error types
#[derive(Error, Debug)]
pub enum RpcError {
    /// Failed to establish connection to Bitcoin Core RPC server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// RPC method call failed (covers network errors, authentication, etc.)
    #[error("RPC call failed: {method} - {message}")]
    CallFailed { method: String, message: String },

    /// Failed to deserialise RPC response data
    #[error("Deserialisation failed: {0}")]
    DeserialisationFailed(String),

    /// Retry limit exceeded for RPC operation
    #[error("Max retries exceeded: {operation}")]
    MaxRetriesExceeded { operation: String },

    /// Transaction exists in valid format but not found in blockchain/mempool
    #[error("Transaction not found: {txid}")]
    TransactionNotFound { txid: Txid },
}

/// Crate-wide result type - single point of truth
pub type ForensicsResult<T> = Result<T, ForensicsError>;

/// Result type for lookup collaborators
pub type LookupResult<T> = Result<T, LookupError>;

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;

impl From<RpcError> for LookupError {
    fn from(err: RpcError) -> Self {
        match err {
            RpcError::TransactionNotFound { txid } => LookupError::NotFound { txid },
            other => LookupError::Backend(other.to_string()),
        }
    }
}

impl From<config::ConfigError> for ForensicsError {
    fn from(err: config::ConfigError) -> Self {
        ForensicsError::Config(err.to_string())
    }
}
