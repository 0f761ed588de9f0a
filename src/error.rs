use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, SnowflakeError>;

/// Represents errors that can occur while configuring, generating or decoding ids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Worker ID does not fit in the configured worker bits
    #[error("With {bits} bits, worker id can't be greater than {max}, got {worker_id}")]
    InvalidWorkerId { worker_id: u64, max: u64, bits: u8 },

    /// Datacenter ID does not fit in the configured datacenter bits
    #[error("With {bits} bits, datacenter id can't be greater than {max}, got {datacenter_id}")]
    InvalidDatacenterId {
        datacenter_id: u64,
        max: u64,
        bits: u8,
    },

    /// Worker, datacenter and sequence bits leave no room for the timestamp
    #[error(
        "Bit layout {worker_id_bits}+{datacenter_id_bits}+{sequence_bits} leaves no timestamp bits (at most 63 allowed)"
    )]
    InvalidBitLayout {
        worker_id_bits: u8,
        datacenter_id_bits: u8,
        sequence_bits: u8,
    },

    /// Initial sequence does not fit in the configured sequence bits
    #[error("Initial sequence {sequence} exceeds maximum {max}")]
    InvalidInitialSequence { sequence: u64, max: u64 },

    /// An environment variable holds a value that can't be parsed
    #[error("Environment variable {key} has invalid value {value:?}")]
    InvalidEnvValue { key: String, value: String },

    /// Error when clock moves backwards (system time issue)
    #[error("Clock moved backwards. Refusing to generate id for {delta} milliseconds")]
    ClockMovedBackwards { delta: u64 },

    /// Current time lies before the configured epoch
    #[error("Current time {now} is before epoch {epoch}")]
    ClockBeforeEpoch { now: u64, epoch: u64 },

    /// Elapsed time since epoch no longer fits in the timestamp field
    #[error("Timestamp offset {offset} exceeds maximum {max} for the configured layout")]
    TimestampOverflow { offset: u64, max: u64 },

    /// Input can't be interpreted as an id
    #[error("Invalid snowflake id {input:?}")]
    InvalidId { input: String },
}

impl SnowflakeError {
    /// Errors raised while validating inputs at construction time
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidWorkerId { .. }
                | Self::InvalidDatacenterId { .. }
                | Self::InvalidBitLayout { .. }
                | Self::InvalidInitialSequence { .. }
                | Self::InvalidEnvValue { .. }
        )
    }

    /// Errors caused by the wall clock at generation time
    pub fn is_clock(&self) -> bool {
        matches!(
            self,
            Self::ClockMovedBackwards { .. }
                | Self::ClockBeforeEpoch { .. }
                | Self::TimestampOverflow { .. }
        )
    }
}
