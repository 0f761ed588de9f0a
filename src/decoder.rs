//! Decoding of snowflake ids back into their fields

use chrono::{DateTime, Utc};

use crate::config::GeneratorConfig;
use crate::error::{Result, SnowflakeError};

/// Fields recovered from an id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedId {
    pub id: u64,
    /// Milliseconds since the configured epoch
    pub timestamp_offset: u64,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: u64,
    pub worker_id: u64,
    pub datacenter_id: u64,
    pub sequence: u64,
}

impl DecodedId {
    /// Calendar date of the id, `None` if out of chrono's range
    pub fn date(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.timestamp_ms).ok()?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}

/// Snowflake id field extractor
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IdDecoder {
    config: GeneratorConfig,
}

impl IdDecoder {
    /// Create a decoder for ids built with `config`
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[inline(always)]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Extract milliseconds since the configured epoch
    #[inline(always)]
    pub const fn timestamp_offset(&self, id: u64) -> u64 {
        id >> self.config.timestamp_shift()
    }

    /// Extract absolute Unix milliseconds
    #[inline(always)]
    pub const fn timestamp_ms(&self, id: u64) -> u64 {
        self.timestamp_offset(id).saturating_add(self.config.epoch())
    }

    #[inline(always)]
    pub const fn worker_id(&self, id: u64) -> u64 {
        (id >> self.config.worker_id_shift()) & self.config.max_worker_id()
    }

    #[inline(always)]
    pub const fn datacenter_id(&self, id: u64) -> u64 {
        (id >> self.config.datacenter_id_shift()) & self.config.max_datacenter_id()
    }

    #[inline(always)]
    pub const fn sequence(&self, id: u64) -> u64 {
        id & self.config.max_sequence()
    }

    /// Decompose an id into all of its fields
    #[inline]
    pub const fn decode(&self, id: u64) -> DecodedId {
        DecodedId {
            id,
            timestamp_offset: self.timestamp_offset(id),
            timestamp_ms: self.timestamp_ms(id),
            worker_id: self.worker_id(id),
            datacenter_id: self.datacenter_id(id),
            sequence: self.sequence(id),
        }
    }

    /// Parse a decimal id and decode it
    ///
    /// Empty, negative, non-numeric and out-of-range input fails with
    /// [`SnowflakeError::InvalidId`].
    pub fn decode_str(&self, input: &str) -> Result<DecodedId> {
        parse_id(input).map(|id| self.decode(id))
    }

    /// Decode an id stored as a signed 64-bit integer
    pub fn decode_i64(&self, id: i64) -> Result<DecodedId> {
        u64::try_from(id)
            .map(|id| self.decode(id))
            .map_err(|_| SnowflakeError::InvalidId {
                input: id.to_string(),
            })
    }
}

/// Decode `id` using the layout of `config`
pub fn decode(id: u64, config: &GeneratorConfig) -> DecodedId {
    IdDecoder::new(*config).decode(id)
}

/// Parse and decode a decimal id using the layout of `config`
pub fn decode_str(input: &str, config: &GeneratorConfig) -> Result<DecodedId> {
    IdDecoder::new(*config).decode_str(input)
}

/// Decode a signed id using the layout of `config`
pub fn decode_i64(id: i64, config: &GeneratorConfig) -> Result<DecodedId> {
    IdDecoder::new(*config).decode_i64(id)
}

/// Parse a decimal id, surrounding whitespace allowed
pub fn parse_id(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SnowflakeError::InvalidId {
            input: input.to_string(),
        });
    }
    trimmed.parse().map_err(|_| SnowflakeError::InvalidId {
        input: input.to_string(),
    })
}
