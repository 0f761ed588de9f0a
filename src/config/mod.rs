//! Configuration for the snowflake generator and decoder
//!
//! A config fixes the epoch and the bit widths of each id field. Producers
//! and decoders must agree on it; ids carry no layout tag of their own.

mod builder;

use std::str::FromStr;

pub use builder::GeneratorConfigBuilder;
use builder::{
    DEFAULT_DATACENTER_ID_BITS, DEFAULT_EPOCH, DEFAULT_INITIAL_SEQUENCE, DEFAULT_SEQUENCE_BITS,
    DEFAULT_SPIN_YIELD_EVERY, DEFAULT_WORKER_ID_BITS,
};

use crate::error::{Result, SnowflakeError};

pub const ENV_EPOCH: &str = "SNOWFLAKE_EPOCH";
pub const ENV_WORKER_ID_BITS: &str = "SNOWFLAKE_WORKER_ID_BITS";
pub const ENV_DATACENTER_ID_BITS: &str = "SNOWFLAKE_DATACENTER_ID_BITS";
pub const ENV_SEQUENCE_BITS: &str = "SNOWFLAKE_SEQUENCE_BITS";

/// Configuration for the snowflake generator
/// Copy-optimized with shifts and masks derived once at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "GeneratorConfigBuilder", try_from = "GeneratorConfigBuilder")
)]
pub struct GeneratorConfig {
    epoch: u64,
    worker_id_bits: u8,
    datacenter_id_bits: u8,
    sequence_bits: u8,
    initial_sequence: u64,
    spin_yield_every: u32,

    worker_id_shift: u8,
    datacenter_id_shift: u8,
    timestamp_shift: u8,
    worker_id_mask: u64,
    datacenter_id_mask: u64,
    sequence_mask: u64,
    timestamp_mask: u64,
}

impl GeneratorConfig {
    /// Upper bound on worker + datacenter + sequence bits
    pub const MAX_LAYOUT_BITS: u8 = 63;

    /// Calculate mask for given number of bits (at most 63)
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u64 {
        (1u64 << bits) - 1
    }

    fn from_builder(b: GeneratorConfigBuilder) -> Self {
        let worker_id_shift = b.sequence_bits;
        let datacenter_id_shift = b.sequence_bits + b.worker_id_bits;
        let timestamp_shift = b.sequence_bits + b.worker_id_bits + b.datacenter_id_bits;
        Self {
            epoch: b.epoch,
            worker_id_bits: b.worker_id_bits,
            datacenter_id_bits: b.datacenter_id_bits,
            sequence_bits: b.sequence_bits,
            initial_sequence: b.initial_sequence,
            spin_yield_every: b.spin_yield_every,
            worker_id_shift,
            datacenter_id_shift,
            timestamp_shift,
            worker_id_mask: Self::calculate_mask(b.worker_id_bits),
            datacenter_id_mask: Self::calculate_mask(b.datacenter_id_bits),
            sequence_mask: Self::calculate_mask(b.sequence_bits),
            timestamp_mask: u64::MAX >> timestamp_shift,
        }
    }

    /// Create a new configuration builder
    pub const fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Load a config from `SNOWFLAKE_*` environment variables
    ///
    /// Unset variables keep their defaults. A variable that is set but can't
    /// be parsed fails with [`SnowflakeError::InvalidEnvValue`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GeneratorConfig::from_env`] with a caller-supplied lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(epoch) = parse_var(&lookup, ENV_EPOCH)? {
            builder = builder.epoch(epoch);
        }
        if let Some(bits) = parse_var(&lookup, ENV_WORKER_ID_BITS)? {
            builder = builder.worker_id_bits(bits);
        }
        if let Some(bits) = parse_var(&lookup, ENV_DATACENTER_ID_BITS)? {
            builder = builder.datacenter_id_bits(bits);
        }
        if let Some(bits) = parse_var(&lookup, ENV_SEQUENCE_BITS)? {
            builder = builder.sequence_bits(bits);
        }
        builder.build()
    }

    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn worker_id_bits(&self) -> u8 {
        self.worker_id_bits
    }

    #[inline(always)]
    pub const fn datacenter_id_bits(&self) -> u8 {
        self.datacenter_id_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    /// Width of the timestamp field
    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        64 - self.timestamp_shift
    }

    #[inline(always)]
    pub const fn initial_sequence(&self) -> u64 {
        self.initial_sequence
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn max_worker_id(&self) -> u64 {
        self.worker_id_mask
    }

    #[inline(always)]
    pub const fn max_datacenter_id(&self) -> u64 {
        self.datacenter_id_mask
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u64 {
        self.sequence_mask
    }

    /// Largest representable offset from the epoch, in milliseconds
    #[inline(always)]
    pub const fn max_timestamp_offset(&self) -> u64 {
        self.timestamp_mask
    }

    #[inline(always)]
    pub(crate) const fn worker_id_shift(&self) -> u8 {
        self.worker_id_shift
    }

    #[inline(always)]
    pub(crate) const fn datacenter_id_shift(&self) -> u8 {
        self.datacenter_id_shift
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from_builder(GeneratorConfigBuilder {
            epoch: DEFAULT_EPOCH,
            worker_id_bits: DEFAULT_WORKER_ID_BITS,
            datacenter_id_bits: DEFAULT_DATACENTER_ID_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            initial_sequence: DEFAULT_INITIAL_SEQUENCE,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(SnowflakeError::InvalidEnvValue {
                key: key.to_string(),
                value: raw,
            }),
        },
    }
}
