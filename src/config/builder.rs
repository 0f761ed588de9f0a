//! GeneratorConfig builder for constructing configuration

use super::GeneratorConfig;
use crate::error::{Result, SnowflakeError};

/// Default configuration values
pub(super) const DEFAULT_EPOCH: u64 = 1609459200000; // January 1, 2021 UTC
pub(super) const DEFAULT_WORKER_ID_BITS: u8 = 5;
pub(super) const DEFAULT_DATACENTER_ID_BITS: u8 = 5;
pub(super) const DEFAULT_SEQUENCE_BITS: u8 = 12;
pub(super) const DEFAULT_INITIAL_SEQUENCE: u64 = 0;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 0;

/// Builder for GeneratorConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfigBuilder {
    pub(super) epoch: u64,
    pub(super) worker_id_bits: u8,
    pub(super) datacenter_id_bits: u8,
    pub(super) sequence_bits: u8,
    pub(super) initial_sequence: u64,
    pub(super) spin_yield_every: u32,
}

impl GeneratorConfigBuilder {
    /// Create a new GeneratorConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            worker_id_bits: DEFAULT_WORKER_ID_BITS,
            datacenter_id_bits: DEFAULT_DATACENTER_ID_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            initial_sequence: DEFAULT_INITIAL_SEQUENCE,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set a custom epoch in Unix milliseconds
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the number of bits for the worker ID
    pub const fn worker_id_bits(mut self, bits: u8) -> Self {
        self.worker_id_bits = bits;
        self
    }

    /// Set the number of bits for the datacenter ID
    pub const fn datacenter_id_bits(mut self, bits: u8) -> Self {
        self.datacenter_id_bits = bits;
        self
    }

    /// Set the number of bits for the per-millisecond sequence
    pub const fn sequence_bits(mut self, bits: u8) -> Self {
        self.sequence_bits = bits;
        self
    }

    /// Set the sequence value a fresh generator reports before its first id
    pub const fn initial_sequence(mut self, sequence: u64) -> Self {
        self.initial_sequence = sequence;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 spins tightly
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Validate the layout and build the final GeneratorConfig
    pub fn build(self) -> Result<GeneratorConfig> {
        let layout_bits = self.worker_id_bits as u32
            + self.datacenter_id_bits as u32
            + self.sequence_bits as u32;
        if layout_bits > GeneratorConfig::MAX_LAYOUT_BITS as u32 {
            return Err(SnowflakeError::InvalidBitLayout {
                worker_id_bits: self.worker_id_bits,
                datacenter_id_bits: self.datacenter_id_bits,
                sequence_bits: self.sequence_bits,
            });
        }

        let max = GeneratorConfig::calculate_mask(self.sequence_bits);
        if self.initial_sequence > max {
            return Err(SnowflakeError::InvalidInitialSequence {
                sequence: self.initial_sequence,
                max,
            });
        }

        Ok(GeneratorConfig::from_builder(self))
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<GeneratorConfig> for GeneratorConfigBuilder {
    fn from(config: GeneratorConfig) -> Self {
        Self {
            epoch: config.epoch(),
            worker_id_bits: config.worker_id_bits(),
            datacenter_id_bits: config.datacenter_id_bits(),
            sequence_bits: config.sequence_bits(),
            initial_sequence: config.initial_sequence(),
            spin_yield_every: config.spin_yield_every(),
        }
    }
}

impl TryFrom<GeneratorConfigBuilder> for GeneratorConfig {
    type Error = SnowflakeError;

    fn try_from(builder: GeneratorConfigBuilder) -> Result<Self> {
        builder.build()
    }
}
