//! Core snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last issued millisecond and sequence
//! - `time` - Wall-clock time sources
//! - `wait` - Spin strategy on sequence exhaustion
//! - `generate` - ID generation logic

mod generate;
mod state;
pub mod time;
mod wait;

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::decoder::IdDecoder;
use crate::error::{Result, SnowflakeError};
use crate::identity;

use state::State;
use time::{SystemClock, TimeSource};
use wait::spin_until_next_millis;

/// Snowflake ID generator
///
/// Produces strictly increasing ids for one `(worker_id, datacenter_id)`
/// pair as long as the clock does not move backward. A generator is a
/// single writer: [`IdGenerator::next_id`] takes `&mut self`, so sharing one
/// instance between threads requires an external lock such as
/// `Mutex<IdGenerator>`. Producers that run side by side should each get a
/// distinct id pair instead.
#[derive(Debug)]
pub struct IdGenerator<T: TimeSource = SystemClock> {
    state: State,
    node_prefix: u64,
    worker_id: u64,
    datacenter_id: u64,
    config: GeneratorConfig,
    time: T,
}

impl IdGenerator<SystemClock> {
    /// Create with default configuration and the system clock
    pub fn new(worker_id: u64, datacenter_id: u64) -> Result<Self> {
        Self::with_config(worker_id, datacenter_id, GeneratorConfig::default())
    }

    /// Create with custom configuration and the system clock
    pub fn with_config(worker_id: u64, datacenter_id: u64, config: GeneratorConfig) -> Result<Self> {
        Self::with_time_source(worker_id, datacenter_id, config, SystemClock)
    }

    /// Create using ids derived from the host's network configuration
    ///
    /// See [`identity::worker_and_datacenter_id`]. Derived ids lie in
    /// `0..=31`, so layouts narrower than 5 bits per field may reject them.
    pub fn from_node_identity(config: GeneratorConfig) -> Result<Self> {
        let (worker_id, datacenter_id) = identity::worker_and_datacenter_id();
        Self::with_config(worker_id, datacenter_id, config)
    }
}

impl<T: TimeSource> IdGenerator<T> {
    /// Create with custom configuration and time source
    pub fn with_time_source(
        worker_id: u64,
        datacenter_id: u64,
        config: GeneratorConfig,
        time: T,
    ) -> Result<Self> {
        Self::validate_ids(worker_id, datacenter_id, &config)?;
        debug!(
            worker_id,
            datacenter_id,
            epoch = config.epoch(),
            sequence_bits = config.sequence_bits(),
            "snowflake generator initialized"
        );
        Ok(Self {
            state: State::new(config.initial_sequence()),
            node_prefix: Self::compute_node_prefix(worker_id, datacenter_id, &config),
            worker_id,
            datacenter_id,
            config,
            time,
        })
    }

    fn validate_ids(worker_id: u64, datacenter_id: u64, config: &GeneratorConfig) -> Result<()> {
        let max = config.max_worker_id();
        if worker_id > max {
            return Err(SnowflakeError::InvalidWorkerId {
                worker_id,
                max,
                bits: config.worker_id_bits(),
            });
        }
        let max = config.max_datacenter_id();
        if datacenter_id > max {
            return Err(SnowflakeError::InvalidDatacenterId {
                datacenter_id,
                max,
                bits: config.datacenter_id_bits(),
            });
        }
        Ok(())
    }

    #[inline(always)]
    fn compute_node_prefix(worker_id: u64, datacenter_id: u64, config: &GeneratorConfig) -> u64 {
        (datacenter_id << config.datacenter_id_shift()) | (worker_id << config.worker_id_shift())
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> u64 {
        self.worker_id
    }

    #[inline(always)]
    pub const fn datacenter_id(&self) -> u64 {
        self.datacenter_id
    }

    /// Sequence of the last issued id, or the initial sequence before the first
    #[inline(always)]
    pub const fn current_sequence(&self) -> u64 {
        self.state.sequence()
    }

    /// Unix millisecond of the last issued id, `None` before the first
    #[inline(always)]
    pub const fn last_timestamp(&self) -> Option<u64> {
        self.state.last_timestamp()
    }

    #[inline(always)]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Decoder matching this generator's layout
    pub fn decoder(&self) -> IdDecoder {
        IdDecoder::new(self.config)
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> u64 {
        self.time.current_millis()
    }

    pub(crate) fn wait_next_millis(&self, from_ts: u64) -> u64 {
        spin_until_next_millis(from_ts, self.config.spin_yield_every(), || self.now_ms())
    }

    /// Pack a Unix millisecond and sequence with this generator's node bits
    #[inline]
    pub(crate) fn assemble_id(&self, timestamp: u64, sequence: u64) -> Result<u64> {
        let epoch = self.config.epoch();
        let offset = timestamp
            .checked_sub(epoch)
            .ok_or(SnowflakeError::ClockBeforeEpoch {
                now: timestamp,
                epoch,
            })?;
        let max = self.config.max_timestamp_offset();
        if offset > max {
            return Err(SnowflakeError::TimestampOverflow { offset, max });
        }
        Ok((offset << self.config.timestamp_shift()) | self.node_prefix | sequence)
    }
}
