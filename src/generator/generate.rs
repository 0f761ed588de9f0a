//! ID generation logic

use tracing::{trace, warn};

use super::state::Tick;
use super::time::TimeSource;
use super::IdGenerator;
use crate::error::{Result, SnowflakeError};

impl<T: TimeSource> IdGenerator<T> {
    /// Generate the next id
    ///
    /// Fails with [`SnowflakeError::ClockMovedBackwards`] when the clock reads
    /// earlier than the last issued id; the generator does not retry and its
    /// state is left untouched. When the current millisecond has no sequence
    /// numbers left, spins until the clock advances.
    pub fn next_id(&mut self) -> Result<u64> {
        let now = self.now_ms();

        let (timestamp, sequence) = match self.state.observe(now, self.config.max_sequence()) {
            Tick::Advanced => (now, 0),
            Tick::Same => (now, self.state.sequence() + 1),
            Tick::Exhausted => {
                trace!(timestamp = now, "sequence exhausted, waiting for next millisecond");
                (self.wait_next_millis(now), 0)
            }
            Tick::Regressed { delta } => {
                warn!(
                    delta,
                    worker_id = self.worker_id,
                    datacenter_id = self.datacenter_id,
                    "clock moved backwards"
                );
                return Err(SnowflakeError::ClockMovedBackwards { delta });
            }
        };

        let id = self.assemble_id(timestamp, sequence)?;
        self.state.commit(timestamp, sequence);
        Ok(id)
    }

    /// Generate `count` ids in order, stopping at the first error
    pub fn next_ids(&mut self, count: usize) -> Result<Vec<u64>> {
        (0..count).map(|_| self.next_id()).collect()
    }
}
