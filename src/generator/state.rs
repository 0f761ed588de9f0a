//! Mutable per-generator state: last issued millisecond and sequence

/// Outcome of observing the clock against the last issued millisecond
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tick {
    /// Clock moved past the last millisecond (or nothing was issued yet)
    Advanced,
    /// Same millisecond, sequence still has room
    Same,
    /// Same millisecond, sequence wrapped to 0
    Exhausted,
    /// Clock is behind the last millisecond by `delta`
    Regressed { delta: u64 },
}

/// Generator state, owned and mutated by a single generator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    last_timestamp: Option<u64>,
    sequence: u64,
}

impl State {
    pub(crate) const fn new(initial_sequence: u64) -> Self {
        Self {
            last_timestamp: None,
            sequence: initial_sequence,
        }
    }

    #[inline(always)]
    pub(crate) const fn last_timestamp(&self) -> Option<u64> {
        self.last_timestamp
    }

    #[inline(always)]
    pub(crate) const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Compare `now` against the last millisecond without mutating
    #[inline]
    pub(crate) fn observe(&self, now: u64, sequence_mask: u64) -> Tick {
        match self.last_timestamp {
            Some(last) if now < last => Tick::Regressed { delta: last - now },
            Some(last) if now == last => {
                if (self.sequence + 1) & sequence_mask == 0 {
                    Tick::Exhausted
                } else {
                    Tick::Same
                }
            }
            _ => Tick::Advanced,
        }
    }

    /// Record an issued id at `timestamp` with `sequence`
    #[inline(always)]
    pub(crate) fn commit(&mut self, timestamp: u64, sequence: u64) {
        self.last_timestamp = Some(timestamp);
        self.sequence = sequence;
    }
}
