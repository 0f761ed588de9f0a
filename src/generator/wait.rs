//! Spin strategy for sequence exhaustion
//!
//! When a millisecond runs out of sequence numbers the generator spins until
//! the clock moves past it. There is no timeout; the spin ends only when the
//! time source advances.

use std::thread;

/// Spin until `get_time` returns a value greater than `from_timestamp`
///
/// With `yield_every == 0` this is a tight spin. Otherwise the thread yields
/// to the scheduler every `yield_every` iterations.
#[inline]
pub fn spin_until_next_millis<F>(from_timestamp: u64, yield_every: u32, get_time: F) -> u64
where
    F: Fn() -> u64,
{
    let mut spins: u32 = 0;
    loop {
        let now = get_time();
        if now > from_timestamp {
            return now;
        }

        std::hint::spin_loop();

        if yield_every != 0 {
            spins = spins.wrapping_add(1);
            if spins % yield_every == 0 {
                thread::yield_now();
            }
        }
    }
}
