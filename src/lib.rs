//! # snowflake-id
//!
//! A snowflake-style distributed ID generator.
//!
//! Each id is a `u64` made of four fields, most significant first:
//! milliseconds since a configurable epoch, datacenter id, worker id and a
//! per-millisecond sequence. The default layout is 42/5/5/12 bits with an
//! epoch of 2021-01-01T00:00:00Z.
//!
//! ```
//! use snowflake_id::{decode, GeneratorConfig, IdGenerator};
//!
//! let mut generator = IdGenerator::new(1, 2).unwrap();
//! let id = generator.next_id().unwrap();
//!
//! let decoded = decode(id, &GeneratorConfig::default());
//! assert_eq!(decoded.worker_id, 1);
//! assert_eq!(decoded.datacenter_id, 2);
//! ```

#![forbid(unsafe_code)]

mod config;
mod decoder;
mod error;
mod generator;
pub mod identity;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use config::{ENV_DATACENTER_ID_BITS, ENV_EPOCH, ENV_SEQUENCE_BITS, ENV_WORKER_ID_BITS};
pub use decoder::{decode, decode_i64, decode_str, parse_id, DecodedId, IdDecoder};
pub use error::{Result, SnowflakeError};
pub use generator::time::{unix_time_ms, SystemClock, TimeSource};
pub use generator::IdGenerator;
pub use identity::worker_and_datacenter_id;
