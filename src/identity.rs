//! Node identity detection
//!
//! Derives a `(worker_id, datacenter_id)` pair without any coordination
//! service. Production deployments should prefer assigning ids explicitly;
//! the helpers here only supply defaults.

use std::net::{IpAddr, Ipv4Addr};

use once_cell::sync::Lazy;
use rand::Rng;
use tracing::{debug, warn};

use crate::error::{Result, SnowflakeError};

pub const ENV_WORKER_ID: &str = "SNOWFLAKE_WORKER_ID";
pub const ENV_DATACENTER_ID: &str = "SNOWFLAKE_DATACENTER_ID";

/// Mask applied to each derived id; derived ids lie in `0..=31`
pub const IDENTITY_MASK: u64 = 0x1F;

static PROCESS_IDENTITY: Lazy<(u64, u64)> = Lazy::new(|| match from_env() {
    Ok(Some(identity)) => identity,
    Ok(None) => worker_and_datacenter_id(),
    Err(err) => {
        warn!(error = %err, "ignoring invalid node identity override");
        worker_and_datacenter_id()
    }
});

/// Derive `(worker_id, datacenter_id)` from the host, never failing
///
/// Uses the first non-loopback IPv4 address of the host. Interface order is
/// platform dependent, so hosts with several addresses may derive different
/// ids across environments. Without such an address both ids are random.
pub fn worker_and_datacenter_id() -> (u64, u64) {
    let addrs = match if_addrs::get_if_addrs() {
        Ok(ifaces) => ifaces
            .into_iter()
            .filter(|iface| !iface.is_loopback())
            .map(|iface| iface.ip())
            .collect::<Vec<_>>(),
        Err(err) => {
            warn!(error = %err, "failed to enumerate network interfaces");
            Vec::new()
        }
    };

    match from_addrs(addrs) {
        Some(identity) => {
            debug!(
                worker_id = identity.0,
                datacenter_id = identity.1,
                "node identity derived from IPv4 address"
            );
            identity
        }
        None => {
            let identity = random_identity();
            warn!(
                worker_id = identity.0,
                datacenter_id = identity.1,
                "no non-loopback IPv4 address, using random node identity"
            );
            identity
        }
    }
}

/// Identity from the first non-loopback IPv4 address in `addrs`
pub fn from_addrs<I>(addrs: I) -> Option<(u64, u64)>
where
    I: IntoIterator<Item = IpAddr>,
{
    addrs.into_iter().find_map(|addr| match addr {
        IpAddr::V4(v4) if !v4.is_loopback() => Some(from_ipv4(v4)),
        _ => None,
    })
}

/// Identity packed from the octets of `addr`
///
/// The low 5 bits of the address become the worker id, the next 5 bits the
/// datacenter id.
pub fn from_ipv4(addr: Ipv4Addr) -> (u64, u64) {
    let packed = u64::from(u32::from(addr));
    (packed & IDENTITY_MASK, (packed >> 5) & IDENTITY_MASK)
}

/// Two independent random ids in `0..=31`
pub fn random_identity() -> (u64, u64) {
    let mut rng = rand::rng();
    (
        rng.random_range(0..=IDENTITY_MASK),
        rng.random_range(0..=IDENTITY_MASK),
    )
}

/// Explicit identity from `SNOWFLAKE_WORKER_ID` and `SNOWFLAKE_DATACENTER_ID`
///
/// Returns `Ok(None)` when neither is set. Setting only one of them, or a
/// value that is not an unsigned integer, is an error.
pub fn from_env() -> Result<Option<(u64, u64)>> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Same as [`from_env`] with a caller-supplied lookup
pub fn from_lookup<F>(lookup: F) -> Result<Option<(u64, u64)>>
where
    F: Fn(&str) -> Option<String>,
{
    match (lookup(ENV_WORKER_ID), lookup(ENV_DATACENTER_ID)) {
        (None, None) => Ok(None),
        (worker, datacenter) => Ok(Some((
            parse_id_var(ENV_WORKER_ID, worker)?,
            parse_id_var(ENV_DATACENTER_ID, datacenter)?,
        ))),
    }
}

fn parse_id_var(key: &str, value: Option<String>) -> Result<u64> {
    let value = value.unwrap_or_default();
    value
        .trim()
        .parse()
        .map_err(|_| SnowflakeError::InvalidEnvValue {
            key: key.to_string(),
            value: value.clone(),
        })
}

/// Identity computed once per process
///
/// Prefers the environment override, then the host address, then random
/// ids. Every call in the process returns the same pair.
pub fn process_identity() -> (u64, u64) {
    *PROCESS_IDENTITY
}
