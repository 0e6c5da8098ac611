//! TTL arithmetic for grants.
//!
//! Backend configuration may ask for more than the deployment allows; the
//! system ceiling always wins.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use credential_auth_sdk::{LeaseConfig, SystemCeiling};

use super::error::DomainError;

/// TTL after capping, with the warning to surface when capping happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CappedTtl {
    pub ttl: Duration,
    pub warning: Option<String>,
}

/// Compute the TTL of a grant from a requested value.
///
/// A zero request falls back to the system default. When the backend sets a
/// max TTL, the result is clamped to the lower of it and the system max.
#[must_use]
pub fn effective_ttl(
    requested: Duration,
    cfg: &LeaseConfig,
    ceiling: &dyn SystemCeiling,
) -> CappedTtl {
    let ttl = if requested.is_zero() {
        ceiling.default_lease_ttl()
    } else {
        requested
    };

    if cfg.max_ttl.is_zero() {
        return CappedTtl { ttl, warning: None };
    }

    let max_ttl = cfg.max_ttl.min(ceiling.max_lease_ttl());
    if ttl <= max_ttl {
        return CappedTtl { ttl, warning: None };
    }

    CappedTtl {
        ttl: max_ttl,
        warning: Some(format!(
            "Effective TTL of '{}' exceeded the effective max_ttl of '{}'; TTL value is capped accordingly",
            humantime::format_duration(ttl),
            humantime::format_duration(max_ttl),
        )),
    }
}

/// Time left before a grant issued at `issued_at` reaches its absolute
/// lifetime limit.
///
/// The limit is the system max TTL, lowered to the backend max TTL when that
/// is set and smaller.
///
/// # Errors
///
/// - `PastMaxTtl` if the limit has already passed
/// - `Internal` if the limit is zero or not representable
pub fn remaining_lifetime(
    issued_at: DateTime<Utc>,
    cfg: &LeaseConfig,
    ceiling: &dyn SystemCeiling,
    now: DateTime<Utc>,
) -> Result<Duration, DomainError> {
    let mut window = ceiling.max_lease_ttl();
    if !cfg.max_ttl.is_zero() && cfg.max_ttl < window {
        window = cfg.max_ttl;
    }
    if window.is_zero() {
        return Err(DomainError::internal("max TTL must be greater than zero"));
    }

    let window = TimeDelta::from_std(window).map_err(|e| DomainError::internal(e.to_string()))?;
    let expires_at = issued_at
        .checked_add_signed(window)
        .ok_or_else(|| DomainError::internal("max TTL overflows the lease clock"))?;

    if expires_at < now {
        return Err(DomainError::PastMaxTtl);
    }

    (expires_at - now)
        .to_std()
        .map_err(|e| DomainError::internal(e.to_string()))
}
