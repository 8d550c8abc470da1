use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cedro_core::{CompanyId, UserId};

use crate::Role;

/// Session claims model (transport-agnostic).
///
/// This is the minimal set of claims the application expects once a session
/// token has been decoded by whatever transport/security layer is in use.
/// Signature verification and cookie handling are intentionally outside this
/// crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / user identifier.
    pub sub: UserId,

    /// Company the session is scoped to.
    pub company_id: CompanyId,

    /// The single role the user holds for that company.
    pub role: Role,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims against `now`.
///
/// Validates the claims only; it never consults the permission matrix. Route
/// and button gating happen separately via [`crate::matrix`].
pub fn validate_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<(), ClaimsError> {
    if claims.expires_at <= claims.issued_at {
        return Err(ClaimsError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(ClaimsError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(ClaimsError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims(issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> SessionClaims {
        SessionClaims {
            sub: UserId::new(),
            company_id: CompanyId::new(),
            role: Role::Financeiro,
            issued_at,
            expires_at,
        }
    }

    #[test]
    fn valid_window_passes() {
        let now = Utc::now();
        let c = claims(now - Duration::hours(1), now + Duration::hours(1));
        assert_eq!(validate_claims(&c, now), Ok(()));
    }

    #[test]
    fn expired_session_is_rejected() {
        let now = Utc::now();
        let c = claims(now - Duration::hours(2), now - Duration::hours(1));
        assert_eq!(validate_claims(&c, now), Err(ClaimsError::Expired));
    }

    #[test]
    fn future_session_is_rejected() {
        let now = Utc::now();
        let c = claims(now + Duration::hours(1), now + Duration::hours(2));
        assert_eq!(validate_claims(&c, now), Err(ClaimsError::NotYetValid));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let now = Utc::now();
        let c = claims(now + Duration::hours(1), now - Duration::hours(1));
        assert_eq!(validate_claims(&c, now), Err(ClaimsError::InvalidTimeWindow));
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let c = claims(now - Duration::hours(1), now);
        assert_eq!(validate_claims(&c, now), Err(ClaimsError::Expired));
    }
}
