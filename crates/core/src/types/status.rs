//! Status and role enumerations.
//!
//! Both enums serialize to SCREAMING_SNAKE_CASE tokens, which is also the
//! exact representation stored in the database and accepted on the wire.
//! Tokens are case-sensitive.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a valid enum token.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid {kind}: {value:?} (expected one of {expected})")]
pub struct InvalidStatus {
    /// What kind of token was being parsed ("status" or "role").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated list of accepted tokens.
    pub expected: &'static str,
}

/// Processing status of a lead application.
///
/// This is a flat enumeration, not a guarded state machine: any status may
/// transition to any other status, including re-opening a completed lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Newly submitted, nobody has looked at it yet.
    #[default]
    Pending,
    /// An operator is working the lead.
    InProgress,
    /// Work finished.
    Completed,
    /// Abandoned or rejected.
    Cancelled,
}

impl ApplicationStatus {
    /// Every valid status, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Accepted wire/database tokens, for error messages.
    pub const EXPECTED: &'static str = "PENDING, IN_PROGRESS, COMPLETED, CANCELLED";

    /// The wire/database token for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(InvalidStatus {
                kind: "status",
                value: other.to_owned(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Account role. The only distinction that matters is admin vs not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// May list, update, and delete lead applications.
    Admin,
    /// Regular account with no admin access.
    #[default]
    User,
}

impl UserRole {
    /// Accepted wire/database tokens, for error messages.
    pub const EXPECTED: &'static str = "ADMIN, USER";

    /// The wire/database token for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    /// Whether this role grants admin access.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            other => Err(InvalidStatus {
                kind: "role",
                value: other.to_owned(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

// SQLx support: both enums are stored as TEXT columns holding the wire token.
#[cfg(feature = "postgres")]
mod postgres {
    use super::{ApplicationStatus, UserRole};

    macro_rules! text_enum_sqlx {
        ($name:ident) => {
            impl sqlx::Type<sqlx::Postgres> for $name {
                fn type_info() -> sqlx::postgres::PgTypeInfo {
                    <String as sqlx::Type<sqlx::Postgres>>::type_info()
                }

                fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                    <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
                }
            }

            impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
                fn decode(
                    value: sqlx::postgres::PgValueRef<'r>,
                ) -> Result<Self, sqlx::error::BoxDynError> {
                    let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
                    Ok(s.parse::<Self>()?)
                }
            }

            impl sqlx::Encode<'_, sqlx::Postgres> for $name {
                fn encode_by_ref(
                    &self,
                    buf: &mut sqlx::postgres::PgArgumentBuffer,
                ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                    <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
                }
            }
        };
    }

    text_enum_sqlx!(ApplicationStatus);
    text_enum_sqlx!(UserRole);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens() {
        assert_eq!(ApplicationStatus::Pending.as_str(), "PENDING");
        assert_eq!(ApplicationStatus::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!(ApplicationStatus::Completed.as_str(), "COMPLETED");
        assert_eq!(ApplicationStatus::Cancelled.as_str(), "CANCELLED");
    }

    #[test]
    fn test_status_parse_roundtrip() {
        for status in ApplicationStatus::ALL {
            assert_eq!(
                status.as_str().parse::<ApplicationStatus>().unwrap(),
                status
            );
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("DONE".parse::<ApplicationStatus>().is_err());
        assert!("".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_status_parse_is_case_sensitive() {
        assert!("pending".parse::<ApplicationStatus>().is_err());
        assert!("Pending".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Pending);
    }

    #[test]
    fn test_status_serde_tokens() {
        let json = serde_json::to_string(&ApplicationStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");

        let parsed: ApplicationStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, ApplicationStatus::Cancelled);
    }

    #[test]
    fn test_role_tokens() {
        assert_eq!(UserRole::Admin.as_str(), "ADMIN");
        assert_eq!(UserRole::User.as_str(), "USER");
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }

    #[test]
    fn test_role_default_is_user() {
        assert_eq!(UserRole::default(), UserRole::User);
    }

    #[test]
    fn test_invalid_status_message_lists_tokens() {
        let err = "DONE".parse::<ApplicationStatus>().unwrap_err();
        assert!(err.to_string().contains("IN_PROGRESS"));
    }
}
