//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two roles that may authenticate.
///
/// Receptors own an agenda and document repository; issuers send reports
/// into it. No other role exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Patient-side account that owns events and documents.
    Receptor,
    /// Issuing-side account (labs, clinics) that sends reports.
    Issuer,
}

impl UserRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Receptor => "receptor",
            Self::Issuer => "issuer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = omni_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "receptor" => Ok(Self::Receptor),
            "issuer" => Ok(Self::Issuer),
            _ => Err(omni_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: receptor, issuer"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("receptor".parse::<UserRole>().unwrap(), UserRole::Receptor);
        assert_eq!("ISSUER".parse::<UserRole>().unwrap(), UserRole::Issuer);
        assert!("admin".parse::<UserRole>().is_err());
    }
}
