//! Document status.
//!
//! The only state machine in the system: freight paperwork is either
//! `Pending` or `Completed`, serialized as those exact strings.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Processing status of a freight document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Work on the document has not finished.
    Pending,

    /// The document has been closed out.
    Completed,
}

impl DocumentStatus {
    /// Returns `true` if the document has been closed out.
    pub fn is_completed(&self) -> bool {
        matches!(self, DocumentStatus::Completed)
    }

    /// The wire representation (`"Pending"` / `"Completed"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(DocumentStatus::Pending),
            "Completed" => Ok(DocumentStatus::Completed),
            other => Err(Error::parse(format!("unknown document status '{other}'"))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(DocumentStatus::Pending.to_string(), "Pending");
        assert_eq!(DocumentStatus::Completed.to_string(), "Completed");
    }

    #[test]
    fn test_status_predicates() {
        assert!(DocumentStatus::Completed.is_completed());
        assert!(!DocumentStatus::Pending.is_completed());
    }

    #[test]
    fn test_status_from_str() {
        let status: DocumentStatus = "Pending".parse().unwrap();
        assert_eq!(status, DocumentStatus::Pending);
        assert!("Cancelled".parse::<DocumentStatus>().is_err());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&DocumentStatus::Completed).unwrap();
        assert_eq!(json, r#""Completed""#);

        let parsed: DocumentStatus = serde_json::from_str(r#""Pending""#).unwrap();
        assert_eq!(parsed, DocumentStatus::Pending);
    }
}
