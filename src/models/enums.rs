//! Shared status and reason codes.
//!
//! Statuses are persisted as their legacy string forms ("Active",
//! "Inactive", ...) so that existing kiosk clients and reports keep working.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// RecordStatus
// ---------------------------------------------------------------------------

/// Status of catalog and directory rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    /// Return the string code stored in the database
    pub fn as_code(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }
}

impl From<&str> for RecordStatus {
    fn from(s: &str) -> Self {
        match s {
            "Active" => RecordStatus::Active,
            _ => RecordStatus::Inactive,
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

// ---------------------------------------------------------------------------
// ListingStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a checkout listing. Returned is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ListingStatus {
    Active,
    Returned,
}

impl ListingStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Returned => "Returned",
        }
    }
}

impl From<&str> for ListingStatus {
    fn from(s: &str) -> Self {
        match s {
            "Returned" => ListingStatus::Returned,
            _ => ListingStatus::Active,
        }
    }
}

// ---------------------------------------------------------------------------
// TakeReason
// ---------------------------------------------------------------------------

/// Reason recorded on a listing when a product is taken.
///
/// The second-take label distinguishes replacements of lost items in the
/// ledger; loss escalation itself writes [`REASON_LOST`] from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TakeReason {
    FirstTake,
    ReplacementAfterLoss,
}

impl TakeReason {
    pub fn as_code(&self) -> &'static str {
        match self {
            TakeReason::FirstTake => "take",
            TakeReason::ReplacementAfterLoss => "take (second time - lost)",
        }
    }
}

/// Reason written on a normal return
pub const REASON_RETURN: &str = "return";

/// Reason written by the external loss-escalation process
pub const REASON_LOST: &str = "lost";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip() {
        assert_eq!(RecordStatus::from(RecordStatus::Active.as_code()), RecordStatus::Active);
        assert_eq!(RecordStatus::from(RecordStatus::Inactive.as_code()), RecordStatus::Inactive);
        assert_eq!(ListingStatus::from(ListingStatus::Returned.as_code()), ListingStatus::Returned);
    }

    #[test]
    fn unknown_status_is_inactive() {
        assert_eq!(RecordStatus::from("Delete"), RecordStatus::Inactive);
    }

    #[test]
    fn take_reason_labels() {
        assert_eq!(TakeReason::FirstTake.as_code(), "take");
        assert_eq!(
            TakeReason::ReplacementAfterLoss.as_code(),
            "take (second time - lost)"
        );
    }
}
