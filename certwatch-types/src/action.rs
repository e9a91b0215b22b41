//! Alert status codes and automation action references.
//!
//! The monitoring service triggers automation actions (webhooks, scripts)
//! when a monitor transitions into a given alert status. An [`ActionRef`]
//! ties one action to the status that fires it.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Integer code for a monitor alert status.
///
/// The wire form is the bare integer. The string form (via [`Display`] and
/// [`FromStr`]) is what keyed action mappings use, so `"0"` round-trips to
/// [`AlertStatus::DOWN`] and back.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AlertStatus(pub i32);

impl AlertStatus {
    /// Monitor is down.
    pub const DOWN: AlertStatus = AlertStatus(0);
    /// Monitor is up.
    pub const UP: AlertStatus = AlertStatus(1);
    /// Monitor is in trouble.
    pub const TROUBLE: AlertStatus = AlertStatus(2);
    /// Monitor is critical.
    pub const CRITICAL: AlertStatus = AlertStatus(4);

    /// Create a status from its raw code.
    pub const fn new(code: i32) -> Self {
        AlertStatus(code)
    }

    /// The raw status code.
    pub const fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AlertStatus {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(AlertStatus)
    }
}

impl From<i32> for AlertStatus {
    fn from(code: i32) -> Self {
        AlertStatus(code)
    }
}

/// Binding between an automation action and the alert status that fires it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRef {
    /// Identifier of the automation action to invoke.
    pub action_id: String,
    /// Status transition that triggers the action.
    pub alert_status: AlertStatus,
}

impl ActionRef {
    /// Create a new action reference.
    pub fn new(action_id: impl Into<String>, alert_status: impl Into<AlertStatus>) -> Self {
        ActionRef {
            action_id: action_id.into(),
            alert_status: alert_status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_is_bare_code() {
        assert_eq!(AlertStatus::DOWN.to_string(), "0");
        assert_eq!(AlertStatus::CRITICAL.to_string(), "4");
        assert_eq!(AlertStatus::new(17).to_string(), "17");
    }

    #[test]
    fn status_parses_from_string_form() {
        assert_eq!("0".parse::<AlertStatus>().unwrap(), AlertStatus::DOWN);
        assert_eq!("2".parse::<AlertStatus>().unwrap(), AlertStatus::TROUBLE);
        assert_eq!("17".parse::<AlertStatus>().unwrap(), AlertStatus::new(17));
    }

    #[test]
    fn status_rejects_non_numeric_input() {
        assert!("down".parse::<AlertStatus>().is_err());
        assert!("".parse::<AlertStatus>().is_err());
        assert!("1.5".parse::<AlertStatus>().is_err());
    }

    #[test]
    fn action_ref_accepts_raw_codes() {
        let action = ActionRef::new("act-1", 2);
        assert_eq!(action.action_id, "act-1");
        assert_eq!(action.alert_status, AlertStatus::TROUBLE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn status_serializes_as_integer() {
        let json = serde_json::to_string(&AlertStatus::CRITICAL).unwrap();
        assert_eq!(json, "4");

        let status: AlertStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, AlertStatus::TROUBLE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn action_ref_wire_shape() {
        let action = ActionRef::new("act-9", AlertStatus::DOWN);
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["action_id"], "act-9");
        assert_eq!(value["alert_status"], 0);
    }
}
