//! Account-level profiles and user groups.
//!
//! Monitors reference profiles by id. When a monitor is provisioned without
//! an explicit profile, the account's default of each kind is looked up and
//! substituted.

/// A location profile: the set of poller locations a monitor runs from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationProfile {
    /// Profile identifier.
    pub profile_id: String,
    /// Human-readable profile name.
    pub profile_name: String,
}

impl LocationProfile {
    /// Create a new location profile.
    pub fn new(profile_id: impl Into<String>, profile_name: impl Into<String>) -> Self {
        LocationProfile {
            profile_id: profile_id.into(),
            profile_name: profile_name.into(),
        }
    }
}

/// A notification profile: when and how alerts are delivered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotificationProfile {
    /// Profile identifier.
    pub profile_id: String,
    /// Human-readable profile name.
    pub profile_name: String,
}

impl NotificationProfile {
    /// Create a new notification profile.
    pub fn new(profile_id: impl Into<String>, profile_name: impl Into<String>) -> Self {
        NotificationProfile {
            profile_id: profile_id.into(),
            profile_name: profile_name.into(),
        }
    }
}

/// A threshold profile: the conditions that flip a monitor between states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdProfile {
    /// Profile identifier.
    pub profile_id: String,
    /// Human-readable profile name.
    pub profile_name: String,
}

impl ThresholdProfile {
    /// Create a new threshold profile.
    pub fn new(profile_id: impl Into<String>, profile_name: impl Into<String>) -> Self {
        ThresholdProfile {
            profile_id: profile_id.into(),
            profile_name: profile_name.into(),
        }
    }
}

/// A group of users who receive alerts for the monitors that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserGroup {
    /// Group identifier.
    pub user_group_id: String,
    /// Human-readable group name.
    pub display_name: String,
    /// Member user ids.
    #[cfg_attr(feature = "serde", serde(default))]
    pub users: Vec<String>,
}

impl UserGroup {
    /// Create a new, empty user group.
    pub fn new(user_group_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        UserGroup {
            user_group_id: user_group_id.into(),
            display_name: display_name.into(),
            users: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_constructors_fill_fields() {
        let location = LocationProfile::new("100", "North America");
        assert_eq!(location.profile_id, "100");
        assert_eq!(location.profile_name, "North America");

        let group = UserGroup::new("700", "on-call");
        assert_eq!(group.user_group_id, "700");
        assert!(group.users.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn user_group_tolerates_missing_member_list() {
        let group: UserGroup =
            serde_json::from_str(r#"{"user_group_id":"700","display_name":"on-call"}"#).unwrap();
        assert_eq!(group.user_group_id, "700");
        assert!(group.users.is_empty());
    }
}
