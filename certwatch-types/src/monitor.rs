//! The monitor entity exchanged with the remote monitoring service.

use crate::action::ActionRef;

/// A monitor as the remote API sees it.
///
/// This is the wire-facing form. Scalar fields map one-to-one onto JSON
/// fields; the `monitor_type` field travels as `type` and the actions list
/// as `action_ids`. A monitor that has not been created yet carries an
/// empty `monitor_id`, which is omitted from the serialized form.
///
/// # Example
///
/// ```rust
/// use certwatch_types::{ActionRef, AlertStatus, Monitor};
///
/// let monitor = Monitor::builder()
///     .display_name("storefront cert")
///     .monitor_type("SSL_CERT")
///     .domain_name("shop.example.com")
///     .expire_days(30)
///     .protocol("HTTPS")
///     .port(443)
///     .timeout(10)
///     .action(ActionRef::new("act-1", AlertStatus::DOWN))
///     .build();
///
/// assert_eq!(monitor.domain_name, "shop.example.com");
/// assert!(monitor.monitor_id.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monitor {
    /// Remote identifier; empty until the service assigns one.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "String::is_empty")
    )]
    pub monitor_id: String,
    /// Human-readable monitor name.
    pub display_name: String,
    /// Monitor kind discriminator, e.g. `SSL_CERT`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub monitor_type: String,
    /// Hostname whose certificate is checked.
    pub domain_name: String,
    /// Days before certificate expiry at which to alert.
    pub expire_days: u32,
    /// Protocol used for the check.
    pub protocol: String,
    /// Port used for the check.
    pub port: u16,
    /// Check timeout in seconds.
    pub timeout: u32,
    /// Location profile the monitor polls from.
    pub location_profile_id: String,
    /// Notification profile applied to alerts.
    pub notification_profile_id: String,
    /// Threshold profile that drives status transitions.
    pub threshold_profile_id: String,
    /// Monitor group memberships.
    #[cfg_attr(feature = "serde", serde(default))]
    pub monitor_groups: Vec<String>,
    /// User groups alerted for this monitor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_group_ids: Vec<String>,
    /// Automation actions keyed to alert status transitions.
    #[cfg_attr(feature = "serde", serde(rename = "action_ids", default))]
    pub actions: Vec<ActionRef>,
}

impl Monitor {
    /// Start building a monitor.
    pub fn builder() -> MonitorBuilder {
        MonitorBuilder::default()
    }
}

/// Fluent builder for [`Monitor`].
#[derive(Debug, Default)]
pub struct MonitorBuilder {
    monitor: Monitor,
}

impl MonitorBuilder {
    /// Set the remote identifier.
    pub fn monitor_id(mut self, monitor_id: impl Into<String>) -> Self {
        self.monitor.monitor_id = monitor_id.into();
        self
    }

    /// Set the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.monitor.display_name = display_name.into();
        self
    }

    /// Set the monitor kind discriminator.
    pub fn monitor_type(mut self, monitor_type: impl Into<String>) -> Self {
        self.monitor.monitor_type = monitor_type.into();
        self
    }

    /// Set the checked hostname.
    pub fn domain_name(mut self, domain_name: impl Into<String>) -> Self {
        self.monitor.domain_name = domain_name.into();
        self
    }

    /// Set the expiry alert threshold in days.
    pub fn expire_days(mut self, expire_days: u32) -> Self {
        self.monitor.expire_days = expire_days;
        self
    }

    /// Set the check protocol.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.monitor.protocol = protocol.into();
        self
    }

    /// Set the check port.
    pub fn port(mut self, port: u16) -> Self {
        self.monitor.port = port;
        self
    }

    /// Set the check timeout in seconds.
    pub fn timeout(mut self, timeout: u32) -> Self {
        self.monitor.timeout = timeout;
        self
    }

    /// Set the location profile id.
    pub fn location_profile_id(mut self, profile_id: impl Into<String>) -> Self {
        self.monitor.location_profile_id = profile_id.into();
        self
    }

    /// Set the notification profile id.
    pub fn notification_profile_id(mut self, profile_id: impl Into<String>) -> Self {
        self.monitor.notification_profile_id = profile_id.into();
        self
    }

    /// Set the threshold profile id.
    pub fn threshold_profile_id(mut self, profile_id: impl Into<String>) -> Self {
        self.monitor.threshold_profile_id = profile_id.into();
        self
    }

    /// Replace the monitor group memberships.
    pub fn monitor_groups(mut self, groups: Vec<String>) -> Self {
        self.monitor.monitor_groups = groups;
        self
    }

    /// Replace the alerted user groups.
    pub fn user_group_ids(mut self, group_ids: Vec<String>) -> Self {
        self.monitor.user_group_ids = group_ids;
        self
    }

    /// Append one automation action.
    pub fn action(mut self, action: ActionRef) -> Self {
        self.monitor.actions.push(action);
        self
    }

    /// Replace the automation action list.
    pub fn actions(mut self, actions: Vec<ActionRef>) -> Self {
        self.monitor.actions = actions;
        self
    }

    /// Finish building.
    pub fn build(self) -> Monitor {
        self.monitor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::AlertStatus;

    fn sample_monitor() -> Monitor {
        Monitor::builder()
            .monitor_id("mon-42")
            .display_name("storefront cert")
            .monitor_type("SSL_CERT")
            .domain_name("shop.example.com")
            .expire_days(30)
            .protocol("HTTPS")
            .port(443)
            .timeout(10)
            .location_profile_id("100")
            .notification_profile_id("200")
            .threshold_profile_id("300")
            .monitor_groups(vec!["g1".into()])
            .user_group_ids(vec!["700".into()])
            .action(ActionRef::new("act-1", AlertStatus::DOWN))
            .action(ActionRef::new("act-2", AlertStatus::TROUBLE))
            .build()
    }

    #[test]
    fn builder_fills_all_fields() {
        let monitor = sample_monitor();
        assert_eq!(monitor.monitor_id, "mon-42");
        assert_eq!(monitor.monitor_type, "SSL_CERT");
        assert_eq!(monitor.port, 443);
        assert_eq!(monitor.actions.len(), 2);
        assert_eq!(monitor.actions[1].action_id, "act-2");
    }

    #[test]
    fn default_monitor_is_unidentified() {
        let monitor = Monitor::default();
        assert!(monitor.monitor_id.is_empty());
        assert!(monitor.actions.is_empty());
        assert_eq!(monitor.timeout, 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_shape_uses_renamed_fields() {
        let value = serde_json::to_value(sample_monitor()).unwrap();
        assert_eq!(value["type"], "SSL_CERT");
        assert_eq!(value["action_ids"][0]["action_id"], "act-1");
        assert_eq!(value["action_ids"][0]["alert_status"], 0);
        assert!(value.get("monitor_type").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn empty_identity_is_omitted_from_wire_form() {
        let mut monitor = sample_monitor();
        monitor.monitor_id = String::new();
        let value = serde_json::to_value(monitor).unwrap();
        assert!(value.get("monitor_id").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_without_optional_lists() {
        let monitor: Monitor = serde_json::from_str(
            r#"{
                "monitor_id": "mon-9",
                "display_name": "api cert",
                "type": "SSL_CERT",
                "domain_name": "api.example.com",
                "expire_days": 14,
                "protocol": "HTTPS",
                "port": 8443,
                "timeout": 30,
                "location_profile_id": "100",
                "notification_profile_id": "200",
                "threshold_profile_id": "300"
            }"#,
        )
        .unwrap();
        assert_eq!(monitor.monitor_id, "mon-9");
        assert!(monitor.monitor_groups.is_empty());
        assert!(monitor.user_group_ids.is_empty());
        assert!(monitor.actions.is_empty());
    }
}
