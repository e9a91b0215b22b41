//! The SSL certificate monitor resource.
//!
//! [`SslCertMonitor`] is the locally held, desired-state form of one SSL
//! certificate expiry monitor. Lifecycle operations reconcile it against the
//! remote service through the [`MonitorClient`] and [`AccountDefaults`]
//! traits, which are passed in explicitly rather than reached through any
//! ambient context.
//!
//! Building the outgoing entity resolves account defaults for blank
//! optional fields and writes the resolved ids back into local state, so
//! the local record matches what was sent without a follow-up read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use certwatch_types::Monitor;

use crate::actions::{map_from_refs, refs_from_map};
use crate::client::{AccountDefaults, MonitorClient};
use crate::error::ApiError;

fn default_timeout() -> u32 {
    10
}

/// Local state for one SSL certificate expiry monitor.
///
/// # Example
///
/// ```rust
/// use certwatch::SslCertMonitor;
///
/// let mut monitor = SslCertMonitor {
///     display_name: "storefront cert".into(),
///     domain_name: "shop.example.com".into(),
///     expire_days: 30,
///     protocol: "HTTPS".into(),
///     port: 443,
///     ..SslCertMonitor::default()
/// };
/// monitor.actions.insert("0".into(), "notify-oncall".into());
///
/// assert_eq!(monitor.timeout, 10);
/// assert!(monitor.monitor_id.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslCertMonitor {
    /// Remote identity; empty until [`create`](Self::create) assigns one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    /// Human-readable monitor name.
    pub display_name: String,
    /// Hostname whose certificate is checked.
    pub domain_name: String,
    /// Days before certificate expiry at which to alert.
    pub expire_days: u32,
    /// Protocol used for the check, e.g. `HTTPS`.
    pub protocol: String,
    /// Port used for the check.
    pub port: u16,
    /// Check timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u32,
    /// Location profile id; the account default is used when blank.
    #[serde(default)]
    pub location_profile_id: String,
    /// Notification profile id; the account default is used when blank.
    #[serde(default)]
    pub notification_profile_id: String,
    /// Threshold profile id; the account default is used when blank.
    #[serde(default)]
    pub threshold_profile_id: String,
    /// Monitor group memberships.
    #[serde(default)]
    pub monitor_groups: Vec<String>,
    /// Alerted user groups; the account default is used when empty.
    #[serde(default)]
    pub user_group_ids: Vec<String>,
    /// Automation actions: alert status code (string form) to action id.
    #[serde(default)]
    pub actions: BTreeMap<String, String>,
}

impl Default for SslCertMonitor {
    fn default() -> Self {
        SslCertMonitor {
            monitor_id: String::new(),
            display_name: String::new(),
            domain_name: String::new(),
            expire_days: 0,
            protocol: String::new(),
            port: 0,
            timeout: default_timeout(),
            location_profile_id: String::new(),
            notification_profile_id: String::new(),
            threshold_profile_id: String::new(),
            monitor_groups: Vec::new(),
            user_group_ids: Vec::new(),
            actions: BTreeMap::new(),
        }
    }
}

impl SslCertMonitor {
    /// Monitor kind discriminator stamped on every outgoing entity.
    pub const MONITOR_TYPE: &'static str = "SSL_CERT";

    /// State for an existing remote monitor known only by id.
    ///
    /// Every other field starts at its default; follow with
    /// [`read`](Self::read) to populate them from the remote record.
    pub fn import(monitor_id: impl Into<String>) -> Self {
        SslCertMonitor {
            monitor_id: monitor_id.into(),
            ..SslCertMonitor::default()
        }
    }

    /// Build the remote entity from local state.
    ///
    /// The actions map is converted first, so an invalid key fails the
    /// build before any remote lookup happens. Blank profile ids and an
    /// empty user group list are then resolved through `defaults`, and each
    /// resolved id is mirrored into local state as well as onto the
    /// outgoing entity. A failed lookup aborts the build, but ids already
    /// resolved stay in local state.
    pub async fn build_monitor<D>(&mut self, defaults: &D) -> Result<Monitor, ApiError>
    where
        D: AccountDefaults + ?Sized,
    {
        let actions = refs_from_map(&self.actions)?;

        let mut monitor = Monitor {
            monitor_id: self.monitor_id.clone(),
            display_name: self.display_name.clone(),
            monitor_type: Self::MONITOR_TYPE.into(),
            domain_name: self.domain_name.clone(),
            expire_days: self.expire_days,
            protocol: self.protocol.clone(),
            port: self.port,
            timeout: self.timeout,
            location_profile_id: self.location_profile_id.clone(),
            notification_profile_id: self.notification_profile_id.clone(),
            threshold_profile_id: self.threshold_profile_id.clone(),
            monitor_groups: self.monitor_groups.clone(),
            user_group_ids: self.user_group_ids.clone(),
            actions,
        };

        if monitor.location_profile_id.is_empty() {
            let profile = defaults.location_profile().await?;
            debug!("using default location profile {}", profile.profile_id);
            monitor.location_profile_id = profile.profile_id.clone();
            self.location_profile_id = profile.profile_id;
        }
        if monitor.notification_profile_id.is_empty() {
            let profile = defaults.notification_profile().await?;
            debug!("using default notification profile {}", profile.profile_id);
            monitor.notification_profile_id = profile.profile_id.clone();
            self.notification_profile_id = profile.profile_id;
        }
        if monitor.threshold_profile_id.is_empty() {
            let profile = defaults.threshold_profile().await?;
            debug!("using default threshold profile {}", profile.profile_id);
            monitor.threshold_profile_id = profile.profile_id.clone();
            self.threshold_profile_id = profile.profile_id;
        }
        if monitor.user_group_ids.is_empty() {
            let group = defaults.user_group().await?;
            debug!("using default user group {}", group.user_group_id);
            monitor.user_group_ids = vec![group.user_group_id.clone()];
            self.user_group_ids = vec![group.user_group_id];
        }

        Ok(monitor)
    }

    /// Overwrite local state with the remote entity's fields.
    ///
    /// The actions map is rebuilt from the entity's ordered list; when the
    /// list carries the same status twice, the later entry wins. The local
    /// identity is left untouched.
    pub fn apply_monitor(&mut self, monitor: &Monitor) {
        self.display_name = monitor.display_name.clone();
        self.domain_name = monitor.domain_name.clone();
        self.expire_days = monitor.expire_days;
        self.protocol = monitor.protocol.clone();
        self.port = monitor.port;
        self.timeout = monitor.timeout;
        self.location_profile_id = monitor.location_profile_id.clone();
        self.notification_profile_id = monitor.notification_profile_id.clone();
        self.threshold_profile_id = monitor.threshold_profile_id.clone();
        self.monitor_groups = monitor.monitor_groups.clone();
        self.user_group_ids = monitor.user_group_ids.clone();
        self.actions = map_from_refs(&monitor.actions);
    }

    /// Create the monitor remotely and record its assigned identity.
    pub async fn create<C, D>(&mut self, client: &C, defaults: &D) -> Result<(), ApiError>
    where
        C: MonitorClient + ?Sized,
        D: AccountDefaults + ?Sized,
    {
        let monitor = self.build_monitor(defaults).await?;
        let created = client.create_monitor(monitor).await?;
        info!(
            "created SSL certificate monitor {} for {}",
            created.monitor_id, self.domain_name
        );
        self.monitor_id = created.monitor_id;
        Ok(())
    }

    /// Refresh local state from the remote record.
    ///
    /// An absent monitor surfaces as a not-found error rather than being
    /// swallowed; callers that only need presence should use
    /// [`exists`](Self::exists).
    pub async fn read<C>(&mut self, client: &C) -> Result<(), ApiError>
    where
        C: MonitorClient + ?Sized,
    {
        let monitor = client.get_monitor(&self.monitor_id).await?;
        debug!("read SSL certificate monitor {}", self.monitor_id);
        self.apply_monitor(&monitor);
        Ok(())
    }

    /// Push local state to the remote monitor.
    ///
    /// The returned identity is re-stored; other local fields keep their
    /// configured values rather than being overwritten from the response.
    pub async fn update<C, D>(&mut self, client: &C, defaults: &D) -> Result<(), ApiError>
    where
        C: MonitorClient + ?Sized,
        D: AccountDefaults + ?Sized,
    {
        let monitor = self.build_monitor(defaults).await?;
        let updated = client.update_monitor(monitor).await?;
        info!("updated SSL certificate monitor {}", updated.monitor_id);
        self.monitor_id = updated.monitor_id;
        Ok(())
    }

    /// Delete the remote monitor.
    ///
    /// Deleting a monitor that is already gone succeeds.
    pub async fn delete<C>(&self, client: &C) -> Result<(), ApiError>
    where
        C: MonitorClient + ?Sized,
    {
        match client.delete_monitor(&self.monitor_id).await {
            Ok(()) => {
                info!("deleted SSL certificate monitor {}", self.monitor_id);
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                debug!("monitor {} already absent on delete", self.monitor_id);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Whether the remote monitor currently exists.
    ///
    /// Only a not-found error maps to `false`; any other failure
    /// propagates.
    pub async fn exists<C>(&self, client: &C) -> Result<bool, ApiError>
    where
        C: MonitorClient + ?Sized,
    {
        match client.get_monitor(&self.monitor_id).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }
}
