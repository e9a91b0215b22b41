//! Collaborator traits for the remote monitoring service.
//!
//! Lifecycle operations never talk to a concrete transport. They take these
//! traits as explicit parameters, so any HTTP client, recording fake, or
//! in-memory service can stand behind them.

use async_trait::async_trait;

use certwatch_types::{LocationProfile, Monitor, NotificationProfile, ThresholdProfile, UserGroup};

use crate::error::ApiError;

/// CRUD surface for monitor entities on the remote service.
#[async_trait]
pub trait MonitorClient: Send + Sync {
    /// Create a monitor and return it with its assigned identity.
    async fn create_monitor(&self, monitor: Monitor) -> Result<Monitor, ApiError>;

    /// Fetch a monitor by id.
    ///
    /// An absent monitor fails with an error for which
    /// [`ApiError::is_not_found`] returns `true`.
    async fn get_monitor(&self, monitor_id: &str) -> Result<Monitor, ApiError>;

    /// Replace an existing monitor and return its updated form.
    async fn update_monitor(&self, monitor: Monitor) -> Result<Monitor, ApiError>;

    /// Delete a monitor by id.
    ///
    /// An absent monitor fails with an error for which
    /// [`ApiError::is_not_found`] returns `true`.
    async fn delete_monitor(&self, monitor_id: &str) -> Result<(), ApiError>;
}

/// Account-level defaults substituted for blank optional monitor fields.
#[async_trait]
pub trait AccountDefaults: Send + Sync {
    /// The account's default location profile.
    async fn location_profile(&self) -> Result<LocationProfile, ApiError>;

    /// The account's default notification profile.
    async fn notification_profile(&self) -> Result<NotificationProfile, ApiError>;

    /// The account's default threshold profile for the monitor type.
    async fn threshold_profile(&self) -> Result<ThresholdProfile, ApiError>;

    /// The account's default alerted user group.
    async fn user_group(&self) -> Result<UserGroup, ApiError>;
}
