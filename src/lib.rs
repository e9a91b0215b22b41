//! # certwatch
//!
//! Declarative lifecycle management for SSL certificate expiry monitors on
//! a remote monitoring service.
//!
//! The crate keeps a local, desired-state record of each monitor
//! ([`SslCertMonitor`]) and reconciles it with the remote service through
//! two narrow traits: [`MonitorClient`] for entity CRUD and
//! [`AccountDefaults`] for account-level default lookups. Both are passed
//! into every operation explicitly, so transports stay swappable and tests
//! run against in-memory fakes.
//!
//! ## Lifecycle
//!
//! - **create**: build the outgoing entity (resolving account defaults for
//!   blank fields), send it, and record the assigned identity
//! - **read**: fetch the remote record and overwrite local state with it
//! - **update**: rebuild the entity from local state, push it, and re-store
//!   the returned identity
//! - **delete**: remove the remote monitor; an already-absent monitor is
//!   treated as success
//! - **exists**: presence check that maps a not-found error to `false`
//!
//! ## Quick Start
//!
//! ```rust
//! use certwatch::SslCertMonitor;
//!
//! let mut monitor = SslCertMonitor {
//!     display_name: "storefront cert".into(),
//!     domain_name: "shop.example.com".into(),
//!     expire_days: 30,
//!     protocol: "HTTPS".into(),
//!     port: 443,
//!     ..SslCertMonitor::default()
//! };
//! monitor.actions.insert("0".into(), "notify-oncall".into());
//!
//! // With a client and defaults lookup in hand, the lifecycle runs as:
//! // monitor.create(&client, &defaults).await?;
//! // monitor.read(&client).await?;
//! // monitor.delete(&client).await?;
//! assert_eq!(monitor.timeout, 10);
//! ```

pub mod actions;
pub mod client;
pub mod error;
pub mod ssl_cert;

pub use client::{AccountDefaults, MonitorClient};
pub use error::ApiError;
pub use ssl_cert::SslCertMonitor;

// Re-export types for convenience
pub use certwatch_types::{
    ActionRef, AlertStatus, LocationProfile, Monitor, MonitorBuilder, NotificationProfile,
    ThresholdProfile, UserGroup,
};
