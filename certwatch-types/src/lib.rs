//! # certwatch-types
//!
//! Core types for SSL certificate monitor provisioning. This crate defines
//! the entities exchanged with the remote monitoring service: monitors,
//! automation action references, account profiles, and user groups.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable the `serde` feature for the JSON wire form
//! - **Wire-accurate naming**: Serialized field names match the remote API,
//!   including the `type` and `action_ids` renames
//! - **Ergonomic builders**: Fluent API for constructing monitors
//!
//! ## Features
//!
//! - `serde`: JSON serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use certwatch_types::{ActionRef, AlertStatus, Monitor};
//!
//! let monitor = Monitor::builder()
//!     .display_name("storefront cert")
//!     .monitor_type("SSL_CERT")
//!     .domain_name("shop.example.com")
//!     .expire_days(30)
//!     .protocol("HTTPS")
//!     .port(443)
//!     .timeout(10)
//!     .location_profile_id("100")
//!     .action(ActionRef::new("notify-oncall", AlertStatus::DOWN))
//!     .build();
//!
//! assert_eq!(monitor.actions.len(), 1);
//! assert!(monitor.monitor_id.is_empty());
//! ```

mod action;
mod monitor;
mod profile;

pub use action::*;
pub use monitor::*;
pub use profile::*;
