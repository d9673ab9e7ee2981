//! # omnihub-core - Core Domain Types
//!
//! Foundation crate for OmniHub. Provides the device model, chat transcript
//! types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`device`, `chat`)
//! - [`Device`] - A simulated controllable appliance record
//! - [`DeviceKind`] - Closed set of appliance categories
//! - [`DeviceStatus`] - Cosmetic connectivity flag (online/offline)
//! - [`PowerState`] - On/off flag, flipped only by the power toggle
//! - [`ChatMessage`] / [`Role`] - Assistant transcript entries
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use omnihub_core::prelude::*;
//! ```

pub mod chat;
pub mod device;
pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all OmniHub crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use chat::{ChatMessage, Role, ASSISTANT_GREETING};
pub use device::{
    device_context, seed_devices, Device, DeviceKind, DeviceStatus, PowerState, FALLBACK_ICON,
};
pub use error::{Error, Result, ResultExt};
