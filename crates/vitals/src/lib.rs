//! Patient vitals monitoring
//!
//! Two independent per-frame concerns:
//! - Body presence debouncing: a body missing for longer than a threshold
//!   becomes a fall alert (level-triggered while the body stays gone).
//! - Facial asymmetry scoring: drooping on one side of the mouth above a
//!   threshold suggests a possible stroke.

pub mod asymmetry;
pub mod config;
pub mod presence;

pub use asymmetry::mouth_asymmetry;
pub use config::VitalsConfig;
pub use presence::{PresenceReport, PresenceTracker};
