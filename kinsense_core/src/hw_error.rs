//! Maps `Box<dyn Error>` from trait boundaries to typed `MotionError`.
//!
//! The sensor traits in `kinsense_traits` use `Box<dyn Error + Send + Sync>`
//! for maximum flexibility; this module converts those to our typed error
//! enum, with an optional feature-gated path for `kinsense_hardware::HwError`
//! downcasting.

use crate::error::MotionError;

/// Map a trait-boundary error to a typed `MotionError`.
///
/// Attempts to downcast known hardware error types first, then falls back
/// to string-based heuristics.
pub fn map_hw_error(e: &(dyn std::error::Error + 'static)) -> MotionError {
    // Feature-gated: try to downcast to HwError for precise mapping
    #[cfg(feature = "hardware-errors")]
    {
        if let Some(hw) = e.downcast_ref::<kinsense_hardware::error::HwError>() {
            return MotionError::HardwareFault(hw.to_string());
        }
    }

    // Fallback: string-based detection
    let s = e.to_string();
    if s.to_lowercase().contains("gpio") {
        MotionError::HardwareFault(s)
    } else {
        MotionError::Hardware(s)
    }
}
