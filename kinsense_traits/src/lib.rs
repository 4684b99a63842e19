pub mod clock;

pub use clock::{Clock, MonotonicClock, ticks_diff};

/// Binary presence input (active while an object is inside the detection zone).
pub trait PresenceSensor {
    fn read(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

/// Scalar angle input in degrees, zero at equilibrium.
pub trait AngleSensor {
    fn read(&mut self) -> Result<f64, Box<dyn std::error::Error + Send + Sync>>;
}
