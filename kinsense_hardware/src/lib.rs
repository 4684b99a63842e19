pub mod error;

use kinsense_traits::{AngleSensor, Clock, PresenceSensor};

/// Simulated PIR presence sensor.
///
/// Counts polls: reads are inactive for `lead_polls`, active for
/// `active_polls`, then inactive forever. This produces exactly one
/// pass-through event per instance, which is what the motion timer expects.
pub struct SimulatedPresence {
    lead_polls: u32,
    active_polls: u32,
    polls: u32,
}

impl SimulatedPresence {
    pub fn new(lead_polls: u32, active_polls: u32) -> Self {
        // Test hook: override the active window length without rebuilding.
        let active_polls = std::env::var("KINSENSE_TEST_SIM_ACTIVE_POLLS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(active_polls);
        Self {
            lead_polls,
            active_polls,
            polls: 0,
        }
    }
}

impl PresenceSensor for SimulatedPresence {
    fn read(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let n = self.polls;
        self.polls = self.polls.saturating_add(1);
        let active = n >= self.lead_polls && n < self.lead_polls + self.active_polls;
        tracing::trace!(poll = n, active, "simulated presence read");
        Ok(active)
    }
}

/// Simulated pendulum angle sensor: a placeholder sinusoid driven by the
/// injected clock. No real angle-sensing hardware behavior should be
/// inferred from it; it exists so the tracker has a live signal to consume.
pub struct SimulatedPendulum<C: Clock> {
    clock: C,
    amplitude_deg: f64,
    period_s: f64,
}

impl<C: Clock> SimulatedPendulum<C> {
    pub fn new(clock: C, amplitude_deg: f64, period_s: f64) -> Self {
        Self {
            clock,
            amplitude_deg,
            period_s,
        }
    }
}

impl<C: Clock> AngleSensor for SimulatedPendulum<C> {
    fn read(&mut self) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
        let t_s = f64::from(self.clock.ticks_ms()) / 1000.0;
        let angle =
            self.amplitude_deg * (2.0 * std::f64::consts::PI * t_s / self.period_s).sin();
        Ok(angle)
    }
}

#[cfg(all(feature = "hardware", target_os = "linux"))]
pub use gpio::HardwarePresence;

#[cfg(all(feature = "hardware", target_os = "linux"))]
mod gpio {
    use super::error::HwError;
    use kinsense_traits::PresenceSensor;
    use rppal::gpio::{Gpio, InputPin};

    /// PIR presence input on a GPIO pin (BCM numbering). Active high.
    pub struct HardwarePresence {
        pin: InputPin,
    }

    impl HardwarePresence {
        pub fn new(pin: u8) -> Result<Self, HwError> {
            let gpio = Gpio::new().map_err(|e| HwError::Gpio(e.to_string()))?;
            let pin = gpio
                .get(pin)
                .map_err(|e| HwError::Gpio(e.to_string()))?
                .into_input_pulldown();
            Ok(Self { pin })
        }
    }

    impl PresenceSensor for HardwarePresence {
        fn read(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
            let high = self.pin.is_high();
            tracing::trace!(high, "pir read");
            Ok(high)
        }
    }
}
