//! Water surface model
//!
//! The surface is a sine wave: `amplitude * sin(phase + omega * x)` around the
//! sea level. It drives both physics (drift, boat height) and collision
//! geometry (bubbles pop at the surface).

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Sinusoidal height field of the sea
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterSurface {
    /// Phase of the wave (grows every tick)
    pub phase: f64,
    /// Amplitude of the wave (grows every tick up to the cap)
    pub amplitude: f64,
}

impl Default for WaterSurface {
    fn default() -> Self {
        Self {
            phase: 0.0,
            amplitude: INITIAL_SURFACE_AMPLITUDE,
        }
    }
}

impl WaterSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the wave by one tick
    pub fn advance(&mut self) {
        self.phase += SURFACE_PHASE_STEP;
        let cap = MAX_SURFACE_AMPLITUDE as f64;
        if self.amplitude < cap {
            self.amplitude = (self.amplitude + SURFACE_AMPLITUDE_STEP).min(cap);
        }
    }

    /// Displacement of the surface from the sea level at a real position
    #[inline]
    pub fn displacement_at(&self, x: f64) -> f64 {
        self.amplitude * (self.phase + SURFACE_OMEGA * x).sin()
    }

    /// Water level (screen y of the surface) at horizontal position `x`.
    /// The displacement is truncated toward zero so the level never leaves
    /// `[SEA_LEVEL - amplitude, SEA_LEVEL + amplitude]`.
    pub fn water_level_at(&self, x: i32) -> i32 {
        SEA_LEVEL + self.displacement_at(x as f64) as i32
    }

    /// Horizontal current speed. Waves travel from right to left, so it is never positive.
    pub fn drift_velocity(&self) -> f64 {
        -(self.amplitude / 10.0).min(MAX_DRIFT_VELOCITY)
    }

    /// Slope angle of the surface at `x` (radians), from the derivative of the wave
    pub fn surface_angle_at(&self, x: i32) -> f64 {
        (SURFACE_OMEGA * self.amplitude * (self.phase + SURFACE_OMEGA * x as f64).cos()).atan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_surface() {
        let surface = WaterSurface::new();
        assert_eq!(surface.phase, 0.0);
        assert_eq!(surface.amplitude, 2.0);
        // sin(0) = 0 at x = 0
        assert_eq!(surface.water_level_at(0), SEA_LEVEL);
        assert!((surface.drift_velocity() + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_advance_grows_phase_and_amplitude() {
        let mut surface = WaterSurface::new();
        surface.advance();
        assert!((surface.phase - 0.12).abs() < 1e-12);
        assert!((surface.amplitude - 2.008).abs() < 1e-12);
    }

    #[test]
    fn test_amplitude_stops_at_cap() {
        let mut surface = WaterSurface {
            phase: 0.0,
            amplitude: MAX_SURFACE_AMPLITUDE as f64,
        };
        surface.advance();
        assert_eq!(surface.amplitude, MAX_SURFACE_AMPLITUDE as f64);
    }

    #[test]
    fn test_amplitude_reaches_cap_exactly() {
        let mut surface = WaterSurface::new();
        for _ in 0..6000 {
            surface.advance();
        }
        assert_eq!(surface.amplitude, MAX_SURFACE_AMPLITUDE as f64);
    }

    #[test]
    fn test_water_level_at_trough() {
        // sin(-pi/2) = -1: level rises above sea level by the amplitude
        let surface = WaterSurface {
            phase: -std::f64::consts::FRAC_PI_2,
            amplitude: 10.0,
        };
        assert_eq!(surface.water_level_at(0), SEA_LEVEL - 10);
    }

    #[test]
    fn test_drift_is_capped() {
        let surface = WaterSurface {
            phase: 0.0,
            amplitude: 40.0,
        };
        assert_eq!(surface.drift_velocity(), -MAX_DRIFT_VELOCITY);
    }

    #[test]
    fn test_surface_angle_flat_at_crest() {
        // cos(pi/2) = 0: the crest is flat
        let surface = WaterSurface {
            phase: std::f64::consts::FRAC_PI_2,
            amplitude: 30.0,
        };
        assert!(surface.surface_angle_at(0).abs() < 1e-9);
        let steep = WaterSurface {
            phase: 0.0,
            amplitude: 30.0,
        };
        assert!((steep.surface_angle_at(0) - (SURFACE_OMEGA * 30.0).atan()).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn amplitude_never_decreases_or_exceeds_cap(steps in 0usize..8000) {
            let mut surface = WaterSurface::new();
            let mut last = surface.amplitude;
            for _ in 0..steps {
                surface.advance();
                prop_assert!(surface.amplitude >= last);
                prop_assert!(surface.amplitude <= MAX_SURFACE_AMPLITUDE as f64);
                last = surface.amplitude;
            }
        }

        #[test]
        fn water_level_is_bounded(phase in 0.0f64..1000.0, amplitude in 2.0f64..44.0, x in -2000i32..2000) {
            let surface = WaterSurface { phase, amplitude };
            let level = surface.water_level_at(x) as f64;
            prop_assert!(level >= SEA_LEVEL as f64 - amplitude);
            prop_assert!(level <= SEA_LEVEL as f64 + amplitude);
        }

        #[test]
        fn displacement_is_periodic(phase in 0.0f64..100.0, amplitude in 2.0f64..44.0, x in -500.0f64..500.0) {
            let surface = WaterSurface { phase, amplitude };
            let period = std::f64::consts::TAU / SURFACE_OMEGA;
            let diff = surface.displacement_at(x) - surface.displacement_at(x + period);
            prop_assert!(diff.abs() < 1e-9);
        }
    }
}
