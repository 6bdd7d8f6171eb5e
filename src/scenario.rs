//! Scenario Input boundary
//!
//! The three user-adjustable sliders and the range clamping applied to them
//! before they reach the impact model. Clamping and step snapping are the
//! only validation the system performs.

use serde::{Deserialize, Serialize};

/// Bounds, step and default of one slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderSpec {
    /// Rejection avoided, % of exported volume
    pub const REJECTION_PCT: SliderSpec = SliderSpec { min: 0.0, max: 20.0, step: 0.5, default: 10.0 };

    /// Annual processed volume, tons
    pub const VOLUME_TONS: SliderSpec = SliderSpec { min: 100.0, max: 5000.0, step: 50.0, default: 1000.0 };

    /// Export price, USD per ton
    pub const PRICE_PER_TON: SliderSpec = SliderSpec { min: 1000.0, max: 5000.0, step: 100.0, default: 2800.0 };

    /// Bring a raw value onto the slider
    ///
    /// Non-finite values fall back to the default. Finite values are clamped
    /// to `[min, max]` and snapped to the nearest step counted from `min`.
    pub fn constrain(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Number of slider positions (both ends included)
    pub fn positions(&self) -> usize {
        if self.step <= 0.0 {
            return 1;
        }
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// Value at slider position `index` (clamped to the last position)
    pub fn value_at(&self, index: usize) -> f64 {
        let last = self.positions() - 1;
        (self.min + index.min(last) as f64 * self.step).min(self.max)
    }
}

/// One evaluation's worth of slider values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub rejection_pct: f64,
    pub volume_tons: f64,
    pub price_per_ton: f64,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            rejection_pct: SliderSpec::REJECTION_PCT.default,
            volume_tons: SliderSpec::VOLUME_TONS.default,
            price_per_ton: SliderSpec::PRICE_PER_TON.default,
        }
    }
}

impl ScenarioInput {
    /// Build an input from raw values, constraining each to its slider
    pub fn new(rejection_pct: f64, volume_tons: f64, price_per_ton: f64) -> Self {
        Self {
            rejection_pct: SliderSpec::REJECTION_PCT.constrain(rejection_pct),
            volume_tons: SliderSpec::VOLUME_TONS.constrain(volume_tons),
            price_per_ton: SliderSpec::PRICE_PER_TON.constrain(price_per_ton),
        }
    }

    /// Build an input without clamping (caller already validated)
    pub fn raw(rejection_pct: f64, volume_tons: f64, price_per_ton: f64) -> Self {
        Self { rejection_pct, volume_tons, price_per_ton }
    }
}
