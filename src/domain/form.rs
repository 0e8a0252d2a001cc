// ============================================================
// Layer 3 — Form Domain Types
// ============================================================
// FormOptions are the dropdown lists computed from the reference
// dataset. FormInput is what the user has currently entered.
//
// The numeric controls carry hard bounds (area ≥ 1, the three
// environmental amounts ≥ 0, pH slider 4.0–9.0 in 0.1 steps).
// A browser enforces them through the input attributes, but a
// hand-crafted request can skip the browser, so `clamped()`
// re-applies the same bounds before anything reaches the pipeline.

use serde::{Deserialize, Serialize};

pub const AREA_MIN:     f64 = 1.0;
pub const AREA_DEFAULT: f64 = 100.0;
pub const AREA_STEP:    f64 = 10.0;

pub const AMOUNT_MIN:         f64 = 0.0;
pub const RAINFALL_DEFAULT:   f64 = 1000.0;
pub const FERTILIZER_DEFAULT: f64 = 5000.0;
pub const PESTICIDE_DEFAULT:  f64 = 1000.0;

pub const PH_MIN:     f64 = 4.0;
pub const PH_MAX:     f64 = 9.0;
pub const PH_DEFAULT: f64 = 6.5;
pub const PH_STEP:    f64 = 0.1;

/// Distinct, ascending option lists for the four dropdowns.
/// All empty when the reference dataset could not be loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOptions {
    pub states:    Vec<String>,
    pub districts: Vec<String>,
    pub seasons:   Vec<String>,
    pub crops:     Vec<String>,
}

impl FormOptions {
    /// True when every dropdown has nothing to offer
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
            && self.districts.is_empty()
            && self.seasons.is_empty()
            && self.crops.is_empty()
    }
}

/// The current value of every control on the form.
///
/// `#[serde(default)]` lets a submission omit any field: an empty
/// dropdown posts nothing at all, and the field then falls back
/// to its default instead of rejecting the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub state:      String,
    pub district:   String,
    pub season:     String,
    pub crop:       String,
    pub area:       f64,
    pub rainfall:   f64,
    pub fertilizer: f64,
    pub pesticide:  f64,
    pub ph:         f64,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            state:      String::new(),
            district:   String::new(),
            season:     String::new(),
            crop:       String::new(),
            area:       AREA_DEFAULT,
            rainfall:   RAINFALL_DEFAULT,
            fertilizer: FERTILIZER_DEFAULT,
            pesticide:  PESTICIDE_DEFAULT,
            ph:         PH_DEFAULT,
        }
    }
}

impl FormInput {
    /// Initial form state for a first render: a dropdown preselects
    /// its first option, numeric controls show their defaults.
    /// The result is always submittable.
    pub fn with_defaults(options: &FormOptions) -> Self {
        let first = |list: &[String]| list.first().cloned().unwrap_or_default();
        Self {
            state:    first(&options.states),
            district: first(&options.districts),
            season:   first(&options.seasons),
            crop:     first(&options.crops),
            ..Self::default()
        }
    }

    /// Apply the control bounds. Values inside the bounds are kept
    /// as-is, except pH which is snapped to the slider step.
    pub fn clamped(self) -> Self {
        Self {
            area:       at_least(self.area, AREA_MIN, AREA_DEFAULT),
            rainfall:   at_least(self.rainfall, AMOUNT_MIN, RAINFALL_DEFAULT),
            fertilizer: at_least(self.fertilizer, AMOUNT_MIN, FERTILIZER_DEFAULT),
            pesticide:  at_least(self.pesticide, AMOUNT_MIN, PESTICIDE_DEFAULT),
            ph:         slider_value(self.ph),
            ..self
        }
    }
}

fn at_least(value: f64, min: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        return fallback;
    }
    value.max(min)
}

/// Clamp to [PH_MIN, PH_MAX] and snap to the 0.1 grid.
fn slider_value(value: f64) -> f64 {
    if !value.is_finite() {
        return PH_DEFAULT;
    }
    let steps   = ((value.clamp(PH_MIN, PH_MAX) - PH_MIN) / PH_STEP).round();
    let snapped = PH_MIN + steps * PH_STEP;
    // Rounding to one decimal removes float noise such as 6.500000000000001
    ((snapped * 10.0).round() / 10.0).clamp(PH_MIN, PH_MAX)
}
