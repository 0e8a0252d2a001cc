// ============================================================
// Layer 3 — Input Record
// ============================================================
// One ephemeral row built from the form on every prediction.
//
// Column order is a contract with the external training
// pipeline that fitted the scaler and the model:
//
//   State, District, Year, Season, Crop,
//   Area_Hectare, Rainfall_mm, Fertilizer_kg, Pesticide_kg, pH
//
// Do not reorder FEATURE_COLUMNS.

use serde::{Deserialize, Serialize};

use crate::domain::form::FormInput;

/// Fixed placeholder for the Year feature
pub const PLACEHOLDER_YEAR: i32 = 2024;

/// The four columns run through the categorical encoder, in order
pub const CATEGORICAL_COLUMNS: [&str; 4] = ["State", "District", "Season", "Crop"];

/// Full feature order expected by the scaler and the model
pub const FEATURE_COLUMNS: [&str; 10] = [
    "State",
    "District",
    "Year",
    "Season",
    "Crop",
    "Area_Hectare",
    "Rainfall_mm",
    "Fertilizer_kg",
    "Pesticide_kg",
    "pH",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub state:         String,
    pub district:      String,
    pub year:          i32,
    pub season:        String,
    pub crop:          String,
    pub area_hectare:  f64,
    pub rainfall_mm:   f64,
    pub fertilizer_kg: f64,
    pub pesticide_kg:  f64,
    pub ph:            f64,
}

impl InputRecord {
    pub fn from_form(input: &FormInput) -> Self {
        Self {
            state:         input.state.clone(),
            district:      input.district.clone(),
            year:          PLACEHOLDER_YEAR,
            season:        input.season.clone(),
            crop:          input.crop.clone(),
            area_hectare:  input.area,
            rainfall_mm:   input.rainfall,
            fertilizer_kg: input.fertilizer,
            pesticide_kg:  input.pesticide,
            ph:            input.ph,
        }
    }

    /// Categorical values in CATEGORICAL_COLUMNS order
    pub fn categorical_values(&self) -> [&str; 4] {
        [&self.state, &self.district, &self.season, &self.crop]
    }

    /// Build the numeric row once the categorical columns have been
    /// encoded. `codes` must follow CATEGORICAL_COLUMNS order.
    pub fn to_feature_row(&self, codes: [f64; 4]) -> FeatureRow {
        let [state, district, season, crop] = codes;
        FeatureRow {
            columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            values:  vec![
                state,
                district,
                self.year as f64,
                season,
                crop,
                self.area_hectare,
                self.rainfall_mm,
                self.fertilizer_kg,
                self.pesticide_kg,
                self.ph,
            ],
        }
    }
}

/// A named, fully numeric row ready for scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub columns: Vec<String>,
    pub values:  Vec<f64>,
}
