// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between raw form values and the numeric tensor
// the model consumes, plus the dataset behind the dropdowns.
//
//   reference CSV
//       │
//       ▼
//   ReferenceDatasetLoader → distinct State / District / Season / Crop
//
//   InputRecord (from the form)
//       │
//       ▼
//   OrdinalEncoder         → categorical columns become codes
//       │
//       ▼
//   FeatureScaler          → all ten columns normalised
//       │
//       ▼
//   Vec<f64>               → handed to the ml layer
//
// Reference: csv crate documentation
//            Rust Book §13 (Iterators and Closures)

/// Loads the historical dataset used for dropdown options
pub mod loader;

/// Maps categorical strings to the codes fitted at training time
pub mod encoder;

/// Standard / min-max feature scaling with shape checks
pub mod scaler;
