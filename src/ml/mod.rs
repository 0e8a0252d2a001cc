// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All burn-specific code lives here and nowhere else.
//
//   model.rs      — the yield regressor architecture
//                   (ReLU hidden layers + one linear output)
//                   and its serialisable config
//
//   inferencer.rs — rebuilds the regressor from the artifact
//                   store, loads its weights, and predicts
//                   one scaled row at a time on the CPU
//
// Training happens elsewhere; this crate only loads the result.
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Records)

/// Feed-forward regression model architecture
pub mod model;

/// Inference engine — loads weights and predicts a yield
pub mod inferencer;
