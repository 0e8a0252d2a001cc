// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers; does no maths and no I/O of
// its own.
//
//   app_context.rs     — initialise-once context shared by every
//                        request (artifacts + dropdown options)
//   predict_use_case.rs — the inference pipeline: record →
//                        encode → scale → predict
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Startup context and configuration
pub mod app_context;

// The prediction workflow
pub mod predict_use_case;
