// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-system concerns that the other layers should not know
// about:
//
//   artifact_store.rs — where the trained artifacts live, which
//                       files must exist, and how each one is
//                       read (JSON for encoder / scaler / model
//                       config, burn's CompactRecorder for the
//                       model weights)
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Checkpointing)

/// Fail-fast loading of model, encoder and scaler artifacts
pub mod artifact_store;
