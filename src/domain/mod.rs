// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// predictor works with:
//
//   form.rs        — the values a user can enter and the
//                    dropdown options offered to them
//   record.rs      — the single-row Input Record and the fixed
//                    feature column order the artifacts expect
//   prediction.rs  — the prediction result and the two-state
//                    view machine (Idle / Result Shown)
//   error.rs       — recoverable inference errors shown to users
//   traits.rs      — seams the other layers implement
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O or network calls
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

pub mod form;

pub mod record;

pub mod prediction;

pub mod error;

pub mod traits;
