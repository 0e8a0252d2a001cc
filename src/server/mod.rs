// ============================================================
// Layer 1 — Web Presentation Layer
// ============================================================
// Serves the single-page form over HTTP using axum. Like the
// CLI, this layer only converts between the outside world and
// the application layer; the pipeline lives in Layer 2.
//
//   app.rs      — listener startup
//   routing.rs  — route table + request tracing
//   handlers.rs — one function per endpoint
//   page.rs     — HTML rendering of the form and its outcome
//   types.rs    — JSON request/response bodies
//
// Reference: axum documentation (Router, extractors, State)

pub mod app;

pub mod routing;

pub mod handlers;

pub mod page;

pub mod types;
