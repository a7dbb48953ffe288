// Composition root.
//
// Responsibilities
// - Receive the resolved settings from `main`.
// - Instantiate concrete adapters and wire them into the use case services.
// - Build the HTTP router with CORS, tracing and the optional API document.

pub mod docs;
pub mod http;
pub mod state;
