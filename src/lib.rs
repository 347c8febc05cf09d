// Library target exists solely for integration tests and criterion benchmarks.
// The binary entry point is main.rs; this file re-declares the module tree so
// that test harnesses can import types via `hanjaro::engine::*` / `hanjaro::session::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests and benchmarks
pub mod content;
pub mod engine;
pub mod session;
pub mod store;
// Public because session::lookup exposes the query editor in its state
pub mod ui;

// Private: everything else in the tree, only exercised through the binary
mod app;
mod config;
mod event;
