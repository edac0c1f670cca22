#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used, clippy::print_stderr)]

/// Data-driven URL fixtures
///
/// Round-trip, component extraction and rejection cases loaded from
/// `tests/fixtures/urls.json`.
#[path = "fixtures/fixture_loader.rs"]
mod fixture_loader;

#[path = "fixtures/fixture_runner.rs"]
mod fixture_runner;
