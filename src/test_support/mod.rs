//! Shared test helpers. Compiled only for unit tests.

pub mod mocks;
