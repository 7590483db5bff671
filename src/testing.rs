//! Deterministic input generators shared by the test suites and benches.

pub mod codepoints;
