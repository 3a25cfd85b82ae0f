//! Crate-level tests for operators and control flow.

mod operators_tests;
