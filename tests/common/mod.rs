//! Common test utilities for Octoship CLI tests.
//!
//! This module provides:
//! - `TestEnv`: a throwaway git repository plus stub build and sync tools
//! - Assertion macros: `assert_output_contains!`, `assert_no_workspace_left!`
//! - Fixtures: stub tool scripts and site content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
