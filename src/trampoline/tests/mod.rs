//! Tests for the trampoline
//!
//! Organized by feature area

mod depth_tests;
mod helpers;
