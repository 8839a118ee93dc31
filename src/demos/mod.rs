//! Demonstration call sites
//!
//! Each demo comes as a pair: the plain recursive function and the same
//! algorithm written as a frame for the trampoline. Both are kept so their
//! results and side effects can be compared.

pub mod get_max;
pub mod print_line;
