//! Diagnostics produced while parsing.
//!
//! Errors are never fatal: the parser accumulates them and keeps going so a
//! single pass reports as much as possible. Each error carries:
//!
//! - The kind of failure and the tokens involved
//! - The source position of the offending token
//! - An optional tip for display

pub mod errors;
