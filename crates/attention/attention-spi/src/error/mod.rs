//! Error types for attention-scale analysis.
//!
//! This module contains the error enum, its classification and the Result alias.

mod attention_error;

pub use attention_error::{AttentionError, ErrorKind, Result};
