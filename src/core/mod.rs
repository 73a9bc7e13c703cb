//! Core module - Building blocks for a vowel scan
//!
//! This module provides:
//! - The vowel-word tokenizer
//! - File access and output sink capabilities
//! - The run result model
//! - Rendering for the supported output formats
//! - Diagnostics helpers

pub mod file_reader;
pub mod model;
pub mod render;
pub mod sink;
pub mod tokenizer;
pub mod util;
