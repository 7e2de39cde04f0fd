//! Utility functions and helpers
//!
//! This module provides various utility functions used throughout the library.
//!
//! ## Modules
//!
//! - [`timing`] - Duration measurement wrappers for execution phases

pub mod timing;
