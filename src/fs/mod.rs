//! Filesystem utilities for specdocs.
//!
//! Generated documents are only ever created, never replaced. This module
//! provides the no-clobber atomic write that enforces that.

pub mod atomic;

pub use atomic::write_new_file;
