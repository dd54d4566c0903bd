//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles the filesystem and the controlling terminal.

pub mod permissions;
pub mod table_io;
pub mod terminal;
