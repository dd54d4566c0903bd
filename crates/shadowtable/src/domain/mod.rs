//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and types without I/O dependencies.

pub mod algorithm;
pub mod hasher;
pub mod record;
pub mod salt;
pub mod secret;
pub mod validate;
