//! Shared utilities for Lakeside: logger bootstrap and time helpers.

pub mod logger;
pub mod time;
