//! Data models

pub mod holiday;
