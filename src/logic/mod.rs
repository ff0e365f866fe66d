//! Core logic

pub mod emotion;
