// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod error;
pub mod params;
pub mod progress;
pub mod reconcile;
pub mod runner;
pub mod source;
pub mod specs;
pub mod store;
