// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod specs;

pub mod catalog;
pub mod download;
pub mod file;
pub mod progress;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
