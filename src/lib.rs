// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod model;

pub mod accordion;
pub mod backend;
pub mod export;
pub mod lifecycle;
pub mod view;

pub mod gui;
#[cfg(feature = "cli")]
pub mod cli;
