// src/lib.rs
//! Dataset indexing, graph assembly, tree layout and prediction ranking for
//! code-solution classification.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exit;
pub mod graph;
pub mod index;
pub mod inference;
pub mod label;
pub mod layout;
pub mod logging;
pub mod reporting;

pub use error::{Result, SolgraphError};
