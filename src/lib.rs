//! UI Toolkit String Library generator
//!
//! Reads Unity UI Toolkit stylesheets (USS) and documents (UXML), collects the
//! class and element names they declare, and writes C# classes holding those
//! names as string constants.

pub mod asset_source;
pub mod cli;
pub mod config;
pub mod cs;
pub mod dedup;
pub mod error;
pub mod generator;
pub mod logging;
pub mod naming;
pub mod unity_project;
pub mod uss;
pub mod uxml;
pub mod writer;
#[cfg(test)]
pub mod test_utils;
