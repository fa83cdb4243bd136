//! kvtest - testing console for a key-value store backend
//!
//! This library drives a testing backend's UI API: it polls store
//! connectivity, runs test routines and renders their results into a typed
//! page model that the CLI and the web console both read.

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod page;
pub mod render;
pub mod server;
