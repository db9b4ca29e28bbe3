//! Metro Core Library
//!
//! Core domain logic for the metro route planner: the station/route/line
//! network model and the queries that run over it.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
