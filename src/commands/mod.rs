//! CLI commands for metro

pub mod dispatch;
pub mod intersections;
pub mod nearest;
pub mod routes;
pub mod shell;
pub mod station;
pub mod terminals;
