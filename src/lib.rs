//! EMS WebUI Library
//!
//! This crate provides the core functionality for the EMS WebUI application.
//! The dashboard itself (application shell, authentication, charting) is not
//! built yet; the implemented surface is the startup diagnostics and the
//! ambient configuration and logging plumbing around it.

pub mod app;
pub mod auth;
pub mod chart;
pub mod config;
pub mod dispatch;

pub use config::AppConfig;
