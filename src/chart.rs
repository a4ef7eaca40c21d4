//! Charting for the dashboard.
//!
//! Not implemented yet; this module defines no behavior.
