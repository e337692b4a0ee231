//! Multi-country payroll tax calculation and compliance engine.
//!
//! This crate calculates payroll withholdings (progressive income tax,
//! social security contributions, statutory benefits) for Brazil, Mexico,
//! and Argentina from per-country bracket tables, and validates employee
//! data against country-specific compliance rule catalogs.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod compliance;
pub mod config;
pub mod error;
pub mod models;
