//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for payroll calculation
//! and compliance validation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComplianceRequest, PayrollRequest};
pub use response::ApiError;
pub use state::AppState;
