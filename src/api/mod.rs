//! HTTP API module for the wage calculation engine.
//!
//! This module provides the REST API endpoint for calculating one
//! employee's pay for one payroll period.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
