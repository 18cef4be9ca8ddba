//! Error handling utilities for MCP server

use rmcp::ErrorData;
use sprout_core::PlanError;

/// Converts planner errors to MCP errors, keeping request-shape problems
/// distinguishable from server faults.
pub fn to_mcp_error(message: &str, error: PlanError) -> ErrorData {
    match error {
        PlanError::InvalidInput { .. } | PlanError::UnknownPlant { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}
