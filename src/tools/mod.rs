//! MCP tools registered on the server.

pub mod calculator;

pub use calculator::{
    range_error_to_error_data, AddRequest, AddResponse, RandomNumberRequest, RandomNumberResponse,
    ADD_TOOL_ID, RANDOM_NUMBER_TOOL_ID,
};
