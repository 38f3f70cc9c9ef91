// Fixed results returned at the agent boundary in place of errors

/// Returned for an empty or absent query; the client is not called
pub const NO_QUERY: &str = "Error: No query provided.";

/// Returned whenever the completion client fails
pub const API_FAILURE: &str = "Sorry, I couldn't get a response from the API.";
