// Agent module - dispatch between the model path and the shell path

pub mod fallback;
pub mod harness;
pub mod query;

#[allow(unused_imports)]
pub use fallback::{API_FAILURE, NO_QUERY};
pub use harness::Harness;
pub use query::ModelQueryExecutor;
