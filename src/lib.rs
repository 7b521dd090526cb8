//! Filter, map, reduce and join prompts over small in-memory datasets.
//!
//! Tables live in [`data::model::Datasets`]; each prompt in [`prompts`] takes
//! the tables it needs as arguments. [`catalog`] names every prompt and runs
//! it into JSON.

pub mod catalog;
pub mod data;
pub mod error;
pub mod prompts;

pub use catalog::{Prompt, run};
pub use data::model::Datasets;
pub use error::{QueryError, QueryResult};
