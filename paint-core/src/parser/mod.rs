//! Parsing of user input and job files.

mod input;
mod job;

pub use input::{parse_numeric_field, parse_opening_spec};
pub use job::{parse_job_file, parse_job_str, JobFile, JobOpening};
