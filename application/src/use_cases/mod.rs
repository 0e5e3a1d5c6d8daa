//! Use cases

pub mod get_consultation;
pub mod submit_answers;
