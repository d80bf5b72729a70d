//! Data types for the lead pipeline.

pub mod form;
pub mod outcome;
pub mod report;
pub mod solution;
