//! Class grade aggregation and ranking.
//!
//! This module turns per-class student rows into class results, keeps them
//! ranked by mean grade, and builds the cross-class summary the report is
//! rendered from.

pub mod aggregate;
pub mod analyzer;
pub mod grade;
pub mod summary;
pub mod types;
