//! Core services for corpus discovery, sampling, and output sinks

pub mod corpus;
pub mod sample;
pub mod sink;
