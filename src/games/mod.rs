//! Ready-to-play game definitions.

pub mod classic;
