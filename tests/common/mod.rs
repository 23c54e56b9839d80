//! Common test utilities for paperscan integration tests
//!
//! Provides a temporary corpus directory that tests fill with text files
//! and then inspect after a run.

pub mod corpus;

pub use corpus::TestCorpus;
