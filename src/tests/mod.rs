//! Scenario tests for the generator, decoder and configuration

mod config_tests;
pub mod test_utils;
