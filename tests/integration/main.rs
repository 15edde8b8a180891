//! Router integration tests

mod api_tests;
