//! Integration tests

mod detection_test;
mod e2e_test;
mod profit_test;
