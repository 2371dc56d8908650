pub mod keys;
mod service_tests;
