//! Integration test modules

mod health;
