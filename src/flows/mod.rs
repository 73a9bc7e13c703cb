//! Flows - End-to-end runs built on the core building blocks

pub mod runner;
