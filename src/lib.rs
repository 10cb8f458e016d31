//! Core library for the `apiprobe` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration loading, URL validation and request execution, health
//! probes, the bounded-concurrency batch dispatcher, the periodic monitor,
//! subprocess front-ends for the load tester and scanner, and the command
//! history log. The primary user-facing interface is the `apiprobe`
//! command-line application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod batch;
pub mod config;
pub mod error;
pub mod history;
pub mod http;
pub mod monitor;
pub mod probe;
pub mod system;
pub mod tools;
