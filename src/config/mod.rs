// ABOUTME: Configuration module for environment-sourced server settings
// ABOUTME: Re-exports the environment loader used by the binary and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management

pub mod environment;

pub use environment::{CleverConfig, Environment, ServerConfig};
