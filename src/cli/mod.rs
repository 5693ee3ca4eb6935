//! CLI infrastructure for the verdict toolkit
//!
//! This module provides the command-line interface for evaluating predictors
//! against datasets and inspecting dataset contents.

pub mod commands;
