//! CLI infrastructure for the voice-command game toolkit
//!
//! This module provides the command-line interface for analyzing commands
//! against the grammar, playing interactive sessions, and running batch
//! Monty Hall simulations.

pub mod commands;
pub mod output;
