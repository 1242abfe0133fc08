//! Etudes CLI library.
//!
//! This crate provides the core functionality for the `etudes` binary:
//! spec loading and the validate, generate, play, template, and doctor
//! commands.

pub mod commands;
pub mod input;
