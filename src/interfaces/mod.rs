//! User-facing adapters. The only one is the interactive terminal menu.

pub mod cli;
