//! # Quartet
//!
//! Four small, independent utilities behind one binary: a memoizing
//! Fibonacci evaluator with cache hit/miss accounting, a decimal-number
//! extractor and summer, a log-file level counter, and an interactive
//! contact assistant bot.
//!
//! ## Modules
//!
//! - [`fib`] - Memoizing Fibonacci evaluator (the core primitive)
//! - [`numbers`] - Decimal extraction and round-half-up summation
//! - [`logscan`] - Log level counting and filtering
//! - [`contacts`] - Contact book and the bot's command layer
//! - [`cli`] - Command-line interface
//! - [`types`] - Shared configuration and error types

pub mod cli;
pub mod contacts;
pub mod fib;
pub mod logscan;
pub mod numbers;
pub mod types;

pub use types::config::Config;
pub use types::errors::{QuartetError, QuartetResult};
