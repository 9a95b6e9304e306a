//! Parrot - record your voice and play it straight back
//!
//! This crate provides an interactive terminal voice recorder: microphone
//! audio is captured to a single fixed-path FLAC take and played back on
//! demand.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, state machines, and errors
//! - **Application**: The recording controller and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (cpal, rodio, notifications, config)
//! - **CLI**: Command-line interface, argument parsing, and the interactive loop

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

/// Default log filter when PARROT_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";
