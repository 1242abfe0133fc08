//! Etude Engraving Backend - Sheet Rendering via LilyPond Subprocess
//!
//! This crate turns a written markup document into an engraved sheet
//! (PNG, PDF, or SVG) by spawning LilyPond. The executable is resolved
//! through a config override, the `LILYPOND_PATH` environment variable,
//! the `PATH`, and finally a list of common installation locations.
//!
//! The subprocess is supervised: it runs under a timeout, its stderr is
//! captured for diagnostics, and a clean exit is only trusted once the
//! expected output file actually exists.
//!
//! # Module Structure
//!
//! - [`engraver`]: executable discovery, invocation, supervision
//! - [`error`]: coded error types

pub mod engraver;
pub mod error;

pub use engraver::{
    parse_version, EngraveReport, Engraver, EngraverConfig, DEFAULT_TIMEOUT_SECS,
};
pub use error::{EngraveError, EngraveResult};
