//! # Inkcard
//!
//! Turns a Medium RSS/Atom feed into a themed SVG card and a JSON
//! projection of the latest posts.
//!
//! ## Architecture
//!
//! Inkcard follows a modular pipeline architecture:
//!
//! ```text
//! Fetcher → Normalizer → Renderer / Projector
//! ```
//!
//! - [`fetcher`]: HTTP client for retrieving feed documents
//! - [`normalizer`]: Converts RSS/Atom feeds to unified domain models
//! - [`render`]: Deterministic SVG card layout and emission
//! - [`projector`]: JSON view of the normalized feed
//! - [`server`]: HTTP API exposing both outputs
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API
//! inkcard serve --port 8787
//!
//! # Write latest.svg and latest.json for a handle
//! inkcard generate --username @someone --limit 3
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Environment-driven configuration
//! - [`domain`]: Core domain models (Feed, Post)
//! - [`params`]: Request parameter resolution
//! - [`text`]: Text cleanup, wrapping, and markup escaping

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod fetcher;
pub mod normalizer;
pub mod params;
pub mod projector;
pub mod render;
pub mod server;
pub mod text;
