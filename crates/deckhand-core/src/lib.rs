//! Deckhand Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Deckhand
//! deployment artifact generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          deckhand-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   GenerationService + Generators        │
//! │  (DeploymentGenerator, Fastlane...)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (TemplateStore, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     deckhand-adapters (Infrastructure)  │
//! └─────────────────────────────────────────┘
//!
//!   Domain: descriptor → ConfigurationBuilder → DeploymentPlan → FinalizedPlan
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use deckhand_core::prelude::*;
//!
//! let descriptor = ApplicationDescriptor::new("SWIFT").with_name("AcmeProject");
//! let options = GenerateOptions::default();
//!
//! let service = GenerationService::new(store, renderer, filesystem);
//! let report = service.generate(&descriptor, &options, "./out")?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GenerationService, WriteKind,
        ports::{AssetFile, Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        AndroidPipelineSettings, ApplicationDescriptor, BackendPlatform, GenerateOptions,
        PlatformProfile, RepoType,
    };
    pub use crate::error::{DeckhandError, DeckhandResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
