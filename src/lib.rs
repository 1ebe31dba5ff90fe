//! FitAI Algo - profile estimation service for the FitAI styling demo
//!
//! This library provides the core "Profile Estimator" pipeline behind the
//! FitAI demo: synthetic measurement generation, threshold-rule body-type
//! and size classification, and a fixed outfit catalog with
//! body-type-conditional text, plus per-session quota accounting.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Estimator, StdUniform, SynthesisMode, UniformSource};
pub use models::{
    AgeGroup, AnalysisReport, BodyType, FitPreference, MeasurementProfile, Occasion, OutfitFilter,
    OutfitRecommendation, SizeBand, SizeClassification,
};
pub use services::{SessionState, SessionStore};
