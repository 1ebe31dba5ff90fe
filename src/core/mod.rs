// Core pipeline exports
pub mod catalog;
pub mod estimator;
pub mod sizing;
pub mod synthesis;

pub use catalog::{filter_outfits, generate_outfits};
pub use estimator::Estimator;
pub use sizing::{
    classify, estimate_bottom_size, estimate_kids_size, estimate_top_size, infer_body_type,
    size_band_for,
};
pub use synthesis::{sample_profile, synthesize, StdUniform, SynthesisMode, UniformSource};
