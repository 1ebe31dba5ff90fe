// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeGroup, AnalysisReport, BodyType, FitPreference, Formality, KidsSize, MeasurementProfile,
    Occasion, OutfitFilter, OutfitRecommendation, SizeBand, SizeClassification,
};
pub use requests::{AnalyzeRequest, OutfitQuery, SessionQuery};
pub use responses::{AnalyzeResponse, ErrorResponse, HealthResponse, OutfitsResponse, SessionResponse};
