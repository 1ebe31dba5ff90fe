use serde::{Deserialize, Serialize};

/// Garment styling preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPreference {
    Tailored,
    Relaxed,
}

/// Age group the analysis is run for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Adult,
    Kids,
}

impl Default for AgeGroup {
    fn default() -> Self {
        AgeGroup::Adult
    }
}

/// Synthetic body measurements for a single analysis run
///
/// Created fresh per analysis and never mutated; the next analysis
/// replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementProfile {
    #[serde(rename = "heightCm")]
    pub height_cm: u16,
    #[serde(rename = "chestCm")]
    pub chest_cm: u16,
    #[serde(rename = "waistCm")]
    pub waist_cm: u16,
    #[serde(rename = "hipsCm")]
    pub hips_cm: u16,
    #[serde(rename = "shoulderCm")]
    pub shoulder_cm: u16,
    #[serde(rename = "inseamCm")]
    pub inseam_cm: u16,
    #[serde(rename = "fitPreference")]
    pub fit_preference: FitPreference,
    #[serde(rename = "ageGroup")]
    pub age_group: AgeGroup,
}

impl MeasurementProfile {
    /// Hip-to-waist delta in centimeters (signed)
    pub fn hip_waist_delta(&self) -> i32 {
        self.hips_cm as i32 - self.waist_cm as i32
    }

    /// Chest-to-hip delta in centimeters (signed)
    pub fn chest_hip_delta(&self) -> i32 {
        self.chest_cm as i32 - self.hips_cm as i32
    }
}

/// Heuristic torso/hip proportion category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    CurvyPear,
    BalancedRectangle,
    InvertedTriangle,
    ClassicRegular,
}

impl BodyType {
    pub fn label(&self) -> &'static str {
        match self {
            BodyType::CurvyPear => "Curvy / Pear",
            BodyType::BalancedRectangle => "Balanced / Rectangle",
            BodyType::InvertedTriangle => "Inverted Triangle",
            BodyType::ClassicRegular => "Classic / Regular",
        }
    }
}

/// Adult garment size band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SizeBand {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl SizeBand {
    pub fn label(&self) -> &'static str {
        match self {
            SizeBand::Xs => "XS",
            SizeBand::S => "S",
            SizeBand::M => "M",
            SizeBand::L => "L",
            SizeBand::Xl => "XL",
        }
    }
}

/// Kids size band, including the coarse adult-side bridge labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KidsSize {
    Toddler,
    KidsS,
    KidsM,
    KidsL,
    TeenBridge,
    TeenPetite,
    AdultRange,
}

impl KidsSize {
    pub fn label(&self) -> &'static str {
        match self {
            KidsSize::Toddler => "Toddler",
            KidsSize::KidsS => "Kids S",
            KidsSize::KidsM => "Kids M",
            KidsSize::KidsL => "Kids L",
            KidsSize::TeenBridge => "Teen / Adult range",
            KidsSize::TeenPetite => "Teen / Petite",
            KidsSize::AdultRange => "Adult range",
        }
    }
}

/// Top and bottom size bands derived from a measurement profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeClassification {
    pub top: SizeBand,
    pub bottom: SizeBand,
    /// Present only for kids runs
    #[serde(rename = "kidsBand", skip_serializing_if = "Option::is_none", default)]
    pub kids_band: Option<KidsSize>,
}

/// Outfit bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Work,
    Evening,
    Weekend,
    Event,
}

impl Occasion {
    /// Display label; kids runs relabel Work and Weekend
    pub fn label_for(&self, age_group: AgeGroup) -> &'static str {
        match (self, age_group) {
            (Occasion::Work, AgeGroup::Kids) => "School / Study",
            (Occasion::Weekend, AgeGroup::Kids) => "Playtime",
            (Occasion::Work, _) => "Work",
            (Occasion::Evening, _) => "Evening",
            (Occasion::Weekend, _) => "Weekend",
            (Occasion::Event, _) => "Special Event",
        }
    }
}

/// Dress code attached to a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Formal,
    SmartCasual,
    Casual,
    Dressy,
}

impl Formality {
    pub fn label(&self) -> &'static str {
        match self {
            Formality::Formal => "Formal",
            Formality::SmartCasual => "Smart Casual",
            Formality::Casual => "Casual",
            Formality::Dressy => "Dressy",
        }
    }
}

/// One rendered catalog entry with body-type-conditional text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    pub id: String,
    pub occasion: Occasion,
    #[serde(rename = "occasionLabel")]
    pub occasion_label: String,
    pub formality: Formality,
    #[serde(rename = "formalityLabel")]
    pub formality_label: String,
    pub visual: String,
    pub title: String,
    pub detail: String,
    pub good: String,
    pub avoid: String,
}

/// Visible-subset filter over a generated outfit list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfitFilter {
    All,
    Occasion(Occasion),
}

impl OutfitFilter {
    /// Parse the wire form: "all" | "work" | "evening" | "weekend" | "event"
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "all" => Some(OutfitFilter::All),
            "work" => Some(OutfitFilter::Occasion(Occasion::Work)),
            "evening" => Some(OutfitFilter::Occasion(Occasion::Evening)),
            "weekend" => Some(OutfitFilter::Occasion(Occasion::Weekend)),
            "event" => Some(OutfitFilter::Occasion(Occasion::Event)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutfitFilter::All => "all",
            OutfitFilter::Occasion(Occasion::Work) => "work",
            OutfitFilter::Occasion(Occasion::Evening) => "evening",
            OutfitFilter::Occasion(Occasion::Weekend) => "weekend",
            OutfitFilter::Occasion(Occasion::Event) => "event",
        }
    }
}

impl Default for OutfitFilter {
    fn default() -> Self {
        OutfitFilter::All
    }
}

/// Complete output of one analysis run
///
/// Profile, body type, sizes and outfit list are produced together and
/// replaced together; there is never a partially updated report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(rename = "analysisId")]
    pub analysis_id: uuid::Uuid,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub profile: MeasurementProfile,
    #[serde(rename = "bodyType")]
    pub body_type: BodyType,
    pub sizes: SizeClassification,
    pub outfits: Vec<OutfitRecommendation>,
}
