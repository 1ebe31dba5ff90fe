use crate::models::{
    AgeGroup, BodyType, FitPreference, Formality, Occasion, OutfitFilter, OutfitRecommendation,
    SizeBand,
};

/// Generate the fixed five-entry outfit catalog for one analysis
///
/// Text variants are a deterministic lookup over four derived flags; there
/// is no randomness at this stage, and the output order is catalog order,
/// stable across calls with identical inputs. Kids runs relabel the
/// occasion display and swap garment wording for age-appropriate pieces.
pub fn generate_outfits(
    body_type: BodyType,
    top_size: SizeBand,
    bottom_size: SizeBand,
    fit_preference: FitPreference,
    age_group: AgeGroup,
) -> Vec<OutfitRecommendation> {
    let is_curvy = body_type == BodyType::CurvyPear;
    let is_inverted = body_type == BodyType::InvertedTriangle;
    let is_relaxed = fit_preference == FitPreference::Relaxed;
    let is_kid = age_group == AgeGroup::Kids;

    let fit = top_size.label();

    let entry = |id: &str,
                 occasion: Occasion,
                 formality: Formality,
                 visual: &str,
                 title: String,
                 detail: String,
                 good: &str,
                 avoid: &str| OutfitRecommendation {
        id: id.to_string(),
        occasion,
        occasion_label: occasion.label_for(age_group).to_string(),
        formality,
        formality_label: formality.label().to_string(),
        visual: visual.to_string(),
        title,
        detail,
        good: good.to_string(),
        avoid: avoid.to_string(),
    };

    vec![
        entry(
            "work-formal",
            Occasion::Work,
            Formality::Formal,
            if is_kid {
                "Neat polo + chinos"
            } else {
                "Tailored blazer + trousers"
            },
            if is_kid {
                format!("School Ready ({})", fit)
            } else {
                format!("Office Ready ({})", fit)
            },
            if is_kid {
                "Comfortable polo, stretchy chinos and a light cardigan for long school days."
                    .to_string()
            } else {
                "Structured blazer, fitted trousers, clean shirt for a sharp everyday office look."
                    .to_string()
            },
            if is_curvy {
                "High-waist trousers and a slightly nipped-in blazer to highlight the waist."
            } else if is_relaxed {
                "Regular-fit blazer with straight-leg trousers for unfussy clean lines."
            } else {
                "Straight-leg trousers and a regular-fit blazer for clean lines."
            },
            if is_inverted {
                "Very padded shoulders that exaggerate upper body width."
            } else {
                "Overly baggy suits that hide your natural shape."
            },
        ),
        entry(
            "evening-smart",
            Occasion::Evening,
            Formality::SmartCasual,
            if is_kid {
                "Dark jeans + soft shirt"
            } else {
                "Dark denim + lightweight shirt"
            },
            if is_kid {
                format!("Family Evenings ({})", fit)
            } else {
                format!("Dinner & Dates ({})", fit)
            },
            if is_kid {
                "Dark jeans, a soft button-up or tee, and easy slip-on shoes.".to_string()
            } else {
                "Dark jeans, relaxed shirt or blouse, and smart sneakers/loafers.".to_string()
            },
            if is_curvy {
                "Soft fabrics that skim the body and v-necklines to elongate the torso."
            } else {
                "Fitted top with straight or slim bottoms for a balanced silhouette."
            },
            if is_curvy {
                "Boxy tops that cut across the widest part of the hips."
            } else {
                "Very low-rise bottoms that shorten the legs."
            },
        ),
        entry(
            "weekend-casual",
            Occasion::Weekend,
            Formality::Casual,
            if is_kid {
                "Soft tee + play joggers"
            } else {
                "Relaxed tee + joggers"
            },
            if is_kid {
                format!("Playtime Comfort ({})", fit)
            } else {
                format!("Weekend Comfort ({})", fit)
            },
            if is_kid {
                format!(
                    "Soft T-shirt, durable {} joggers, and sneakers that can take a playground.",
                    bottom_size.label()
                )
            } else {
                format!(
                    "Soft T-shirt, {} joggers or relaxed jeans, and easy sneakers.",
                    bottom_size.label()
                )
            },
            if is_relaxed {
                "Roomy mid-weight layers that keep the easy drape you prefer."
            } else {
                "Medium-weight fabrics and mid-rise bottoms for all-day comfort and balance."
            },
            "Overly tight tops with ultra-skinny bottoms that restrict movement.",
        ),
        entry(
            "event-dressy",
            Occasion::Event,
            Formality::Dressy,
            if is_kid {
                "Smart dress / mini suit"
            } else {
                "Midi dress / tailored set"
            },
            if is_kid {
                format!("Parties & Visits ({})", fit)
            } else {
                format!("Events & Functions ({})", fit)
            },
            if is_kid {
                "A smart dress or mini suit in easy fabrics that survive a party.".to_string()
            } else {
                "Midi dress or tailored co-ord with clean lines and minimal clutter.".to_string()
            },
            if is_curvy {
                "Wrap or A-line shapes that follow your curves without clinging."
            } else {
                "Column silhouettes and subtle structure to look sleek and modern."
            },
            "Very shiny clingy fabrics that highlight areas you may not want to emphasize.",
        ),
        entry(
            "event-statement",
            Occasion::Event,
            Formality::Dressy,
            if is_kid {
                "Matching set + light sneakers"
            } else {
                "Monochrome co-ord + clean sneakers"
            },
            format!("Statement Looks ({})", fit),
            if is_kid {
                "A matching two-piece set with one fun color accent and light sneakers.".to_string()
            } else {
                "One-color co-ord worn head to toe with a single standout accessory.".to_string()
            },
            if is_inverted {
                "V-necks and softer shoulder lines that balance a broader upper body."
            } else {
                "Monochrome dressing head to toe to read taller and put the focus on fit."
            },
            if is_relaxed {
                "Stiff structured pieces that fight the relaxed drape you prefer."
            } else {
                "Mixing more than two statement pieces in a single look."
            },
        ),
    ]
}

/// Restrict a generated list to the entries visible under a filter
///
/// Kids-relabeled entries still filter by their underlying occasion bucket.
pub fn filter_outfits(
    outfits: &[OutfitRecommendation],
    filter: OutfitFilter,
) -> Vec<OutfitRecommendation> {
    match filter {
        OutfitFilter::All => outfits.to_vec(),
        OutfitFilter::Occasion(occasion) => outfits
            .iter()
            .filter(|o| o.occasion == occasion)
            .cloned()
            .collect(),
    }
}
