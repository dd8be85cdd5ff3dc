//! Composite relevance scoring for ranking candidate places.
//!
//! Score = base popularity + category term + keyword term. Category
//! rules are an ordered table and the first match wins; keyword rules
//! all contribute additively. The asymmetry is load-bearing observed
//! behavior, keep it when touching this module.

use serde::Deserialize;

use crate::models::Place;

/// One category rule: case-insensitive substring against the category
/// field, with the weight applied on match.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRule {
    pub pattern: String,
    pub weight: f64,
}

/// One keyword rule: case-insensitive substring against the combined
/// name/address/description text.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordRule {
    pub pattern: String,
    pub weight: f64,
}

/// Tunable weight tables, supplied by configuration.
///
/// `category_rules` is evaluated in order and short-circuits on the
/// first match; `keyword_rules` are all evaluated and summed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeightTable {
    pub category_rules: Vec<CategoryRule>,
    pub keyword_rules: Vec<KeywordRule>,
}

const TOURIST_BOOST: f64 = 20.0;
const NOISE_PENALTY: f64 = -10.0;
const KEYWORD_BOOST: f64 = 3.0;

impl Default for WeightTable {
    fn default() -> Self {
        let tourist = ["museum", "monument", "attraction", "tourist", "heritage", "temple", "park"];
        let noise = ["restaurant", "cafe", "bar", "fast food"];
        let keywords = ["fort", "palace", "temple", "tomb", "gate", "lake", "garden", "beach"];

        let mut category_rules = Vec::new();
        for pattern in tourist {
            category_rules.push(CategoryRule {
                pattern: pattern.to_string(),
                weight: TOURIST_BOOST,
            });
        }
        for pattern in noise {
            category_rules.push(CategoryRule {
                pattern: pattern.to_string(),
                weight: NOISE_PENALTY,
            });
        }

        let keyword_rules = keywords
            .iter()
            .map(|pattern| KeywordRule {
                pattern: pattern.to_string(),
                weight: KEYWORD_BOOST,
            })
            .collect();

        Self {
            category_rules,
            keyword_rules,
        }
    }
}

/// Per-place score decomposition. Ephemeral; computed per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub category: f64,
    pub keyword: f64,
    pub total: f64,
}

/// A place paired with its score, as returned by [`rank_places`].
#[derive(Debug, Clone)]
pub struct RankedPlace {
    pub place: Place,
    pub score: ScoreBreakdown,
}

/// Post-scoring filter and truncation knobs.
#[derive(Debug, Clone, Default)]
pub struct RankOptions {
    /// Drop results with a combined score below this.
    pub min_score: Option<f64>,
    /// Keep at most this many results.
    pub limit: Option<usize>,
}

/// Scores a single place against the weight tables.
pub fn score_place(place: &Place, weights: &WeightTable) -> ScoreBreakdown {
    score_place_with_signal(place, 0.0, weights)
}

/// Scores a place with an additional external signal (e.g. a social
/// engagement score) folded into the base term.
pub fn score_place_with_signal(place: &Place, signal: f64, weights: &WeightTable) -> ScoreBreakdown {
    let base = place.popularity_score + signal;

    let category_text = place.category.to_lowercase();
    let mut category = 0.0;
    for rule in &weights.category_rules {
        if category_text.contains(&rule.pattern.to_lowercase()) {
            category = rule.weight;
            break;
        }
    }

    let haystack = format!("{} {} {}", place.name, place.address, place.description).to_lowercase();
    let mut keyword = 0.0;
    for rule in &weights.keyword_rules {
        if haystack.contains(&rule.pattern.to_lowercase()) {
            keyword += rule.weight;
        }
    }

    ScoreBreakdown {
        base,
        category,
        keyword,
        total: base + category + keyword,
    }
}

/// Scores every place, filters by minimum score, and orders by combined
/// score descending with base popularity as the tie-break.
pub fn rank_places(places: &[Place], weights: &WeightTable, options: &RankOptions) -> Vec<RankedPlace> {
    let mut ranked: Vec<RankedPlace> = places
        .iter()
        .map(|place| RankedPlace {
            place: place.clone(),
            score: score_place(place, weights),
        })
        .filter(|r| options.min_score.is_none_or(|min| r.score.total >= min))
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total
            .partial_cmp(&a.score.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                b.score
                    .base
                    .partial_cmp(&a.score.base)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });

    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }
    ranked
}
