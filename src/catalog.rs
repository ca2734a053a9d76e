//! Arena and blueprint records: the static, read-only catalog behind the
//! listing and detail pages.
//!
//! The dataset is bundled as JSON, parsed once, and validated up front so
//! that bad data (out-of-range score, dangling blueprint reference, missing
//! translation) fails at load instead of misrendering later. Nothing in the
//! catalog mutates at runtime.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Localized;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid catalog: {0}")]
    Invalid(String),
    #[error("unknown {kind}: {id}")]
    LookupMiss { kind: &'static str, id: String },
}

// =============================================================================
// Enumerated tags
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Service,
    Management,
    Marketing,
    RiskControl,
    Operations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Finance,
    Retail,
    Education,
    Healthcare,
    Energy,
    Manufacturing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArenaStatus {
    Verified,
    InArena,
}

/// Display metadata for a category or industry tag. Exhaustive per-variant
/// mapping rather than a keyed dictionary, so a new variant cannot ship
/// without its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub name_en: &'static str,
    pub name_zh: &'static str,
    pub icon: &'static str,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Service,
        Category::Management,
        Category::Marketing,
        Category::RiskControl,
        Category::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Service => "service",
            Category::Management => "management",
            Category::Marketing => "marketing",
            Category::RiskControl => "risk-control",
            Category::Operations => "operations",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == id)
    }

    pub fn info(&self) -> TagInfo {
        match self {
            Category::Service => TagInfo {
                name_en: "Customer Support",
                name_zh: "服务类",
                icon: "Headphones",
            },
            Category::Management => TagInfo {
                name_en: "Management",
                name_zh: "管理类",
                icon: "Settings",
            },
            Category::Marketing => TagInfo {
                name_en: "Marketing",
                name_zh: "营销类",
                icon: "Megaphone",
            },
            Category::RiskControl => TagInfo {
                name_en: "Risk Control",
                name_zh: "风控类",
                icon: "Shield",
            },
            Category::Operations => TagInfo {
                name_en: "Operations",
                name_zh: "运营类",
                icon: "Cog",
            },
        }
    }
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::Finance,
        Industry::Retail,
        Industry::Education,
        Industry::Healthcare,
        Industry::Energy,
        Industry::Manufacturing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Finance => "finance",
            Industry::Retail => "retail",
            Industry::Education => "education",
            Industry::Healthcare => "healthcare",
            Industry::Energy => "energy",
            Industry::Manufacturing => "manufacturing",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Industry::ALL.into_iter().find(|i| i.as_str() == id)
    }

    pub fn info(&self) -> TagInfo {
        match self {
            Industry::Finance => TagInfo {
                name_en: "Finance",
                name_zh: "金融",
                icon: "Building",
            },
            Industry::Retail => TagInfo {
                name_en: "Retail",
                name_zh: "零售",
                icon: "ShoppingCart",
            },
            Industry::Education => TagInfo {
                name_en: "Education",
                name_zh: "教育",
                icon: "GraduationCap",
            },
            Industry::Healthcare => TagInfo {
                name_en: "Healthcare",
                name_zh: "医疗",
                icon: "Stethoscope",
            },
            Industry::Energy => TagInfo {
                name_en: "Energy",
                name_zh: "能源",
                icon: "Zap",
            },
            Industry::Manufacturing => TagInfo {
                name_en: "Manufacturing",
                name_zh: "制造",
                icon: "Wrench",
            },
        }
    }
}

// =============================================================================
// Arena records
// =============================================================================

/// Four-pillar scores, each in 0..=100 (the upper bound is enforced by
/// catalog validation; u8 rules out negatives).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub quality: u8,
    pub efficiency: u8,
    pub cost: u8,
    pub trust: u8,
}

impl Metrics {
    pub fn values(&self) -> [u8; 4] {
        [self.quality, self.efficiency, self.cost, self.trust]
    }

    pub fn min(&self) -> u8 {
        self.values().into_iter().min().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedMetric {
    pub label: Localized,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubStats {
    pub stars: u64,
    pub forks: u64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arena {
    pub id: String,
    pub title: Localized,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Localized>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_achievement: Option<Localized>,
    pub category: Category,
    pub industry: Industry,
    pub status: ArenaStatus,
    pub metrics: Metrics,
    /// Keyed sub-scores in document order; the page renders them in the
    /// order the dataset lists them, not alphabetically.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "detailed_entries::serialize",
        deserialize_with = "detailed_entries::deserialize"
    )]
    pub detailed_metrics: Option<Vec<(String, DetailedMetric)>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Arena {
    pub fn stars(&self) -> u64 {
        self.github.as_ref().map(|g| g.stars).unwrap_or(0)
    }
}

/// `detailedMetrics` is a JSON object on the wire, but a map type would
/// re-sort its keys. These adapters keep it an ordered entry list.
mod detailed_entries {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use super::DetailedMetric;

    type Entries = Vec<(String, DetailedMetric)>;

    pub fn serialize<S: Serializer>(
        entries: &Option<Entries>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match entries {
            Some(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, metric) in entries {
                    map.serialize_entry(key, metric)?;
                }
                map.end()
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Entries>, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of detailed metrics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Entries, A::Error> {
                let mut entries = Entries::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor).map(Some)
    }
}

// =============================================================================
// Blueprint records
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Video,
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    #[serde(rename = "type")]
    pub kind: DemoKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetric {
    pub label: Localized,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Localized>,
}

/// ROI statement plus labeled metric entries; insertion order is display
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessCase {
    pub roi: Localized,
    pub metrics: Vec<BusinessMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapTier {
    pub accuracy: String,
    pub deployment: String,
    pub support: String,
    pub customization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub standard: GapTier,
    pub expert: GapTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technical {
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationStep {
    pub title: Localized,
    pub description: Localized,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_details: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Implementation {
    pub overview: Localized,
    pub steps: Vec<ImplementationStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Localized>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub id: String,
    pub arena_id: String,
    pub title: Localized,
    pub description: Localized,
    pub status: ArenaStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<Demo>,
    pub business_case: BusinessCase,
    pub gap_analysis: GapAnalysis,
    pub technical: Technical,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<Implementation>,
    /// Display-only date strings; never parsed or compared.
    pub published_at: String,
    pub updated_at: String,
}

// =============================================================================
// Catalog: loading, validation, lookups
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub arenas: Vec<Arena>,
    pub blueprints: Vec<Blueprint>,
    #[serde(skip)]
    warnings: Vec<String>,
}

/// Summary emitted by the `catalog_check` tool.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrityReport {
    pub arenas: usize,
    pub blueprints: usize,
    pub verified: usize,
    pub warnings: Vec<String>,
}

impl Catalog {
    /// Parse and validate a catalog document. Validation failures are
    /// errors; a verified arena without a blueprint is only a warning.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        catalog.warnings = catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<Vec<String>, CatalogError> {
        let mut warnings = Vec::new();

        let mut arena_ids = HashSet::new();
        for arena in &self.arenas {
            if !arena_ids.insert(arena.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate arena id: {}",
                    arena.id
                )));
            }
            validate_text(&arena.id, "title", &arena.title)?;
            if let Some(desc) = &arena.description {
                validate_text(&arena.id, "description", desc)?;
            }
            if let Some(story) = &arena.story_achievement {
                validate_text(&arena.id, "storyAchievement", story)?;
            }
            for (name, value) in [
                ("quality", arena.metrics.quality),
                ("efficiency", arena.metrics.efficiency),
                ("cost", arena.metrics.cost),
                ("trust", arena.metrics.trust),
            ] {
                validate_score(&arena.id, name, value)?;
            }
            if let Some(detailed) = &arena.detailed_metrics {
                for (key, metric) in detailed {
                    validate_text(&arena.id, key, &metric.label)?;
                    validate_score(&arena.id, key, metric.value)?;
                }
            }
            if arena.status == ArenaStatus::Verified && arena.blueprint_id.is_none() {
                warnings.push(format!("verified arena without blueprint: {}", arena.id));
            }
        }

        let mut blueprint_ids = HashSet::new();
        for bp in &self.blueprints {
            if !blueprint_ids.insert(bp.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate blueprint id: {}",
                    bp.id
                )));
            }
            validate_text(&bp.id, "title", &bp.title)?;
            validate_text(&bp.id, "description", &bp.description)?;
            validate_text(&bp.id, "roi", &bp.business_case.roi)?;
            for metric in &bp.business_case.metrics {
                validate_text(&bp.id, "businessCase.metrics.label", &metric.label)?;
            }
            if !arena_ids.contains(bp.arena_id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "blueprint {} references unknown arena {}",
                    bp.id, bp.arena_id
                )));
            }
        }

        for arena in &self.arenas {
            if let Some(bp_id) = &arena.blueprint_id {
                if !blueprint_ids.contains(bp_id.as_str()) {
                    return Err(CatalogError::Invalid(format!(
                        "arena {} references unknown blueprint {}",
                        arena.id, bp_id
                    )));
                }
            }
        }

        Ok(warnings)
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn arena(&self, id: &str) -> Result<&Arena, CatalogError> {
        self.arenas
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CatalogError::LookupMiss {
                kind: "arena",
                id: id.to_string(),
            })
    }

    pub fn blueprint(&self, id: &str) -> Result<&Blueprint, CatalogError> {
        self.blueprints
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| CatalogError::LookupMiss {
                kind: "blueprint",
                id: id.to_string(),
            })
    }

    pub fn blueprint_for_arena(&self, arena: &Arena) -> Option<&Blueprint> {
        arena
            .blueprint_id
            .as_deref()
            .and_then(|id| self.blueprints.iter().find(|b| b.id == id))
    }

    pub fn verified_count(&self) -> usize {
        self.arenas
            .iter()
            .filter(|a| a.status == ArenaStatus::Verified)
            .count()
    }

    pub fn count_by_category(&self, category: Category) -> usize {
        self.arenas.iter().filter(|a| a.category == category).count()
    }

    pub fn count_by_industry(&self, industry: Industry) -> usize {
        self.arenas.iter().filter(|a| a.industry == industry).count()
    }

    pub fn integrity_report(&self) -> IntegrityReport {
        IntegrityReport {
            arenas: self.arenas.len(),
            blueprints: self.blueprints.len(),
            verified: self.verified_count(),
            warnings: self.warnings.clone(),
        }
    }
}

fn validate_score(record: &str, field: &str, value: u8) -> Result<(), CatalogError> {
    if value > 100 {
        return Err(CatalogError::Invalid(format!(
            "{record}: metric {field} out of range: {value}"
        )));
    }
    Ok(())
}

fn validate_text(record: &str, field: &str, text: &Localized) -> Result<(), CatalogError> {
    if !text.is_complete() {
        return Err(CatalogError::Invalid(format!(
            "{record}: missing translation for {field}"
        )));
    }
    Ok(())
}

/// Parse and validate the bundled dataset.
pub fn load_bundled() -> Result<Catalog, CatalogError> {
    Catalog::from_json(CATALOG_JSON)
}

/// Shared, validated catalog instance. The bundled dataset is covered by
/// integration tests, so a failure here means a broken build artifact.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| load_bundled().expect("bundled catalog must validate"))
}
