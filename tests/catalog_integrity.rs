//! Integrity checks over the bundled dataset and the load-time validator.

use rwai_arena::catalog::{self, ArenaStatus, Catalog, CatalogError, Category, Industry};

#[test]
fn bundled_catalog_validates() {
    let catalog = catalog::load_bundled().expect("bundled catalog must validate");
    assert!(!catalog.arenas.is_empty());
    assert!(!catalog.blueprints.is_empty());
    assert!(catalog.verified_count() > 0);
}

#[test]
fn every_verified_arena_links_to_a_real_blueprint() {
    let catalog = catalog::load_bundled().unwrap();
    for arena in catalog
        .arenas
        .iter()
        .filter(|a| a.status == ArenaStatus::Verified)
    {
        let bp = catalog
            .blueprint_for_arena(arena)
            .unwrap_or_else(|| panic!("verified arena {} has no blueprint", arena.id));
        assert_eq!(bp.arena_id, arena.id);
    }
    assert!(catalog.warnings().is_empty());
}

#[test]
fn every_blueprint_points_back_at_its_arena() {
    let catalog = catalog::load_bundled().unwrap();
    for bp in &catalog.blueprints {
        let arena = catalog.arena(&bp.arena_id).unwrap();
        // The back-reference is optional (an arena can be in the arena
        // stage with a draft blueprint), but when present it must agree.
        if let Some(id) = &arena.blueprint_id {
            assert_eq!(id, &bp.id, "arena {} disagrees with blueprint", arena.id);
        }
    }
}

#[test]
fn tag_counts_cover_the_catalog() {
    let catalog = catalog::load_bundled().unwrap();
    let by_category: usize = Category::ALL
        .into_iter()
        .map(|c| catalog.count_by_category(c))
        .sum();
    let by_industry: usize = Industry::ALL
        .into_iter()
        .map(|i| catalog.count_by_industry(i))
        .sum();
    assert_eq!(by_category, catalog.arenas.len());
    assert_eq!(by_industry, catalog.arenas.len());
}

#[test]
fn lookup_miss_is_typed() {
    let catalog = catalog::load_bundled().unwrap();
    match catalog.arena("no-such-arena") {
        Err(CatalogError::LookupMiss { kind, id }) => {
            assert_eq!(kind, "arena");
            assert_eq!(id, "no-such-arena");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

// -----------------------------------------------------------------------------
// Validator rejections
// -----------------------------------------------------------------------------

fn minimal(arena_extra: &str, blueprints: &str) -> String {
    format!(
        r#"{{
          "arenas": [{{
            "id": "a1",
            "title": {{ "en": "A", "zh": "甲" }},
            "category": "service",
            "industry": "retail",
            "status": "in-arena",
            "metrics": {{ "quality": 80, "efficiency": 80, "cost": 80, "trust": 80 }}
            {arena_extra}
          }}],
          "blueprints": [{blueprints}]
        }}"#
    )
}

#[test]
fn minimal_catalog_is_accepted() {
    let catalog = Catalog::from_json(&minimal("", "")).unwrap();
    assert_eq!(catalog.arenas.len(), 1);
    assert!(catalog.warnings().is_empty());
}

#[test]
fn dangling_blueprint_reference_is_rejected() {
    let err = Catalog::from_json(&minimal(r#", "blueprintId": "ghost-v1""#, "")).unwrap_err();
    match err {
        CatalogError::Invalid(msg) => assert!(msg.contains("ghost-v1"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn out_of_range_metric_is_rejected() {
    let json = minimal("", "").replace("\"quality\": 80", "\"quality\": 101");
    let err = Catalog::from_json(&json).unwrap_err();
    match err {
        CatalogError::Invalid(msg) => assert!(msg.contains("quality"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn negative_metric_fails_to_parse() {
    let json = minimal("", "").replace("\"quality\": 80", "\"quality\": -5");
    assert!(matches!(
        Catalog::from_json(&json),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn empty_translation_is_rejected() {
    let json = minimal("", "").replace("\"zh\": \"甲\"", "\"zh\": \"\"");
    let err = Catalog::from_json(&json).unwrap_err();
    match err {
        CatalogError::Invalid(msg) => assert!(msg.contains("translation"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn duplicate_arena_id_is_rejected() {
    let catalog = catalog::load_bundled().unwrap();
    let mut doubled = catalog.clone();
    doubled.arenas.push(catalog.arenas[0].clone());
    let json = serde_json::to_string(&doubled).unwrap();
    let err = Catalog::from_json(&json).unwrap_err();
    match err {
        CatalogError::Invalid(msg) => assert!(msg.contains("duplicate"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn verified_arena_without_blueprint_is_only_a_warning() {
    let json = minimal("", "").replace("\"in-arena\"", "\"verified\"");
    let catalog = Catalog::from_json(&json).unwrap();
    assert_eq!(catalog.warnings().len(), 1);
    assert!(catalog.warnings()[0].contains("a1"));
}
