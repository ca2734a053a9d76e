//! Filter/sort view over arena records.
//!
//! Pure functions: the catalog is never mutated, the output is a fresh
//! ordered sequence of borrows. An empty result is a normal outcome (the
//! page shows an empty state for it).

use std::cmp::Reverse;

use crate::catalog::{Arena, Category, Industry};

/// A tag filter: everything, or one specific tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn admits(&self, value: T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(tag) => *tag == value,
        }
    }
}

impl Filter<Industry> {
    pub fn from_id(id: &str) -> Option<Self> {
        if id == "all" {
            Some(Filter::All)
        } else {
            Industry::from_id(id).map(Filter::Only)
        }
    }
}

impl Filter<Category> {
    pub fn from_id(id: &str) -> Option<Self> {
        if id == "all" {
            Some(Filter::All)
        } else {
            Category::from_id(id).map(Filter::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Quality,
    Efficiency,
    Cost,
    Trust,
    /// GitHub stars; records without GitHub stats count as zero.
    #[default]
    Stars,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Quality,
        SortKey::Efficiency,
        SortKey::Cost,
        SortKey::Trust,
        SortKey::Stars,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Quality => "quality",
            SortKey::Efficiency => "efficiency",
            SortKey::Cost => "cost",
            SortKey::Trust => "trust",
            SortKey::Stars => "stars",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        SortKey::ALL.into_iter().find(|k| k.as_str() == id)
    }
}

fn sort_value(arena: &Arena, key: SortKey) -> u64 {
    match key {
        SortKey::Quality => arena.metrics.quality as u64,
        SortKey::Efficiency => arena.metrics.efficiency as u64,
        SortKey::Cost => arena.metrics.cost as u64,
        SortKey::Trust => arena.metrics.trust as u64,
        SortKey::Stars => arena.stars(),
    }
}

/// Filtered, descending-sorted view. The sort is stable, so ties keep
/// catalog order.
pub fn filter_and_sort<'a>(
    arenas: &'a [Arena],
    industry: Filter<Industry>,
    category: Filter<Category>,
    sort: SortKey,
) -> Vec<&'a Arena> {
    let mut view: Vec<&Arena> = arenas
        .iter()
        .filter(|a| industry.admits(a.industry) && category.admits(a.category))
        .collect();
    view.sort_by_key(|a| Reverse(sort_value(a, sort)));
    view
}
