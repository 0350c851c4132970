//! Bounded enumeration of candidate symbols.
//!
//! Purpose
//! - Sweep every component tuple inside the configured box, run the cheap
//!   angle/table pre-filter, then full validation, and collect the
//!   survivors with their classification, name, f-vector, and duality.
//!
//! Why
//! - The search space is tiny (the defaults test a few hundred tuples), so
//!   exhaustive enumeration with counters doubles as a regression check:
//!   dimensions 3..5 must always yield exactly 14 polytopes.
//!
//! `discover` never returns an error: tuples that fail any stage are counted
//! and skipped.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::counts::f_vector;
use crate::family::{common_name, is_self_dual, Family};
use crate::symbol::SchlafliSymbol;
use crate::validate::is_regular_polytope;

/// Search box and family filters. `max_candidates == 0` means unlimited;
/// otherwise enumeration stops once that many tuples have been tested.
#[derive(Clone, Debug)]
pub struct DiscoveryConfig {
    pub min_dimension: usize,
    pub max_dimension: usize,
    pub min_component: u32,
    pub max_component: u32,
    pub include_simplex: bool,
    pub include_hypercube: bool,
    pub include_cross_polytope: bool,
    pub include_exceptional: bool,
    pub max_candidates: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            min_dimension: 3,
            max_dimension: 5,
            min_component: 3,
            max_component: 6,
            include_simplex: true,
            include_hypercube: true,
            include_cross_polytope: true,
            include_exceptional: true,
            max_candidates: 0,
        }
    }
}

impl DiscoveryConfig {
    /// Search a single dimension with the default box and filters.
    pub fn for_dimension(d: usize) -> Self {
        Self {
            min_dimension: d,
            max_dimension: d,
            ..Self::default()
        }
    }
}

/// One validated polytope found by the sweep.
#[derive(Clone, Debug)]
pub struct DiscoveredPolytope {
    pub symbol: SchlafliSymbol,
    pub name: String,
    pub family: Family,
    pub f_vector: Vec<u64>,
    pub self_dual: bool,
}

/// Survivors plus sweep counters. `tested == valid + invalid` always holds;
/// tuples excluded by a family filter count as invalid.
#[derive(Clone, Debug, Default)]
pub struct DiscoveryResult {
    pub polytopes: Vec<DiscoveredPolytope>,
    pub tested: u64,
    pub valid: u64,
    pub invalid: u64,
    pub elapsed: Duration,
}

impl DiscoveryResult {
    /// Number of survivors per dimension.
    pub fn count_by_dimension(&self) -> BTreeMap<usize, usize> {
        let mut out = BTreeMap::new();
        for p in &self.polytopes {
            *out.entry(p.symbol.dimension()).or_insert(0) += 1;
        }
        out
    }

    /// Number of survivors per family label.
    pub fn count_by_family(&self) -> BTreeMap<&'static str, usize> {
        let mut out = BTreeMap::new();
        for p in &self.polytopes {
            *out.entry(family_label(p.family)).or_insert(0) += 1;
        }
        out
    }
}

fn family_label(family: Family) -> &'static str {
    match family {
        Family::Simplex => "simplex",
        Family::Hypercube => "hypercube",
        Family::CrossPolytope => "cross-polytope",
        Family::Exceptional3d(_) | Family::Exceptional4d(_) => "exceptional",
    }
}

fn family_included(cfg: &DiscoveryConfig, family: Family) -> bool {
    match family {
        Family::Simplex => cfg.include_simplex,
        Family::Hypercube => cfg.include_hypercube,
        Family::CrossPolytope => cfg.include_cross_polytope,
        Family::Exceptional3d(_) | Family::Exceptional4d(_) => cfg.include_exceptional,
    }
}

/// Cheap rejection before full validation: the 3D angle bound and the 4D
/// table kill most of the box without touching the f-vector machinery.
fn pre_filter(components: &[u32]) -> bool {
    if components.iter().any(|&p| p < 3) {
        return false;
    }
    match components {
        &[p, q] => (p - 2) * (q - 2) < 4,
        &[_, q, r] => (q - 2) * (r - 2) < 4,
        _ => true,
    }
}

/// Exhaustive sweep of the configured box, lexicographic per dimension.
pub fn discover(cfg: &DiscoveryConfig) -> DiscoveryResult {
    let start = Instant::now();
    let mut result = DiscoveryResult::default();

    'sweep: for d in cfg.min_dimension..=cfg.max_dimension {
        if d < 3 || cfg.min_component > cfg.max_component {
            continue;
        }
        let len = d - 1;
        let mut tuple = vec![cfg.min_component; len];
        loop {
            if cfg.max_candidates > 0 && result.tested >= cfg.max_candidates {
                break 'sweep;
            }
            result.tested += 1;
            if !accept(cfg, &tuple, &mut result) {
                result.invalid += 1;
            }
            if !next_tuple(&mut tuple, cfg.min_component, cfg.max_component) {
                break;
            }
        }
    }

    result.elapsed = start.elapsed();
    result
}

/// Run one tuple through the pipeline; `true` iff it was recorded as valid.
fn accept(cfg: &DiscoveryConfig, tuple: &[u32], result: &mut DiscoveryResult) -> bool {
    if !pre_filter(tuple) {
        return false;
    }
    let Ok(symbol) = SchlafliSymbol::new(tuple.to_vec()) else {
        return false;
    };
    if !is_regular_polytope(&symbol) {
        return false;
    }
    let Some(family) = Family::classify(&symbol) else {
        return false;
    };
    if !family_included(cfg, family) {
        return false;
    }
    let Ok(f) = f_vector(&symbol) else {
        return false;
    };
    result.polytopes.push(DiscoveredPolytope {
        name: common_name(&symbol),
        family,
        f_vector: f,
        self_dual: is_self_dual(&symbol),
        symbol,
    });
    result.valid += 1;
    true
}

/// Odometer increment, rightmost component fastest; `false` once the box is
/// exhausted.
fn next_tuple(tuple: &mut [u32], min: u32, max: u32) -> bool {
    for slot in tuple.iter_mut().rev() {
        if *slot < max {
            *slot += 1;
            return true;
        }
        *slot = min;
    }
    false
}

/// Smoke check against the classical counts: 5 regular solids in 3D and 6
/// in 4D.
pub fn verify_known_polytopes() -> bool {
    discover(&DiscoveryConfig::for_dimension(3)).valid == 5
        && discover(&DiscoveryConfig::for_dimension(4)).valid == 6
}
