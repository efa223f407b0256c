//! Per-edge crime statistics and the cost-penalty model.
//!
//! # Severity categories
//!
//! Incident codes follow the UCR convention: the leading digit names one of
//! the eight Part I hierarchy classes.  Codes outside `'1'..='8'` (including
//! the feed's miscellaneous `9*` codes) bucket into [`CrimeCategory::Unclassified`],
//! which is counted but carries no cost penalty.
//!
//! # Penalty formula
//!
//! For each costed category the penalty contribution is `(freq + 20)²`, so an
//! edge that absorbed any report at all pays a floor of `8 × 400 = 3200` on
//! top of its base cost, and repeat offenses on the same road grow the
//! penalty quadratically.  Edges with a zero total are never re-costed, which
//! is what keeps clean roads at their base cost.

/// Severity category of a reported incident.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CrimeCategory {
    /// `1*` — criminal homicide.
    Homicide,
    /// `2*` — rape.
    Rape,
    /// `3*` — robbery.
    Robbery,
    /// `4*` — aggravated assault.
    AggravatedAssault,
    /// `5*` — burglary.
    Burglary,
    /// `6*` — larceny-theft.
    Larceny,
    /// `7*` — motor vehicle theft.
    AutoTheft,
    /// `8*` — arson.
    Arson,
    /// Any other code.  Tracked in the counters, excluded from the penalty.
    Unclassified,
}

impl CrimeCategory {
    /// Total number of tracked categories.
    pub const COUNT: usize = 9;
    /// Number of categories that contribute to the cost penalty.
    pub const COSTED: usize = 8;

    /// Map an incident code to its category by leading digit.
    pub fn from_code(code: &str) -> Self {
        match code.as_bytes().first() {
            Some(b'1') => CrimeCategory::Homicide,
            Some(b'2') => CrimeCategory::Rape,
            Some(b'3') => CrimeCategory::Robbery,
            Some(b'4') => CrimeCategory::AggravatedAssault,
            Some(b'5') => CrimeCategory::Burglary,
            Some(b'6') => CrimeCategory::Larceny,
            Some(b'7') => CrimeCategory::AutoTheft,
            Some(b'8') => CrimeCategory::Arson,
            _ => CrimeCategory::Unclassified,
        }
    }

    /// Counter index in `[0, 8]`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label, useful for reporting.
    pub fn as_str(self) -> &'static str {
        match self {
            CrimeCategory::Homicide          => "homicide",
            CrimeCategory::Rape              => "rape",
            CrimeCategory::Robbery           => "robbery",
            CrimeCategory::AggravatedAssault => "aggravated assault",
            CrimeCategory::Burglary          => "burglary",
            CrimeCategory::Larceny           => "larceny",
            CrimeCategory::AutoTheft         => "auto theft",
            CrimeCategory::Arson             => "arson",
            CrimeCategory::Unclassified      => "unclassified",
        }
    }
}

impl std::fmt::Display for CrimeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CrimeStats ────────────────────────────────────────────────────────────────

/// Flat penalty applied per costed category before squaring.
const FREQ_OFFSET: f64 = 20.0;

/// Per-edge category frequency counters.
///
/// Counters are monotonically non-decreasing for the life of the edge;
/// [`record`](Self::record) is the sole mutator and there is no reset short
/// of rebuilding the graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrimeStats {
    freq:  [u32; CrimeCategory::COUNT],
    total: u32,
}

impl CrimeStats {
    /// Count one report in `category`.
    pub fn record(&mut self, category: CrimeCategory) {
        self.freq[category.index()] += 1;
        self.total += 1;
    }

    /// Reports counted in one category.
    #[inline]
    pub fn count(&self, category: CrimeCategory) -> u32 {
        self.freq[category.index()]
    }

    /// Reports counted across all categories, unclassified included.
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Per-category penalty contributions `(freq + 20)²` for the eight
    /// costed categories.
    pub fn added_weights(&self) -> [f64; CrimeCategory::COSTED] {
        let mut weights = [0.0; CrimeCategory::COSTED];
        for (w, &f) in weights.iter_mut().zip(&self.freq) {
            let offset = f as f64 + FREQ_OFFSET;
            *w = offset * offset;
        }
        weights
    }

    /// Sum of [`added_weights`](Self::added_weights) — the full cost penalty.
    ///
    /// Nonzero even with empty counters (the `8 × 400` floor); callers gate
    /// on [`total`](Self::total) before applying it.
    pub fn penalty(&self) -> f64 {
        self.added_weights().iter().sum()
    }
}

// ── WeightingPolicy ───────────────────────────────────────────────────────────

/// How a weighting pass combines the crime penalty with the edge's cost.
///
/// `Accumulate` preserves the observed behavior of the original tool: each
/// pass adds the current penalty on top of whatever the cost already is, so
/// repeated ingestion runs compound.  `Recompute` derives the cost fresh from
/// the base cost and current counters, making the pass idempotent.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum WeightingPolicy {
    /// `cost += penalty` — compounding across passes.
    #[default]
    Accumulate,
    /// `cost = base_cost + penalty` — idempotent per counter state.
    Recompute,
}
