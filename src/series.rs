//! # Series tables: the immutable coefficient data model
//!
//! A VSOP87 solution for one (version, body) pair is a set of truncated
//! Poisson series: for each of the six output components and each power of
//! the time variable τ, an ordered list of (amplitude, phase, frequency)
//! terms. This module defines that data model, from single [`Term`] up to the
//! [`Catalog`] keyed by (version, body).
//!
//! Tables are built once — by an external loader, or term by term through
//! [`PowerTable::new`] — and never mutated afterwards; the evaluator only
//! reads them. Each [`PowerTable`] also carries a structure-of-arrays mirror
//! of its terms, zero-padded to the SIMD lane width, so the batched evaluator
//! can stream full lanes without per-call preparation. Zero-amplitude padding
//! terms contribute exactly zero to both position and velocity sums.
//!
//! All types carry serde derives so a loader can deserialize a prebuilt
//! binary catalog straight into them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::orrery_errors::OrreryError;
use crate::theory::{VSOPBody, VSOPVersion};

/// Number of f64 lanes processed per SIMD step.
pub const LANES: usize = 4;

/// Number of powers of τ (degrees 0..=5) per variable.
pub const DEGREES: usize = 6;

/// Number of output components (variables) per series table.
pub const VARIABLES: usize = 6;

/// One term of a Poisson series: `amplitude · cos(phase + frequency·τ)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Amplitude A (au or radians, depending on the variable)
    pub amplitude: f64,
    /// Phase B (radians)
    pub phase: f64,
    /// Frequency C (radians per Julian millennium)
    pub frequency: f64,
}

impl Term {
    pub fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Term {
            amplitude,
            phase,
            frequency,
        }
    }
}

/// The ordered terms of one power of τ, with the padded SoA mirror.
///
/// An empty table stands for an unused degree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Term>", into = "Vec<Term>")]
pub struct PowerTable {
    terms: Vec<Term>,
    lane_amplitude: Vec<f64>,
    lane_phase: Vec<f64>,
    lane_frequency: Vec<f64>,
}

impl PowerTable {
    /// Build a power table from its terms, preparing the zero-padded
    /// structure-of-arrays mirror used by the SIMD evaluator.
    pub fn new(terms: Vec<Term>) -> Self {
        let padded = terms.len().div_ceil(LANES) * LANES;
        let mut lane_amplitude = vec![0.0; padded];
        let mut lane_phase = vec![0.0; padded];
        let mut lane_frequency = vec![0.0; padded];
        for (i, term) in terms.iter().enumerate() {
            lane_amplitude[i] = term.amplitude;
            lane_phase[i] = term.phase;
            lane_frequency[i] = term.frequency;
        }
        PowerTable {
            terms,
            lane_amplitude,
            lane_phase,
            lane_frequency,
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Amplitudes, zero-padded to a multiple of [`LANES`].
    pub fn lane_amplitudes(&self) -> &[f64] {
        &self.lane_amplitude
    }

    /// Phases, zero-padded to a multiple of [`LANES`].
    pub fn lane_phases(&self) -> &[f64] {
        &self.lane_phase
    }

    /// Frequencies, zero-padded to a multiple of [`LANES`].
    pub fn lane_frequencies(&self) -> &[f64] {
        &self.lane_frequency
    }
}

impl From<Vec<Term>> for PowerTable {
    fn from(terms: Vec<Term>) -> Self {
        PowerTable::new(terms)
    }
}

impl From<PowerTable> for Vec<Term> {
    fn from(table: PowerTable) -> Self {
        table.terms
    }
}

/// The six degree tables (powers τ⁰..τ⁵) of one output component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableTable {
    powers: [PowerTable; DEGREES],
}

impl VariableTable {
    pub fn new(powers: [PowerTable; DEGREES]) -> Self {
        VariableTable { powers }
    }

    pub fn power(&self, degree: usize) -> &PowerTable {
        &self.powers[degree]
    }
}

/// The full series of one (version, body) pair: six variables of six degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesTable {
    version: VSOPVersion,
    body: VSOPBody,
    variables: [VariableTable; VARIABLES],
}

impl SeriesTable {
    pub fn new(
        version: VSOPVersion,
        body: VSOPBody,
        variables: [VariableTable; VARIABLES],
    ) -> Self {
        SeriesTable {
            version,
            body,
            variables,
        }
    }

    pub fn version(&self) -> VSOPVersion {
        self.version
    }

    pub fn body(&self) -> VSOPBody {
        self.body
    }

    pub fn variable(&self, index: usize) -> &VariableTable {
        &self.variables[index]
    }

    /// Total number of terms across all variables and degrees.
    pub fn term_count(&self) -> usize {
        self.variables
            .iter()
            .flat_map(|v| v.powers.iter())
            .map(|p| p.len())
            .sum()
    }
}

/// Read-only mapping from (version, body) to its series table.
///
/// Built once at startup by the loader; lookup of a pair outside the catalog
/// is an [`OrreryError::UnsupportedCombination`], never a missing value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    tables: HashMap<(VSOPVersion, VSOPBody), SeriesTable>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            tables: HashMap::new(),
        }
    }

    /// Register a table under its own (version, body) key.
    /// Intended for the loader during catalog construction.
    pub fn insert(&mut self, table: SeriesTable) {
        self.tables.insert((table.version(), table.body()), table);
    }

    pub fn get(
        &self,
        version: VSOPVersion,
        body: VSOPBody,
    ) -> Result<&SeriesTable, OrreryError> {
        self.tables
            .get(&(version, body))
            .ok_or(OrreryError::UnsupportedCombination { version, body })
    }

    pub fn contains(&self, version: VSOPVersion, body: VSOPBody) -> bool {
        self.tables.contains_key(&(version, body))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<SeriesTable> for Catalog {
    fn from_iter<I: IntoIterator<Item = SeriesTable>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for table in iter {
            catalog.insert(table);
        }
        catalog
    }
}
