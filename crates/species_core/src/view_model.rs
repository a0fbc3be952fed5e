use crate::{Member, Species};

/// Selection control entry derived from a species name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesOption {
    pub key: String,
    pub text: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    pub pages: usize,
    pub species: usize,
}

/// Scatter point for one member. `None` marks a non-numeric measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    pub gender: String,
    pub height: Option<f64>,
    pub mass: Option<f64>,
}

impl ChartPoint {
    /// Both coordinates are numeric.
    pub fn is_plottable(&self) -> bool {
        self.height.is_some() && self.mass.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    /// Options matching the current filter.
    pub options: Vec<SpeciesOption>,
    /// Options before filtering.
    pub option_count: usize,
    pub filter: String,
    pub loading: bool,
    pub load_progress: Option<LoadProgress>,
    pub selected: Option<String>,
    pub pending: Option<String>,
    pub members: Vec<Member>,
    pub points: Vec<ChartPoint>,
    pub notice: Option<String>,
    pub dirty: bool,
}

/// One option per species, in catalog order. Duplicate names are kept.
pub fn species_options(catalog: &[Species]) -> Vec<SpeciesOption> {
    catalog
        .iter()
        .map(|species| SpeciesOption {
            key: species.name.clone(),
            text: species.name.clone(),
            value: species.name.clone(),
        })
        .collect()
}

pub fn chart_points(members: &[Member]) -> Vec<ChartPoint> {
    members
        .iter()
        .map(|member| ChartPoint {
            name: member.name.clone(),
            gender: member.gender.clone(),
            height: parse_measure(&member.height),
            mass: parse_measure(&member.mass),
        })
        .collect()
}

/// Parses a textual measurement such as `"172"` or `"1,358"`.
///
/// Sentinels like `"unknown"` or `"n/a"` yield `None`.
pub fn parse_measure(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
