// File: crates/chart-core/src/config.rs
// Summary: Attribute-style chart configuration and typed per-chart configs.
// Notes:
// - Attributes are flat strings; lists are `;`-separated.
// - Parsing is fail-soft: only a missing series is an error.

use std::collections::BTreeMap;
use std::str::FromStr;

use thiserror::Error;

use crate::theme::Palette;
use crate::types::{DEFAULT_DONUT, DEFAULT_GAP, RADAR_VIEWBOX};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required attribute `{0}`")]
    MissingAttribute(&'static str),
    #[error("unknown chart kind `{0}` (expected pie, bar or radar)")]
    UnknownKind(String),
    #[error("malformed attribute `{0}`: expected key=value")]
    MalformedPair(String),
}

/// The three widget kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Pie,
    Bar,
    Radar,
}

impl ChartKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie-chart",
            ChartKind::Bar => "bar-chart",
            ChartKind::Radar => "radar-chart",
        }
    }
}

impl FromStr for ChartKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pie" | "pie-chart" => Ok(ChartKind::Pie),
            "bar" | "bar-chart" => Ok(ChartKind::Bar),
            "radar" | "radar-chart" => Ok(ChartKind::Radar),
            other => Err(ConfigError::UnknownKind(other.to_string())),
        }
    }
}

/// Flat string attributes, as a caller would set them on a chart element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    map: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self { Self::default() }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Parse `key=value` pairs, e.g. from a command line.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut attrs = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (k, v) = pair
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedPair(pair.to_string()))?;
            attrs.set(k.trim(), v);
        }
        Ok(attrs)
    }

    /// `;`-separated list, or `None` when the attribute is absent.
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).map(split_list)
    }

    /// Required numeric list.
    pub fn series(&self, key: &'static str) -> Result<Vec<f64>, ConfigError> {
        let raw = self.get(key).ok_or(ConfigError::MissingAttribute(key))?;
        Ok(parse_series(raw))
    }

    /// Single number; `None` when absent or unparsable.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.trim().parse::<f64>().ok()).filter(|v| v.is_finite())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

/// Split on `;`. An empty string is an empty list.
pub fn split_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(';').map(str::to_string).collect()
}

/// Parse a `;`-separated numeric list. Unparsable tokens read as `0.0`.
pub fn parse_series(raw: &str) -> Vec<f64> {
    split_list(raw)
        .iter()
        .enumerate()
        .map(|(i, tok)| match tok.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                tracing::warn!(index = i, token = %tok, "non-numeric series value, using 0");
                0.0
            }
        })
        .collect()
}

fn palette_from(attrs: &Attributes) -> Palette {
    attrs.list("colors").map(Palette::new).unwrap_or_default()
}

/// Pie chart configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct PieConfig {
    pub data: Vec<f64>,
    /// Donut-hole radius as a fraction of the unit radius.
    pub donut: f64,
    /// Boundary-line width between wedges.
    pub gap: f64,
    pub palette: Palette,
    pub labels: Vec<String>,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            donut: DEFAULT_DONUT,
            gap: DEFAULT_GAP,
            palette: Palette::default(),
            labels: Vec::new(),
        }
    }
}

impl PieConfig {
    pub fn from_attrs(attrs: &Attributes) -> Result<Self, ConfigError> {
        Ok(Self {
            data: attrs.series("data")?,
            donut: attrs.number("donut").unwrap_or(DEFAULT_DONUT),
            gap: attrs.number("gap").unwrap_or(DEFAULT_GAP),
            palette: palette_from(attrs),
            labels: attrs.list("labels").unwrap_or_default(),
        })
    }
}

/// Bar chart configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarConfig {
    pub data: Vec<f64>,
    pub palette: Palette,
    pub labels: Vec<String>,
}

impl BarConfig {
    pub fn from_attrs(attrs: &Attributes) -> Result<Self, ConfigError> {
        Ok(Self {
            data: attrs.series("data")?,
            palette: palette_from(attrs),
            labels: attrs.list("labels").unwrap_or_default(),
        })
    }
}

/// Radar chart configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarConfig {
    pub scores: Vec<f64>,
    pub labels: Vec<String>,
    /// One id per axis; rings are only drawn when present.
    pub ids: Option<Vec<String>>,
    /// Normalization maximum.
    pub max: f64,
    pub palette: Palette,
    /// Display size only; geometry always uses the fixed viewbox.
    pub width: f64,
    pub height: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            scores: Vec::new(),
            labels: Vec::new(),
            ids: None,
            max: 1.0,
            palette: Palette::default(),
            width: RADAR_VIEWBOX,
            height: RADAR_VIEWBOX,
        }
    }
}

impl RadarConfig {
    pub fn from_attrs(attrs: &Attributes) -> Result<Self, ConfigError> {
        // Absent, unparsable and zero all fall back to 1.0.
        let max = attrs.number("max").filter(|m| *m != 0.0).unwrap_or(1.0);
        Ok(Self {
            scores: attrs.series("scores")?,
            labels: attrs.list("labels").unwrap_or_default(),
            ids: attrs.list("ids"),
            max,
            palette: palette_from(attrs),
            width: attrs.number("width").unwrap_or(RADAR_VIEWBOX),
            height: attrs.number("height").unwrap_or(RADAR_VIEWBOX),
        })
    }
}
