//! Coarse chart categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual category derived from a chart type code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartCategory {
    Map,
    Bar,
    Line,
    Table,
    Scatter,
    Pie,
    Other,
}

impl ChartCategory {
    /// Lowercase label used in the output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Table => "table",
            Self::Scatter => "scatter",
            Self::Pie => "pie",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ChartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known type codes, matched in this order
pub const CATEGORY_TABLE: &[(&str, ChartCategory)] = &[
    ("d3-maps", ChartCategory::Map),
    ("d3-maps-symbols", ChartCategory::Map),
    ("d3-maps-choropleth", ChartCategory::Map),
    ("locator-map", ChartCategory::Map),
    ("bar-chart", ChartCategory::Bar),
    ("d3-bars", ChartCategory::Bar),
    ("d3-bars-stacked", ChartCategory::Bar),
    ("d3-bars-grouped", ChartCategory::Bar),
    ("d3-bars-bullet", ChartCategory::Bar),
    ("line-chart", ChartCategory::Line),
    ("d3-lines", ChartCategory::Line),
    ("d3-area", ChartCategory::Line),
    ("tables", ChartCategory::Table),
    ("d3-scatter-plot", ChartCategory::Scatter),
    ("d3-dot-plot", ChartCategory::Scatter),
    ("d3-pies", ChartCategory::Pie),
    ("d3-donuts", ChartCategory::Pie),
    ("election-donut-chart", ChartCategory::Pie),
];

/// Category for a type code.
///
/// The first table entry where either string contains the other wins.
/// Missing or empty types are `Other`.
pub fn category_for_type(chart_type: Option<&str>) -> ChartCategory {
    let Some(chart_type) = chart_type.filter(|t| !t.is_empty()) else {
        return ChartCategory::Other;
    };

    CATEGORY_TABLE
        .iter()
        .find(|(key, _)| chart_type.contains(key) || key.contains(chart_type))
        .map_or(ChartCategory::Other, |(_, category)| *category)
}
