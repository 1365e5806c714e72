//! Shapes selection results for the chart, table and word-cloud renderers.
//!
//! Nothing here draws; renderers are owned by the host.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{json, Value};

use crate::select::TopNResult;

pub const DEFAULT_FONT_PATH: &str = "simhei.ttf";
pub const WORD_CLOUD_WIDTH: u32 = 1600;
pub const WORD_CLOUD_HEIGHT: u32 = 1200;
pub const WORD_CLOUD_BACKGROUND: &str = "white";

const SERIES_NAME: &str = "Frequency";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Keywords along the x axis.
    #[default]
    Vertical,
    /// Keywords along the y axis.
    Horizontal,
}

/// Ordered `(label, value)` pairs for a bar chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl BarSeries {
    pub fn from_top(top: &TopNResult) -> Self {
        let (labels, values): (Vec<String>, Vec<u64>) = top
            .iter()
            .map(|(keyword, count)| (keyword.to_string(), count))
            .unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// ECharts option document for this series.
    pub fn echarts_options(&self, title: &str, orientation: Orientation) -> Value {
        let category_axis = json!({
            "type": "category",
            "data": self.labels,
            "axisLabel": { "rotate": 45 },
        });
        let value_axis = json!({ "type": "value" });
        let (x_axis, y_axis) = match orientation {
            Orientation::Vertical => (category_axis, value_axis),
            Orientation::Horizontal => (value_axis, category_axis),
        };
        json!({
            "title": { "text": title },
            "tooltip": {},
            "legend": { "data": [SERIES_NAME] },
            "xAxis": x_axis,
            "yAxis": y_axis,
            "series": [{
                "name": SERIES_NAME,
                "type": "bar",
                "data": self.values,
            }],
        })
    }
}

/// One row of the frequency table; `rank` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub rank: usize,
    pub keyword: String,
    pub count: u64,
}

pub fn table_rows(top: &TopNResult) -> Vec<TableRow> {
    top.iter()
        .enumerate()
        .map(|(idx, (keyword, count))| TableRow {
            rank: idx + 1,
            keyword: keyword.to_string(),
            count,
        })
        .collect()
}

/// Keyword weights plus everything a word-cloud renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCloudInput {
    pub weights: Vec<(String, u64)>,
    /// Glyph file able to render non-Latin keywords.
    pub font_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub background: String,
}

impl WordCloudInput {
    pub fn new(top: &TopNResult, font_path: impl Into<PathBuf>) -> Self {
        Self {
            weights: top
                .iter()
                .map(|(keyword, count)| (keyword.to_string(), count))
                .collect(),
            font_path: font_path.into(),
            width: WORD_CLOUD_WIDTH,
            height: WORD_CLOUD_HEIGHT,
            background: WORD_CLOUD_BACKGROUND.to_string(),
        }
    }

    pub fn weight(&self, keyword: &str) -> Option<u64> {
        self.weights
            .iter()
            .find(|(candidate, _)| candidate == keyword)
            .map(|(_, weight)| *weight)
    }

    pub fn font_path(&self) -> &Path {
        &self.font_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{top_n, FrequencyTable};

    #[test]
    fn horizontal_chart_puts_labels_on_y_axis() {
        let table = FrequencyTable::from_keywords(["a", "b", "a"]);
        let series = BarSeries::from_top(&top_n(&table, 5).unwrap());
        let options = series.echarts_options("Top", Orientation::Horizontal);
        assert_eq!(options["yAxis"]["data"], json!(["a", "b"]));
        assert_eq!(options["xAxis"]["type"], "value");
        assert_eq!(options["series"][0]["data"], json!([2, 1]));
    }
}
