//! Stacked bar chart planning.
//!
//! [`plan_chart`] turns category records and stack definitions into either a
//! placeholder or a fully resolved [`BarChartSpec`]. The spec serializes to the
//! config JSON consumed by `stacked-bar-chart.js`, while the normalized rows are
//! serialized separately as the chart data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stack identifier shared by every series so they compose into one bar per category.
pub const STACK_ID: &str = "a";

/// Message shown in place of a chart when there is nothing to plot.
pub const NO_DATA_MESSAGE: &str = "אין נתונים להצגה";

pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_CATEGORY_AXIS_WIDTH: u32 = 150;

/// Outer spacing around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxInsets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl BoxInsets {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Default margin for horizontal bars. The wide left inset leaves room for
/// long category labels on the vertical axis.
pub const HORIZONTAL_MARGIN: BoxInsets = BoxInsets::new(5, 30, 5, 100);
/// Default margin for vertical bars.
pub const VERTICAL_MARGIN: BoxInsets = BoxInsets::new(5, 30, 5, 20);

/// One row of chart data: field name to value, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRecord(IndexMap<String, Value>);

impl CategoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// The category field rendered as axis label text. Missing or null
    /// fields yield an empty label.
    pub fn category(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Numeric value of a stack field. Missing, null, non-numeric and
    /// non-finite values read as zero, which draws a zero-height segment.
    pub fn numeric(&self, key: &str) -> f64 {
        let value = match self.0.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

impl FromIterator<(String, Value)> for CategoryRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One named numeric series within every category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackDefinition {
    pub data_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Any CSS color. `None` leaves the choice to the chart palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StackDefinition {
    pub fn new(data_key: impl Into<String>) -> Self {
        Self {
            data_key: data_key.into(),
            name: None,
            color: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Legend and tooltip name: `name` when given, else the data key.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.data_key)
    }
}

/// Rendering options for a stacked bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Bars grow left-to-right with categories on the vertical axis.
    pub horizontal: bool,
    pub height: u32,
    /// Explicit margin; `None` picks a default for the orientation.
    pub margin: Option<BoxInsets>,
    /// Width reserved for category labels when `horizontal` is set.
    pub category_axis_width: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            horizontal: true,
            height: DEFAULT_HEIGHT,
            margin: None,
            category_axis_width: DEFAULT_CATEGORY_AXIS_WIDTH,
        }
    }
}

impl ChartOptions {
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_margin(mut self, margin: BoxInsets) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_category_axis_width(mut self, width: u32) -> Self {
        self.category_axis_width = width;
        self
    }

    pub fn resolved_margin(&self) -> BoxInsets {
        match self.margin {
            Some(margin) => margin,
            None if self.horizontal => HORIZONTAL_MARGIN,
            None => VERTICAL_MARGIN,
        }
    }

    /// Layout name in the charting convention, where it names the direction
    /// the category axis runs: horizontal bars use a "vertical" layout.
    pub fn layout(&self) -> Layout {
        if self.horizontal {
            Layout::Vertical
        } else {
            Layout::Horizontal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl AxisSpec {
    fn category(data_key: &str, width: Option<u32>) -> Self {
        Self {
            kind: AxisKind::Category,
            data_key: Some(data_key.to_string()),
            width,
        }
    }

    fn number() -> Self {
        Self {
            kind: AxisKind::Number,
            data_key: None,
            width: None,
        }
    }
}

/// A single stacked series as handed to the drawing script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    pub data_key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub stack_id: String,
}

impl From<&StackDefinition> for SeriesSpec {
    fn from(stack: &StackDefinition) -> Self {
        Self {
            data_key: stack.data_key.clone(),
            name: stack.display_name().to_string(),
            color: stack.color.clone(),
            stack_id: STACK_ID.to_string(),
        }
    }
}

/// Fully resolved chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartSpec {
    pub layout: Layout,
    pub height: u32,
    pub margin: BoxInsets,
    pub category_key: String,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub series: Vec<SeriesSpec>,
    pub grid: bool,
    pub tooltip: bool,
    pub legend: bool,
    /// Normalized rows; serialized on their own via [`BarChartSpec::data_json`].
    #[serde(skip)]
    pub rows: Vec<CategoryRecord>,
}

impl BarChartSpec {
    pub fn category_axis(&self) -> &AxisSpec {
        match self.layout {
            Layout::Vertical => &self.y_axis,
            Layout::Horizontal => &self.x_axis,
        }
    }

    pub fn config_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.rows)
    }
}

/// What a chart render should produce.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartPlan {
    Placeholder { height: u32, message: &'static str },
    Bars(BarChartSpec),
}

impl ChartPlan {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ChartPlan::Placeholder { .. })
    }
}

/// Plan a stacked bar chart.
///
/// Empty data always yields the placeholder, whatever the other arguments.
/// Otherwise every stack becomes one series sharing [`STACK_ID`], and rows are
/// reduced to the category label plus one finite number per stack.
pub fn plan_chart(
    data: &[CategoryRecord],
    category_key: &str,
    stacks: &[StackDefinition],
    options: &ChartOptions,
) -> ChartPlan {
    if data.is_empty() {
        return ChartPlan::Placeholder {
            height: options.height,
            message: NO_DATA_MESSAGE,
        };
    }

    log::debug!(
        "planning stacked bar chart: {} categories, {} stacks, horizontal={}",
        data.len(),
        stacks.len(),
        options.horizontal
    );

    let (x_axis, y_axis) = if options.horizontal {
        (
            AxisSpec::number(),
            AxisSpec::category(category_key, Some(options.category_axis_width)),
        )
    } else {
        (AxisSpec::category(category_key, None), AxisSpec::number())
    };

    let rows = data
        .iter()
        .map(|record| normalize_row(record, category_key, stacks))
        .collect();

    ChartPlan::Bars(BarChartSpec {
        layout: options.layout(),
        height: options.height,
        margin: options.resolved_margin(),
        category_key: category_key.to_string(),
        x_axis,
        y_axis,
        series: stacks.iter().map(SeriesSpec::from).collect(),
        grid: true,
        tooltip: true,
        legend: true,
        rows,
    })
}

fn normalize_row(
    record: &CategoryRecord,
    category_key: &str,
    stacks: &[StackDefinition],
) -> CategoryRecord {
    if record.get(category_key).is_none() {
        log::warn!("category record is missing its '{}' field", category_key);
    }
    let mut row = CategoryRecord::new().with(category_key, record.category(category_key));
    for stack in stacks {
        row.insert(stack.data_key.clone(), record.numeric(&stack.data_key));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn sample_data() -> Vec<CategoryRecord> {
        vec![
            CategoryRecord::new()
                .with("track", "מדעי המחשב")
                .with("employed", 12)
                .with("studying", 4),
            CategoryRecord::new()
                .with("track", "ביולוגיה")
                .with("employed", 7)
                .with("studying", "3"),
        ]
    }

    fn sample_stacks() -> Vec<StackDefinition> {
        vec![
            StackDefinition::new("employed").with_name("עובדים").with_color("#2196F3"),
            StackDefinition::new("studying"),
        ]
    }

    #[test]
    fn test_default_options() {
        let options = ChartOptions::default();
        assert!(options.horizontal);
        assert_eq!(options.height, 300);
        assert_eq!(options.category_axis_width, 150);
        assert_eq!(options.margin, None);
    }

    #[test]
    fn test_margin_follows_orientation_unless_overridden() {
        let horizontal = ChartOptions::default();
        assert_eq!(horizontal.resolved_margin(), HORIZONTAL_MARGIN);

        let vertical = ChartOptions::default().with_horizontal(false);
        assert_eq!(vertical.resolved_margin(), VERTICAL_MARGIN);

        let custom = BoxInsets::new(1, 2, 3, 4);
        let overridden = ChartOptions::default().with_horizontal(false).with_margin(custom);
        assert_eq!(overridden.resolved_margin(), custom);
    }

    #[test]
    fn test_empty_data_is_placeholder() {
        let options = ChartOptions::default().with_height(420);
        let plan = plan_chart(&[], "track", &sample_stacks(), &options);
        assert_eq!(
            plan,
            ChartPlan::Placeholder {
                height: 420,
                message: NO_DATA_MESSAGE
            }
        );
    }

    #[test]
    fn test_series_names_fall_back_to_data_key() {
        let plan = plan_chart(&sample_data(), "track", &sample_stacks(), &ChartOptions::default());
        let ChartPlan::Bars(spec) = plan else {
            panic!("expected bars");
        };
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].name, "עובדים");
        assert_eq!(spec.series[0].color.as_deref(), Some("#2196F3"));
        assert_eq!(spec.series[1].name, "studying");
        assert_eq!(spec.series[1].color, None);
        assert!(spec.series.iter().all(|s| s.stack_id == STACK_ID));
        assert!(spec.grid && spec.tooltip && spec.legend);
    }

    #[test]
    fn test_horizontal_puts_categories_on_y_axis() {
        let plan = plan_chart(&sample_data(), "track", &sample_stacks(), &ChartOptions::default());
        let ChartPlan::Bars(spec) = plan else {
            panic!("expected bars");
        };
        assert_eq!(spec.layout, Layout::Vertical);
        assert_eq!(spec.x_axis.kind, AxisKind::Number);
        assert_eq!(spec.y_axis.kind, AxisKind::Category);
        assert_eq!(spec.y_axis.data_key.as_deref(), Some("track"));
        assert_eq!(spec.y_axis.width, Some(150));
    }

    #[test]
    fn test_vertical_puts_categories_on_x_axis() {
        let options = ChartOptions::default().with_horizontal(false);
        let plan = plan_chart(&sample_data(), "track", &sample_stacks(), &options);
        let ChartPlan::Bars(spec) = plan else {
            panic!("expected bars");
        };
        assert_eq!(spec.layout, Layout::Horizontal);
        assert_eq!(spec.x_axis.kind, AxisKind::Category);
        assert_eq!(spec.x_axis.data_key.as_deref(), Some("track"));
        assert_eq!(spec.y_axis.kind, AxisKind::Number);
        assert_eq!(spec.margin, VERTICAL_MARGIN);
    }

    #[test]
    fn test_rows_are_normalized() {
        let data = vec![CategoryRecord::new()
            .with("track", 2021)
            .with("employed", "n/a")
            .with("ignored", "extra")];
        let plan = plan_chart(&data, "track", &sample_stacks(), &ChartOptions::default());
        let ChartPlan::Bars(spec) = plan else {
            panic!("expected bars");
        };
        let row = &spec.rows[0];
        assert_eq!(row.get("track"), Some(&json!("2021")));
        assert_eq!(row.numeric("employed"), 0.0);
        assert_eq!(row.numeric("studying"), 0.0);
        assert_eq!(row.get("ignored"), None);
    }

    #[test]
    fn test_numeric_reads() {
        let record = CategoryRecord::new()
            .with("a", 3)
            .with("b", " 2.5 ")
            .with("c", Value::Null)
            .with("d", true);
        assert_eq!(record.numeric("a"), 3.0);
        assert_eq!(record.numeric("b"), 2.5);
        assert_eq!(record.numeric("c"), 0.0);
        assert_eq!(record.numeric("d"), 0.0);
        assert_eq!(record.numeric("missing"), 0.0);
    }

    #[test]
    fn test_config_json_shape() {
        let plan = plan_chart(&sample_data(), "track", &sample_stacks(), &ChartOptions::default());
        let ChartPlan::Bars(spec) = plan else {
            panic!("expected bars");
        };
        let config: Value = serde_json::from_str(&spec.config_json().unwrap()).unwrap();
        assert_eq!(config["layout"], json!("vertical"));
        assert_eq!(config["yAxis"]["type"], json!("category"));
        assert_eq!(config["yAxis"]["dataKey"], json!("track"));
        assert_eq!(config["xAxis"]["type"], json!("number"));
        assert_eq!(config["series"][0]["stackId"], json!("a"));
        assert_eq!(config["margin"]["left"], json!(100));
        assert!(config.get("rows").is_none());

        let rows: Value = serde_json::from_str(&spec.data_json().unwrap()).unwrap();
        assert_eq!(rows[1]["studying"], json!(3.0));
    }

    #[test]
    fn test_stack_definition_deserializes_camel_case() {
        let stack: StackDefinition =
            serde_json::from_str(r##"{"dataKey": "employed", "color": "#4CAF50"}"##).unwrap();
        assert_eq!(stack.data_key, "employed");
        assert_eq!(stack.name, None);
        assert_eq!(stack.display_name(), "employed");
        assert_eq!(stack.color.as_deref(), Some("#4CAF50"));
    }

    fn stacks_strategy() -> impl Strategy<Value = Vec<StackDefinition>> {
        prop::collection::vec(
            ("[a-z]{1,8}", prop::option::of("[a-zא-ת ]{1,12}")),
            0..6,
        )
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(key, name)| StackDefinition {
                    data_key: key,
                    name,
                    color: None,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn empty_data_always_placeholder(
            horizontal in any::<bool>(),
            height in 1u32..2000,
            width in 0u32..400,
            stacks in stacks_strategy(),
        ) {
            let options = ChartOptions::default()
                .with_horizontal(horizontal)
                .with_height(height)
                .with_category_axis_width(width);
            let plan = plan_chart(&[], "track", &stacks, &options);
            prop_assert!(plan.is_placeholder());
        }

        #[test]
        fn one_series_per_stack_named_by_display_name(
            stacks in stacks_strategy(),
            horizontal in any::<bool>(),
        ) {
            let options = ChartOptions::default().with_horizontal(horizontal);
            let plan = plan_chart(&sample_data(), "track", &stacks, &options);
            let ChartPlan::Bars(spec) = plan else {
                return Err(TestCaseError::fail("expected bars"));
            };
            prop_assert_eq!(spec.series.len(), stacks.len());
            for (series, stack) in spec.series.iter().zip(&stacks) {
                let expected = stack.name.clone().unwrap_or_else(|| stack.data_key.clone());
                prop_assert_eq!(&series.name, &expected);
            }
        }

        #[test]
        fn toggling_orientation_swaps_axis_kinds(stacks in stacks_strategy()) {
            let horizontal = plan_chart(&sample_data(), "track", &stacks, &ChartOptions::default());
            let vertical = plan_chart(
                &sample_data(),
                "track",
                &stacks,
                &ChartOptions::default().with_horizontal(false),
            );
            let (ChartPlan::Bars(h), ChartPlan::Bars(v)) = (horizontal, vertical) else {
                return Err(TestCaseError::fail("expected bars"));
            };
            prop_assert_eq!(h.x_axis.kind, v.y_axis.kind);
            prop_assert_eq!(h.y_axis.kind, v.x_axis.kind);
            prop_assert_ne!(h.x_axis.kind, h.y_axis.kind);
            prop_assert_eq!(h.category_axis().kind, AxisKind::Category);
            prop_assert_eq!(v.category_axis().kind, AxisKind::Category);
        }
    }
}
