//! Column width layout from measured text

use super::model::{Row, Table};

/// Text measurement capability supplied by the font layer
pub trait TextMeasure {
    /// Advance width of `text` in pixels
    fn text_width(&self, text: &str) -> f32;

    /// Height of one line of text in pixels
    fn line_height(&self) -> f32;
}

/// Sizing rules for grid columns (pixels, already scaled)
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSizing {
    /// Horizontal padding added to the widest text
    pub padding: f32,
    /// Floor for any column width
    pub min_width: f32,
    /// Suffix reserved for the sort indicator
    pub indicator: &'static str,
}

impl ColumnSizing {
    pub fn new(scale: f32) -> Self {
        Self {
            padding: 22.0 * scale,
            min_width: 80.0 * scale,
            indicator: " ^",
        }
    }
}

impl Default for ColumnSizing {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Measure one width per column over the header and every cell
///
/// The widest text in a column gets room for the sort indicator plus
/// padding, and the result is never below `min_width`.
pub fn measure_column_widths(
    headers: &[String],
    rows: &[Row],
    measure: &dyn TextMeasure,
    sizing: &ColumnSizing,
) -> Vec<f32> {
    let indicator_width = measure.text_width(sizing.indicator);

    (0..headers.len())
        .map(|col| {
            let widest = rows
                .iter()
                .map(|row| measure.text_width(row.cell(col)))
                .fold(measure.text_width(&headers[col]), f32::max);

            let plain = widest + sizing.padding;
            let with_indicator = widest + indicator_width + sizing.padding;
            plain.max(with_indicator).max(sizing.min_width)
        })
        .collect()
}

impl Table {
    /// Compute column widths from the current headers and rows
    pub fn layout_columns(&mut self, measure: &dyn TextMeasure, sizing: &ColumnSizing) {
        let widths = measure_column_widths(&self.headers, &self.rows, measure, sizing);
        self.set_column_widths(widths);
        tracing::debug!(
            columns = self.col_count,
            content_width = self.content_width(),
            "Measured column widths"
        );
    }

    pub(crate) fn set_column_widths(&mut self, widths: Vec<f32>) {
        let mut offsets = Vec::with_capacity(widths.len());
        let mut x = 0.0;
        for w in &widths {
            offsets.push(x);
            x += w;
        }
        self.col_widths = widths;
        self.col_offsets = offsets;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TsvData;

    /// Every character is 10px wide
    struct Fixed;

    impl TextMeasure for Fixed {
        fn text_width(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 10.0
        }

        fn line_height(&self) -> f32 {
            20.0
        }
    }

    fn rows(cells: &[&[&str]]) -> Vec<Row> {
        cells.iter().map(|r| r.iter().copied().collect()).collect()
    }

    #[test]
    fn test_width_from_widest_cell() {
        let headers = vec!["id".to_string()];
        let data = rows(&[&["a"], &["abcdefghijkl"]]);

        let widths = measure_column_widths(&headers, &data, &Fixed, &ColumnSizing::default());

        // 120 text + 20 indicator + 22 padding
        assert_eq!(widths, vec![162.0]);
    }

    #[test]
    fn test_width_from_header() {
        let headers = vec!["a_long_header_name".to_string()];
        let data = rows(&[&["x"]]);

        let widths = measure_column_widths(&headers, &data, &Fixed, &ColumnSizing::default());

        assert_eq!(widths, vec![180.0 + 20.0 + 22.0]);
    }

    #[test]
    fn test_width_floored_at_minimum() {
        let headers = vec!["a".to_string(), "b".to_string()];
        let data = rows(&[&["1", ""]]);

        let widths = measure_column_widths(&headers, &data, &Fixed, &ColumnSizing::default());

        assert_eq!(widths, vec![80.0, 80.0]);
    }

    #[test]
    fn test_sizing_scales() {
        let sizing = ColumnSizing::new(2.0);
        assert_eq!(sizing.padding, 44.0);
        assert_eq!(sizing.min_width, 160.0);
    }

    #[test]
    fn test_layout_columns_sets_offsets() {
        let mut table = Table::new(TsvData {
            headers: vec!["a".into(), "bbbbbbbbbbbb".into()],
            rows: vec![],
            col_count: 2,
        });

        table.layout_columns(&Fixed, &ColumnSizing::default());

        assert_eq!(table.col_widths(), &[80.0, 162.0]);
        assert_eq!(table.column_offset(1), 80.0);
        assert_eq!(table.column_at(100.0), Some(1));
    }
}
