//! Column sorting and restore of the load order

use std::cmp::Ordering;

use super::model::{ActiveSort, Row, SortDirection, Table};

/// Byte-wise comparison of one column, flipped for descending order
fn compare_rows(a: &Row, b: &Row, sort: ActiveSort) -> Ordering {
    let ord = a.cell(sort.column).as_bytes().cmp(b.cell(sort.column).as_bytes());
    match sort.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

impl Table {
    /// Sort rows by `column`, flipping direction when it is already active
    ///
    /// The sort is stable: rows with equal keys keep their current relative
    /// order. Columns outside the table are ignored.
    pub fn sort_by(&mut self, column: usize) {
        if column >= self.col_count {
            return;
        }

        let sort = match self.sort {
            Some(active) if active.column == column => ActiveSort {
                column,
                direction: active.direction.toggled(),
            },
            _ => ActiveSort {
                column,
                direction: SortDirection::Ascending,
            },
        };

        self.rows.sort_by(|a, b| compare_rows(a, b, sort));
        self.sort = Some(sort);

        tracing::debug!(
            column,
            direction = ?sort.direction,
            rows = self.rows.len(),
            "Sorted table"
        );
    }

    /// Restore the load-time row order and clear the active sort
    pub fn reset(&mut self) {
        self.rows = self.original.clone();
        self.sort = None;
        tracing::debug!(rows = self.rows.len(), "Restored original row order");
    }
}

#[cfg(test)]
mod tests {
    use crate::table::{parse_tsv, Table};

    fn table(input: &str) -> Table {
        Table::new(parse_tsv(input.as_bytes()).unwrap())
    }

    fn column(table: &Table, col: usize) -> Vec<&str> {
        table.rows().iter().map(|r| r.cell(col)).collect()
    }

    #[test]
    fn test_sort_ascending_then_descending() {
        let mut t = table("Name\tAge\nBob\t30\nAlice\t25\nCarol\t41\n");

        t.sort_by(0);
        assert_eq!(column(&t, 0), vec!["Alice", "Bob", "Carol"]);
        assert_eq!(t.sort_column(), Some(0));
        assert!(t.sort_ascending());

        t.sort_by(0);
        assert_eq!(column(&t, 0), vec!["Carol", "Bob", "Alice"]);
        assert!(!t.sort_ascending());
    }

    #[test]
    fn test_switching_column_resets_to_ascending() {
        let mut t = table("a\tb\nx\t2\ny\t1\n");

        t.sort_by(0);
        t.sort_by(0);
        assert!(!t.sort_ascending());

        t.sort_by(1);
        assert_eq!(t.sort_column(), Some(1));
        assert!(t.sort_ascending());
        assert_eq!(column(&t, 1), vec!["1", "2"]);
    }

    #[test]
    fn test_sort_is_lexicographic_bytes() {
        let mut t = table("n\n10\n9\n100\nB\na\n");

        t.sort_by(0);

        assert_eq!(column(&t, 0), vec!["10", "100", "9", "B", "a"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut t = table("k\tv\nx\t1\ny\t2\nx\t3\ny\t4\n");

        t.sort_by(0);
        assert_eq!(column(&t, 1), vec!["1", "3", "2", "4"]);

        t.sort_by(0);
        assert_eq!(column(&t, 1), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_reset_restores_load_order() {
        let mut t = table("Name\tAge\nBob\t30\nAlice\t25\n");

        t.sort_by(1);
        t.sort_by(0);
        t.sort_by(0);
        t.reset();

        assert_eq!(column(&t, 0), vec!["Bob", "Alice"]);
        assert_eq!(t.sort_column(), None);
        assert!(t.sort_ascending());
        assert_eq!(t.rows(), t.original_rows());
    }

    #[test]
    fn test_sort_does_not_touch_snapshot() {
        let mut t = table("a\nz\ny\n");

        t.sort_by(0);

        assert_eq!(t.original_rows()[0].cell(0), "z");
        assert_eq!(t.rows()[0].cell(0), "y");
    }

    #[test]
    fn test_sort_out_of_range_column_is_ignored() {
        let mut t = table("a\nz\ny\n");

        t.sort_by(3);

        assert_eq!(t.sort_column(), None);
        assert_eq!(column(&t, 0), vec!["z", "y"]);
    }
}
