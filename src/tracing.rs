//! Tracing setup and grid state snapshots for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=grid=debug` - grid state transitions only
//! - `RUST_LOG=tsvgrid::table=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tsvgrid/logs/tsvgrid.log` with daily rotation.
//! File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, CellPosition, DragState};
use crate::table::ActiveSort;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
/// File logging writes to `~/.config/tsvgrid/logs/tsvgrid.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tsvgrid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the interactive grid state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    pub sort: Option<ActiveSort>,
    pub drag: DragState,
    pub hover: Option<CellPosition>,
    pub scroll: (f32, f32),
}

impl GridSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            sort: model.table.active_sort(),
            drag: model.grid.drag,
            hover: model.grid.hover,
            scroll: (model.grid.scroll_x, model.grid.scroll_y),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &GridSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.sort != other.sort {
            changes.push(match other.sort {
                Some(s) => format!("sort: column {} {:?}", s.column, s.direction),
                None => "sort: cleared".to_string(),
            });
        }
        if std::mem::discriminant(&self.drag) != std::mem::discriminant(&other.drag) {
            changes.push(format!("drag: {:?} → {:?}", self.drag, other.drag));
        }
        if self.hover != other.hover {
            changes.push(match other.hover {
                Some(p) => format!("hover: ({},{})", p.row, p.col),
                None => "hover: none".to_string(),
            });
        }
        if self.scroll != other.scroll {
            changes.push(format!(
                "scroll: ({:.0},{:.0}) → ({:.0},{:.0})",
                self.scroll.0, self.scroll.1, other.scroll.0, other.scroll.1
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SortDirection;

    fn snapshot() -> GridSnapshot {
        GridSnapshot {
            sort: None,
            drag: DragState::Idle,
            hover: None,
            scroll: (0.0, 0.0),
        }
    }

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        assert_eq!(snapshot().diff(&snapshot()), None);
    }

    #[test]
    fn test_diff_reports_sort_and_scroll() {
        let before = snapshot();
        let after = GridSnapshot {
            sort: Some(ActiveSort {
                column: 2,
                direction: SortDirection::Descending,
            }),
            scroll: (0.0, 40.0),
            ..snapshot()
        };

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("sort: column 2 Descending"));
        assert!(diff.contains("scroll: (0,0) → (0,40)"));
    }

    #[test]
    fn test_drag_offset_change_is_not_a_transition() {
        let before = GridSnapshot {
            drag: DragState::Vertical { grab_offset: 3.0 },
            ..snapshot()
        };
        let after = GridSnapshot {
            drag: DragState::Vertical { grab_offset: 5.0 },
            ..snapshot()
        };
        assert_eq!(before.diff(&after), None);
    }
}
