//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use tsvgrid::geometry::GridLayout;
use tsvgrid::messages::{FrameInput, Msg};
use tsvgrid::model::AppModel;
use tsvgrid::table::{parse_tsv, Table, TextMeasure};
use tsvgrid::theme::Theme;
use tsvgrid::update::update;
use tsvgrid::Cmd;

/// Every character is 10px wide, lines are 20px tall
pub struct FixedMeasure;

impl TextMeasure for FixedMeasure {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    fn line_height(&self) -> f32 {
        20.0
    }
}

/// Model for `tsv` in a 1200x800 window at scale 1.0
///
/// The viewport is (12, 44, 1176, 744); the header band spans y 44..92 and
/// row `r` spans y `92 + 40r`.
pub fn test_model(tsv: &str) -> AppModel {
    test_model_sized(tsv, 1200, 800)
}

pub fn test_model_sized(tsv: &str, width: u32, height: u32) -> AppModel {
    let table = Table::new(parse_tsv(tsv.as_bytes()).expect("test input is not empty"));
    let mut model = AppModel::new(table, Theme::default(), width, height);
    model.apply_font(&FixedMeasure, 1.0);
    model
}

/// Table with `rows` rows and `cols` columns of `"r{row}c{col}"` cells
pub fn generated_tsv(rows: usize, cols: usize) -> String {
    let mut out = (0..cols)
        .map(|c| format!("h{}", c))
        .collect::<Vec<_>>()
        .join("\t");
    out.push('\n');
    for r in 0..rows {
        let line = (0..cols)
            .map(|c| format!("r{}c{}", r, c))
            .collect::<Vec<_>>()
            .join("\t");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn layout(model: &AppModel) -> GridLayout {
    GridLayout::compute(model.window_size, &model.metrics)
}

/// Drives frames with a persistent button/modifier state and a clock
pub struct Driver {
    pub pointer: (f32, f32),
    pub held: bool,
    pub shift: bool,
    pub now: Instant,
}

impl Default for Driver {
    fn default() -> Self {
        Self {
            pointer: (0.0, 0.0),
            held: false,
            shift: false,
            now: Instant::now(),
        }
    }
}

impl Driver {
    fn frame(&self, pressed: bool, wheel: f32) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            wheel,
            pressed,
            held: self.held,
            shift: self.shift,
            now: self.now,
        }
    }

    /// A frame with no new input
    pub fn idle(&mut self, model: &mut AppModel) -> Option<Cmd> {
        update(model, Msg::Frame(self.frame(false, 0.0)))
    }

    pub fn move_to(&mut self, model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
        self.pointer = (x, y);
        self.idle(model)
    }

    /// Press the button at `(x, y)` and keep it held
    pub fn press(&mut self, model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
        self.pointer = (x, y);
        self.held = true;
        update(model, Msg::Frame(self.frame(true, 0.0)))
    }

    pub fn release(&mut self, model: &mut AppModel) -> Option<Cmd> {
        self.held = false;
        self.idle(model)
    }

    /// Press then release at `(x, y)`
    pub fn click(&mut self, model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
        let cmd = self.press(model, x, y);
        self.release(model);
        cmd
    }

    pub fn wheel(&mut self, model: &mut AppModel, notches: f32) -> Option<Cmd> {
        update(model, Msg::Frame(self.frame(false, notches)))
    }

    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

/// Cell texts of every row, in display order
pub fn row_texts(model: &AppModel) -> Vec<Vec<String>> {
    model
        .table
        .rows()
        .iter()
        .map(|row| row.cells().to_vec())
        .collect()
}
