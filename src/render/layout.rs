//! Geometry for each infographic layout.
//!
//! Every function draws the steps below `top` and returns the total
//! drawing height.

use std::f64::consts::PI;

use crate::model::{ParsedDocument, Step};

use super::svg::{polar, wrap_text, Anchor, Canvas, TextStyle, MARGIN};

const GAP: f64 = 24.0;

/// Wrapped title and description of one step.
struct StepText {
    title: Vec<String>,
    description: Vec<String>,
    title_style: TextStyle,
    body_style: TextStyle,
}

impl StepText {
    fn measure(canvas: &Canvas, step: &Step, width: f64, scale: f64, anchor: Anchor) -> Self {
        let title_style = canvas.title_style(20.0 * scale, anchor);
        let body_style = canvas.body_style(15.0 * scale, anchor);
        Self {
            title: wrap_text(&step.title, title_style.chars_for(width)),
            description: wrap_text(&step.description, body_style.chars_for(width)),
            title_style,
            body_style,
        }
    }

    fn height(&self) -> f64 {
        self.title_style.block_height(self.title.len())
            + 8.0
            + self.body_style.block_height(self.description.len())
    }

    /// Draw with the top of the block at `y`; returns the bottom edge.
    fn draw(&self, canvas: &mut Canvas, x: f64, y: f64) -> f64 {
        let title_baseline = y + self.title_style.size;
        canvas.text(x, title_baseline, &self.title, self.title_style);
        let body_top = y + self.title_style.block_height(self.title.len()) + 8.0;
        canvas.text(
            x,
            body_top + self.body_style.size,
            &self.description,
            self.body_style,
        );
        y + self.height()
    }
}

fn content_bottom(y: f64, top: f64, drew_any: bool) -> f64 {
    if drew_any {
        y - GAP + MARGIN
    } else {
        top + MARGIN
    }
}

/// Stacked full-width cards with a badge on the left.
pub(super) fn vertical_cards(canvas: &mut Canvas, doc: &ParsedDocument, top: f64) -> f64 {
    let x = MARGIN;
    let w = canvas.width - 2.0 * MARGIN;
    let text_x = x + 110.0;
    let text_w = w - 170.0;
    let mut y = top;

    for step in &doc.steps {
        let text = StepText::measure(canvas, step, text_w, 1.1, Anchor::Start);
        let h = (text.height() + 48.0).max(110.0);

        canvas.card(x, y, w, h);
        canvas.badge(x + 55.0, y + h / 2.0, 28.0, step.number);
        text.draw(canvas, text_x, y + (h - text.height()) / 2.0);
        canvas.icon(x + w - 40.0, y + h / 2.0, step.icon);

        y += h + GAP;
    }

    content_bottom(y, top, !doc.steps.is_empty())
}

/// A row of numbered badges joined by a connector, text underneath.
pub(super) fn horizontal_steps(canvas: &mut Canvas, doc: &ParsedDocument, top: f64) -> f64 {
    let count = doc.steps.len().max(1) as f64;
    let column = (canvas.width - 2.0 * MARGIN) / count;
    let badge_y = top + 40.0;

    if doc.steps.len() > 1 {
        canvas.line(
            (MARGIN + column / 2.0, badge_y),
            (canvas.width - MARGIN - column / 2.0, badge_y),
            4.0,
            0.5,
        );
    }

    let mut bottom = badge_y + 40.0;
    for (i, step) in doc.steps.iter().enumerate() {
        let cx = MARGIN + column * (i as f64 + 0.5);
        canvas.badge(cx, badge_y, 32.0, step.number);
        canvas.icon(cx, badge_y + 56.0, step.icon);

        let text = StepText::measure(canvas, step, column - 16.0, 1.0, Anchor::Middle);
        bottom = bottom.max(text.draw(canvas, cx, badge_y + 80.0));
    }

    bottom + MARGIN
}

/// Place a step's label outside a circle at `angle`.
fn orbit_label(canvas: &mut Canvas, center: (f64, f64), distance: f64, angle: f64, step: &Step) {
    let (cos, sin) = (angle.cos(), angle.sin());
    let anchor = if cos > 0.3 {
        Anchor::Start
    } else if cos < -0.3 {
        Anchor::End
    } else {
        Anchor::Middle
    };
    let text = StepText::measure(canvas, step, 190.0, 0.9, anchor);
    let (lx, ly) = polar(center, distance, angle);
    let y = if sin < -0.3 {
        ly - text.height()
    } else if sin > 0.3 {
        ly
    } else {
        ly - text.height() / 2.0
    };
    text.draw(canvas, lx, y);
}

/// Radius of an orbit that leaves room for labels on both sides.
fn orbit_radius(canvas: &Canvas, preferred: f64) -> f64 {
    preferred.min(canvas.width / 2.0 - MARGIN - 200.0).max(80.0)
}

fn step_angle(index: usize, count: usize) -> f64 {
    -PI / 2.0 + 2.0 * PI * index as f64 / count.max(1) as f64
}

/// Steps on spokes around a central title disc.
pub(super) fn radial_process(canvas: &mut Canvas, doc: &ParsedDocument, top: f64) -> f64 {
    let count = doc.steps.len();
    let radius = orbit_radius(canvas, (140.0 + 30.0 * count as f64).clamp(200.0, 300.0));
    let center = (canvas.width / 2.0, top + radius + 140.0);

    for i in 0..count {
        let node = polar(center, radius, step_angle(i, count));
        canvas.line(center, node, 2.0, 0.4);
    }

    canvas.circle(center.0, center.1, 100.0, canvas.theme.accent);
    let hub_style = TextStyle {
        size: 20.0,
        bold: true,
        fill: canvas.theme.on_accent,
        anchor: Anchor::Middle,
    };
    let hub_lines = wrap_text(&doc.title, 14);
    let hub_lines = &hub_lines[..hub_lines.len().min(4)];
    let hub_top = center.1 - hub_style.block_height(hub_lines.len()) / 2.0 + hub_style.size;
    canvas.text(center.0, hub_top, hub_lines, hub_style);

    for (i, step) in doc.steps.iter().enumerate() {
        let angle = step_angle(i, count);
        let (nx, ny) = polar(center, radius, angle);
        canvas.badge(nx, ny, 32.0, step.number);
        orbit_label(canvas, center, radius + 52.0, angle, step);
    }

    center.1 + radius + 160.0
}

/// Alternating cards on both sides of a vertical spine.
pub(super) fn timeline_flow(canvas: &mut Canvas, doc: &ParsedDocument, top: f64) -> f64 {
    let spine_x = canvas.width / 2.0;
    let card_w = spine_x - MARGIN - 50.0;

    let texts: Vec<StepText> = doc
        .steps
        .iter()
        .map(|step| StepText::measure(canvas, step, card_w - 60.0, 1.0, Anchor::Start))
        .collect();
    let heights: Vec<f64> = texts.iter().map(|t| (t.height() + 44.0).max(100.0)).collect();

    let first_y = top + 10.0;
    let last_y = first_y + heights.iter().map(|h| h + GAP).sum::<f64>() - GAP;
    if !doc.steps.is_empty() {
        canvas.line((spine_x, first_y), (spine_x, last_y), 4.0, 0.35);
    }

    let mut y = first_y;
    for (i, (step, text)) in doc.steps.iter().zip(&texts).enumerate() {
        let h = heights[i];
        let mid = y + h / 2.0;
        let card_x = if i % 2 == 0 {
            MARGIN
        } else {
            spine_x + 50.0
        };

        if i % 2 == 0 {
            canvas.line((card_x + card_w, mid), (spine_x, mid), 2.0, 0.6);
        } else {
            canvas.line((spine_x, mid), (card_x, mid), 2.0, 0.6);
        }
        canvas.card(card_x, y, card_w, h);
        text.draw(canvas, card_x + 24.0, y + 22.0);
        canvas.icon(card_x + card_w - 24.0, y + 24.0, step.icon);
        canvas.badge(spine_x, mid, 22.0, step.number);

        y += h + GAP;
    }

    content_bottom(y, top, !doc.steps.is_empty())
}

/// Steps around a segmented progress ring.
pub(super) fn circular_progress(canvas: &mut Canvas, doc: &ParsedDocument, top: f64) -> f64 {
    let count = doc.steps.len();
    let radius = orbit_radius(canvas, 230.0);
    let center = (canvas.width / 2.0, top + radius + 140.0);
    let muted = canvas.theme.muted;

    canvas.ring(center.0, center.1, radius, muted, 10.0, 0.2);

    let gap = 0.08;
    for i in 0..count {
        let start = step_angle(i, count) + gap / 2.0;
        let end = step_angle(i + 1, count) - gap / 2.0;
        let opacity = 0.35 + 0.65 * (i + 1) as f64 / count as f64;
        canvas.arc(center, radius, start, end, 10.0, opacity);
    }

    let count_style = TextStyle {
        size: 56.0,
        bold: true,
        fill: canvas.theme.accent,
        anchor: Anchor::Middle,
    };
    canvas.text(center.0, center.1 + 8.0, &[count.to_string()], count_style);
    let label = if count == 1 { "step" } else { "steps" };
    let label_style = canvas.body_style(18.0, Anchor::Middle);
    canvas.text(center.0, center.1 + 40.0, &[label.to_string()], label_style);

    for (i, step) in doc.steps.iter().enumerate() {
        let angle = step_angle(i, count);
        let (nx, ny) = polar(center, radius, angle);
        canvas.badge(nx, ny, 28.0, step.number);
        orbit_label(canvas, center, radius + 48.0, angle, step);
    }

    center.1 + radius + 160.0
}

/// Grid of cards, two columns for short processes and three otherwise.
pub(super) fn multi_column(canvas: &mut Canvas, doc: &ParsedDocument, top: f64) -> f64 {
    let columns = match doc.steps.len() {
        0 | 1 => 1,
        2..=4 => 2,
        _ => 3,
    };
    let col_w = (canvas.width - 2.0 * MARGIN - GAP * (columns - 1) as f64) / columns as f64;

    let texts: Vec<StepText> = doc
        .steps
        .iter()
        .map(|step| StepText::measure(canvas, step, col_w - 48.0, 1.0, Anchor::Start))
        .collect();

    let mut y = top;
    for (row_steps, row_texts) in doc.steps.chunks(columns).zip(texts.chunks(columns)) {
        let row_h = row_texts
            .iter()
            .map(|t| t.height() + 100.0)
            .fold(0.0, f64::max);

        for (j, (step, text)) in row_steps.iter().zip(row_texts).enumerate() {
            let x = MARGIN + j as f64 * (col_w + GAP);
            canvas.card(x, y, col_w, row_h);
            canvas.badge(x + 44.0, y + 44.0, 22.0, step.number);
            canvas.icon(x + col_w - 32.0, y + 44.0, step.icon);
            text.draw(canvas, x + 24.0, y + 80.0);
        }

        y += row_h + GAP;
    }

    content_bottom(y, top, !doc.steps.is_empty())
}
