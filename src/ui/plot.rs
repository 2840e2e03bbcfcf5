use eframe::egui::epaint::TextShape;
use eframe::egui::{
    self, Align2, Color32, FontId, Painter, Pos2, Rect, RichText, Sense, Stroke, Ui, Vec2,
};

use crate::chart::scale::LinearScale;
use crate::chart::tooltip;
use crate::data::model::AxisField;
use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Scatter chart (central panel)
// ---------------------------------------------------------------------------

const CIRCLE_RADIUS: f32 = 15.0;
const X_TICKS: usize = 10;
const Y_TICKS: usize = 10;

/// Render the scatter chart surface: axes, circles, abbreviation labels,
/// the clickable axis-label stack, and the hover tooltip.
pub fn scatter_chart(ui: &mut Ui, state: &mut ChartState) {
    let now = ui.input(|i| i.time);
    state.tick_transition(now);

    let Some(dataset) = state.dataset.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data loaded  (File → Open…)");
        });
        return;
    };

    let layout = state.layout;
    let text_color = ui.visuals().text_color();
    let axis_stroke = Stroke::new(1.0, Color32::GRAY);

    let (response, painter) = ui.allocate_painter(layout.canvas, Sense::hover());
    let canvas = response.rect;
    let chart = layout.chart_rect(canvas);

    let x_scale = state.displayed_x_scale(now);
    let y_scale = state.y_scale;

    // ---- Axes ----
    draw_x_axis(&painter, chart, &x_scale, axis_stroke, text_color);
    draw_y_axis(&painter, chart, &y_scale, axis_stroke, text_color);
    draw_y_title(&painter, canvas, chart, text_color);

    // ---- Circles and abbreviation labels ----
    let circle_fill = Color32::from_rgba_unmultiplied(255, 192, 203, 128);
    let abbr_color = Color32::from_rgb(128, 0, 128);

    let positions: Vec<(usize, Pos2)> = dataset
        .records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            // Circles tween per point; only the axis uses the blended scale.
            let px = chart.min.x + state.point_x(record, now) as f32;
            let py = chart.min.y + y_scale.apply(record.healthcare) as f32;
            (idx, Pos2::new(px, py))
        })
        // NaN cells map to NaN positions; those points never draw.
        .filter(|(_, pos)| pos.x.is_finite() && pos.y.is_finite())
        .collect();

    for &(idx, pos) in &positions {
        painter.circle_filled(pos, CIRCLE_RADIUS, circle_fill);
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            &dataset.records[idx].abbr,
            FontId::proportional(12.0),
            abbr_color,
        );
    }

    // ---- Hover tooltip: nearest circle under the pointer ----
    if let Some(pointer) = response.hover_pos() {
        let mut best: Option<(f32, usize)> = None;
        for &(idx, pos) in &positions {
            let dist = pos.distance(pointer);
            if dist <= CIRCLE_RADIUS && best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, idx));
            }
        }
        if let Some((_, idx)) = best {
            let _ = egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                egui::Id::new("state_tooltip"),
                |ui: &mut Ui| {
                    ui.label(tooltip::tooltip_text(
                        &dataset.records[idx],
                        state.chosen_axis,
                        state.legacy_poverty_label,
                    ));
                },
            );
        }
    }

    // ---- Axis label stack (the selection controls) ----
    if let Some(field) = axis_label_stack(ui, chart, state) {
        state.select_axis(field, now);
    }

    // Keep animating while a transition is in flight.
    if state.transition.is_some() {
        ui.ctx().request_repaint();
    }
}

// ---------------------------------------------------------------------------
// Axes
// ---------------------------------------------------------------------------

fn draw_x_axis(
    painter: &Painter,
    chart: Rect,
    scale: &LinearScale,
    stroke: Stroke,
    text_color: Color32,
) {
    painter.line_segment([chart.left_bottom(), chart.right_bottom()], stroke);
    for tick in scale.ticks(X_TICKS) {
        let px = chart.min.x + scale.apply(tick) as f32;
        painter.line_segment(
            [
                Pos2::new(px, chart.max.y),
                Pos2::new(px, chart.max.y + 6.0),
            ],
            stroke,
        );
        painter.text(
            Pos2::new(px, chart.max.y + 8.0),
            Align2::CENTER_TOP,
            format_tick(tick),
            FontId::proportional(11.0),
            text_color,
        );
    }
}

fn draw_y_axis(
    painter: &Painter,
    chart: Rect,
    scale: &LinearScale,
    stroke: Stroke,
    text_color: Color32,
) {
    painter.line_segment([chart.left_top(), chart.left_bottom()], stroke);
    for tick in scale.ticks(Y_TICKS) {
        let py = chart.min.y + scale.apply(tick) as f32;
        painter.line_segment(
            [
                Pos2::new(chart.min.x - 6.0, py),
                Pos2::new(chart.min.x, py),
            ],
            stroke,
        );
        painter.text(
            Pos2::new(chart.min.x - 8.0, py),
            Align2::RIGHT_CENTER,
            format_tick(tick),
            FontId::proportional(11.0),
            text_color,
        );
    }
}

fn draw_y_title(painter: &Painter, canvas: Rect, chart: Rect, text_color: Color32) {
    let galley = painter.layout_no_wrap(
        "Lacks Healthcare (%)".to_owned(),
        FontId::proportional(14.0),
        text_color,
    );
    // Rotated a quarter turn; the anchor is the bottom of the vertical text.
    let pos = Pos2::new(
        canvas.min.x + 24.0,
        chart.center().y + galley.size().x / 2.0,
    );
    painter.add(TextShape::new(pos, galley, text_color).with_angle(-std::f32::consts::FRAC_PI_2));
}

fn format_tick(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// ---------------------------------------------------------------------------
// Axis label stack
// ---------------------------------------------------------------------------

/// The three clickable labels below the x-axis, one per selectable field.
/// Exactly the label of the chosen field renders active (strong); returns
/// the field whose label was clicked this frame, if any.
fn axis_label_stack(ui: &mut Ui, chart: Rect, state: &ChartState) -> Option<AxisField> {
    let mut clicked = None;
    let center_x = chart.min.x + chart.width() / 2.0;

    for (i, field) in AxisField::ALL.into_iter().enumerate() {
        let active = state.label_active(field);
        let text = RichText::new(tooltip::display_label(field)).size(15.0);
        let text = if active { text.strong() } else { text.weak() };

        let rect = Rect::from_center_size(
            Pos2::new(center_x, chart.max.y + 40.0 + 22.0 * i as f32),
            Vec2::new(240.0, 20.0),
        );
        if ui
            .put(rect, egui::SelectableLabel::new(active, text))
            .clicked()
        {
            clicked = Some(field);
        }
    }
    clicked
}

// ---------------------------------------------------------------------------
