//! Node-count chart: one point per AI turn, log10 scale

use egui::{Align2, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use super::theme::*;
use crate::game::NodeHistory;

const LEFT_GUTTER: f32 = 26.0;
const BOTTOM_GUTTER: f32 = 14.0;

/// Draw both node series of `history` into the available width
pub fn show(ui: &mut egui::Ui, history: &NodeHistory) {
    let size = Vec2::new(ui.available_width(), CHART_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let plot = Rect::from_min_max(
        rect.min + Vec2::new(LEFT_GUTTER, 4.0),
        rect.max - Vec2::new(4.0, BOTTOM_GUTTER),
    );

    let axis = Stroke::new(1.0, CHART_AXIS);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.left_top()], axis);

    if history.is_empty() {
        painter.text(plot.center(), Align2::CENTER_CENTER, "no AI moves yet", FontId::proportional(11.0), TEXT_MUTED);
        return;
    }

    // log10 range is [-1, y_max]; -1 marks a search that visited nothing
    let y_max = history.log_max().ceil().max(1.0);
    let turns = history.len();
    let to_screen = |turn: usize, value: f64| {
        let x = if turns > 1 {
            plot.left() + plot.width() * turn as f32 / (turns - 1) as f32
        } else {
            plot.center().x
        };
        let t = ((value + 1.0) / (y_max + 1.0)) as f32;
        Pos2::new(x, plot.bottom() - t * plot.height())
    };

    for tick in 0..=(y_max as i32) {
        let y = to_screen(0, tick as f64).y;
        painter.text(
            Pos2::new(rect.left() + 2.0, y),
            Align2::LEFT_CENTER,
            format!("{}", tick),
            FontId::proportional(9.0),
            TEXT_MUTED,
        );
    }
    painter.text(
        Pos2::new(plot.right(), rect.bottom()),
        Align2::RIGHT_BOTTOM,
        format!("{} turns", turns),
        FontId::proportional(9.0),
        TEXT_MUTED,
    );

    for (series, color) in [
        (history.log_without_pruning(), CHART_UNPRUNED),
        (history.log_with_pruning(), CHART_PRUNED),
    ] {
        let points: Vec<Pos2> = series
            .iter()
            .enumerate()
            .map(|(turn, &value)| to_screen(turn, value))
            .collect();
        if points.len() > 1 {
            painter.add(Shape::line(points.clone(), Stroke::new(2.0, color)));
        }
        for point in points {
            painter.circle_filled(point, 3.0, color);
        }
    }
}
