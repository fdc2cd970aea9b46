use smallvec::SmallVec;

use crate::core::{LinearScale, XMetric, YMetric};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::axis_ticks::{
    AXIS_X_MIN_SPACING_PX, AXIS_Y_MIN_SPACING_PX, axis_ticks, format_tick,
    select_ticks_with_min_spacing,
};
use super::tooltip::TooltipContent;
use super::{ChartModel, ScatterChartConfig};

const AXIS_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
const ACTIVE_LABEL_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const INACTIVE_LABEL_COLOR: Color = Color::rgb(0.6, 0.6, 0.6);
const ABBR_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
// #232F34, the tooltip background of the reference styling.
const TOOLTIP_BG: Color = Color::rgb(0.137, 0.184, 0.204);
const TOOLTIP_TEXT_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
const TOOLTIP_CORNER_RADIUS: f64 = 8.0;
const TOOLTIP_PADDING_PX: f64 = 6.0;
const TICK_LENGTH_PX: f64 = 6.0;
const AXIS_STROKE_WIDTH: f64 = 1.0;

/// Projects the chart model into one deterministic frame of draw
/// primitives. Axis ticks and circles read the displayed (possibly
/// mid-transition) values; abbreviation overlays and labels read targets.
pub(super) fn build_frame(
    model: &ChartModel,
    config: &ScatterChartConfig,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(config.viewport);
    let plot = model.plot_area();

    append_x_axis(&mut frame, model, config)?;
    append_y_axis(&mut frame, model, config)?;

    // Scatter points at their displayed coordinates.
    for index in 0..model.motion().circle_count() {
        if let Some((cx, cy)) = model.motion().displayed_circle(index) {
            frame.circles.push(CirclePrimitive::new(
                cx,
                cy,
                config.circle_radius_px,
                config.circle_fill,
            ));
        }
    }

    // Abbreviation overlays land on target positions immediately, without
    // a transition.
    for (index, record) in model.dataset().records().iter().enumerate() {
        if let Some((cx, cy)) = model.motion().target_circle(index) {
            frame.texts.push(
                TextPrimitive::new(
                    record.abbr.clone(),
                    cx,
                    cy + config.abbr_font_size_px * 0.35,
                    config.abbr_font_size_px,
                    ABBR_COLOR,
                    TextHAlign::Center,
                ),
            );
        }
    }

    // Clickable axis label groups: X pair centered under the plot, Y pair
    // rotated -90 degrees along the left edge.
    let selection = model.selection();
    let x_label_x = plot.origin_x + plot.width / 2.0;
    for (metric, slot_y) in [(XMetric::Obesity, 40.0), (XMetric::Smokes, 60.0)] {
        let active = selection.is_x_active(metric);
        frame.texts.push(
            TextPrimitive::new(
                metric.axis_label(),
                x_label_x,
                plot.bottom() + slot_y,
                config.axis_label_font_size_px,
                if active {
                    ACTIVE_LABEL_COLOR
                } else {
                    INACTIVE_LABEL_COLOR
                },
                TextHAlign::Center,
            )
            .with_bold(active),
        );
    }

    let y_label_x = -(plot.origin_y + plot.height / 2.0);
    for (metric, slot_offset) in [(YMetric::Income, 60.0), (YMetric::Healthcare, 80.0)] {
        let active = selection.is_y_active(metric);
        frame.texts.push(
            TextPrimitive::new(
                metric.axis_label(),
                y_label_x,
                plot.origin_x - slot_offset,
                config.axis_label_font_size_px,
                if active {
                    ACTIVE_LABEL_COLOR
                } else {
                    INACTIVE_LABEL_COLOR
                },
                TextHAlign::Center,
            )
            .with_bold(active)
            .with_rotation_deg(-90.0),
        );
    }

    append_tooltip(&mut frame, model, config);

    frame.validate()?;
    Ok(frame)
}

fn append_x_axis(
    frame: &mut RenderFrame,
    model: &ChartModel,
    config: &ScatterChartConfig,
) -> ChartResult<()> {
    let plot = model.plot_area();
    let domain = model.motion().displayed_x_domain();
    let scale = LinearScale::new(domain, (0.0, plot.width))?;

    frame.lines.push(LinePrimitive::new(
        plot.origin_x,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        AXIS_STROKE_WIDTH,
        AXIS_COLOR,
    ));

    let step = (domain.1 - domain.0) / (config.x_tick_count.max(2) - 1) as f64;
    let mut candidates = Vec::with_capacity(config.x_tick_count);
    for value in axis_ticks(domain, config.x_tick_count) {
        candidates.push((value, plot.origin_x + scale.project(value)?));
    }

    for (value, px) in select_ticks_with_min_spacing(candidates, AXIS_X_MIN_SPACING_PX) {
        frame.lines.push(LinePrimitive::new(
            px,
            plot.bottom(),
            px,
            plot.bottom() + TICK_LENGTH_PX,
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(value, step),
            px,
            plot.bottom() + TICK_LENGTH_PX + config.tick_font_size_px + 2.0,
            config.tick_font_size_px,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }

    Ok(())
}

fn append_y_axis(
    frame: &mut RenderFrame,
    model: &ChartModel,
    config: &ScatterChartConfig,
) -> ChartResult<()> {
    let plot = model.plot_area();
    let domain = model.motion().displayed_y_domain();
    let scale = LinearScale::new(domain, (plot.height, 0.0))?;

    frame.lines.push(LinePrimitive::new(
        plot.origin_x,
        plot.origin_y,
        plot.origin_x,
        plot.bottom(),
        AXIS_STROKE_WIDTH,
        AXIS_COLOR,
    ));

    let step = (domain.1 - domain.0) / (config.y_tick_count.max(2) - 1) as f64;
    let mut candidates = Vec::with_capacity(config.y_tick_count);
    for value in axis_ticks(domain, config.y_tick_count) {
        candidates.push((value, plot.origin_y + scale.project(value)?));
    }

    for (value, py) in select_ticks_with_min_spacing(candidates, AXIS_Y_MIN_SPACING_PX) {
        frame.lines.push(LinePrimitive::new(
            plot.origin_x - TICK_LENGTH_PX,
            py,
            plot.origin_x,
            py,
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(value, step),
            plot.origin_x - TICK_LENGTH_PX - 3.0,
            py + config.tick_font_size_px * 0.35,
            config.tick_font_size_px,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }

    Ok(())
}

fn append_tooltip(frame: &mut RenderFrame, model: &ChartModel, config: &ScatterChartConfig) {
    let hover = model.hover();
    if !hover.cursor_inside() {
        return;
    }
    let Some(index) = hover.hovered_index() else {
        return;
    };
    let Some(record) = model.dataset().records().get(index) else {
        return;
    };
    let Some((cx, cy)) = model.motion().displayed_circle(index) else {
        return;
    };

    let content = TooltipContent::from_record(record, model.selection());
    let lines: SmallVec<[String; 3]> = content.lines();

    let line_height = config.tooltip_font_size_px * 1.4;
    let longest_chars = lines.iter().map(String::len).max().unwrap_or(0) as f64;
    let box_width = longest_chars * config.tooltip_font_size_px * 0.62 + TOOLTIP_PADDING_PX * 2.0;
    let box_height = lines.len() as f64 * line_height + TOOLTIP_PADDING_PX * 2.0;

    let viewport_width = f64::from(config.viewport.width);
    let viewport_height = f64::from(config.viewport.height);
    let mut box_x = cx + config.circle_radius_px + 4.0;
    let mut box_y = cy - box_height - config.circle_radius_px - 4.0;
    box_x = box_x.min(viewport_width - box_width).max(0.0);
    if box_y < 0.0 {
        box_y = (cy + config.circle_radius_px + 4.0).min(viewport_height - box_height);
    }

    frame.rects.push(
        RectPrimitive::new(box_x, box_y, box_width, box_height, TOOLTIP_BG)
            .with_corner_radius(TOOLTIP_CORNER_RADIUS),
    );

    for (line_index, line) in lines.iter().enumerate() {
        frame.texts.push(TextPrimitive::new(
            line.clone(),
            box_x + box_width / 2.0,
            box_y + TOOLTIP_PADDING_PX + line_height * (line_index as f64 + 0.8),
            config.tooltip_font_size_px,
            TOOLTIP_TEXT_COLOR,
            TextHAlign::Center,
        ));
    }
}
