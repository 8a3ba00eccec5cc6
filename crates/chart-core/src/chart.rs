// File: crates/chart-core/src/chart.rs
// Summary: Rank chart model and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::error::RenderError;
use crate::geometry::RectI32;
use crate::grid::nice_ticks;
use crate::scale::{CategoryScale, ValueScale};
use crate::series::{annotation_label, Series};
use crate::text::{fit_font_size, Align, FontResource, TextPainter};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub title_size: f32,
    pub caption_size: f32,
    pub tick_size: f32,
    pub annotation_size: f32,
    pub line_width: f32,
    pub marker_radius: f32,
    /// Approximate number of rank ticks on the y axis.
    pub y_tick_target: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            title_size: 32.0,
            caption_size: 19.0,
            tick_size: 14.0,
            annotation_size: 16.0,
            line_width: 2.0,
            marker_radius: 5.0,
            y_tick_target: 6,
        }
    }
}

/// Everything needed to draw one student's chart, minus the font.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_caption: String,
    pub y_caption: String,
    pub x_labels: Vec<String>,
    pub y_values: Vec<Option<f64>>,
    /// Worst rank drawn at the bottom of the y axis; rank 1 is at the top.
    pub y_axis_upper_bound: u32,
}

pub struct Chart {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Series,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

/// Pixel placement of a chart, computed without touching a surface.
#[derive(Clone, Debug)]
pub struct PlotLayout {
    pub plot: RectI32,
    pub x: CategoryScale,
    pub y: ValueScale,
    pub y_ticks: Vec<f64>,
    /// One slot per category; `None` where the value is absent.
    pub points: Vec<Option<(f32, f32)>>,
    /// Value labels above plotted points. Absent and out-of-range values get none.
    pub annotations: Vec<Annotation>,
}

/// A rounded value label, anchored at its centered baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub index: usize,
    pub text: String,
    pub x: f32,
    pub baseline: f32,
}

impl PlotLayout {
    /// Left edge of the rotated y caption, kept on the canvas when tick labels
    /// are wider than the left inset.
    pub fn y_caption_x(&self, widest_tick: f32, caption_size: f32) -> f32 {
        (self.plot.left as f32 - 16.0 - widest_tick - caption_size * 0.6).max(caption_size)
    }
}

impl Chart {
    pub fn from_spec(spec: &ChartSpec) -> Result<Self, RenderError> {
        if spec.x_labels.len() != spec.y_values.len() {
            return Err(RenderError::LengthMismatch {
                labels: spec.x_labels.len(),
                values: spec.y_values.len(),
            });
        }
        Ok(Self {
            title: spec.title.clone(),
            categories: spec.x_labels.clone(),
            series: Series::new(spec.y_values.clone()),
            x_axis: Axis::category(spec.x_caption.clone(), spec.x_labels.len()),
            y_axis: Axis::rank(spec.y_caption.clone(), spec.y_axis_upper_bound),
        })
    }

    pub fn layout(&self, opts: &RenderOptions) -> PlotLayout {
        let plot = RectI32::inset(opts.width, opts.height, &opts.insets);
        let x = CategoryScale::from_rect(&plot, self.categories.len());
        let y = ValueScale::for_axis(&self.y_axis, &plot);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, opts.y_tick_target);
        let points = self
            .series
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| match (v, x.to_px(i)) {
                (Some(v), Some(px)) => Some((px, y.to_px(*v))),
                _ => None,
            })
            .collect::<Vec<_>>();
        let annotations = self
            .series
            .points()
            .filter(|&(_, v)| y.contains(v))
            .filter_map(|(i, v)| {
                let (px, py) = points.get(i).copied().flatten()?;
                Some(Annotation {
                    index: i,
                    text: annotation_label(v),
                    x: px,
                    baseline: py - opts.marker_radius - 6.0,
                })
            })
            .collect();
        PlotLayout { plot, x, y, y_ticks, points, annotations }
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    ///
    /// The surface lives only for this call and is dropped before encoding
    /// begins, so batch callers hold at most one surface at a time.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions, font: &FontResource) -> Result<Vec<u8>, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;

        let layout = self.layout(opts);
        let text = TextPainter::new(font);
        text.warn_if_uncovered(&self.title);

        {
            let canvas = surface.canvas();
            canvas.clear(opts.theme.background);

            draw_grid(canvas, &layout, &opts.theme);
            draw_frame(canvas, &layout.plot, &opts.theme);
            draw_ticks(canvas, &text, &layout, &self.categories, opts);
            draw_captions(canvas, &text, &layout, self, opts);
            draw_series(canvas, &layout, &self.series, opts);
            draw_annotations(canvas, &text, &layout, opts);
        }

        // Snapshot, release the surface, then encode
        let image = surface.image_snapshot();
        drop(surface);
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        debug!(title = %self.title, bytes = data.size(), "chart encoded");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        font: &FontResource,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts, font)?;
        let path = output_png_path.as_ref();
        let write_err = |source| RenderError::Write { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, bytes).map_err(write_err)?;
        Ok(())
    }
}

/// Renders `ChartSpec`s with one font and one set of options for a whole run.
pub struct RankChartRenderer {
    font: FontResource,
    opts: RenderOptions,
}

impl RankChartRenderer {
    pub fn new(font: FontResource) -> Self {
        Self::with_options(font, RenderOptions::default())
    }

    pub fn with_options(font: FontResource, opts: RenderOptions) -> Self {
        Self { font, opts }
    }

    pub fn render(&self, spec: &ChartSpec) -> Result<Vec<u8>, RenderError> {
        Chart::from_spec(spec)?.render_to_png_bytes(&self.opts, &self.font)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, layout: &PlotLayout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    if let Some(dash) = skia::PathEffect::dash(&[6.0, 4.0], 0.0) {
        paint.set_path_effect(dash);
    }

    let p = &layout.plot;
    // verticals at each exam
    for &x in layout.x.positions() {
        canvas.draw_line((x, p.top as f32), (x, p.bottom as f32), &paint);
    }
    // horizontals at each rank tick
    for &v in &layout.y_ticks {
        let y = layout.y.to_px(v);
        canvas.draw_line((p.left as f32, y), (p.right as f32, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.2);
    let rect = skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_rect(rect, &paint);
}

fn draw_ticks(canvas: &skia::Canvas, text: &TextPainter, layout: &PlotLayout, categories: &[String], opts: &RenderOptions) {
    let theme = &opts.theme;
    let p = &layout.plot;
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for (label, &x) in categories.iter().zip(layout.x.positions()) {
        canvas.draw_line((x, p.bottom as f32), (x, p.bottom as f32 + 5.0), &paint);
        text.draw(canvas, label, x, p.bottom as f32 + 8.0 + opts.tick_size, opts.tick_size, theme.tick, Align::Center);
    }
    for &v in &layout.y_ticks {
        let y = layout.y.to_px(v);
        canvas.draw_line((p.left as f32 - 5.0, y), (p.left as f32, y), &paint);
        let label = format!("{}", v.round() as i64);
        text.draw(canvas, &label, p.left as f32 - 9.0, y + opts.tick_size * 0.35, opts.tick_size, theme.tick, Align::Right);
    }
}

fn draw_captions(canvas: &skia::Canvas, text: &TextPainter, layout: &PlotLayout, chart: &Chart, opts: &RenderOptions) {
    let theme = &opts.theme;
    let plot = &layout.plot;
    let center_x = (plot.left + plot.right) as f32 * 0.5;
    let center_y = (plot.top + plot.bottom) as f32 * 0.5;

    // Long titles shrink to the canvas width instead of running off it.
    let title_room = opts.width as f32 - 2.0 * opts.caption_size;
    let title_size = fit_font_size(text.measure_width(&chart.title, opts.title_size), opts.title_size, title_room);
    text.draw(canvas, &chart.title, center_x, plot.top as f32 - opts.title_size * 0.75, title_size, theme.title, Align::Center);

    let x_caption_y = plot.bottom as f32 + 8.0 + opts.tick_size * 2.0 + opts.caption_size;
    text.draw(canvas, &chart.x_axis.label, center_x, x_caption_y, opts.caption_size, theme.axis_label, Align::Center);

    let widest_tick = text.measure_width(&format!("{}", chart.y_axis.max.round() as i64), opts.tick_size);
    let y_caption_x = layout.y_caption_x(widest_tick, opts.caption_size);
    text.draw_vertical(canvas, &chart.y_axis.label, y_caption_x, center_y, opts.caption_size, theme.axis_label);
}

fn draw_series(canvas: &skia::Canvas, layout: &PlotLayout, series: &Series, opts: &RenderOptions) {
    let p = &layout.plot;
    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_ltrb(p.left as f32, p.top as f32, p.right as f32, p.bottom as f32),
        skia::ClipOp::Intersect,
        true,
    );

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(opts.line_width);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_color(opts.theme.line_stroke);

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    marker.set_color(opts.theme.marker);

    for segment in series.segments() {
        let pts: Vec<(f32, f32)> = segment
            .iter()
            .filter_map(|&(i, _)| layout.points.get(i).copied().flatten())
            .collect();
        for pair in pts.windows(2) {
            canvas.draw_line(pair[0], pair[1], &stroke);
        }
        for &pt in &pts {
            canvas.draw_circle(pt, opts.marker_radius, &marker);
        }
    }

    canvas.restore();
}

fn draw_annotations(canvas: &skia::Canvas, text: &TextPainter, layout: &PlotLayout, opts: &RenderOptions) {
    for a in &layout.annotations {
        text.draw(canvas, &a.text, a.x, a.baseline, opts.annotation_size, opts.theme.annotation, Align::Center);
    }
}
