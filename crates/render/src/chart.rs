//! Inline SVG charts drawn with plotters: categorical bar chart and histogram.
//!
//! Charts are static markup with the mesh disabled, so only the axes and
//! their ticks are drawn. plotters snaps every shape to integer pixels, so
//! the same input always yields the same bytes.

use nobel_dash_core::Histogram;
use plotters::coord::Shift;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::RenderError;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 480;
const FONT: &str = "sans-serif";
const HISTOGRAM_FILL: RGBColor = RGBColor(0x63, 0x6e, 0xfa);

/// Qualitative palette, one colour per bar, cycled when bars outnumber colours.
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(0x63, 0x6e, 0xfa),
    RGBColor(0xef, 0x55, 0x3b),
    RGBColor(0x00, 0xcc, 0x96),
    RGBColor(0xab, 0x63, 0xfa),
    RGBColor(0xff, 0xa1, 0x5a),
    RGBColor(0x19, 0xd3, 0xf3),
    RGBColor(0xff, 0x66, 0x92),
    RGBColor(0xb6, 0xe8, 0x80),
    RGBColor(0xff, 0x97, 0xff),
    RGBColor(0xfe, 0xcb, 0x52),
];

/// One bar of a categorical chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
}

/// Axis titles for a chart.
#[derive(Debug, Clone, Copy)]
pub struct AxisLabels<'a> {
    pub x: &'a str,
    pub y: &'a str,
}

/// Rounds a raw tick interval up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Integral values print without decimals, others with one.
fn fmt_num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 { format!("{v:.0}") } else { format!("{v:.1}") }
}

/// Top of the count axis: `max` rounded up to a whole tick step, at least 1.
fn count_top(max: usize) -> u32 {
    #[allow(clippy::cast_precision_loss, reason = "counts are small")]
    let max = max as f64;
    let step = nice_step(max / 5.0).max(1.0);
    let top = ((max / step).ceil() * step).max(step);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "top is positive and integral")]
    let top = top.min(f64::from(u32::MAX)) as u32;
    top
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn placeholder(root: &DrawingArea<SVGBackend<'_>, Shift>, title: &str) -> Result<(), RenderError> {
    let area = root.titled(title, (FONT, 20))?;
    let (w, h) = area.dim_in_pixel();
    let style = TextStyle::from((FONT, 16).into_font()).pos(Pos::new(HPos::Center, VPos::Center));
    #[allow(clippy::cast_possible_wrap, reason = "chart dimensions are small")]
    let centre = ((w / 2) as i32, (h / 2) as i32);
    area.draw(&Text::new("No data", centre, style))?;
    Ok(())
}

/// Categorical bar chart, bars in the given order, one palette colour each.
pub fn bar_chart(title: &str, bars: &[Bar], labels: AxisLabels<'_>) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        match bars.iter().map(|b| b.value).max() {
            None => placeholder(&root, title)?,
            Some(max) => {
                let slots = to_u32(bars.len());
                let mut chart = ChartBuilder::on(&root)
                    .caption(title, (FONT, 20))
                    .margin(16)
                    .x_label_area_size(48)
                    .y_label_area_size(64)
                    .build_cartesian_2d((0..slots).into_segmented(), 0..count_top(max))?;

                let label_of = |v: &SegmentValue<u32>| match v {
                    SegmentValue::CenterOf(i) => {
                        bars.get(*i as usize).map(|b| b.label.clone()).unwrap_or_default()
                    },
                    _ => String::new(),
                };
                chart
                    .configure_mesh()
                    .disable_mesh()
                    .x_labels(bars.len() + 1)
                    .x_label_formatter(&label_of)
                    .label_style((FONT, 12))
                    .axis_desc_style((FONT, 14))
                    .x_desc(labels.x)
                    .y_desc(labels.y)
                    .draw()?;

                chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
                    let slot = to_u32(i);
                    let mut rect = Rectangle::new(
                        [(SegmentValue::Exact(slot), 0), (SegmentValue::Exact(slot + 1), to_u32(bar.value))],
                        PALETTE[i % PALETTE.len()].filled(),
                    );
                    rect.set_margin(0, 0, 6, 6);
                    rect
                }))?;
            },
        }
        root.present()?;
    }
    Ok(svg)
}

/// Histogram with contiguous bars on a white background. Empty bins draw nothing.
pub fn histogram_chart(
    title: &str,
    histogram: &Histogram,
    labels: AxisLabels<'_>,
) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        match (histogram.bins.first(), histogram.bins.last()) {
            (Some(first), Some(last)) => {
                let mut chart = ChartBuilder::on(&root)
                    .caption(title, (FONT, 20))
                    .margin(16)
                    .x_label_area_size(48)
                    .y_label_area_size(64)
                    .build_cartesian_2d(first.start..last.end, 0..count_top(histogram.max_count()))?;

                chart
                    .configure_mesh()
                    .disable_mesh()
                    .x_labels(10)
                    .x_label_formatter(&|v: &f64| fmt_num(*v))
                    .label_style((FONT, 12))
                    .axis_desc_style((FONT, 14))
                    .x_desc(labels.x)
                    .y_desc(labels.y)
                    .draw()?;

                chart.draw_series(histogram.bins.iter().filter(|b| b.count > 0).map(|bin| {
                    Rectangle::new([(bin.start, 0), (bin.end, to_u32(bin.count))], HISTOGRAM_FILL.filled())
                }))?;
            },
            _ => placeholder(&root, title)?,
        }
        root.present()?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: AxisLabels<'static> = AxisLabels { x: "category", y: "count" };

    fn fill_count(svg: &str, colour: RGBColor) -> usize {
        let hex = format!("fill=\"#{:02x}{:02x}{:02x}\"", colour.0, colour.1, colour.2);
        svg.to_lowercase().matches(&hex).count()
    }

    #[test]
    fn nice_step_rounds_up() {
        assert!((nice_step(0.3) - 0.5).abs() < 1e-12);
        assert!((nice_step(7.0) - 10.0).abs() < 1e-12);
        assert!((nice_step(44.4) - 50.0).abs() < 1e-12);
        assert!((nice_step(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn count_top_covers_max() {
        assert_eq!(count_top(222), 250);
        assert_eq!(count_top(1), 1);
        assert_eq!(count_top(0), 1);
    }

    #[test]
    fn bar_chart_one_colour_per_bar() {
        let bars = vec![
            Bar { label: "Medicine".to_owned(), value: 227 },
            Bar { label: "Physics".to_owned(), value: 222 },
            Bar { label: "Chemistry".to_owned(), value: 194 },
        ];
        let svg = bar_chart("Nobel Prizes Awarded by Category", &bars, LABELS).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        for colour in &PALETTE[..3] {
            assert_eq!(fill_count(&svg, *colour), 1, "{colour:?}");
        }
        assert_eq!(fill_count(&svg, PALETTE[3]), 0);
        assert!(svg.find(">Medicine<").unwrap() < svg.find(">Physics<").unwrap());
        assert!(svg.find(">Physics<").unwrap() < svg.find(">Chemistry<").unwrap());
        assert!(svg.contains("Nobel Prizes Awarded by Category"));
    }

    #[test]
    fn palette_cycles_past_ten_bars() {
        let bars: Vec<Bar> =
            (0..12).map(|i| Bar { label: format!("c{i}"), value: i + 1 }).collect();
        let svg = bar_chart("t", &bars, LABELS).unwrap();
        assert_eq!(fill_count(&svg, PALETTE[0]), 2);
        assert_eq!(fill_count(&svg, PALETTE[1]), 2);
        assert_eq!(fill_count(&svg, PALETTE[2]), 1);
    }

    #[test]
    fn charts_are_deterministic() {
        let bars = vec![Bar { label: "Peace".to_owned(), value: 10 }];
        assert_eq!(bar_chart("t", &bars, LABELS).unwrap(), bar_chart("t", &bars, LABELS).unwrap());

        let hist = Histogram::build(&[20, 35, 80], 150);
        let labels = AxisLabels { x: "Age", y: "Frequency" };
        assert_eq!(
            histogram_chart("ages", &hist, labels).unwrap(),
            histogram_chart("ages", &hist, labels).unwrap()
        );
    }

    #[test]
    fn empty_inputs_render_placeholder() {
        let bars = bar_chart("t", &[], LABELS).unwrap();
        assert!(bars.contains("No data"));
        assert_eq!(fill_count(&bars, PALETTE[0]), 0);

        let hist = histogram_chart("t", &Histogram::default(), LABELS).unwrap();
        assert!(hist.contains("No data"));
    }

    #[test]
    fn histogram_skips_empty_bins() {
        let hist = Histogram::build(&[20, 20, 80], 150);
        let svg = histogram_chart("ages", &hist, AxisLabels { x: "Age", y: "Frequency" }).unwrap();
        assert_eq!(fill_count(&svg, HISTOGRAM_FILL), 2);
        assert!(svg.contains(">Age<"));
        assert!(svg.contains(">Frequency<"));
    }

    #[test]
    fn titles_are_escaped() {
        let svg = bar_chart("A <b> & C", &[Bar { label: "x".to_owned(), value: 1 }], LABELS).unwrap();
        assert!(!svg.contains("<b>"));
        assert!(svg.contains("&amp;"));
    }
}
