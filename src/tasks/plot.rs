use crate::tasks::{
    aggregate::{self, SummaryTable},
    color::{FONT_SIZE, STROKE_WIDTH},
    load::{ClientLatencyRow, SeriesRow},
    metric::Metric,
    scenario::Scenario,
};
use anyhow::Result;
use log::{debug, info};
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};
use std::{collections::BTreeMap, path::Path};

const CHART_SIZE: (u32, u32) = (1280, 800);
const FACET_SIZE: (u32, u32) = (1500, 1000);
const FACET_COLUMNS: usize = 3;
const DASH_PX: i32 = 10;
const GAP_PX: i32 = 6;

const MEAN_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const MEDIAN_COLOR: RGBColor = RGBColor(0xff, 0x7f, 0x0e);

fn font(size: i32) -> FontDesc<'static> {
    ("sans-serif", size).into_font()
}

fn centered_label(size: i32) -> TextStyle<'static> {
    TextStyle::from(font(size)).pos(Pos::new(HPos::Center, VPos::Bottom))
}

fn scenario_style(scenario: &str) -> Result<ShapeStyle> {
    Ok(Scenario::color_for(scenario)?
        .mix(Scenario::opacity_for(scenario))
        .stroke_width(STROKE_WIDTH))
}

/// Range of the strictly positive values, padded for a log axis. `None` if
/// nothing is drawable on a log scale.
fn log_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values
        .filter(|v| *v > 0.0 && v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return None;
    }
    Some((lo / 2.0, (hi * 3.0).min(f64::MAX)))
}

/// Range of the finite values for a linear axis anchored at zero, padded
/// above the largest magnitude. `None` if no value is finite.
fn linear_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return None;
    }

    let y_max = if hi > 0.0 { (hi * 1.2).min(f64::MAX) } else { 1.0 };
    let y_min = if lo < 0.0 { (lo * 1.2).max(f64::MIN) } else { 0.0 };
    Some((y_min, y_max))
}

/// Scenario names present in `rows`, in display order.
fn ordered_scenarios<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut scenarios: Vec<String> = names.map(|n| n.to_string()).collect();
    scenarios.sort();
    scenarios.dedup();
    Scenario::sort_names(&mut scenarios);
    scenarios
}

/// Split a pixel polyline into dash segments.
pub fn dashed_segments(points: &[(i32, i32)], dash: i32, gap: i32) -> Vec<[(i32, i32); 2]> {
    let mut segments = Vec::new();
    let step = (dash + gap).max(1) as f64;

    for pair in points.windows(2) {
        let (x0, y0) = (pair[0].0 as f64, pair[0].1 as f64);
        let (dx, dy) = (pair[1].0 as f64 - x0, pair[1].1 as f64 - y0);
        let length = (dx * dx + dy * dy).sqrt();
        if length == 0.0 {
            continue;
        }

        let mut t = 0.0;
        while t < length {
            let end = (t + dash as f64).min(length);
            let at = |d: f64| {
                (
                    (x0 + dx * d / length).round() as i32,
                    (y0 + dy * d / length).round() as i32,
                )
            };
            segments.push([at(t), at(end)]);
            t += step;
        }
    }

    segments
}

fn draw_dashed(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    points: &[(i32, i32)],
    style: ShapeStyle,
) -> Result<()> {
    for segment in dashed_segments(points, DASH_PX, GAP_PX) {
        area.draw(&PathElement::new(segment.to_vec(), style))?;
    }
    Ok(())
}

fn facet_grid(n: usize) -> (usize, usize) {
    let cols = n.clamp(1, FACET_COLUMNS);
    let rows = n.div_ceil(cols).max(1);
    (rows, cols)
}

/// Log-scale time series of one metric, one line per scenario. The x axis
/// is the time since each scenario's first sample.
pub fn plot_timeseries(rows: &[SeriesRow], metric: &Metric, out_path: &Path) -> Result<()> {
    let title = metric.timeseries_title();
    if rows.is_empty() {
        info!("Skip {title}: empty data");
        return Ok(());
    }

    let mut grouped = BTreeMap::<&str, Vec<(f64, f64)>>::new();
    for row in rows {
        grouped
            .entry(row.scenario.as_str())
            .or_default()
            .push((row.timestamp, row.value));
    }
    let scenarios = ordered_scenarios(grouped.keys().copied());

    let mut lines = BTreeMap::<&str, Vec<(f64, f64)>>::new();
    for (scenario, points) in &grouped {
        let t0 = points
            .iter()
            .map(|(t, _)| *t)
            .filter(|t| t.is_finite())
            .fold(f64::INFINITY, f64::min);
        lines.insert(
            *scenario,
            points
                .iter()
                .filter(|(t, v)| t.is_finite() && v.is_finite() && *v > 0.0)
                .map(|(t, v)| (t - t0, *v))
                .collect(),
        );
    }

    let Some((y_min, y_max)) = log_range(lines.values().flatten().map(|(_, v)| *v)) else {
        info!("Skip {title}: no positive values");
        return Ok(());
    };
    let x_max = lines
        .values()
        .flatten()
        .map(|(t, _)| *t)
        .fold(0.0, f64::max)
        .clamp(1.0, f64::MAX);

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{title} (log scale)"), font(FONT_SIZE + 6))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..x_max, (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .light_line_style(WHITE)
        .x_desc("Time (s since start of scenario)")
        .y_desc(format!("{} (log scale)", metric.unit()))
        .label_style(font(FONT_SIZE))
        .axis_desc_style(font(FONT_SIZE))
        .draw()?;

    for scenario in &scenarios {
        let points = &lines[scenario.as_str()];
        if points.is_empty() {
            continue;
        }
        let style = scenario_style(scenario)?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), style))?
            .label(scenario.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        chart.draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, 3, style.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(font(FONT_SIZE))
        .draw()?;

    root.present()?;
    info!("Wrote {}", out_path.display());

    Ok(())
}

/// Log-scale bar chart of the misuse window of every scenario, with a
/// dashed reference line at the control's window.
pub fn plot_misuse_windows(windows: &BTreeMap<String, f64>, out_path: &Path) -> Result<()> {
    let title = "Misuse window per scenario";
    if windows.is_empty() {
        info!("Skip {title}: empty data");
        return Ok(());
    }

    let scenarios = ordered_scenarios(windows.keys().map(|k| k.as_str()));
    let Some((y_min, y_max)) = log_range(windows.values().copied()) else {
        info!("Skip {title}: no positive values");
        return Ok(());
    };

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_end = (scenarios.len() as u32).saturating_sub(1).max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Misuse window (seconds, log scale) per scenario (time until 401 for stolen token)",
            font(FONT_SIZE + 4),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d((0u32..x_end).into_segmented(), (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE)
        .x_desc("Scenario")
        .y_desc("Misuse window (seconds, log scale)")
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => scenarios.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .label_style(font(FONT_SIZE))
        .axis_desc_style(font(FONT_SIZE))
        .draw()?;

    let mut bars = Vec::with_capacity(scenarios.len());
    for (i, scenario) in scenarios.iter().enumerate() {
        let height = windows[scenario].max(y_min);
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i as u32), y_min),
                (SegmentValue::Exact(i as u32 + 1), height),
            ],
            Scenario::color_for(scenario)?
                .mix(Scenario::opacity_for(scenario))
                .filled(),
        );
        bar.set_margin(0, 0, 15, 15);
        bars.push(bar);
    }
    chart.draw_series(bars)?;

    chart.draw_series(scenarios.iter().enumerate().map(|(i, scenario)| {
        let value = windows[scenario];
        Text::new(
            format!("{value:.0}"),
            (SegmentValue::CenterOf(i as u32), value.max(y_min) * 1.05),
            centered_label(FONT_SIZE - 2),
        )
    }))?;

    if let Some(control) = windows.get(Scenario::CONTROL_NAME) {
        let reference_style = Scenario::color_for(Scenario::CONTROL_NAME)?
            .mix(0.7)
            .stroke_width(STROKE_WIDTH);
        let (x_px, _) = chart.plotting_area().get_pixel_range();
        let (_, y_px) = chart
            .plotting_area()
            .map_coordinate(&(SegmentValue::Exact(0), control.max(y_min)));
        draw_dashed(&root, &[(x_px.start, y_px), (x_px.end, y_px)], reference_style)?;

        // Legend for the reference line, top-right of the plotting area
        let legend_x = x_px.end - 220;
        let legend_y = chart.plotting_area().get_pixel_range().1.start + 15;
        draw_dashed(
            &root,
            &[(legend_x, legend_y), (legend_x + 40, legend_y)],
            reference_style,
        )?;
        root.draw(&Text::new(
            "Control Reference",
            (legend_x + 50, legend_y - FONT_SIZE / 2),
            font(FONT_SIZE),
        ))?;
    }

    root.present()?;
    info!("Wrote {}", out_path.display());

    Ok(())
}

/// Bar chart of the total client refresh cost per scenario, relative to the
/// most expensive scenario.
pub fn plot_client_latency_summary(rows: &[ClientLatencyRow], out_path: &Path) -> Result<()> {
    let title = "Total Client Refresh Cost (% of Max)";
    if rows.is_empty() {
        info!("Skip {title}: empty data");
        return Ok(());
    }

    let costs = aggregate::client_cost_percentages(rows);
    let labels: Vec<String> = costs.iter().map(|(s, _)| s.to_string()).collect();
    let y_max = costs
        .iter()
        .filter_map(|(_, pct)| *pct)
        .filter(|pct| pct.is_finite())
        .fold(0.0, f64::max)
        .max(1.0)
        * 1.15;

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_end = (costs.len() as u32).saturating_sub(1).max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, font(FONT_SIZE + 6))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d((0u32..x_end).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE)
        .x_desc("Scenario")
        .y_desc("Total Refresh Cost (% of Max)")
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .label_style(font(FONT_SIZE))
        .axis_desc_style(font(FONT_SIZE))
        .draw()?;

    let mut bars = Vec::new();
    let mut annotations = Vec::new();
    for (i, (scenario, pct)) in costs.iter().enumerate() {
        let Some(pct) = pct.filter(|p| p.is_finite()) else {
            continue;
        };
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i as u32), 0.0),
                (SegmentValue::Exact(i as u32 + 1), pct),
            ],
            scenario.get_color()?.mix(0.8).filled(),
        );
        bar.set_margin(0, 0, 15, 15);
        bars.push(bar);
        annotations.push(Text::new(
            format!("{pct:.1}%"),
            (SegmentValue::CenterOf(i as u32), pct + y_max * 0.01),
            centered_label(FONT_SIZE - 2),
        ));
    }
    chart.draw_series(bars)?;
    chart.draw_series(annotations)?;

    root.present()?;
    info!("Wrote {}", out_path.display());

    Ok(())
}

fn latencies_by_scenario(rows: &[ClientLatencyRow]) -> Vec<(String, Vec<f64>)> {
    let scenarios = ordered_scenarios(rows.iter().map(|r| r.scenario.as_str()));
    scenarios
        .into_iter()
        .map(|scenario| {
            let values = rows
                .iter()
                .filter(|r| r.scenario == scenario)
                .map(|r| r.latency_ms)
                .collect();
            (scenario, values)
        })
        .collect()
}

/// Moving average of the client refresh latency over the event index, one
/// log-scale panel per scenario.
pub fn plot_client_latency_moving_avg(
    rows: &[ClientLatencyRow],
    window: usize,
    out_path: &Path,
) -> Result<()> {
    let title = format!("Client Refresh Latency (Moving Avg, window={window}, log scale) by Scenario");
    if rows.is_empty() {
        info!("Skip {title}: empty data");
        return Ok(());
    }

    let facets = latencies_by_scenario(rows);
    let root = BitMapBackend::new(out_path, FACET_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&title, font(FONT_SIZE + 4))?;
    let panels = root.split_evenly(facet_grid(facets.len()));

    for ((scenario, values), panel) in facets.iter().zip(panels.iter()) {
        let averages = aggregate::moving_average(values, window);
        let points: Vec<(f64, f64)> = averages
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .filter(|(_, v)| *v > 0.0 && v.is_finite())
            .collect();
        let Some((y_min, y_max)) = log_range(points.iter().map(|(_, v)| *v)) else {
            debug!("no positive latencies to plot (scenario={scenario})");
            continue;
        };
        let x_max = (averages.len().saturating_sub(1) as f64).max(1.0);
        let style = scenario_style(scenario)?;

        let mut chart = ChartBuilder::on(panel)
            .caption(scenario, font(FONT_SIZE))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(0f64..x_max, (y_min..y_max).log_scale())?;

        chart
            .configure_mesh()
            .light_line_style(WHITE)
            .x_desc("Event Index")
            .y_desc("Latency (ms, log scale)")
            .label_style(font(FONT_SIZE - 4))
            .axis_desc_style(font(FONT_SIZE - 4))
            .draw()?;

        chart.draw_series(LineSeries::new(points.iter().copied(), style))?;
        if points.len() == 1 {
            chart.draw_series(points.iter().map(|p| Circle::new(*p, 4, style.filled())))?;
        }
    }

    root.present()?;
    info!("Wrote {}", out_path.display());

    Ok(())
}

/// Distribution of the client refresh latency, one log-count histogram per
/// scenario.
pub fn plot_client_latency_histogram(
    rows: &[ClientLatencyRow],
    bins: usize,
    out_path: &Path,
) -> Result<()> {
    let title = "Client Refresh Latency Distribution by Scenario (log scale)";
    if rows.is_empty() {
        info!("Skip {title}: empty data");
        return Ok(());
    }

    let facets = latencies_by_scenario(rows);
    let root = BitMapBackend::new(out_path, FACET_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, font(FONT_SIZE + 4))?;
    let panels = root.split_evenly(facet_grid(facets.len()));

    for ((scenario, values), panel) in facets.iter().zip(panels.iter()) {
        let histogram = aggregate::histogram(values, bins);
        let (Some(first), Some(last)) = (histogram.first(), histogram.last()) else {
            continue;
        };
        let max_count = histogram.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        let style = Scenario::color_for(scenario)?
            .mix(Scenario::opacity_for(scenario))
            .filled();

        // Counts start at 1, so the floor sits just below it on the log axis
        let floor = 0.5;
        let mut chart = ChartBuilder::on(panel)
            .caption(scenario, font(FONT_SIZE))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(
                first.lower..last.upper,
                (floor..max_count as f64 * 2.0).log_scale(),
            )?;

        chart
            .configure_mesh()
            .light_line_style(WHITE)
            .x_desc("Latency (ms)")
            .y_desc("Count (log scale)")
            .label_style(font(FONT_SIZE - 4))
            .axis_desc_style(font(FONT_SIZE - 4))
            .draw()?;

        chart.draw_series(histogram.iter().filter(|b| b.count > 0).map(|b| {
            Rectangle::new([(b.lower, floor), (b.upper, b.count as f64)], style)
        }))?;
    }

    root.present()?;
    info!("Wrote {}", out_path.display());

    Ok(())
}

/// Mean and median of one metric across the ordered scenario axis.
pub fn plot_summary_metric(summary: &SummaryTable, metric: &Metric, out_path: &Path) -> Result<()> {
    let title = metric.summary_title();
    if summary.is_empty() {
        info!("Skip {title}: empty data");
        return Ok(());
    }

    let labels: Vec<String> = summary.rows.iter().map(|r| r.scenario.clone()).collect();
    let mut means = Vec::new();
    let mut medians = Vec::new();
    for (i, row) in summary.rows.iter().enumerate() {
        let (mean, median) = row.metric(metric);
        if let Some(mean) = mean.filter(|v| v.is_finite()) {
            means.push((SegmentValue::CenterOf(i as u32), mean));
        }
        if let Some(median) = median.filter(|v| v.is_finite()) {
            medians.push((SegmentValue::CenterOf(i as u32), median));
        }
    }
    let all_values = means.iter().chain(medians.iter()).map(|(_, v)| *v);
    let Some((y_min, y_max)) = linear_range(all_values) else {
        info!("Skip {title}: no finite values");
        return Ok(());
    };

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_end = (labels.len() as u32).saturating_sub(1).max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, font(FONT_SIZE + 6))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d((0u32..x_end).into_segmented(), y_min..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(WHITE)
        .x_desc("Scenario")
        .y_desc(metric.summary_ylabel())
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .label_style(font(FONT_SIZE))
        .axis_desc_style(font(FONT_SIZE))
        .draw()?;

    let mean_style = MEAN_COLOR.stroke_width(STROKE_WIDTH);
    let median_style = MEDIAN_COLOR.stroke_width(STROKE_WIDTH);

    chart
        .draw_series(LineSeries::new(means.iter().cloned(), mean_style))?
        .label("Mean")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], mean_style));
    chart.draw_series(means.iter().map(|(x, y)| {
        EmptyElement::at((x.clone(), *y))
            + Circle::new((0, 0), 5, mean_style.filled())
            + Text::new(format!("{y:.2}"), (0, -10), centered_label(FONT_SIZE - 4))
    }))?;

    chart
        .draw_series(medians.iter().map(|(x, y)| {
            EmptyElement::at((x.clone(), *y))
                + Rectangle::new([(-5, -5), (5, 5)], median_style.filled())
        }))?
        .label("Median")
        .legend(move |(x, y)| {
            Rectangle::new([(x + 5, y - 5), (x + 15, y + 5)], median_style.filled())
        });
    let median_px: Vec<(i32, i32)> = medians
        .iter()
        .map(|coord| chart.plotting_area().map_coordinate(coord))
        .collect();
    draw_dashed(&root, &median_px, median_style)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(font(FONT_SIZE))
        .draw()?;

    root.present()?;
    info!("Wrote {}", out_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::aggregate::SummaryRow;

    #[test]
    fn test_dashed_segments_cover_a_horizontal_line() {
        let segments = dashed_segments(&[(0, 0), (40, 0)], 10, 6);
        assert_eq!(
            segments,
            vec![[(0, 0), (10, 0)], [(16, 0), (26, 0)], [(32, 0), (40, 0)]]
        );
    }

    #[test]
    fn test_dashed_segments_skip_degenerate_pairs() {
        assert!(dashed_segments(&[(5, 5), (5, 5)], 10, 6).is_empty());
        assert!(dashed_segments(&[(5, 5)], 10, 6).is_empty());
    }

    #[test]
    fn test_log_range_ignores_non_positive_values() {
        assert_eq!(log_range([0.0, -1.0, 2.0, 8.0].into_iter()), Some((1.0, 24.0)));
        assert_eq!(log_range([0.0, -3.0].into_iter()), None);
    }

    #[test]
    fn test_axis_ranges_stay_finite() {
        let (_, hi) = log_range([1.0, f64::MAX / 2.0, f64::INFINITY].into_iter()).unwrap();
        assert_eq!(hi, f64::MAX);

        assert_eq!(
            linear_range([10.0, f64::INFINITY, f64::NAN].into_iter()),
            Some((0.0, 12.0))
        );
        assert_eq!(linear_range([-5.0, 0.0].into_iter()), Some((-6.0, 1.0)));
        assert_eq!(linear_range([f64::INFINITY, f64::NEG_INFINITY].into_iter()), None);

        let (lo, hi) = linear_range([f64::MAX, -f64::MAX].into_iter()).unwrap();
        assert!(lo.is_finite() && hi.is_finite());
    }

    #[test]
    fn test_summary_chart_skips_infinite_values() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let out_path = temp_dir.path().join("summary.png");
        let summary = SummaryTable {
            rows: vec![SummaryRow {
                scenario: "short".to_string(),
                p95_gateway_ms_mean: Some(f64::INFINITY),
                p95_gateway_ms_median: Some(f64::INFINITY),
                ..Default::default()
            }],
        };

        plot_summary_metric(&summary, &Metric::P95Gateway, &out_path)?;
        assert!(!out_path.exists());

        Ok(())
    }

    #[test]
    fn test_facet_grid() {
        assert_eq!(facet_grid(1), (1, 1));
        assert_eq!(facet_grid(3), (1, 3));
        assert_eq!(facet_grid(4), (2, 3));
        assert_eq!(facet_grid(6), (2, 3));
        assert_eq!(facet_grid(0), (1, 1));
    }

    #[test]
    fn test_ordered_scenarios_dedups_in_display_order() {
        let names = ["short", "control", "short", "zzz", "balanced"];
        assert_eq!(
            ordered_scenarios(names.into_iter()),
            vec!["control", "balanced", "short", "zzz"]
        );
    }
}
