use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, Points};

use crate::color;
use crate::data::schema::{ChartSpec, Series};

// ---------------------------------------------------------------------------
// Chart rendering (central panel)
// ---------------------------------------------------------------------------

/// Render a planned chart. The spec is declarative; everything visual
/// (colors, stacking, markers) is decided here.
pub fn chart(ui: &mut Ui, spec: &ChartSpec) {
    ui.strong(spec.title());

    let plot = Plot::new(spec.title().to_owned())
        .legend(Legend::default())
        .x_axis_label("Year")
        .height(380.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    match spec {
        ChartSpec::Line { series, markers, .. } => {
            let colors = color::series_palette(series.len());
            plot.show(ui, |plot_ui| {
                for (s, &c) in series.iter().zip(&colors) {
                    plot_ui.line(Line::new(s.points.clone()).name(&s.name).color(c).width(2.0));
                    if *markers {
                        plot_ui.points(
                            Points::new(s.points.clone())
                                .name(&s.name)
                                .color(c)
                                .shape(MarkerShape::Circle)
                                .filled(true)
                                .radius(3.0),
                        );
                    }
                }
            });
        }

        ChartSpec::Bar { name, points, .. } => {
            let (min, max) = value_range(points);
            let bars: Vec<Bar> = points
                .iter()
                .map(|&[x, y]| {
                    let t = if max > min { (y - min) / (max - min) } else { 0.5 };
                    Bar::new(x, y).width(0.6).fill(color::value_gradient(t))
                })
                .collect();
            plot.show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(name));
            });
        }

        ChartSpec::StackedArea { series, .. } => {
            let colors = color::series_palette(series.len());
            let stacked = stack_series(series);
            plot.show(ui, |plot_ui| {
                // Paint the tallest cumulative first so each lower stack
                // overdraws it, leaving one visible band per source.
                for (i, cum) in stacked.iter().enumerate().rev() {
                    plot_ui.line(
                        Line::new(cum.clone())
                            .name(&series[i].name)
                            .color(colors[i])
                            .fill(0.0)
                            .width(1.0),
                    );
                }
            });
        }
    }
}

fn value_range(points: &[[f64; 2]]) -> (f64, f64) {
    points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p[1]), hi.max(p[1]))
    })
}

/// Cumulative y per x across the series, in series order. Sources missing
/// a year simply do not contribute at that x.
fn stack_series(series: &[Series]) -> Vec<Vec<[f64; 2]>> {
    let mut running: std::collections::HashMap<u64, f64> = std::collections::HashMap::new();
    series
        .iter()
        .map(|s| {
            s.points
                .iter()
                .map(|&[x, y]| {
                    let total = running.entry(x.to_bits()).or_insert(0.0);
                    *total += y;
                    [x, *total]
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacking_accumulates_per_year() {
        let series = vec![
            Series {
                name: "Hydel".into(),
                points: vec![[2020.0, 30.0], [2021.0, 32.0]],
            },
            Series {
                name: "Thermal".into(),
                points: vec![[2020.0, 50.0], [2021.0, 48.0]],
            },
        ];
        let stacked = stack_series(&series);
        assert_eq!(stacked[0], vec![[2020.0, 30.0], [2021.0, 32.0]]);
        assert_eq!(stacked[1], vec![[2020.0, 80.0], [2021.0, 80.0]]);
    }

    #[test]
    fn value_range_spans_min_and_max() {
        let (lo, hi) = value_range(&[[0.0, 4.0], [1.0, -2.0], [2.0, 9.0]]);
        assert_eq!((lo, hi), (-2.0, 9.0));
    }
}
