//! SVG bar charts.

use std::error::Error as StdError;
use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;

use super::error::Error;
use crate::env::NeighborComposition;

type DrawResult = Result<(), Box<dyn StdError>>;

const GROUP_WIDTH: f64 = 0.8;

/// Renders one bar group per category with one bar per series.
///
/// `series` pairs a label with one count per entry of `categories`.
pub fn render_composition_chart(
    path: &Path,
    title: &str,
    categories: &[String],
    series: &[(String, Vec<usize>)],
) -> Result<(), Error> {
    draw_comparison(path, title, categories, series).map_err(|e| Error::chart(path, e))
}

/// Renders one stacked bar per state with the category ratios of that state.
pub fn render_ratio_chart(
    path: &Path,
    title: &str,
    table: &NeighborComposition,
) -> Result<(), Error> {
    draw_ratios(path, title, table).map_err(|e| Error::chart(path, e))
}

fn draw_comparison(
    path: &Path,
    title: &str,
    categories: &[String],
    series: &[(String, Vec<usize>)],
) -> DrawResult {
    let root = SVGBackend::new(path, (900, 540)).into_drawing_area();
    root.fill(&WHITE)?;

    if categories.is_empty() || series.is_empty() {
        draw_placeholder(&root, (450, 270))?;
        root.present()?;
        return Ok(());
    }

    let max_count = series
        .iter()
        .flat_map(|(_, counts)| counts.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..categories.len() as f64, 0.0..max_count * 1.15)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Residue count")
        .draw()?;

    let bar_width = GROUP_WIDTH / series.len() as f64;
    for (i, (label, counts)) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let left = (1.0 - GROUP_WIDTH) / 2.0 + i as f64 * bar_width;
        chart
            .draw_series(counts.iter().enumerate().map(|(c, &n)| {
                let x0 = c as f64 + left;
                Rectangle::new([(x0, 0.0), (x0 + bar_width, n as f64)], color.filled())
            }))?
            .label(label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    draw_category_labels(&root, &chart, categories)?;

    root.present()?;
    Ok(())
}

fn draw_ratios(path: &Path, title: &str, table: &NeighborComposition) -> DrawResult {
    let root = SVGBackend::new(path, (800, 540)).into_drawing_area();
    root.fill(&WHITE)?;

    if table.is_empty() {
        draw_placeholder(&root, (400, 270))?;
        root.present()?;
        return Ok(());
    }

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..table.states.len() as f64, 0.0..1.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Ratio")
        .draw()?;

    let left = (1.0 - GROUP_WIDTH) / 2.0;
    for (c, category) in table.categories.iter().enumerate() {
        let color = Palette99::pick(c).to_rgba();
        chart
            .draw_series(table.states.iter().enumerate().map(|(s, state)| {
                let base: f64 = state.ratios[..c].iter().sum();
                let x0 = s as f64 + left;
                Rectangle::new(
                    [(x0, base), (x0 + GROUP_WIDTH, base + state.ratios[c])],
                    color.filled(),
                )
            }))?
            .label(category.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    let states: Vec<String> = table.states.iter().map(|s| s.state.clone()).collect();
    draw_category_labels(&root, &chart, &states)?;

    root.present()?;
    Ok(())
}

fn draw_category_labels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    labels: &[String],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let style = ("sans-serif", 14)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, label) in labels.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(i as f64 + 0.5, 0.0));
        root.draw(&Text::new(label.clone(), (x, y + 8), style.clone()))?;
    }
    Ok(())
}

fn draw_placeholder<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    at: (i32, i32),
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.draw(&Text::new(
        "No data to display",
        at,
        ("sans-serif", 20).into_font().color(&BLACK),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StateComposition;
    use std::fs;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("hbscan-chart-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn comparison_chart_writes_svg_with_labels() {
        let path = scratch("comparison.svg");
        let categories = vec!["Positive".to_string(), "Negative".to_string()];
        let series = vec![
            ("WT(ASP312)".to_string(), vec![1, 2]),
            ("Mut(ASN312)".to_string(), vec![2, 0]),
        ];
        render_composition_chart(&path, "Environment", &categories, &series).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Positive"));
        assert!(svg.contains("Mut(ASN312)"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn ratio_chart_handles_empty_table() {
        let path = scratch("empty.svg");
        render_ratio_chart(&path, "Ratios", &NeighborComposition::default()).unwrap();
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("No data to display"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn ratio_chart_writes_state_labels() {
        let path = scratch("ratios.svg");
        let table = NeighborComposition {
            categories: vec!["negative".into(), "polar".into()],
            states: vec![StateComposition {
                state: "WT".into(),
                counts: vec![1, 3],
                ratios: vec![0.25, 0.75],
            }],
        };
        render_ratio_chart(&path, "Ratios", &table).unwrap();
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("WT"));
        assert!(svg.contains("polar"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn unwritable_path_is_a_chart_error() {
        let path = Path::new("/nonexistent-dir/for/chart.svg");
        let categories = vec!["Polar".to_string()];
        let series = vec![("WT".to_string(), vec![1])];
        let err = render_composition_chart(path, "x", &categories, &series).unwrap_err();
        assert!(matches!(err, Error::Chart { .. }));
    }
}
