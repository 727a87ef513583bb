use thiserror::Error;

use super::model::{CellValue, TableData};

// ---------------------------------------------------------------------------
// Dashboard modules
// ---------------------------------------------------------------------------

/// One dashboard view, selected from the sidebar dropdown. Each module
/// imposes its own column contract on the uploaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Module {
    ProductionForecast,
    ShortageForecast,
    DemandOptimization,
    EnergyMix,
}

impl Module {
    pub const ALL: [Module; 4] = [
        Module::ProductionForecast,
        Module::ShortageForecast,
        Module::DemandOptimization,
        Module::EnergyMix,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Module::ProductionForecast => "Electricity Production Forecasting",
            Module::ShortageForecast => "Electricity Shortage Forecasting",
            Module::DemandOptimization => "Demand Optimization Model",
            Module::EnergyMix => "Energy Mix & Policy Impact Analysis",
        }
    }

    pub fn upload_prompt(&self) -> &'static str {
        match self {
            Module::ProductionForecast => "Upload generation file (csv/xlsx)",
            Module::ShortageForecast => "Upload shortage / supply-demand file (csv/xlsx)",
            Module::DemandOptimization => "Upload optimized allocation or consumption file (csv/xlsx)",
            Module::EnergyMix => "Upload energy mix file (csv/xlsx)",
        }
    }

    /// Human-readable column hint shown in the sidebar.
    pub fn column_hint(&self) -> &'static str {
        match self {
            Module::ProductionForecast => "Needs: Year, Total Generation",
            Module::ShortageForecast => {
                "Needs: Year + Shortage, or Total_Generation + Total_Demand"
            }
            Module::DemandOptimization => {
                "Needs: Year, Residential / Industrial / Agricultural Consumption"
            }
            Module::EnergyMix => "Needs: Year, Hydel, Thermal, Nuclear, Solar, Wind",
        }
    }
}

// ---------------------------------------------------------------------------
// Schema errors – the missing-column warnings
// ---------------------------------------------------------------------------

/// A non-fatal column-contract violation. Rendered as a warning in place of
/// the chart; the preview table still shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("File must include columns: {}", .required.join(", "))]
    RequiredColumns { required: Vec<String> },

    #[error("File must contain Year + (Shortage) OR (Total_Generation and Total_Demand).")]
    ShortageColumns,

    #[error("File must contain columns: {required:?}. Detected columns: {detected:?}")]
    SectorColumns {
        required: Vec<String>,
        detected: Vec<String>,
    },

    #[error("Missing columns: {missing:?}")]
    MixColumns { missing: Vec<String> },
}

// ---------------------------------------------------------------------------
// Chart plans – what the charting layer renders
// ---------------------------------------------------------------------------

/// One named data series of `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// A declarative chart description, decoupled from the plot widget.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    /// One or more line series over Year.
    Line {
        title: String,
        markers: bool,
        series: Vec<Series>,
    },
    /// A single bar series, bars colored by their value.
    Bar { title: String, name: String, points: Vec<[f64; 2]> },
    /// Stacked area chart, one series per energy source.
    StackedArea { title: String, series: Vec<Series> },
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Line { title, .. }
            | ChartSpec::Bar { title, .. }
            | ChartSpec::StackedArea { title, .. } => title,
        }
    }
}

/// The result of planning a chart for a conforming upload. Only the
/// shortage fallback carries a derived table (shown as a tail preview).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub spec: ChartSpec,
    pub derived_tail: Option<TableData>,
}

impl ChartPlan {
    fn bare(spec: ChartSpec) -> Self {
        ChartPlan {
            spec,
            derived_tail: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Planning – table in, chart spec out
// ---------------------------------------------------------------------------

/// Validate the module's column contract and build the chart plan.
pub fn plan(module: Module, table: &TableData) -> Result<ChartPlan, SchemaError> {
    match module {
        Module::ProductionForecast => plan_production(table),
        Module::ShortageForecast => plan_shortage(table),
        Module::DemandOptimization => plan_sectors(table),
        Module::EnergyMix => plan_energy_mix(table),
    }
}

fn plan_production(table: &TableData) -> Result<ChartPlan, SchemaError> {
    let (Some(year), Some(gen)) = (
        table.column_index("Year"),
        table.column_index("Total Generation"),
    ) else {
        return Err(SchemaError::RequiredColumns {
            required: vec!["Year".into(), "Total Generation".into()],
        });
    };

    Ok(ChartPlan::bare(ChartSpec::Line {
        title: "Total Generation".into(),
        markers: true,
        series: vec![Series {
            name: "Total Generation".into(),
            points: table.points(year, gen),
        }],
    }))
}

fn plan_shortage(table: &TableData) -> Result<ChartPlan, SchemaError> {
    let Some(year) = table.column_index("Year") else {
        return Err(SchemaError::ShortageColumns);
    };

    // Preferred shape: an explicit shortage column.
    let shortage_col = ["Shortage", "Electricity Shortage"]
        .iter()
        .find_map(|name| table.column_index(name).map(|idx| (*name, idx)));
    if let Some((name, idx)) = shortage_col {
        return Ok(ChartPlan::bare(ChartSpec::Bar {
            title: "Shortage over Years".into(),
            name: name.into(),
            points: table.points(year, idx),
        }));
    }

    // Fallback: derive Shortage = Total_Demand - Total_Generation.
    let (Some(gen), Some(demand)) = (
        table.column_index("Total_Generation"),
        table.column_index("Total_Demand"),
    ) else {
        return Err(SchemaError::ShortageColumns);
    };

    let spec = ChartSpec::Line {
        title: "Supply vs Demand".into(),
        markers: false,
        series: vec![
            Series {
                name: "Total_Generation".into(),
                points: table.points(year, gen),
            },
            Series {
                name: "Total_Demand".into(),
                points: table.points(year, demand),
            },
        ],
    };

    let derived_rows: Vec<Vec<CellValue>> = table
        .rows
        .iter()
        .map(|row| {
            let shortage = match (row[demand].as_f64(), row[gen].as_f64()) {
                (Some(d), Some(g)) => CellValue::Float(d - g),
                _ => CellValue::Null,
            };
            vec![
                row[year].clone(),
                row[gen].clone(),
                row[demand].clone(),
                shortage,
            ]
        })
        .collect();
    let derived = TableData::new(
        vec![
            "Year".into(),
            "Total_Generation".into(),
            "Total_Demand".into(),
            "Shortage".into(),
        ],
        derived_rows,
    );

    Ok(ChartPlan {
        spec,
        derived_tail: Some(derived),
    })
}

fn plan_sectors(table: &TableData) -> Result<ChartPlan, SchemaError> {
    let required = [
        "Year",
        "Residential Consumption",
        "Industrial Consumption",
        "Agricultural Consumption",
    ];

    if !required.iter().all(|col| table.has_column(col)) {
        return Err(SchemaError::SectorColumns {
            required: required.iter().map(|s| s.to_string()).collect(),
            detected: table.columns.clone(),
        });
    }

    let year = table.column_index("Year").unwrap_or(0);
    let series = required[1..]
        .iter()
        .map(|col| Series {
            name: col.to_string(),
            points: table.points(year, table.column_index(col).unwrap_or(0)),
        })
        .collect();

    Ok(ChartPlan::bare(ChartSpec::Line {
        title: "Sector Allocations".into(),
        markers: true,
        series,
    }))
}

/// Unpivot the wide energy-mix table into one series per source.
fn plan_energy_mix(table: &TableData) -> Result<ChartPlan, SchemaError> {
    let expected = ["Year", "Hydel", "Thermal", "Nuclear", "Solar", "Wind"];
    let missing: Vec<String> = expected
        .iter()
        .filter(|col| !table.has_column(col))
        .map(|s| s.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MixColumns { missing });
    }

    let year = table.column_index("Year").unwrap_or(0);
    let series = expected[1..]
        .iter()
        .map(|source| Series {
            name: source.to_string(),
            points: table.points(year, table.column_index(source).unwrap_or(0)),
        })
        .collect();

    Ok(ChartPlan::bare(ChartSpec::StackedArea {
        title: "Energy Mix".into(),
        series,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: Vec<Vec<CellValue>>) -> TableData {
        TableData::new(columns.iter().map(|c| c.to_string()).collect(), rows)
    }

    fn year_row(year: i64, values: &[f64]) -> Vec<CellValue> {
        let mut row = vec![CellValue::Integer(year)];
        row.extend(values.iter().map(|v| CellValue::Float(*v)));
        row
    }

    #[test]
    fn conforming_generation_table_plans_a_line_chart() {
        let t = table(
            &["Year", "Total Generation"],
            vec![year_row(2020, &[120.0]), year_row(2021, &[131.5])],
        );
        let plan = plan(Module::ProductionForecast, &t).unwrap();
        match plan.spec {
            ChartSpec::Line { markers, series, .. } => {
                assert!(markers);
                assert_eq!(series.len(), 1);
                assert_eq!(series[0].points, vec![[2020.0, 120.0], [2021.0, 131.5]]);
            }
            other => panic!("expected line chart, got {other:?}"),
        }
    }

    #[test]
    fn missing_generation_column_warns() {
        let t = table(&["Year", "Output"], vec![year_row(2020, &[1.0])]);
        let err = plan(Module::ProductionForecast, &t).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File must include columns: Year, Total Generation"
        );
    }

    #[test]
    fn explicit_shortage_column_plans_a_bar_chart() {
        let t = table(
            &["Year", "Electricity Shortage"],
            vec![year_row(2020, &[4.5]), year_row(2021, &[6.0])],
        );
        let plan = plan(Module::ShortageForecast, &t).unwrap();
        match plan.spec {
            ChartSpec::Bar { name, points, .. } => {
                assert_eq!(name, "Electricity Shortage");
                assert_eq!(points.len(), 2);
            }
            other => panic!("expected bar chart, got {other:?}"),
        }
        assert!(plan.derived_tail.is_none());
    }

    #[test]
    fn shortage_fallback_derives_demand_minus_generation() {
        let t = table(
            &["Year", "Total_Generation", "Total_Demand"],
            vec![year_row(2020, &[100.0, 112.0]), year_row(2021, &[105.0, 118.5])],
        );
        let plan = plan(Module::ShortageForecast, &t).unwrap();
        assert!(matches!(plan.spec, ChartSpec::Line { ref series, .. } if series.len() == 2));
        // Plans (including the derived table) are directly comparable.
        assert_eq!(plan, super::plan(Module::ShortageForecast, &t).unwrap());

        let derived = plan.derived_tail.unwrap();
        assert_eq!(
            derived.columns,
            vec!["Year", "Total_Generation", "Total_Demand", "Shortage"]
        );
        assert_eq!(derived.rows[0][3], CellValue::Float(12.0));
        assert_eq!(derived.rows[1][3], CellValue::Float(13.5));
    }

    #[test]
    fn shortage_without_any_usable_columns_warns() {
        let t = table(&["Year", "Total_Generation"], vec![year_row(2020, &[100.0])]);
        let err = plan(Module::ShortageForecast, &t).unwrap_err();
        assert_eq!(err, SchemaError::ShortageColumns);
    }

    #[test]
    fn sector_warning_lists_detected_columns() {
        let t = table(&["Year", "Residential Consumption"], vec![]);
        let err = plan(Module::DemandOptimization, &t).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Agricultural Consumption"));
        assert!(msg.contains("Detected columns"));
    }

    #[test]
    fn sector_table_plans_three_series() {
        let t = table(
            &[
                "Year",
                "Residential Consumption",
                "Industrial Consumption",
                "Agricultural Consumption",
            ],
            vec![year_row(2020, &[40.0, 35.0, 12.0])],
        );
        let plan = plan(Module::DemandOptimization, &t).unwrap();
        match plan.spec {
            ChartSpec::Line { series, .. } => {
                let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
                assert_eq!(
                    names,
                    vec![
                        "Residential Consumption",
                        "Industrial Consumption",
                        "Agricultural Consumption"
                    ]
                );
            }
            other => panic!("expected line chart, got {other:?}"),
        }
    }

    #[test]
    fn energy_mix_unpivots_one_series_per_source() {
        let t = table(
            &["Year", "Hydel", "Thermal", "Nuclear", "Solar", "Wind"],
            vec![
                year_row(2020, &[32.0, 58.0, 7.0, 1.5, 2.5]),
                year_row(2021, &[33.0, 55.0, 8.0, 2.0, 3.0]),
            ],
        );
        let plan = plan(Module::EnergyMix, &t).unwrap();
        match plan.spec {
            ChartSpec::StackedArea { series, .. } => {
                assert_eq!(series.len(), 5);
                assert_eq!(series[0].name, "Hydel");
                assert_eq!(series[0].points, vec![[2020.0, 32.0], [2021.0, 33.0]]);
            }
            other => panic!("expected stacked area, got {other:?}"),
        }
    }

    #[test]
    fn energy_mix_warning_lists_exactly_the_missing_columns() {
        let t = table(&["Year", "Hydel", "Thermal"], vec![]);
        let err = plan(Module::EnergyMix, &t).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MixColumns {
                missing: vec!["Nuclear".into(), "Solar".into(), "Wind".into()]
            }
        );
    }
}
