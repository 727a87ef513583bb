use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::CellValue;

// ---------------------------------------------------------------------------
// Data preview table
// ---------------------------------------------------------------------------

/// Render a slice of table rows as a striped grid. Callers pass `head(5)`
/// for the upload preview or `tail(5)` for derived data.
pub fn preview(ui: &mut Ui, id: &str, columns: &[String], rows: &[Vec<CellValue>]) {
    if columns.is_empty() {
        return;
    }

    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(90.0).resizable(true), columns.len())
            .header(22.0, |mut header| {
                for col in columns {
                    header.col(|ui| {
                        ui.strong(col);
                    });
                }
            })
            .body(|mut body| {
                for row in rows {
                    body.row(18.0, |mut table_row| {
                        for cell in row {
                            table_row.col(|ui| {
                                ui.label(cell.to_string());
                            });
                        }
                    });
                }
            });
    });
}
