use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::schema::{self, Module};
use crate::state::AppState;
use crate::theme;
use crate::ui::{plot, table};

const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Electricity Dashboard");

        ui.separator();

        if let Some(ds) = state.active_dataset() {
            ui.label(format!("{} rows loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – module selector
// ---------------------------------------------------------------------------

/// Render the sidebar: module dropdown plus the column contract hint.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Select Module");
    ui.separator();

    egui::ComboBox::from_id_salt("module_select")
        .width(ui.available_width())
        .selected_text(state.module.label())
        .show_ui(ui, |ui: &mut Ui| {
            for module in Module::ALL {
                if ui
                    .selectable_label(state.module == module, module.label())
                    .clicked()
                {
                    state.module = module;
                }
            }
        });

    ui.add_space(8.0);
    ui.label(RichText::new(state.module.column_hint()).italics().small());
}

// ---------------------------------------------------------------------------
// Central panel – active module view
// ---------------------------------------------------------------------------

/// Render the main content: title block, upload control, data preview and
/// the module's chart (or a schema warning).
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.heading("Pakistan Electricity Dashboard");
                ui.label("Forecasting • Shortage • Optimization • Energy Mix");
            });
            ui.separator();

            module_view(ui, state);

            ui.separator();
            ui.small("Pakistan Electricity Data Project (Forecasting, Shortage, Optimization, and Policy Analysis)");
        });
}

fn module_view(ui: &mut Ui, state: &mut AppState) {
    ui.strong(state.module.label());
    ui.add_space(4.0);

    if ui.button(state.module.upload_prompt()).clicked() {
        open_file_dialog(state);
    }

    let Some(dataset) = state.active_dataset() else {
        return;
    };

    ui.add_space(8.0);
    table::preview(ui, "head_preview", &dataset.columns, dataset.head(PREVIEW_ROWS));
    ui.add_space(8.0);

    match schema::plan(state.module, dataset) {
        Ok(plan) => {
            plot::chart(ui, &plan.spec);
            if let Some(derived) = &plan.derived_tail {
                ui.add_space(8.0);
                table::preview(
                    ui,
                    "derived_tail",
                    &derived.columns,
                    derived.tail(PREVIEW_ROWS),
                );
            }
        }
        Err(warning) => {
            ui.label(RichText::new(warning.to_string()).color(theme::WARNING_COLOR));
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title(state.module.upload_prompt())
        .add_filter("Supported files", &["csv", "xls", "xlsx"])
        .add_filter("CSV", &["csv"])
        .add_filter("Excel", &["xls", "xlsx"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.columns
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error reading file: {e:#}"));
            }
        }
    }
}
