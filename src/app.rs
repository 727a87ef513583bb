use eframe::egui;

use crate::state::AppState;
use crate::theme;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = AppState::default();
        state.background_uri = theme::install(&cc.egui_ctx);
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: module selector (translucent over background) ----
        egui::SidePanel::left("module_panel")
            .default_width(240.0)
            .resizable(true)
            .frame(
                egui::Frame::new()
                    .fill(theme::SIDEBAR_FILL)
                    .inner_margin(12),
            )
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: background + active module view ----
        egui::CentralPanel::default()
            .frame(egui::Frame::new().inner_margin(16))
            .show(ctx, |ui| {
                theme::paint_background(ui, self.state.background_uri.as_deref());
                panels::central_panel(ui, &mut self.state);
            });
    }
}
