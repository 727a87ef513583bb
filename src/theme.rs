use eframe::egui::{self, Color32, Context, Ui};

// ---------------------------------------------------------------------------
// Background image + dashboard styling
// ---------------------------------------------------------------------------

const BACKGROUND_ASSET: &str = "assets/background.png";
const BACKGROUND_URI: &str = "bytes://background.png";

/// Translucent fill behind the sidebar, keeping its text readable over
/// the background image.
pub const SIDEBAR_FILL: Color32 = Color32::from_black_alpha(115);

/// Dimming overlay painted over the background in the main content area.
pub const CONTENT_OVERLAY: Color32 = Color32::from_black_alpha(46);

pub const WARNING_COLOR: Color32 = Color32::from_rgb(247, 200, 67);

/// Apply the dashboard visuals and register the background image asset,
/// if present on disk. Returns the image URI when registered.
pub fn install(ctx: &Context) -> Option<String> {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(Color32::WHITE);
    ctx.set_visuals(visuals);

    let path = std::path::Path::new(BACKGROUND_ASSET);
    if !path.exists() {
        log::info!("No background asset at {BACKGROUND_ASSET}, using flat theme");
        return None;
    }
    match std::fs::read(path) {
        Ok(bytes) => {
            ctx.include_bytes(BACKGROUND_URI, bytes);
            Some(BACKGROUND_URI.to_string())
        }
        Err(e) => {
            log::warn!("Failed to read background asset: {e}");
            None
        }
    }
}

/// Paint the background image stretched across the full viewport, plus the
/// dimming overlay. Call first inside the central panel.
pub fn paint_background(ui: &mut Ui, uri: Option<&str>) {
    let screen = ui.ctx().screen_rect();
    if let Some(uri) = uri {
        egui::Image::from_uri(uri).paint_at(ui, screen);
    }
    ui.painter().rect_filled(screen, 0.0, CONTENT_OVERLAY);
}
