//! Centralized theme constants for Email Guard
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // input field background
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19); // subtle teal hover
pub const BG_PRESSED: Color32 = Color32::from_rgb(0x11, 0x2a, 0x27); // teal-tinted press
pub const BG_CARD: Color32 = Color32::from_rgba_premultiplied(0x0e, 0x0e, 0x10, 150); // translucent zinc-900

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// Error card
pub const ERROR_FILL: Color32 = Color32::from_rgb(0x2d, 0x0a, 0x0a);
pub const ERROR_BORDER: Color32 = Color32::from_rgb(0x7f, 0x1d, 0x1d);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xfc, 0xa5, 0xa5);

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const BTN_ACCENT_TEXT: Color32 = Color32::from_rgb(0x04, 0x2f, 0x2e); // teal-950

// =============================================================================
// COLORS - Classifications
// =============================================================================
pub fn classification_colors(classification: &str) -> (Color32, Color32) {
    // Returns (bg_color ~10% alpha, text_color)
    match classification.to_ascii_lowercase().as_str() {
        "phishing" => (
            Color32::from_rgba_unmultiplied(0xf8, 0x71, 0x71, 26),
            STATUS_ERROR,
        ),
        "spam" => (
            Color32::from_rgba_unmultiplied(0xfb, 0xbf, 0x24, 26),
            STATUS_WARNING,
        ),
        "legit" | "safe" | "ham" => (
            Color32::from_rgba_unmultiplied(0x34, 0xd3, 0x99, 26),
            STATUS_SUCCESS,
        ),
        _ => (
            Color32::from_rgba_unmultiplied(0xa1, 0xa1, 0xaa, 26),
            TEXT_MUTED,
        ),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CONTENT_MAX_WIDTH: f32 = 820.0;
pub const LOGO_SIZE: f32 = 40.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const INPUT_ROWS: usize = 10;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
fn widget_visuals(
    bg: Color32,
    weak_bg: Color32,
    border: Color32,
    fg: egui::Stroke,
) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: weak_bg,
        bg_stroke: if border == Color32::TRANSPARENT {
            egui::Stroke::NONE
        } else {
            egui::Stroke::new(STROKE_DEFAULT, border)
        },
        fg_stroke: fg,
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    }
}

pub fn apply_visuals(ctx: &egui::Context) {
    let text = egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY);

    let mut active = widget_visuals(BG_PRESSED, BG_PRESSED, Color32::TRANSPARENT, text);
    active.expansion = -2.0;

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT.gamma_multiply(0.35),
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget_visuals(BG_ELEVATED, BG_SURFACE, BORDER_SUBTLE, text),
            inactive: widget_visuals(
                Color32::TRANSPARENT,
                BG_ELEVATED,
                BORDER_SUBTLE,
                egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
            ),
            hovered: widget_visuals(
                BG_HOVER,
                BTN_DEFAULT,
                BORDER_DEFAULT,
                egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
            ),
            active,
            open: widget_visuals(BG_SURFACE, BG_ELEVATED, BORDER_SUBTLE, text),
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(SPACING_MD, SPACING_SM + 2.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, SPACING_SM + 2.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// Red-tinted card for the error banner
pub fn error_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(ERROR_FILL)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, ERROR_BORDER))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// Flat row inside the history card
pub fn row_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(SPACING_MD as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Accent teal button (for the primary Scan action)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(BTN_ACCENT_TEXT))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_classifications_get_distinct_colors() {
        assert_eq!(classification_colors("phishing").1, STATUS_ERROR);
        assert_eq!(classification_colors("Spam").1, STATUS_WARNING);
        assert_eq!(classification_colors("legit").1, STATUS_SUCCESS);
        assert_eq!(classification_colors("invalid_input").1, TEXT_MUTED);
    }

    #[test]
    fn visuals_come_from_the_palette() {
        let ctx = egui::Context::default();
        apply_visuals(&ctx);
        let style = ctx.style();
        let visuals = &style.visuals;
        assert_eq!(visuals.panel_fill, BG_BASE);
        assert_eq!(visuals.extreme_bg_color, BG_INPUT);
        assert_eq!(visuals.widgets.hovered.bg_fill, BG_HOVER);
        assert_eq!(visuals.widgets.active.bg_fill, BG_PRESSED);
        assert_eq!(visuals.widgets.active.bg_stroke, egui::Stroke::NONE);
        assert_eq!(visuals.widgets.inactive.fg_stroke.color, TEXT_SECONDARY);
        assert_eq!(style.spacing.item_spacing, egui::vec2(SPACING_MD, 6.0));
    }
}
