//! View rendering (header, input, result, error, history)

use super::App;
use crate::constants::APP_VERSION;
use crate::theme;
use crate::ui::components::{classification_badge, field_row};
use crate::ui::page::{
    scan_shortcut_hint, ActionButton, BackendBadge, PageView, ResultCard, HISTORY_LOADING,
    HISTORY_PLACEHOLDER,
};
use eframe::egui;
use egui_phosphor::regular as icons;

/// Clicks collected during a frame, applied once rendering is done
#[derive(Default)]
pub(crate) struct PageActions {
    pub scan: bool,
    pub refresh: bool,
    pub recheck_backend: bool,
}

impl App {
    pub(crate) fn render_page(&mut self, ui: &mut egui::Ui, actions: &mut PageActions) {
        let badge = BackendBadge::from_session(&self.controller.session);
        self.render_header(ui, &badge, actions);
        ui.add_space(theme::SPACING_XL);

        self.render_input_section(ui, actions);

        let page = PageView::project(&self.controller.session, &chrono::Local);

        if let Some(message) = page.error {
            ui.add_space(theme::SPACING_LG);
            render_error(ui, message, page.error_context);
        }

        if let Some(result) = &page.result {
            ui.add_space(theme::SPACING_LG);
            render_result(ui, result);
        }

        ui.add_space(theme::SPACING_LG);
        render_history(ui, &page, actions);
    }

    fn render_header(&self, ui: &mut egui::Ui, badge: &BackendBadge, actions: &mut PageActions) {
        ui.horizontal(|ui| {
            if let Some(logo) = &self.logo_texture {
                ui.add(
                    egui::Image::new(logo)
                        .fit_to_exact_size(egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE)),
                );
            }
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Email Guard - AI Scanner")
                        .size(theme::FONT_TITLE + 4.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new("Protecting your inbox with intelligent email analysis")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("v{}", APP_VERSION))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                let (icon, text, color) = match badge {
                    BackendBadge::Unknown | BackendBadge::Checking => {
                        (icons::CIRCLE_DASHED, "Checking backend...", theme::TEXT_MUTED)
                    }
                    BackendBadge::Online { model_loaded: true } => {
                        (icons::CHECK_CIRCLE, "Backend online", theme::STATUS_SUCCESS)
                    }
                    BackendBadge::Online { model_loaded: false } => (
                        icons::WARNING_CIRCLE,
                        "Backend online, model not loaded",
                        theme::STATUS_WARNING,
                    ),
                    BackendBadge::Unreachable(_) => {
                        (icons::X_CIRCLE, "Backend unreachable", theme::STATUS_ERROR)
                    }
                    BackendBadge::Faulty(_) => {
                        (icons::WARNING_CIRCLE, "Backend error", theme::STATUS_WARNING)
                    }
                };
                if let BackendBadge::Unreachable(reason) | BackendBadge::Faulty(reason) = badge {
                    if ui
                        .small_button(icons::ARROW_CLOCKWISE)
                        .on_hover_text("Check again")
                        .clicked()
                    {
                        actions.recheck_backend = true;
                    }
                    ui.label(egui::RichText::new(format!("{}  {}", icon, text)).color(color))
                        .on_hover_text(reason.as_str());
                } else {
                    ui.label(egui::RichText::new(format!("{}  {}", icon, text)).color(color))
                        .on_hover_text(self.controller.backend_url());
                }
            });
        });
    }

    fn render_input_section(&mut self, ui: &mut egui::Ui, actions: &mut PageActions) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                egui::RichText::new("Enter Email Text to Scan:")
                    .size(theme::FONT_HEADING)
                    .strong(),
            );
            ui.add_space(theme::SPACING_MD);

            // Consume before the text box sees it, so it does not insert a newline
            let shortcut = ui.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter));

            ui.add(
                egui::TextEdit::multiline(&mut self.controller.session.input)
                    .desired_rows(theme::INPUT_ROWS)
                    .desired_width(f32::INFINITY)
                    .hint_text("Paste your email content here..."),
            );
            ui.add_space(theme::SPACING_MD);

            let button = ActionButton::scan(&self.controller.session);
            ui.horizontal(|ui| {
                let label = format!("{}  {}", icons::SHIELD_CHECK, button.label);
                let clicked = ui.add_enabled(button.enabled, theme::button_accent(label)).clicked();
                if self.controller.session.scan_loading() {
                    ui.add(egui::Spinner::new().size(theme::FONT_BODY));
                }
                if clicked || (shortcut && button.enabled) {
                    actions.scan = true;
                }
                ui.label(
                    egui::RichText::new(scan_shortcut_hint())
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
            });
        });
    }
}

fn render_error(ui: &mut egui::Ui, message: &str, context: Option<&str>) {
    theme::error_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            egui::RichText::new(format!("{}  Error:", icons::WARNING))
                .size(theme::FONT_HEADING)
                .strong()
                .color(theme::STATUS_ERROR),
        );
        ui.add(egui::Label::new(egui::RichText::new(message).color(theme::ERROR_TEXT)).wrap());
        if let Some(context) = context {
            ui.label(
                egui::RichText::new(context)
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
        }
    });
}

fn render_result(ui: &mut egui::Ui, result: &ResultCard<'_>) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new("Scan Result:").size(theme::FONT_HEADING).strong());
        ui.add_space(theme::SPACING_SM);
        field_row(ui, "Classification:", |ui| {
            classification_badge(ui, result.classification);
        });
        field_row(ui, "Confidence:", |ui| {
            ui.label(result.confidence.as_str());
        });
        field_row(ui, "Explanation:", |ui| {
            ui.add(egui::Label::new(result.explanation).wrap());
        });
    });
}

fn render_history(ui: &mut egui::Ui, page: &PageView<'_>, actions: &mut PageActions) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Scan History").size(theme::FONT_HEADING).strong());
            if let Some(at) = &page.history_updated {
                ui.label(
                    egui::RichText::new(format!("Updated {}", at))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = format!("{}  {}", icons::ARROW_CLOCKWISE, page.refresh_button.label);
                if ui
                    .add_enabled(page.refresh_button.enabled, theme::button(label))
                    .clicked()
                {
                    actions.refresh = true;
                }
            });
        });
        ui.add_space(theme::SPACING_SM);

        if page.history_stale {
            ui.label(
                egui::RichText::new(format!(
                    "{}  Refresh failed, showing the last loaded history",
                    icons::WARNING
                ))
                .size(theme::FONT_SMALL)
                .color(theme::STATUS_WARNING),
            );
        }
        if page.history_placeholder {
            ui.label(egui::RichText::new(HISTORY_PLACEHOLDER).color(theme::TEXT_MUTED));
        }
        if page.history_loading {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().size(theme::FONT_BODY));
                ui.label(egui::RichText::new(HISTORY_LOADING).color(theme::TEXT_MUTED));
            });
        }

        for row in &page.history {
            theme::row_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    field_row(ui, "Type:", |ui| {
                        classification_badge(ui, row.classification);
                    });
                    ui.add_space(theme::SPACING_LG);
                    field_row(ui, "Confidence:", |ui| {
                        ui.label(row.confidence.as_str());
                    });
                });
                field_row(ui, "Snippet:", |ui| {
                    ui.add(egui::Label::new(row.snippet.as_str()).wrap());
                });
                ui.label(
                    egui::RichText::new(row.timestamp.as_str())
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
            });
            ui.add_space(theme::SPACING_SM);
        }
    });
}
