#![windows_subsystem = "windows"]
//! Email Guard - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod config;
mod constants;
mod theme;
mod types;
mod ui;
mod utils;

#[cfg(test)]
mod test_support;

use app::App;
use config::Config;
use constants::*;
use eframe::egui;
use tracing::info;
use utils::{get_data_dir, rasterize_shield};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "email-guard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,email_guard=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Email Guard starting");

    let config = Config::from_env();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([900.0, 820.0])
        .with_min_inner_size([560.0, 480.0])
        .with_title("Email Guard - AI Scanner");

    if let Some((rgba, width, height)) = rasterize_shield(64) {
        let icon = egui::IconData { rgba, width, height };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)?))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load history and probe the backend on the first frame
        if !self.mounted {
            self.mounted = true;
            self.controller.mount();
        }

        self.controller.pump();

        let mut actions = app::views::PageActions::default();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        // Center a fixed-width column in wide windows
                        let width = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
                        let side = (ui.available_width() - width) / 2.0;
                        ui.horizontal(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                self.render_page(ui, &mut actions);
                            });
                        });
                    });
            });

        if actions.scan {
            self.controller.submit_scan();
        }
        if actions.refresh {
            self.controller.refresh_history();
        }
        if actions.recheck_backend {
            self.controller.check_health();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Email Guard closing");
    }
}
