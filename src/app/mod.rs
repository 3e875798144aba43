//! App module - contains the main application state and logic

pub mod controller;
pub mod jobs;
pub mod state;
pub(crate) mod views;

use crate::api::ApiClient;
use crate::config::Config;
use crate::theme;
use crate::utils::rasterize_shield;
use controller::Controller;
use eframe::egui;
use jobs::Jobs;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) controller: Controller,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) mounted: bool,
    // Keeps the worker threads alive for the lifetime of the window
    _runtime: tokio::runtime::Runtime,
}

// ============================================================================
// APP INITIALIZATION
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("email-guard-http")
            .enable_all()
            .build()?;

        let client = ApiClient::new(&config).map_err(std::io::Error::other)?;

        let ctx = cc.egui_ctx.clone();
        let jobs = Jobs::new(
            client,
            runtime.handle().clone(),
            Arc::new(move || ctx.request_repaint()),
        );

        info!(
            backend = %config.backend_url,
            api_key = %config.masked_api_key(),
            "Scanner client ready"
        );

        let logo_texture = rasterize_shield(theme::LOGO_SIZE as u32 * 2).map(|(rgba, w, h)| {
            cc.egui_ctx.load_texture(
                "logo",
                egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &rgba),
                egui::TextureOptions::LINEAR,
            )
        });

        Ok(Self {
            controller: Controller::new(jobs),
            logo_texture,
            mounted: false,
            _runtime: runtime,
        })
    }
}
