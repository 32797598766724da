// Main entry point - Dependency injection and chart rendering
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::chart_service::ChartService;
use crate::application::trend_repository::FetchState;
use crate::domain::color::{default_color_palette, palette_by_name};
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_repository::HttpTrendRepository;
use crate::presentation::chart_view::ChartView;
use crate::presentation::renderer::JsonRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpTrendRepository::new(
        config.base_api_url,
        config.endpoint,
    ));

    // Create service (application layer)
    let service = ChartService::new(repository);

    // Build the view (presentation layer)
    let palette = match config.palette.as_deref() {
        Some(name) => palette_by_name(name)
            .ok_or_else(|| anyhow::anyhow!("unknown palette: {}", name))?,
        None => default_color_palette(),
    };
    let mut view = ChartView::new().with_palette(palette);
    if let Some(title) = config.title {
        view = view.with_title(title);
    }

    // One render pass per observed fetch state: pending, then the outcome
    let mut renderer = JsonRenderer::new(std::io::stdout().lock());
    view.render(&FetchState::Pending, &mut renderer)?;

    let fetch = service.fetch().await;
    view.render(&fetch, &mut renderer)?;

    Ok(())
}
