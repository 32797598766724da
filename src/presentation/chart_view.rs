// Chart view - Maps fetch outcome to the rendered state
use crate::application::chart_builder::{build_chart_data, chart_options};
use crate::application::trend_repository::FetchState;
use crate::domain::chart::{ChartError, LineChart};
use crate::domain::color::default_color_palette;
use crate::presentation::renderer::ChartRenderer;

/// Static text shown while no data is available. Covers both an in-flight
/// fetch and an empty successful response.
pub const LOADING_MESSAGE: &str = "loading...";
/// Static text shown when the fetch collaborator reported a failure.
pub const ERROR_MESSAGE: &str = "Failed to load";

/// What the view shows for a given fetch state, evaluated in fixed priority
/// order: error first, then pending/empty, then ready. Pending and Empty are
/// distinct states even though both currently render the loading text.
#[derive(Debug)]
pub enum ChartViewState {
    Error { message: String },
    Pending,
    Empty,
    Ready(LineChart),
}

/// The display component: holds the presentation props (title, palette) and
/// turns the fetch collaborator's state into something a renderer can draw.
/// It owns no mutable state of its own.
pub struct ChartView {
    title: Option<String>,
    palette: Vec<String>,
}

impl ChartView {
    pub fn new() -> Self {
        Self {
            title: None,
            palette: default_color_palette(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.palette = palette;
        self
    }

    /// Evaluate the view state for one render pass. Transformer errors on
    /// malformed records propagate to the caller rather than collapsing into
    /// the Error state, which is reserved for fetch failures.
    pub fn present(&self, fetch: &FetchState) -> Result<ChartViewState, ChartError> {
        match fetch {
            FetchState::Failed(message) => Ok(ChartViewState::Error {
                message: message.clone(),
            }),
            FetchState::Pending => Ok(ChartViewState::Pending),
            FetchState::Loaded(records) if records.is_empty() => Ok(ChartViewState::Empty),
            FetchState::Loaded(records) => {
                let data = build_chart_data(records, &self.palette)?;
                let options = chart_options(self.title.as_deref());
                Ok(ChartViewState::Ready(LineChart { data, options }))
            }
        }
    }

    /// Render one pass through the given collaborator.
    pub fn render(
        &self,
        fetch: &FetchState,
        renderer: &mut dyn ChartRenderer,
    ) -> anyhow::Result<()> {
        match self.present(fetch)? {
            ChartViewState::Error { message } => {
                tracing::error!("Chart fetch failed: {}", message);
                renderer.render_message(ERROR_MESSAGE)
            }
            ChartViewState::Pending | ChartViewState::Empty => {
                renderer.render_message(LOADING_MESSAGE)
            }
            ChartViewState::Ready(chart) => renderer.render_chart(&chart),
        }
    }
}

impl Default for ChartView {
    fn default() -> Self {
        Self::new()
    }
}
