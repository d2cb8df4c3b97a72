use super::board::Renderer;
use super::messages::Messages;
use super::progress::{Phase, ProgressOptions, ProgressTimer};
use super::status;
use super::styling::StyleMode;
use crate::config::Config;
use crate::dom::Element;
use crate::feed::{validate, FetchError, NewsPayload, NewsSource, ValidationError};
use std::time::Duration;
use thiserror::Error;

/// Any document-level failure of a fetch cycle.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LoadError {
    /// Detail shown to the user.
    ///
    /// Connectivity failures get a generic message; everything else shows the
    /// error text, which carries the status code or parse position.
    pub fn user_detail(&self, messages: &Messages) -> String {
        match self {
            Self::Fetch(FetchError::Network(_)) => messages.network_error.clone(),
            other => other.to_string(),
        }
    }
}

/// What the board is currently showing.
///
/// Starts in `Loading`; moves once to one of the three terminal states.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    Loading { progress_percent: u8, message: String },
    Populated(NewsPayload),
    Empty,
    Error { message: String },
}

impl RenderState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading { .. } => "loading",
            Self::Populated(_) => "populated",
            Self::Empty => "empty",
            Self::Error { .. } => "error",
        }
    }
}

/// Presentation settings for one board.
#[derive(Debug, Clone, Default)]
pub struct PresenterOptions {
    pub style: StyleMode,
    pub messages: Messages,
    pub progress: ProgressOptions,
}

impl From<&Config> for PresenterOptions {
    fn from(config: &Config) -> Self {
        Self {
            style: config.style,
            messages: config.messages.clone(),
            progress: config.progress.clone(),
        }
    }
}

/// Owns the board container and its state for one fetch cycle.
///
/// The container is handed over at construction, so several boards can live
/// side by side. [`Presenter::run`] performs the single fetch cycle; after it
/// the board stays in its terminal state.
pub struct Presenter {
    container: Element,
    state: RenderState,
    options: PresenterOptions,
    timer: Option<ProgressTimer>,
}

impl Presenter {
    /// Take ownership of `container` and show the loading view in it.
    pub fn new(mut container: Element, options: PresenterOptions) -> Self {
        let with_progress = options.progress.enabled;
        container.clear_children();
        container.append(status::loading_view(
            options.style,
            &options.messages,
            with_progress,
        ));

        let message = if with_progress {
            Phase::Fetching.message(&options.messages).to_owned()
        } else {
            options.messages.loading.clone()
        };

        Self {
            container,
            state: RenderState::Loading {
                progress_percent: 0,
                message,
            },
            options,
            timer: None,
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    /// Whether the cosmetic progress timer is currently held.
    pub fn progress_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Fetch, validate and display the outcome.
    ///
    /// Only the first call does anything; later calls log and return the
    /// terminal state unchanged.
    pub async fn run<S: NewsSource + ?Sized>(&mut self, source: &S) -> &RenderState {
        if self.state.is_terminal() {
            tracing::warn!(state = self.state.name(), "Board already settled, ignoring run");
            return &self.state;
        }

        if self.options.progress.enabled {
            self.timer = Some(ProgressTimer::start(&self.options.progress));
        }

        let load = load(source);
        tokio::pin!(load);

        let outcome = loop {
            tokio::select! {
                biased;

                outcome = &mut load => break outcome,

                update = next_tick(&mut self.timer) => {
                    let (percent, phase) = update;
                    self.show_progress(percent, phase);
                }
            }
        };

        self.settle(outcome, source.endpoint()).await;
        &self.state
    }

    fn show_progress(&mut self, percent: u8, phase: Phase) {
        let message = phase.message(&self.options.messages).to_owned();
        status::update_progress(&mut self.container, percent, &message);
        self.state = RenderState::Loading {
            progress_percent: percent,
            message,
        };
    }

    /// Single exit step for every outcome: release the timer, then replace
    /// the loading view with the terminal display.
    async fn settle(&mut self, outcome: Result<NewsPayload, LoadError>, endpoint: &str) {
        let had_progress = self.timer.take().is_some();

        if had_progress && outcome.is_ok() {
            let complete = self.options.messages.complete.clone();
            status::update_progress(&mut self.container, 100, &complete);
            self.state = RenderState::Loading {
                progress_percent: 100,
                message: complete,
            };
            let delay = self.options.progress.completion_delay_ms;
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
        }

        self.container.clear_children();
        let style = self.options.style;
        let messages = &self.options.messages;

        self.state = match outcome {
            Ok(payload) if payload.is_empty() => {
                tracing::info!(endpoint, "News endpoint returned no categories");
                self.container.append(status::empty_view(style, messages));
                RenderState::Empty
            }
            Ok(payload) => {
                tracing::info!(
                    endpoint,
                    categories = payload.len(),
                    articles = payload.article_count(),
                    "Rendering news board"
                );
                Renderer::new(style, messages).render(&payload, &mut self.container);
                RenderState::Populated(payload)
            }
            Err(err) => {
                tracing::error!(endpoint, error = %err, "Failed to load news");
                let detail = err.user_detail(messages);
                self.container
                    .append(status::error_view(style, messages, &detail, endpoint));
                RenderState::Error { message: detail }
            }
        };
    }
}

async fn load<S: NewsSource + ?Sized>(source: &S) -> Result<NewsPayload, LoadError> {
    let raw = source.fetch().await?;
    Ok(validate(raw)?)
}

/// Resolves on the next progress tick, or never when there is no timer.
async fn next_tick(timer: &mut Option<ProgressTimer>) -> (u8, Phase) {
    match timer {
        Some(timer) => {
            let progress = timer.tick().await;
            (progress.display_percent(), progress.phase())
        }
        None => std::future::pending().await,
    }
}
