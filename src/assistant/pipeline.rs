//! Response pipeline.
//!
//! Routes queries and produces assistant replies on a worker thread so the
//! shell never blocks on a network call. The worker owns a tokio runtime
//! for the async fetchers and talks to the shell over bounded channels.

use crate::assistant::phrases;
use crate::assistant::router::{route, Action};
use crate::fetch::{NewsClient, NewsConfig, WeatherClient, WeatherConfig};
use crate::Result;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Configuration for the response pipeline.
#[derive(Clone, Debug)]
pub struct AssistantConfig {
    pub weather: WeatherConfig,
    pub news: NewsConfig,
    /// Artificial pause before each reply, emulating processing latency.
    pub thinking_delay: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            news: NewsConfig::default(),
            thinking_delay: Duration::from_secs(1),
        }
    }
}

impl AssistantConfig {
    pub fn with_thinking_delay(mut self, thinking_delay: Duration) -> Self {
        self.thinking_delay = thinking_delay;
        self
    }
}

/// Commands that can be sent to the pipeline.
#[derive(Clone, Debug)]
pub enum AssistantCommand {
    /// Produce a reply for the given query.
    Respond { query: String, request_id: Uuid },

    /// Shutdown the pipeline.
    Shutdown,
}

/// Events emitted by the pipeline. There is no error variant: the router
/// always returns a reply and the fetchers absorb their own failures.
#[derive(Clone, Debug)]
pub enum AssistantEvent {
    /// A reply is ready.
    Complete {
        response: String,
        request_id: Uuid,
        elapsed_ms: u64,
    },

    /// The pipeline has shut down.
    Shutdown,
}

/// Assistant pipeline with channel-based communication.
pub struct AssistantPipeline {
    config: AssistantConfig,
    command_tx: Sender<AssistantCommand>,
    command_rx: Receiver<AssistantCommand>,
    event_tx: Sender<AssistantEvent>,
    event_rx: Receiver<AssistantEvent>,
}

impl AssistantPipeline {
    pub fn new(config: AssistantConfig) -> Self {
        let (command_tx, command_rx) = bounded(100);
        let (event_tx, event_rx) = bounded(100);

        Self {
            config,
            command_tx,
            command_rx,
            event_tx,
            event_rx,
        }
    }

    /// Get a sender for commands.
    pub fn command_sender(&self) -> Sender<AssistantCommand> {
        self.command_tx.clone()
    }

    /// Get a receiver for events.
    pub fn event_receiver(&self) -> Receiver<AssistantEvent> {
        self.event_rx.clone()
    }

    /// Start the worker thread that answers queries.
    pub fn start_worker(self) -> Result<JoinHandle<()>> {
        let config = self.config.clone();
        let command_rx = self.command_rx.clone();
        let event_tx = self.event_tx.clone();

        let handle = thread::spawn(move || {
            info!("Assistant pipeline worker starting");

            let runtime = match Runtime::new() {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create tokio runtime: {}", e);
                    let _ = event_tx.send(AssistantEvent::Shutdown);
                    return;
                }
            };

            let weather = match WeatherClient::new(config.weather.clone()) {
                Ok(client) => client,
                Err(e) => {
                    error!("Failed to build weather client: {}", e);
                    let _ = event_tx.send(AssistantEvent::Shutdown);
                    return;
                }
            };

            let news = match NewsClient::new(config.news.clone()) {
                Ok(client) => client,
                Err(e) => {
                    error!("Failed to build news client: {}", e);
                    let _ = event_tx.send(AssistantEvent::Shutdown);
                    return;
                }
            };

            info!("Assistant pipeline worker ready");

            loop {
                match command_rx.recv() {
                    Ok(AssistantCommand::Respond { query, request_id }) => {
                        debug!("Processing query {}", request_id);
                        let started = Instant::now();

                        if !config.thinking_delay.is_zero() {
                            thread::sleep(config.thinking_delay);
                        }

                        let body = match route(&query) {
                            Action::FetchWeather => runtime.block_on(weather.current_summary()),
                            Action::FetchNews => runtime.block_on(news.latest_headlines()),
                            Action::Canned(text) => text.to_string(),
                        };

                        let response = phrases::wrap(&body);
                        let elapsed_ms = started.elapsed().as_millis() as u64;
                        debug!("Reply ready in {}ms", elapsed_ms);

                        let _ = event_tx.send(AssistantEvent::Complete {
                            response,
                            request_id,
                            elapsed_ms,
                        });
                    }

                    Ok(AssistantCommand::Shutdown) => {
                        info!("Assistant pipeline worker shutting down");
                        let _ = event_tx.send(AssistantEvent::Shutdown);
                        break;
                    }

                    Err(e) => {
                        error!("Command channel error: {}", e);
                        break;
                    }
                }
            }

            info!("Assistant pipeline worker stopped");
        });

        Ok(handle)
    }
}
