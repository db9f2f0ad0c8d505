//! Intent routing and response generation.

pub mod phrases;
pub mod pipeline;
pub mod router;

pub use pipeline::{AssistantCommand, AssistantConfig, AssistantEvent, AssistantPipeline};
pub use router::{route, Action, HELP_TEXT};
