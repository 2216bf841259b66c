//! Effect interpreter that executes effects against the real services.
//!
//! The interpreter is the boundary between the pure state machine and the
//! impure world of I/O. It takes effects (descriptions of what to do) and
//! executes them, returning result events.
//!
//! A failed effect produces no result event: it is logged and the session
//! is left wherever the transition put it. For the generation sequence
//! that means the session stays in the `Generating` phase with no
//! user-visible recovery path, which is the source system's behavior and
//! is preserved on purpose.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::effect::{Effect, LogLevel};
use super::event::Event;
use super::store::SessionId;
use crate::pages::PageRepository;
use zine_core::generation::GenerationClient;
use zine_core::prompts::{create_image_prompt, create_musing_prompt};

/// Context needed by the interpreter to execute effects.
pub struct InterpreterContext {
    pub generation_client: Arc<GenerationClient>,
    pub pages: Arc<dyn PageRepository>,
    pub session_id: SessionId,
}

/// Result of executing an effect.
#[derive(Debug)]
pub enum EffectResult {
    /// Effect completed, produced result events.
    Ok(Vec<Event>),
    /// Effect failed with an error.
    Err(String),
}

impl EffectResult {
    pub fn single(event: Event) -> Self {
        Self::Ok(vec![event])
    }

    pub fn none() -> Self {
        Self::Ok(vec![])
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self::Err(msg.into())
    }
}

/// Execute a list of effects and collect result events.
///
/// Effects are executed sequentially. If an effect fails, execution
/// continues with remaining effects, and the error is logged.
pub async fn execute_effects(ctx: &InterpreterContext, effects: Vec<Effect>) -> Vec<Event> {
    let mut result_events = Vec::new();

    for effect in effects {
        match execute_effect(ctx, effect).await {
            EffectResult::Ok(events) => result_events.extend(events),
            EffectResult::Err(err) => {
                error!("Effect execution failed for session {}: {}", ctx.session_id, err);
            }
        }
    }

    result_events
}

/// Execute a single effect.
async fn execute_effect(ctx: &InterpreterContext, effect: Effect) -> EffectResult {
    match effect {
        Effect::GenerateMusing { question, answer } => {
            info!("Generating musing for session {}", ctx.session_id);
            let prompt = create_musing_prompt(&question, &answer);
            match ctx.generation_client.invoke_text(&prompt).await {
                Ok(musing) => EffectResult::single(Event::MusingGenerated { musing }),
                Err(e) => EffectResult::err(format!("musing generation failed: {:#}", e)),
            }
        }

        Effect::GenerateImage { answer } => {
            info!("Generating artwork for session {}", ctx.session_id);
            let prompt = create_image_prompt(&answer);
            match ctx.generation_client.invoke_image(&prompt).await {
                Ok(image) => EffectResult::single(Event::ImageGenerated {
                    image_url: image.url,
                }),
                Err(e) => EffectResult::err(format!("image generation failed: {:#}", e)),
            }
        }

        Effect::CreatePage { draft } => {
            info!(
                "Persisting page {} for session {}",
                draft.page_number, ctx.session_id
            );
            match ctx.pages.create(draft).await {
                Ok(page) => EffectResult::single(Event::PageCreated { page }),
                Err(e) => EffectResult::err(format!("page creation failed: {:#}", e)),
            }
        }

        Effect::Log { level, message } => {
            match level {
                LogLevel::Debug => tracing::debug!("{}", message),
                LogLevel::Info => info!("{}", message),
                LogLevel::Warn => warn!("{}", message),
                LogLevel::Error => error!("{}", message),
            }
            EffectResult::none()
        }
    }
}
