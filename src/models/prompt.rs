//! Prompt descriptor model and the render contract.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Argument values supplied by a caller, keyed by argument name.
///
/// A missing key means the argument was not provided.
pub type PromptArgs = HashMap<String, String>;

/// Author of a rendered prompt message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message spoken by the user.
    User,
    /// Message spoken by the assistant.
    Assistant,
}

/// Declared argument of a prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PromptArgumentSpec {
    /// Argument name as referenced by templates and callers.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Advisory flag; rendering never rejects a missing argument.
    #[serde(default)]
    pub required: bool,
    /// Literal substituted when the argument is absent.
    #[serde(default)]
    pub default: Option<String>,
}

impl PromptArgumentSpec {
    /// Construct an argument with no default.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            default: None,
        }
    }

    /// Set the literal used when the argument is absent.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Value to substitute for this argument given the caller's arguments.
    ///
    /// Falls back to the declared default, then to `<name>`.
    #[must_use]
    pub fn resolve(&self, args: &PromptArgs) -> String {
        args.get(&self.name)
            .cloned()
            .or_else(|| self.default.clone())
            .unwrap_or_else(|| format!("<{}>", self.name))
    }
}

/// Single message of a rendered prompt. Content is always text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Message author.
    pub role: MessageRole,
    /// Message text.
    pub text: String,
}

impl RenderedMessage {
    /// Construct a user message.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
        }
    }

    /// Construct an assistant message.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            text: text.into(),
        }
    }
}

/// Output of rendering a prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptRenderResult {
    /// Description of the rendered prompt, possibly embedding argument values.
    pub description: String,
    /// Ordered message sequence.
    pub messages: Vec<RenderedMessage>,
}

/// Pure, total mapping from provided arguments to a rendered prompt.
///
/// Implementations must not fail for any subset of declared arguments.
pub trait RenderPrompt: Send + Sync {
    /// Render the prompt for the given arguments.
    fn render(&self, args: &PromptArgs) -> PromptRenderResult;
}

impl<F> RenderPrompt for F
where
    F: Fn(&PromptArgs) -> PromptRenderResult + Send + Sync,
{
    fn render(&self, args: &PromptArgs) -> PromptRenderResult {
        self(args)
    }
}

/// Metadata record identifying one prompt, together with its renderer.
#[derive(Clone)]
pub struct PromptDescriptor {
    /// Unique prompt name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Declared arguments in presentation order.
    pub arguments: Vec<PromptArgumentSpec>,
    renderer: Arc<dyn RenderPrompt>,
}

impl PromptDescriptor {
    /// Construct a descriptor bound to `renderer`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        arguments: Vec<PromptArgumentSpec>,
        renderer: impl RenderPrompt + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            arguments,
            renderer: Arc::new(renderer),
        }
    }

    /// Render this prompt. Arguments not declared on the descriptor are dropped first.
    #[must_use]
    pub fn render(&self, args: &PromptArgs) -> PromptRenderResult {
        let declared: PromptArgs = args
            .iter()
            .filter(|(name, _)| self.arguments.iter().any(|arg| &arg.name == *name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        self.renderer.render(&declared)
    }
}

impl Debug for PromptDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}
