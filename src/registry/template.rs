//! Textual prompt templates with `{{argument}}` placeholders.
//!
//! Templates are parsed once into literal and placeholder segments, so
//! rendering is a pure walk over immutable data with no I/O.

use crate::models::prompt::{
    MessageRole, PromptArgs, PromptArgumentSpec, PromptRenderResult, RenderPrompt, RenderedMessage,
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder { name: String, raw: String },
}

/// Parsed template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text.
    ///
    /// `{{name}}` becomes a placeholder when `name` is a plain identifier
    /// (ASCII alphanumerics, `_` or `-`, surrounding whitespace allowed).
    /// Anything else, including an unterminated `{{`, stays literal.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(start) = rest.find(OPEN) {
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                break;
            };
            let name = after_open[..end].trim();
            if is_identifier(name) {
                literal.push_str(&rest[..start]);
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let raw_len = OPEN.len() + end + CLOSE.len();
                segments.push(Segment::Placeholder {
                    name: name.to_owned(),
                    raw: rest[start..start + raw_len].to_owned(),
                });
                rest = &rest[start + raw_len..];
            } else {
                // Only the opening braces are literal; a later `{{` may still open a placeholder.
                literal.push_str(&rest[..start + OPEN.len()]);
                rest = after_open;
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Self { segments }
    }

    /// Names of all placeholders in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute declared arguments; undeclared placeholders are kept verbatim.
    #[must_use]
    pub fn render(&self, declared: &[PromptArgumentSpec], args: &PromptArgs) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { name, raw } => {
                    match declared.iter().find(|arg| &arg.name == name) {
                        Some(spec) => out.push_str(&spec.resolve(args)),
                        None => out.push_str(raw),
                    }
                }
            }
        }
        out
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// One message of a prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    /// Message author.
    pub role: MessageRole,
    /// Message body.
    pub template: Template,
}

/// Prompt renderer built from a description template and message templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    description: Template,
    arguments: Vec<PromptArgumentSpec>,
    messages: Vec<MessageTemplate>,
}

impl PromptTemplate {
    /// Create a template with no messages.
    #[must_use]
    pub fn new(description: &str, arguments: Vec<PromptArgumentSpec>) -> Self {
        Self {
            description: Template::parse(description),
            arguments,
            messages: Vec::new(),
        }
    }

    /// Append a message template.
    #[must_use]
    pub fn message(mut self, role: MessageRole, text: &str) -> Self {
        self.messages.push(MessageTemplate {
            role,
            template: Template::parse(text),
        });
        self
    }

    /// Placeholders that do not name a declared argument.
    #[must_use]
    pub fn undeclared_placeholders(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in std::iter::once(&self.description)
            .chain(self.messages.iter().map(|message| &message.template))
            .flat_map(Template::placeholders)
        {
            let declared = self.arguments.iter().any(|arg| arg.name == name);
            if !declared && !names.iter().any(|seen| seen == name) {
                names.push(name.to_owned());
            }
        }
        names
    }
}

impl RenderPrompt for PromptTemplate {
    fn render(&self, args: &PromptArgs) -> PromptRenderResult {
        PromptRenderResult {
            description: self.description.render(&self.arguments, args),
            messages: self
                .messages
                .iter()
                .map(|message| RenderedMessage {
                    role: message.role,
                    text: message.template.render(&self.arguments, args),
                })
                .collect(),
        }
    }
}
