//! Protocol envelopes for resource and prompt responses.
//!
//! Pure reshaping of already-computed values into `rmcp` model types.
//! Internal addressing fields (`category`, `content_key`) and prompt
//! renderers never reach these envelopes.

use rmcp::model::{
    AnnotateAble, GetPromptResult, ListPromptsResult, ListResourcesResult, Prompt, PromptArgument,
    PromptMessage, PromptMessageRole, RawResource, ReadResourceResult, ResourceContents,
};

use crate::models::prompt::{MessageRole, PromptDescriptor, RenderedMessage};
use crate::models::resource::ResourceDescriptor;

/// Wrap loaded content into a single-entry `resources/read` envelope.
#[must_use]
pub fn resource_content(uri: &str, content: &str, mime_type: &str) -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.into(),
            mime_type: Some(mime_type.into()),
            text: content.into(),
            meta: None,
        }],
    }
}

/// Build the `resources/list` envelope, preserving manifest order.
#[must_use]
pub fn resource_list(descriptors: &[ResourceDescriptor]) -> ListResourcesResult {
    let resources = descriptors
        .iter()
        .map(|descriptor| {
            RawResource {
                uri: descriptor.uri.clone(),
                name: descriptor.name.clone(),
                title: None,
                description: Some(descriptor.description.clone()),
                mime_type: Some(descriptor.mime_type.clone()),
                size: None,
                icons: None,
                meta: None,
            }
            .no_annotation()
        })
        .collect();

    ListResourcesResult::with_all_items(resources)
}

/// Build the `prompts/get` envelope.
#[must_use]
pub fn prompt_response(description: &str, messages: &[RenderedMessage]) -> GetPromptResult {
    GetPromptResult {
        description: Some(description.into()),
        messages: messages
            .iter()
            .map(|message| PromptMessage::new_text(role(message.role), message.text.clone()))
            .collect(),
    }
}

/// Build the `prompts/list` envelope. Prompts without arguments list an empty array.
#[must_use]
pub fn prompt_list(descriptors: &[PromptDescriptor]) -> ListPromptsResult {
    let prompts = descriptors
        .iter()
        .map(|descriptor| Prompt {
            name: descriptor.name.clone(),
            title: None,
            description: Some(descriptor.description.clone()),
            arguments: Some(
                descriptor
                    .arguments
                    .iter()
                    .map(|arg| PromptArgument {
                        name: arg.name.clone(),
                        title: None,
                        description: Some(arg.description.clone()),
                        required: Some(arg.required),
                    })
                    .collect(),
            ),
            icons: None,
            meta: None,
        })
        .collect();

    ListPromptsResult::with_all_items(prompts)
}

fn role(role: MessageRole) -> PromptMessageRole {
    match role {
        MessageRole::User => PromptMessageRole::User,
        MessageRole::Assistant => PromptMessageRole::Assistant,
    }
}
