//! Name-indexed table of prompt descriptors.

use std::collections::HashMap;

use crate::models::prompt::{PromptArgs, PromptDescriptor, PromptRenderResult};
use crate::{AppError, Result};

/// Immutable table of prompts, listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PromptTable {
    descriptors: Vec<PromptDescriptor>,
    by_name: HashMap<String, usize>,
}

impl PromptTable {
    /// Build a table from descriptors in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DuplicatePrompt` if two descriptors share a name.
    pub fn new(descriptors: Vec<PromptDescriptor>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(descriptors.len());
        for (index, descriptor) in descriptors.iter().enumerate() {
            if by_name.insert(descriptor.name.clone(), index).is_some() {
                return Err(AppError::DuplicatePrompt(descriptor.name.clone()));
            }
        }
        Ok(Self {
            descriptors,
            by_name,
        })
    }

    /// All descriptors in insertion order.
    #[must_use]
    pub fn list_all(&self) -> &[PromptDescriptor] {
        &self.descriptors
    }

    /// Look up a prompt by name.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no prompt has this name.
    pub fn get(&self, name: &str) -> Result<&PromptDescriptor> {
        self.by_name
            .get(name)
            .map(|&index| &self.descriptors[index])
            .ok_or_else(|| AppError::NotFound(format!("prompt '{name}'")))
    }

    /// Render a prompt by name. Missing arguments never fail the render.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no prompt has this name.
    pub fn render(&self, name: &str, args: &PromptArgs) -> Result<PromptRenderResult> {
        Ok(self.get(name)?.render(args))
    }

    /// Number of prompts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the table has no prompts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
