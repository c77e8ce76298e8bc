//! Ordered, URI-indexed store of resource descriptors.

use std::collections::HashMap;

use crate::models::resource::ResourceDescriptor;
use crate::{AppError, Result};

/// Immutable manifest of servable resources.
///
/// The descriptor vector is the source of truth for listing order; the
/// URI index only accelerates lookups.
#[derive(Debug, Clone, Default)]
pub struct ManifestStore {
    descriptors: Vec<ResourceDescriptor>,
    by_uri: HashMap<String, usize>,
}

impl ManifestStore {
    /// Build a manifest from descriptors in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DuplicateUri` if two descriptors share a URI.
    pub fn new(descriptors: Vec<ResourceDescriptor>) -> Result<Self> {
        let mut by_uri = HashMap::with_capacity(descriptors.len());
        for (index, descriptor) in descriptors.iter().enumerate() {
            if by_uri.insert(descriptor.uri.clone(), index).is_some() {
                return Err(AppError::DuplicateUri(descriptor.uri.clone()));
            }
        }
        Ok(Self {
            descriptors,
            by_uri,
        })
    }

    /// All descriptors in insertion order.
    #[must_use]
    pub fn list_all(&self) -> &[ResourceDescriptor] {
        &self.descriptors
    }

    /// Look up a descriptor by its exact URI.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no descriptor has this URI.
    pub fn find_by_uri(&self, uri: &str) -> Result<&ResourceDescriptor> {
        self.by_uri
            .get(uri)
            .map(|&index| &self.descriptors[index])
            .ok_or_else(|| AppError::NotFound(format!("resource '{uri}'")))
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the manifest has no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
