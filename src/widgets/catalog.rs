//! Immutable widget catalog with id and template-URI lookups.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::lib::errors::CatalogError;

/// Hint strings surfaced to clients while a widget tool runs.
///
/// Pure pass-through metadata; the server never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WidgetHints {
    pub invoking: Option<String>,
    pub invoked: Option<String>,
    pub approval: Option<String>,
    pub success: Option<String>,
}

impl WidgetHints {
    pub fn is_empty(&self) -> bool {
        self.invoking.is_none()
            && self.invoked.is_none()
            && self.approval.is_none()
            && self.success.is_none()
    }

    /// Render the hints as the `openai/invocationStates` metadata value.
    pub fn invocation_states(&self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        Some(json!({
            "invoking": self.invoking,
            "invoked": self.invoked,
            "approval": self.approval,
            "success": self.success,
        }))
    }
}

/// One widget definition: static metadata plus the HTML template text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetRecord {
    /// Unique catalog key; doubles as the tool name on the wire.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Opaque URI identifying the renderable template; doubles as the resource URI.
    pub template_uri: String,
    pub html: String,
    /// Text returned as the first content block on successful invocation.
    pub response_text: String,
    #[serde(skip_serializing_if = "WidgetHints::is_empty")]
    pub hints: WidgetHints,
}

/// Read-only catalog of widget records, constructed once at startup.
///
/// Records keep insertion order; lookups are exact string matches. After
/// construction nothing mutates, so shared references are safe across
/// concurrent invocations without locking.
#[derive(Debug, Clone)]
pub struct WidgetCatalog {
    records: Vec<WidgetRecord>,
    by_id: HashMap<String, usize>,
}

impl WidgetCatalog {
    /// Build a catalog, rejecting empty and duplicate ids.
    ///
    /// Duplicates are a hard error at construction, never last-one-wins
    /// shadowing.
    pub fn new(records: Vec<WidgetRecord>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if by_id.insert(record.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self { records, by_id })
    }

    pub fn lookup_by_id(&self, id: &str) -> Result<&WidgetRecord, CatalogError> {
        self.by_id
            .get(id)
            .map(|index| &self.records[*index])
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    pub fn lookup_by_template_uri(&self, uri: &str) -> Result<&WidgetRecord, CatalogError> {
        self.records
            .iter()
            .find(|record| record.template_uri == uri)
            .ok_or_else(|| CatalogError::TemplateNotFound {
                uri: uri.to_string(),
            })
    }

    /// All records in insertion order; drives tool and resource registration.
    pub fn list_all(&self) -> &[WidgetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
