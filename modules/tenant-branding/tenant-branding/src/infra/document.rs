//! In-memory document model implementing the branding port.
//!
//! Mirrors the parts of a page the engine may touch: root and body
//! attributes, root CSS custom properties, title, logo slot, body
//! background and style elements. Used by the CLI and in tests.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tenant_branding_sdk::{
    BackgroundDirective, BrandingPlan, BrandingPort, LogoSource, MarkerDirective,
    StylesheetDirective,
};

/// A `<style>` element in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleElement {
    pub id: String,
    pub css: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InMemoryDocument {
    title: String,
    root_attributes: BTreeMap<String, String>,
    body_attributes: BTreeMap<String, String>,
    css_variables: BTreeMap<String, String>,
    body_background: Option<String>,
    logo: Option<LogoSource>,
    style_elements: Vec<StyleElement>,

    // Names written by the port, so they can be removed again.
    #[serde(skip)]
    managed_markers: BTreeSet<String>,
    #[serde(skip)]
    managed_variables: BTreeSet<String>,
    #[serde(skip)]
    managed_styles: BTreeSet<String>,
}

impl InMemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn body_attribute(&self, name: &str) -> Option<&str> {
        self.body_attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn css_variable(&self, name: &str) -> Option<&str> {
        self.css_variables.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.body_background.as_deref()
    }

    #[must_use]
    pub fn logo(&self) -> Option<&LogoSource> {
        self.logo.as_ref()
    }

    #[must_use]
    pub fn style_elements(&self) -> &[StyleElement] {
        &self.style_elements
    }

    #[must_use]
    pub fn style_element(&self, id: &str) -> Option<&StyleElement> {
        self.style_elements.iter().find(|s| s.id == id)
    }

    /// Simulates unrelated page code adding its own style element.
    pub fn insert_foreign_style(&mut self, id: impl Into<String>, css: impl Into<String>) {
        self.style_elements.push(StyleElement {
            id: id.into(),
            css: css.into(),
        });
    }

    /// True when any marker attribute is present on root or body.
    #[must_use]
    pub fn has_tenant_marker(&self) -> bool {
        self.managed_markers
            .iter()
            .any(|m| self.root_attributes.contains_key(m) || self.body_attributes.contains_key(m))
    }

    fn set_marker(&mut self, attribute: &str, slug: &str) {
        self.managed_markers.insert(attribute.to_owned());
        self.root_attributes.insert(attribute.to_owned(), slug.to_owned());
        self.body_attributes.insert(attribute.to_owned(), slug.to_owned());
    }

    fn clear_markers(&mut self) {
        for name in &self.managed_markers {
            self.root_attributes.remove(name);
            self.body_attributes.remove(name);
        }
    }

    fn clear_variables(&mut self) {
        for name in std::mem::take(&mut self.managed_variables) {
            self.css_variables.remove(&name);
        }
    }

    fn upsert_style(&mut self, id: &str, css: &str) {
        self.managed_styles.insert(id.to_owned());
        if let Some(existing) = self.style_elements.iter_mut().find(|s| s.id == id) {
            css.clone_into(&mut existing.css);
        } else {
            self.style_elements.push(StyleElement {
                id: id.to_owned(),
                css: css.to_owned(),
            });
        }
    }

    fn remove_style(&mut self, id: &str) {
        self.style_elements.retain(|s| s.id != id);
    }
}

impl BrandingPort for InMemoryDocument {
    fn apply_branding(&mut self, plan: &BrandingPlan) {
        self.clear_markers();
        if let MarkerDirective::Set(slug) = &plan.marker {
            self.set_marker(&plan.marker_attribute, slug);
        }

        self.clear_variables();
        for var in &plan.css_variables {
            self.managed_variables.insert(var.name.clone());
            self.css_variables.insert(var.name.clone(), var.value.clone());
        }

        if let Some(title) = &plan.title {
            title.clone_into(&mut self.title);
        }
        self.logo.clone_from(&plan.logo);

        match &plan.stylesheet {
            StylesheetDirective::Upsert { id, css } => self.upsert_style(id, css),
            StylesheetDirective::Remove { id } => self.remove_style(id),
        }

        self.body_background = match &plan.background {
            BackgroundDirective::Set(value) => Some(value.clone()),
            BackgroundDirective::Clear => None,
        };
    }

    fn clear_branding(&mut self) {
        self.clear_markers();
        self.clear_variables();
        for id in std::mem::take(&mut self.managed_styles) {
            self.remove_style(&id);
        }
        self.logo = None;
        self.body_background = None;
    }
}
