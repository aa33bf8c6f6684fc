//! Configuration document assembly.
//!
//! Fragments produced by the resolver are folded into a single document.
//! Section order in the serialized output is fixed by [`ConfigSection`]
//! precedence, never by the order fragments arrive, so the final document is
//! byte-deterministic no matter which concurrent lookup finishes first.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Target section of the client configuration. The derived `Ord` fixes the
/// serialization precedence: `Auth` before `Api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigSection {
    Auth,
    Api,
}

impl ConfigSection {
    /// Key the section serializes under, as the client bootstrap expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSection::Auth => "Auth",
            ConfigSection::Api => "API",
        }
    }
}

/// Key/value contribution of a single resolved resource.
#[derive(Debug, Clone)]
pub struct ConfigFragment {
    pub section: ConfigSection,
    pub values: Vec<(String, String)>,
}

impl ConfigFragment {
    pub fn new<K, V>(section: ConfigSection, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            section,
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The merged client configuration. Built once per pipeline run by folding
/// the fragment sequence; keys within a section merge last-write-wins (the
/// known rule set contributes disjoint keys per resource type, so this only
/// matters when two resources of the same type both set a key).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: BTreeMap<ConfigSection, BTreeMap<String, String>>,
}

impl ConfigDocument {
    pub fn from_fragments(fragments: impl IntoIterator<Item = ConfigFragment>) -> Self {
        fragments
            .into_iter()
            .fold(Self::default(), |doc, fragment| doc.merge(fragment))
    }

    /// Associative merge of one fragment into the document.
    pub fn merge(mut self, fragment: ConfigFragment) -> Self {
        let section = self.sections.entry(fragment.section).or_default();
        for (key, value) in fragment.values {
            section.insert(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, section: ConfigSection, key: &str) -> Option<&str> {
        self.sections
            .get(&section)
            .and_then(|values| values.get(key))
            .map(String::as_str)
    }

    /// Pretty-printed JSON, with a trailing newline for diff-friendliness.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

impl Serialize for ConfigDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (section, values) in &self.sections {
            map.serialize_entry(section.as_str(), values)?;
        }
        map.end()
    }
}
