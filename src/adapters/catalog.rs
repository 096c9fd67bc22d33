use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::model::{TimeUnit, MESSAGE_DOMAIN};
use crate::domain::ports::MessageLookup;
use crate::utils::error::LookupError;

/// A message pattern held by the catalog.
///
/// `Plural` selects `one` when the `%count%` parameter equals 1 and
/// `other` for every other count; anything richer than that two-way split
/// belongs in a custom `MessageLookup` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessagePattern {
    Simple(String),
    Plural { one: String, other: String },
}

/// In-memory `MessageLookup` backed by per-locale message tables.
///
/// Ships the thirteen English diff messages under the `"en"` locale and
/// answers for the `"time"` domain. Explicit locales must match a
/// registered table exactly; a `None` locale falls back to the default.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    domain: String,
    default_locale: String,
    tables: HashMap<String, HashMap<String, MessagePattern>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        let mut tables = HashMap::new();
        tables.insert("en".to_string(), english_messages());
        Self {
            domain: MESSAGE_DOMAIN.to_string(),
            default_locale: "en".to_string(),
            tables,
        }
    }

    /// A catalog with no preloaded messages.
    pub fn empty() -> Self {
        Self {
            domain: MESSAGE_DOMAIN.to_string(),
            default_locale: "en".to_string(),
            tables: HashMap::new(),
        }
    }

    pub fn with_default_locale(mut self, locale: &str) -> Self {
        self.default_locale = locale.to_string();
        self
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    /// Registers a message pattern for the given locale and key,
    /// replacing any previous one.
    pub fn insert(&mut self, locale: &str, key: &str, pattern: MessagePattern) {
        self.tables
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), pattern);
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageLookup for StaticCatalog {
    fn lookup(
        &self,
        key: &str,
        params: &HashMap<String, Value>,
        domain: &str,
        locale: Option<&str>,
    ) -> Result<String, LookupError> {
        if domain != self.domain {
            tracing::warn!("no messages registered for domain '{}'", domain);
            return Err(LookupError::MissingKeyError {
                key: key.to_string(),
                domain: domain.to_string(),
            });
        }

        let locale = locale.unwrap_or(&self.default_locale);
        let table = self.tables.get(locale).ok_or_else(|| {
            tracing::warn!("no message catalog for locale '{}'", locale);
            LookupError::MissingLocaleError {
                locale: locale.to_string(),
            }
        })?;

        let pattern = table.get(key).ok_or_else(|| {
            tracing::warn!("no message for key '{}' in locale '{}'", key, locale);
            LookupError::MissingKeyError {
                key: key.to_string(),
                domain: domain.to_string(),
            }
        })?;

        let template = match pattern {
            MessagePattern::Simple(template) => template,
            MessagePattern::Plural { one, other } => {
                if count_param(params) == Some(1) {
                    one
                } else {
                    other
                }
            }
        };

        Ok(substitute(template, params))
    }
}

fn count_param(params: &HashMap<String, Value>) -> Option<i64> {
    params.get("%count%").and_then(|value| value.as_i64())
}

/// Replaces each parameter name with its rendered value. Parameter names
/// are literal placeholders (`%count%` stays `%count%` in the template).
fn substitute(template: &str, params: &HashMap<String, Value>) -> String {
    let mut message = template.to_string();
    for (placeholder, value) in params {
        let rendered = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        message = message.replace(placeholder, &rendered);
    }
    message
}

fn english_messages() -> HashMap<String, MessagePattern> {
    let mut messages = HashMap::new();
    messages.insert(
        "diff.empty".to_string(),
        MessagePattern::Simple("now".to_string()),
    );

    for unit in TimeUnit::DESCENDING {
        messages.insert(
            format!("diff.ago.{}", unit),
            MessagePattern::Plural {
                one: format!("1 {} ago", unit),
                other: format!("%count% {}s ago", unit),
            },
        );
        messages.insert(
            format!("diff.in.{}", unit),
            MessagePattern::Plural {
                one: format!("in 1 {}", unit),
                other: format!("in %count% {}s", unit),
            },
        );
    }

    messages
}
