//! Component registry en evaluatie-logica.

use std::collections::HashMap;
use std::fmt;

use crate::graph::node::MetaMap;
use crate::graph::value::Value;

pub mod coerce;
pub mod transform_mirror;

/// Output-map van een component: pinnaam → waarde.
pub type OutputMap = std::collections::BTreeMap<String, Value>;

/// Fouttype voor component-evaluaties.
#[derive(Debug, Clone)]
pub struct ComponentError {
    message: String,
}

impl ComponentError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ComponentError {}

/// Resultaat van een component-executie.
pub type ComponentResult = Result<OutputMap, ComponentError>;

/// Trait die alle componentimplementaties dienen te implementeren.
pub trait Component {
    fn evaluate(&self, inputs: &[Value], meta: &MetaMap) -> ComponentResult;
}

/// Declaratie van een inputpin: naam plus de standaardwaarde die geldt
/// wanneer de host geen expliciete waarde heeft gezet. Het schema is een
/// compile-time constante per component; er is geen registratiestatus
/// tijdens runtime.
#[derive(Debug, Clone, Copy)]
pub struct InputPin {
    pub pin: &'static str,
    pub default: fn() -> Value,
}

/// Beschikbare componenttypen binnen de registry.
#[derive(Debug, Clone, Copy)]
pub enum ComponentKind {
    TransformMirror(transform_mirror::ComponentImpl),
}

impl ComponentKind {
    pub fn evaluate(&self, inputs: &[Value], meta: &MetaMap) -> ComponentResult {
        match self {
            Self::TransformMirror(component) => component.evaluate(inputs, meta),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::TransformMirror(_) => "Mirror Matrix",
        }
    }

    /// Het declaratieve inputschema van het component, in pinvolgorde.
    #[must_use]
    pub fn input_pins(&self) -> &'static [InputPin] {
        match self {
            Self::TransformMirror(_) => transform_mirror::INPUT_PINS,
        }
    }
}

/// Registry die componentimplementaties opzoekt op GUID of naam.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    by_guid: HashMap<String, ComponentKind>,
    by_name: HashMap<String, ComponentKind>,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        let mirror = ComponentKind::TransformMirror(transform_mirror::ComponentImpl);
        registry.register_guid(transform_mirror::GUID, mirror);
        registry.register_names(transform_mirror::NAMES, mirror);

        registry
    }
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_guid: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn register_guid(&mut self, guid: impl AsRef<str>, kind: ComponentKind) {
        let key = normalize_guid(guid.as_ref());
        self.by_guid.insert(key, kind);
    }

    pub fn register_names(&mut self, names: &[&str], kind: ComponentKind) {
        for name in names {
            let key = normalize_name(name);
            self.by_name.insert(key, kind);
        }
    }

    #[must_use]
    pub fn resolve(
        &self,
        guid: Option<&str>,
        name: Option<&str>,
        nickname: Option<&str>,
    ) -> Option<ComponentKind> {
        if let Some(guid) = guid {
            if let Some(component) = self.by_guid.get(&normalize_guid(guid)) {
                return Some(*component);
            }
        }

        if let Some(name) = name {
            if let Some(component) = self.by_name.get(&normalize_name(name)) {
                return Some(*component);
            }
        }

        if let Some(nickname) = nickname {
            if let Some(component) = self.by_name.get(&normalize_name(nickname)) {
                return Some(*component);
            }
        }

        None
    }
}

fn normalize_guid(guid: &str) -> String {
    guid.trim_matches(|c| c == '{' || c == '}').to_lowercase()
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
