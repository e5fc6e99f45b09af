//! Definitie van een evaluatienode en zijn attribuutopslag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// Identifier voor een node binnen de host-applicatie.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Ord, PartialOrd)]
pub struct NodeId(pub usize);

impl NodeId {
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }
}

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

/// Waarde die meta-informatie over een node beschrijft (bv. UI hints).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetaValue {
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Text(String),
    List(Vec<MetaValue>),
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Alias voor een verzameling meta-informatie.
pub type MetaMap = BTreeMap<String, MetaValue>;

/// Node representatie. De node bewaart expliciet gezette attribuutwaarden;
/// pinnen zonder waarde vallen bij evaluatie terug op de standaardwaarde
/// uit het componentschema.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Unieke identifier binnen de host.
    pub id: NodeId,
    /// Het type component (GUID) dat deze node representeert.
    pub guid: Option<String>,
    /// Volledige naam van het componenttype.
    pub name: Option<String>,
    /// Nickname/afkorting indien beschikbaar.
    pub nickname: Option<String>,
    /// Expliciet gezette ingangswaarden, per pinnaam.
    pub inputs: BTreeMap<String, Value>,
    /// Uitgangswaarden, per pinnaam. Alleen de evaluator schrijft hier.
    pub outputs: BTreeMap<String, Value>,
    /// Verdere metadata zoals UI hints.
    pub meta: MetaMap,
}

impl Node {
    /// Maak een nieuwe node met een meegegeven identifier.
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Sla een input-waarde op.
    pub fn set_input<S: Into<String>>(&mut self, pin: S, value: Value) {
        self.inputs.insert(pin.into(), value);
    }

    /// Haal een verwijzing naar een input op.
    pub fn input(&self, pin: &str) -> Option<&Value> {
        self.inputs.get(pin)
    }

    /// Sla een output-waarde op.
    pub fn set_output<S: Into<String>>(&mut self, pin: S, value: Value) {
        self.outputs.insert(pin.into(), value);
    }

    /// Haal een output op.
    pub fn output(&self, pin: &str) -> Option<&Value> {
        self.outputs.get(pin)
    }

    /// Bewaar meta-informatie bij de node.
    pub fn insert_meta<S: Into<String>, V: Into<MetaValue>>(&mut self, key: S, value: V) {
        self.meta.insert(key.into(), value.into());
    }

    /// Haal een meta-item op.
    pub fn meta(&self, key: &str) -> Option<&MetaValue> {
        self.meta.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::{MetaValue, Node, NodeId};
    use crate::graph::value::Value;

    #[test]
    fn store_and_retrieve_inputs_outputs() {
        let mut node = Node::new(NodeId::new(1));
        node.set_input("A", Value::Number(1.0));
        node.set_output("R", Value::Number(2.0));

        assert!(matches!(
            node.input("A"),
            Some(Value::Number(value)) if (value - 1.0).abs() < f64::EPSILON
        ));
        assert!(matches!(
            node.output("R"),
            Some(Value::Number(value)) if (value - 2.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn meta_information_roundtrip() {
        let mut node = Node::default();
        node.insert_meta("min", 0.0);
        node.insert_meta("label", "Example");

        assert!(
            matches!(node.meta("min"), Some(MetaValue::Number(v)) if (*v - 0.0).abs() < f64::EPSILON)
        );
        assert!(matches!(node.meta("label"), Some(MetaValue::Text(text)) if text == "Example"));
    }

    #[test]
    fn missing_pins_are_absent_not_defaulted() {
        let node = Node::new(NodeId::new(0));
        assert!(node.input("matrixIn").is_none());
        assert!(node.output("outputMatrix").is_none());
    }
}
