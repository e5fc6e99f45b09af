//! Evaluatie van een enkele node. De host bezit de afhankelijkheids-
//! administratie en roept [`evaluate_node`] aan zodra een input van een
//! node veranderd is; de engine rekent alleen de outputs opnieuw uit.

use crate::components::{ComponentError, ComponentRegistry};
use crate::graph::node::{Node, NodeId};

/// Fouttype voor evaluatieproblemen.
#[derive(Debug)]
pub enum EvaluationError {
    /// De node heeft geen bijbehorend component.
    ComponentNotFound {
        node_id: NodeId,
        guid: Option<String>,
        name: Option<String>,
        nickname: Option<String>,
    },
    /// Het component gaf een foutmelding tijdens evaluatie.
    ComponentFailed {
        node_id: NodeId,
        component: String,
        source: ComponentError,
    },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ComponentNotFound {
                node_id,
                guid,
                name,
                nickname,
            } => write!(
                f,
                "geen component gevonden voor node {} (guid={:?}, name={:?}, nickname={:?})",
                node_id.0, guid, name, nickname
            ),
            Self::ComponentFailed {
                node_id,
                component,
                source,
            } => write!(
                f,
                "component `{component}` (node {}) faalde: {}",
                node_id.0, source
            ),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ComponentFailed { source, .. } => Some(source),
            Self::ComponentNotFound { .. } => None,
        }
    }
}

/// Evalueert de node precies één keer: inputs worden in schemavolgorde
/// verzameld (expliciet gezette waarde, anders de standaardwaarde uit het
/// componentschema), het component wordt aangeroepen en de outputs worden
/// pas na een geslaagde evaluatie naar de node geschreven. Bij een fout
/// blijven de bestaande outputs onaangeroerd.
pub fn evaluate_node(
    node: &mut Node,
    registry: &ComponentRegistry,
) -> Result<(), EvaluationError> {
    let component = registry
        .resolve(
            node.guid.as_deref(),
            node.name.as_deref(),
            node.nickname.as_deref(),
        )
        .ok_or_else(|| EvaluationError::ComponentNotFound {
            node_id: node.id,
            guid: node.guid.clone(),
            name: node.name.clone(),
            nickname: node.nickname.clone(),
        })?;

    let pins = component.input_pins();
    let mut input_values = Vec::with_capacity(pins.len());
    for pin in pins {
        let value = node
            .input(pin.pin)
            .cloned()
            .unwrap_or_else(|| (pin.default)());
        input_values.push(value);
    }

    log::debug!(
        "evaluating component `{}` for node {}",
        component.name(),
        node.id.0
    );

    let outputs = component
        .evaluate(&input_values, &node.meta)
        .map_err(|error| EvaluationError::ComponentFailed {
            node_id: node.id,
            component: component.name().to_owned(),
            source: error,
        })?;

    for (pin, value) in outputs {
        node.set_output(pin, value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{EvaluationError, evaluate_node};
    use crate::components::ComponentRegistry;
    use crate::graph::node::{Node, NodeId};
    use crate::graph::value::{Matrix, Value};

    #[test]
    fn missing_component_yields_error() {
        let mut node = Node::new(NodeId::new(0));
        node.name = Some("Onbekend Component".to_owned());
        let registry = ComponentRegistry::default();

        let err = evaluate_node(&mut node, &registry).expect_err("component ontbreekt");
        match err {
            EvaluationError::ComponentNotFound {
                node_id: err_node, ..
            } => assert_eq!(err_node, NodeId::new(0)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn defaults_fill_unset_pins() {
        let mut node = Node::new(NodeId::new(1));
        node.name = Some("Mirror Matrix".to_owned());
        let registry = ComponentRegistry::default();

        evaluate_node(&mut node, &registry).expect("evalueert met standaardwaarden");
        let output = node.output("outputMatrix").expect("output aanwezig");
        let matrix = output.expect_matrix().expect("matrix output");
        assert_eq!((matrix.rows, matrix.columns), (4, 4));
        // Behavior mode over het identieke vlak levert de identiteit op
        assert_eq!(matrix, &Matrix::identity(4));
    }

    #[test]
    fn failed_evaluation_leaves_outputs_untouched() {
        let mut node = Node::new(NodeId::new(2));
        node.name = Some("Mirror Matrix".to_owned());
        let registry = ComponentRegistry::default();

        evaluate_node(&mut node, &registry).expect("eerste evaluatie");
        let before = node.outputs.clone();

        node.set_input("planeNormal", Value::Vector([0.0, 0.0, 0.0]));
        let err = evaluate_node(&mut node, &registry).expect_err("nulvector normal");
        assert!(matches!(err, EvaluationError::ComponentFailed { .. }));
        assert_eq!(node.outputs, before);
    }
}
