//! Implementatie van het "Mirror Matrix" component: spiegelt een
//! wereldruimte-transform over een vlak dat door een referentiematrix en
//! een vlaknormaal wordt beschreven.

use std::collections::BTreeMap;

use crate::geom::{FlipAxis, Mat4, MirrorMode, Vec3, mirror_matrix};
use crate::graph::node::MetaMap;
use crate::graph::value::{Matrix, Value};

use super::coerce;
use super::{Component, ComponentError, ComponentResult, InputPin};

const PIN_MATRIX_IN: &str = "matrixIn";
const PIN_PLANE_MATRIX: &str = "planeMatrix";
const PIN_MODE: &str = "mode";
const PIN_FLIP_AXIS: &str = "flipAxis";
const PIN_PLANE_NORMAL: &str = "planeNormal";

/// De outputpin is afgeleid en alleen door de evaluator beschrijfbaar.
pub const PIN_OUTPUT: &str = "outputMatrix";

/// Registratie-identiteit van het componenttype.
pub const GUID: &str = "{8f64c1e2-5b0a-4d39-9c47-21d3a6ef90b4}";
pub const NAMES: &[&str] = &["Mirror Matrix", "MirrorMatrix", "MirrorM"];

/// Het declaratieve inputschema, in de volgorde waarin de evaluator de
/// waarden aanlevert.
pub const INPUT_PINS: &[InputPin] = &[
    InputPin {
        pin: PIN_MATRIX_IN,
        default: default_matrix,
    },
    InputPin {
        pin: PIN_PLANE_MATRIX,
        default: default_matrix,
    },
    InputPin {
        pin: PIN_MODE,
        default: default_mode,
    },
    InputPin {
        pin: PIN_FLIP_AXIS,
        default: default_flip_axis,
    },
    InputPin {
        pin: PIN_PLANE_NORMAL,
        default: default_plane_normal,
    },
];

fn default_matrix() -> Value {
    Value::Matrix(Matrix::identity(4))
}

fn default_mode() -> Value {
    Value::Number(MirrorMode::Behavior.index() as f64)
}

fn default_flip_axis() -> Value {
    Value::Number(FlipAxis::None.index() as f64)
}

fn default_plane_normal() -> Value {
    Value::Vector([1.0, 0.0, 0.0])
}

/// Markerstruct voor het component.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComponentImpl;

impl Component for ComponentImpl {
    fn evaluate(&self, inputs: &[Value], _meta: &MetaMap) -> ComponentResult {
        let matrix_in = coerce_pin_mat4(inputs.first(), "Mirror Matrix matrixIn")?;
        let plane_matrix = coerce_pin_mat4(inputs.get(1), "Mirror Matrix planeMatrix")?;
        let mode = coerce_mode(inputs.get(2))?;
        let flip_axis = coerce_flip_axis(inputs.get(3))?;
        let plane_normal = coerce_pin_normal(inputs.get(4))?;

        let result = mirror_matrix(&matrix_in, &plane_matrix, plane_normal, mode, flip_axis)
            .map_err(|error| ComponentError::new(format!("Mirror Matrix: {error}")))?;

        let mut outputs = BTreeMap::new();
        outputs.insert(
            PIN_OUTPUT.to_owned(),
            Value::Matrix(coerce::mat4_to_matrix(&result)),
        );
        Ok(outputs)
    }
}

fn coerce_pin_mat4(value: Option<&Value>, context: &str) -> Result<Mat4, ComponentError> {
    match value {
        None => Ok(Mat4::identity()),
        Some(value) => coerce::coerce_mat4(value, context),
    }
}

fn coerce_mode(value: Option<&Value>) -> Result<MirrorMode, ComponentError> {
    let Some(value) = value else {
        return Ok(MirrorMode::Behavior);
    };
    let index = coerce::coerce_integer(value, "Mirror Matrix mode")?;
    MirrorMode::from_index(index).ok_or_else(|| {
        ComponentError::new(format!("Mirror Matrix mode buiten bereik: {index}"))
    })
}

fn coerce_flip_axis(value: Option<&Value>) -> Result<FlipAxis, ComponentError> {
    let Some(value) = value else {
        return Ok(FlipAxis::None);
    };
    let index = coerce::coerce_integer(value, "Mirror Matrix flipAxis")?;
    FlipAxis::from_index(index).ok_or_else(|| {
        ComponentError::new(format!("Mirror Matrix flipAxis buiten bereik: {index}"))
    })
}

fn coerce_pin_normal(value: Option<&Value>) -> Result<Vec3, ComponentError> {
    let normal = match value {
        None => [1.0, 0.0, 0.0],
        Some(value) => coerce::coerce_vector(value, "Mirror Matrix planeNormal")?,
    };
    Ok(Vec3::from_array(normal))
}

#[cfg(test)]
mod tests {
    use super::{Component, ComponentImpl, PIN_OUTPUT};
    use crate::graph::node::MetaMap;
    use crate::graph::value::{Matrix, Value};

    fn evaluate(inputs: &[Value]) -> Result<Matrix, String> {
        let outputs = ComponentImpl
            .evaluate(inputs, &MetaMap::new())
            .map_err(|error| error.to_string())?;
        match outputs.get(PIN_OUTPUT) {
            Some(Value::Matrix(matrix)) => Ok(matrix.clone()),
            other => panic!("expected matrix output, got {other:?}"),
        }
    }

    fn translation_matrix(x: f64, y: f64, z: f64) -> Value {
        let mut values = Matrix::identity(4).values;
        values[12] = x;
        values[13] = y;
        values[14] = z;
        Value::Matrix(Matrix::new(4, 4, values).unwrap())
    }

    #[test]
    fn reflect_mode_negates_x_for_identity_inputs() {
        let matrix = evaluate(&[
            Value::Matrix(Matrix::identity(4)),
            Value::Matrix(Matrix::identity(4)),
            Value::Number(2.0),
            Value::Number(0.0),
            Value::Vector([1.0, 0.0, 0.0]),
        ])
        .expect("reflect");

        let mut expected = Matrix::identity(4).values;
        expected[0] = -1.0;
        assert_eq!(matrix.values, expected);
    }

    #[test]
    fn translation_is_mirrored_across_the_plane() {
        // punt op x=3 gespiegeld over het YZ-vlak door de oorsprong
        let matrix = evaluate(&[
            translation_matrix(3.0, 2.0, 1.0),
            Value::Matrix(Matrix::identity(4)),
            Value::Number(2.0),
            Value::Number(0.0),
            Value::Vector([1.0, 0.0, 0.0]),
        ])
        .expect("reflect");

        assert!((matrix.values[12] + 3.0).abs() < 1e-12);
        assert!((matrix.values[13] - 2.0).abs() < 1e-12);
        assert!((matrix.values[14] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn plane_offset_shifts_the_mirror() {
        // vlak op x=2: spiegelbeeld van x=3 ligt op x=1
        let matrix = evaluate(&[
            translation_matrix(3.0, 0.0, 0.0),
            translation_matrix(2.0, 0.0, 0.0),
            Value::Number(2.0),
            Value::Number(0.0),
            Value::Vector([1.0, 0.0, 0.0]),
        ])
        .expect("reflect");

        assert!((matrix.values[12] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn missing_inputs_fall_back_to_defaults() {
        let matrix = evaluate(&[]).expect("defaults");
        // Behavior-mode over het identieke vlak levert de identiteit op
        assert_eq!(matrix, Matrix::identity(4));
    }

    #[test]
    fn out_of_range_mode_is_rejected() {
        let err = evaluate(&[
            Value::Matrix(Matrix::identity(4)),
            Value::Matrix(Matrix::identity(4)),
            Value::Number(3.0),
        ])
        .expect_err("mode 3 bestaat niet");
        assert!(err.contains("mode buiten bereik"));
    }

    #[test]
    fn out_of_range_flip_axis_is_rejected() {
        let err = evaluate(&[
            Value::Matrix(Matrix::identity(4)),
            Value::Matrix(Matrix::identity(4)),
            Value::Number(0.0),
            Value::Number(4.0),
        ])
        .expect_err("flipAxis 4 bestaat niet");
        assert!(err.contains("flipAxis buiten bereik"));
    }

    #[test]
    fn zero_normal_is_a_component_error() {
        let err = evaluate(&[
            Value::Matrix(Matrix::identity(4)),
            Value::Matrix(Matrix::identity(4)),
            Value::Number(2.0),
            Value::Number(0.0),
            Value::Vector([0.0, 0.0, 0.0]),
        ])
        .expect_err("nulvector wordt geweigerd");
        assert!(err.contains("zero length"));
    }

    #[test]
    fn matrices_can_arrive_as_lists() {
        let flat: Vec<Value> = Matrix::identity(4)
            .values
            .into_iter()
            .map(Value::Number)
            .collect();
        let matrix = evaluate(&[
            Value::List(flat),
            Value::Matrix(Matrix::identity(4)),
            Value::Number(2.0),
        ])
        .expect("lijstmatrix");

        let mut expected = Matrix::identity(4).values;
        expected[0] = -1.0;
        assert_eq!(matrix.values, expected);
    }
}
