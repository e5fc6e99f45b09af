//! Hulpfuncties voor het converteren van `Value`-types naar de typen
//! waarmee de componenten rekenen.

use crate::geom::Mat4;
use crate::graph::value::{Matrix, Value};

use super::ComponentError;

pub fn coerce_number(value: &Value, context: &str) -> Result<f64, ComponentError> {
    try_coerce_number(value).ok_or_else(|| {
        ComponentError::new(format!(
            "{} verwacht een getal, kreeg {}",
            context,
            value.kind()
        ))
    })
}

fn try_coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => Some(*number),
        Value::Boolean(boolean) => Some(if *boolean { 1.0 } else { 0.0 }),
        Value::Text(text) => text.parse().ok(),
        Value::List(values) if values.len() == 1 => values.first().and_then(try_coerce_number),
        _ => None,
    }
}

/// Coercet naar een geheel getal. Waarden die niet (bijna) geheel zijn
/// worden geweigerd in plaats van stilzwijgend afgerond.
pub fn coerce_integer(value: &Value, context: &str) -> Result<i64, ComponentError> {
    let number = coerce_number(value, context)?;
    if !number.is_finite() {
        return Err(ComponentError::new(format!(
            "{} verwacht een geheel getal, kreeg {}",
            context, number
        )));
    }
    let rounded = number.round();
    if (number - rounded).abs() > 1e-6 {
        return Err(ComponentError::new(format!(
            "{} verwacht een geheel getal, kreeg {}",
            context, number
        )));
    }
    Ok(rounded as i64)
}

/// Coercet naar een 3D-vector: een `Vector`, een `Point` of een lijst van
/// drie getallen.
pub fn coerce_vector(value: &Value, context: &str) -> Result<[f64; 3], ComponentError> {
    match value {
        Value::Vector(vector) => Ok(*vector),
        Value::Point(point) => Ok(*point),
        Value::List(values) if values.len() == 1 => coerce_vector(&values[0], context),
        Value::List(values) if values.len() == 3 => {
            let x = coerce_number(&values[0], context)?;
            let y = coerce_number(&values[1], context)?;
            let z = coerce_number(&values[2], context)?;
            Ok([x, y, z])
        }
        other => Err(ComponentError::new(format!(
            "{} verwacht een vector, kreeg {}",
            context,
            other.kind()
        ))),
    }
}

/// Coercet naar een homogene 4×4-matrix: een `Matrix` met de juiste
/// afmetingen, een platte lijst van zestien getallen of vier rijlijsten
/// van elk vier getallen.
pub fn coerce_mat4(value: &Value, context: &str) -> Result<Mat4, ComponentError> {
    match value {
        Value::Matrix(matrix) => mat4_from_matrix(matrix, context),
        Value::List(values) if values.len() == 1 => coerce_mat4(&values[0], context),
        Value::List(_) => {
            let numbers = collect_numbers(value);
            if numbers.len() == 16 {
                let mut rows = [[0.0; 4]; 4];
                for (index, number) in numbers.iter().enumerate() {
                    rows[index / 4][index % 4] = *number;
                }
                Ok(Mat4::from_rows(rows))
            } else {
                Err(ComponentError::new(format!(
                    "{} verwacht 16 matrixwaarden, kreeg {}",
                    context,
                    numbers.len()
                )))
            }
        }
        other => Err(ComponentError::new(format!(
            "{} verwacht een 4×4-matrix, kreeg {}",
            context,
            other.kind()
        ))),
    }
}

fn mat4_from_matrix(matrix: &Matrix, context: &str) -> Result<Mat4, ComponentError> {
    if matrix.rows != 4 || matrix.columns != 4 {
        return Err(ComponentError::new(format!(
            "{} verwacht een 4×4-matrix, kreeg {}×{}",
            context, matrix.rows, matrix.columns
        )));
    }
    let mut rows = [[0.0; 4]; 4];
    for r in 0..4 {
        for c in 0..4 {
            rows[r][c] = matrix.values[r * 4 + c];
        }
    }
    Ok(Mat4::from_rows(rows))
}

/// Zet een [`Mat4`] om naar het `Matrix`-uitwisselingsformaat.
#[must_use]
pub fn mat4_to_matrix(matrix: &Mat4) -> Matrix {
    let mut values = Vec::with_capacity(16);
    for row in matrix.rows() {
        values.extend_from_slice(row);
    }
    Matrix {
        rows: 4,
        columns: 4,
        values,
    }
}

fn collect_numbers(value: &Value) -> Vec<f64> {
    let mut result = Vec::new();
    collect_numbers_inner(value, &mut result);
    result
}

fn collect_numbers_inner(value: &Value, result: &mut Vec<f64>) {
    match value {
        Value::Number(number) => result.push(*number),
        Value::Boolean(boolean) => result.push(if *boolean { 1.0 } else { 0.0 }),
        Value::Matrix(matrix) => result.extend(matrix.values.iter().copied()),
        Value::List(values) => {
            for entry in values {
                collect_numbers_inner(entry, result);
            }
        }
        _ => {}
    }
}
