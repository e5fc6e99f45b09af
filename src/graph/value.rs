//! Basis Value-enum waarin attribuutwaarden en evaluatieresultaten worden
//! opgeslagen.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Beschikbare waardetypes binnen de evaluator. De host serialiseert deze
/// waarden zelf wanneer attributen bewaard moeten blijven; de engine legt
/// alleen de vorm vast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Een enkele numerieke waarde.
    Number(f64),
    /// Een booleaanse waarde.
    Boolean(bool),
    /// Een tekstwaarde.
    Text(String),
    /// Een 3D-punt.
    Point([f64; 3]),
    /// Een 3D-vector.
    Vector([f64; 3]),
    /// Een matrix van numerieke waarden.
    Matrix(Matrix),
    /// Een lijst van waarden.
    List(Vec<Value>),
}

impl Value {
    /// Geeft de variantnaam terug. Wordt gebruikt in foutmeldingen.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Text(_) => ValueKind::Text,
            Self::Point(_) => ValueKind::Point,
            Self::Vector(_) => ValueKind::Vector,
            Self::Matrix(_) => ValueKind::Matrix,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Verwacht een `Number` en retourneert de f64-waarde.
    pub fn expect_number(&self) -> Result<f64, ValueError> {
        match self {
            Self::Number(value) => Ok(*value),
            _ => Err(ValueError::type_mismatch("Number", self.kind())),
        }
    }

    /// Verwacht een `Vector` en retourneert de componenten.
    pub fn expect_vector(&self) -> Result<[f64; 3], ValueError> {
        match self {
            Self::Vector(vector) => Ok(*vector),
            _ => Err(ValueError::type_mismatch("Vector", self.kind())),
        }
    }

    /// Verwacht een `Matrix` en retourneert een verwijzing.
    pub fn expect_matrix(&self) -> Result<&Matrix, ValueError> {
        match self {
            Self::Matrix(matrix) => Ok(matrix),
            _ => Err(ValueError::type_mismatch("Matrix", self.kind())),
        }
    }

    /// Verwacht een lijst en geeft een slice terug.
    pub fn expect_list(&self) -> Result<&[Value], ValueError> {
        match self {
            Self::List(values) => Ok(values),
            _ => Err(ValueError::type_mismatch("List", self.kind())),
        }
    }
}

/// Typefout voor wanneer een `Value` naar het verkeerde type wordt
/// geconverteerd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueError {
    expected: &'static str,
    found: ValueKind,
}

impl ValueError {
    #[must_use]
    pub fn type_mismatch(expected: &'static str, found: ValueKind) -> Self {
        Self { expected, found }
    }

    /// Hulptoegang voor tests en foutafhandeling.
    #[must_use]
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    #[must_use]
    pub fn found(&self) -> ValueKind {
        self.found
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "verwachtte type `{}` maar kreeg `{}`",
            self.expected, self.found
        )
    }
}

impl std::error::Error for ValueError {}

/// Beschrijft het soort `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Boolean,
    Text,
    Point,
    Vector,
    Matrix,
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Text => "Text",
            Self::Point => "Point",
            Self::Vector => "Vector",
            Self::Matrix => "Matrix",
            Self::List => "List",
        };
        f.write_str(name)
    }
}

/// Een eenvoudige matrixstructuur, rij-gewijs opgeslagen. Dit is het
/// uitwisselingsformaat richting de host; rekenwerk gebeurt op
/// [`crate::geom::Mat4`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub columns: usize,
    pub values: Vec<f64>,
}

impl Matrix {
    /// Maakt een matrix aan wanneer de afmetingen en waarden overeenkomen.
    #[must_use]
    pub fn new(rows: usize, columns: usize, values: Vec<f64>) -> Option<Self> {
        if rows == 0 || columns == 0 || values.len() != rows * columns {
            return None;
        }
        Some(Self {
            rows,
            columns,
            values,
        })
    }

    /// Een vierkante identiteitsmatrix. Net als bij [`Matrix::new`] moet
    /// `size` minstens 1 zijn.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        debug_assert!(size > 0, "identiteitsmatrix vereist minstens één rij");
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            values[i * size + i] = 1.0;
        }
        Self {
            rows: size,
            columns: size,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Matrix, Value, ValueError, ValueKind};

    #[test]
    fn expect_number_accepts_number() {
        let value = Value::Number(42.0);
        assert_eq!(value.expect_number().unwrap(), 42.0);
    }

    #[test]
    fn expect_number_rejects_wrong_type() {
        let value = Value::Point([0.0, 0.0, 0.0]);
        let err = value.expect_number().unwrap_err();
        assert_eq!(err.expected(), "Number");
        assert_eq!(err.found(), ValueKind::Point);
    }

    #[test]
    fn expect_matrix_returns_reference() {
        let matrix = Matrix::identity(4);
        let value = Value::Matrix(matrix.clone());
        assert_eq!(value.expect_matrix().unwrap(), &matrix);
    }

    #[test]
    fn list_expectation_requires_list() {
        let value = Value::List(vec![Value::Number(1.0)]);
        assert_eq!(value.expect_list().unwrap().len(), 1);

        let non_list = Value::Number(3.0);
        assert!(matches!(non_list.expect_list(), Err(ValueError { .. })));
    }

    #[test]
    fn matrix_new_validates_dimensions() {
        assert!(Matrix::new(2, 2, vec![1.0, 0.0, 0.0, 1.0]).is_some());
        assert!(Matrix::new(2, 2, vec![1.0]).is_none());
        assert!(Matrix::new(0, 4, Vec::new()).is_none());
    }

    #[test]
    #[should_panic(expected = "minstens één rij")]
    fn identity_rejects_a_zero_size() {
        let _ = Matrix::identity(0);
    }

    #[test]
    fn identity_has_unit_diagonal() {
        let matrix = Matrix::identity(4);
        for r in 0..4 {
            for c in 0..4 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_eq!(matrix.values[r * 4 + c], expected);
            }
        }
    }

    #[test]
    fn value_roundtrips_through_serde() {
        let value = Value::List(vec![
            Value::Matrix(Matrix::identity(4)),
            Value::Vector([1.0, 0.0, 0.0]),
            Value::Number(2.0),
        ]);
        let json = serde_json::to_string(&value).expect("serialize");
        let parsed: Value = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, value);
    }
}
