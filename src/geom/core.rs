// ─────────────────────────────────────────────────────────────────────────────
// Vec3
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a Vec3 from an array.
    #[must_use]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to an array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub const fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[must_use]
    pub const fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[must_use]
    pub const fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len.is_finite() && len > 1e-12 {
            Some(Self::new(self.x / len, self.y / len, self.z / len))
        } else {
            None
        }
    }

    /// An arbitrary unit vector perpendicular to `self`. Picks the axis
    /// with the smallest component to keep the cross product well
    /// conditioned.
    #[must_use]
    pub fn orthogonal(self) -> Self {
        let candidate = if self.x.abs() < self.y.abs() && self.x.abs() < self.z.abs() {
            Self::new(0.0, -self.z, self.y)
        } else if self.y.abs() < self.z.abs() {
            Self::new(-self.z, 0.0, self.x)
        } else {
            Self::new(-self.y, self.x, 0.0)
        };
        candidate.normalized().unwrap_or(Self::Z)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mat4
// ─────────────────────────────────────────────────────────────────────────────

/// Pivot tolerance for the Gauss-Jordan elimination in [`Mat4::inverse`].
const INVERSE_TOLERANCE: f64 = 1e-12;

/// A general homogeneous 4×4 matrix in the row-vector convention:
/// `v' = v * M`, translation stored in the fourth row. Products read
/// left to right, the leftmost factor applying first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    m: [[f64; 4]; 4],
}

impl Mat4 {
    #[must_use]
    pub const fn identity() -> Self {
        Self::diagonal(1.0, 1.0, 1.0, 1.0)
    }

    #[must_use]
    pub const fn from_rows(m: [[f64; 4]; 4]) -> Self {
        Self { m }
    }

    #[must_use]
    pub const fn rows(&self) -> &[[f64; 4]; 4] {
        &self.m
    }

    /// A diagonal matrix. `diagonal(-1, 1, 1, 1)` negates the X axis.
    #[must_use]
    pub const fn diagonal(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            m: [
                [x, 0.0, 0.0, 0.0],
                [0.0, y, 0.0, 0.0],
                [0.0, 0.0, z, 0.0],
                [0.0, 0.0, 0.0, w],
            ],
        }
    }

    /// Matrix product `self * rhs`. In the row-vector convention `self`
    /// is applied first.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut result = [[0.0; 4]; 4];
        for (r, row) in result.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[r][k] * rhs.m[k][c]).sum();
            }
        }
        Self { m: result }
    }

    /// The translation component (fourth row).
    #[must_use]
    pub const fn translation(&self) -> Vec3 {
        Vec3::new(self.m[3][0], self.m[3][1], self.m[3][2])
    }

    /// A copy of `self` with the translation row replaced.
    #[must_use]
    pub const fn with_translation(&self, translation: Vec3) -> Self {
        let mut m = self.m;
        m[3][0] = translation.x;
        m[3][1] = translation.y;
        m[3][2] = translation.z;
        Self { m }
    }

    /// The rotation component of the basis, with scale, shear and
    /// translation removed. The basis rows are orthonormalized via
    /// Gram-Schmidt; handedness is preserved. Returns `None` when the
    /// basis is degenerate.
    #[must_use]
    pub fn rotation_component(&self) -> Option<Self> {
        let x_raw = Vec3::new(self.m[0][0], self.m[0][1], self.m[0][2]);
        let y_raw = Vec3::new(self.m[1][0], self.m[1][1], self.m[1][2]);
        let z_raw = Vec3::new(self.m[2][0], self.m[2][1], self.m[2][2]);
        let det = x_raw.dot(y_raw.cross(z_raw));
        if !det.is_finite() || det.abs() <= INVERSE_TOLERANCE {
            return None;
        }

        let x = x_raw.normalized()?;
        let projection = x.dot(y_raw);
        let y = Vec3::new(
            y_raw.x - projection * x.x,
            y_raw.y - projection * x.y,
            y_raw.z - projection * x.z,
        )
        .normalized()?;
        let z = x.cross(y);
        let z = if det < 0.0 {
            Vec3::new(-z.x, -z.y, -z.z)
        } else {
            z
        };

        Some(Self::from_rows([
            [x.x, x.y, x.z, 0.0],
            [y.x, y.y, y.z, 0.0],
            [z.x, z.y, z.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Invert the matrix via Gauss-Jordan elimination with partial
    /// pivoting. Returns `None` when the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let mut augmented = [[0.0; 8]; 4];
        for r in 0..4 {
            augmented[r][..4].copy_from_slice(&self.m[r]);
            augmented[r][4 + r] = 1.0;
        }

        for col in 0..4 {
            let mut pivot_row = col;
            let mut pivot_value = augmented[pivot_row][col].abs();
            for r in (col + 1)..4 {
                let value = augmented[r][col].abs();
                if value > pivot_value {
                    pivot_value = value;
                    pivot_row = r;
                }
            }
            if pivot_value <= INVERSE_TOLERANCE {
                return None;
            }
            if pivot_row != col {
                augmented.swap(col, pivot_row);
            }
            let pivot = augmented[col][col];
            for c in 0..8 {
                augmented[col][c] /= pivot;
            }
            for r in 0..4 {
                if r == col {
                    continue;
                }
                let factor = augmented[r][col];
                if factor == 0.0 {
                    continue;
                }
                for c in 0..8 {
                    augmented[r][c] -= factor * augmented[col][c];
                }
                augmented[r][col] = 0.0;
            }
        }

        let mut result = [[0.0; 4]; 4];
        for r in 0..4 {
            result[r].copy_from_slice(&augmented[r][4..]);
        }
        Some(Self { m: result })
    }

    /// The shortest-arc rotation taking unit vector `from` onto unit
    /// vector `to`, as a pure rotation matrix. Built from the half-angle
    /// quaternion `(1 + from·to, from×to)`, which stays stable near 0°.
    /// The anti-parallel case degenerates to a 180° turn about an
    /// arbitrary axis perpendicular to `from`.
    #[must_use]
    pub fn rotation_between(from: Vec3, to: Vec3) -> Self {
        let dot = from.dot(to);
        let (w, axis) = if dot < -1.0 + 1e-9 {
            (0.0, from.orthogonal())
        } else {
            (1.0 + dot, from.cross(to))
        };

        let norm = (w * w + axis.length_squared()).sqrt();
        let qw = w / norm;
        let qx = axis.x / norm;
        let qy = axis.y / norm;
        let qz = axis.z / norm;

        Self {
            m: [
                [
                    1.0 - 2.0 * (qy * qy + qz * qz),
                    2.0 * (qx * qy + qw * qz),
                    2.0 * (qx * qz - qw * qy),
                    0.0,
                ],
                [
                    2.0 * (qx * qy - qw * qz),
                    1.0 - 2.0 * (qx * qx + qz * qz),
                    2.0 * (qy * qz + qw * qx),
                    0.0,
                ],
                [
                    2.0 * (qx * qz + qw * qy),
                    2.0 * (qy * qz - qw * qx),
                    1.0 - 2.0 * (qx * qx + qy * qy),
                    0.0,
                ],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|value| value.is_finite())
    }
}
