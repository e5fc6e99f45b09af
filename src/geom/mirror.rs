use super::core::{Mat4, Vec3};

/// How the rotation and translation of the mirrored result are derived.
/// The indices are part of the host contract and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorMode {
    /// Full reflection with an extra X negation, so descendants evaluated
    /// under the result keep their hierarchical behavior. The negation is
    /// a host convention and is reproduced literally.
    Behavior,
    /// Mirrored position only; rotation and scale stay those of the input.
    Orientation,
    /// The true reflection of position, rotation and scale.
    Reflect,
}

impl MirrorMode {
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Behavior),
            1 => Some(Self::Orientation),
            2 => Some(Self::Reflect),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> i64 {
        match self {
            Self::Behavior => 0,
            Self::Orientation => 1,
            Self::Reflect => 2,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Behavior => "Behavior",
            Self::Orientation => "Orientation",
            Self::Reflect => "Reflect",
        }
    }
}

/// Optional 180° flip applied to the mirrored result, named after the
/// axis that stays fixed. Each variant negates the *other two* axes,
/// which composes to a proper rotation rather than a reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    None,
    X,
    Y,
    Z,
}

impl FlipAxis {
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::None),
            1 => Some(Self::X),
            2 => Some(Self::Y),
            3 => Some(Self::Z),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> i64 {
        match self {
            Self::None => 0,
            Self::X => 1,
            Self::Y => 2,
            Self::Z => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::X => "X Axis",
            Self::Y => "Y Axis",
            Self::Z => "Z Axis",
        }
    }

    /// The diagonal flip matrix for this axis.
    #[must_use]
    pub const fn matrix(self) -> Mat4 {
        match self {
            Self::None => Mat4::diagonal(1.0, 1.0, 1.0, 1.0),
            Self::X => Mat4::diagonal(1.0, -1.0, -1.0, 1.0),
            Self::Y => Mat4::diagonal(-1.0, 1.0, -1.0, 1.0),
            Self::Z => Mat4::diagonal(-1.0, -1.0, 1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MirrorError {
    #[error("plane normal has zero length")]
    InvalidNormal,
    #[error("plane transform is singular and cannot be inverted")]
    SingularPlaneTransform,
}

/// Mirror a world-space transform across the plane anchored at `plane`'s
/// origin and oriented by `normal`.
///
/// All products use the row-vector convention of [`Mat4`]. The plane
/// frame combines the plane's rotation component and translation with a
/// rotation taking the X axis onto the normalized `normal`, applied in
/// the plane's own object space; scale and shear on the plane cancel
/// in the conjugation and never reach the result. The base reflection
/// is `input * frame⁻¹ * neg_x * frame` (into the plane frame, reflect
/// across its local X=0 plane, and back out). The mode adjustment and
/// the flip matrix are applied afterwards.
///
/// Pure and reentrant: no state is shared between calls, and a failure
/// never yields a partial matrix.
pub fn mirror_matrix(
    input: &Mat4,
    plane: &Mat4,
    normal: Vec3,
    mode: MirrorMode,
    flip: FlipAxis,
) -> Result<Mat4, MirrorError> {
    let normal = normal
        .normalized()
        .filter(|n| n.is_finite())
        .ok_or(MirrorError::InvalidNormal)?;

    // establish the mirror plane orientation
    let rotation = Mat4::rotation_between(Vec3::X, normal);
    let plane_rotation = plane
        .rotation_component()
        .ok_or(MirrorError::SingularPlaneTransform)?;
    let frame = rotation
        .mul(&plane_rotation)
        .with_translation(plane.translation());
    let frame_inverse = frame
        .inverse()
        .ok_or(MirrorError::SingularPlaneTransform)?;

    let neg_x = Mat4::diagonal(-1.0, 1.0, 1.0, 1.0);
    let reflect = input.mul(&frame_inverse).mul(&neg_x).mul(&frame);

    let mirrored = match mode {
        MirrorMode::Reflect => reflect,
        MirrorMode::Behavior => neg_x.mul(&reflect),
        MirrorMode::Orientation => input.with_translation(reflect.translation()),
    };

    Ok(flip.matrix().mul(&mirrored))
}
