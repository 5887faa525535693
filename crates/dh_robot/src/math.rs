//! Homogeneous-coordinate helpers on top of nalgebra.
//!
//! The transform pipeline works in 4-component homogeneous coordinates so
//! that translation composes by matrix multiplication. nalgebra provides the
//! fixed-size vector and matrix arithmetic; this module adds the conversions
//! between 3D points and their homogeneous form, with an explicit policy for
//! the zero-weight case.

use nalgebra::{Vector3, Vector4};

use crate::{Error, Result};

/// The homogeneous origin `(0, 0, 0, 1)`.
///
/// Applying a base-to-effector transform to this point yields the end
/// effector's position in the base frame.
pub fn homogeneous_origin() -> Vector4<f64> {
    Vector4::new(0.0, 0.0, 0.0, 1.0)
}

/// Lift a 3-vector into homogeneous coordinates by appending a trailing `1`.
pub fn to_homogeneous(v: &Vector3<f64>) -> Vector4<f64> {
    Vector4::new(v.x, v.y, v.z, 1.0)
}

/// Project a homogeneous 4-vector back to 3D by dividing through the weight.
///
/// # Errors
///
/// Returns [`Error::DegenerateTransform`] when the weight component is zero.
/// A valid rigid transform applied to [`homogeneous_origin`] always keeps the
/// weight at `1`, so this is unreachable through the solver path, but the
/// behavior is defined rather than left as a NaN-producing division.
pub fn from_homogeneous(v: &Vector4<f64>) -> Result<Vector3<f64>> {
    if v.w == 0.0 {
        return Err(Error::DegenerateTransform);
    }
    Ok(Vector3::new(v.x / v.w, v.y / v.w, v.z / v.w))
}
