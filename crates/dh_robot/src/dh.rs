//! Denavit-Hartenberg joint parameters and the per-joint transform builder.
//!
//! Uses the standard (distal) DH convention: the transform from link frame
//! `i-1` to link frame `i` is a rotation by `theta` about the previous z
//! axis, a translation `d` along it, a translation `a` along the new x axis,
//! and a rotation by `alpha` about that x axis.
//!
//! Angle units follow the reference robot's convention: `theta` is stored in
//! degrees (it arrives from the operator-facing layer that way) while
//! `alpha` is stored in radians (it is fixed geometry, entered once). The
//! degree-to-radian conversion for `theta` happens exactly once, inside
//! [`DhParameters::transform`].

use nalgebra::Matrix4;

/// The four Denavit-Hartenberg parameters of one joint.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DhParameters {
    /// Joint angle in **degrees**. The only parameter expected to change
    /// between forward-kinematics queries.
    pub theta: f64,

    /// Link twist in **radians**. Fixed geometry.
    pub alpha: f64,

    /// Link length. Fixed geometry.
    pub a: f64,

    /// Link offset. Fixed geometry.
    pub d: f64,
}

impl DhParameters {
    /// Create a parameter record from `theta` (degrees), `alpha` (radians),
    /// link length `a` and link offset `d`.
    ///
    /// # Example
    /// ```rust
    /// use dh_robot::DhParameters;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let shoulder = DhParameters::new(10.0, FRAC_PI_2, 0.0, 0.21);
    /// assert_eq!(shoulder.theta, 10.0);
    /// ```
    pub const fn new(theta: f64, alpha: f64, a: f64, d: f64) -> Self {
        Self { theta, alpha, a, d }
    }

    /// Build the homogeneous transform from the previous link frame to this
    /// joint's link frame.
    ///
    /// Pure function of the four parameters:
    ///
    /// ```text
    /// [ cosθ   -sinθ·cosα    sinθ·sinα    a·cosθ ]
    /// [ sinθ    cosθ·cosα   -cosθ·sinα    a·sinθ ]
    /// [  0          sinα         cosα         d  ]
    /// [  0            0            0          1  ]
    /// ```
    pub fn transform(&self) -> Matrix4<f64> {
        let (sin_theta, cos_theta) = self.theta.to_radians().sin_cos();
        let (sin_alpha, cos_alpha) = self.alpha.sin_cos();

        Matrix4::new(
            cos_theta,
            -sin_theta * cos_alpha,
            sin_theta * sin_alpha,
            self.a * cos_theta,
            sin_theta,
            cos_theta * cos_alpha,
            -cos_theta * sin_alpha,
            self.a * sin_theta,
            0.0,
            sin_alpha,
            cos_alpha,
            self.d,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }
}

impl std::fmt::Display for DhParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(theta: {}°, alpha: {} rad, a: {}, d: {})",
            self.theta, self.alpha, self.a, self.d
        )
    }
}
