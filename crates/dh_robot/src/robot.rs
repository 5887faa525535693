//! Robot model: owned joint chain plus the mutation and query API.

use crate::dh::DhParameters;
use crate::solver::{self, EffectorPose};
use crate::{Error, Result};

/// A serial-link manipulator with a fixed number of joints.
///
/// The robot exclusively owns its chain of [`DhParameters`]; the chain is
/// only reachable through the update methods, which validate their input
/// before touching any state. A rejected update leaves the robot exactly as
/// it was.
///
/// The joint count is fixed at construction. In normal operation only the
/// joint angles change between queries; the fixed geometry (`alpha`, `a`,
/// `d`) changes only through an explicit [`set_joint`](Robot::set_joint).
///
/// # Example
/// ```rust
/// use dh_robot::Robot;
///
/// let mut robot = Robot::six_joint_reference();
/// robot.set_joint_angles(&[10.0, -50.0, -60.0, 90.0, 50.0, 0.0]).unwrap();
/// let pose = robot.forward_kinematics().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Robot {
    joints: Vec<DhParameters>,
}

impl Robot {
    /// Create a robot from an ordered base-to-effector joint chain.
    ///
    /// The length of `joints` becomes the robot's fixed joint count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChain`] if `joints` is empty.
    pub fn new(joints: Vec<DhParameters>) -> Result<Self> {
        if joints.is_empty() {
            return Err(Error::EmptyChain);
        }
        Ok(Self { joints })
    }

    /// The six-joint reference manipulator this library was validated
    /// against, with its startup parameter set.
    ///
    /// `theta` in degrees, `alpha` in radians, lengths in meters.
    pub fn six_joint_reference() -> Self {
        use std::f64::consts::FRAC_PI_2;

        Self {
            joints: vec![
                DhParameters::new(10.0, FRAC_PI_2, 0.0, 0.21),
                DhParameters::new(-50.0, 0.0, -0.8, 0.193),
                DhParameters::new(-60.0, 0.0, -0.598, -0.16),
                DhParameters::new(90.0, FRAC_PI_2, 0.0, 0.25),
                DhParameters::new(50.0, -FRAC_PI_2, 0.0, 0.25),
                DhParameters::new(0.0, 0.0, 0.0, 0.25),
            ],
        }
    }

    /// Number of joints in the chain.
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// The chain in base-to-effector order.
    pub fn joints(&self) -> &[DhParameters] {
        &self.joints
    }

    /// One joint's parameters, or `None` if `index` is out of range.
    pub fn joint(&self, index: usize) -> Option<&DhParameters> {
        self.joints.get(index)
    }

    /// Replace one joint's full parameter record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JointOutOfRange`] if `index` is not in
    /// `[0, joint_count)`; the chain is left unchanged.
    pub fn set_joint(&mut self, index: usize, params: DhParameters) -> Result<()> {
        let joint_count = self.joints.len();
        let slot = self
            .joints
            .get_mut(index)
            .ok_or(Error::JointOutOfRange { index, joint_count })?;
        *slot = params;
        Ok(())
    }

    /// Replace the joint angle (`theta`, in degrees) of every joint in
    /// base-to-effector order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AngleCountMismatch`] if `angles_deg` does not have
    /// exactly one entry per joint. On failure no angle is modified.
    pub fn set_joint_angles(&mut self, angles_deg: &[f64]) -> Result<()> {
        if angles_deg.len() != self.joints.len() {
            return Err(Error::AngleCountMismatch {
                expected: self.joints.len(),
                actual: angles_deg.len(),
            });
        }
        for (joint, &angle) in self.joints.iter_mut().zip(angles_deg) {
            joint.theta = angle;
        }
        Ok(())
    }

    /// Compute the current end-effector pose in the base frame.
    ///
    /// Read-only: the stored chain is not modified.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::DegenerateTransform`] from position extraction;
    /// unreachable for chains built from [`DhParameters`].
    pub fn forward_kinematics(&self) -> Result<EffectorPose> {
        solver::solve(&self.joints)
    }
}

impl std::fmt::Display for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Robot with {} joints:", self.joints.len())?;
        for (i, joint) in self.joints.iter().enumerate() {
            writeln!(f, "  joint {i}: {joint}")?;
        }
        Ok(())
    }
}
