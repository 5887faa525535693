//! # DH Robot
//!
//! A pure Rust library for computing the forward kinematics of a serial-link
//! manipulator described by Denavit-Hartenberg (DH) parameters. Given the
//! per-joint geometry and the current joint angles, it produces the position
//! and full pose of the end effector in the base frame.
//!
//! ## Features
//!
//! - DH parameter records with explicit angle-unit conventions
//! - Homogeneous transform composition over the whole chain
//! - Robot model with all-or-nothing parameter and angle updates
//! - Integration with nalgebra for linear algebra
//!
//! ## Example
//!
//! ```rust
//! use dh_robot::{DhParameters, Robot};
//!
//! let robot = Robot::new(vec![
//!     DhParameters::new(90.0, 0.0, 1.0, 0.0),
//!     DhParameters::new(0.0, 0.0, 0.0, 0.5),
//! ])
//! .unwrap();
//!
//! let pose = robot.forward_kinematics().unwrap();
//! println!("end effector at {}", pose.position);
//! ```

pub mod dh;
pub mod math;
pub mod robot;
pub mod solver;

pub use dh::DhParameters;
pub use robot::Robot;
pub use solver::{solve, EffectorPose};

pub use nalgebra::{Matrix4, Vector3, Vector4};

/// Common result type for this library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for robot kinematics operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Construction with an empty joint chain
    #[error("a robot needs at least one joint")]
    EmptyChain,

    /// Angle vector length does not match the joint count
    #[error("expected {expected} joint angles, got {actual}")]
    AngleCountMismatch { expected: usize, actual: usize },

    /// Joint index outside the chain
    #[error("joint index {index} out of range for a robot with {joint_count} joints")]
    JointOutOfRange { index: usize, joint_count: usize },

    /// Homogeneous coordinate with zero weight during position extraction
    #[error("degenerate homogeneous coordinate with zero weight")]
    DegenerateTransform,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robot_construction() {
        let robot = Robot::new(vec![DhParameters::new(0.0, 0.0, 0.0, 0.0)]).unwrap();
        assert_eq!(robot.joint_count(), 1);
    }

    #[test]
    fn test_empty_chain_rejected() {
        let result = Robot::new(Vec::new());
        assert!(matches!(result, Err(Error::EmptyChain)));
    }

    #[test]
    fn test_error_display() {
        let err = Error::AngleCountMismatch {
            expected: 6,
            actual: 5,
        };
        assert_eq!(err.to_string(), "expected 6 joint angles, got 5");
    }
}
