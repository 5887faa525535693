//! Chain composition: from per-joint transforms to the end-effector pose.

use nalgebra::{Matrix4, Vector3};

use crate::dh::DhParameters;
use crate::math;
use crate::Result;

/// Pose of the end effector in the base frame at the instant of a query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectorPose {
    /// Position of the end effector in the base frame.
    pub position: Vector3<f64>,

    /// Full base-to-effector homogeneous transform (rotation + translation).
    pub transform: Matrix4<f64>,
}

/// Compose the chain's joint transforms and extract the end-effector pose.
///
/// Starts from the identity and right-multiplies each joint's transform in
/// chain order. Each joint transform expresses that joint's frame relative
/// to the *previous* frame, so composing left-to-right base-to-effector
/// yields the effector frame relative to the base. The position is the
/// image of the homogeneous origin under the composed transform.
///
/// # Errors
///
/// Returns [`Error::DegenerateTransform`](crate::Error::DegenerateTransform)
/// if the composed transform maps the origin to a zero-weight homogeneous
/// coordinate. This cannot happen for transforms built by
/// [`DhParameters::transform`], whose bottom row is always `(0, 0, 0, 1)`.
pub fn solve(chain: &[DhParameters]) -> Result<EffectorPose> {
    let mut accumulator = Matrix4::identity();
    for joint in chain {
        accumulator *= joint.transform();
    }

    let position = math::from_homogeneous(&(accumulator * math::homogeneous_origin()))?;

    Ok(EffectorPose {
        position,
        transform: accumulator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_position(pose: &EffectorPose, expected: Vector3<f64>) {
        assert!(
            (pose.position - expected).norm() < 1e-12,
            "position {} differs from expected {}",
            pose.position,
            expected
        );
    }

    #[test]
    fn test_identity_chain_stays_at_origin() {
        let chain = vec![DhParameters::new(0.0, 0.0, 0.0, 0.0); 6];
        let pose = solve(&chain).unwrap();
        assert_position(&pose, Vector3::zeros());
        assert_eq!(pose.transform, Matrix4::identity());
    }

    #[test]
    fn test_empty_chain_is_identity_pose() {
        let pose = solve(&[]).unwrap();
        assert_position(&pose, Vector3::zeros());
    }

    #[test]
    fn test_single_joint_offset_lands_on_z() {
        let mut chain = vec![DhParameters::new(0.0, 0.0, 0.0, 0.0); 3];
        chain[2].d = 5.0;
        let pose = solve(&chain).unwrap();
        assert_position(&pose, Vector3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_offsets_accumulate_along_the_chain() {
        let chain = vec![DhParameters::new(0.0, 0.0, 0.0, 0.25); 4];
        let pose = solve(&chain).unwrap();
        assert_position(&pose, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_composition_order_is_load_bearing() {
        // A rotates 90° about z with a unit link length, B offsets along z.
        // In chain order the offset is applied in A's rotated frame; in
        // reversed order it is applied in the base frame. The two disagree.
        let a = DhParameters::new(90.0, FRAC_PI_2, 1.0, 0.0);
        let b = DhParameters::new(0.0, 0.0, 0.0, 5.0);

        let forward = solve(&[a, b]).unwrap();
        let reversed = solve(&[b, a]).unwrap();

        assert_position(&forward, Vector3::new(5.0, 1.0, 0.0));
        assert_position(&reversed, Vector3::new(0.0, 1.0, 5.0));
        assert!((forward.position - reversed.position).norm() > 1.0);
    }

    #[test]
    fn test_solver_is_deterministic() {
        let chain = vec![
            DhParameters::new(30.0, FRAC_PI_2, 0.4, 0.1),
            DhParameters::new(-45.0, 0.0, 0.3, 0.0),
        ];
        let first = solve(&chain).unwrap();
        let second = solve(&chain).unwrap();
        assert_eq!(first, second);
    }
}
