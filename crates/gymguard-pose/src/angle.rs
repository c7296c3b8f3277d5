//! Interior joint angles
//!
//! Angles are measured in the 2-D image projection. Landmark depth (`z`) is ignored, so a
//! limb pointing towards the camera reads as more bent than it is.

use gymguard_base::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Joint, LandmarkFrame, PoseError};

/// Three joints defining the angle measured at `vertex`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointTriple {
    pub proximal: Joint,
    pub vertex: Joint,
    pub distal: Joint,
}

impl JointTriple {
    pub fn new(proximal: Joint, vertex: Joint, distal: Joint) -> Self {
        Self {
            proximal,
            vertex,
            distal,
        }
    }

    pub fn joints(&self) -> [Joint; 3] {
        [self.proximal, self.vertex, self.distal]
    }
}

/// Angle at a vertex joint for one frame, in degrees within [0, 180]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMeasurement {
    pub vertex: Joint,
    pub degrees: f32,
}

/// Interior angle at `vertex` between the segments to `proximal` and `distal`.
///
/// Computes `|atan2(C - B) - atan2(A - B)|` in degrees and reflects values above 180, so
/// the result is always in [0, 180] and does not depend on the order of the endpoints.
///
/// Fails with `DegenerateGeometry` when the vertex coincides with an endpoint or a
/// coordinate is not finite.
pub fn joint_angle(
    proximal: Vec2<f32>,
    vertex: Vec2<f32>,
    distal: Vec2<f32>,
) -> Result<f32, PoseError> {
    if !(proximal.is_finite() && vertex.is_finite() && distal.is_finite()) {
        return Err(degenerate("non-finite coordinate"));
    }
    if vertex == proximal {
        return Err(degenerate("vertex coincides with proximal point"));
    }
    if vertex == distal {
        return Err(degenerate("vertex coincides with distal point"));
    }

    let radians = (distal - vertex).heading() - (proximal - vertex).heading();
    let mut degrees = radians.to_degrees().abs();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }

    // float noise around 0 and 360
    Ok(degrees.clamp(0.0, 180.0))
}

fn degenerate(reason: &str) -> PoseError {
    PoseError::DegenerateGeometry {
        vertex: None,
        sequence: None,
        reason: reason.to_string(),
    }
}

/// Measure the angle described by `triple` in `frame`.
///
/// All three joints must be present with visibility of at least `min_visibility`;
/// otherwise fails with `InsufficientLandmarks` naming each unusable joint.
pub fn measure(
    frame: &LandmarkFrame,
    triple: &JointTriple,
    min_visibility: f32,
) -> Result<AngleMeasurement, PoseError> {
    let [proximal, vertex, distal] = frame.positions(triple.joints(), min_visibility)?;
    let degrees = joint_angle(proximal, vertex, distal)
        .map_err(|e| e.at(triple.vertex, frame.sequence()))?;

    Ok(AngleMeasurement {
        vertex: triple.vertex,
        degrees,
    })
}
