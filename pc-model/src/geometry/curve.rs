use bevy::math::{Quat, Vec3};

/// Squared derivative length below which a tangent is treated as missing.
const TANGENT_EPSILON_SQ: f32 = 1e-12;

/// Used when no point of the curve yields a usable tangent.
pub const FALLBACK_AXIS: Vec3 = Vec3::Y;

/// Smooth path through an ordered list of control points (uniform Catmull-Rom).
///
/// Control point `i` sits exactly at parameter `i / (len - 1)`. The first and
/// last spans use phantom points reflected through the end points, so no
/// tangents have to be supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlCurve {
    points: Vec<Vec3>,
}

/// Point on a swept curve plus its parallel-transported orthonormal frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFrame {
    pub point: Vec3,
    pub tangent: Vec3,
    pub normal: Vec3,
    pub binormal: Vec3,
}

impl ControlCurve {
    pub fn new(points: impl Into<Vec<Vec3>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Fewer than two points cannot be swept into a proper tube.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        match self.points.as_slice() {
            [] => Vec3::ZERO,
            [only] => *only,
            _ => {
                let span = self.span(t);
                span.position()
            }
        }
    }

    /// Unit tangent at `t`, or `None` where the derivative vanishes
    /// (duplicate control points, single-point curves).
    pub fn tangent_at(&self, t: f32) -> Option<Vec3> {
        if self.is_degenerate() {
            return None;
        }
        let derivative = self.span(t).derivative();
        if derivative.is_finite() && derivative.length_squared() > TANGENT_EPSILON_SQ {
            Some(derivative.normalize())
        } else {
            None
        }
    }

    /// Samples `segments + 1` evenly spaced frames from `t = 0` to `t = 1`.
    ///
    /// Normals are carried along by parallel transport so the swept cross
    /// section does not twist. Missing tangents reuse the previous one; if the
    /// whole curve has none, `FALLBACK_AXIS` is used.
    pub fn frames(&self, segments: u32) -> Vec<CurveFrame> {
        let segments = segments.max(1);
        let param = |j: u32| j as f32 / segments as f32;

        let mut last_tangent = (0..=segments)
            .find_map(|j| self.tangent_at(param(j)))
            .unwrap_or(FALLBACK_AXIS);

        let mut frames: Vec<CurveFrame> = Vec::with_capacity(segments as usize + 1);
        for j in 0..=segments {
            let t = param(j);
            let tangent = self.tangent_at(t).unwrap_or(last_tangent);
            last_tangent = tangent;

            let carried = match frames.last() {
                None => tangent.any_orthonormal_vector(),
                Some(prev) => transport(prev.tangent, tangent, prev.normal),
            };
            // Re-orthogonalize so rounding never lets the normal drift off the plane.
            let normal = (carried - tangent * carried.dot(tangent))
                .try_normalize()
                .unwrap_or_else(|| tangent.any_orthonormal_vector());

            frames.push(CurveFrame {
                point: self.point_at(t),
                tangent,
                normal,
                binormal: tangent.cross(normal),
            });
        }
        frames
    }

    fn span(&self, t: f32) -> Span {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let last = self.points.len() - 1;
        let scaled = last as f32 * t;
        let mut index = scaled.floor() as usize;
        let mut weight = scaled - index as f32;
        if index >= last {
            index = last - 1;
            weight = 1.0;
        }

        let p1 = self.points[index];
        let p2 = self.points[index + 1];
        let p0 = if index > 0 {
            self.points[index - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if index + 2 <= last {
            self.points[index + 2]
        } else {
            p2 * 2.0 - p1
        };

        Span {
            p0,
            p1,
            p2,
            p3,
            weight,
            scale: last as f32,
        }
    }
}

fn transport(from: Vec3, to: Vec3, normal: Vec3) -> Vec3 {
    let axis = from.cross(to);
    if axis.length_squared() <= TANGENT_EPSILON_SQ {
        return normal;
    }
    let angle = from.dot(to).clamp(-1.0, 1.0).acos();
    Quat::from_axis_angle(axis.normalize(), angle) * normal
}

#[derive(Debug, Clone, Copy)]
struct Span {
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    weight: f32,
    /// d(local weight) / d(curve parameter).
    scale: f32,
}

impl Span {
    fn coefficients(&self) -> (Vec3, Vec3, Vec3) {
        let v0 = (self.p2 - self.p0) * 0.5;
        let v1 = (self.p3 - self.p1) * 0.5;
        let cubic = self.p1 * 2.0 - self.p2 * 2.0 + v0 + v1;
        let quadratic = self.p1 * -3.0 + self.p2 * 3.0 - v0 * 2.0 - v1;
        (cubic, quadratic, v0)
    }

    fn position(&self) -> Vec3 {
        let (cubic, quadratic, linear) = self.coefficients();
        let w = self.weight;
        cubic * (w * w * w) + quadratic * (w * w) + linear * w + self.p1
    }

    fn derivative(&self) -> Vec3 {
        let (cubic, quadratic, linear) = self.coefficients();
        let w = self.weight;
        (cubic * (3.0 * w * w) + quadratic * (2.0 * w) + linear) * self.scale
    }
}
