//! Procedural cat figure: geometry builders plus the pose/animation controller.
//!
//! Key constraints for this crate:
//! - No asset files. Every part is built from constants (spheres, cones, swept tubes).
//! - Materials are shared per role; customization goes through `MaterialSet`.
//! - Nothing here touches the render loop directly; `pc-render` drives `FigureController`.

pub mod figure;
pub mod geometry;
pub mod materials;
pub mod segment;
pub mod settings;

pub use figure::{
    AnimationState, FigureAssets, FigureController, FigureRoot, PoseMode, SegmentIndex,
    SegmentRole, WhiskerLines,
};
pub use geometry::{ControlCurve, CurveFrame, TubeShape, WhiskerSet};
pub use materials::{MaterialRole, MaterialSet};
pub use segment::{MirrorAxis, Segment, SegmentShape, curve_tube_segment, primitive_segment};
pub use settings::{FigureSettings, FurTextureParams};
