use bevy::prelude::*;

use super::regions::{BODY_POSITION, BODY_SCALE};

// Breathing: body.scale.y = BODY_BASE_SCALE_Y + BREATH_AMPLITUDE * sin(BREATH_RATE * t)
pub const BODY_BASE_SCALE_Y: f32 = BODY_SCALE.y;
pub const BREATH_AMPLITUDE: f32 = 0.02;
pub const BREATH_RATE: f32 = 2.0;

// Tail sway: two oscillations with incommensurate rates so the motion does not
// visibly repeat.
pub const TAIL_YAW_AMPLITUDE: f32 = 0.3;
pub const TAIL_YAW_RATE: f32 = 1.5;
pub const TAIL_ROLL_AMPLITUDE: f32 = 0.12;
pub const TAIL_ROLL_RATE: f32 = 2.3;

pub const STAND_BODY_Y: f32 = BODY_POSITION.y;
pub const STAND_BODY_PITCH: f32 = 0.0;
pub const SIT_BODY_Y: f32 = 0.62;
/// Negative pitch lifts the chest (+Z end) and drops the hips.
pub const SIT_BODY_PITCH: f32 = -0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PoseMode {
    /// Standing base pose with breathing and tail sway applied every frame.
    #[default]
    Idle,
    Sit,
    Stand,
}

impl PoseMode {
    pub const ALL: [Self; 3] = [Self::Idle, Self::Sit, Self::Stand];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Sit => "Sit",
            Self::Stand => "Stand",
        }
    }

    pub const fn as_options_value(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sit => "sit",
            Self::Stand => "stand",
        }
    }

    pub fn from_options_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "idle" | "breathe" => Some(Self::Idle),
            "sit" | "sitting" => Some(Self::Sit),
            "stand" | "standing" => Some(Self::Stand),
            _ => None,
        }
    }

    /// Unknown values select the default pose instead of failing.
    pub fn parse_or_default(value: &str) -> Self {
        Self::from_options_value(value).unwrap_or_default()
    }

    /// Only idle animates continuously; the others are one-shot poses.
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Selected pose plus the last elapsed time fed to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub mode: PoseMode,
    pub elapsed: f32,
}

pub(crate) fn breathing_scale_y(elapsed: f32) -> f32 {
    BODY_BASE_SCALE_Y + BREATH_AMPLITUDE * (BREATH_RATE * elapsed).sin()
}

pub(crate) fn tail_sway(elapsed: f32) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        0.0,
        TAIL_YAW_AMPLITUDE * (TAIL_YAW_RATE * elapsed).sin(),
        TAIL_ROLL_AMPLITUDE * (TAIL_ROLL_RATE * elapsed).sin(),
    )
}
