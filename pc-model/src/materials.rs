use bevy::math::Affine2;
use bevy::prelude::*;

pub const DEFAULT_FUR_COLOR: Color = Color::srgb(0.08, 0.08, 0.09);
pub const WHITE_FUR_COLOR: Color = Color::srgb(0.95, 0.94, 0.91);
pub const EYE_COLOR: Color = Color::srgb(0.62, 0.78, 0.22);
pub const NOSE_COLOR: Color = Color::srgb(0.86, 0.47, 0.52);
pub const INNER_EAR_COLOR: Color = Color::srgb(0.93, 0.66, 0.68);
pub const WHISKER_COLOR: Color = Color::srgba(0.96, 0.96, 0.96, 0.7);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialRole {
    BlackFur,
    WhiteFur,
    Eye,
    Nose,
    InnerEar,
    WhiskerLine,
}

impl MaterialRole {
    pub const ALL: [Self; 6] = [
        Self::BlackFur,
        Self::WhiteFur,
        Self::Eye,
        Self::Nose,
        Self::InnerEar,
        Self::WhiskerLine,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::BlackFur => "black fur",
            Self::WhiteFur => "white fur",
            Self::Eye => "eye",
            Self::Nose => "nose",
            Self::InnerEar => "inner ear",
            Self::WhiskerLine => "whisker line",
        }
    }

    pub const fn is_fur(self) -> bool {
        matches!(self, Self::BlackFur | Self::WhiteFur)
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
struct MaterialSlot {
    handle: Handle<StandardMaterial>,
    wireframe: bool,
}

/// Exactly one shared `StandardMaterial` per role.
///
/// Segments hold clones of these handles, so a property change made here is
/// seen by every segment of the role. Wireframe is tracked per role because
/// `StandardMaterial` has no such flag; the render layer mirrors it onto the
/// segment entities.
#[derive(Debug, Clone)]
pub struct MaterialSet {
    slots: [MaterialSlot; 6],
}

impl MaterialSet {
    pub fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        let slots = MaterialRole::ALL.map(|role| MaterialSlot {
            handle: materials.add(default_material(role)),
            wireframe: false,
        });
        Self { slots }
    }

    pub fn handle(&self, role: MaterialRole) -> &Handle<StandardMaterial> {
        &self.slots[role.slot()].handle
    }

    pub fn wireframe(&self, role: MaterialRole) -> bool {
        self.slots[role.slot()].wireframe
    }

    /// Recolors the coat. Only the black-fur role is customizable.
    pub fn set_fur_color(&self, materials: &mut Assets<StandardMaterial>, color: Color) {
        if let Some(material) = materials.get_mut(self.handle(MaterialRole::BlackFur)) {
            material.base_color = color;
        }
    }

    pub fn fur_color(&self, materials: &Assets<StandardMaterial>) -> Option<Color> {
        materials
            .get(self.handle(MaterialRole::BlackFur))
            .map(|material| material.base_color)
    }

    /// Sets the wireframe flag on both fur roles and nothing else.
    pub fn set_wireframe(&mut self, enabled: bool) {
        for role in MaterialRole::ALL.into_iter().filter(|role| role.is_fur()) {
            self.slots[role.slot()].wireframe = enabled;
        }
    }

    /// Puts the fur normal map on both fur materials, repeated `tiling` times
    /// across UV space.
    pub fn apply_fur_detail(
        &self,
        materials: &mut Assets<StandardMaterial>,
        normal_map: &Handle<Image>,
        tiling: f32,
    ) {
        for role in MaterialRole::ALL.into_iter().filter(|role| role.is_fur()) {
            if let Some(material) = materials.get_mut(self.handle(role)) {
                material.normal_map_texture = Some(normal_map.clone());
                material.uv_transform = Affine2::from_scale(Vec2::splat(tiling));
            }
        }
    }
}

fn default_material(role: MaterialRole) -> StandardMaterial {
    match role {
        MaterialRole::BlackFur => StandardMaterial {
            base_color: DEFAULT_FUR_COLOR,
            perceptual_roughness: 0.9,
            metallic: 0.0,
            reflectance: 0.3,
            ..default()
        },
        MaterialRole::WhiteFur => StandardMaterial {
            base_color: WHITE_FUR_COLOR,
            perceptual_roughness: 0.9,
            metallic: 0.0,
            reflectance: 0.3,
            ..default()
        },
        MaterialRole::Eye => StandardMaterial {
            base_color: EYE_COLOR,
            perceptual_roughness: 0.08,
            reflectance: 0.8,
            emissive: LinearRgba::rgb(0.04, 0.05, 0.0),
            ..default()
        },
        MaterialRole::Nose => StandardMaterial {
            base_color: NOSE_COLOR,
            perceptual_roughness: 0.5,
            ..default()
        },
        MaterialRole::InnerEar => StandardMaterial {
            base_color: INNER_EAR_COLOR,
            perceptual_roughness: 0.8,
            double_sided: true,
            cull_mode: None,
            ..default()
        },
        MaterialRole::WhiskerLine => StandardMaterial {
            base_color: WHISKER_COLOR,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        },
    }
}
