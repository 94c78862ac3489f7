//! Primitive shape descriptors and their baking into textured quads.
//!
//! Coordinates are in model units (texels) with Y pointing down, the
//! convention block-game models are authored in. Baking multiplies
//! positions by the render scale and normalises UVs by the texture sheet
//! size.

use glam::{UVec2, UVec3, Vec2, Vec3};

use super::{Quad, Vertex};

/// Axis-aligned box with the standard cross-shaped UV unwrap.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    /// Minimum corner relative to the owning node's pivot.
    pub origin: Vec3,
    /// Edge lengths in texels.
    pub size: UVec3,
    /// Grows the box by this amount on every side without changing its UVs.
    pub inflate: f32,
    /// Top-left texel of the unwrap on the texture sheet.
    pub texture_offset: UVec2,
    /// Optional part name (`"node.part"`) used for texture-offset lookup.
    pub name: Option<String>,
}

/// Flat, double-sided textured quad lying in the XY plane.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedPlane {
    /// Top-left corner relative to the owning node's pivot.
    pub origin: Vec3,
    /// Width and height in texels.
    pub size: UVec2,
    /// Top-left texel of the sprite on the texture sheet.
    pub texture_offset: UVec2,
}

/// A shape that can be compiled into a node's cached geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Six-faced box.
    Cuboid(Cuboid),
    /// Two-sided sprite quad.
    Plane(TexturedPlane),
}

impl Primitive {
    /// Number of quads this primitive bakes into.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        match self {
            Self::Cuboid(_) => 6,
            Self::Plane(_) => 2,
        }
    }

    /// Bake into quads, appending to `out`.
    pub(crate) fn bake(&self, scale: f32, texture_size: Vec2, out: &mut Vec<Quad>) {
        match self {
            Self::Cuboid(cuboid) => cuboid.bake(scale, texture_size, out),
            Self::Plane(plane) => plane.bake(scale, texture_size, out),
        }
    }
}

impl From<Cuboid> for Primitive {
    fn from(cuboid: Cuboid) -> Self {
        Self::Cuboid(cuboid)
    }
}

impl From<TexturedPlane> for Primitive {
    fn from(plane: TexturedPlane) -> Self {
        Self::Plane(plane)
    }
}

/// Texel-space rectangle `(u1, v1)..(u2, v2)` mapped onto a quad's four
/// corners in winding order.
fn face(
    corners: [Vec3; 4],
    uv_min: Vec2,
    uv_max: Vec2,
    normal: Vec3,
    scale: f32,
    texture_size: Vec2,
) -> Quad {
    let uvs = [
        Vec2::new(uv_max.x, uv_min.y),
        Vec2::new(uv_min.x, uv_min.y),
        Vec2::new(uv_min.x, uv_max.y),
        Vec2::new(uv_max.x, uv_max.y),
    ];
    let vertices = std::array::from_fn(|i| Vertex {
        position: (corners[i] * scale).to_array(),
        uv: (uvs[i] / texture_size).to_array(),
        normal: normal.to_array(),
    });
    Quad { vertices }
}

impl Cuboid {
    fn bake(&self, scale: f32, texture_size: Vec2, out: &mut Vec<Quad>) {
        let min = self.origin - Vec3::splat(self.inflate);
        let max = self.origin + self.size.as_vec3() + Vec3::splat(self.inflate);

        let v0 = Vec3::new(min.x, min.y, min.z);
        let v1 = Vec3::new(max.x, min.y, min.z);
        let v2 = Vec3::new(max.x, max.y, min.z);
        let v3 = Vec3::new(min.x, max.y, min.z);
        let v4 = Vec3::new(min.x, min.y, max.z);
        let v5 = Vec3::new(max.x, min.y, max.z);
        let v6 = Vec3::new(max.x, max.y, max.z);
        let v7 = Vec3::new(min.x, max.y, max.z);

        let u = self.texture_offset.x as f32;
        let v = self.texture_offset.y as f32;
        let dx = self.size.x as f32;
        let dy = self.size.y as f32;
        let dz = self.size.z as f32;

        let mut push = |corners, uv_min: (f32, f32), uv_max: (f32, f32), normal| {
            out.push(face(
                corners,
                Vec2::new(uv_min.0, uv_min.1),
                Vec2::new(uv_max.0, uv_max.1),
                normal,
                scale,
                texture_size,
            ));
        };

        // +X
        push([v5, v1, v2, v6], (u + dz + dx, v + dz), (u + dz + dx + dz, v + dz + dy), Vec3::X);
        // -X
        push([v0, v4, v7, v3], (u, v + dz), (u + dz, v + dz + dy), Vec3::NEG_X);
        // top (-Y, authored Y points down)
        push([v5, v4, v0, v1], (u + dz, v), (u + dz + dx, v + dz), Vec3::NEG_Y);
        // bottom
        push([v2, v3, v7, v6], (u + dz + dx, v + dz), (u + dz + dx + dx, v), Vec3::Y);
        // front
        push([v1, v0, v3, v2], (u + dz, v + dz), (u + dz + dx, v + dz + dy), Vec3::NEG_Z);
        // back
        push(
            [v4, v5, v6, v7],
            (u + dz + dx + dz, v + dz),
            (u + dz + dx + dz + dx, v + dz + dy),
            Vec3::Z,
        );
    }
}

impl TexturedPlane {
    fn bake(&self, scale: f32, texture_size: Vec2, out: &mut Vec<Quad>) {
        let min = self.origin;
        let max = self.origin + self.size.as_vec2().extend(0.0);
        let a = Vec3::new(min.x, min.y, min.z);
        let b = Vec3::new(max.x, min.y, min.z);
        let c = Vec3::new(max.x, max.y, min.z);
        let d = Vec3::new(min.x, max.y, min.z);
        let uv_min = self.texture_offset.as_vec2();
        let uv_max = uv_min + self.size.as_vec2();

        out.push(face([b, a, d, c], uv_min, uv_max, Vec3::NEG_Z, scale, texture_size));
        // Back face mirrors the sprite so it reads correctly from behind.
        out.push(face([a, b, c, d], uv_min, uv_max, Vec3::Z, scale, texture_size));
    }
}
