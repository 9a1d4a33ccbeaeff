use glam::{Vec2, Vec3};

use crate::world::block::Block;

/// Current window dimensions, threaded explicitly through projection and
/// picking instead of living in process-wide state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Screen-space origin of the isometric grid.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Crosshair location. Picking always happens here because the window
    /// layer recenters the locked cursor every frame.
    pub fn center(&self) -> Vec2 {
        self.offset()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Top,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceVertex {
    pub position: Vec2,
    pub uv: Vec2,
}

/// One textured quad of the projected cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub kind: FaceKind,
    pub vertices: [FaceVertex; 4],
}

/// Screen-space rectangle enclosing all three projected faces; the picking
/// candidate test runs against this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Projected form of one block: the anchor plus the three visible faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    pub anchor: Vec2,
    pub half_width: f32,
    pub half_height: f32,
    pub size: f32,
    pub faces: [Face; 3],
}

impl ScreenGeometry {
    pub fn bounds(&self) -> ScreenRect {
        ScreenRect {
            min: Vec2::new(
                self.anchor.x - self.half_width,
                self.anchor.y - self.half_height,
            ),
            max: Vec2::new(
                self.anchor.x + self.half_width,
                self.anchor.y + self.half_height + self.size / 2.0,
            ),
        }
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.anchor.distance(point)
    }
}

const QUAD_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

fn quad(kind: FaceKind, corners: [Vec2; 4]) -> Face {
    let mut vertices = [FaceVertex {
        position: Vec2::ZERO,
        uv: Vec2::ZERO,
    }; 4];
    for (vertex, (position, uv)) in vertices
        .iter_mut()
        .zip(corners.into_iter().zip(QUAD_UVS.into_iter()))
    {
        *vertex = FaceVertex { position, uv };
    }
    Face { kind, vertices }
}

/// 2:1 isometric mapping of a grid cell to the screen, camera-relative.
///
/// Picking geometry derives from this same formula; the two must never
/// diverge. Pure in all inputs, O(1), recomputed per frame.
pub fn project(block: &Block, camera: Vec3, viewport: Viewport) -> ScreenGeometry {
    let hw = block.size / 2.0;
    let hh = block.size / 4.0;
    let half_depth = block.size / 2.0;
    let rel = block.position.as_vec3() - camera;
    let offset = viewport.offset();

    let sx = (rel.x - rel.z) * hw + offset.x;
    let sy = (rel.x + rel.z) * hh - rel.y * hh + offset.y;

    let top = quad(
        FaceKind::Top,
        [
            Vec2::new(sx, sy - hh),
            Vec2::new(sx + hw, sy),
            Vec2::new(sx, sy + hh),
            Vec2::new(sx - hw, sy),
        ],
    );
    let left = quad(
        FaceKind::Left,
        [
            Vec2::new(sx - hw, sy),
            Vec2::new(sx, sy + hh),
            Vec2::new(sx, sy + hh + half_depth),
            Vec2::new(sx - hw, sy + half_depth),
        ],
    );
    let right = quad(
        FaceKind::Right,
        [
            Vec2::new(sx + hw, sy),
            Vec2::new(sx, sy + hh),
            Vec2::new(sx, sy + hh + half_depth),
            Vec2::new(sx + hw, sy + half_depth),
        ],
    );

    ScreenGeometry {
        anchor: Vec2::new(sx, sy),
        half_width: hw,
        half_height: hh,
        size: block.size,
        faces: [top, left, right],
    }
}
