use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec3;

/// Free-flying camera in world grid units, driven by discrete key presses.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub speed: f32,
}

impl Camera {
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self { position, speed }
    }

    pub fn move_forward(&mut self) {
        self.position.z -= self.speed;
    }

    pub fn move_back(&mut self) {
        self.position.z += self.speed;
    }

    pub fn move_left(&mut self) {
        self.position.x -= self.speed;
    }

    pub fn move_right(&mut self) {
        self.position.x += self.speed;
    }

    pub fn move_up(&mut self) {
        self.position.y += self.speed;
    }

    pub fn move_down(&mut self) {
        self.position.y -= self.speed;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(8.0, 6.0, 20.0), 0.3)
    }
}

/// Camera position shared between an input thread and the render thread.
///
/// Each axis is published as an independent bit-cast f32. Readers get
/// per-axis eventual consistency, which is all the projection needs: the
/// axes never have to agree transactionally.
pub struct SharedCamera {
    x: AtomicU32,
    y: AtomicU32,
    z: AtomicU32,
}

impl SharedCamera {
    pub fn new(position: Vec3) -> Self {
        Self {
            x: AtomicU32::new(position.x.to_bits()),
            y: AtomicU32::new(position.y.to_bits()),
            z: AtomicU32::new(position.z.to_bits()),
        }
    }

    pub fn store(&self, position: Vec3) {
        self.x.store(position.x.to_bits(), Ordering::Relaxed);
        self.y.store(position.y.to_bits(), Ordering::Relaxed);
        self.z.store(position.z.to_bits(), Ordering::Relaxed);
    }

    pub fn load(&self) -> Vec3 {
        Vec3::new(
            f32::from_bits(self.x.load(Ordering::Relaxed)),
            f32::from_bits(self.y.load(Ordering::Relaxed)),
            f32::from_bits(self.z.load(Ordering::Relaxed)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_steps_by_speed() {
        let mut camera = Camera::new(Vec3::ZERO, 0.3);
        camera.move_forward();
        camera.move_right();
        camera.move_up();
        assert_eq!(camera.position, Vec3::new(0.3, 0.3, -0.3));

        camera.move_back();
        camera.move_left();
        camera.move_down();
        assert_eq!(camera.position, Vec3::ZERO);
    }

    #[test]
    fn test_shared_camera_roundtrip() {
        let shared = SharedCamera::new(Vec3::new(8.0, 6.0, 20.0));
        assert_eq!(shared.load(), Vec3::new(8.0, 6.0, 20.0));

        shared.store(Vec3::new(-1.5, 0.25, 3.0));
        assert_eq!(shared.load(), Vec3::new(-1.5, 0.25, 3.0));
    }
}
