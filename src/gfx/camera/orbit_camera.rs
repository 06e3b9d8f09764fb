use super::camera_utils::Camera;
use cgmath::*;

#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub bounds: OrbitCameraBounds,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera for OrbitCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let proj = perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * self.build_view_matrix()
    }

    fn build_view_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        Matrix4::look_at_rh(eye, target, self.up)
    }
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            distance,
            pitch,
            yaw,
            eye: Vector3::zero(), // Will be auto-calculted in `update()` nevertheless.
            target,
            up: Vector3::unit_y(),
            bounds: OrbitCameraBounds::default(),
            aspect,
            fovy: cgmath::Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1000.0,
        };
        camera.update();
        camera
    }

    /// Place the camera at `eye`, orbiting `target`.
    ///
    /// Pitch is clamped to the default bounds, so an eye straight above or
    /// below the target ends up a hair off the pole.
    pub fn look_at(eye: Vector3<f32>, target: Vector3<f32>, aspect: f32) -> Self {
        let offset = eye - target;
        let distance = offset.magnitude().max(f32::EPSILON);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        let yaw = offset.x.atan2(offset.z);

        let mut camera = Self::new(distance, pitch, yaw, target, aspect);
        camera.set_pitch(pitch);
        camera
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(
            self.bounds.min_distance.unwrap_or(f32::EPSILON),
            self.bounds.max_distance.unwrap_or(f32::MAX),
        );
        self.update();
    }

    pub fn add_distance(&mut self, delta: f32) {
        let corrected_zoom = f32::log10(self.distance) * delta;
        self.set_distance(self.distance + corrected_zoom);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        let mut bounded_yaw = yaw;
        if let Some(min_yaw) = self.bounds.min_yaw {
            bounded_yaw = bounded_yaw.clamp(min_yaw, f32::MAX);
        }
        if let Some(max_yaw) = self.bounds.max_yaw {
            bounded_yaw = bounded_yaw.clamp(f32::MIN, max_yaw);
        }
        self.yaw = bounded_yaw;
        self.update();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// Updates the camera after changing `distance`, `pitch` or `yaw`.
    fn update(&mut self) {
        self.eye =
            calculate_cartesian_eye_position(self.pitch, self.yaw, self.distance, self.target);
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub min_yaw: Option<f32>,
    pub max_yaw: Option<f32>,
}

impl Default for OrbitCameraBounds {
    fn default() -> Self {
        Self {
            min_distance: None,
            max_distance: None,
            min_pitch: -std::f32::consts::PI / 2.0 + 1e-3,
            max_pitch: std::f32::consts::PI / 2.0 - 1e-3,
            min_yaw: None,
            max_yaw: None,
        }
    }
}

fn calculate_cartesian_eye_position(
    pitch: f32,
    yaw: f32,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_reproduces_eye() {
        let eye = Vector3::new(3.0, 4.0, 12.0);
        let camera = OrbitCamera::look_at(eye, Vector3::zero(), 1.5);

        assert!((camera.eye - eye).magnitude() < 1e-3);
        assert!((camera.distance - 13.0).abs() < 1e-4);
    }

    #[test]
    fn test_world_transform_faces_target() {
        let camera = OrbitCamera::look_at(Vector3::new(0.0, 0.0, 10.0), Vector3::zero(), 1.0);
        let world = camera.world_transform();

        assert!((world.position - Vector3::new(0.0, 0.0, 10.0)).magnitude() < 1e-3);

        // Cameras look down their local -Z
        let forward = world.rotation * -Vector3::unit_z();
        assert!((forward - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-3);
    }

    #[test]
    fn test_pitch_is_clamped_near_the_pole() {
        let camera = OrbitCamera::look_at(Vector3::new(0.0, 10.0, 0.0), Vector3::zero(), 1.0);

        assert!(camera.pitch < std::f32::consts::PI / 2.0);
        assert!(camera.eye.y > 9.9);
    }

    #[test]
    fn test_orbiting_keeps_distance_to_target() {
        let mut camera = OrbitCamera::look_at(Vector3::new(0.0, 5.0, 10.0), Vector3::zero(), 1.0);
        let distance = camera.distance;

        camera.add_yaw(0.7);
        camera.add_pitch(-0.2);
        assert!(((camera.eye - camera.target).magnitude() - distance).abs() < 1e-3);

        camera.set_distance(2.0 * distance);
        assert!(((camera.eye - camera.target).magnitude() - 2.0 * distance).abs() < 1e-3);
    }
}
