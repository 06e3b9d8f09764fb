//! # Ray Picking
//!
//! This module turns normalized pointer coordinates into world-space rays and
//! intersects them with the simple targets the transform controls need: the
//! pick volume (a sphere), the interaction plane, and object bounding boxes.
//!
//! ## How it works
//!
//! 1. **Pointer to Ray**: Unproject a normalized pointer through the inverse
//!    view-projection matrix of the camera
//! 2. **Ray-Target Intersection**: Every target implements [`Raycast`] and
//!    reports the hit point, surface normal and distance
//! 3. **Nearest Hit**: [`raycast_nearest`] keeps the closest hit in front of the ray
//!
//! ## Usage
//!
//! ```no_run
//! use transform_controls::gfx::picking::{screen_to_ray, Raycast, Sphere};
//! use transform_controls::gfx::camera::OrbitCamera;
//! use cgmath::Vector3;
//!
//! let camera = OrbitCamera::look_at(Vector3::new(0.0, 5.0, 10.0), Vector3::new(0.0, 0.0, 0.0), 1.0);
//! let ray = screen_to_ray((0.0, 0.0), &camera);
//! let sphere = Sphere::new(Vector3::new(0.0, 0.0, 0.0), 1.0);
//! if let Some(hit) = sphere.raycast(&ray) {
//!     println!("hit at {:?}", hit.point);
//! }
//! ```

use cgmath::{ElementWise, InnerSpace, Matrix4, Vector3, Vector4};

use crate::gfx::camera::camera_utils::Camera;
use crate::gfx::transform::{invert_or_identity, EPSILON};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// A successful ray intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World space intersection point
    pub point: Vector3<f32>,
    /// Surface normal at the hit, facing the ray origin side
    pub normal: Vector3<f32>,
    /// Distance from the ray origin
    pub distance: f32,
}

/// Anything a ray can be tested against
pub trait Raycast {
    /// Nearest intersection in front of the ray origin, if any
    fn raycast(&self, ray: &Ray) -> Option<RayHit>;
}

/// Test a set of targets and keep the closest hit
pub fn raycast_nearest(ray: &Ray, targets: &[&dyn Raycast]) -> Option<RayHit> {
    targets
        .iter()
        .filter_map(|target| target.raycast(ray))
        .fold(None, |closest: Option<RayHit>, hit| match closest {
            Some(best) if best.distance <= hit.distance => Some(best),
            _ => Some(hit),
        })
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Unit cube centered on the origin
    pub fn unit() -> Self {
        Self::new(Vector3::new(-0.5, -0.5, -0.5), Vector3::new(0.5, 0.5, 0.5))
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0));
        }

        let mut min = Vector3::new(vertices[0][0], vertices[0][1], vertices[0][2]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            min.x = min.x.min(vertex[0]);
            min.y = min.y.min(vertex[1]);
            min.z = min.z.min(vertex[2]);
            max.x = max.x.max(vertex[0]);
            max.y = max.y.max(vertex[1]);
            max.z = max.z.max(vertex[2]);
        }

        Self::new(min, max)
    }

    /// Center of the box
    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Largest edge length
    pub fn max_extent(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &AABB) -> Self {
        Self::new(
            Vector3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            Vector3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        )
    }

    /// Test ray-AABB intersection
    /// Returns the distance to intersection point, or None if no intersection
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// Apply a transformation matrix to the AABB
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        // Transform all 8 corners of the AABB and compute new bounds
        let corners = [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ];

        let mut transformed_corners = Vec::with_capacity(8);
        for corner in &corners {
            let homogeneous = Vector4::new(corner.x, corner.y, corner.z, 1.0);
            let transformed = matrix * homogeneous;
            transformed_corners.push([
                transformed.x / transformed.w,
                transformed.y / transformed.w,
                transformed.z / transformed.w,
            ]);
        }

        Self::from_vertices(&transformed_corners)
    }
}

impl Raycast for AABB {
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let distance = self.intersect_ray(ray)?;
        let point = ray.point_at(distance);

        // The face whose plane the hit lies on gives the normal
        let center = self.center();
        let half = self.size() * 0.5;
        let local = point - center;
        let ratios = [
            (local.x / half.x.max(EPSILON)).abs(),
            (local.y / half.y.max(EPSILON)).abs(),
            (local.z / half.z.max(EPSILON)).abs(),
        ];
        let normal = if ratios[0] >= ratios[1] && ratios[0] >= ratios[2] {
            Vector3::new(local.x.signum(), 0.0, 0.0)
        } else if ratios[1] >= ratios[2] {
            Vector3::new(0.0, local.y.signum(), 0.0)
        } else {
            Vector3::new(0.0, 0.0, local.z.signum())
        };

        Some(RayHit {
            point,
            normal,
            distance,
        })
    }
}

/// A sphere, used as the coarse pick volume around a manipulated object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vector3<f32>,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vector3<f32>, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Raycast for Sphere {
    /// Both faces count, so a ray starting inside reports the exit point.
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let to_origin = ray.origin - self.center;
        let b = to_origin.dot(ray.direction);
        let c = to_origin.dot(to_origin) - self.radius * self.radius;
        let discriminant = b * b - c;

        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let distance = if -b - root >= 0.0 {
            -b - root
        } else if -b + root >= 0.0 {
            -b + root
        } else {
            return None;
        };

        let point = ray.point_at(distance);
        let mut normal = (point - self.center) / self.radius.max(EPSILON);
        if normal.dot(ray.direction) > 0.0 {
            normal = -normal;
        }

        Some(RayHit {
            point,
            normal,
            distance,
        })
    }
}

/// An infinite, double sided plane through `origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Vector3<f32>,
    pub normal: Vector3<f32>,
}

impl Plane {
    pub fn new(origin: Vector3<f32>, normal: Vector3<f32>) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }
}

impl Raycast for Plane {
    /// Rays parallel to the plane never hit.
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let denominator = self.normal.dot(ray.direction);
        if denominator.abs() < EPSILON {
            return None;
        }

        let distance = self.normal.dot(self.origin - ray.origin) / denominator;
        if distance < 0.0 {
            return None;
        }

        let normal = if denominator > 0.0 {
            -self.normal
        } else {
            self.normal
        };

        Some(RayHit {
            point: ray.point_at(distance),
            normal,
            distance,
        })
    }
}

/// Convert a normalized pointer (both axes in [-1, 1], Y up) to a world-space ray
pub fn screen_to_ray<C: Camera>(ndc: (f32, f32), camera: &C) -> Ray {
    let (ndc_x, ndc_y) = ndc;

    let inv_view_proj = invert_or_identity(&camera.build_view_projection_matrix());

    // Transform near and far points from NDC to world space
    let near_point = Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
    let far_point = Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

    let world_near = inv_view_proj * near_point;
    let world_far = inv_view_proj * far_point;

    // Convert from homogeneous coordinates
    let near_3d = world_near.truncate() / world_near.w;
    let far_3d = world_far.truncate() / world_far.w;

    Ray::new(near_3d, far_3d - near_3d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::OrbitCamera;

    fn near(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-3
    }

    #[test]
    fn test_aabb_creation() {
        let vertices = vec![
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [-1.0, -1.0, -1.0],
        ];
        let aabb = AABB::from_vertices(&vertices);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(aabb.max_extent(), 2.0);
    }

    #[test]
    fn test_aabb_union_covers_both() {
        let a = AABB::unit();
        let b = AABB::new(Vector3::new(2.0, -3.0, 0.0), Vector3::new(4.0, 0.0, 0.25));
        let merged = a.union(&b);

        assert_eq!(merged.min, Vector3::new(-0.5, -3.0, -0.5));
        assert_eq!(merged.max, Vector3::new(4.0, 0.5, 0.5));
    }

    #[test]
    fn test_ray_aabb_intersection() {
        let aabb = AABB::new(
            Vector3::new(-1.0, -1.0, -1.0),
            Vector3::new(1.0, 1.0, 1.0),
        );

        // Ray hitting the box
        let ray = Ray::new(
            Vector3::new(0.0, 0.0, -5.0),
            Vector3::new(0.0, 0.0, 1.0),
        );

        let hit = aabb.raycast(&ray).expect("ray should hit the box");
        assert!(near(hit.point, Vector3::new(0.0, 0.0, -1.0)));
        assert!(near(hit.normal, Vector3::new(0.0, 0.0, -1.0)));

        // Ray missing the box
        let ray_miss = Ray::new(
            Vector3::new(5.0, 0.0, -5.0),
            Vector3::new(0.0, 0.0, 1.0),
        );

        assert!(aabb.intersect_ray(&ray_miss).is_none());
    }

    #[test]
    fn test_sphere_hit_from_outside_and_inside() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, 0.0), 2.0);

        let outside = Ray::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = sphere.raycast(&outside).expect("outside ray should hit");
        assert!(near(hit.point, Vector3::new(0.0, 0.0, 2.0)));
        assert!((hit.distance - 8.0).abs() < 1e-4);

        let inside = Ray::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let hit = sphere.raycast(&inside).expect("inside ray should hit the far side");
        assert!(near(hit.point, Vector3::new(2.0, 0.0, 0.0)));

        let behind = Ray::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(sphere.raycast(&behind).is_none());
    }

    #[test]
    fn test_plane_parallel_and_behind_rays_miss() {
        let ground = Plane::new(Vector3::new(0.0, 0.0, 0.0), Vector3::unit_y());

        let parallel = Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(ground.raycast(&parallel).is_none());

        let away = Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert!(ground.raycast(&away).is_none());

        let down = Ray::new(Vector3::new(2.0, 4.0, -1.0), Vector3::new(0.0, -1.0, 0.0));
        let hit = ground.raycast(&down).expect("downward ray should hit the ground");
        assert!(near(hit.point, Vector3::new(2.0, 0.0, -1.0)));
        assert!(near(hit.normal, Vector3::unit_y()));
    }

    #[test]
    fn test_raycast_nearest_prefers_closest() {
        let far_plane = Plane::new(Vector3::new(0.0, 0.0, -5.0), Vector3::unit_z());
        let near_sphere = Sphere::new(Vector3::new(0.0, 0.0, 0.0), 1.0);
        let ray = Ray::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));

        let hit = raycast_nearest(&ray, &[&far_plane, &near_sphere]).expect("something is hit");
        assert!(near(hit.point, Vector3::new(0.0, 0.0, 1.0)));

        let miss = Ray::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(raycast_nearest(&miss, &[&far_plane, &near_sphere]).is_none());
    }

    #[test]
    fn test_screen_center_ray_points_at_target() {
        let camera = OrbitCamera::look_at(
            Vector3::new(0.0, 0.0, 10.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.0,
        );
        let ray = screen_to_ray((0.0, 0.0), &camera);

        assert!(near(ray.direction, Vector3::new(0.0, 0.0, -1.0)));
        assert!(ray.origin.z < 10.0 && ray.origin.z > 9.0);

        // Upper half of the screen looks upward
        let up = screen_to_ray((0.0, 0.5), &camera);
        assert!(up.direction.y > 0.0);
    }
}
