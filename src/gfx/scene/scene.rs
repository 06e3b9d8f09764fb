use cgmath::{Matrix4, SquareMatrix};
use thiserror::Error;

use crate::gfx::camera::OrbitCamera;
use crate::gfx::picking::AABB;

use super::object::Object;

/// Errors from editing the scene hierarchy
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("object index {index} is out of range for a scene with {count} objects")]
    ObjectNotFound { index: usize, count: usize },

    #[error("parenting object {child} under {parent} would create a cycle")]
    ParentCycle { child: usize, parent: usize },
}

/// Main scene containing objects and camera
pub struct Scene {
    pub camera: OrbitCamera,
    pub objects: Vec<Object>,
}

impl Scene {
    /// Creates a new, empty scene viewed through `camera`
    pub fn new(camera: OrbitCamera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
        }
    }

    /// Adds an object and returns its index
    pub fn add_object(&mut self, object: Object) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Gets the total number of objects
    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gets mutable reference to an object by index
    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.objects.get_mut(index)
    }

    /// Gets immutable reference to an object by index
    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    /// Re-parents `child`. `None` makes it a root object.
    ///
    /// The child's local transform is kept as is, so its world transform
    /// changes with the new parent.
    pub fn set_parent(&mut self, child: usize, parent: Option<usize>) -> Result<(), SceneError> {
        self.check_index(child)?;

        if let Some(parent) = parent {
            self.check_index(parent)?;

            // Walk up from the new parent; meeting the child means a cycle
            let mut cursor = Some(parent);
            while let Some(index) = cursor {
                if index == child {
                    return Err(SceneError::ParentCycle { child, parent });
                }
                cursor = self.objects[index].parent;
            }
        }

        self.objects[child].parent = parent;
        Ok(())
    }

    /// Object-to-world matrix, composed through the parent chain
    pub fn world_matrix(&self, index: usize) -> Option<Matrix4<f32>> {
        let object = self.objects.get(index)?;
        let parent = self.parent_world_matrix(index)?;
        Some(parent * object.local_matrix())
    }

    /// World matrix of the object's parent, identity for root objects
    pub fn parent_world_matrix(&self, index: usize) -> Option<Matrix4<f32>> {
        let object = self.objects.get(index)?;

        let mut matrix = Matrix4::identity();
        let mut cursor = object.parent;
        // Bounded by the object count in case the hierarchy was edited by hand
        let mut remaining = self.objects.len();
        while let (Some(parent_index), true) = (cursor, remaining > 0) {
            let parent = self.objects.get(parent_index)?;
            matrix = parent.local_matrix() * matrix;
            cursor = parent.parent;
            remaining -= 1;
        }

        Some(matrix)
    }

    /// World-space box around the object and everything parented under it
    pub fn world_bounds(&self, index: usize) -> Option<AABB> {
        let object = self.objects.get(index)?;
        let world = self.world_matrix(index)?;
        let mut bounds = object.bounds.transform(&world);

        for (other, descendant) in self.objects.iter().enumerate() {
            if other == index || !self.is_descendant_of(other, index) {
                continue;
            }
            if let Some(matrix) = self.world_matrix(other) {
                bounds = bounds.union(&descendant.bounds.transform(&matrix));
            }
        }

        Some(bounds)
    }

    /// True when `ancestor` appears on the parent chain of `index`
    pub fn is_descendant_of(&self, index: usize, ancestor: usize) -> bool {
        let mut cursor = self.objects.get(index).and_then(|object| object.parent);
        let mut remaining = self.objects.len();
        while let (Some(parent), true) = (cursor, remaining > 0) {
            if parent == ancestor {
                return true;
            }
            cursor = self.objects.get(parent).and_then(|object| object.parent);
            remaining -= 1;
        }
        false
    }

    fn check_index(&self, index: usize) -> Result<(), SceneError> {
        if index < self.objects.len() {
            Ok(())
        } else {
            Err(SceneError::ObjectNotFound {
                index,
                count: self.objects.len(),
            })
        }
    }
}
