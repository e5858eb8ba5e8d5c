use glam::Vec3;

/// Axis-aligned bounding box.
///
/// Used for per-mesh bounds computed at decode time so consumers can frame
/// or cull imported geometry without re-walking vertex arrays.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an empty AABB (contains nothing).
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Create an AABB from two corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Compute the bounds of a point set. Empty input yields `empty()`.
    pub fn from_iter(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.grow(p);
        }
        aabb
    }

    /// Expand to contain a point.
    pub fn grow(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(a: &Aabb, b: &Aabb) -> Self {
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// True if the box contains no points.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Center of the box.
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Size of the box along each axis.
    pub fn extent(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_contains_nothing() {
        let aabb = Aabb::empty();
        assert!(aabb.is_empty());
        assert_eq!(aabb.extent(), Vec3::ZERO);
    }

    #[test]
    fn test_from_iter() {
        let aabb = Aabb::from_iter([
            Vec3::new(-1.0, 2.0, 0.0),
            Vec3::new(3.0, -4.0, 5.0),
            Vec3::new(0.0, 0.0, 0.0),
        ]);
        assert_eq!(aabb.min, Vec3::new(-1.0, -4.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(3.0, 2.0, 5.0));
        assert_eq!(aabb.centroid(), Vec3::new(1.0, -1.0, 2.5));
    }

    #[test]
    fn test_surrounding() {
        let a = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_points(Vec3::splat(2.0), Vec3::splat(3.0));
        let s = Aabb::surrounding(&a, &b);
        assert_eq!(s.min, Vec3::ZERO);
        assert_eq!(s.max, Vec3::splat(3.0));
    }
}
