use crate::bounding_volume::Aabb;
use crate::shape::Polygon;

impl Polygon {
    /// Computes the AABB of this polygon.
    pub fn aabb(&self) -> Aabb {
        let vertices = self.vertices();
        let mut aabb = Aabb::new(vertices[0], vertices[0]);

        for pt in &vertices[1..] {
            aabb.take_point(*pt);
        }

        aabb
    }
}
