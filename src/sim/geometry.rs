//! Axis-aligned bounding box tests

use super::entity::Entity;

/// Strict AABB overlap. Boxes that only share an edge do not overlap.
#[inline]
pub fn is_overlapping(a: &Entity, b: &Entity) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let player = Entity::new(100.0, 100.0, 50.0, 100.0);
        let obstacle = Entity::new(100.0, 190.0, 150.0, 150.0);
        assert!(is_overlapping(&player, &obstacle));
        assert!(is_overlapping(&obstacle, &player));
    }

    #[test]
    fn test_separate_boxes() {
        let player = Entity::new(0.0, 0.0, 50.0, 100.0);
        let obstacle = Entity::new(200.0, 200.0, 150.0, 150.0);
        assert!(!is_overlapping(&player, &obstacle));
        assert!(!is_overlapping(&obstacle, &player));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Entity::new(0.0, 0.0, 50.0, 50.0);
        let right = Entity::new(50.0, 0.0, 50.0, 50.0);
        let below = Entity::new(0.0, 50.0, 50.0, 50.0);
        assert!(!is_overlapping(&a, &right));
        assert!(!is_overlapping(&a, &below));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Entity::new(0.0, 0.0, 200.0, 200.0);
        let inner = Entity::new(50.0, 50.0, 10.0, 10.0);
        assert!(is_overlapping(&outer, &inner));
        assert!(is_overlapping(&inner, &outer));
    }
}
