use glam::IVec2;

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub pos: IVec2,  // top-left corner
    pub size: IVec2, // width, height
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Centre point, rounded down
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    pub fn set_top(&mut self, top: i32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.pos.y = bottom - self.size.y;
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.pos += delta;
    }

    /// Overlap test; rectangles that only share an edge count as overlapping
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(30, 250, 10, 100);
        assert_eq!(rect.left(), 30);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.top(), 250);
        assert_eq!(rect.bottom(), 350);
        assert_eq!(rect.center(), IVec2::new(35, 300));
    }

    #[test]
    fn test_set_bottom_keeps_size() {
        let mut rect = Rect::new(0, 550, 10, 100);
        rect.set_bottom(600);
        assert_eq!(rect.top(), 500);
        assert_eq!(rect.height(), 100);
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_shared_edge() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(a.intersects(&right), "Touching vertical edges overlap");
        assert!(a.intersects(&below), "Touching horizontal edges overlap");
    }

    #[test]
    fn test_intersects_separated() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(11, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 11, 10, 10)));
    }
}
