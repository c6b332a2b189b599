use super::action::Heading;
use serde::{Deserialize, Serialize};

/// A position on the game grid
///
/// Coordinates are whole grid cells. The original play field moves in
/// quarter-unit world steps; one cell here corresponds to one such step,
/// which keeps position equality and hashing exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point displaced by (dx, dy)
    pub fn offset_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Point one step along `heading`
    pub fn stepped(&self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        self.offset_by(dx, dy)
    }

    /// Point folded into a `width` x `height` grid with wraparound edges
    pub fn wrapped(&self, width: usize, height: usize) -> Self {
        Self {
            x: self.x.rem_euclid(width as i32),
            y: self.y.rem_euclid(height as i32),
        }
    }

    /// Euclidean distance to `other`, in cells
    pub fn distance_to(&self, other: GridPoint) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Position and orientation of the head or of one body segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub position: GridPoint,
    pub heading: Heading,
}

impl Pose {
    pub fn new(position: GridPoint, heading: Heading) -> Self {
        Self { position, heading }
    }
}

/// The snake: a head pose plus trailing body segments
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Head position and orientation
    pub head: Pose,
    /// Body segments behind the head, head-to-tail order
    pub segments: Vec<Pose>,
}

impl Snake {
    /// Create a snake of `length` cells with the given head pose, body laid
    /// out behind the head opposite its heading
    pub fn new(head: Pose, length: usize) -> Self {
        let (dx, dy) = head.heading.delta();
        let mut segments = Vec::new();
        let mut prev = head.position;

        for _ in 1..length {
            let pos = prev.offset_by(-dx, -dy);
            segments.push(Pose::new(pos, head.heading));
            prev = pos;
        }

        Self { head, segments }
    }

    /// Total length including the head
    pub fn len(&self) -> usize {
        1 + self.segments.len()
    }

    /// True if `pos` coincides with any body segment (head excluded)
    pub fn collides_with_body(&self, pos: GridPoint) -> bool {
        self.segments.iter().any(|segment| segment.position == pos)
    }

    /// True if `pos` is covered by the head or any segment
    pub fn occupies(&self, pos: GridPoint) -> bool {
        self.head.position == pos || self.collides_with_body(pos)
    }

    /// Advance the snake so its head takes `new_head`
    ///
    /// Each segment takes the pose its predecessor held, the first segment
    /// taking the old head pose. When `grow` is true the tail is kept and
    /// the body gains one segment.
    pub fn advance_to(&mut self, new_head: Pose, grow: bool) {
        self.segments.insert(0, self.head);
        if !grow {
            self.segments.pop();
        }
        self.head = new_head;
    }
}

/// Complete state of one game in progress
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: GridPoint,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    pub fn new(snake: Snake, food: GridPoint) -> Self {
        Self {
            snake,
            food,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_stepping() {
        let pos = GridPoint::new(5, 5);
        assert_eq!(pos.stepped(Heading::Up), GridPoint::new(5, 6));
        assert_eq!(pos.stepped(Heading::Down), GridPoint::new(5, 4));
        assert_eq!(pos.stepped(Heading::Right), GridPoint::new(6, 5));
        assert_eq!(pos.stepped(Heading::Left), GridPoint::new(4, 5));
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(
            GridPoint::new(-1, 5).wrapped(10, 10),
            GridPoint::new(9, 5)
        );
        assert_eq!(
            GridPoint::new(10, 5).wrapped(10, 10),
            GridPoint::new(0, 5)
        );
        assert_eq!(
            GridPoint::new(3, -1).wrapped(10, 10),
            GridPoint::new(3, 9)
        );
        assert_eq!(
            GridPoint::new(3, 10).wrapped(10, 10),
            GridPoint::new(3, 0)
        );
        assert_eq!(GridPoint::new(4, 7).wrapped(10, 10), GridPoint::new(4, 7));
    }

    #[test]
    fn test_distance() {
        let origin = GridPoint::new(0, 0);
        assert_eq!(origin.distance_to(GridPoint::new(0, 10)), 10.0);
        assert_eq!(origin.distance_to(GridPoint::new(3, 4)), 5.0);
        assert_eq!(origin.distance_to(origin), 0.0);
    }

    #[test]
    fn test_snake_creation_lays_body_behind_head() {
        let head = Pose::new(GridPoint::new(5, 5), Heading::Up);
        let snake = Snake::new(head, 3);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head.position, GridPoint::new(5, 5));
        assert_eq!(snake.segments[0].position, GridPoint::new(5, 4));
        assert_eq!(snake.segments[1].position, GridPoint::new(5, 3));
        assert!(snake
            .segments
            .iter()
            .all(|segment| segment.heading == Heading::Up));
    }

    #[test]
    fn test_advance_propagates_poses_down_the_chain() {
        let head = Pose::new(GridPoint::new(5, 5), Heading::Up);
        let mut snake = Snake::new(head, 3);

        let new_head = Pose::new(GridPoint::new(6, 5), Heading::Right);
        snake.advance_to(new_head, false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head, new_head);
        // first segment takes the old head pose, second the old first
        assert_eq!(snake.segments[0], Pose::new(GridPoint::new(5, 5), Heading::Up));
        assert_eq!(snake.segments[1], Pose::new(GridPoint::new(5, 4), Heading::Up));
    }

    #[test]
    fn test_advance_with_growth_keeps_tail() {
        let head = Pose::new(GridPoint::new(5, 5), Heading::Up);
        let mut snake = Snake::new(head, 3);

        snake.advance_to(Pose::new(GridPoint::new(5, 6), Heading::Up), true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments[2].position, GridPoint::new(5, 3));
    }

    #[test]
    fn test_collision_detection_excludes_head() {
        let head = Pose::new(GridPoint::new(5, 5), Heading::Up);
        let snake = Snake::new(head, 3);

        assert!(!snake.collides_with_body(GridPoint::new(5, 5)));
        assert!(snake.collides_with_body(GridPoint::new(5, 4)));
        assert!(!snake.collides_with_body(GridPoint::new(9, 9)));
        assert!(snake.occupies(GridPoint::new(5, 5)));
    }
}
