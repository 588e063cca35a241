use glam::Vec2;

/// Heading of a right-angle trace segment, in canvas space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

// Allowed next headings, indexed by `Direction as usize`. Only 90 degree turns:
// a trace never continues straight and never doubles back.
const TURNS: [[Direction; 2]; 4] = [
    [Direction::Left, Direction::Right], // Up
    [Direction::Up, Direction::Down],    // Right
    [Direction::Left, Direction::Right], // Down
    [Direction::Up, Direction::Down],    // Left
];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    #[inline]
    pub fn turns(self) -> [Direction; 2] {
        TURNS[self as usize]
    }

    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }
}

/// Viewport edge a right-angle trace starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// First heading, pointing into the viewport.
    #[inline]
    pub fn inward(self) -> Direction {
        match self {
            Edge::Top => Direction::Down,
            Edge::Right => Direction::Left,
            Edge::Bottom => Direction::Up,
            Edge::Left => Direction::Right,
        }
    }
}
