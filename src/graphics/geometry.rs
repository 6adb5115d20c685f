use crate::graphics::Point;

/// Edge size of a map tile in screen pixels.
pub const TILE_SIZE: i32 = 8;

/// Provides mapping between tile and screen coordinates.
pub trait TileGridView {
    /// Converts screen coordinates to tile coordinates.
    fn from_screen(&self, p: Point) -> Point;

    /// Converts tile coordinates to screen coordinates of the tile's top left corner.
    fn to_screen(&self, p: Point) -> Point;
}

/// Square tile grid scrolled so that `scroll` tile is at the screen origin.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScrolledGrid {
    pub scroll: Point,
}

impl ScrolledGrid {
    pub fn new(scroll: Point) -> Self {
        Self {
            scroll,
        }
    }
}

impl TileGridView for ScrolledGrid {
    fn from_screen(&self, p: Point) -> Point {
        Point::new(
            p.x.div_euclid(TILE_SIZE) + self.scroll.x,
            p.y.div_euclid(TILE_SIZE) + self.scroll.y)
    }

    fn to_screen(&self, p: Point) -> Point {
        (p - self.scroll) * TILE_SIZE
    }
}
