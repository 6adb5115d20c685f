use num_traits::clamp;
use std::ops;
use std::str::FromStr;

pub mod color;
pub mod geometry;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
        }
    }

    pub fn add(self, p: impl Into<Self>) -> Self {
        let p = p.into();
        Self::new(self.x + p.x, self.y + p.y)
    }

    /// Clamps both coordinates independently into the inclusive `min..=max` box.
    pub fn clamp_in(self, min: impl Into<Self>, max: impl Into<Self>) -> Self {
        let min = min.into();
        let max = max.into();
        Self::new(
            clamp(self.x, min.x, max.x),
            clamp(self.y, min.y, max.y))
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl ops::Add for Point {
    type Output = Self;

    fn add(self, o: Self) -> Self {
        Point::add(self, o)
    }
}

impl ops::Sub for Point {
    type Output = Self;

    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y)
    }
}

impl ops::Mul<i32> for Point {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i32, i32)> for Point {
    fn from(v: (i32, i32)) -> Self {
        Self::new(v.0, v.1)
    }
}

/// Parses `X,Y`.
impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s.splitn(2, ',');
        let mut coord = || it.next()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .ok_or_else(|| format!("invalid point: {}", s));
        let x = coord()?;
        let y = coord()?;
        Ok(Self::new(x, y))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn with_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn translate(&self, x: i32, y: i32) -> Self {
        Self {
            left: self.left + x,
            top: self.top + y,
            right: self.right + x,
            bottom: self.bottom + y,
        }
    }

    pub fn contains(&self, p: impl Into<Point>) -> bool {
        let p = p.into();
        p.x >= self.left && p.x < self.right &&
            p.y >= self.top && p.y < self.bottom
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::with_size(10, 20, 59, 20);
        assert!(r.contains((10, 20)));
        assert!(r.contains((68, 39)));
        assert!(!r.contains((69, 39)));
        assert!(!r.contains((68, 40)));
        assert!(!r.contains((9, 25)));
    }

    #[test]
    fn parse_point() {
        assert_eq!("12,-3".parse::<Point>().unwrap(), Point::new(12, -3));
        assert_eq!(" 5, 6".parse::<Point>().unwrap(), Point::new(5, 6));
        assert!("12".parse::<Point>().is_err());
        assert!("a,b".parse::<Point>().is_err());
        assert!("1,2,3".parse::<Point>().is_err());
    }

    #[test]
    fn point_clamp_in() {
        assert_eq!(Point::new(-5, 500).clamp_in((0, 0), (540, 380)), Point::new(0, 380));
        assert_eq!(Point::new(12, 34).clamp_in((0, 0), (540, 380)), Point::new(12, 34));
    }
}
