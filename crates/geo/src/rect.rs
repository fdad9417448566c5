//! Axis aligned rectangles in world space.

use std::fmt::Debug;

use approx::{AbsDiffEq, RelativeEq};
use geo_types::CoordNum;
use num::Zero;

use crate::Point;

/// Axis aligned rectangle, stored as its top left and bottom right corner (y axis pointing up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T>
where
    T: Copy + CoordNum,
{
    top_left: Point<T>,
    bottom_right: Point<T>,
}

impl<T> Rect<T>
where
    T: Copy + CoordNum,
{
    /// Creates the rectangle spanned by two arbitrary corner points.
    pub fn from_points(p1: Point<T>, p2: Point<T>) -> Self {
        let top_left = Point::new(min(p1.x(), p2.x()), max(p1.y(), p2.y()));
        let bottom_right = Point::new(max(p1.x(), p2.x()), min(p1.y(), p2.y()));

        Rect { top_left, bottom_right }
    }

    /// The smallest rectangle containing all the points, `None` for an empty iterator.
    pub fn bounding(points: impl IntoIterator<Item = Point<T>>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Rect<T>>, p| {
            Some(match acc {
                None => Rect::from_points(p, p),
                Some(r) => Rect {
                    top_left: Point::new(min(r.top_left.x(), p.x()), max(r.top_left.y(), p.y())),
                    bottom_right: Point::new(max(r.bottom_right.x(), p.x()), min(r.bottom_right.y(), p.y())),
                },
            })
        })
    }

    pub fn width(&self) -> T {
        self.bottom_right.x() - self.top_left.x()
    }

    pub fn height(&self) -> T {
        self.top_left.y() - self.bottom_right.y()
    }

    pub fn is_empty(&self) -> bool
    where
        T: Zero,
    {
        self.width() == T::zero() || self.height() == T::zero()
    }

    pub fn min_x(&self) -> T {
        self.top_left.x()
    }

    pub fn max_x(&self) -> T {
        self.bottom_right.x()
    }

    pub fn min_y(&self) -> T {
        self.bottom_right.y()
    }

    pub fn max_y(&self) -> T {
        self.top_left.y()
    }

    pub fn top_left(&self) -> Point<T> {
        self.top_left
    }

    pub fn top_right(&self) -> Point<T> {
        Point::new(self.bottom_right.x(), self.top_left.y())
    }

    pub fn bottom_left(&self) -> Point<T> {
        Point::new(self.top_left.x(), self.bottom_right.y())
    }

    pub fn bottom_right(&self) -> Point<T> {
        self.bottom_right
    }
}

fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl From<Rect<f64>> for geo_types::Polygon<f64> {
    fn from(rect: Rect<f64>) -> geo_types::Polygon<f64> {
        geo_types::Polygon::new(
            geo_types::LineString::from(vec![
                rect.bottom_left(),
                rect.bottom_right(),
                rect.top_right(),
                rect.top_left(),
                rect.bottom_left(),
            ]),
            Vec::default(),
        )
    }
}

impl<T> AbsDiffEq for Rect<T>
where
    T: PartialEq + std::fmt::Debug + Copy + CoordNum + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.top_left.abs_diff_eq(&other.top_left, epsilon) && self.bottom_right.abs_diff_eq(&other.bottom_right, epsilon)
    }
}

impl<T: PartialEq + std::fmt::Debug + Copy + CoordNum + RelativeEq<Epsilon = T>> RelativeEq for Rect<T> {
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        Point::<T>::relative_eq(&self.top_left, &other.top_left, epsilon, max_relative)
            && Point::<T>::relative_eq(&self.bottom_right, &other.bottom_right, epsilon, max_relative)
    }
}
