//! Regular flat-top hexagon geometry
//!
//! The hexagon is described by its center and circumradius. Flat-top
//! orientation places two vertices on the horizontal axis, so the full
//! width is `2r` and the full height is `sqrt(3) * r`.

/// Ratio of a flat-top hexagon's half-height to its circumradius
const HALF_HEIGHT_RATIO: f64 = 0.866_025_403_784_438_6; // sqrt(3) / 2

/// A regular flat-top hexagon in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hexagon {
    /// Center point (x, y)
    pub center: (f64, f64),
    /// Distance from the center to each vertex
    pub circumradius: f64,
}

impl Hexagon {
    /// Largest regular flat-top hexagon centered in a `width` x `height` box
    ///
    /// The width constrains the circumradius to `width / 2` and the height
    /// to `height / sqrt(3)`; the smaller of the two wins.
    pub fn inscribed(width: u32, height: u32) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);
        let circumradius = (w / 2.0).min(h / (2.0 * HALF_HEIGHT_RATIO));

        Self {
            center: (w / 2.0, h / 2.0),
            circumradius,
        }
    }

    /// The same hexagon moved to a new center
    pub const fn with_center(self, x: f64, y: f64) -> Self {
        Self {
            center: (x, y),
            circumradius: self.circumradius,
        }
    }

    /// The six vertices in counter-clockwise order starting from the
    /// rightmost point
    pub fn vertices(&self) -> [(f64, f64); 6] {
        let (cx, cy) = self.center;
        let r = self.circumradius;
        let mut points = [(0.0, 0.0); 6];

        for (i, point) in points.iter_mut().enumerate() {
            let theta = f64::from(i as u32) * std::f64::consts::FRAC_PI_3;
            *point = (r.mul_add(theta.cos(), cx), r.mul_add(theta.sin(), cy));
        }

        points
    }

    /// Whether the point lies inside or on the boundary of the hexagon
    ///
    /// Uses the closed form for a flat-top hexagon: fold the point into the
    /// first quadrant relative to the center, then test the horizontal edge
    /// and the single slanted edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = (x - self.center.0).abs();
        let dy = (y - self.center.1).abs();
        let r = self.circumradius;

        if dy > r * HALF_HEIGHT_RATIO {
            return false;
        }

        // Slanted edge between the rightmost vertex and the top-right vertex
        HALF_HEIGHT_RATIO.mul_add(2.0 * dx, dy) <= 2.0 * r * HALF_HEIGHT_RATIO
    }

    /// Full width of the hexagon's bounding box
    pub const fn width(&self) -> f64 {
        2.0 * self.circumradius
    }

    /// Full height of the hexagon's bounding box
    pub const fn height(&self) -> f64 {
        2.0 * self.circumradius * HALF_HEIGHT_RATIO
    }
}
