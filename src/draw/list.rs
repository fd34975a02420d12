use crate::draw::gradient::RadialGradient;
use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2};
use kurbo::Shape;

/// Flattening tolerance used when converting analytic shapes to paths.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    Radial(RadialGradient),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub round_caps: bool,
}

impl StrokeStyle {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            round_caps: false,
        }
    }

    pub fn round(mut self) -> Self {
        self.round_caps = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawMode {
    Fill,
    Stroke(StrokeStyle),
}

/// One backend-agnostic drawing command. `path` is in local space; `transform` maps it into the
/// space of the list (logical canvas pixels).
#[derive(Clone, Debug)]
pub struct DrawOp {
    pub path: BezPath,
    pub transform: Affine,
    pub paint: Paint,
    pub mode: DrawMode,
}

impl DrawOp {
    pub fn fill(path: BezPath, paint: Paint) -> Self {
        Self {
            path,
            transform: Affine::IDENTITY,
            paint,
            mode: DrawMode::Fill,
        }
    }

    pub fn stroke(path: BezPath, color: Rgba8, style: StrokeStyle) -> Self {
        Self {
            path,
            transform: Affine::IDENTITY,
            paint: Paint::Solid(color),
            mode: DrawMode::Stroke(style),
        }
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Bounding box in list space, stroke width included.
    pub fn bounds(&self) -> Rect {
        let rect = (self.transform * self.path.clone()).bounding_box();
        match self.mode {
            DrawMode::Fill => rect,
            DrawMode::Stroke(s) => {
                let [a, b, c, d, _, _] = self.transform.as_coeffs();
                let scale = (a * d - b * c).abs().sqrt();
                let half = 0.5 * s.width * scale;
                rect.inflate(half, half)
            }
        }
    }

    /// Same geometry painted with a flat color (used for glow sources).
    pub fn tinted(&self, color: Rgba8) -> Self {
        Self {
            paint: Paint::Solid(color),
            ..self.clone()
        }
    }
}

/// Ordered list of draw commands; later ops paint over earlier ones.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn fill(&mut self, path: BezPath, paint: Paint) {
        self.push(DrawOp::fill(path, paint));
    }

    pub fn fill_color(&mut self, path: BezPath, color: Rgba8) {
        self.fill(path, Paint::Solid(color));
    }

    pub fn stroke(&mut self, path: BezPath, color: Rgba8, style: StrokeStyle) {
        self.push(DrawOp::stroke(path, color, style));
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter()
    }

    pub fn extend(&mut self, other: DrawList) {
        self.ops.extend(other.ops);
    }

    /// Union of all op bounds, `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.ops
            .iter()
            .map(DrawOp::bounds)
            .reduce(|acc, r| acc.union(r))
    }

    pub fn tinted(&self, color: Rgba8) -> Self {
        Self {
            ops: self.ops.iter().map(|op| op.tinted(color)).collect(),
        }
    }
}

pub fn circle(center: Point, radius: f64) -> BezPath {
    kurbo::Circle::new(center, radius.max(0.0)).to_path(PATH_TOLERANCE)
}

pub fn ellipse(center: Point, rx: f64, ry: f64, rotation: f64) -> BezPath {
    kurbo::Ellipse::new(center, Vec2::new(rx.max(0.0), ry.max(0.0)), rotation)
        .to_path(PATH_TOLERANCE)
}

pub fn rect(x: f64, y: f64, w: f64, h: f64) -> BezPath {
    Rect::new(x, y, x + w, y + h).to_path(PATH_TOLERANCE)
}

pub fn line(from: Point, to: Point) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(from);
    p.line_to(to);
    p
}

pub fn polygon(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut p = BezPath::new();
    for (i, pt) in points.into_iter().enumerate() {
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p.close_path();
    p
}

/// A straight line split into `on`-long dashes separated by `off`-long gaps, starting with a
/// dash at `from`.
pub fn dashed_line(from: Point, to: Point, on: f64, off: f64) -> BezPath {
    let mut p = BezPath::new();
    let delta = to - from;
    let len = delta.hypot();
    if len <= 0.0 || on <= 0.0 {
        return p;
    }
    let dir = delta / len;
    let period = on + off.max(0.0);
    let mut at = 0.0;
    while at < len {
        let end = (at + on).min(len);
        p.move_to(from + dir * at);
        p.line_to(from + dir * end);
        at += period;
    }
    p
}

#[cfg(test)]
#[path = "../../tests/unit/draw/list.rs"]
mod tests;
