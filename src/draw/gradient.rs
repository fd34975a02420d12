use crate::foundation::core::{Point, Rgba8};

/// Two-circle radial gradient, canvas style: color `t` lives on the circle interpolated between
/// (`start_center`, `start_radius`) and (`end_center`, `end_radius`). Stops are padded outside
/// `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub start_center: Point,
    pub start_radius: f64,
    pub end_center: Point,
    pub end_radius: f64,
    pub stops: Vec<(f64, Rgba8)>,
}

impl RadialGradient {
    pub fn new(
        start_center: Point,
        start_radius: f64,
        end_center: Point,
        end_radius: f64,
    ) -> Self {
        Self {
            start_center,
            start_radius,
            end_center,
            end_radius,
            stops: Vec::new(),
        }
    }

    /// Concentric gradient from `center` (radius `r0`) out to radius `r1`.
    pub fn concentric(center: Point, r0: f64, r1: f64) -> Self {
        Self::new(center, r0, center, r1)
    }

    pub fn stop(mut self, offset: f64, color: Rgba8) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let at = self.stops.partition_point(|(o, _)| *o <= offset);
        self.stops.insert(at, (offset, color));
        self
    }

    /// Gradient parameter at `p`, or `None` where the gradient is undefined (transparent).
    pub fn param_at(&self, p: Point) -> Option<f64> {
        let cd = self.end_center - self.start_center;
        let pd = p - self.start_center;
        let dr = self.end_radius - self.start_radius;
        let r0 = self.start_radius;

        let a = cd.dot(cd) - dr * dr;
        let b = pd.dot(cd) + r0 * dr;
        let c = pd.dot(pd) - r0 * r0;

        let radius_ok = |t: f64| r0 + t * dr >= 0.0;
        if a.abs() < 1e-9 {
            if b.abs() < 1e-12 {
                return None;
            }
            let t = c / (2.0 * b);
            return radius_ok(t).then_some(t);
        }

        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let (hi, lo) = {
            let t1 = (b + sq) / a;
            let t2 = (b - sq) / a;
            if t1 >= t2 { (t1, t2) } else { (t2, t1) }
        };
        if radius_ok(hi) {
            Some(hi)
        } else if radius_ok(lo) {
            Some(lo)
        } else {
            None
        }
    }

    /// Premultiplied color at `p`.
    pub fn sample_premul(&self, p: Point) -> [u8; 4] {
        match self.param_at(p) {
            Some(t) => self.color_at(t),
            None => [0, 0, 0, 0],
        }
    }

    /// Premultiplied color for gradient parameter `t` (padded).
    pub fn color_at(&self, t: f64) -> [u8; 4] {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return [0, 0, 0, 0];
        };
        if t <= first.0 {
            return first.1.to_premul();
        }
        if t >= last.0 {
            return last.1.to_premul();
        }
        for pair in self.stops.windows(2) {
            let (o0, c0) = pair[0];
            let (o1, c1) = pair[1];
            if t > o1 {
                continue;
            }
            let span = o1 - o0;
            let f = if span <= 0.0 { 1.0 } else { (t - o0) / span };
            let a = c0.to_premul();
            let b = c1.to_premul();
            let mut out = [0u8; 4];
            for i in 0..4 {
                let v = f64::from(a[i]) + (f64::from(b[i]) - f64::from(a[i])) * f;
                out[i] = v.round().clamp(0.0, 255.0) as u8;
            }
            return out;
        }
        last.1.to_premul()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/gradient.rs"]
mod tests;
