use crate::foundation::error::{WedgeError, WedgeResult};

/// Gaussian blur sized like a canvas `shadowBlur`: sigma is half the blur amount, the kernel
/// reaches three sigmas. Both scale with the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BlurSpec {
    pub(crate) radius_px: u32,
    pub(crate) sigma: f32,
}

impl BlurSpec {
    pub(crate) fn from_shadow_blur(blur: f64, dpr: f64) -> Self {
        let sigma = (blur / 2.0 * dpr).max(0.0);
        Self {
            radius_px: (sigma * 3.0).ceil() as u32,
            sigma: sigma as f32,
        }
    }
}

/// Separable gaussian blur over premultiplied RGBA8, in Q16 fixed point. Edges clamp.
pub(crate) fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    spec: BlurSpec,
) -> WedgeResult<Vec<u8>> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| WedgeError::render("blur buffer size overflow"))?;
    if src.len() != expected {
        return Err(WedgeError::render(
            "blur input does not match width*height*4",
        ));
    }
    if spec.radius_px == 0 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let kernel = kernel_q16(spec)?;
    let mut tmp = vec![0u8; expected];
    let mut out = vec![0u8; expected];
    let (w, h) = (width as usize, height as usize);
    // rows, then columns
    blur_axis(src, &mut tmp, w, h, Axis::X, &kernel);
    blur_axis(&tmp, &mut out, w, h, Axis::Y, &kernel);
    Ok(out)
}

fn kernel_q16(spec: BlurSpec) -> WedgeResult<Vec<u32>> {
    if !spec.sigma.is_finite() || spec.sigma <= 0.0 {
        return Err(WedgeError::validation("blur sigma must be finite and > 0"));
    }
    let r = spec.radius_px as i64;
    let denom = 2.0 * f64::from(spec.sigma).powi(2);
    let weights: Vec<f64> = (-r..=r)
        .map(|i| (-((i * i) as f64) / denom).exp())
        .collect();
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return Err(WedgeError::render("gaussian kernel sum is zero"));
    }

    let mut q: Vec<u32> = weights
        .iter()
        .map(|w| ((w / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();
    // Fold the rounding error into the center tap so the kernel sums to exactly 1.0.
    let total: i64 = q.iter().map(|&v| i64::from(v)).sum();
    let mid = q.len() / 2;
    q[mid] = (i64::from(q[mid]) + 65536 - total).clamp(0, 65536) as u32;
    Ok(q)
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn blur_axis(src: &[u8], dst: &mut [u8], w: usize, h: usize, axis: Axis, k: &[u32]) {
    let radius = (k.len() / 2) as isize;
    let (len, lanes) = match axis {
        Axis::X => (w, h),
        Axis::Y => (h, w),
    };
    let index = |lane: usize, at: usize| match axis {
        Axis::X => (lane * w + at) * 4,
        Axis::Y => (at * w + lane) * 4,
    };
    let last = len as isize - 1;
    for lane in 0..lanes {
        for at in 0..len {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let s = (at as isize + ki as isize - radius).clamp(0, last) as usize;
                let i = index(lane, s);
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += u64::from(kw) * u64::from(src[i + c]);
                }
            }
            let o = index(lane, at);
            for (c, a) in acc.iter().enumerate() {
                dst[o + c] = (((a + 32768) >> 16).min(255)) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
