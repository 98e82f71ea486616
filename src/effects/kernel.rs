use std::f32::consts::PI;

use crate::foundation::error::{BlurError, BlurResult};

/// Largest radius a [`GaussianKernel`] can be built for.
pub const MAX_RADIUS: u32 = 25;

/// Sigma used for a given radius.
///
/// Fitted as `0.4 * radius + 0.6`: close to a true Gaussian for small radii and
/// drifting towards a box blur as the radius grows.
pub fn sigma_for_radius(radius: u32) -> f32 {
    0.4 * radius as f32 + 0.6
}

/// Normalized 1-D Gaussian weights for offsets `-radius..=radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    radius: u32,
    weights: Vec<f32>,
}

impl GaussianKernel {
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Weights ordered from offset `-radius` to `+radius`.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Weight for a signed offset, or `None` outside `-radius..=radius`.
    pub fn weight(&self, offset: i32) -> Option<f32> {
        let idx = offset.checked_add(self.radius as i32)?;
        usize::try_from(idx)
            .ok()
            .and_then(|i| self.weights.get(i).copied())
    }

    /// Iterate `(offset, weight)` pairs from `-radius` to `+radius`.
    pub fn taps(&self) -> impl Iterator<Item = (isize, f32)> + '_ {
        let r = self.radius as isize;
        self.weights
            .iter()
            .enumerate()
            .map(move |(i, &w)| (i as isize - r, w))
    }
}

/// Build the blur kernel for `radius`.
///
/// Rejects `radius > MAX_RADIUS` before computing any weight.
pub fn build_kernel(radius: u32) -> BlurResult<GaussianKernel> {
    if radius > MAX_RADIUS {
        return Err(BlurError::radius_out_of_range(radius, MAX_RADIUS));
    }

    let sigma = sigma_for_radius(radius);
    let coeff1 = 1.0 / ((2.0 * PI).sqrt() * sigma);
    let coeff2 = -1.0 / (2.0 * sigma * sigma);

    let r = radius as i32;
    let mut weights = Vec::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f32;
    for x in -r..=r {
        let x = x as f32;
        let w = coeff1 * (x * x * coeff2).exp();
        weights.push(w);
        sum += w;
    }
    // Never zero: the center tap alone is coeff1 > 0.
    for w in &mut weights {
        *w /= sum;
    }

    tracing::debug!(radius, sigma, taps = weights.len(), "built gaussian kernel");
    Ok(GaussianKernel { radius, weights })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/kernel.rs"]
mod tests;
