/// Trait implemented by separable 1D filters used for smoothing.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f64];

    #[inline]
    fn radius(&self) -> usize {
        self.taps().len() / 2
    }
}

/// Sampled Gaussian `exp(-k² / 2σ²)` normalised to unit sum.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f64>,
    sigma: f64,
}

impl GaussianKernel {
    /// Build a kernel with `size` taps; even sizes are bumped to the next odd
    /// size. `sigma` must be finite and positive, which the caller checks.
    pub fn new(size: usize, sigma: f64) -> Self {
        let size = odd_size(size);
        let half = (size / 2) as isize;
        let denom = 2.0 * sigma * sigma;
        let mut taps: Vec<f64> = (-half..=half)
            .map(|k| (-((k * k) as f64) / denom).exp())
            .collect();
        let sum: f64 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { taps, sigma }
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f64] {
        &self.taps
    }
}

/// Even filter sizes are incremented by one; zero becomes a single tap.
#[inline]
pub fn odd_size(size: usize) -> usize {
    if size % 2 == 0 {
        size + 1
    } else {
        size
    }
}
