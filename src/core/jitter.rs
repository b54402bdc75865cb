use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowest multiplicative jitter factor
pub const JITTER_MIN: f64 = 0.95;

/// Highest multiplicative jitter factor
pub const JITTER_MAX: f64 = 1.05;

/// Source of multiplicative score jitter
///
/// One factor is drawn per scored candidate. Sources are handed to a single
/// ranking call by `&mut` and are never shared between concurrent calls.
pub trait JitterSource {
    fn next_factor(&mut self) -> f64;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn next_factor(&mut self) -> f64 {
        (**self).next_factor()
    }
}

impl<J: JitterSource + ?Sized> JitterSource for Box<J> {
    fn next_factor(&mut self) -> f64 {
        (**self).next_factor()
    }
}

/// Clamp any factor into the jitter band
#[inline]
pub fn clamp_factor(factor: f64) -> f64 {
    if factor.is_nan() {
        return 1.0;
    }
    factor.clamp(JITTER_MIN, JITTER_MAX)
}

/// Always returns the same factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter {
    factor: f64,
}

impl FixedJitter {
    pub fn new(factor: f64) -> Self {
        Self {
            factor: clamp_factor(factor),
        }
    }

    /// No jitter at all
    pub fn neutral() -> Self {
        Self::new(1.0)
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for FixedJitter {
    fn default() -> Self {
        Self::neutral()
    }
}

impl JitterSource for FixedJitter {
    fn next_factor(&mut self) -> f64 {
        self.factor
    }
}

/// Uniform draws over `[JITTER_MIN, JITTER_MAX]`
#[derive(Debug, Clone)]
pub struct UniformJitter<R = StdRng> {
    rng: R,
}

impl UniformJitter<StdRng> {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> UniformJitter<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> JitterSource for UniformJitter<R> {
    fn next_factor(&mut self) -> f64 {
        self.rng.gen_range(JITTER_MIN..=JITTER_MAX)
    }
}

/// How the service creates jitter sources
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JitterFactory {
    /// Fresh entropy-seeded generator per call
    Uniform,
    /// Generator with the same seed for every call
    Seeded(u64),
    /// Constant factor
    Fixed(f64),
}

impl JitterFactory {
    /// Create a source for exactly one ranking call
    pub fn create(&self) -> Box<dyn JitterSource + Send> {
        match *self {
            JitterFactory::Uniform => Box::new(UniformJitter::from_entropy()),
            JitterFactory::Seeded(seed) => Box::new(UniformJitter::seeded(seed)),
            JitterFactory::Fixed(factor) => Box::new(FixedJitter::new(factor)),
        }
    }
}

impl Default for JitterFactory {
    fn default() -> Self {
        JitterFactory::Uniform
    }
}
