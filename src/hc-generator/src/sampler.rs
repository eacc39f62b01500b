use genome::{Allele, StrandOrigin};

#[cfg(test)]
use mockall::automock;

/// Source of every random draw performed by the generator.
/// Draws are requested in a fixed order: founder alleles, then transmission bits, then masking decisions.
#[cfg_attr(test, automock)]
pub trait Sampler {
    /// Draw a uniform founder allele.
    fn allele(&mut self) -> Allele;

    /// Draw a uniform transmission bit: which strand of a parent gets transmitted.
    fn transmission(&mut self) -> StrandOrigin;

    /// Draw `u` uniformly within [0, 1) and return `u < probability`.
    fn is_masked(&mut self, probability: f64) -> bool;
}

impl Sampler for fastrand::Rng {
    fn allele(&mut self) -> Allele {
        Allele::from_bool(self.bool())
    }

    fn transmission(&mut self) -> StrandOrigin {
        StrandOrigin::from_bool(self.bool())
    }

    fn is_masked(&mut self, probability: f64) -> bool {
        self.f64() < probability
    }
}
