#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `value >= bound`
    AtLeast,
    /// `value > bound`
    Above,
    /// `value <= bound`
    AtMost,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub bound: f64,
    pub score: f64,
    pub label: &'static str,
}

impl Band {
    pub const fn new(bound: f64, score: f64, label: &'static str) -> Self {
        Self {
            bound,
            score,
            label,
        }
    }
}

/// Ordered bands evaluated top-down; the first band whose bound matches wins.
#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    pub bound: Bound,
    pub bands: &'static [Band],
    pub fallback: Band,
}

impl BandTable {
    pub fn classify(&self, value: f64) -> &Band {
        self.bands
            .iter()
            .find(|band| self.matches(value, band.bound))
            .unwrap_or(&self.fallback)
    }

    pub fn score(&self, value: f64) -> f64 {
        self.classify(value).score
    }

    fn matches(&self, value: f64, bound: f64) -> bool {
        match self.bound {
            Bound::AtLeast => value >= bound,
            Bound::Above => value > bound,
            Bound::AtMost => value <= bound,
        }
    }
}

/// Shared by vocabulary (type-token ratio) and engagement (positive probability).
pub const RATIO_BANDS: BandTable = BandTable {
    bound: Bound::AtLeast,
    bands: &[
        Band::new(0.9, 100.0, "excellent"),
        Band::new(0.7, 80.0, "good"),
        Band::new(0.5, 60.0, "fair"),
        Band::new(0.3, 40.0, "weak"),
    ],
    fallback: Band::new(0.0, 20.0, "poor"),
};

#[cfg(test)]
mod tests {
    use super::*;

    const PENALTIES: BandTable = BandTable {
        bound: Bound::Above,
        bands: &[Band::new(5.0, 20.0, "many"), Band::new(3.0, 10.0, "some")],
        fallback: Band::new(0.0, 0.0, "few"),
    };

    const RATES: BandTable = BandTable {
        bound: Bound::AtMost,
        bands: &[Band::new(3.0, 100.0, "low"), Band::new(6.0, 80.0, "mid")],
        fallback: Band::new(0.0, 20.0, "high"),
    };

    #[test]
    fn test_ratio_band_boundaries() {
        assert_eq!(RATIO_BANDS.score(1.0), 100.0);
        assert_eq!(RATIO_BANDS.score(0.9), 100.0);
        assert_eq!(RATIO_BANDS.score(0.89), 80.0);
        assert_eq!(RATIO_BANDS.score(0.7), 80.0);
        assert_eq!(RATIO_BANDS.score(0.5), 60.0);
        assert_eq!(RATIO_BANDS.score(0.3), 40.0);
        assert_eq!(RATIO_BANDS.score(0.29), 20.0);
        assert_eq!(RATIO_BANDS.score(0.0), 20.0);
    }

    #[test]
    fn test_strict_bound_excludes_equal_value() {
        assert_eq!(PENALTIES.score(5.0), 10.0);
        assert_eq!(PENALTIES.score(6.0), 20.0);
        assert_eq!(PENALTIES.score(3.0), 0.0);
        assert_eq!(PENALTIES.classify(4.0).label, "some");
    }

    #[test]
    fn test_at_most_bound() {
        assert_eq!(RATES.score(0.0), 100.0);
        assert_eq!(RATES.score(3.0), 100.0);
        assert_eq!(RATES.score(3.01), 80.0);
        assert_eq!(RATES.score(6.5), 20.0);
    }
}
