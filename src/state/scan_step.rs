//! A single elevation scan within a volume coverage pattern.

/// Radar product(s) collected during a scan step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepLabel {
    /// Reflectivity only (contiguous surveillance cut)
    Z,
    /// Velocity only (contiguous Doppler cut)
    V,
    /// Both products from a split cut at one elevation
    ZV,
}

impl StepLabel {
    pub fn label(&self) -> &'static str {
        match self {
            StepLabel::Z => "Z",
            StepLabel::V => "V",
            StepLabel::ZV => "Z/V",
        }
    }
}

/// How far the beam reaches during a step.
///
/// Split cuts draw two cones with independent ranges, every other cut
/// draws a single cone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConeRange {
    Single { range: f64 },
    Dual { range_z: f64, range_v: f64 },
}

/// An immutable scan step descriptor.
///
/// The label/range pairing is fixed by the constructors: `ZV` steps always
/// carry a [`ConeRange::Dual`], `Z` and `V` steps a [`ConeRange::Single`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScanStep {
    label: StepLabel,
    /// Display text for the elevation angle, e.g. "0.5°". Insertion anchors
    /// compare against this text, not a parsed angle.
    elevation: &'static str,
    /// Signed sweep rate; negative means clockwise
    speed: f64,
    cone_width: f64,
    range: ConeRange,
}

/// Beam width used by every catalog step.
pub const DEFAULT_CONE_WIDTH: f64 = 8.0;

impl ScanStep {
    /// Reflectivity-only step.
    pub const fn z(elevation: &'static str, speed: f64, range: f64) -> Self {
        Self {
            label: StepLabel::Z,
            elevation,
            speed,
            cone_width: DEFAULT_CONE_WIDTH,
            range: ConeRange::Single { range },
        }
    }

    /// Velocity-only step.
    pub const fn v(elevation: &'static str, speed: f64, range: f64) -> Self {
        Self {
            label: StepLabel::V,
            elevation,
            speed,
            cone_width: DEFAULT_CONE_WIDTH,
            range: ConeRange::Single { range },
        }
    }

    /// Split-cut step collecting reflectivity and velocity together.
    pub const fn zv(elevation: &'static str, speed: f64, range_z: f64, range_v: f64) -> Self {
        Self {
            label: StepLabel::ZV,
            elevation,
            speed,
            cone_width: DEFAULT_CONE_WIDTH,
            range: ConeRange::Dual { range_z, range_v },
        }
    }

    pub fn label(&self) -> StepLabel {
        self.label
    }

    pub fn elevation(&self) -> &'static str {
        self.elevation
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn cone_width(&self) -> f64 {
        self.cone_width
    }

    pub fn range(&self) -> ConeRange {
        self.range
    }

    /// Longest reach of the step, used to size the readout ring.
    pub fn max_range(&self) -> f64 {
        match self.range {
            ConeRange::Single { range } => range,
            ConeRange::Dual { range_z, range_v } => range_z.max(range_v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_cut_carries_both_ranges() {
        let step = ScanStep::zv("1.8°", -0.43, 208.0, 80.0);
        assert_eq!(step.label(), StepLabel::ZV);
        assert_eq!(
            step.range(),
            ConeRange::Dual {
                range_z: 208.0,
                range_v: 80.0
            }
        );
        assert!((step.max_range() - 208.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_cut_defaults() {
        let step = ScanStep::v("0.5°", -0.29, 74.0);
        assert_eq!(step.label(), StepLabel::V);
        assert_eq!(step.range(), ConeRange::Single { range: 74.0 });
        assert!((step.cone_width() - 8.0).abs() < 1e-9);
        assert_eq!(step.elevation(), "0.5°");
    }
}
