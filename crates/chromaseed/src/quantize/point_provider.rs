use crate::core::{argb_from_lab, lab_from_argb};
use crate::Argb;

/// A color space for clustering.
///
/// A point provider converts packed colors into points in some
/// three-dimensional space and back. Its distance needs to be monotonic with
/// the Euclidean distance, but need not be the distance itself.
pub trait PointProvider {
    /// Convert the packed color into a point.
    fn from_argb(&self, argb: Argb) -> [f64; 3];

    /// Convert the point into a packed color.
    fn to_argb(&self, point: &[f64; 3]) -> Argb;

    /// Compute the distance between two points.
    fn distance(&self, one: &[f64; 3], two: &[f64; 3]) -> f64;
}

/// Clustering in CIE L*a*b*, with the squared Euclidean distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabPointProvider;

impl PointProvider for LabPointProvider {
    fn from_argb(&self, argb: Argb) -> [f64; 3] {
        lab_from_argb(argb)
    }

    fn to_argb(&self, point: &[f64; 3]) -> Argb {
        argb_from_lab(point)
    }

    fn distance(&self, one: &[f64; 3], two: &[f64; 3]) -> f64 {
        let dl = one[0] - two[0];
        let da = one[1] - two[1];
        let db = one[2] - two[2];
        dl * dl + da * da + db * db
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{LabPointProvider, PointProvider};
    use crate::Argb;

    #[test]
    fn test_lab() {
        let provider = LabPointProvider;
        let purple = Argb::new(0xff67_50a4);
        let point = provider.from_argb(purple);
        assert_eq!(provider.to_argb(&point), purple);
        assert_eq!(provider.distance(&point, &point), 0.0);
        assert_eq!(provider.distance(&[0.0, 3.0, 0.0], &[0.0, 0.0, 4.0]), 25.0);
    }
}
