//! Weighted k-means over distinct colors.

use std::collections::{BTreeMap, HashMap};

use super::{LabPointProvider, PointProvider, QuantizerResult};
use crate::Argb;

/// The maximum number of refinement iterations.
const MAX_ITERATIONS: usize = 10;

/// The minimum improvement of a point's distance to its cluster, in L*a*b*
/// units, for the point to move to another cluster.
const MIN_MOVEMENT_DISTANCE: f64 = 3.0;

/// The weighted k-means quantizer.
///
/// Unlike classic k-means, this quantizer clusters distinct colors weighted by
/// their pixel counts, which is considerably faster for images. It also uses
/// the triangle inequality to skip clusters that cannot be closer than a
/// point's current cluster, following Greg Hamerly's and Charles Elkan's
/// observations.
///
/// The quantizer is deterministic. Each color starts out in the cluster
/// closest to it. Without starting clusters, the initial clusters are colors
/// spread evenly across the input in order of first appearance.
#[derive(Debug)]
pub struct QuantizerWsmeans<P = LabPointProvider> {
    provider: P,
}

impl Default for QuantizerWsmeans {
    fn default() -> Self {
        Self {
            provider: LabPointProvider,
        }
    }
}

impl<P: PointProvider> QuantizerWsmeans<P> {
    /// Create a new quantizer clustering in the provider's color space.
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Cluster the opaque pixels into at most `max_colors` colors, starting
    /// with the given clusters.
    pub fn quantize(
        &self,
        pixels: &[Argb],
        starting_clusters: &[Argb],
        max_colors: usize,
    ) -> QuantizerResult {
        // Collect distinct colors in order of first appearance.
        let mut pixel_to_index: HashMap<Argb, usize> = HashMap::new();
        let mut colors: Vec<Argb> = Vec::new();
        let mut counts: Vec<u32> = Vec::new();
        for pixel in pixels.iter().filter(|p| p.is_opaque()) {
            match pixel_to_index.get(pixel) {
                Some(index) => counts[*index] += 1,
                None => {
                    pixel_to_index.insert(*pixel, colors.len());
                    colors.push(*pixel);
                    counts.push(1);
                }
            }
        }

        let points: Vec<[f64; 3]> = colors.iter().map(|c| self.provider.from_argb(*c)).collect();
        let point_count = points.len();

        let mut cluster_count = max_colors.min(point_count);
        if !starting_clusters.is_empty() {
            cluster_count = cluster_count.min(starting_clusters.len());
        }
        if cluster_count == 0 {
            return QuantizerResult::default();
        }

        let mut clusters: Vec<[f64; 3]> = if starting_clusters.is_empty() {
            (0..cluster_count)
                .map(|i| points[i * point_count / cluster_count])
                .collect()
        } else {
            starting_clusters[..cluster_count]
                .iter()
                .map(|c| self.provider.from_argb(*c))
                .collect()
        };

        let mut cluster_indices: Vec<usize> = points
            .iter()
            .map(|point| self.nearest(point, &clusters))
            .collect();

        let mut distances = vec![vec![0.0; cluster_count]; cluster_count];
        let mut pixel_count_sums = vec![0_u32; cluster_count];

        for iteration in 0..MAX_ITERATIONS {
            for i in 0..cluster_count {
                for j in i + 1..cluster_count {
                    let distance = self.provider.distance(&clusters[i], &clusters[j]);
                    distances[i][j] = distance;
                    distances[j][i] = distance;
                }
            }

            let mut points_moved = 0;
            for (point, cluster_index) in points.iter().zip(cluster_indices.iter_mut()) {
                let previous_index = *cluster_index;
                let previous_distance = self.provider.distance(point, &clusters[previous_index]);
                let mut minimum_distance = previous_distance;
                let mut new_index = None;

                for (j, cluster) in clusters.iter().enumerate() {
                    // The cluster is at least as far as the current one.
                    if distances[previous_index][j] >= 4.0 * previous_distance {
                        continue;
                    }

                    let distance = self.provider.distance(point, cluster);
                    if distance < minimum_distance {
                        minimum_distance = distance;
                        new_index = Some(j);
                    }
                }

                if let Some(new_index) = new_index {
                    let change = (minimum_distance.sqrt() - previous_distance.sqrt()).abs();
                    if change > MIN_MOVEMENT_DISTANCE {
                        points_moved += 1;
                        *cluster_index = new_index;
                    }
                }
            }

            if points_moved == 0 && iteration != 0 {
                tracing::trace!(iteration, "k-means converged");
                break;
            }

            let mut sums = vec![[0.0; 3]; cluster_count];
            pixel_count_sums.fill(0);
            for ((point, cluster_index), count) in
                points.iter().zip(&cluster_indices).zip(&counts)
            {
                pixel_count_sums[*cluster_index] += count;
                let weight = *count as f64;
                for (sum, component) in sums[*cluster_index].iter_mut().zip(point) {
                    *sum += component * weight;
                }
            }

            for ((cluster, sum), count) in clusters.iter_mut().zip(&sums).zip(&pixel_count_sums) {
                *cluster = if *count == 0 {
                    [0.0; 3]
                } else {
                    let weight = *count as f64;
                    sum.map(|s| s / weight)
                };
            }
        }

        let mut color_to_count = BTreeMap::new();
        for (cluster, count) in clusters.iter().zip(&pixel_count_sums) {
            if *count == 0 {
                continue;
            }
            *color_to_count.entry(self.provider.to_argb(cluster)).or_insert(0) += count;
        }

        tracing::trace!(
            distinct = point_count,
            clusters = color_to_count.len(),
            "refined clusters"
        );
        QuantizerResult::new(color_to_count)
    }

    fn nearest(&self, point: &[f64; 3], clusters: &[[f64; 3]]) -> usize {
        let mut nearest = 0;
        let mut minimum = f64::INFINITY;
        for (index, cluster) in clusters.iter().enumerate() {
            let distance = self.provider.distance(point, cluster);
            if distance < minimum {
                minimum = distance;
                nearest = index;
            }
        }
        nearest
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{PointProvider, QuantizerWsmeans};
    use crate::Argb;

    const RED: Argb = Argb::new(0xffff_0000);
    const DARK_RED: Argb = Argb::new(0xfffe_0000);
    const BLUE: Argb = Argb::new(0xff00_00ff);

    #[test]
    fn test_two_clusters() {
        let pixels = [RED, RED, DARK_RED, BLUE, BLUE, BLUE];
        let result = QuantizerWsmeans::default().quantize(&pixels, &[RED, BLUE], 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result.population(), 6);
        assert_eq!(result.color_to_count.get(&BLUE), Some(&3));
    }

    #[test]
    fn test_without_starting_clusters() {
        let pixels = [RED, BLUE, RED, BLUE];
        let result = QuantizerWsmeans::default().quantize(&pixels, &[], 4);
        assert_eq!(result.len(), 2);
        assert_eq!(result.color_to_count.get(&RED), Some(&2));
        assert_eq!(result.color_to_count.get(&BLUE), Some(&2));
    }

    /// Clusters in RGB but reports colors with two bits per component.
    struct CoarseProvider;

    impl PointProvider for CoarseProvider {
        fn from_argb(&self, argb: Argb) -> [f64; 3] {
            argb.to_rgb().map(|c| c as f64)
        }

        fn to_argb(&self, point: &[f64; 3]) -> Argb {
            let [r, g, b] = point.map(|c| (c as u8) & 0xc0);
            Argb::from_rgb(r, g, b)
        }

        fn distance(&self, one: &[f64; 3], two: &[f64; 3]) -> f64 {
            one.iter().zip(two).map(|(a, b)| (a - b) * (a - b)).sum()
        }
    }

    #[test]
    fn test_merges_duplicates() {
        let quantizer = QuantizerWsmeans::with_provider(CoarseProvider);
        let result = quantizer.quantize(&[RED, RED, DARK_RED], &[RED, DARK_RED], 2);
        assert_eq!(result.len(), 1);
        assert_eq!(result.color_to_count.get(&Argb::new(0xffc0_0000)), Some(&3));
    }

    #[test]
    fn test_empty() {
        assert!(QuantizerWsmeans::default().quantize(&[], &[RED], 4).is_empty());
        assert!(QuantizerWsmeans::default().quantize(&[RED], &[RED], 0).is_empty());
    }
}
