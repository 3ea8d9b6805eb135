//! Distance-banded detail tiers over a shared instance pool.

/// Half-open distance band `[min_dist, max_dist)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LodBand {
    pub min_dist: f32,
    pub max_dist: f32,
}

impl LodBand {
    #[inline]
    pub fn contains(&self, dist: f32) -> bool {
        dist >= self.min_dist && dist < self.max_dist
    }
}

/// Contiguous, non-overlapping detail bands built from ascending cut
/// points. Distances past the outermost cut fall in no band, which culls
/// the instance for the frame.
#[derive(Clone, Debug)]
pub struct LodBands {
    bands: Vec<LodBand>,
}

impl LodBands {
    /// `[0, 50, 100, 1000]` yields three bands. Cut points must be
    /// ascending; out-of-order input is truncated at the first inversion.
    pub fn from_cuts(cuts: &[f32]) -> LodBands {
        let mut bands = Vec::new();
        for pair in cuts.windows(2) {
            if pair[1] <= pair[0] {
                log::warn!(
                    "lod cut {} does not ascend past {}; ignoring remaining cuts",
                    pair[1],
                    pair[0]
                );
                break;
            }
            bands.push(LodBand {
                min_dist: pair[0],
                max_dist: pair[1],
            });
        }
        LodBands { bands }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    #[inline]
    pub fn bands(&self) -> &[LodBand] {
        &self.bands
    }

    /// The unique tier whose band contains `dist`, or `None` beyond the
    /// outermost band (far-culled this frame).
    pub fn select(&self, dist: f32) -> Option<usize> {
        self.bands.iter().position(|b| b.contains(dist))
    }
}
