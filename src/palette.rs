//! Color palettes for edge encodings.
//!
//! Named sequential palettes are sampled from piecewise-linear gradients
//! between fixed color stops. A dark ramp derived from a base color covers
//! the weight-binned encoding when no named palette is requested.

use crate::color::Rgba;

/// Named color palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Viridis (perceptually uniform, colorblind-safe).
    #[default]
    Viridis,
    /// Plasma (perceptually uniform).
    Plasma,
    /// Magma (perceptually uniform).
    Magma,
    /// Sequential blues.
    Blues,
    /// Greyscale.
    Greyscale,
}

impl Palette {
    fn stops(self) -> &'static [Rgba] {
        const VIRIDIS: &[Rgba] = &[
            Rgba::rgb(68, 1, 84),
            Rgba::rgb(59, 82, 139),
            Rgba::rgb(33, 145, 140),
            Rgba::rgb(94, 201, 98),
            Rgba::rgb(253, 231, 37),
        ];
        const PLASMA: &[Rgba] = &[
            Rgba::rgb(13, 8, 135),
            Rgba::rgb(126, 3, 168),
            Rgba::rgb(204, 71, 120),
            Rgba::rgb(248, 149, 64),
            Rgba::rgb(240, 249, 33),
        ];
        const MAGMA: &[Rgba] = &[
            Rgba::rgb(0, 0, 4),
            Rgba::rgb(81, 18, 124),
            Rgba::rgb(183, 55, 121),
            Rgba::rgb(252, 137, 97),
            Rgba::rgb(252, 253, 191),
        ];
        const BLUES: &[Rgba] = &[
            Rgba::rgb(247, 251, 255),
            Rgba::rgb(198, 219, 239),
            Rgba::rgb(107, 174, 214),
            Rgba::rgb(33, 113, 181),
            Rgba::rgb(8, 48, 107),
        ];
        const GREYSCALE: &[Rgba] = &[Rgba::BLACK, Rgba::WHITE];
        match self {
            Self::Viridis => VIRIDIS,
            Self::Plasma => PLASMA,
            Self::Magma => MAGMA,
            Self::Blues => BLUES,
            Self::Greyscale => GREYSCALE,
        }
    }

    /// Interpolated palette color at position `t` in `[0, 1]`.
    #[must_use]
    pub fn at(self, t: f32) -> Rgba {
        let stops = self.stops();
        let t = t.clamp(0.0, 1.0);

        let segment_count = stops.len() - 1;
        let segment = ((t * segment_count as f32).floor() as usize).min(segment_count - 1);
        let local_t = t * segment_count as f32 - segment as f32;

        stops[segment].lerp(stops[segment + 1], local_t)
    }

    /// Sample `k` evenly spaced colors along the palette.
    #[must_use]
    pub fn sample(self, k: usize) -> Vec<Rgba> {
        match k {
            0 => Vec::new(),
            1 => vec![self.at(0.5)],
            _ => (0..k)
                .map(|i| self.at(i as f32 / (k - 1) as f32))
                .collect(),
        }
    }
}

/// Sequential ramp of `k` colors blending from near-black to `base`.
///
/// Index 0 is the darkest tier, so weight bin 0 reads as the lowest value
/// class.
#[must_use]
pub fn dark_ramp(base: Rgba, k: usize) -> Vec<Rgba> {
    match k {
        0 => Vec::new(),
        1 => vec![base],
        _ => (0..k)
            .map(|i| {
                let t = i as f32 / (k - 1) as f32;
                // Start at 25% of the base color so the darkest tier is
                // still distinguishable from a black background.
                Rgba::BLACK.lerp(base, 0.25 + 0.75 * t)
            })
            .collect(),
    }
}
