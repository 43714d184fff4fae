//! Block quantizer trait and the bundled ETC1 quantizer.

use crate::block::{BaseColors, Etc1Block};
use crate::tables::{expand4, expand5, modifier, quantize4, quantize5, DELTA_MAX, DELTA_MIN};
use crate::{PixelBlock, QuantizerQuality, BLOCK_PIXELS};

/// Turns 16 pixels into a 64-bit ETC1 block code.
///
/// Implementations receive the pixels row-major (`y * 4 + x`) and must ignore
/// the alpha channel. The returned code uses standard ETC1 bit numbering.
/// Identical input must always produce an identical code.
pub trait BlockQuantizer {
    /// Quantize one block.
    fn quantize(&self, pixels: &PixelBlock, quality: QuantizerQuality) -> u64;
}

impl<Q: BlockQuantizer + ?Sized> BlockQuantizer for &Q {
    #[inline]
    fn quantize(&self, pixels: &PixelBlock, quality: QuantizerQuality) -> u64 {
        (**self).quantize(pixels, quality)
    }
}

/// Pixels in one half of a block.
const HALF_PIXELS: usize = BLOCK_PIXELS / 2;

/// One half of a block: its pixel colours and their row-major positions.
struct Half {
    colors: [[i32; 3]; HALF_PIXELS],
    positions: [usize; HALF_PIXELS],
}

impl Half {
    fn split(pixels: &PixelBlock, flip: bool) -> [Half; 2] {
        let mut halves = [Half::empty(), Half::empty()];
        let mut counts = [0usize; 2];

        for y in 0..4 {
            for x in 0..4 {
                let index = Etc1Block::half_of(flip, x, y);
                let position = y * 4 + x;
                let half = &mut halves[index];
                half.colors[counts[index]] = pixels[position].rgb().map(i32::from);
                half.positions[counts[index]] = position;
                counts[index] += 1;
            }
        }

        halves
    }

    const fn empty() -> Self {
        Self {
            colors: [[0; 3]; HALF_PIXELS],
            positions: [0; HALF_PIXELS],
        }
    }

    /// Rounded mean colour.
    fn mean(&self) -> [u8; 3] {
        let mut sum = [0i32; 3];
        for color in &self.colors {
            for channel in 0..3 {
                sum[channel] += color[channel];
            }
        }
        sum.map(|s| ((s + HALF_PIXELS as i32 / 2) / HALF_PIXELS as i32) as u8)
    }

    /// Best intensity table and selectors for a given 8-bit base colour.
    fn fit(&self, base: [u8; 3]) -> HalfFit {
        let base = base.map(i32::from);
        let mut best = HalfFit {
            error: u32::MAX,
            table: 0,
            selectors: [0; HALF_PIXELS],
        };

        for table in 0..8u8 {
            let mut error = 0u32;
            let mut selectors = [0u8; HALF_PIXELS];

            for (slot, color) in self.colors.iter().enumerate() {
                let mut pixel_error = u32::MAX;
                for selector in 0..4u8 {
                    let delta = modifier(table, selector);
                    let mut candidate = 0u32;
                    for channel in 0..3 {
                        let diff = (base[channel] + delta).clamp(0, 255) - color[channel];
                        candidate += (diff * diff) as u32;
                    }
                    if candidate < pixel_error {
                        pixel_error = candidate;
                        selectors[slot] = selector;
                    }
                }

                error += pixel_error;
                if error >= best.error {
                    break;
                }
            }

            if error < best.error {
                best = HalfFit {
                    error,
                    table,
                    selectors,
                };
            }
        }

        best
    }
}

#[derive(Debug, Clone, Copy)]
struct HalfFit {
    error: u32,
    table: u8,
    selectors: [u8; HALF_PIXELS],
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    colors: BaseColors,
    fits: [HalfFit; 2],
}

impl Candidate {
    fn evaluate(halves: &[Half; 2], colors: BaseColors) -> Self {
        let [first, second] = colors.expand();
        Self {
            colors,
            fits: [halves[0].fit(first), halves[1].fit(second)],
        }
    }

    fn error(&self) -> u64 {
        u64::from(self.fits[0].error) + u64::from(self.fits[1].error)
    }

    fn into_block(self, halves: &[Half; 2], flip: bool) -> Etc1Block {
        let mut selectors = [0u8; BLOCK_PIXELS];
        for (half, fit) in halves.iter().zip(&self.fits) {
            for (position, selector) in half.positions.iter().zip(&fit.selectors) {
                selectors[*position] = *selector;
            }
        }

        Etc1Block {
            flip,
            colors: self.colors,
            tables: [self.fits[0].table, self.fits[1].table],
            selectors,
        }
    }
}

/// Per-channel delta from `first` to `second`, if differential mode can express it.
fn differential_delta(first: [u8; 3], second: [u8; 3]) -> Option<[i8; 3]> {
    let mut delta = [0i8; 3];
    for channel in 0..3 {
        let d = i32::from(second[channel]) - i32::from(first[channel]);
        if !(DELTA_MIN..=DELTA_MAX).contains(&d) {
            return None;
        }
        delta[channel] = d as i8;
    }
    Some(delta)
}

/// All colours within +-1 per channel of `center`, clamped to `0..=max`.
fn neighbourhood(center: [u8; 3], max: u8) -> impl Iterator<Item = [u8; 3]> {
    let step = move |value: u8, offset: i32| (i32::from(value) + offset).clamp(0, i32::from(max)) as u8;
    (-1..=1).flat_map(move |dr| {
        (-1..=1).flat_map(move |dg| {
            (-1..=1).map(move |db| [step(center[0], dr), step(center[1], dg), step(center[2], db)])
        })
    })
}

/// Reference ETC1 quantizer.
///
/// For each orientation the block is split into two halves whose mean colours
/// seed the base colours; the intensity table and selectors of each half are
/// then chosen by exhaustive search. See [`QuantizerQuality`] for what each
/// level adds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Etc1Quantizer;

impl Etc1Quantizer {
    /// Quantize one block and return its unpacked fields.
    pub fn encode_block(&self, pixels: &PixelBlock, quality: QuantizerQuality) -> Etc1Block {
        let mut best: Option<(u64, Etc1Block)> = None;

        for flip in [false, true] {
            let halves = Half::split(pixels, flip);
            if let Some(candidate) = Self::best_candidate(&halves, quality) {
                let error = candidate.error();
                if best.map_or(true, |(best_error, _)| error < best_error) {
                    best = Some((error, candidate.into_block(&halves, flip)));
                }
            }
        }

        // Individual mode is always representable, so both orientations yield a candidate.
        best.map(|(_, block)| block).unwrap_or(Etc1Block {
            flip: false,
            colors: BaseColors::Individual([0; 3], [0; 3]),
            tables: [0, 0],
            selectors: [0; BLOCK_PIXELS],
        })
    }

    fn best_candidate(halves: &[Half; 2], quality: QuantizerQuality) -> Option<Candidate> {
        let means = [halves[0].mean(), halves[1].mean()];
        let base5 = means.map(|mean| mean.map(quantize5));
        let base4 = means.map(|mean| mean.map(quantize4));

        let differential = differential_delta(base5[0], base5[1])
            .map(|delta| Candidate::evaluate(halves, BaseColors::Differential(base5[0], delta)));
        let individual = || Candidate::evaluate(halves, BaseColors::Individual(base4[0], base4[1]));

        let mut candidates: Vec<Candidate> = Vec::with_capacity(4);
        match quality {
            QuantizerQuality::Low => candidates.push(differential.unwrap_or_else(individual)),
            QuantizerQuality::Medium => {
                candidates.extend(differential);
                candidates.push(individual());
            }
            QuantizerQuality::High => {
                candidates.extend(differential);
                candidates.push(individual());
                candidates.extend(Self::search_differential(halves, base5));
                candidates.push(Self::search_individual(halves, base4));
            }
        }

        candidates.into_iter().fold(None, |best: Option<Candidate>, candidate| match best {
            Some(best) if best.error() <= candidate.error() => Some(best),
            _ => Some(candidate),
        })
    }

    /// Best individual-mode colours in the neighbourhood of the quantised means.
    fn search_individual(halves: &[Half; 2], base4: [[u8; 3]; 2]) -> Candidate {
        let mut colors = [[0u8; 3]; 2];
        let mut fits = [None::<HalfFit>; 2];

        for index in 0..2 {
            for color in neighbourhood(base4[index], 15) {
                let fit = halves[index].fit(color.map(expand4));
                if fits[index].map_or(true, |best| fit.error < best.error) {
                    fits[index] = Some(fit);
                    colors[index] = color;
                }
            }
        }

        match fits {
            [Some(first), Some(second)] => Candidate {
                colors: BaseColors::Individual(colors[0], colors[1]),
                fits: [first, second],
            },
            _ => Candidate::evaluate(halves, BaseColors::Individual(base4[0], base4[1])),
        }
    }

    /// Best differential-mode colour pair in the neighbourhood of the quantised means.
    fn search_differential(halves: &[Half; 2], base5: [[u8; 3]; 2]) -> Option<Candidate> {
        let fitted: [Vec<([u8; 3], HalfFit)>; 2] = [0, 1].map(|index| {
            neighbourhood(base5[index], 31)
                .map(|color| (color, halves[index].fit(color.map(expand5))))
                .collect()
        });

        let mut best: Option<Candidate> = None;
        for (first, first_fit) in &fitted[0] {
            for (second, second_fit) in &fitted[1] {
                let Some(delta) = differential_delta(*first, *second) else {
                    continue;
                };
                let candidate = Candidate {
                    colors: BaseColors::Differential(*first, delta),
                    fits: [*first_fit, *second_fit],
                };
                if best.map_or(true, |best| candidate.error() < best.error()) {
                    best = Some(candidate);
                }
            }
        }

        best
    }
}

impl BlockQuantizer for Etc1Quantizer {
    fn quantize(&self, pixels: &PixelBlock, quality: QuantizerQuality) -> u64 {
        self.encode_block(pixels, quality).pack()
    }
}
