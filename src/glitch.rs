//! Glitching text that cycles through a list of words.
//!
//! Every cycle holds a word ([`GlitchPhase::Idle`]), scrambles it away and
//! resolves the next word in its place ([`GlitchPhase::Scrambling`]), then
//! briefly rests on the new word ([`GlitchPhase::Settled`]). The frame shown
//! at any instant is a pure function of the elapsed time and the seed, so
//! the component only has to feed it a clock.

use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

pub const GLITCH_CHARACTERS: &str = "aAbBefGhkmMnNoOpPqQrRsSuUvVwWxXyYzZ!@#$%^&*()1234567890";

const STREAM_OUT: u64 = 0x6f75;
const STREAM_IN: u64 = 0x696e;
const STREAM_GLYPH: u64 = 0x676c;
const STREAM_TICK: u64 = 0x7469;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlitchError {
    #[error("glitch text needs at least one word")]
    NoWords,
    #[error("tick interval must be non-zero")]
    ZeroTick,
    #[error("a glitch cycle must last longer than zero milliseconds")]
    ZeroPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlitchPhase {
    Idle,
    Scrambling,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlitchTiming {
    pub hold_ms: u64,
    pub scramble_ms: u64,
    pub settle_ms: u64,
    /// How often scrambled glyphs may change.
    pub tick_ms: u64,
}

impl Default for GlitchTiming {
    fn default() -> Self {
        Self {
            hold_ms: 3000,
            scramble_ms: 600,
            settle_ms: 400,
            tick_ms: 40,
        }
    }
}

impl GlitchTiming {
    pub fn period_ms(&self) -> u64 {
        self.hold_ms + self.scramble_ms + self.settle_ms
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlitchFrame {
    pub phase: GlitchPhase,
    /// Word the cycle started from; the next word is shown once settled.
    pub word_index: usize,
    pub text: String,
    /// Scramble intensity, `sin(pi * p)` over the scrambling phase. A
    /// scrambled glyph re-rolls on a tick with the intensity at that tick's
    /// start and otherwise keeps its previous glyph.
    pub intensity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Letter(char),
    Glyph,
    Empty,
}

#[derive(Debug, Clone)]
pub struct GlitchCycle {
    words: Vec<Vec<char>>,
    timing: GlitchTiming,
    seed: u64,
    glyphs: Vec<char>,
}

impl GlitchCycle {
    pub fn new<S: AsRef<str>>(
        words: &[S],
        timing: GlitchTiming,
        seed: u64,
    ) -> Result<Self, GlitchError> {
        if words.is_empty() {
            return Err(GlitchError::NoWords);
        }
        if timing.tick_ms == 0 {
            return Err(GlitchError::ZeroTick);
        }
        if timing.period_ms() == 0 {
            return Err(GlitchError::ZeroPeriod);
        }
        Ok(Self {
            words: words.iter().map(|w| w.as_ref().chars().collect()).collect(),
            timing,
            seed,
            glyphs: GLITCH_CHARACTERS.chars().collect(),
        })
    }

    pub fn timing(&self) -> GlitchTiming {
        self.timing
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn frame_at(&self, elapsed_ms: u64) -> GlitchFrame {
        let period = self.timing.period_ms();
        let cycle = elapsed_ms / period;
        let local = elapsed_ms % period;
        let word_index = (cycle % self.words.len() as u64) as usize;
        let next_index = (word_index + 1) % self.words.len();

        let hold = self.timing.hold_ms;
        let scramble = self.timing.scramble_ms;
        if local < hold {
            return GlitchFrame {
                phase: GlitchPhase::Idle,
                word_index,
                text: self.words[word_index].iter().collect(),
                intensity: 0.0,
            };
        }
        if local >= hold + scramble {
            return GlitchFrame {
                phase: GlitchPhase::Settled,
                word_index,
                text: self.words[next_index].iter().collect(),
                intensity: 0.0,
            };
        }

        let elapsed = local - hold;
        let progress = elapsed as f64 / scramble as f64;
        let intensity = (PI * progress).sin().max(0.0);
        let tick = elapsed / self.timing.tick_ms;

        let current = self.words[word_index].as_slice();
        let next = self.words[next_index].as_slice();
        let width = current.len().max(next.len());
        let letter =
            |word: &[char], i: usize| word.get(i).map_or(Cell::Empty, |&ch| Cell::Letter(ch));

        let cells = if progress < 0.5 {
            // scramble the current word away, one shuffled position at a time
            let ranks = self.ranks(width, cycle, STREAM_OUT);
            let count = ((width as f64) * progress * 2.0).ceil() as usize;
            (0..width)
                .map(|i| if ranks[i] < count { Cell::Glyph } else { letter(current, i) })
                .collect::<Vec<_>>()
        } else {
            // resolve the next word in a fresh shuffled order
            let ranks = self.ranks(width, cycle, STREAM_IN);
            let count = ((width as f64) * (progress - 0.5) * 2.0).floor() as usize;
            (0..width)
                .map(|i| if ranks[i] < count { letter(next, i) } else { Cell::Glyph })
                .collect::<Vec<_>>()
        };

        // only trailing empties shrink the text; interior ones keep their column
        let len = cells
            .iter()
            .rposition(|cell| *cell != Cell::Empty)
            .map_or(0, |last| last + 1);
        let text = cells[..len]
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell {
                Cell::Letter(ch) => *ch,
                Cell::Glyph | Cell::Empty => self.glyph(cycle, tick, i),
            })
            .collect();

        GlitchFrame {
            phase: GlitchPhase::Scrambling,
            word_index,
            text,
            intensity,
        }
    }

    /// `ranks[i]` is the turn at which position `i` changes.
    fn ranks(&self, width: usize, cycle: u64, stream: u64) -> Vec<usize> {
        let mut rng = ChaCha8Rng::seed_from_u64(mix(&[self.seed, cycle, stream]));
        let order = fisher_yates(width, &mut rng);
        let mut ranks = vec![0; width];
        for (turn, &pos) in order.iter().enumerate() {
            ranks[pos] = turn;
        }
        ranks
    }

    /// Re-roll probability of a tick, sampled at its start.
    fn tick_intensity(&self, tick: u64) -> f64 {
        let progress = (tick * self.timing.tick_ms) as f64 / self.timing.scramble_ms as f64;
        (PI * progress).sin().max(0.0)
    }

    /// Glyph at `pos` on `tick`: the one drawn by the latest tick that
    /// re-rolled, or the position's starting glyph if none has yet.
    fn glyph(&self, cycle: u64, tick: u64, pos: usize) -> char {
        let pick = |rng: &mut ChaCha8Rng| self.glyphs[rng.gen_range(0..self.glyphs.len())];
        for t in (0..=tick).rev() {
            let mut roll =
                ChaCha8Rng::seed_from_u64(mix(&[self.seed, cycle, STREAM_TICK, t, pos as u64]));
            if roll.gen::<f64>() < self.tick_intensity(t) {
                return pick(&mut roll);
            }
        }
        pick(&mut ChaCha8Rng::seed_from_u64(mix(&[self.seed, cycle, STREAM_GLYPH, pos as u64])))
    }
}

fn fisher_yates<R: Rng>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order = (0..len).collect::<Vec<_>>();
    for i in (1..len).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
    order
}

// splitmix64 folded over the parts
fn mix(parts: &[u64]) -> u64 {
    parts.iter().fold(0x9e37_79b9_7f4a_7c15, |acc, &part| {
        let mut z = acc ^ part.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 3] = ["Programmer", "Innovator", "Developer"];

    fn cycle(seed: u64) -> GlitchCycle {
        GlitchCycle::new(&WORDS, GlitchTiming::default(), seed).unwrap()
    }

    #[test]
    fn test_rejects_bad_input() {
        let empty: [&str; 0] = [];
        assert_eq!(
            GlitchCycle::new(&empty, GlitchTiming::default(), 1).unwrap_err(),
            GlitchError::NoWords
        );
        let no_tick = GlitchTiming {
            tick_ms: 0,
            ..GlitchTiming::default()
        };
        assert_eq!(
            GlitchCycle::new(&WORDS, no_tick, 1).unwrap_err(),
            GlitchError::ZeroTick
        );
        let no_period = GlitchTiming {
            hold_ms: 0,
            scramble_ms: 0,
            settle_ms: 0,
            tick_ms: 10,
        };
        assert_eq!(
            GlitchCycle::new(&WORDS, no_period, 1).unwrap_err(),
            GlitchError::ZeroPeriod
        );
    }

    #[test]
    fn test_phase_boundaries() {
        let c = cycle(7);
        let t = GlitchTiming::default();

        let start = c.frame_at(0);
        assert_eq!(start.phase, GlitchPhase::Idle);
        assert_eq!(start.text, "Programmer");
        assert_eq!(start.intensity, 0.0);

        assert_eq!(c.frame_at(t.hold_ms - 1).phase, GlitchPhase::Idle);
        assert_eq!(c.frame_at(t.hold_ms).phase, GlitchPhase::Scrambling);

        let settled = c.frame_at(t.hold_ms + t.scramble_ms);
        assert_eq!(settled.phase, GlitchPhase::Settled);
        assert_eq!(settled.word_index, 0);
        assert_eq!(settled.text, "Innovator");

        let next = c.frame_at(t.period_ms());
        assert_eq!(next.phase, GlitchPhase::Idle);
        assert_eq!(next.word_index, 1);
        assert_eq!(next.text, "Innovator");
    }

    #[test]
    fn test_wraps_around_word_list() {
        let c = cycle(7);
        let period = GlitchTiming::default().period_ms();
        assert_eq!(c.frame_at(period * 2).text, "Developer");
        assert_eq!(c.frame_at(period * 3).text, "Programmer");
        assert_eq!(c.frame_at(period * 2 + period - 1).text, "Programmer");
    }

    #[test]
    fn test_scramble_start_is_untouched() {
        let c = cycle(3);
        let frame = c.frame_at(GlitchTiming::default().hold_ms);
        assert_eq!(frame.text, "Programmer");
        assert_eq!(frame.intensity, 0.0);
    }

    #[test]
    fn test_fully_scrambled_at_midpoint() {
        let c = cycle(11);
        let t = GlitchTiming::default();
        let frame = c.frame_at(t.hold_ms + t.scramble_ms / 2);
        assert_eq!(frame.phase, GlitchPhase::Scrambling);
        assert!((frame.intensity - 1.0).abs() < 1e-9);
        // "Programmer" is the longer of the two words
        assert_eq!(frame.text.chars().count(), 10);
        assert!(frame.text.chars().all(|ch| GLITCH_CHARACTERS.contains(ch)));
    }

    #[test]
    fn test_scrambled_characters_come_from_either_source() {
        let c = cycle(5);
        let t = GlitchTiming::default();
        for offset in (0..t.scramble_ms).step_by(20) {
            let frame = c.frame_at(t.hold_ms + offset);
            for (i, ch) in frame.text.chars().enumerate() {
                let from_word = "Programmer".chars().nth(i) == Some(ch)
                    || "Innovator".chars().nth(i) == Some(ch);
                assert!(from_word || GLITCH_CHARACTERS.contains(ch));
            }
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = cycle(42);
        let b = cycle(42);
        let t = GlitchTiming::default();
        for offset in (0..t.period_ms() * 3).step_by(15) {
            assert_eq!(a.frame_at(offset), b.frame_at(offset));
        }
    }

    #[test]
    fn test_seed_changes_scramble() {
        let a = cycle(1);
        let b = cycle(2);
        let t = GlitchTiming::default();
        let differs = (0..t.scramble_ms)
            .step_by(10)
            .any(|offset| a.frame_at(t.hold_ms + offset).text != b.frame_at(t.hold_ms + offset).text);
        assert!(differs);
    }

    #[test]
    fn test_single_word_glitches_in_place() {
        let c = GlitchCycle::new(&["Kyle"], GlitchTiming::default(), 9).unwrap();
        let t = GlitchTiming::default();
        assert_eq!(c.frame_at(0).text, "Kyle");
        assert_eq!(c.frame_at(t.hold_ms + t.scramble_ms).text, "Kyle");
        assert_eq!(c.frame_at(t.period_ms()).word_index, 0);
    }

    #[test]
    fn test_uneven_words_keep_their_columns() {
        let c = GlitchCycle::new(&["Kyle", "Programmer"], GlitchTiming::default(), 21).unwrap();
        let t = GlitchTiming::default();
        let out = c.ranks(10, 0, STREAM_OUT);
        let resolve = c.ranks(10, 0, STREAM_IN);
        for offset in (0..t.scramble_ms).step_by(10) {
            let text = c.frame_at(t.hold_ms + offset).text.chars().collect::<Vec<_>>();
            assert!(text.len() <= 10);
            let progress = offset as f64 / t.scramble_ms as f64;
            if progress < 0.5 {
                let count = (10.0 * progress * 2.0).ceil() as usize;
                for (i, ch) in "Kyle".chars().enumerate() {
                    if out[i] >= count {
                        assert_eq!(text[i], ch, "offset {offset}");
                    }
                }
            } else {
                let count = (10.0 * (progress - 0.5) * 2.0).floor() as usize;
                assert_eq!(text.len(), 10);
                for (i, ch) in "Programmer".chars().enumerate() {
                    if resolve[i] < count {
                        assert_eq!(text[i], ch, "offset {offset}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_longer_word_shrinks_from_the_end() {
        let c = GlitchCycle::new(&["Kyle", "Programmer"], GlitchTiming::default(), 4).unwrap();
        let t = GlitchTiming::default();
        let resolve = c.ranks(10, 1, STREAM_IN);
        let start = t.period_ms() + t.hold_ms;
        for offset in (t.scramble_ms / 2..t.scramble_ms).step_by(10) {
            let text = c.frame_at(start + offset).text.chars().collect::<Vec<_>>();
            let progress = offset as f64 / t.scramble_ms as f64;
            let count = (10.0 * (progress - 0.5) * 2.0).floor() as usize;
            // columns past "Kyle" only disappear once every later one has too
            let expected = (4..10)
                .rev()
                .find(|&i| resolve[i] >= count)
                .map_or(4, |i| i + 1);
            assert_eq!(text.len(), expected, "offset {offset}");
            for (i, ch) in "Kyle".chars().enumerate() {
                if resolve[i] < count {
                    assert_eq!(text[i], ch);
                }
            }
        }
    }

    #[test]
    fn test_glyph_held_between_rerolls() {
        let c = cycle(13);
        let ticks = GlitchTiming::default().scramble_ms / GlitchTiming::default().tick_ms;
        let mut held = 0;
        for tick in 1..ticks {
            for pos in 0..10 {
                let mut roll =
                    ChaCha8Rng::seed_from_u64(mix(&[13, 0, STREAM_TICK, tick, pos as u64]));
                if roll.gen::<f64>() >= c.tick_intensity(tick) {
                    assert_eq!(c.glyph(0, tick, pos), c.glyph(0, tick - 1, pos));
                    held += 1;
                }
            }
        }
        assert!(held > 0);
        // nothing re-rolls before the curve rises
        assert_eq!(c.tick_intensity(0), 0.0);
    }

    #[test]
    fn test_fisher_yates_is_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut order = fisher_yates(32, &mut rng);
        order.sort_unstable();
        assert_eq!(order, (0..32).collect::<Vec<_>>());
        assert!(fisher_yates(0, &mut rng).is_empty());
    }
}
