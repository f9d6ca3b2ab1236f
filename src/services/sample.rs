//! Weighted per-line selection and the cyclic sampling loop

use super::corpus::{Corpus, LineReader};
use super::sink::SampleSink;
use crate::{Error, Result};
use rand::Rng;

/// Bernoulli trial weighted `[amount, total]` between keeping and skipping
/// a line. Both weights are fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedCoin {
    amount: u64,
    total: u64,
}

impl WeightedCoin {
    #[must_use]
    pub fn new(amount: u64, total: u64) -> Self {
        Self { amount, total }
    }

    fn denominator(&self) -> u128 {
        u128::from(self.amount) + u128::from(self.total)
    }

    /// Chance that a single flip keeps the line
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn probability(&self) -> f64 {
        let denominator = self.denominator();
        if denominator == 0 {
            return 0.0;
        }
        self.amount as f64 / denominator as f64
    }

    /// Draw once; `true` means the line is selected
    pub fn flip<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        let denominator = self.denominator();
        if denominator == 0 {
            return false;
        }
        rng.random_range(0..denominator) < u128::from(self.amount)
    }
}

/// Counters left behind by a finished sampling loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleOutcome {
    pub emitted: u64,
    /// Passes started, including the one in which the target was reached
    pub passes: u64,
}

/// Walk the corpus pass after pass, handing selected lines to `sink` until
/// `coin`'s amount have been emitted.
///
/// Returns as soon as the target is hit, even mid-file. With `max_passes`
/// unset the loop never gives up, so a corpus with no eligible lines spins
/// forever; with a bound, falling short after that many full passes yields
/// `Error::Exhausted`.
pub fn sample_corpus<R: Rng + ?Sized>(
    corpus: &Corpus,
    coin: &WeightedCoin,
    max_passes: Option<u64>,
    rng: &mut R,
    sink: &mut dyn SampleSink,
) -> Result<SampleOutcome> {
    let target = coin.amount;
    let mut outcome = SampleOutcome::default();

    if target == 0 {
        return Ok(outcome);
    }

    if coin.total == 0 {
        log::warn!(
            "No eligible lines under {}; {target} lines can never be selected",
            corpus.root().display()
        );
    }

    loop {
        if let Some(limit) = max_passes {
            if outcome.passes >= limit {
                return Err(Error::Exhausted {
                    requested: target,
                    emitted: outcome.emitted,
                    passes: outcome.passes,
                });
            }
        }

        outcome.passes += 1;
        log::trace!(
            "Pass {} starting with {}/{target} lines emitted",
            outcome.passes,
            outcome.emitted
        );

        for file in corpus.files() {
            let mut reader = LineReader::open(&file.path)?;

            // header
            if reader.next_line()?.is_none() {
                continue;
            }

            while let Some(line) = reader.next_line()? {
                if !coin.flip(rng) {
                    continue;
                }

                sink.record_line(line)?;
                outcome.emitted += 1;

                if outcome.emitted == target {
                    log::debug!(
                        "Reached {target} lines during pass {} in {}",
                        outcome.passes,
                        file.path.display()
                    );
                    return Ok(outcome);
                }
            }
        }
    }
}
