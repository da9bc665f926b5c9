//! Word count check against a target length.

/// Target resume length in words when none is configured.
pub const DEFAULT_TARGET_WORDS: usize = 500;

/// Accepted range around the target, in percent.
const TOLERANCE_MIN_PERCENT: usize = 85;
const TOLERANCE_MAX_PERCENT: usize = 115;

/// Number of whitespace-separated words in `text`.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Where a word count falls relative to the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordVerdict {
    WithinTarget,
    /// Below the range; `needed` words short of the target itself.
    Below { needed: usize },
    /// Above the range; `excess` words over the target itself.
    Above { excess: usize },
}

/// Result of checking a text against a target word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCheck {
    pub word_count: usize,
    pub target: usize,
    pub min_acceptable: usize,
    pub max_acceptable: usize,
    pub verdict: WordVerdict,
}

/// Check `text` against `target` words, accepting 85% to 115% of the target.
///
/// Bounds are truncated to whole words.
#[must_use]
pub fn check_word_count(text: &str, target: usize) -> WordCheck {
    let word_count = count_words(text);
    let min_acceptable = target * TOLERANCE_MIN_PERCENT / 100;
    let max_acceptable = target * TOLERANCE_MAX_PERCENT / 100;

    let verdict = if word_count < min_acceptable {
        WordVerdict::Below {
            needed: target - word_count,
        }
    } else if word_count > max_acceptable {
        WordVerdict::Above {
            excess: word_count - target,
        }
    } else {
        WordVerdict::WithinTarget
    };

    WordCheck {
        word_count,
        target,
        min_acceptable,
        max_acceptable,
        verdict,
    }
}

impl WordCheck {
    #[must_use]
    pub fn is_within_target(&self) -> bool {
        self.verdict == WordVerdict::WithinTarget
    }

    /// Human-readable summary of the check.
    #[must_use]
    pub fn message(&self) -> String {
        match self.verdict {
            WordVerdict::WithinTarget => {
                #[allow(clippy::cast_precision_loss)]
                let percentage = self.word_count as f64 / self.target.max(1) as f64 * 100.0;
                format!(
                    "Word count is within target range. Current: {} words ({percentage:.1}% of target). \
                     Acceptable range: {}-{} words.",
                    self.word_count, self.min_acceptable, self.max_acceptable
                )
            }
            WordVerdict::Below { needed } => format!(
                "Word count is below target. Current: {} words. \
                 Need about {needed} more words to reach target ({}). \
                 Consider expanding descriptions or adding less-critical but relevant items.",
                self.word_count, self.target
            ),
            WordVerdict::Above { excess } => format!(
                "Word count exceeds target. Current: {} words. \
                 Need to remove about {excess} words to reach target ({}). \
                 Consider removing irrelevant sections or rephrasing more concisely.",
                self.word_count, self.target
            ),
        }
    }
}
