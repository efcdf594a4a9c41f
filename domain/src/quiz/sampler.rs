//! Weighted-random question sampling
//!
//! Picks a quiz's questions so that the difficulty mix roughly follows the
//! configured tier weights, topping up from any tier when one runs short.

use super::question::{Difficulty, QuizQuestion};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fraction of a quiz drawn from each difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyWeights {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self {
            easy: 0.40,
            medium: 0.35,
            hard: 0.25,
        }
    }
}

impl DifficultyWeights {
    pub fn weight(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn total(&self) -> f64 {
        self.easy + self.medium + self.hard
    }

    /// Target question count for a tier: `round(count * weight)`, half away from zero.
    pub fn target_count(&self, difficulty: Difficulty, count: usize) -> usize {
        let target = (count as f64 * self.weight(difficulty)).round();
        if target.is_finite() && target > 0.0 {
            target as usize
        } else {
            0
        }
    }

    /// Per-tier targets in fill order. The sum may exceed `count` through rounding.
    pub fn target_counts(&self, count: usize) -> [(Difficulty, usize); 3] {
        Difficulty::ALL.map(|difficulty| (difficulty, self.target_count(difficulty, count)))
    }
}

/// Select up to `count` questions from `pool`.
///
/// Tiers are filled in order easy, medium, hard up to their weighted target,
/// then any shortfall is backfilled from the remaining pool. The result never
/// contains two questions with the same id and is shuffled so tier grouping
/// does not show. When the pool cannot supply `count` distinct questions the
/// result is simply shorter.
pub fn select_questions<R: Rng + ?Sized>(
    pool: &[QuizQuestion],
    count: usize,
    weights: &DifficultyWeights,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let mut shuffled: Vec<&QuizQuestion> = pool.iter().collect();
    shuffled.shuffle(rng);

    let capacity = count.min(pool.len());
    let mut selected: Vec<QuizQuestion> = Vec::with_capacity(capacity);
    let mut taken: HashSet<u64> = HashSet::with_capacity(capacity);

    for (difficulty, target) in weights.target_counts(count) {
        let mut tier_taken = 0;
        for question in shuffled.iter().filter(|q| q.difficulty == difficulty) {
            if tier_taken >= target || selected.len() >= count {
                break;
            }
            if taken.insert(question.id) {
                selected.push((*question).clone());
                tier_taken += 1;
            }
        }
    }

    for question in &shuffled {
        if selected.len() >= count {
            break;
        }
        if taken.insert(question.id) {
            selected.push((*question).clone());
        }
    }

    selected.shuffle(rng);
    selected
}

/// [`select_questions`] with the thread-local RNG
pub fn select_questions_default(
    pool: &[QuizQuestion],
    count: usize,
    weights: &DifficultyWeights,
) -> Vec<QuizQuestion> {
    select_questions(pool, count, weights, &mut rand::rng())
}
