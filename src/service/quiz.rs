//! Next-question draw for quiz play.

use crate::model::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Uniform draw over the questions in `pool` not yet asked. `None` means the quiz is over.
pub fn next_question<'a, R>(pool: &'a [Question], previous: &HashSet<i32>, rng: &mut R) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let remaining: Vec<&Question> = pool.iter().filter(|q| !previous.contains(&q.id)).collect();
    remaining.choose(rng).copied()
}
