//! Greedy, non-overlapping circle extraction from a vote accumulator.
use super::accumulator::Accumulator;
use crate::types::Circle;

/// Walk candidates by descending votes and keep those that pass both gates:
///
/// - `votes / steps >= vote_threshold`;
/// - the candidate centre lies strictly outside every already accepted
///   circle (`|c − c_i|² > r_i²`).
///
/// Only the candidate's centre is tested against earlier circles, so two
/// offset circles whose boundaries intersect can both be accepted. The
/// returned list is ordered by vote strength, not by position.
pub fn select_circles(acc: &Accumulator, steps: usize, vote_threshold: f32) -> Vec<Circle> {
    if steps == 0 {
        return Vec::new();
    }
    let steps_f = steps as f32;
    let mut circles: Vec<Circle> = Vec::new();
    for cand in acc.ranked() {
        let score = cand.votes as f32 / steps_f;
        if score < vote_threshold {
            // ranked by votes: nothing further can pass
            break;
        }
        if circles.iter().all(|c| c.excludes_center(cand.a, cand.b)) {
            circles.push(Circle {
                x: cand.a,
                y: cand.b,
                r: cand.r,
                votes: cand.votes,
                score,
            });
        }
    }
    circles
}
