//! Sparse Hough voting over circle parameters `(a, b, r)`.
//!
//! For every candidate radius `r` the ring of `steps` boundary offsets
//! `(trunc(r·cos θ), trunc(r·sin θ))`, `θ = 2πt/steps`, is precomputed once.
//! Each edge pixel `(x, y)` then votes for `(x − dx, y − dy, r)` for every
//! offset of every radius. Only triples that receive a vote are stored.
//!
//! Edge pixels are split into chunks voted on by separate rayon workers into
//! thread-local maps, which are merged by summation afterwards.
use crate::edges::EdgeSet;
use crate::types::RadiusWindow;
use rayon::prelude::*;
use std::collections::HashMap;
use std::f64::consts::TAU;

/// Accumulator key: candidate centre `(a, b)` and radius `r`.
pub type CircleKey = (i32, i32, u32);

const EDGE_CHUNK: usize = 256;

/// One boundary offset on the ring of radius `r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingOffset {
    pub r: u32,
    pub dx: i32,
    pub dy: i32,
}

/// A populated accumulator entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleCandidate {
    pub a: i32,
    pub b: i32,
    pub r: u32,
    pub votes: u32,
}

/// Precompute the `steps` boundary offsets for every radius in `window`.
pub fn ring_offsets(window: RadiusWindow, steps: usize) -> Vec<RingOffset> {
    let mut out = Vec::with_capacity(window.len() * steps);
    for r in window.radii() {
        let rf = f64::from(r);
        for t in 0..steps {
            let theta = TAU * t as f64 / steps as f64;
            out.push(RingOffset {
                r,
                dx: (rf * theta.cos()) as i32,
                dy: (rf * theta.sin()) as i32,
            });
        }
    }
    out
}

/// Vote counts keyed by `(a, b, r)`; built fresh for each detection attempt.
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    votes: HashMap<CircleKey, u32>,
}

impl Accumulator {
    /// Let every edge pixel vote for all circles in `window` passing through it.
    pub fn vote(edges: &EdgeSet, window: RadiusWindow, steps: usize) -> Self {
        let offsets = ring_offsets(window, steps);
        if offsets.is_empty() || edges.is_empty() {
            return Self::default();
        }

        let votes = edges
            .as_slice()
            .par_chunks(EDGE_CHUNK)
            .fold(HashMap::new, |mut acc: HashMap<CircleKey, u32>, chunk| {
                for p in chunk {
                    let (x, y) = (p.x as i32, p.y as i32);
                    for o in &offsets {
                        *acc.entry((x - o.dx, y - o.dy, o.r)).or_insert(0) += 1;
                    }
                }
                acc
            })
            .reduce(HashMap::new, merge_votes);
        Self { votes }
    }

    /// Number of distinct populated keys.
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Votes collected by `(a, b, r)`; 0 when the key was never hit.
    pub fn votes(&self, a: i32, b: i32, r: u32) -> u32 {
        self.votes.get(&(a, b, r)).copied().unwrap_or(0)
    }

    /// Sum of all vote counts.
    pub fn total_votes(&self) -> u64 {
        self.votes.values().map(|&v| u64::from(v)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = CircleCandidate> + '_ {
        self.votes.iter().map(|(&(a, b, r), &votes)| CircleCandidate { a, b, r, votes })
    }

    /// Candidates sorted by votes (descending), ties by `(a, b, r)` ascending.
    pub fn ranked(&self) -> Vec<CircleCandidate> {
        let mut out: Vec<CircleCandidate> = self.iter().collect();
        out.sort_unstable_by(|p, q| {
            q.votes
                .cmp(&p.votes)
                .then_with(|| (p.a, p.b, p.r).cmp(&(q.a, q.b, q.r)))
        });
        out
    }
}

fn merge_votes(
    mut lhs: HashMap<CircleKey, u32>,
    rhs: HashMap<CircleKey, u32>,
) -> HashMap<CircleKey, u32> {
    if lhs.len() < rhs.len() {
        return merge_votes(rhs, lhs);
    }
    for (key, v) in rhs {
        *lhs.entry(key).or_insert(0) += v;
    }
    lhs
}
