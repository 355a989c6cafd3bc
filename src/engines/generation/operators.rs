use crate::engines::generation::genome::{Genome, MutationRate};
use crate::types::Move;
use rand::Rng;

/// Random cut point in `[0, len - 1)`, or 0 when there is nothing to cut
pub fn cut_point<R: Rng>(len: usize, rng: &mut R) -> usize {
    if len < 2 {
        0
    } else {
        rng.gen_range(0..len - 1)
    }
}

/// Single-point crossover: `parent1[..k] ++ parent2[k..]`
pub fn crossover<R: Rng>(parent1: &[Move], parent2: &[Move], rng: &mut R) -> Genome {
    debug_assert_eq!(parent1.len(), parent2.len(), "parents must share a genome length");
    let point = cut_point(parent1.len().min(parent2.len()), rng);

    let mut child = Vec::with_capacity(parent2.len());
    child.extend_from_slice(&parent1[..point]);
    child.extend_from_slice(&parent2[point..]);
    child
}

/// Uniform mixing: each position copied from either parent with equal odds.
/// Zips to the shorter parent.
pub fn uniform_mix<R: Rng>(parent1: &[Move], parent2: &[Move], rng: &mut R) -> Genome {
    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.gen_bool(0.5) { a } else { b })
        .collect()
}

/// Mutation: re-roll each move independently with probability `rate`.
/// A re-roll may land on the move it replaces.
pub fn mutate<R: Rng>(genome: &mut [Move], rate: MutationRate, rng: &mut R) {
    let p = rate.probability();
    for gene in genome.iter_mut() {
        if rng.gen_bool(p) {
            *gene = rng.gen();
        }
    }
}

/// Generate random genome
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.gen()).collect()
}

/// Indices of the `n` lowest scores, stable on ties.
/// Unscored entries sort after every scored one.
pub fn rank_ascending(scores: &[Option<u32>], n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by_key(|&i| (scores[i].is_none(), scores[i].unwrap_or(u32::MAX)));
    order.truncate(n);
    order
}
