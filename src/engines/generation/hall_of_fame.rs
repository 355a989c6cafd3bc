use crate::engines::generation::genome::Genome;
use crate::types::Position;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EliteWalker {
    pub genome: Genome,
    pub fitness: u32,
    pub generation: usize,
    pub final_position: Position,
}

/// Best distinct move sequences seen so far, ascending by fitness.
pub struct HallOfFame {
    walkers: Vec<EliteWalker>,
    max_size: usize,
    seen_genomes: HashSet<Genome>,
}

impl HallOfFame {
    pub fn new(max_size: usize) -> Self {
        Self {
            walkers: Vec::new(),
            max_size: max_size.max(1),
            seen_genomes: HashSet::new(),
        }
    }

    /// Attempt to add a walker to the Hall of Fame
    pub fn try_add(&mut self, walker: EliteWalker) -> bool {
        if self.seen_genomes.contains(&walker.genome) {
            return false;
        }

        // Full and not better than the worst entry
        if self.walkers.len() >= self.max_size
            && self.walkers.last().is_some_and(|worst| walker.fitness >= worst.fitness)
        {
            return false;
        }

        self.seen_genomes.insert(walker.genome.clone());
        self.walkers.push(walker);
        // Stable: earlier generations win ties
        self.walkers.sort_by_key(|w| w.fitness);

        while self.walkers.len() > self.max_size {
            if let Some(removed) = self.walkers.pop() {
                self.seen_genomes.remove(&removed.genome);
            }
        }

        true
    }

    pub fn best(&self) -> Option<&EliteWalker> {
        self.walkers.first()
    }

    pub fn get_all(&self) -> &[EliteWalker] {
        &self.walkers
    }

    pub fn len(&self) -> usize {
        self.walkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walkers.is_empty()
    }
}
