//! Generic evolutionary optimizer over fixed-length color sequences
//!
//! The optimizer knows nothing about Mastermind scoring: it evolves
//! `Combination` genomes bounded by a [`GenomeSpec`] under an injected
//! [`FitnessFunction`], with tournament selection, range-swap crossover,
//! point mutation and elitism.

use crate::core::{Color, Combination, ConfigError};
use log::trace;
use rand::{Rng, seq::IndexedRandom};
use std::ops::RangeInclusive;

/// Fitness function injected into the optimizer
pub trait FitnessFunction {
    /// Called once per generation, before any individual of that generation
    /// is evaluated
    fn prepare(&mut self, _population: &[Combination]) {}

    /// Fitness of one genome; higher is better
    fn evaluate(&self, genome: &Combination) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Combination) -> f64,
{
    fn evaluate(&self, genome: &Combination) -> f64 {
        self(genome)
    }
}

/// Shape of the genomes being evolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenomeSpec {
    /// Number of positions per genome
    pub length: usize,
    /// Every position holds a value in `[0, colors)`
    pub colors: usize,
}

impl GenomeSpec {
    #[must_use]
    pub const fn new(length: usize, colors: usize) -> Self {
        Self { length, colors }
    }

    /// A uniformly random genome
    pub fn random<R>(&self, rng: &mut R) -> Combination
    where
        R: Rng + ?Sized,
    {
        let pegs: Vec<Color> = (0..self.length)
            .map(|_| rng.random_range(0..self.colors) as Color)
            .collect();
        Combination::from(pegs)
    }

    /// Check that a genome fits this shape
    #[must_use]
    pub fn contains(&self, genome: &Combination) -> bool {
        genome.len() == self.length && genome.check_colors(self.colors).is_ok()
    }
}

/// Optimizer parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticConfig {
    pub population_size: usize,
    /// Number of breeding steps after the initial evaluation
    pub generations: usize,
    /// Probability that a selected pair is recombined
    pub crossover_rate: f64,
    /// Per-individual point mutation probability; `None` means `1 / length`
    pub mutation_rate: Option<f64>,
    pub tournament_size: usize,
    /// Keep the best individual unchanged in every generation
    pub elitism: bool,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 50,
            crossover_rate: 0.9,
            mutation_rate: None,
            tournament_size: 2,
            elitism: true,
        }
    }
}

impl GeneticConfig {
    /// Validate the parameters
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidGeneticConfig` describing the first
    /// offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidGeneticConfig(
                "population size must be at least 1",
            ));
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::InvalidGeneticConfig(
                "tournament size must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::InvalidGeneticConfig(
                "crossover rate must be within [0, 1]",
            ));
        }
        if let Some(rate) = self.mutation_rate
            && !(0.0..=1.0).contains(&rate)
        {
            return Err(ConfigError::InvalidGeneticConfig(
                "mutation rate must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// A genome with its evaluated fitness
#[derive(Debug, Clone)]
pub struct Individual {
    genome: Combination,
    fitness: f64,
}

impl Individual {
    #[must_use]
    pub fn genome(&self) -> &Combination {
        &self.genome
    }

    #[must_use]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// Outcome of one optimizer run
#[derive(Debug, Clone)]
pub struct EvolutionReport {
    /// Best genome observed across every generation
    pub best: Combination,
    pub best_fitness: f64,
    /// Breeding steps performed
    pub generations: usize,
    /// Final generation, sorted by fitness descending
    pub population: Vec<Individual>,
}

/// Evolutionary optimizer
///
/// A population seeded through [`Evolver::seed_population`] is used as is;
/// only missing slots are filled with random genomes.
#[derive(Debug)]
pub struct Evolver {
    config: GeneticConfig,
    genome: GenomeSpec,
    mutation_rate: f64,
    seed: Vec<Combination>,
}

impl Evolver {
    /// Create an optimizer for genomes of the given shape
    ///
    /// # Errors
    /// Returns `ConfigError` if the parameters are invalid or the genome
    /// shape is empty.
    pub fn new(config: GeneticConfig, genome: GenomeSpec) -> Result<Self, ConfigError> {
        config.validate()?;
        if genome.length == 0 {
            return Err(ConfigError::EmptyCombination);
        }
        if genome.colors == 0 {
            return Err(ConfigError::NoColors);
        }

        let mutation_rate = config
            .mutation_rate
            .unwrap_or(1.0 / genome.length as f64);

        Ok(Self {
            config,
            genome,
            mutation_rate,
            seed: Vec::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GeneticConfig {
        &self.config
    }

    #[must_use]
    pub const fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Provide the initial population for the next [`Evolver::evolve`] call
    ///
    /// Genomes that do not fit the genome shape are dropped; at most
    /// `population_size` genomes are kept.
    pub fn seed_population(&mut self, candidates: impl IntoIterator<Item = Combination>) {
        self.seed = candidates
            .into_iter()
            .filter(|genome| self.genome.contains(genome))
            .take(self.config.population_size)
            .collect();
    }

    /// Run the optimizer for the configured number of generations
    ///
    /// There is no early stop: every run performs exactly
    /// `config.generations` breeding steps.
    pub fn evolve<F, R>(&mut self, fitness: &mut F, rng: &mut R) -> EvolutionReport
    where
        F: FitnessFunction + ?Sized,
        R: Rng + ?Sized,
    {
        let mut genomes = std::mem::take(&mut self.seed);
        while genomes.len() < self.config.population_size {
            genomes.push(self.genome.random(rng));
        }

        let mut population = evaluate(genomes, fitness);
        let mut best = population[0].clone();

        for generation in 0..self.config.generations {
            let next = self.breed(&population, rng);
            population = evaluate(next, fitness);

            if population[0].fitness > best.fitness {
                best = population[0].clone();
            }
            trace!(
                "generation {}: best {} ({:.4}), overall {:.4}",
                generation + 1,
                population[0].genome,
                population[0].fitness,
                best.fitness
            );
        }

        EvolutionReport {
            best: best.genome,
            best_fitness: best.fitness,
            generations: self.config.generations,
            population,
        }
    }

    /// Produce the next generation's genomes from a sorted population
    fn breed<R>(&self, population: &[Individual], rng: &mut R) -> Vec<Combination>
    where
        R: Rng + ?Sized,
    {
        let size = self.config.population_size;
        let mut next = Vec::with_capacity(size);

        if self.config.elitism {
            next.push(population[0].genome.clone());
        }

        while next.len() < size {
            let (Some(p1), Some(p2)) = (
                tournament_select(population, self.config.tournament_size, rng),
                tournament_select(population, self.config.tournament_size, rng),
            ) else {
                break;
            };

            let (child1, child2) = if rng.random_bool(self.config.crossover_rate) {
                crossover(&p1.genome, &p2.genome, rng)
            } else {
                (p1.genome.clone(), p2.genome.clone())
            };

            for child in [child1, child2] {
                if next.len() < size {
                    next.push(self.mutate(child, rng));
                }
            }
        }

        next
    }

    /// Point mutation: with probability `mutation_rate`, one random position
    /// gets a random color
    fn mutate<R>(&self, genome: Combination, rng: &mut R) -> Combination
    where
        R: Rng + ?Sized,
    {
        if !rng.random_bool(self.mutation_rate) {
            return genome;
        }
        let position = rng.random_range(0..self.genome.length);
        let color = rng.random_range(0..self.genome.colors) as Color;
        genome.with_peg(position, color)
    }
}

/// Evaluate genomes and sort them by fitness descending
fn evaluate<F>(genomes: Vec<Combination>, fitness: &mut F) -> Vec<Individual>
where
    F: FitnessFunction + ?Sized,
{
    fitness.prepare(&genomes);

    let mut individuals: Vec<Individual> = genomes
        .into_iter()
        .map(|genome| {
            let value = fitness.evaluate(&genome);
            Individual {
                genome,
                fitness: value,
            }
        })
        .collect();

    individuals.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    individuals
}

fn tournament_select<'a, R>(
    population: &'a [Individual],
    tournament_size: usize,
    rng: &mut R,
) -> Option<&'a Individual>
where
    R: Rng + ?Sized,
{
    population
        .choose_multiple(rng, tournament_size)
        .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
}

/// Two-point crossover: swap a random inclusive range between the parents
fn crossover<R>(a: &Combination, b: &Combination, rng: &mut R) -> (Combination, Combination)
where
    R: Rng + ?Sized,
{
    let mut x = a.pegs().to_vec();
    let mut y = b.pegs().to_vec();
    let len = x.len().min(y.len());
    if len > 0 {
        let point1 = rng.random_range(0..len);
        let point2 = rng.random_range(point1..len);
        swap_range(&mut x, &mut y, point1..=point2);
    }
    (Combination::from(x), Combination::from(y))
}

fn swap_range<T>(x: &mut [T], y: &mut [T], range: RangeInclusive<usize>) {
    for i in range {
        std::mem::swap(&mut x[i], &mut y[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn count_matches(target: &Combination) -> impl Fn(&Combination) -> f64 + '_ {
        move |genome: &Combination| {
            genome
                .pegs()
                .iter()
                .zip(target.pegs())
                .filter(|(a, b)| a == b)
                .count() as f64
        }
    }

    #[test]
    fn test_swap_range() {
        let tests = [
            (0..=0, [[5, 2, 3, 4], [1, 6, 7, 8]]),
            (0..=1, [[5, 6, 3, 4], [1, 2, 7, 8]]),
            (1..=2, [[1, 6, 7, 4], [5, 2, 3, 8]]),
            (0..=3, [[5, 6, 7, 8], [1, 2, 3, 4]]),
        ];

        for (range, [x_expect, y_expect]) in tests {
            let mut x = [1, 2, 3, 4];
            let mut y = [5, 6, 7, 8];
            swap_range(&mut x, &mut y, range);
            assert_eq!(x, x_expect);
            assert_eq!(y, y_expect);
        }
    }

    #[test]
    fn crossover_preserves_positions() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Combination::from([0, 0, 0, 0]);
        let b = Combination::from([1, 1, 1, 1]);

        for _ in 0..50 {
            let (x, y) = crossover(&a, &b, &mut rng);
            for i in 0..4 {
                // Each position comes from exactly one parent per child
                assert_ne!(x.pegs()[i], y.pegs()[i]);
            }
        }
    }

    #[test]
    fn default_config_is_valid() {
        let config = GeneticConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.population_size, 50);
        assert!(config.elitism);
    }

    #[test]
    fn invalid_configs_rejected() {
        let base = GeneticConfig::default();
        let invalid = [
            GeneticConfig {
                population_size: 0,
                ..base
            },
            GeneticConfig {
                tournament_size: 0,
                ..base
            },
            GeneticConfig {
                crossover_rate: 1.5,
                ..base
            },
            GeneticConfig {
                mutation_rate: Some(-0.1),
                ..base
            },
        ];
        for config in invalid {
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidGeneticConfig(_))
            ));
        }
    }

    #[test]
    fn default_mutation_rate_is_inverse_length() {
        let evolver = Evolver::new(GeneticConfig::default(), GenomeSpec::new(4, 6)).unwrap();
        assert!((evolver.mutation_rate() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_genome_shape_rejected() {
        assert_eq!(
            Evolver::new(GeneticConfig::default(), GenomeSpec::new(0, 6)).unwrap_err(),
            ConfigError::EmptyCombination
        );
        assert_eq!(
            Evolver::new(GeneticConfig::default(), GenomeSpec::new(4, 0)).unwrap_err(),
            ConfigError::NoColors
        );
    }

    #[test]
    fn random_genomes_within_bounds() {
        let shape = GenomeSpec::new(5, 3);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(shape.contains(&shape.random(&mut rng)));
        }
    }

    #[test]
    fn evolve_finds_target() {
        let target = Combination::from([3, 1, 4, 1, 5]);
        let config = GeneticConfig {
            population_size: 40,
            generations: 100,
            ..GeneticConfig::default()
        };
        let mut evolver = Evolver::new(config, GenomeSpec::new(5, 6)).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut fitness = count_matches(&target);
        let report = evolver.evolve(&mut fitness, &mut rng);

        assert_eq!(report.generations, 100);
        assert_eq!(report.population.len(), 40);
        assert!(report.best_fitness >= 4.0);
    }

    #[test]
    fn seeded_population_is_not_reset() {
        let target = Combination::from([2, 2, 2]);
        let config = GeneticConfig {
            population_size: 10,
            generations: 0,
            ..GeneticConfig::default()
        };
        let mut evolver = Evolver::new(config, GenomeSpec::new(3, 3)).unwrap();
        evolver.seed_population(std::iter::repeat_n(target.clone(), 10));

        let mut rng = StdRng::seed_from_u64(3);
        let mut fitness = count_matches(&target);
        let report = evolver.evolve(&mut fitness, &mut rng);

        assert_eq!(report.best, target);
        assert!(report.population.iter().all(|ind| ind.genome() == &target));
    }

    #[test]
    fn seed_drops_out_of_shape_genomes() {
        let config = GeneticConfig {
            population_size: 4,
            generations: 0,
            ..GeneticConfig::default()
        };
        let mut evolver = Evolver::new(config, GenomeSpec::new(2, 3)).unwrap();
        evolver.seed_population([
            Combination::from([0, 1]),
            Combination::from([0, 7]),
            Combination::from([1, 1, 1]),
        ]);

        let mut rng = StdRng::seed_from_u64(5);
        let report = evolver.evolve(&mut |_: &Combination| 0.0, &mut rng);
        assert_eq!(report.population.len(), 4);
        assert!(
            report
                .population
                .iter()
                .all(|ind| GenomeSpec::new(2, 3).contains(ind.genome()))
        );
    }

    #[test]
    fn elitism_keeps_best_individual() {
        let target = Combination::from([0, 1, 2, 3]);
        let config = GeneticConfig {
            population_size: 8,
            generations: 20,
            crossover_rate: 1.0,
            mutation_rate: Some(1.0),
            ..GeneticConfig::default()
        };
        let mut evolver = Evolver::new(config, GenomeSpec::new(4, 4)).unwrap();
        evolver.seed_population([target.clone()]);

        let mut rng = StdRng::seed_from_u64(11);
        let mut fitness = count_matches(&target);
        let report = evolver.evolve(&mut fitness, &mut rng);

        // The perfect seed must survive every generation despite heavy mutation
        assert_eq!(report.population[0].genome(), &target);
        assert!((report.best_fitness - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn prepare_called_once_per_generation() {
        struct Counting {
            calls: usize,
        }
        impl FitnessFunction for Counting {
            fn prepare(&mut self, _population: &[Combination]) {
                self.calls += 1;
            }
            fn evaluate(&self, _genome: &Combination) -> f64 {
                0.0
            }
        }

        let config = GeneticConfig {
            population_size: 5,
            generations: 7,
            ..GeneticConfig::default()
        };
        let mut evolver = Evolver::new(config, GenomeSpec::new(3, 3)).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let mut fitness = Counting { calls: 0 };
        evolver.evolve(&mut fitness, &mut rng);

        // Initial evaluation plus one per generation
        assert_eq!(fitness.calls, 8);
    }
}
