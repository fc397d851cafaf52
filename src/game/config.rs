//! Game configuration

use crate::core::{Combination, ConfigError};
use crate::solver::{GenomeSpec, SearchConfig, StrategyKind, StrategyType};
use rand::Rng;

/// Highest supported color count; colors are written as single digits
pub const MAX_COLORS: usize = 10;

/// Shape of the game plus the search parameters of the code-breaker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub colors: usize,
    pub pegs: usize,
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            colors: 7,
            pegs: 4,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(colors: usize, pegs: usize) -> Self {
        Self {
            colors,
            pegs,
            ..Self::default()
        }
    }

    /// Validate the game shape and the optimizer parameters
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors == 0 {
            return Err(ConfigError::NoColors);
        }
        if self.colors > MAX_COLORS {
            return Err(ConfigError::TooManyColors(self.colors));
        }
        if self.pegs == 0 {
            return Err(ConfigError::EmptyCombination);
        }
        self.space_size()?;
        self.search.genetic.validate()
    }

    /// Size of the possibility space, `colors^pegs`
    ///
    /// # Errors
    /// Returns `ConfigError` if the space is too large to enumerate.
    pub fn space_size(&self) -> Result<usize, ConfigError> {
        Combination::space_size(self.colors, self.pegs)
    }

    /// A uniformly random hidden combination
    pub fn random_secret<R>(&self, rng: &mut R) -> Combination
    where
        R: Rng + ?Sized,
    {
        GenomeSpec::new(self.pegs, self.colors).random(rng)
    }

    /// Parse a hidden combination and check it fits this game
    ///
    /// # Errors
    /// Returns `ConfigError` for bad symbols, a wrong length or colors
    /// outside the palette.
    pub fn parse_secret(&self, symbols: &str) -> Result<Combination, ConfigError> {
        let secret = Combination::from_symbols(symbols)?;
        self.check_secret(&secret)?;
        Ok(secret)
    }

    /// Check a hidden combination has this game's length and palette
    ///
    /// # Errors
    /// Returns `ConfigError::LengthMismatch` or `ConfigError::ColorOutOfRange`.
    pub fn check_secret(&self, secret: &Combination) -> Result<(), ConfigError> {
        if secret.len() != self.pegs {
            return Err(ConfigError::LengthMismatch {
                expected: self.pegs,
                actual: secret.len(),
            });
        }
        secret.check_colors(self.colors)
    }

    /// Build a strategy of the given kind for this game
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn strategy(&self, kind: StrategyKind) -> Result<StrategyType, ConfigError> {
        self.validate()?;
        StrategyType::new(kind, self.colors, self.pegs, self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GeneticConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.space_size(), Ok(2401));
        assert!(config.search.opening_guess);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(
            GameConfig::new(0, 4).validate(),
            Err(ConfigError::NoColors)
        );
        assert_eq!(
            GameConfig::new(11, 4).validate(),
            Err(ConfigError::TooManyColors(11))
        );
        assert_eq!(
            GameConfig::new(6, 0).validate(),
            Err(ConfigError::EmptyCombination)
        );
    }

    #[test]
    fn rejects_oversized_spaces() {
        let config = GameConfig::new(2, 64);
        let too_large = ConfigError::SpaceTooLarge {
            colors: 2,
            pegs: 64,
        };
        assert_eq!(config.validate(), Err(too_large.clone()));
        assert_eq!(config.space_size(), Err(too_large.clone()));
        assert_eq!(
            config.strategy(StrategyKind::Random).unwrap_err(),
            too_large
        );

        assert!(matches!(
            GameConfig::new(7, 12).validate(),
            Err(ConfigError::SpaceTooLarge { .. })
        ));
        assert_eq!(
            GameConfig::new(1, 300).validate(),
            Err(ConfigError::TooManyPegs(300))
        );
        assert!(GameConfig::new(10, 6).validate().is_ok());
    }

    #[test]
    fn rejects_bad_genetic_parameters() {
        let mut config = GameConfig::default();
        config.search.genetic = GeneticConfig {
            crossover_rate: 2.0,
            ..GeneticConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidGeneticConfig(_))
        ));
    }

    #[test]
    fn parse_secret_checks_shape() {
        let config = GameConfig::new(6, 4);
        assert_eq!(
            config.parse_secret("3211").unwrap(),
            Combination::from([3, 2, 1, 1])
        );
        assert_eq!(
            config.parse_secret("321"),
            Err(ConfigError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            config.parse_secret("3217"),
            Err(ConfigError::ColorOutOfRange {
                color: 7,
                colors: 6
            })
        );
        assert_eq!(
            config.parse_secret("32x1"),
            Err(ConfigError::InvalidSymbol('x'))
        );
    }

    #[test]
    fn random_secret_fits_game() {
        let config = GameConfig::new(5, 6);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let secret = config.random_secret(&mut rng);
            assert_eq!(secret.len(), 6);
            assert!(secret.check_colors(5).is_ok());
        }
    }

    #[test]
    fn strategy_requires_valid_config() {
        assert!(
            GameConfig::new(11, 4)
                .strategy(StrategyKind::Evolutionary)
                .is_err()
        );
        assert!(matches!(
            GameConfig::new(6, 4).strategy(StrategyKind::Random),
            Ok(StrategyType::Random(_))
        ));
    }
}
