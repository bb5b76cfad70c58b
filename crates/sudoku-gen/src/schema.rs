//! Curated puzzle schemas and the repository that serves them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::GenerateError;
use crate::rng::SimpleRng;
use crate::seeds;

/// Difficulty label attached to a curated schema.
///
/// Difficulty is an authoring-time judgment on the seed data, not a rating
/// the engine computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// All difficulty levels, in ascending order.
    pub fn all_levels() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(format!("unknown difficulty: {s}")),
        }
    }
}

/// A curated puzzle/solution template pair.
///
/// Both strings are row-major token templates in canonical digits; the
/// puzzle is the solution with cells blanked out. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub puzzle: String,
    pub solution: String,
    pub difficulty: Difficulty,
    pub dimension: Dimension,
}

/// Dimension- and difficulty-indexed store of schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaRepository {
    schemas: Vec<Schema>,
}

impl SchemaRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self {
            schemas: Vec::new(),
        }
    }

    /// Repository preloaded with the built-in seed library.
    pub fn builtin() -> Self {
        Self {
            schemas: seeds::builtin_schemas(),
        }
    }

    /// Repository over an explicit schema list.
    pub fn from_schemas(schemas: Vec<Schema>) -> Self {
        Self { schemas }
    }

    /// A new repository with `schema` added; the receiver is left untouched.
    pub fn with_schema(&self, schema: Schema) -> Self {
        let mut schemas = self.schemas.clone();
        schemas.push(schema);
        Self { schemas }
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    /// Schemas whose grid size matches `dimension` (by unique digit count).
    pub fn filter_by_dimension(&self, dimension: Dimension) -> impl Iterator<Item = &Schema> {
        self.schemas
            .iter()
            .filter(move |s| s.dimension.unique_digits() == dimension.unique_digits())
    }

    /// Schemas carrying the given difficulty label.
    pub fn filter_by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &Schema> {
        self.schemas
            .iter()
            .filter(move |s| s.difficulty == difficulty)
    }

    /// Pick uniformly at random among schemas matching both filters.
    ///
    /// An empty dimension filter is reported before the difficulty filter
    /// is applied, so the caller learns which input to change.
    pub fn pick_random(
        &self,
        dimension: Dimension,
        difficulty: Difficulty,
        rng: &mut SimpleRng,
    ) -> Result<&Schema, GenerateError> {
        let for_dimension: Vec<&Schema> = self.filter_by_dimension(dimension).collect();
        if for_dimension.is_empty() {
            return Err(GenerateError::NoSchemasForDimension(dimension));
        }
        let matching: Vec<&Schema> = for_dimension
            .into_iter()
            .filter(|s| s.difficulty == difficulty)
            .collect();
        if matching.is_empty() {
            return Err(GenerateError::NoSchemasForDifficulty {
                dimension,
                difficulty,
            });
        }
        Ok(matching[rng.next_usize(matching.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema {
            puzzle: "-BCDCDA-BAD--CBA".to_string(),
            solution: "ABCDCDABBADCDCBA".to_string(),
            difficulty: Difficulty::Easy,
            dimension: Dimension::FOUR,
        }
    }

    #[test]
    fn test_with_schema_leaves_original_untouched() {
        let empty = SchemaRepository::new();
        let one = empty.with_schema(sample_schema());
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_filters() {
        let repo = SchemaRepository::builtin();
        assert!(repo.filter_by_dimension(Dimension::NINE).count() > 0);
        assert!(repo
            .filter_by_dimension(Dimension::NINE)
            .all(|s| s.dimension == Dimension::NINE));
        assert!(repo
            .filter_by_difficulty(Difficulty::Hard)
            .all(|s| s.difficulty == Difficulty::Hard));
    }

    #[test]
    fn test_pick_random_reports_missing_dimension() {
        let repo = SchemaRepository::new().with_schema(sample_schema());
        let mut rng = SimpleRng::with_seed(0);
        let err = repo
            .pick_random(Dimension::NINE, Difficulty::Easy, &mut rng)
            .unwrap_err();
        assert_eq!(err, GenerateError::NoSchemasForDimension(Dimension::NINE));
    }

    #[test]
    fn test_pick_random_reports_missing_difficulty() {
        let repo = SchemaRepository::new().with_schema(sample_schema());
        let mut rng = SimpleRng::with_seed(0);
        let err = repo
            .pick_random(Dimension::FOUR, Difficulty::Expert, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::NoSchemasForDifficulty {
                dimension: Dimension::FOUR,
                difficulty: Difficulty::Expert,
            }
        );
    }

    #[test]
    fn test_pick_random_matches_both_filters() {
        let repo = SchemaRepository::builtin();
        let mut rng = SimpleRng::with_seed(9);
        let schema = repo
            .pick_random(Dimension::NINE, Difficulty::Medium, &mut rng)
            .unwrap();
        assert_eq!(schema.dimension, Dimension::NINE);
        assert_eq!(schema.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("EXPERT".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert!("brutal".parse::<Difficulty>().is_err());
    }
}
