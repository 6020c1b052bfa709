//! Building inliners from a [`ScoreConfig`].

use planforge_config::{ScoreConfig, ScoreType};
use planforge_core::score::{
    BendableDecimalScore, BendableLevels, BendableLongScore, BendableScore,
    HardMediumSoftDecimalScore, HardMediumSoftLevels, HardMediumSoftLongScore,
    HardMediumSoftScore, ParseableScore, Score, SimpleScore,
};

use super::{BendableInliner, HardMediumSoftInliner, SimpleScoreInliner};
use crate::api::weight_overrides::ConstraintWeightOverrides;
use crate::error::ScoreInlinerError;

/// A score type a [`ScoreConfig`] can name.
pub trait ConfiguredScore: Score {
    const SCORE_TYPE: ScoreType;
}

macro_rules! impl_configured_score {
    ($($score:ty => $score_type:ident),+ $(,)?) => {
        $(
            impl ConfiguredScore for $score {
                const SCORE_TYPE: ScoreType = ScoreType::$score_type;
            }
        )+
    };
}

impl_configured_score!(
    SimpleScore => Simple,
    HardMediumSoftScore => HardMediumSoft,
    HardMediumSoftLongScore => HardMediumSoftLong,
    HardMediumSoftDecimalScore => HardMediumSoftDecimal,
    BendableScore => Bendable,
    BendableLongScore => BendableLong,
    BendableDecimalScore => BendableDecimal,
);

/// Validates `config` and checks that it names `Sc`.
fn check_score_type<Sc: ConfiguredScore>(config: &ScoreConfig) -> Result<(), ScoreInlinerError> {
    config.validate()?;
    if config.score_type != Sc::SCORE_TYPE {
        return Err(ScoreInlinerError::InvalidConfig(format!(
            "score type {:?} cannot be scored by an inliner for {:?}",
            config.score_type,
            Sc::SCORE_TYPE
        )));
    }
    Ok(())
}

impl SimpleScoreInliner {
    /// Creates the inliner described by `config`.
    ///
    /// # Errors
    ///
    /// [`ScoreInlinerError::InvalidConfig`] if `config` is invalid or names
    /// another score type.
    pub fn from_config(config: &ScoreConfig) -> Result<Self, ScoreInlinerError> {
        check_score_type::<SimpleScore>(config)?;
        Ok(Self::new(config.constraint_match_enabled))
    }
}

impl<Sc: HardMediumSoftLevels + ConfiguredScore> HardMediumSoftInliner<Sc> {
    /// Creates the inliner described by `config`.
    ///
    /// # Errors
    ///
    /// [`ScoreInlinerError::InvalidConfig`] if `config` is invalid or names
    /// another score type.
    pub fn from_config(config: &ScoreConfig) -> Result<Self, ScoreInlinerError> {
        check_score_type::<Sc>(config)?;
        Ok(Self::new(config.constraint_match_enabled))
    }
}

impl<Sc: BendableLevels + ConfiguredScore> BendableInliner<Sc> {
    /// Creates the inliner described by `config`, with its bendable level counts.
    ///
    /// # Errors
    ///
    /// [`ScoreInlinerError::InvalidConfig`] if `config` is invalid, names
    /// another score type or lacks a level count.
    pub fn from_config(config: &ScoreConfig) -> Result<Self, ScoreInlinerError> {
        check_score_type::<Sc>(config)?;
        let (hard_levels, soft_levels) = config.bendable_levels().ok_or_else(|| {
            ScoreInlinerError::InvalidConfig(
                "bendable scores need both level counts".to_string(),
            )
        })?;
        Ok(Self::new(
            hard_levels,
            soft_levels,
            config.constraint_match_enabled,
        ))
    }
}

impl<Sc: ParseableScore + ConfiguredScore> ConstraintWeightOverrides<Sc> {
    /// Parses the constraint weights of `config`.
    ///
    /// # Errors
    ///
    /// [`ScoreInlinerError::InvalidConfig`] if `config` names another score
    /// type or a weight does not parse.
    pub fn from_config(config: &ScoreConfig) -> Result<Self, ScoreInlinerError> {
        check_score_type::<Sc>(config)?;
        Ok(Self::parse_pairs(config.constraint_weight_pairs())?)
    }
}
