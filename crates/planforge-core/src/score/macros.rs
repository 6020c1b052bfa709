//! Declarative macros for reducing score type boilerplate.
//!
//! These macros generate the repetitive trait implementations that the
//! score types share: ordering, arithmetic ops, the common `Score` methods,
//! and slash-separated parsing. Every generated impl threads the init score
//! through as the first component.

/// Generates `Ord`, `PartialOrd`, `Add`, `Sub`, and `Neg` for a field-based score type.
///
/// The constructor must accept the init score followed by the fields in the
/// order they are listed. Fields are compared in that order after the init score.
///
/// # Usage
/// ```ignore
/// impl_score_ops!(HardMediumSoftScore { hard, medium, soft } => of_uninitialized);
/// ```
macro_rules! impl_score_ops {
    ($type:ident { $($field:ident),+ } => $ctor:ident) => {
        impl Ord for $type {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.init_score
                    .cmp(&other.init_score)
                    $( .then_with(|| self.$field.cmp(&other.$field)) )+
            }
        }

        impl PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl std::ops::Add for $type {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                $type::$ctor(
                    self.init_score + other.init_score,
                    $(self.$field + other.$field),+
                )
            }
        }

        impl std::ops::Sub for $type {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                $type::$ctor(
                    self.init_score - other.init_score,
                    $(self.$field - other.$field),+
                )
            }
        }

        impl std::ops::Neg for $type {
            type Output = Self;

            fn neg(self) -> Self {
                $type::$ctor(-self.init_score, $(-self.$field),+)
            }
        }
    };
}

/// Generates the field-wise `Score` methods.
///
/// Intended to be used *inside* an `impl Score for Type { ... }` block, next
/// to the hand-written `is_feasible` and `level_label`.
///
/// # Usage
/// ```ignore
/// impl Score for HardMediumSoftScore {
///     // ...is_feasible, level_label...
///     impl_score_common!(HardMediumSoftScore(i32) { hard, medium, soft } => of_uninitialized);
/// }
/// ```
macro_rules! impl_score_common {
    ($type:ident($num:ty) { $($field:ident),+ } => $ctor:ident) => {
        #[inline]
        fn init_score(&self) -> i32 {
            self.init_score
        }

        #[inline]
        fn with_init_score(&self, init_score: i32) -> Self {
            $type::$ctor(init_score, $(self.$field),+)
        }

        #[inline]
        fn zeroed(&self) -> Self {
            $type::ZERO
        }

        fn is_zero(&self) -> bool {
            self.init_score == 0 $( && <$num as num_traits::Zero>::is_zero(&self.$field) )+
        }

        fn has_negative_level(&self) -> bool {
            false $( || $crate::score::ScoreNumber::is_negative_number(&self.$field) )+
        }

        fn is_level_zero(&self, index: usize) -> bool {
            [$( <$num as num_traits::Zero>::is_zero(&self.$field) ),+][index]
        }

        #[inline]
        fn levels_count(&self) -> usize {
            [$(stringify!($field)),+].len()
        }

        fn abs(&self) -> Self {
            $type::$ctor(
                self.init_score.abs(),
                $( $crate::score::ScoreNumber::abs_number(&self.$field) ),+
            )
        }
    };
}

/// Generates `ParseableScore` impl for scores using the `"[<n>init/]Xsuffix/Ysuffix"` format.
///
/// Each field maps to a suffix label (e.g., `hard => "hard"`, `soft => "soft"`).
/// Values are parsed with the level number's `FromStr`.
///
/// # Usage
/// ```ignore
/// impl_score_parse!(HardMediumSoftScore(i32) { hard => "hard", medium => "medium", soft => "soft" } => of_uninitialized);
/// impl_score_parse!(SimpleScore(i32) { score => "" } => of_uninitialized);
/// ```
macro_rules! impl_score_parse {
    ($type:ident($num:ty) { $($field:ident => $suffix:literal),+ } => $ctor:ident) => {
        impl $crate::score::traits::ParseableScore for $type {
            fn parse(s: &str) -> Result<Self, $crate::score::traits::ScoreParseError> {
                let s = s.trim();
                let (init_score, rest) = $crate::score::traits::split_init_score(s)?;
                let parts: Vec<&str> = rest.split('/').collect();
                let suffixes: &[&str] = &[ $($suffix),+ ];
                let count = suffixes.len();

                if parts.len() != count {
                    return Err($crate::score::traits::ScoreParseError {
                        message: format!(
                            "Invalid {} format '{}': expected {} parts separated by '/'",
                            stringify!($type), s, count
                        ),
                    });
                }

                let mut _idx = 0usize;
                $(
                    let $field = {
                        let part = parts[_idx].trim();
                        let num_str = part.strip_suffix($suffix).ok_or_else(|| {
                            $crate::score::traits::ScoreParseError {
                                message: format!(
                                    "{} part '{}' must end with '{}'",
                                    stringify!($field), part, $suffix
                                ),
                            }
                        })?;
                        let val = num_str.parse::<$num>().map_err(|e| {
                            $crate::score::traits::ScoreParseError {
                                message: format!(
                                    "Invalid {} score '{}': {}",
                                    stringify!($field), num_str, e
                                ),
                            }
                        })?;
                        _idx += 1;
                        val
                    };
                )+

                Ok($type::$ctor(init_score, $($field),+))
            }

            fn to_string_repr(&self) -> String {
                format!("{}", self)
            }
        }
    };
}

/// Generates constructors, accessors and every trait impl for a bendable score.
///
/// The struct must have `init_score: i32`, `hard_scores: Vec<$num>` and
/// `soft_scores: Vec<$num>` fields.
///
/// # Usage
/// ```ignore
/// impl_bendable_score!(BendableLongScore(i64));
/// ```
macro_rules! impl_bendable_score {
    ($type:ident($num:ty)) => {
        impl $type {
            /// Creates a new score with the given hard and soft level vectors.
            pub fn of(hard_scores: Vec<$num>, soft_scores: Vec<$num>) -> Self {
                Self::of_uninitialized(0, hard_scores, soft_scores)
            }

            /// Creates a new score carrying an init score.
            pub fn of_uninitialized(
                init_score: i32,
                hard_scores: Vec<$num>,
                soft_scores: Vec<$num>,
            ) -> Self {
                $type {
                    init_score,
                    hard_scores,
                    soft_scores,
                }
            }

            /// Creates a zero score with the specified number of levels.
            pub fn zero_with_levels(hard_levels: usize, soft_levels: usize) -> Self {
                let zero = <$num as num_traits::Zero>::zero();
                Self::of(vec![zero; hard_levels], vec![zero; soft_levels])
            }

            /// Creates a score with a single non-zero hard level.
            ///
            /// # Panics
            /// Panics if `level >= hard_levels`.
            pub fn of_hard(hard_levels: usize, soft_levels: usize, level: usize, value: $num) -> Self {
                let mut score = Self::zero_with_levels(hard_levels, soft_levels);
                score.hard_scores[level] = value;
                score
            }

            /// Creates a score with a single non-zero soft level.
            ///
            /// # Panics
            /// Panics if `level >= soft_levels`.
            pub fn of_soft(hard_levels: usize, soft_levels: usize, level: usize, value: $num) -> Self {
                let mut score = Self::zero_with_levels(hard_levels, soft_levels);
                score.soft_scores[level] = value;
                score
            }

            /// Returns the number of hard score levels.
            pub fn hard_levels_count(&self) -> usize {
                self.hard_scores.len()
            }

            /// Returns the number of soft score levels.
            pub fn soft_levels_count(&self) -> usize {
                self.soft_scores.len()
            }

            /// Returns the hard score at the given level.
            ///
            /// # Panics
            /// Panics if the level is out of bounds.
            pub fn hard_score(&self, level: usize) -> $num {
                self.hard_scores[level]
            }

            /// Returns the soft score at the given level.
            ///
            /// # Panics
            /// Panics if the level is out of bounds.
            pub fn soft_score(&self, level: usize) -> $num {
                self.soft_scores[level]
            }

            /// Returns all hard scores as a slice.
            pub fn hard_scores(&self) -> &[$num] {
                &self.hard_scores
            }

            /// Returns all soft scores as a slice.
            pub fn soft_scores(&self) -> &[$num] {
                &self.soft_scores
            }

            fn ensure_compatible(&self, other: &Self) {
                assert_eq!(
                    self.hard_scores.len(),
                    other.hard_scores.len(),
                    "Incompatible hard levels: {} vs {}",
                    self.hard_scores.len(),
                    other.hard_scores.len()
                );
                assert_eq!(
                    self.soft_scores.len(),
                    other.soft_scores.len(),
                    "Incompatible soft levels: {} vs {}",
                    self.soft_scores.len(),
                    other.soft_scores.len()
                );
            }

            fn zip_with(&self, other: &Self, op: impl Fn($num, $num) -> $num) -> Self {
                self.ensure_compatible(other);
                Self::of_uninitialized(
                    0,
                    self.hard_scores
                        .iter()
                        .zip(other.hard_scores.iter())
                        .map(|(&a, &b)| op(a, b))
                        .collect(),
                    self.soft_scores
                        .iter()
                        .zip(other.soft_scores.iter())
                        .map(|(&a, &b)| op(a, b))
                        .collect(),
                )
            }

            fn map_levels(&self, op: impl Fn($num) -> $num) -> Self {
                Self::of_uninitialized(
                    self.init_score,
                    self.hard_scores.iter().map(|&s| op(s)).collect(),
                    self.soft_scores.iter().map(|&s| op(s)).collect(),
                )
            }
        }

        impl $crate::score::Score for $type {
            #[inline]
            fn init_score(&self) -> i32 {
                self.init_score
            }

            fn with_init_score(&self, init_score: i32) -> Self {
                Self::of_uninitialized(
                    init_score,
                    self.hard_scores.clone(),
                    self.soft_scores.clone(),
                )
            }

            fn is_feasible(&self) -> bool {
                let zero = <$num as num_traits::Zero>::zero();
                self.init_score >= 0 && self.hard_scores.iter().all(|&s| s >= zero)
            }

            fn zeroed(&self) -> Self {
                Self::zero_with_levels(self.hard_scores.len(), self.soft_scores.len())
            }

            fn is_zero(&self) -> bool {
                self.init_score == 0
                    && self
                        .hard_scores
                        .iter()
                        .chain(self.soft_scores.iter())
                        .all(|s| num_traits::Zero::is_zero(s))
            }

            fn has_negative_level(&self) -> bool {
                self.hard_scores
                    .iter()
                    .chain(self.soft_scores.iter())
                    .any(|s| $crate::score::ScoreNumber::is_negative_number(s))
            }

            fn is_level_zero(&self, index: usize) -> bool {
                let hard_count = self.hard_scores.len();
                if index < hard_count {
                    num_traits::Zero::is_zero(&self.hard_scores[index])
                } else {
                    num_traits::Zero::is_zero(&self.soft_scores[index - hard_count])
                }
            }

            fn levels_count(&self) -> usize {
                self.hard_scores.len() + self.soft_scores.len()
            }

            fn level_label(&self, index: usize) -> $crate::score::ScoreLevel {
                if index < self.hard_scores.len() {
                    $crate::score::ScoreLevel::Hard
                } else if index < self.levels_count() {
                    $crate::score::ScoreLevel::Soft
                } else {
                    panic!(
                        "{} has {} levels, got index {}",
                        stringify!($type),
                        self.levels_count(),
                        index
                    )
                }
            }

            fn abs(&self) -> Self {
                self.map_levels(|s| $crate::score::ScoreNumber::abs_number(&s))
            }
        }

        impl Ord for $type {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.ensure_compatible(other);
                self.init_score
                    .cmp(&other.init_score)
                    .then_with(|| self.hard_scores.cmp(&other.hard_scores))
                    .then_with(|| self.soft_scores.cmp(&other.soft_scores))
            }
        }

        impl PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl std::ops::Add for $type {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                let mut sum = self.zip_with(&other, |a, b| a + b);
                sum.init_score = self.init_score + other.init_score;
                sum
            }
        }

        impl std::ops::Sub for $type {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                let mut diff = self.zip_with(&other, |a, b| a - b);
                diff.init_score = self.init_score - other.init_score;
                diff
            }
        }

        impl std::ops::Neg for $type {
            type Output = Self;

            fn neg(self) -> Self {
                let mut neg = self.map_levels(|s| -s);
                neg.init_score = -self.init_score;
                neg
            }
        }

        impl std::fmt::Debug for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    f,
                    "{}(init: {}, hard: {:?}, soft: {:?})",
                    stringify!($type),
                    self.init_score,
                    self.hard_scores,
                    self.soft_scores
                )
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                // Format: "[0/0]hard/[-10/-20/-30]soft"
                let hard_str: Vec<String> = self.hard_scores.iter().map(|s| s.to_string()).collect();
                let soft_str: Vec<String> = self.soft_scores.iter().map(|s| s.to_string()).collect();

                if self.init_score != 0 {
                    write!(f, "{}init/", self.init_score)?;
                }
                write!(
                    f,
                    "[{}]hard/[{}]soft",
                    hard_str.join("/"),
                    soft_str.join("/")
                )
            }
        }

        impl $crate::score::ParseableScore for $type {
            fn parse(s: &str) -> Result<Self, $crate::score::ScoreParseError> {
                let s = s.trim();
                let (init_score, rest) = $crate::score::traits::split_init_score(s)?;

                let (hard_part, soft_part) = rest.split_once("hard/").ok_or_else(|| {
                    $crate::score::ScoreParseError {
                        message: format!(
                            "Invalid {} format '{}': expected '[...]hard/[...]soft'",
                            stringify!($type),
                            s
                        ),
                    }
                })?;

                let hard_part = hard_part
                    .trim()
                    .strip_prefix('[')
                    .and_then(|s| s.strip_suffix(']'))
                    .ok_or_else(|| $crate::score::ScoreParseError {
                        message: format!("Hard score part '{}' must be wrapped in brackets", hard_part),
                    })?;

                let soft_part = soft_part
                    .trim()
                    .strip_suffix("soft")
                    .and_then(|s| s.strip_prefix('['))
                    .and_then(|s| s.strip_suffix(']'))
                    .ok_or_else(|| $crate::score::ScoreParseError {
                        message: format!(
                            "Soft score part '{}' must be wrapped in brackets and end with 'soft'",
                            soft_part
                        ),
                    })?;

                let parse_levels = |part: &str, label: &str| -> Result<Vec<$num>, $crate::score::ScoreParseError> {
                    part.split('/')
                        .filter(|s| !s.trim().is_empty())
                        .map(|s| {
                            s.trim().parse::<$num>().map_err(|e| $crate::score::ScoreParseError {
                                message: format!("Invalid {} score '{}': {}", label, s, e),
                            })
                        })
                        .collect()
                };

                Ok(Self::of_uninitialized(
                    init_score,
                    parse_levels(hard_part, "hard")?,
                    parse_levels(soft_part, "soft")?,
                ))
            }

            fn to_string_repr(&self) -> String {
                format!("{}", self)
            }
        }

        impl $crate::score::BendableLevels for $type {
            type Number = $num;

            fn from_levels(init_score: i32, hard_scores: Vec<$num>, soft_scores: Vec<$num>) -> Self {
                Self::of_uninitialized(init_score, hard_scores, soft_scores)
            }

            fn hard_levels(&self) -> &[$num] {
                &self.hard_scores
            }

            fn soft_levels(&self) -> &[$num] {
                &self.soft_scores
            }
        }
    };
}

/// Generates `HardMediumSoftLevels` for a three-level score.
///
/// # Usage
/// ```ignore
/// impl_hard_medium_soft_levels!(HardMediumSoftLongScore(i64));
/// ```
macro_rules! impl_hard_medium_soft_levels {
    ($type:ident($num:ty)) => {
        impl $crate::score::HardMediumSoftLevels for $type {
            type Number = $num;

            #[inline]
            fn from_levels(init_score: i32, hard: $num, medium: $num, soft: $num) -> Self {
                $type::of_uninitialized(init_score, hard, medium, soft)
            }

            #[inline]
            fn hard_level(&self) -> $num {
                self.hard
            }

            #[inline]
            fn medium_level(&self) -> $num {
                self.medium
            }

            #[inline]
            fn soft_level(&self) -> $num {
                self.soft
            }
        }
    };
}

// Macros are used via #[macro_use] on the module declaration.
