//! TalentVector - three-axis skill rating shared by applicants and slots

use std::fmt;
use std::str::FromStr;

use crate::error::ProblemError;

/// One of the three skill axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Hand-eye coordination (`H`).
    HandEye,
    /// Endurance (`E`).
    Endurance,
    /// Pizzazz (`P`).
    Pizzazz,
}

impl Axis {
    /// All axes in canonical `H E P` order.
    pub const ALL: [Axis; 3] = [Axis::HandEye, Axis::Endurance, Axis::Pizzazz];

    /// Returns the single-letter label used in input records.
    pub const fn label(self) -> char {
        match self {
            Axis::HandEye => 'H',
            Axis::Endurance => 'E',
            Axis::Pizzazz => 'P',
        }
    }

    /// Resolves an axis from its label, ignoring case.
    pub fn from_label(label: char) -> Option<Axis> {
        match label.to_ascii_uppercase() {
            'H' => Some(Axis::HandEye),
            'E' => Some(Axis::Endurance),
            'P' => Some(Axis::Pizzazz),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Axis::HandEye => 0,
            Axis::Endurance => 1,
            Axis::Pizzazz => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Axis {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Axis::from_label(c).ok_or_else(|| ProblemError::UnknownAxis(s.to_string()))
            }
            _ => Err(ProblemError::UnknownAxis(s.to_string())),
        }
    }
}

/// An immutable three-axis skill rating.
///
/// Both applicants and slots own one; the affinity between the two is the
/// dot product of their vectors.
///
/// # Examples
///
/// ```
/// use slotmatch_core::TalentVector;
///
/// let slot = TalentVector::new(7, 6, 4);
/// let applicant = TalentVector::new(8, 6, 9);
///
/// assert_eq!(applicant.score(&slot), 128);
/// assert_eq!(slot.score(&applicant), 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TalentVector {
    ratings: [u32; 3],
}

impl TalentVector {
    /// Creates a vector from its hand-eye, endurance and pizzazz ratings.
    #[inline]
    pub const fn new(hand_eye: u32, endurance: u32, pizzazz: u32) -> Self {
        TalentVector {
            ratings: [hand_eye, endurance, pizzazz],
        }
    }

    /// Largest accepted rating. Three products of ratings up to this bound
    /// sum without overflowing a `u64` score.
    pub const MAX_RATING: u32 = 1_000_000_000;

    /// Returns the first axis rated above [`TalentVector::MAX_RATING`].
    pub fn check_limits(&self) -> Result<(), ProblemError> {
        match Axis::ALL.into_iter().find(|&axis| self.get(axis) > Self::MAX_RATING) {
            Some(axis) => Err(ProblemError::RatingTooLarge {
                axis,
                rating: self.get(axis),
            }),
            None => Ok(()),
        }
    }

    /// Builds a vector from `(axis, rating)` pairs.
    ///
    /// Every axis must appear exactly once; order does not matter.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ProblemError>
    where
        I: IntoIterator<Item = (Axis, u32)>,
    {
        let mut ratings: [Option<u32>; 3] = [None; 3];
        for (axis, rating) in pairs {
            let entry = &mut ratings[axis.index()];
            if entry.is_some() {
                return Err(ProblemError::DuplicateAxis(axis));
            }
            if rating > Self::MAX_RATING {
                return Err(ProblemError::RatingTooLarge { axis, rating });
            }
            *entry = Some(rating);
        }

        let mut resolved = [0u32; 3];
        for axis in Axis::ALL {
            resolved[axis.index()] =
                ratings[axis.index()].ok_or(ProblemError::MissingAxis(axis))?;
        }
        Ok(TalentVector { ratings: resolved })
    }

    /// Returns the rating on one axis.
    #[inline]
    pub const fn get(&self, axis: Axis) -> u32 {
        self.ratings[axis.index()]
    }

    #[inline]
    pub const fn hand_eye(&self) -> u32 {
        self.ratings[0]
    }

    #[inline]
    pub const fn endurance(&self) -> u32 {
        self.ratings[1]
    }

    #[inline]
    pub const fn pizzazz(&self) -> u32 {
        self.ratings[2]
    }

    /// Affinity score: the dot product of the two vectors.
    ///
    /// Exact for ratings up to [`TalentVector::MAX_RATING`]; saturates at
    /// `u64::MAX` beyond that.
    #[inline]
    pub fn score(&self, other: &TalentVector) -> u64 {
        self.ratings
            .iter()
            .zip(other.ratings.iter())
            .map(|(&a, &b)| u64::from(a) * u64::from(b))
            .fold(0, u64::saturating_add)
    }
}

impl fmt::Display for TalentVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "H:{} E:{} P:{}",
            self.hand_eye(),
            self.endurance(),
            self.pizzazz()
        )
    }
}
