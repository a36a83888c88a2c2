//! Letter grades for display

use std::fmt;

/// Letter grade on the plus/minus scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGrade {
    /// 97 and above
    APlus,
    /// 93 to below 97
    A,
    /// 90 to below 93
    AMinus,
    /// 87 to below 90
    BPlus,
    /// 83 to below 87
    B,
    /// 80 to below 83
    BMinus,
    /// 77 to below 80
    CPlus,
    /// 73 to below 77
    C,
    /// 70 to below 73
    CMinus,
    /// 67 to below 70
    DPlus,
    /// 65 to below 67
    D,
    /// Below 65
    F,
}

const LETTER_TABLE: [(f64, LetterGrade); 11] = [
    (97.0, LetterGrade::APlus),
    (93.0, LetterGrade::A),
    (90.0, LetterGrade::AMinus),
    (87.0, LetterGrade::BPlus),
    (83.0, LetterGrade::B),
    (80.0, LetterGrade::BMinus),
    (77.0, LetterGrade::CPlus),
    (73.0, LetterGrade::C),
    (70.0, LetterGrade::CMinus),
    (67.0, LetterGrade::DPlus),
    (65.0, LetterGrade::D),
];

impl LetterGrade {
    /// Map a course percentage to its letter grade
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        LETTER_TABLE
            .iter()
            .find(|(threshold, _)| percentage >= *threshold)
            .map_or(Self::F, |(_, letter)| *letter)
    }

    /// Letter as displayed (e.g., "B+")
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_thresholds() {
        assert_eq!(LetterGrade::from_percentage(97.0), LetterGrade::APlus);
        assert_eq!(LetterGrade::from_percentage(96.9), LetterGrade::A);
        assert_eq!(LetterGrade::from_percentage(83.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_percentage(67.0), LetterGrade::DPlus);
        assert_eq!(LetterGrade::from_percentage(65.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_percentage(64.0), LetterGrade::F);
    }

    #[test]
    fn test_letter_display() {
        assert_eq!(LetterGrade::BPlus.to_string(), "B+");
        assert_eq!(LetterGrade::AMinus.to_string(), "A-");
        assert_eq!(LetterGrade::F.to_string(), "F");
    }
}
