use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Combinable styles determining which elements of a load bar are drawn.
///
/// Each element is an independent switch. However the set is built, the
/// elements are always rendered in the same order: bar, fraction, percentage,
/// spinner.
///
/// Defaults to [`StyleFlags::BAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleFlags {
    /// A traditional filled bar.
    pub bar: bool,
    /// The raw `(current / finish)` values.
    pub fraction: bool,
    /// Progress percentage.
    pub percentage: bool,
    /// Continuous progress spinner.
    pub spinner: bool,
}

impl StyleFlags {
    /// Nothing is drawn.
    pub const NONE: Self = Self {
        bar: false,
        fraction: false,
        percentage: false,
        spinner: false,
    };
    /// Only the bar.
    pub const BAR: Self = Self {
        bar: true,
        ..Self::NONE
    };
    /// Only the fraction.
    pub const FRACTION: Self = Self {
        fraction: true,
        ..Self::NONE
    };
    /// Only the percentage.
    pub const PERCENTAGE: Self = Self {
        percentage: true,
        ..Self::NONE
    };
    /// Only the spinner.
    pub const SPINNER: Self = Self {
        spinner: true,
        ..Self::NONE
    };
    /// Every element.
    pub const ALL: Self = Self {
        bar: true,
        fraction: true,
        percentage: true,
        spinner: true,
    };

    /// Return `true` if every element enabled in `other` is enabled here.
    pub fn contains(&self, other: StyleFlags) -> bool {
        (!other.bar || self.bar)
            && (!other.fraction || self.fraction)
            && (!other.percentage || self.percentage)
            && (!other.spinner || self.spinner)
    }

    /// Return `true` if no element is enabled.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self::BAR
    }
}

impl BitOr for StyleFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bar: self.bar || rhs.bar,
            fraction: self.fraction || rhs.fraction,
            percentage: self.percentage || rhs.percentage,
            spinner: self.spinner || rhs.spinner,
        }
    }
}

impl BitOrAssign for StyleFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl fmt::Display for StyleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.bar, "bar"),
            (self.fraction, "fraction"),
            (self.percentage, "percentage"),
            (self.spinner, "spinner"),
        ];
        let enabled: Vec<&str> = names
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        if enabled.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&enabled.join(" | "))
        }
    }
}
