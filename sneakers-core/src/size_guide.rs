use std::fmt;
use strum::{EnumIter, EnumString, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Fit {
    #[default]
    #[strum(serialize = "regular", serialize = "normal")]
    Regular,
    Wide,
}

impl Fit {
    pub fn title(&self) -> &'static str {
        match self {
            Fit::Regular => "Regular Fit",
            Fit::Wide => "Wide Fit",
        }
    }

    pub fn all() -> Vec<Fit> {
        Fit::iter().collect()
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SizeSystem {
    #[default]
    Us,
    Eu,
    Uk,
}

impl SizeSystem {
    pub fn all() -> Vec<SizeSystem> {
        SizeSystem::iter().collect()
    }
}

impl fmt::Display for SizeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SizeSystem::Us => "US",
            SizeSystem::Eu => "EU",
            SizeSystem::Uk => "UK",
        };
        f.write_str(label)
    }
}

// Columns line up: index i is the same shoe in every system.
const REGULAR_US: [&str; 9] = ["6", "6.5", "7", "7.5", "8", "8.5", "9", "9.5", "10"];
const REGULAR_EU: [&str; 9] = ["39", "39.5", "40", "41", "41.5", "42", "42.5", "43", "44"];
const REGULAR_UK: [&str; 9] = ["5.5", "6", "6.5", "7", "7.5", "8", "8.5", "9", "9.5"];
const WIDE_US: [&str; 9] = ["6W", "6.5W", "7W", "7.5W", "8W", "8.5W", "9W", "9.5W", "10W"];
const WIDE_EU: [&str; 9] = [
    "39E", "39.5E", "40E", "41E", "41.5E", "42E", "42.5E", "43E", "44E",
];
const WIDE_UK: [&str; 9] = [
    "5.5E", "6E", "6.5E", "7E", "7.5E", "8E", "8.5E", "9E", "9.5E",
];

pub fn sizes(fit: Fit, system: SizeSystem) -> &'static [&'static str] {
    match (fit, system) {
        (Fit::Regular, SizeSystem::Us) => &REGULAR_US,
        (Fit::Regular, SizeSystem::Eu) => &REGULAR_EU,
        (Fit::Regular, SizeSystem::Uk) => &REGULAR_UK,
        (Fit::Wide, SizeSystem::Us) => &WIDE_US,
        (Fit::Wide, SizeSystem::Eu) => &WIDE_EU,
        (Fit::Wide, SizeSystem::Uk) => &WIDE_UK,
    }
}

/// The same shoe expressed in the other two systems, or `None` if `size`
/// is not in the `system` table for this fit.
pub fn convert(fit: Fit, system: SizeSystem, size: &str) -> Option<Vec<(SizeSystem, &'static str)>> {
    let index = sizes(fit, system)
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(size.trim()))?;

    Some(
        SizeSystem::iter()
            .filter(|other| *other != system)
            .map(|other| (other, sizes(fit, other)[index]))
            .collect(),
    )
}
