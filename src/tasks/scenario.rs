use crate::tasks::color::{get_color_from_label, CONTROL_OPACITY, SCENARIO_OPACITY};
use anyhow::Result;
use plotters::prelude::RGBColor;
use std::{cmp::Ordering, fmt, str::FromStr};

/// Scenarios produced by the load-testing harness, in display order. The
/// order (and each scenario's color) is fixed, and never derived from the
/// data being plotted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Scenario {
    Control,
    Balanced,
    Moderate,
    Short,
    Aggressive,
    VeryAggressive,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Control => write!(f, "control"),
            Scenario::Balanced => write!(f, "balanced"),
            Scenario::Moderate => write!(f, "moderate"),
            Scenario::Short => write!(f, "short"),
            Scenario::Aggressive => write!(f, "aggressive"),
            Scenario::VeryAggressive => write!(f, "very_aggressive"),
        }
    }
}

impl FromStr for Scenario {
    type Err = ();

    fn from_str(input: &str) -> Result<Scenario, Self::Err> {
        match input {
            "control" => Ok(Scenario::Control),
            "balanced" => Ok(Scenario::Balanced),
            "moderate" => Ok(Scenario::Moderate),
            "short" => Ok(Scenario::Short),
            "aggressive" => Ok(Scenario::Aggressive),
            "very_aggressive" => Ok(Scenario::VeryAggressive),
            _ => Err(()),
        }
    }
}

impl Scenario {
    pub const CONTROL_NAME: &'static str = "control";

    pub fn iter_variants() -> std::slice::Iter<'static, Scenario> {
        static VARIANTS: [Scenario; 6] = [
            Scenario::Control,
            Scenario::Balanced,
            Scenario::Moderate,
            Scenario::Short,
            Scenario::Aggressive,
            Scenario::VeryAggressive,
        ];
        VARIANTS.iter()
    }

    pub fn get_color(&self) -> Result<RGBColor> {
        get_color_from_label(&self.to_string())
    }

    /// Color for an arbitrary scenario name. Names outside the known set
    /// still get plotted, in a neutral grey.
    pub fn color_for(name: &str) -> Result<RGBColor> {
        match name.parse::<Scenario>() {
            Ok(scenario) => scenario.get_color(),
            Err(_) => get_color_from_label("light-grey"),
        }
    }

    pub fn opacity_for(name: &str) -> f64 {
        if name == Self::CONTROL_NAME {
            CONTROL_OPACITY
        } else {
            SCENARIO_OPACITY
        }
    }

    /// Display ordering over scenario names: known scenarios first in their
    /// fixed order, then unknown ones lexicographically.
    pub fn cmp_names(a: &str, b: &str) -> Ordering {
        match (a.parse::<Scenario>(), b.parse::<Scenario>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a.cmp(b),
        }
    }

    pub fn sort_names(names: &mut [String]) {
        names.sort_by(|a, b| Self::cmp_names(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for scenario in Scenario::iter_variants() {
            assert_eq!(scenario.to_string().parse::<Scenario>(), Ok(*scenario));
        }
        assert!("unknown".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_sort_names_uses_fixed_order() {
        let mut names: Vec<String> = ["zeta", "aggressive", "control", "alpha", "balanced"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Scenario::sort_names(&mut names);
        assert_eq!(
            names,
            vec!["control", "balanced", "aggressive", "alpha", "zeta"]
        );
    }

    #[test]
    fn test_unknown_scenarios_fall_back_to_grey() {
        assert_eq!(
            Scenario::color_for("mystery").unwrap(),
            RGBColor(0xcc, 0xcc, 0xcc)
        );
        assert_eq!(Scenario::opacity_for("control"), 0.4);
        assert_eq!(Scenario::opacity_for("short"), 0.9);
    }
}
