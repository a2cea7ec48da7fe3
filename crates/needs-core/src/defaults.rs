//! The built-in default needs table (BNPB profile, Perka 7/2008).

use serde_json::Map;

use crate::resource::{Amount, Resource};
use crate::table::NeedsTable;
use crate::translate::Translate;

/// Sentence template shared by every default resource.
pub const READABLE_SENTENCE: &str = "A displaced person should be provided with \
{{ Default }} {{ Unit }}/{{ Units }}/{{ Unit abbreviation }} of {{ Resource name }}. \
Though no less than {{ Minimum allowed }} and no more than {{ Maximum allowed }}. \
This should be provided {{ Frequency }}.";

pub const DEFAULT_PROVENANCE: &str = "The minimum needs are based on Perka 7/2008.";
pub const DEFAULT_PROFILE: &str = "BNPB_en";

struct Seed {
    name: &'static str,
    default: &'static str,
    minimum: &'static str,
    maximum: &'static str,
    frequency: &'static str,
    description: &'static str,
    unit: &'static str,
    units: &'static str,
    abbreviation: &'static str,
}

const RESOURCES: [Seed; 5] = [
    Seed {
        name: "Rice",
        default: "2.8",
        minimum: "0",
        maximum: "100",
        frequency: "weekly",
        description: "Basic food",
        unit: "kilogram",
        units: "kilograms",
        abbreviation: "kg",
    },
    Seed {
        name: "Drinking Water",
        default: "17.5",
        minimum: "0",
        maximum: "100",
        frequency: "weekly",
        description: "For drinking",
        unit: "litre",
        units: "litres",
        abbreviation: "l",
    },
    Seed {
        name: "Clean Water",
        default: "67",
        minimum: "10",
        maximum: "100",
        frequency: "weekly",
        description: "For washing",
        unit: "litre",
        units: "litres",
        abbreviation: "l",
    },
    Seed {
        name: "Family Kits",
        default: "0.2",
        minimum: "0.1",
        maximum: "1",
        frequency: "weekly",
        description: "Hygiene kits",
        unit: "",
        units: "",
        abbreviation: "",
    },
    Seed {
        name: "Toilets",
        default: "0.05",
        minimum: "0.02",
        maximum: "1",
        frequency: "single",
        description: "",
        unit: "",
        units: "",
        abbreviation: "",
    },
];

/// The default needs table with resource names run through `translator`.
///
/// Pure: the same translator always yields the same table.
pub fn defaults<T: Translate + ?Sized>(translator: &T) -> NeedsTable {
    let resources = RESOURCES
        .iter()
        .map(|seed| Resource {
            resource_name: Some(translator.translate(seed.name)),
            default: Some(Amount::from(seed.default)),
            minimum_allowed: Some(Amount::from(seed.minimum)),
            maximum_allowed: Some(Amount::from(seed.maximum)),
            frequency: Some(seed.frequency.to_string()),
            unit: Some(seed.unit.to_string()),
            units: Some(seed.units.to_string()),
            unit_abbreviation: Some(seed.abbreviation.to_string()),
            resource_description: Some(seed.description.to_string()),
            readable_sentence: Some(READABLE_SENTENCE.to_string()),
            extra: Map::new(),
        })
        .collect();

    NeedsTable {
        resources: Some(resources),
        provenance: Some(DEFAULT_PROVENANCE.to_string()),
        profile: Some(DEFAULT_PROFILE.to_string()),
        extra: Map::new(),
    }
}
