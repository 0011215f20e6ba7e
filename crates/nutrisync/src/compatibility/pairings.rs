//! Curated lookup tables consulted by the cascade.

use crate::catalog::PropertySet;

/// Two tag sets that complement each other when one food covers `left` and
/// the other covers `right`, in either orientation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NutrientPair {
    pub(crate) left: &'static [&'static str],
    pub(crate) right: &'static [&'static str],
}

impl NutrientPair {
    pub(crate) fn matches(&self, first: &PropertySet, second: &PropertySet) -> bool {
        (first.contains_all(self.left) && second.contains_all(self.right))
            || (second.contains_all(self.left) && first.contains_all(self.right))
    }
}

/// Unordered pair of lowercase food names.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NamePair(pub(crate) &'static str, pub(crate) &'static str);

impl NamePair {
    pub(crate) fn matches(&self, first: &str, second: &str) -> bool {
        (first == self.0 && second == self.1) || (first == self.1 && second == self.0)
    }
}

pub(crate) const EXCELLENT_COMPLEMENTS: &[NutrientPair] = &[
    // banana + milk
    NutrientPair {
        left: &["potassium", "energy", "digestive"],
        right: &["calcium", "protein", "hydration"],
    },
    // rice + fish
    NutrientPair {
        left: &["carbs", "energy", "fiber"],
        right: &["omega_3", "protein", "vitamin_d"],
    },
    // spinach + tomato
    NutrientPair {
        left: &["iron", "vitamin_k", "folate"],
        right: &["vitamin_c", "fiber", "antioxidants"],
    },
    // chicken + carrot
    NutrientPair {
        left: &["protein", "iron", "b_vitamins"],
        right: &["vitamin_c", "fiber", "beta_carotene"],
    },
];

pub(crate) const GOOD_COMPLEMENTS: &[NutrientPair] = &[
    NutrientPair {
        left: &["vitamin_c", "fiber", "antioxidants"],
        right: &["vitamin_c", "fiber", "antioxidants"],
    },
    NutrientPair {
        left: &["protein", "iron"],
        right: &["vitamin_c"],
    },
    NutrientPair {
        left: &["carbs", "fiber"],
        right: &["protein"],
    },
];

pub(crate) const TRADITIONAL_GOOD: &[NamePair] = &[
    NamePair("milk", "banana"),
    NamePair("rice", "fish"),
    NamePair("lentils", "rice"),
    NamePair("bread", "cheese"),
    NamePair("spinach", "potato"),
    NamePair("ginger", "honey"),
];

// (spinach, potato) also appears in TRADITIONAL_GOOD; both entries apply.
pub(crate) const TRADITIONAL_BAD: &[NamePair] = &[
    NamePair("milk", "fish"),
    NamePair("milk", "sour fruits"),
    NamePair("honey", "heating foods"),
    NamePair("spinach", "potato"),
    NamePair("coffee", "milk"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutrient_pair_matches_in_either_orientation() {
        let pair = GOOD_COMPLEMENTS[1];
        let lentils: PropertySet = ["protein", "iron", "fiber"].into_iter().collect();
        let orange: PropertySet = ["vitamin_c", "citrus"].into_iter().collect();

        assert!(pair.matches(&lentils, &orange));
        assert!(pair.matches(&orange, &lentils));
        assert!(!pair.matches(&orange, &orange));
    }

    #[test]
    fn name_pair_is_unordered_and_exact() {
        let pair = NamePair("coffee", "milk");
        assert!(pair.matches("milk", "coffee"));
        assert!(pair.matches("coffee", "milk"));
        assert!(!pair.matches("coffee", "buttermilk"));
    }
}
