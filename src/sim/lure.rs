//! Lure strategies: a stateless predicate pair per variant.
//!
//! A lure answers two questions about a candidate fish, both in the context of
//! whatever is currently hooked: does the candidate want to chase, and does a
//! bite actually hook it. The chaining lures (Small, SmallUpgraded, Medium)
//! only accept the next size class up once something is on the hook, which is
//! the size-ladder combo mechanic; the Large variants are single-catch.

use serde::{Deserialize, Serialize};

use super::fish::{FishDescription, FishModifier, FishSize};

/// The six lure variants a player can own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LureKind {
    Basic,
    Small,
    SmallUpgraded,
    Medium,
    Large,
    LargeUpgraded,
}

impl LureKind {
    /// Whether `candidate` is drawn toward the lure, given the hooked fish.
    pub fn attracts(
        &self,
        candidate: &FishDescription,
        hooked: Option<&FishDescription>,
    ) -> bool {
        match self {
            LureKind::Basic | LureKind::Small | LureKind::SmallUpgraded => match hooked {
                None => true,
                Some(h) => candidate.size > h.size,
            },
            LureKind::Medium => match hooked {
                None => candidate.size >= FishSize::Medium,
                Some(h) => candidate.size > h.size,
            },
            LureKind::Large | LureKind::LargeUpgraded => match hooked {
                None => candidate.size >= FishSize::Large,
                Some(h) => candidate.size > h.size,
            },
        }
    }

    /// Whether a bite from `candidate` hooks it, given the hooked fish.
    pub fn bites(&self, candidate: &FishDescription, hooked: Option<&FishDescription>) -> bool {
        match self {
            LureKind::Basic => candidate.size == FishSize::Small,
            LureKind::Small | LureKind::SmallUpgraded => match hooked {
                None => candidate.size == FishSize::Small,
                Some(h) => h.size.next_larger() == Some(candidate.size),
            },
            LureKind::Medium => match hooked {
                None => candidate.size == FishSize::Medium,
                Some(h) => h.size.next_larger() == Some(candidate.size),
            },
            LureKind::Large | LureKind::LargeUpgraded => {
                hooked.is_none() && candidate.size == FishSize::Large
            }
        }
    }

    /// Modifier a successful hook writes onto the fish, if any. The plain
    /// Large lure scuffs its catch; the upgraded small lure grooms it.
    pub fn hook_modifier(&self) -> Option<FishModifier> {
        match self {
            LureKind::Large => Some(FishModifier::Ugly),
            LureKind::SmallUpgraded => Some(FishModifier::Beautiful),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LureKind::Basic => "Basic",
            LureKind::Small => "Small",
            LureKind::SmallUpgraded => "Small+",
            LureKind::Medium => "Medium",
            LureKind::Large => "Large",
            LureKind::LargeUpgraded => "Large+",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::fish::FishRarity;

    fn fish(size: FishSize) -> FishDescription {
        FishDescription::new(size, FishRarity::Common, FishModifier::Typical)
    }

    #[test]
    fn test_basic_attracts_anything_when_free() {
        let lure = LureKind::Basic;
        for size in [
            FishSize::Small,
            FishSize::Medium,
            FishSize::Large,
            FishSize::VeryLarge,
        ] {
            assert!(lure.attracts(&fish(size), None));
        }
    }

    #[test]
    fn test_basic_attracts_only_larger_when_occupied() {
        let lure = LureKind::Basic;
        let hooked = fish(FishSize::Medium);
        assert!(!lure.attracts(&fish(FishSize::Small), Some(&hooked)));
        assert!(!lure.attracts(&fish(FishSize::Medium), Some(&hooked)));
        assert!(lure.attracts(&fish(FishSize::Large), Some(&hooked)));
    }

    #[test]
    fn test_basic_hooks_only_small() {
        let lure = LureKind::Basic;
        assert!(lure.bites(&fish(FishSize::Small), None));
        assert!(!lure.bites(&fish(FishSize::Medium), None));
        // rule ignores the hook state: a small bite always lands
        assert!(lure.bites(&fish(FishSize::Small), Some(&fish(FishSize::Small))));
    }

    #[test]
    fn test_small_lure_chains_one_size_up() {
        let lure = LureKind::Small;
        assert!(lure.bites(&fish(FishSize::Small), None));
        assert!(!lure.bites(&fish(FishSize::Medium), None));

        let hooked = fish(FishSize::Small);
        assert!(lure.bites(&fish(FishSize::Medium), Some(&hooked)));
        assert!(!lure.bites(&fish(FishSize::Small), Some(&hooked)));
        assert!(!lure.bites(&fish(FishSize::Large), Some(&hooked)));
    }

    #[test]
    fn test_medium_lure_snubs_small_fish() {
        let lure = LureKind::Medium;
        assert!(!lure.attracts(&fish(FishSize::Small), None));
        assert!(lure.attracts(&fish(FishSize::Medium), None));
        assert!(lure.bites(&fish(FishSize::Medium), None));
        assert!(!lure.bites(&fish(FishSize::Small), None));

        let hooked = fish(FishSize::Medium);
        assert!(lure.bites(&fish(FishSize::Large), Some(&hooked)));
        assert!(!lure.bites(&fish(FishSize::VeryLarge), Some(&hooked)));
    }

    #[test]
    fn test_large_lures_are_single_catch() {
        for lure in [LureKind::Large, LureKind::LargeUpgraded] {
            assert!(lure.bites(&fish(FishSize::Large), None));
            assert!(!lure.bites(&fish(FishSize::VeryLarge), None));
            // occupied hook refuses everything
            let hooked = fish(FishSize::Large);
            assert!(!lure.bites(&fish(FishSize::VeryLarge), Some(&hooked)));
        }
    }

    #[test]
    fn test_chain_tops_out_at_very_large() {
        let lure = LureKind::Small;
        let hooked = fish(FishSize::VeryLarge);
        for size in [
            FishSize::Small,
            FishSize::Medium,
            FishSize::Large,
            FishSize::VeryLarge,
        ] {
            assert!(!lure.bites(&fish(size), Some(&hooked)));
        }
    }

    #[test]
    fn test_hook_modifiers() {
        assert_eq!(LureKind::Large.hook_modifier(), Some(FishModifier::Ugly));
        assert_eq!(
            LureKind::SmallUpgraded.hook_modifier(),
            Some(FishModifier::Beautiful)
        );
        assert_eq!(LureKind::LargeUpgraded.hook_modifier(), None);
        assert_eq!(LureKind::Basic.hook_modifier(), None);
    }

    #[test]
    fn test_upgraded_variants_share_base_predicates() {
        let small = fish(FishSize::Small);
        let medium = fish(FishSize::Medium);
        for (candidate, hooked) in [(&small, None), (&medium, Some(&small))] {
            assert_eq!(
                LureKind::Small.bites(candidate, hooked),
                LureKind::SmallUpgraded.bites(candidate, hooked)
            );
            assert_eq!(
                LureKind::Small.attracts(candidate, hooked),
                LureKind::SmallUpgraded.attracts(candidate, hooked)
            );
        }
    }
}
