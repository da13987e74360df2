//! Propriedades do classificador sobre entradas arbitrárias

use std::collections::{BTreeSet, HashSet};

use parfum_olfactory::{classify, explain, Family, FamilySet, NoteCollection, Tier};
use proptest::prelude::*;

/// Mistura notas conhecidas de todas as camadas com identificadores aleatórios
fn note_id() -> impl Strategy<Value = String> {
    let known: Vec<String> = Tier::ALL
        .into_iter()
        .flat_map(|tier| tier.note_ids())
        .map(str::to_string)
        .collect();

    prop_oneof![
        3 => proptest::sample::select(known),
        1 => "[a-z_]{0,12}",
    ]
}

fn tier_notes() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(note_id(), 0..8)
}

proptest! {
    #[test]
    fn result_is_never_empty(top in tier_notes(), heart in tier_notes(), base in tier_notes()) {
        prop_assert!(!classify(&top, &heart, &base).is_empty());
    }

    #[test]
    fn result_is_within_the_seven_families(top in tier_notes(), heart in tier_notes(), base in tier_notes()) {
        let families = classify(&top, &heart, &base);
        prop_assert!(families.len() <= Family::ALL.len());
        prop_assert_eq!(families.bits() & !FamilySet::all().bits(), 0);
    }

    #[test]
    fn classification_is_idempotent(top in tier_notes(), heart in tier_notes(), base in tier_notes()) {
        prop_assert_eq!(classify(&top, &heart, &base), classify(&top, &heart, &base));
    }

    #[test]
    fn classification_ignores_order_and_duplicates(
        top in tier_notes(),
        heart in tier_notes(),
        base in tier_notes(),
    ) {
        let mut reversed_top = top.clone();
        reversed_top.reverse();
        let mut doubled_base = base.clone();
        doubled_base.extend(base.iter().cloned());

        let as_sets: (HashSet<&String>, BTreeSet<&String>) = (heart.iter().collect(), base.iter().collect());

        let expected = classify(&top, &heart, &base);
        prop_assert_eq!(classify(&reversed_top, &heart, &doubled_base), expected);
        prop_assert_eq!(classify(&top, &as_sets.0, &as_sets.1), expected);
    }

    #[test]
    fn explain_agrees_with_classify(top in tier_notes(), heart in tier_notes(), base in tier_notes()) {
        let explained: FamilySet = explain(&top, &heart, &base).into_iter().map(|m| m.family).collect();
        prop_assert_eq!(explained, classify(&top, &heart, &base));
    }

    #[test]
    fn collection_matches_free_function(top in tier_notes(), heart in tier_notes(), base in tier_notes()) {
        let notes = NoteCollection::from_tiers(top.clone(), heart.clone(), base.clone());
        prop_assert_eq!(notes.families(), classify(&top, &heart, &base));
    }
}
