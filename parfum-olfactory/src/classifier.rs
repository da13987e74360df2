//! Classificador olfativo
//!
//! Deriva as famílias de uma fragrância a partir das suas notas. Função pura
//! e total: identificadores desconhecidos simplesmente não casam com nenhuma
//! família, e o resultado nunca é vazio.
//!
//! ## Regras
//!
//! 1. As três camadas são unidas, conceitualmente em prioridade
//!    fond > cœur > tête. A prioridade não altera o resultado: cada família é
//!    testada de forma independente contra a união.
//! 2. Uma família é atribuída se a união contém alguma nota da sua lista de
//!    qualificação ([`Family::qualifying_notes`]).
//! 3. Se nenhuma família casar, o resultado é `{Floral}`.
//!
//! A busca usa um índice reverso nota → famílias construído uma vez a partir
//! das listas de qualificação, então o custo é linear no número de notas.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::types::{Family, FamilySet, Tier};

static NOTE_FAMILIES: Lazy<HashMap<&'static str, FamilySet>> = Lazy::new(|| {
    let mut index: HashMap<&'static str, FamilySet> = HashMap::new();
    for family in Family::ALL {
        for &id in family.qualifying_notes() {
            index.entry(id).or_default().insert(family);
        }
    }
    index
});

/// Famílias qualificadas por uma única nota (vazio se nenhuma)
pub fn families_of(id: &str) -> FamilySet {
    NOTE_FAMILIES.get(id).copied().unwrap_or_default()
}

/// Classifica uma fragrância pelas notas de tête, cœur e fond
///
/// Aceita qualquer coleção de identificadores (`&BTreeSet<NoteId>`,
/// `&HashSet<String>`, arrays de `&str`...).
///
/// ```
/// use parfum_olfactory::{classify, Family};
///
/// let families = classify(["poivre_rose"], ["cannelle"], ["ambre_gris"]);
/// assert!(families.contains(Family::Spicy));
/// assert!(families.contains(Family::Oriental));
/// assert_eq!(families.len(), 2);
/// ```
pub fn classify<T, H, B>(top: T, heart: H, base: B) -> FamilySet
where
    T: IntoIterator,
    T::Item: AsRef<str>,
    H: IntoIterator,
    H::Item: AsRef<str>,
    B: IntoIterator,
    B::Item: AsRef<str>,
{
    let matched = base
        .into_iter()
        .map(|id| families_of(id.as_ref()))
        .chain(heart.into_iter().map(|id| families_of(id.as_ref())))
        .chain(top.into_iter().map(|id| families_of(id.as_ref())))
        .fold(FamilySet::empty(), FamilySet::union);

    if matched.is_empty() {
        tracing::trace!(fallback = %Family::DEFAULT, "no family rule matched");
        return FamilySet::only(Family::DEFAULT);
    }

    matched
}

/// Nota que disparou uma regra de família
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedNote {
    pub tier: Tier,
    pub id: String,
}

/// Família atribuída e as notas que a qualificaram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyMatch {
    pub family: Family,
    /// Vazio quando a família veio do fallback
    pub notes: Vec<MatchedNote>,
}

impl FamilyMatch {
    pub fn is_fallback(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Explica a classificação: para cada família atribuída, quais notas casaram
///
/// As famílias saem em ordem de regra e coincidem com [`classify`]; as notas
/// de cada família saem em prioridade fond > cœur > tête, na ordem recebida.
pub fn explain<T, H, B>(top: T, heart: H, base: B) -> Vec<FamilyMatch>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
    H: IntoIterator,
    H::Item: AsRef<str>,
    B: IntoIterator,
    B::Item: AsRef<str>,
{
    let mut tiers: Vec<(Tier, Vec<String>)> = Vec::with_capacity(3);
    tiers.push((Tier::Base, collect_ids(base)));
    tiers.push((Tier::Heart, collect_ids(heart)));
    tiers.push((Tier::Top, collect_ids(top)));

    let mut matches: Vec<FamilyMatch> = Family::ALL
        .into_iter()
        .filter_map(|family| {
            let notes: Vec<MatchedNote> = tiers
                .iter()
                .flat_map(|(tier, ids)| {
                    let tier = *tier;
                    ids.iter()
                        .filter(move |id| families_of(id).contains(family))
                        .map(move |id| MatchedNote {
                            tier,
                            id: id.clone(),
                        })
                })
                .collect();
            (!notes.is_empty()).then_some(FamilyMatch { family, notes })
        })
        .collect();

    if matches.is_empty() {
        matches.push(FamilyMatch {
            family: Family::DEFAULT,
            notes: Vec::new(),
        });
    }

    matches
}

fn collect_ids<I>(ids: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ids.into_iter().map(|id| id.as_ref().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_families_of() {
        assert_eq!(families_of("oud"), FamilySet::only(Family::Oriental));
        assert_eq!(families_of("cuir"), FamilySet::only(Family::Leather));
        assert!(families_of("ambroxan").is_empty());
        assert!(families_of("").is_empty());
    }

    #[test]
    fn test_classify_woody() {
        let families = classify(NONE, NONE, ["bois_santal", "patchouli"]);
        assert_eq!(families, FamilySet::only(Family::Woody));
        assert_eq!(families.labels(), vec!["Boisé"]);
    }

    #[test]
    fn test_classify_spicy_oriental() {
        let families = classify(["poivre_rose"], ["cannelle"], ["ambre_gris"]);
        assert_eq!(families.labels(), vec!["Oriental", "Épicé"]);
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(classify(NONE, NONE, NONE), FamilySet::only(Family::Floral));
        assert_eq!(
            classify(["licorne"], ["petit_grain"], ["ambroxan"]),
            FamilySet::only(Family::Floral)
        );
    }

    #[test]
    fn test_explain_lists_triggering_notes() {
        let matches = explain(["bergamote"], ["rose_mai", "cuir"], ["cuir", "oud"]);
        let families: Vec<Family> = matches.iter().map(|m| m.family).collect();
        assert_eq!(
            families,
            vec![Family::Floral, Family::Oriental, Family::Leather, Family::FreshAquatic]
        );

        let leather = &matches[2];
        assert_eq!(
            leather.notes,
            vec![
                MatchedNote { tier: Tier::Base, id: "cuir".into() },
                MatchedNote { tier: Tier::Heart, id: "cuir".into() },
            ]
        );
    }

    #[test]
    fn test_explain_fallback() {
        let matches = explain(NONE, NONE, ["ambroxan"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].family, Family::Floral);
        assert!(matches[0].is_fallback());
    }
}
