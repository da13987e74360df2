//! Coleção de notas de uma fragrância
//!
//! Três conjuntos (tête, cœur, fond) com semântica de conjunto: sem duplicatas
//! e independentes da ordem de inserção. As famílias são recalculadas a cada
//! chamada de [`NoteCollection::families`]; nada é guardado em cache.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::classifier::{self, FamilyMatch};
use crate::error::{OlfactoryError, OlfactoryResult};
use crate::types::{FamilySet, NoteId, Tier};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteCollection {
    #[serde(default)]
    pub top: BTreeSet<NoteId>,
    #[serde(default)]
    pub heart: BTreeSet<NoteId>,
    #[serde(default)]
    pub base: BTreeSet<NoteId>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria coleção a partir das três camadas
    pub fn from_tiers<T, H, B>(top: T, heart: H, base: B) -> Self
    where
        T: IntoIterator,
        T::Item: Into<NoteId>,
        H: IntoIterator,
        H::Item: Into<NoteId>,
        B: IntoIterator,
        B::Item: Into<NoteId>,
    {
        Self {
            top: top.into_iter().map(Into::into).collect(),
            heart: heart.into_iter().map(Into::into).collect(),
            base: base.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tier(&self, tier: Tier) -> &BTreeSet<NoteId> {
        match tier {
            Tier::Top => &self.top,
            Tier::Heart => &self.heart,
            Tier::Base => &self.base,
        }
    }

    pub fn tier_mut(&mut self, tier: Tier) -> &mut BTreeSet<NoteId> {
        match tier {
            Tier::Top => &mut self.top,
            Tier::Heart => &mut self.heart,
            Tier::Base => &mut self.base,
        }
    }

    /// Adiciona nota à camada; retorna `false` se já existia
    pub fn insert(&mut self, tier: Tier, id: impl Into<NoteId>) -> bool {
        self.tier_mut(tier).insert(id.into())
    }

    /// Remove nota da camada; retorna `true` se ela existia
    pub fn remove(&mut self, tier: Tier, id: &str) -> bool {
        self.tier_mut(tier).remove(id)
    }

    /// Total de notas nas três camadas
    pub fn len(&self) -> usize {
        self.top.len() + self.heart.len() + self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Itera todas as notas, camada por camada (tête, cœur, fond)
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &NoteId)> + '_ {
        Tier::ALL
            .into_iter()
            .flat_map(move |tier| self.tier(tier).iter().map(move |id| (tier, id)))
    }

    /// Famílias olfativas da coleção (nunca vazio)
    pub fn families(&self) -> FamilySet {
        classifier::classify(&self.top, &self.heart, &self.base)
    }

    /// Famílias com as notas que as qualificaram
    pub fn explain(&self) -> Vec<FamilyMatch> {
        classifier::explain(&self.top, &self.heart, &self.base)
    }

    /// Notas ausentes do vocabulário da própria camada
    pub fn unknown_notes(&self) -> Vec<(Tier, &NoteId)> {
        self.iter()
            .filter(|(tier, id)| !tier.contains(id.as_str()))
            .collect()
    }

    /// Validação de cadastro: exige ao menos uma nota e apenas notas do
    /// vocabulário de cada camada
    ///
    /// Pertence ao fluxo de salvar produto, não ao classificador, que aceita
    /// qualquer entrada.
    pub fn validate(&self) -> OlfactoryResult<()> {
        if self.is_empty() {
            return Err(OlfactoryError::EmptyComposition);
        }

        match self.unknown_notes().first() {
            Some((tier, id)) => Err(OlfactoryError::UnknownNote {
                tier: *tier,
                id: id.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Como [`validate`](Self::validate), mas reporta todos os problemas
    pub fn validate_all(&self) -> Result<(), Vec<OlfactoryError>> {
        if self.is_empty() {
            return Err(vec![OlfactoryError::EmptyComposition]);
        }

        let errors: Vec<OlfactoryError> = self
            .unknown_notes()
            .into_iter()
            .map(|(tier, id)| OlfactoryError::UnknownNote {
                tier,
                id: id.to_string(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = errors.len(), "note collection failed validation");
            Err(errors)
        }
    }
}
