//! Tipos de dados olfativos

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::OlfactoryError;

/// Camada de volatilidade de uma nota (pirâmide olfativa)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Notas de tête (mais voláteis, primeiros minutos)
    Top,
    /// Notas de cœur
    Heart,
    /// Notas de fond (mais persistentes)
    Base,
}

impl Tier {
    /// Todas as camadas em ordem de exibição
    pub const ALL: [Tier; 3] = [Tier::Top, Tier::Heart, Tier::Base];

    /// Retorna as camadas em ordem de prioridade (fond > cœur > tête)
    ///
    /// A prioridade é documental: cada família é testada contra a união das
    /// três camadas, então a ordem nunca altera o resultado da classificação.
    pub fn by_priority() -> [Tier; 3] {
        [Tier::Base, Tier::Heart, Tier::Top]
    }

    /// Identificador canônico da camada
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Top => "top",
            Tier::Heart => "heart",
            Tier::Base => "base",
        }
    }

    /// Nome da camada no catálogo
    pub fn catalog_name(&self) -> &'static str {
        match self {
            Tier::Top => "Notes de tête",
            Tier::Heart => "Notes de cœur",
            Tier::Base => "Notes de fond",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = OlfactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" | "tete" | "tête" => Ok(Tier::Top),
            "heart" | "coeur" | "cœur" => Ok(Tier::Heart),
            "base" | "fond" => Ok(Tier::Base),
            _ => Err(OlfactoryError::UnknownTier(s.to_string())),
        }
    }
}

/// Família olfativa (enumeração fechada de sete valores)
///
/// A ordem de declaração é a ordem das regras de classificação e define a
/// ordem de iteração de um [`FamilySet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Floral,
    Woody,
    Gourmand,
    Oriental,
    Spicy,
    Leather,
    FreshAquatic,
}

impl Family {
    /// Todas as famílias em ordem de regra
    pub const ALL: [Family; 7] = [
        Family::Floral,
        Family::Woody,
        Family::Gourmand,
        Family::Oriental,
        Family::Spicy,
        Family::Leather,
        Family::FreshAquatic,
    ];

    /// Família atribuída quando nenhuma regra casa
    pub const DEFAULT: Family = Family::Floral;

    /// Retorna índice da regra (0 a 6)
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Retorna família pelo índice da regra
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Rótulo exibido no catálogo
    pub fn label(&self) -> &'static str {
        match self {
            Family::Floral => "Floral",
            Family::Woody => "Boisé",
            Family::Gourmand => "Gourmand",
            Family::Oriental => "Oriental",
            Family::Spicy => "Épicé",
            Family::Leather => "Cuir",
            Family::FreshAquatic => "Frais/Aquatique",
        }
    }

    /// Nome em inglês, aceito também na leitura
    pub fn english_name(&self) -> &'static str {
        match self {
            Family::Floral => "Floral",
            Family::Woody => "Woody",
            Family::Gourmand => "Gourmand",
            Family::Oriental => "Oriental",
            Family::Spicy => "Spicy",
            Family::Leather => "Leather",
            Family::FreshAquatic => "Fresh/Aquatic",
        }
    }

    fn bit(&self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Family {
    type Err = OlfactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();

        let named = Family::ALL.into_iter().find(|family| {
            family.label().to_lowercase() == wanted || family.english_name().to_lowercase() == wanted
        });
        if let Some(family) = named {
            return Ok(family);
        }

        // Grafias sem acento e metades de "Frais/Aquatique"
        match wanted.as_str() {
            "boise" => Ok(Family::Woody),
            "epice" => Ok(Family::Spicy),
            "frais" | "aquatique" | "fresh" | "aquatic" => Ok(Family::FreshAquatic),
            _ => Err(OlfactoryError::UnknownFamily(s.to_string())),
        }
    }
}

impl Serialize for Family {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Family {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Conjunto de famílias olfativas
///
/// Representado como padrão de bits (bit `i` = família de índice `i`), o que
/// garante ausência de duplicatas e iteração estável em ordem de regra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FamilySet {
    bits: u8,
}

impl FamilySet {
    /// Cria conjunto vazio
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Cria conjunto com uma única família
    pub fn only(family: Family) -> Self {
        Self { bits: family.bit() }
    }

    /// Cria conjunto com todas as sete famílias
    pub fn all() -> Self {
        Family::ALL.into_iter().collect()
    }

    /// Adiciona família; retorna `true` se ela ainda não estava presente
    pub fn insert(&mut self, family: Family) -> bool {
        let absent = !self.contains(family);
        self.bits |= family.bit();
        absent
    }

    /// Remove família; retorna `true` se ela estava presente
    pub fn remove(&mut self, family: Family) -> bool {
        let present = self.contains(family);
        self.bits &= !family.bit();
        present
    }

    pub fn contains(&self, family: Family) -> bool {
        self.bits & family.bit() != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Verifica se os conjuntos têm alguma família em comum
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits & other.bits != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Padrão de bits bruto
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Itera em ordem de regra
    pub fn iter(&self) -> FamilyIter {
        FamilyIter {
            bits: self.bits,
            next: 0,
        }
    }

    /// Rótulos de catálogo em ordem de regra
    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(|family| family.label()).collect()
    }
}

/// Iterador sobre um [`FamilySet`] em ordem de regra
#[derive(Debug, Clone)]
pub struct FamilyIter {
    bits: u8,
    next: u8,
}

impl Iterator for FamilyIter {
    type Item = Family;

    fn next(&mut self) -> Option<Family> {
        while let Some(family) = Family::from_index(self.next) {
            self.next += 1;
            if self.bits & family.bit() != 0 {
                return Some(family);
            }
        }
        None
    }
}

impl IntoIterator for FamilySet {
    type Item = Family;
    type IntoIter = FamilyIter;

    fn into_iter(self) -> FamilyIter {
        self.iter()
    }
}

impl IntoIterator for &FamilySet {
    type Item = Family;
    type IntoIter = FamilyIter;

    fn into_iter(self) -> FamilyIter {
        self.iter()
    }
}

impl FromIterator<Family> for FamilySet {
    fn from_iter<I: IntoIterator<Item = Family>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl Extend<Family> for FamilySet {
    fn extend<I: IntoIterator<Item = Family>>(&mut self, iter: I) {
        for family in iter {
            self.insert(family);
        }
    }
}

impl fmt::Display for FamilySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(", "))
    }
}

impl Serialize for FamilySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for FamilySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let families = Vec::<Family>::deserialize(deserializer)?;
        Ok(families.into_iter().collect())
    }
}

/// Identificador opaco de nota (ex.: `"rose_mai"`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NoteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Entrada de vocabulário: identificador e rótulo exibido
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Note {
    pub id: &'static str,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse() {
        assert_eq!("top".parse::<Tier>().unwrap(), Tier::Top);
        assert_eq!(" Cœur ".parse::<Tier>().unwrap(), Tier::Heart);
        assert_eq!("FOND".parse::<Tier>().unwrap(), Tier::Base);
        assert!("middle".parse::<Tier>().is_err());
    }

    #[test]
    fn test_tier_priority() {
        assert_eq!(Tier::by_priority(), [Tier::Base, Tier::Heart, Tier::Top]);
    }

    #[test]
    fn test_family_index_roundtrip() {
        for family in Family::ALL {
            assert_eq!(Family::from_index(family.index()), Some(family));
        }
        assert_eq!(Family::from_index(7), None);
    }

    #[test]
    fn test_family_parse() {
        assert_eq!("Boisé".parse::<Family>().unwrap(), Family::Woody);
        assert_eq!("woody".parse::<Family>().unwrap(), Family::Woody);
        assert_eq!("epice".parse::<Family>().unwrap(), Family::Spicy);
        assert_eq!("Frais/Aquatique".parse::<Family>().unwrap(), Family::FreshAquatic);
        assert_eq!("aquatic".parse::<Family>().unwrap(), Family::FreshAquatic);
        assert!("chypre".parse::<Family>().is_err());
    }

    #[test]
    fn test_family_set_order_and_uniqueness() {
        let mut set = FamilySet::empty();
        assert!(set.insert(Family::Spicy));
        assert!(set.insert(Family::Floral));
        assert!(!set.insert(Family::Spicy));

        assert_eq!(set.len(), 2);
        assert!(set.remove(Family::Spicy));
        assert!(!set.remove(Family::Spicy));
        set.insert(Family::Spicy);

        let order: Vec<Family> = set.iter().collect();
        assert_eq!(order, vec![Family::Floral, Family::Spicy]);
    }

    #[test]
    fn test_family_set_intersects() {
        let a: FamilySet = [Family::Woody, Family::Leather].into_iter().collect();
        let b = FamilySet::only(Family::Leather);
        let c = FamilySet::only(Family::Gourmand);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!FamilySet::empty().intersects(&a));
    }

    #[test]
    fn test_family_set_all() {
        let all = FamilySet::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all.bits(), 0b0111_1111);
    }

    #[test]
    fn test_family_set_serde() {
        let set: FamilySet = [Family::Spicy, Family::Oriental].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Oriental","Épicé"]"#);

        let back: FamilySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_family_set_display() {
        let set: FamilySet = [Family::FreshAquatic, Family::Woody].into_iter().collect();
        assert_eq!(set.to_string(), "Boisé, Frais/Aquatique");
    }

    #[test]
    fn test_note_id_borrow() {
        let mut ids = std::collections::BTreeSet::new();
        ids.insert(NoteId::from("oud"));
        assert!(ids.contains("oud"));
        assert_eq!(NoteId::new("oud").as_str(), "oud");
    }
}
