//! Vocabulários de notas e listas de qualificação das famílias
//!
//! Dados de referência estáticos: três vocabulários (tête, cœur, fond), cada um
//! mapeando identificador → rótulo, e as sete listas de notas que qualificam
//! cada família. Os índices de busca são construídos uma única vez.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::{Family, Note, Tier};

const fn note(id: &'static str, label: &'static str) -> Note {
    Note { id, label }
}

// ═══════════════════════════════════════════════════════════════════════════════
// VOCABULÁRIOS POR CAMADA
// ═══════════════════════════════════════════════════════════════════════════════

static TOP_NOTES: &[Note] = &[
    note("bergamote", "Bergamote"),
    note("citron", "Citron"),
    note("citron_vert", "Citron vert"),
    note("mandarine", "Mandarine"),
    note("orange_amere", "Orange amère"),
    note("pamplemousse", "Pamplemousse"),
    note("yuzu", "Yuzu"),
    note("neroli", "Néroli"),
    note("petit_grain", "Petit-grain"),
    note("poivre_rose", "Poivre rose"),
    note("gingembre", "Gingembre"),
    note("cardamome", "Cardamome"),
    note("menthe", "Menthe"),
    note("basilic", "Basilic"),
    note("lavande", "Lavande"),
    note("aldehydes", "Aldéhydes"),
    note("notes_marines", "Notes marines"),
    note("sel_marin", "Sel marin"),
    note("cassis", "Cassis"),
    note("poire", "Poire"),
    note("pomme_verte", "Pomme verte"),
    note("framboise", "Framboise"),
    note("the_vert", "Thé vert"),
];

static HEART_NOTES: &[Note] = &[
    note("rose_mai", "Rose de mai"),
    note("rose_damascena", "Rose de Damas"),
    note("jasmin", "Jasmin"),
    note("jasmin_sambac", "Jasmin sambac"),
    note("iris", "Iris"),
    note("tubereuse", "Tubéreuse"),
    note("fleur_oranger", "Fleur d'oranger"),
    note("ylang_ylang", "Ylang-ylang"),
    note("muguet", "Muguet"),
    note("violette", "Violette"),
    note("pivoine", "Pivoine"),
    note("magnolia", "Magnolia"),
    note("gardenia", "Gardénia"),
    note("mimosa", "Mimosa"),
    note("geranium", "Géranium"),
    note("heliotrope", "Héliotrope"),
    note("cannelle", "Cannelle"),
    note("muscade", "Noix de muscade"),
    note("clou_girofle", "Clou de girofle"),
    note("safran", "Safran"),
    note("poivre_noir", "Poivre noir"),
    note("cuir", "Cuir"),
    note("the_noir", "Thé noir"),
    note("notes_aquatiques", "Notes aquatiques"),
    note("figue", "Figue"),
];

static BASE_NOTES: &[Note] = &[
    note("bois_santal", "Bois de santal"),
    note("cedre", "Cèdre"),
    note("vetiver", "Vétiver"),
    note("patchouli", "Patchouli"),
    note("gaiac", "Bois de gaïac"),
    note("mousse_chene", "Mousse de chêne"),
    note("oud", "Oud"),
    note("ambre", "Ambre"),
    note("ambre_gris", "Ambre gris"),
    note("encens", "Encens"),
    note("myrrhe", "Myrrhe"),
    note("benjoin", "Benjoin"),
    note("labdanum", "Labdanum"),
    note("vanille", "Vanille"),
    note("feve_tonka", "Fève tonka"),
    note("caramel", "Caramel"),
    note("miel", "Miel"),
    note("praline", "Praliné"),
    note("chocolat", "Chocolat"),
    note("musc_blanc", "Musc blanc"),
    note("cuir", "Cuir"),
    note("daim", "Daim"),
    note("tabac", "Tabac"),
    note("ambroxan", "Ambroxan"),
];

// ═══════════════════════════════════════════════════════════════════════════════
// LISTAS DE QUALIFICAÇÃO DAS FAMÍLIAS
// ═══════════════════════════════════════════════════════════════════════════════

static FLORAL: &[&str] = &[
    "rose_mai",
    "rose_damascena",
    "jasmin",
    "jasmin_sambac",
    "iris",
    "tubereuse",
    "fleur_oranger",
    "ylang_ylang",
    "muguet",
    "violette",
    "pivoine",
    "magnolia",
    "gardenia",
    "mimosa",
    "geranium",
    "heliotrope",
    "neroli",
];

static WOODY: &[&str] = &[
    "bois_santal",
    "cedre",
    "vetiver",
    "patchouli",
    "gaiac",
    "mousse_chene",
];

static GOURMAND: &[&str] = &["vanille", "feve_tonka", "caramel", "miel", "praline", "chocolat"];

static ORIENTAL: &[&str] = &[
    "ambre",
    "ambre_gris",
    "encens",
    "myrrhe",
    "oud",
    "benjoin",
    "labdanum",
];

static SPICY: &[&str] = &[
    "poivre_rose",
    "poivre_noir",
    "cannelle",
    "muscade",
    "clou_girofle",
    "safran",
    "gingembre",
    "cardamome",
];

static LEATHER: &[&str] = &["cuir", "daim", "tabac"];

static FRESH_AQUATIC: &[&str] = &[
    "notes_marines",
    "sel_marin",
    "notes_aquatiques",
    "menthe",
    "aldehydes",
    "bergamote",
    "citron",
    "citron_vert",
    "pamplemousse",
    "yuzu",
    "mandarine",
    "the_vert",
    "basilic",
    "lavande",
];

// ═══════════════════════════════════════════════════════════════════════════════
// ÍNDICES
// ═══════════════════════════════════════════════════════════════════════════════

type NoteIndex = HashMap<&'static str, &'static Note>;

static TOP_INDEX: Lazy<NoteIndex> = Lazy::new(|| build_index(TOP_NOTES));
static HEART_INDEX: Lazy<NoteIndex> = Lazy::new(|| build_index(HEART_NOTES));
static BASE_INDEX: Lazy<NoteIndex> = Lazy::new(|| build_index(BASE_NOTES));

fn build_index(notes: &'static [Note]) -> NoteIndex {
    notes.iter().map(|note| (note.id, note)).collect()
}

impl Tier {
    /// Vocabulário da camada, em ordem de catálogo
    pub fn notes(self) -> &'static [Note] {
        match self {
            Tier::Top => TOP_NOTES,
            Tier::Heart => HEART_NOTES,
            Tier::Base => BASE_NOTES,
        }
    }

    /// Identificadores válidos para a camada
    pub fn note_ids(self) -> impl Iterator<Item = &'static str> {
        self.notes().iter().map(|note| note.id)
    }

    /// Busca exata por identificador
    pub fn lookup(self, id: &str) -> Option<&'static Note> {
        self.index().get(id).copied()
    }

    pub fn contains(self, id: &str) -> bool {
        self.index().contains_key(id)
    }

    /// Busca para a interface de seleção de notas
    ///
    /// Casa substring (sem diferenciar maiúsculas) no identificador ou no
    /// rótulo. Consulta vazia retorna o vocabulário inteiro.
    pub fn search(self, query: &str) -> Vec<&'static Note> {
        let query = query.trim().to_lowercase();
        self.notes()
            .iter()
            .filter(|note| {
                query.is_empty()
                    || note.id.contains(query.as_str())
                    || note.label.to_lowercase().contains(query.as_str())
            })
            .collect()
    }

    fn index(self) -> &'static NoteIndex {
        match self {
            Tier::Top => &*TOP_INDEX,
            Tier::Heart => &*HEART_INDEX,
            Tier::Base => &*BASE_INDEX,
        }
    }
}

impl Family {
    /// Notas que qualificam a família
    pub fn qualifying_notes(&self) -> &'static [&'static str] {
        match self {
            Family::Floral => FLORAL,
            Family::Woody => WOODY,
            Family::Gourmand => GOURMAND,
            Family::Oriental => ORIENTAL,
            Family::Spicy => SPICY,
            Family::Leather => LEATHER,
            Family::FreshAquatic => FRESH_AQUATIC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabularies_have_unique_ids() {
        for tier in Tier::ALL {
            let ids: HashSet<&str> = tier.note_ids().collect();
            assert_eq!(ids.len(), tier.notes().len(), "duplicate id in {tier}");
        }
    }

    #[test]
    fn test_qualifying_notes_exist_in_some_vocabulary() {
        for family in Family::ALL {
            for id in family.qualifying_notes() {
                assert!(
                    Tier::ALL.iter().any(|tier| tier.contains(id)),
                    "{id} qualifies {family} but is in no vocabulary"
                );
            }
        }
    }

    #[test]
    fn test_lookup() {
        let note = Tier::Base.lookup("bois_santal").unwrap();
        assert_eq!(note.label, "Bois de santal");

        assert!(Tier::Top.lookup("bois_santal").is_none());
        assert!(Tier::Heart.contains("cuir"));
        assert!(Tier::Base.contains("cuir"));
    }

    #[test]
    fn test_search() {
        let roses = Tier::Heart.search("rose");
        assert_eq!(roses.len(), 2);

        let by_label = Tier::Base.search("SANTAL");
        assert_eq!(by_label[0].id, "bois_santal");

        assert_eq!(Tier::Top.search("  ").len(), Tier::Top.notes().len());
        assert!(Tier::Top.search("licorne").is_empty());
    }
}
