//! # parfum-olfactory — Classificação olfativa
//!
//! Deriva as famílias olfativas de um perfume a partir das suas notas de
//! tête, cœur e fond, e expõe os vocabulários de notas usados pela vitrine e
//! pelo back-office.
//!
//! ## Famílias
//!
//! | Família | Rótulo | Notas típicas |
//! |:--------|:-------|:--------------|
//! | Floral | Floral | rose, jasmin, iris |
//! | Woody | Boisé | santal, cèdre, vétiver |
//! | Gourmand | Gourmand | vanille, caramel, miel |
//! | Oriental | Oriental | ambre, encens, myrrhe, oud |
//! | Spicy | Épicé | poivre, cannelle, safran |
//! | Leather | Cuir | cuir, daim, tabac |
//! | FreshAquatic | Frais/Aquatique | notes marines, menthe, aldéhydes |
//!
//! ## Exemplo
//!
//! ```
//! use parfum_olfactory::{NoteCollection, Tier, note_label};
//!
//! let mut notes = NoteCollection::new();
//! notes.insert(Tier::Heart, "rose_mai");
//! notes.insert(Tier::Base, "oud");
//!
//! assert_eq!(notes.families().labels(), vec!["Floral", "Oriental"]);
//! assert_eq!(note_label(Tier::Base, "special_blend_42"), "Special Blend 42");
//! ```

pub mod catalog;
pub mod classifier;
pub mod collection;
pub mod error;
pub mod label;
pub mod types;
pub mod vocabulary;

pub use catalog::{Catalog, Product};
pub use classifier::{classify, explain, families_of, FamilyMatch, MatchedNote};
pub use collection::NoteCollection;
pub use error::{OlfactoryError, OlfactoryResult};
pub use label::{note_label, title_case_slug};
pub use types::{Family, FamilyIter, FamilySet, Note, NoteId, Tier};
