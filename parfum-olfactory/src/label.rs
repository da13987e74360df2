//! Resolução de rótulos de notas
//!
//! Toda exibição de nota passa por [`note_label`], garantindo que o mesmo
//! identificador produza sempre o mesmo rótulo.

use std::borrow::Cow;

use crate::types::Tier;

/// Rótulo exibido para uma nota da camada
///
/// Usa o vocabulário da camada; identificadores ausentes recebem o rótulo
/// derivado por [`title_case_slug`].
pub fn note_label(tier: Tier, id: &str) -> Cow<'static, str> {
    match tier.lookup(id) {
        Some(note) => Cow::Borrowed(note.label),
        None => {
            tracing::debug!(%tier, id, "note outside vocabulary, deriving label from slug");
            Cow::Owned(title_case_slug(id))
        }
    }
}

/// Converte slug em título: `"special_blend_42"` → `"Special Blend 42"`
///
/// Separa em `_` e `-`, descarta segmentos vazios, coloca em maiúscula o
/// primeiro caractere de cada segmento e junta com espaços simples.
pub fn title_case_slug(slug: &str) -> String {
    slug.split(|c: char| c == '_' || c == '-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
