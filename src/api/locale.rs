use serde::{Deserialize, Serialize};

/// Site language. Every user-facing string goes through [`Locale::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    RenderFailed,
    TryAgain,
    ShowDetails,
    NoData,
}

impl Locale {
    #[must_use]
    pub fn text(self, key: MessageKey) -> &'static str {
        match self {
            Self::En => english(key),
            Self::Pt => portuguese(key),
        }
    }

    /// Parses a BCP 47 tag by its primary subtag (`pt-BR` -> `Pt`).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::RenderFailed => "Something went wrong while loading this section.",
        MessageKey::TryAgain => "Try again",
        MessageKey::ShowDetails => "Show details",
        MessageKey::NoData => "No data available",
    }
}

fn portuguese(key: MessageKey) -> &'static str {
    match key {
        MessageKey::RenderFailed => "Algo deu errado ao carregar esta seção.",
        MessageKey::TryAgain => "Tentar novamente",
        MessageKey::ShowDetails => "Mostrar detalhes",
        MessageKey::NoData => "Nenhum dado disponível",
    }
}

#[cfg(test)]
mod tests {
    use super::{Locale, MessageKey};

    #[test]
    fn each_locale_has_its_own_dictionary() {
        assert_eq!(Locale::En.text(MessageKey::TryAgain), "Try again");
        assert_eq!(Locale::Pt.text(MessageKey::TryAgain), "Tentar novamente");
    }

    #[test]
    fn tags_resolve_by_primary_subtag() {
        assert_eq!(Locale::from_tag("pt-BR"), Some(Locale::Pt));
        assert_eq!(Locale::from_tag("EN_us"), Some(Locale::En));
        assert_eq!(Locale::from_tag("de"), None);
    }
}
