//! Section title translations.

/// Fixed section titles in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLabels {
    pub summary: &'static str,
    pub work_experience: &'static str,
    pub education: &'static str,
    pub certifications: &'static str,
    pub skills: &'static str,
    pub languages: &'static str,
    pub projects: &'static str,
}

const ENGLISH: SectionLabels = SectionLabels {
    summary: "Summary",
    work_experience: "Work Experience",
    education: "Education",
    certifications: "Courses and Certifications",
    skills: "Skills",
    languages: "Languages",
    projects: "Projects",
};

const SPANISH: SectionLabels = SectionLabels {
    summary: "Resumen",
    work_experience: "Experiencia Laboral",
    education: "Educación",
    certifications: "Cursos y Certificaciones",
    skills: "Habilidades",
    languages: "Idiomas",
    projects: "Proyectos",
};

const ITALIAN: SectionLabels = SectionLabels {
    summary: "Profilo",
    work_experience: "Esperienza Lavorativa",
    education: "Formazione",
    certifications: "Corsi e Certificazioni",
    skills: "Competenze",
    languages: "Lingue",
    projects: "Progetti",
};

const FRENCH: SectionLabels = SectionLabels {
    summary: "Profil",
    work_experience: "Expérience Professionnelle",
    education: "Formation",
    certifications: "Cours et Certifications",
    skills: "Compétences",
    languages: "Langues",
    projects: "Projets",
};

const GERMAN: SectionLabels = SectionLabels {
    summary: "Zusammenfassung",
    work_experience: "Berufserfahrung",
    education: "Ausbildung",
    certifications: "Kurse und Zertifizierungen",
    skills: "Kenntnisse",
    languages: "Sprachen",
    projects: "Projekte",
};

const PORTUGUESE: SectionLabels = SectionLabels {
    summary: "Resumo",
    work_experience: "Experiência Profissional",
    education: "Formação",
    certifications: "Cursos e Certificações",
    skills: "Competências",
    languages: "Idiomas",
    projects: "Projetos",
};

/// Language used for section titles and hyphenation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Spanish,
    Italian,
    French,
    German,
    Portuguese,
}

impl Language {
    /// Parse a language name or ISO 639-1 code, ignoring case.
    ///
    /// Region suffixes are ignored, so `"pt-BR"` is Portuguese.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" | "english" => Some(Self::English),
            "es" | "spanish" | "español" | "espanol" => Some(Self::Spanish),
            "it" | "italian" | "italiano" => Some(Self::Italian),
            "fr" | "french" | "français" | "francais" => Some(Self::French),
            "de" | "german" | "deutsch" => Some(Self::German),
            "pt" | "portuguese" | "português" | "portugues" => Some(Self::Portuguese),
            _ => None,
        }
    }

    /// Resolve a document language tag, falling back to English.
    ///
    /// Unknown tags, `"Auto"` and absent tags are not errors.
    #[must_use]
    pub fn resolve(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) => Self::from_tag(tag).unwrap_or_else(|| {
                tracing::debug!(tag, "Unsupported language tag, using English section titles");
                Self::English
            }),
            None => Self::English,
        }
    }

    #[must_use]
    pub fn labels(self) -> &'static SectionLabels {
        match self {
            Self::English => &ENGLISH,
            Self::Spanish => &SPANISH,
            Self::Italian => &ITALIAN,
            Self::French => &FRENCH,
            Self::German => &GERMAN,
            Self::Portuguese => &PORTUGUESE,
        }
    }

    /// Option name for the `babel` package.
    #[must_use]
    pub fn babel_name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
            Self::Italian => "italian",
            Self::French => "french",
            Self::German => "ngerman",
            Self::Portuguese => "portuguese",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_names_and_codes() {
        assert_eq!(Language::from_tag("Spanish"), Some(Language::Spanish));
        assert_eq!(Language::from_tag("es"), Some(Language::Spanish));
        assert_eq!(Language::from_tag(" IT "), Some(Language::Italian));
        assert_eq!(Language::from_tag("pt-BR"), Some(Language::Portuguese));
        assert_eq!(Language::from_tag("de_DE"), Some(Language::German));
        assert_eq!(Language::from_tag("Français"), Some(Language::French));
    }

    #[test]
    fn test_unknown_tag_falls_back_to_english() {
        assert_eq!(Language::from_tag("Klingon"), None);
        assert_eq!(Language::resolve(Some("Klingon")), Language::English);
        assert_eq!(Language::resolve(Some("Auto")), Language::English);
        assert_eq!(Language::resolve(None), Language::English);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::English.labels().certifications, "Courses and Certifications");
        assert_eq!(Language::Spanish.labels().work_experience, "Experiencia Laboral");
        assert_eq!(Language::German.labels().skills, "Kenntnisse");
    }

    #[test]
    fn test_babel_name() {
        assert_eq!(Language::default().babel_name(), "english");
        assert_eq!(Language::German.babel_name(), "ngerman");
    }
}
