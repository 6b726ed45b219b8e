use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical skill identifier.
///
/// Raw names coming from clients (`"Data-Structures-Algorithms"`, `"ml"`,
/// `" Coding "`) are folded into one of these variants by [`Skill::normalize`].
/// Names outside the alias table are kept as [`Skill::Other`] so new skills can
/// exist without code changes; they simply have no bundled prompt.
///
/// Serializes as its canonical string (`"dsa"`, `"system-design"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Skill {
    Dsa,
    Behavioral,
    Sales,
    Presentation,
    DataScience,
    Programming,
    Devops,
    SystemDesign,
    Negotiation,
    /// Fallback for empty or missing skill names.
    #[default]
    General,
    /// Open-world identifier: lowercased, trimmed, not in the alias table.
    Other(String),
}

/// Alias → canonical skill. Keys are lowercase.
static ALIASES: &[(&str, Skill)] = &[
    ("dsa", Skill::Dsa),
    ("data-structures", Skill::Dsa),
    ("algorithms", Skill::Dsa),
    ("data-structures-algorithms", Skill::Dsa),
    ("behavioral", Skill::Behavioral),
    ("behavioral-interview", Skill::Behavioral),
    ("behavior", Skill::Behavioral),
    ("sales", Skill::Sales),
    ("selling", Skill::Sales),
    ("business-development", Skill::Sales),
    ("presentation", Skill::Presentation),
    ("presentations", Skill::Presentation),
    ("public-speaking", Skill::Presentation),
    ("data-science", Skill::DataScience),
    ("datascience", Skill::DataScience),
    ("machine-learning", Skill::DataScience),
    ("ml", Skill::DataScience),
    ("programming", Skill::Programming),
    ("coding", Skill::Programming),
    ("software-development", Skill::Programming),
    ("development", Skill::Programming),
    ("devops", Skill::Devops),
    ("dev-ops", Skill::Devops),
    ("infrastructure", Skill::Devops),
    ("system-design", Skill::SystemDesign),
    ("systems-design", Skill::SystemDesign),
    ("architecture", Skill::SystemDesign),
    ("distributed-systems", Skill::SystemDesign),
    ("negotiation", Skill::Negotiation),
    ("negotiating", Skill::Negotiation),
    ("conflict-resolution", Skill::Negotiation),
];

impl Skill {
    /// Every named (non-`Other`) skill, in declaration order.
    pub const KNOWN: [Skill; 10] = [
        Skill::Dsa,
        Skill::Behavioral,
        Skill::Sales,
        Skill::Presentation,
        Skill::DataScience,
        Skill::Programming,
        Skill::Devops,
        Skill::SystemDesign,
        Skill::Negotiation,
        Skill::General,
    ];

    /// Fold a raw skill name into its canonical identifier.
    ///
    /// Case-insensitive and whitespace-trimmed. Empty input maps to
    /// [`Skill::General`]; anything not in the alias table passes through
    /// as [`Skill::Other`].
    pub fn normalize(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Skill::General;
        }

        if let Some((_, skill)) = ALIASES.iter().find(|(alias, _)| *alias == normalized) {
            return skill.clone();
        }

        match normalized.as_str() {
            "general" => Skill::General,
            _ => Skill::Other(normalized),
        }
    }

    /// Normalize an optional raw name; `None` is treated like an empty name.
    pub fn normalize_opt(raw: Option<&str>) -> Self {
        raw.map(Self::normalize).unwrap_or(Skill::General)
    }

    /// Canonical string form, also used as the prompt file stem.
    pub fn as_str(&self) -> &str {
        match self {
            Skill::Dsa => "dsa",
            Skill::Behavioral => "behavioral",
            Skill::Sales => "sales",
            Skill::Presentation => "presentation",
            Skill::DataScience => "data-science",
            Skill::Programming => "programming",
            Skill::Devops => "devops",
            Skill::SystemDesign => "system-design",
            Skill::Negotiation => "negotiation",
            Skill::General => "general",
            Skill::Other(name) => name,
        }
    }

    /// Whether this skill's prompt is specialised for a target programming
    /// language. Exactly one skill needs it today.
    pub fn requires_language(&self) -> bool {
        match self {
            Skill::Dsa => true,
            Skill::Behavioral
            | Skill::Sales
            | Skill::Presentation
            | Skill::DataScience
            | Skill::Programming
            | Skill::Devops
            | Skill::SystemDesign
            | Skill::Negotiation
            | Skill::General
            | Skill::Other(_) => false,
        }
    }

    /// All skills flagged by [`Skill::requires_language`].
    pub fn language_sensitive() -> Vec<Skill> {
        Self::KNOWN
            .iter()
            .filter(|s| s.requires_language())
            .cloned()
            .collect()
    }

    /// Aliases that fold into this skill (empty for `General` and `Other`).
    pub fn aliases(&self) -> Vec<&'static str> {
        ALIASES
            .iter()
            .filter(|(_, skill)| skill == self)
            .map(|(alias, _)| *alias)
            .collect()
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Skill {
    fn from(raw: &str) -> Self {
        Skill::normalize(raw)
    }
}

impl From<String> for Skill {
    fn from(raw: String) -> Self {
        Skill::normalize(&raw)
    }
}

impl From<Skill> for String {
    fn from(skill: Skill) -> Self {
        skill.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_are_fixed_points() {
        for skill in Skill::KNOWN.iter() {
            assert_eq!(&Skill::normalize(skill.as_str()), skill);
        }
    }

    #[test]
    fn empty_and_blank_map_to_general() {
        assert_eq!(Skill::normalize(""), Skill::General);
        assert_eq!(Skill::normalize("   "), Skill::General);
        assert_eq!(Skill::normalize_opt(None), Skill::General);
    }

    #[test]
    fn unknown_passes_through_lowercased() {
        assert_eq!(
            Skill::normalize("  Quantum-Cooking "),
            Skill::Other("quantum-cooking".into())
        );
    }

    #[test]
    fn only_dsa_requires_language() {
        assert_eq!(Skill::language_sensitive(), vec![Skill::Dsa]);
        assert!(!Skill::Other("dsa-ish".into()).requires_language());
    }

    #[test]
    fn serde_uses_canonical_string() {
        let json = serde_json::to_string(&Skill::SystemDesign).unwrap();
        assert_eq!(json, "\"system-design\"");
        let back: Skill = serde_json::from_str("\"architecture\"").unwrap();
        assert_eq!(back, Skill::SystemDesign);
    }

    #[test]
    fn aliases_listed_per_skill() {
        let aliases = Skill::DataScience.aliases();
        assert!(aliases.contains(&"ml"));
        assert!(aliases.contains(&"machine-learning"));
        assert!(Skill::General.aliases().is_empty());
    }
}
