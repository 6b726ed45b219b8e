use serde::{Deserialize, Serialize};

/// Display title and code-fence tag for a target programming language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Human-readable name, e.g. "C++".
    pub title: String,
    /// Tag used after the opening triple backticks, e.g. "cpp".
    pub fence_tag: String,
    /// Whether the input matched the known-language table.
    pub known: bool,
}

/// Known languages: input (lowercase) → (title, fence tag).
const KNOWN_LANGUAGES: &[(&str, &str, &str)] = &[
    ("cpp", "C++", "cpp"),
    ("c++", "C++", "cpp"),
    ("c", "C", "c"),
    ("python", "Python", "python"),
    ("py", "Python", "python"),
    ("java", "Java", "java"),
    ("javascript", "JavaScript", "javascript"),
    ("js", "JavaScript", "javascript"),
    ("typescript", "TypeScript", "typescript"),
    ("ts", "TypeScript", "typescript"),
    ("go", "Go", "go"),
    ("golang", "Go", "go"),
    ("rust", "Rust", "rust"),
    ("rs", "Rust", "rust"),
];

impl LanguageProfile {
    /// Resolve a raw language string. Never fails: unknown languages get a
    /// title with the first character upper-cased and the lowercased input as
    /// fence tag (`"text"` if the input is blank).
    pub fn resolve(raw: &str) -> Self {
        let raw = raw.trim();
        let norm = raw.to_lowercase();

        if let Some((_, title, tag)) = KNOWN_LANGUAGES.iter().find(|(key, _, _)| *key == norm) {
            return Self {
                title: (*title).to_string(),
                fence_tag: (*tag).to_string(),
                known: true,
            };
        }

        let mut chars = raw.chars();
        let title = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        let fence_tag = if norm.is_empty() { "text".to_string() } else { norm };

        Self {
            title,
            fence_tag,
            known: false,
        }
    }

    /// Upper-cased title, used in prompt section headings.
    pub fn heading(&self) -> String {
        self.title.to_uppercase()
    }

    /// Titles of every known language, deduplicated, in table order.
    pub fn known_titles() -> Vec<&'static str> {
        let mut titles: Vec<&'static str> = Vec::new();
        for (_, title, _) in KNOWN_LANGUAGES {
            if !titles.contains(title) {
                titles.push(*title);
            }
        }
        titles
    }
}
