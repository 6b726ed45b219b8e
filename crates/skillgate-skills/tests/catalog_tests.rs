#[cfg(test)]
mod tests {
    use skillgate_core::{Skill, SkillgateError};
    use skillgate_skills::*;
    use std::path::Path;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    // ── Directory source ───────────────────────────────────────

    #[test]
    fn test_directory_flat_and_nested_layouts() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "dsa.md", "# DSA\nSolve problems.");
        write(
            dir.path(),
            "system-design/SKILL.md",
            "---\nname: system-design\ndescription: Design systems\n---\n\n# SD\nScale things.",
        );
        write(dir.path(), "notes.txt", "ignored");
        write(dir.path(), "empty-dir/README.md", "no SKILL.md here");

        let prompts = DirectorySource::new(dir.path()).load().unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[&Skill::Dsa], "# DSA\nSolve problems.");
        assert_eq!(prompts[&Skill::SystemDesign], "# SD\nScale things.");
    }

    #[test]
    fn test_directory_file_names_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "Machine-Learning.md", "ML prompt");
        write(dir.path(), "my-custom.md", "custom prompt");

        let prompts = DirectorySource::new(dir.path()).load().unwrap();
        assert_eq!(prompts[&Skill::DataScience], "ML prompt");
        assert_eq!(prompts[&Skill::Other("my-custom".into())], "custom prompt");
    }

    #[test]
    fn test_directory_duplicate_alias_first_sorted_wins() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "algorithms.md", "from algorithms");
        write(dir.path(), "dsa.md", "from dsa");

        let prompts = DirectorySource::new(dir.path()).load().unwrap();
        assert_eq!(prompts[&Skill::Dsa], "from algorithms");
    }

    #[test]
    fn test_directory_skips_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sales.md", "   \n");
        let prompts = DirectorySource::new(dir.path()).load().unwrap();
        assert!(prompts.is_empty());
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let source = DirectorySource::new("/nonexistent/skillgate/prompts");
        let err = source.load().unwrap_err();
        assert!(matches!(err, SkillgateError::CatalogLoad { .. }));
        assert!(err.to_string().contains("/nonexistent/skillgate/prompts"));
    }

    // ── Catalog ────────────────────────────────────────────────

    #[test]
    fn test_catalog_overrides_bundled() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "dsa.md", "local dsa");

        let catalog = PromptCatalog::with_overrides(dir.path());
        assert_eq!(catalog.prompt(&Skill::Dsa).unwrap(), Some("local dsa"));
        // Bundled prompts still fill in the rest
        assert!(catalog.prompt(&Skill::Behavioral).unwrap().is_some());
    }

    #[test]
    fn test_catalog_with_missing_override_dir_fails() {
        let catalog = PromptCatalog::with_overrides(Path::new("/nonexistent/skillgate/prompts"));
        assert!(catalog.load().is_err());
        assert!(catalog.prompt(&Skill::Dsa).is_err());
    }

    #[test]
    fn test_catalog_is_read_only_after_load() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "dsa.md", "version one");

        let catalog = PromptCatalog::new(DirectorySource::new(dir.path()));
        assert_eq!(catalog.prompt(&Skill::Dsa).unwrap(), Some("version one"));

        write(dir.path(), "dsa.md", "version two");
        assert_eq!(catalog.prompt(&Skill::Dsa).unwrap(), Some("version one"));
    }

    #[test]
    fn test_bundled_dsa_with_language() {
        let catalog = PromptCatalog::bundled();
        let prompt = catalog.skill_prompt(&Skill::Dsa, Some("python")).unwrap().unwrap();
        assert!(prompt.contains("PYTHON"));
        assert!(prompt.contains("```python```"));
    }

    // ── Language injection ─────────────────────────────────────

    #[test]
    fn test_injection_contains_title_and_fence_for_known_languages() {
        for (raw, title, tag) in [
            ("cpp", "C++", "cpp"),
            ("c", "C", "c"),
            ("python", "Python", "python"),
            ("java", "Java", "java"),
            ("javascript", "JavaScript", "javascript"),
            ("js", "JavaScript", "javascript"),
        ] {
            let out = inject_language("P", raw, &Skill::Dsa);
            assert!(out.contains(&format!("Respond ONLY in {title}.")), "{raw}");
            assert!(out.contains(&format!("```{tag}```")), "{raw}");
        }
    }

    #[test]
    fn test_injection_unknown_language() {
        let out = inject_language("P", "weird-lang", &Skill::Dsa);
        assert!(out.contains("Weird-lang"));
        assert!(out.contains("```weird-lang```"));
    }
}
