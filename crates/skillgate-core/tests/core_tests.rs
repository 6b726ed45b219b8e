#[cfg(test)]
mod tests {
    use skillgate_core::*;

    // ── Skill normalization ────────────────────────────────────

    #[test]
    fn test_alias_equivalence_classes() {
        let classes: &[(&[&str], Skill)] = &[
            (
                &["dsa", "data-structures", "algorithms", "data-structures-algorithms"],
                Skill::Dsa,
            ),
            (&["behavioral", "behavioral-interview", "behavior"], Skill::Behavioral),
            (&["sales", "selling", "business-development"], Skill::Sales),
            (&["presentation", "presentations", "public-speaking"], Skill::Presentation),
            (&["data-science", "datascience", "machine-learning", "ml"], Skill::DataScience),
            (
                &["programming", "coding", "software-development", "development"],
                Skill::Programming,
            ),
            (&["devops", "dev-ops", "infrastructure"], Skill::Devops),
            (
                &["system-design", "systems-design", "architecture", "distributed-systems"],
                Skill::SystemDesign,
            ),
            (&["negotiation", "negotiating", "conflict-resolution"], Skill::Negotiation),
        ];

        for (aliases, expected) in classes {
            for alias in *aliases {
                assert_eq!(&Skill::normalize(alias), expected, "alias {alias}");
            }
        }
    }

    #[test]
    fn test_normalize_is_case_and_whitespace_insensitive() {
        assert_eq!(Skill::normalize("Data-Structures-Algorithms"), Skill::normalize("dsa"));
        assert_eq!(Skill::normalize("  ML\t"), Skill::DataScience);
        assert_eq!(Skill::normalize("BEHAVIOR"), Skill::Behavioral);
    }

    #[test]
    fn test_normalize_default_is_distinct_from_domain_skills() {
        let general = Skill::normalize("");
        assert_eq!(general, Skill::General);
        for skill in Skill::KNOWN.iter().filter(|s| **s != Skill::General) {
            assert_ne!(&general, skill);
        }
    }

    #[test]
    fn test_normalize_open_world() {
        let custom = Skill::normalize("Underwater-Basket-Weaving");
        assert_eq!(custom.as_str(), "underwater-basket-weaving");
        assert_eq!(Skill::normalize(custom.as_str()), custom);
    }

    #[test]
    fn test_skill_display_matches_as_str() {
        assert_eq!(Skill::DataScience.to_string(), "data-science");
        assert_eq!(Skill::Other("x".into()).to_string(), "x");
    }

    // ── Language profiles ──────────────────────────────────────

    #[test]
    fn test_language_profile_known_and_unknown() {
        let cpp = LanguageProfile::resolve("cpp");
        assert_eq!((cpp.title.as_str(), cpp.fence_tag.as_str()), ("C++", "cpp"));

        let weird = LanguageProfile::resolve("weird-lang");
        assert_eq!((weird.title.as_str(), weird.fence_tag.as_str()), ("Weird-lang", "weird-lang"));
    }

    #[test]
    fn test_language_profile_serde() {
        let p = LanguageProfile::resolve("python");
        let json = serde_json::to_string(&p).unwrap();
        let restored: LanguageProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, p);
    }

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_error_catalog_load_display() {
        let err = SkillgateError::catalog("/etc/prompts", "permission denied");
        let s = err.to_string();
        assert!(s.contains("/etc/prompts"));
        assert!(s.contains("permission denied"));
    }

    #[test]
    fn test_error_config_validation() {
        let err = SkillgateError::ConfigValidation {
            field: "request.model".into(),
            reason: "empty".into(),
        };
        assert!(err.to_string().contains("request.model"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SkillgateError = io_err.into();
        assert!(matches!(err, SkillgateError::Io(_)));
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<Skill>("42").unwrap_err();
        let err: SkillgateError = serde_err.into();
        assert!(matches!(err, SkillgateError::Serialization(_)));
    }
}
