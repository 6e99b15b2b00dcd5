use super::*;

#[test]
fn extension_rules_map_to_expected_categories() {
    let cases: &[(&str, &str, Category)] = &[
        (".conf", "app.conf", Category::Configuration),
        (".yaml", "deploy.yaml", Category::Configuration),
        (".json", "package.json", Category::Configuration),
        (".md", "notes.md", Category::Documentation),
        (".pdf", "manual.pdf", Category::Documentation),
        (".sh", "backup.sh", Category::Script),
        (".ps1", "install.ps1", Category::Script),
        (".py", "app.py", Category::SourceCode),
        (".go", "main.go", Category::SourceCode),
        (".log", "system.log", Category::Log),
        (".sql", "schema.sql", Category::Database),
        (".sqlite", "cache.sqlite", Category::Database),
        (".tf", "main.tf", Category::Infrastructure),
        (".tfvars", "prod.tfvars", Category::Infrastructure),
        (".xyz", "mystery.xyz", Category::Other),
        ("", "somebinary", Category::Other),
    ];

    for (ext, name, expected) in cases {
        let got = categorize(ext, name);
        assert_eq!(
            got, *expected,
            "categorize({ext:?}, {name:?}) should be {expected:?}, got {got:?}"
        );
    }
}

#[test]
fn extension_rules_are_checked_before_name_rules() {
    // ".json" wins before the name-contains-"log" rule is ever reached.
    assert_eq!(categorize(".json", "app.log.json"), Category::Configuration);

    // ".txt" wins before the log rule.
    assert_eq!(categorize(".txt", "server.log.txt"), Category::Documentation);

    // ".yml" wins before the name-contains-"docker" rule.
    assert_eq!(
        categorize(".yml", "docker-compose.yml"),
        Category::Configuration
    );

    // ".sh" wins even for a name that mentions docker.
    assert_eq!(categorize(".sh", "docker-entrypoint.sh"), Category::Script);
}

#[test]
fn name_rules_apply_when_no_extension_rule_matched() {
    // No extension: the name-contains checks decide.
    assert_eq!(categorize("", "Dockerfile"), Category::Container);
    assert_eq!(categorize("", "changelog"), Category::Log);

    // The log rule sits above the docker rule.
    assert_eq!(categorize("", "docker.log.d"), Category::Log);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(categorize(".MD", "NOTES.MD"), Category::Documentation);
    assert_eq!(categorize("", "DOCKERFILE"), Category::Container);
}

#[test]
fn categorize_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(categorize(".py", "app.py"), Category::SourceCode);
        assert_eq!(categorize("", "Dockerfile"), Category::Container);
    }
}

#[test]
fn labels_render_as_kebab_case() {
    assert_eq!(Category::SourceCode.as_str(), "source-code");
    assert_eq!(Category::Configuration.as_str(), "configuration");
    assert_eq!(Category::Other.to_string(), "other");
}
