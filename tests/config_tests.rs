use std::io::Write;

use tempfile::NamedTempFile;
use tw_merge::{get_default_config, ConfigExtension, MergeConfig, MergeError, TailwindMerge};

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const SMALL_CONFIG: &str = r#"
cache_size: 4
theme:
  spacing:
    - px
    - validator: is_number
class_groups:
  display: [block, inline, flex]
  p:
    - p: [{ theme: spacing }, { validator: is_arbitrary_value }]
  px:
    - px: [{ theme: spacing }]
  py:
    - py: [{ theme: spacing }]
  font-size:
    - text: [{ validator: is_tshirt_size }]
  leading:
    - leading: [none, { validator: is_number }]
conflicting_class_groups:
  p: [px, py]
conflicting_class_group_modifiers:
  font-size: [leading]
order_sensitive_modifiers: [before, after]
"#;

#[test]
fn test_merger_from_yaml_vocabulary() {
    let file = write_temp(".yml", SMALL_CONFIG);
    let config = MergeConfig::from_file(file.path()).unwrap();
    let merger = TailwindMerge::new(config).unwrap();

    assert_eq!(merger.class_map().group_count(), 6);
    assert_eq!(merger.merge("px-2 py-1 p-3"), "p-3");
    assert_eq!(merger.merge("p-3 px-2"), "p-3 px-2");
    assert_eq!(merger.merge("block inline hover:flex"), "inline hover:flex");
    assert_eq!(merger.merge("p-px p-[7px]"), "p-[7px]");
    assert_eq!(merger.merge("leading-5 text-lg/7"), "text-lg/7");
    assert_eq!(merger.merge("leading-5 text-lg"), "leading-5 text-lg");

    // Classes the small vocabulary does not know survive
    assert_eq!(merger.merge("m-2 m-4 bg-red bg-blue"), "m-2 m-4 bg-red bg-blue");
    assert_eq!(merger.merge("before:hover:p-1 hover:before:p-2"), "before:hover:p-1 hover:before:p-2");
}

#[test]
fn test_default_config_survives_json_round_trip() {
    let config = get_default_config();
    let json = serde_json::to_string(&config).unwrap();
    let file = write_temp(".json", &json);

    let reloaded = MergeConfig::from_file(file.path()).unwrap();
    assert_eq!(reloaded.class_groups, config.class_groups);
    assert_eq!(reloaded.theme, config.theme);
    assert_eq!(reloaded.conflicting_class_groups, config.conflicting_class_groups);

    let original = TailwindMerge::new(config).unwrap();
    let reloaded = TailwindMerge::new(reloaded).unwrap();
    for input in ["px-2 py-1 p-3", "text-lg/7 leading-9", "inset-x-1 right-1 inset-1", "mask-t-from-0% mask-t-from-50%"] {
        assert_eq!(reloaded.merge(input), original.merge(input));
    }
}

#[test]
fn test_extension_file_overrides_and_extends() {
    let extension = write_temp(
        ".yaml",
        r#"
separate_important_scope: true
override:
  conflicting_class_groups:
    p: [px]
extend:
  theme:
    spacing: [gutter]
"#,
    );

    let base = MergeConfig::from_file(write_temp(".yaml", SMALL_CONFIG).path()).unwrap();
    let extension = ConfigExtension::from_file(extension.path()).unwrap();
    let merger = TailwindMerge::new(base.clone()).unwrap().extend(&extension).unwrap();

    assert_eq!(merger.merge("px-2 py-1 p-3"), "py-1 p-3");
    assert_eq!(merger.merge("p-2 p-gutter"), "p-gutter");
    assert_eq!(merger.merge("!p-2 p-4"), "!p-2 p-4");

    // The base configuration is left untouched
    assert_eq!(base.conflicting_class_groups["p"], vec!["px", "py"]);
    assert_eq!(TailwindMerge::new(base).unwrap().merge("p-2 p-gutter"), "p-2 p-gutter");
}

#[test]
fn test_unknown_theme_is_reported() {
    let file = write_temp(
        ".yaml",
        r#"
class_groups:
  p:
    - p: [{ theme: spacing }]
"#,
    );
    let config = MergeConfig::from_file(file.path()).unwrap();

    match TailwindMerge::new(config) {
        Err(MergeError::UnknownTheme { group, theme }) => {
            assert_eq!(group, "p");
            assert_eq!(theme, "spacing");
        }
        other => panic!("Expected an unknown theme error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_theme_cycle_is_reported() {
    let file = write_temp(
        ".yaml",
        r#"
theme:
  spacing: [px, { theme: gaps }]
  gaps: [{ theme: spacing }]
class_groups:
  p:
    - p: [{ theme: spacing }]
"#,
    );
    let config = MergeConfig::from_file(file.path()).unwrap();

    let error = TailwindMerge::new(config).unwrap_err();
    assert!(matches!(error, MergeError::ThemeCycle(_)), "unexpected error: {}", error);
}

#[test]
fn test_invalid_files() {
    let malformed = write_temp(".json", "{ not json");
    let error = MergeConfig::from_file(malformed.path()).unwrap_err();
    assert!(error.to_string().contains("Failed to parse JSON config"));

    let wrong_type = write_temp(".yaml", "cache_size: lots\n");
    assert!(MergeConfig::from_file(wrong_type.path()).is_err());

    let bad_separator = write_temp(".yaml", "separator: '-'\n");
    let config = MergeConfig::from_file(bad_separator.path()).unwrap();
    assert!(matches!(TailwindMerge::new(config), Err(MergeError::ConfigError { .. })));
}
