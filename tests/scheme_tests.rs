use plist::{Dictionary, Value};
use schemer::error::SchemeError;
use schemer::scheme::{Color, ColorField, Rule, Scheme};
use uuid::Uuid;

fn base_entry(colors: &[(&str, &str)]) -> Value {
    let mut settings = Dictionary::new();
    for (key, value) in colors {
        settings.insert((*key).to_owned(), Value::String((*value).to_owned()));
    }
    let mut entry = Dictionary::new();
    entry.insert("settings".to_owned(), Value::Dictionary(settings));
    Value::Dictionary(entry)
}

fn rule_entry(name: &str, scope: &str) -> Value {
    let mut entry = Dictionary::new();
    entry.insert("name".to_owned(), Value::String(name.to_owned()));
    entry.insert("scope".to_owned(), Value::String(scope.to_owned()));
    Value::Dictionary(entry)
}

fn root_with(entries: Vec<Value>) -> Dictionary {
    let mut root = Dictionary::new();
    root.insert("settings".to_owned(), Value::Array(entries));
    root
}

#[test]
fn default_palette_is_usable_before_any_file_loads() {
    let scheme = Scheme::new();

    assert_eq!(scheme.viewport_background, Color::BLACK);
    assert_eq!(scheme.viewport_foreground, Color::WHITE);
    assert!(!scheme.gutter_background.is_visible());
    assert!(!scheme.gutter_foreground.is_visible());
    assert!(!scheme.find_highlight_background.is_visible());
    assert!(!scheme.find_highlight_foreground.is_visible());
    assert_eq!(scheme.invisibles_foreground, Color::white(0.75));
    assert_eq!(scheme.line_highlight, Color::BLACK.with_alpha(0.07));
    assert_eq!(scheme.caret_foreground, Color::BLACK);
    assert_eq!(scheme.selection_border, scheme.selection_fill.with_alpha(0.0));
    assert_eq!(
        scheme.inactive_selection_fill,
        scheme.selection_fill.with_alpha(0.5)
    );
    assert!(scheme.rules.is_empty());
}

#[test]
fn missing_settings_array_is_a_structural_error() {
    let err = Scheme::from_plist(&Dictionary::new()).unwrap_err();
    assert!(matches!(err, SchemeError::MissingSettingsArray), "got {err:?}");
}

#[test]
fn settings_array_without_base_entry_fails() {
    let root = root_with(vec![rule_entry("x", "a.b")]);
    let err = Scheme::from_plist(&root).unwrap_err();
    assert!(matches!(err, SchemeError::MissingBaseEntry), "got {err:?}");
}

#[test]
fn entry_with_extra_keys_is_not_a_base_entry() {
    // A dictionary holding `settings` plus anything else is a rule entry.
    let mut entry = Dictionary::new();
    entry.insert("settings".to_owned(), Value::Dictionary(Dictionary::new()));
    entry.insert("author".to_owned(), Value::String("someone".to_owned()));
    let err = Scheme::from_plist(&root_with(vec![Value::Dictionary(entry)])).unwrap_err();
    assert!(matches!(err, SchemeError::MissingBaseEntry), "got {err:?}");
}

#[test]
fn base_colors_override_defaults_and_absent_keys_keep_them() {
    let root = root_with(vec![base_entry(&[
        ("background", "#272822"),
        ("caret", "#f8f8f0"),
    ])]);
    let scheme = Scheme::from_plist(&root).unwrap();

    assert_eq!(scheme.viewport_background, Color::from_hex("#272822").unwrap());
    assert_eq!(scheme.caret_foreground, Color::from_hex("#f8f8f0").unwrap());
    // Untouched field keeps its default.
    assert_eq!(scheme.viewport_foreground, Color::WHITE);
}

#[test]
fn uuid_is_read_from_the_top_level() {
    let mut root = root_with(vec![base_entry(&[])]);
    root.insert(
        "uuid".to_owned(),
        Value::String("D8093D9E-0B4B-4B3A-9C63-B2A9FAF9F5A2".to_owned()),
    );
    let scheme = Scheme::from_plist(&root).unwrap();
    assert_eq!(
        scheme.uuid(),
        Uuid::parse_str("D8093D9E-0B4B-4B3A-9C63-B2A9FAF9F5A2").unwrap()
    );
}

#[test]
fn malformed_uuid_is_tolerated_by_regenerating() {
    let mut root = root_with(vec![base_entry(&[])]);
    root.insert("uuid".to_owned(), Value::String("not-a-uuid".to_owned()));
    let scheme = Scheme::from_plist(&root).unwrap();
    assert!(!scheme.uuid().is_nil());
}

#[test]
fn missing_uuid_generates_a_fresh_one_each_parse() {
    let root = root_with(vec![base_entry(&[])]);
    let first = Scheme::from_plist(&root).unwrap();
    let second = Scheme::from_plist(&root).unwrap();
    assert_ne!(first.uuid(), second.uuid());
}

#[test]
fn rule_order_follows_the_array_even_around_the_base_entry() {
    let root = root_with(vec![
        rule_entry("A", "a"),
        base_entry(&[]),
        rule_entry("B", "b"),
        rule_entry("C", "c"),
    ]);
    let scheme = Scheme::from_plist(&root).unwrap();
    let names: Vec<&str> = scheme.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn non_dictionary_entries_are_ignored() {
    let root = root_with(vec![
        Value::String("junk".to_owned()),
        base_entry(&[]),
        rule_entry("A", "a"),
    ]);
    let scheme = Scheme::from_plist(&root).unwrap();
    assert_eq!(scheme.rules.len(), 1);
}

#[test]
fn duplicate_copies_colors_and_rules_with_a_new_identity() {
    let mut scheme = Scheme::new();
    scheme.viewport_background = Color::from_hex("#101010").unwrap();
    scheme.rules.push(Rule::default());

    let copy = scheme.duplicate(None);
    assert_ne!(copy.uuid(), scheme.uuid());
    assert_eq!(copy.viewport_background, scheme.viewport_background);
    assert_eq!(copy.rules, scheme.rules);
}

#[test]
fn duplicate_honors_a_supplied_uuid() {
    let scheme = Scheme::new();
    let id = Uuid::new_v4();
    assert_eq!(scheme.duplicate(Some(id)).uuid(), id);
}

#[test]
fn copy_colors_carries_no_rules() {
    let mut scheme = Scheme::new();
    scheme.caret_foreground = Color::from_hex("#ff0000").unwrap();
    scheme.rules.push(Rule::default());

    let copy = scheme.copy_colors();
    assert!(copy.rules.is_empty());
    assert_ne!(copy.uuid(), scheme.uuid());
    assert_eq!(copy.caret_foreground, scheme.caret_foreground);
}

#[test]
fn rule_list_operations_check_bounds() {
    let mut scheme = Scheme::new();
    scheme.rules.push(Rule::default());

    // Appending at len is valid.
    assert!(scheme.insert_rule(1, Rule::default()).is_ok());
    assert!(matches!(
        scheme.insert_rule(5, Rule::default()),
        Err(SchemeError::RuleIndexOutOfBounds { index: 5, len: 2 })
    ));
    assert!(matches!(
        scheme.remove_rule(2),
        Err(SchemeError::RuleIndexOutOfBounds { index: 2, len: 2 })
    ));
    assert!(matches!(
        scheme.move_rule(0, 2),
        Err(SchemeError::RuleIndexOutOfBounds { index: 2, len: 2 })
    ));
}

#[test]
fn move_rule_reorders_in_place() {
    let mut scheme = Scheme::new();
    for name in ["A", "B", "C"] {
        let mut rule = Rule::default();
        rule.name = name.to_owned();
        scheme.rules.push(rule);
    }

    scheme.move_rule(0, 2).unwrap();
    let names: Vec<&str> = scheme.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["B", "C", "A"]);
}

#[test]
fn every_color_field_round_trips_through_its_accessors() {
    let mut scheme = Scheme::new();
    let probe = Color::from_hex("#123456").unwrap();
    for field in ColorField::ALL {
        field.set(&mut scheme, probe);
        assert_eq!(field.get(&scheme), probe, "field {field:?}");
    }
}
