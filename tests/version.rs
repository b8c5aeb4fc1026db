use verange::version::{Version, VersionError, VersionRange};

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

#[test]
fn new_with_wrong_string_returns_invalid_version_format() {
    let err = Version::parse("banana").unwrap_err();

    assert_eq!(err, VersionError::InvalidVersionFormat("banana".to_string()));
    assert_eq!(err.to_string(), "Invalid version string 'banana'");
}

#[test]
fn version_from_another_instance_renders_same_string() {
    let version = v("4.78.1.2");
    let another = Version::from_version(&version);

    assert_eq!(another.to_string(), "4.78.1.2");
    assert_eq!(another, version);
}

#[test]
fn versions_sort_by_padded_canonical_components() {
    let mut versions: Vec<Version> = ["2.35", "1.0.4", "1.3", "1.2.3.0", "", "1.2.0.3"]
        .into_iter()
        .map(v)
        .collect();
    versions.sort();

    let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["", "1.0.4", "1.2.0.3", "1.2.3", "1.3", "2.35"]);
}

#[test]
fn range_accepts_versions_and_strings_interchangeably() {
    let from_strings = VersionRange::new("1.2.3", "1.3.6").unwrap();
    let from_versions = VersionRange::new(v("1.2.3"), &v("1.3.6")).unwrap();

    assert_eq!(from_strings, from_versions);
    assert!(from_versions.contains("1.3").unwrap());
    assert!(from_versions.contains(v("1.3")).unwrap());
}

#[test]
fn range_with_equal_bounds_is_empty() {
    let range = VersionRange::new("1.2.3", "1.2.3").unwrap();

    assert!(range.is_empty());
    assert!(!range.contains("1.2.3").unwrap());
    assert!(range.to_vec().is_empty());
}

#[test]
fn range_generates_all_versions_within_range() {
    let range = VersionRange::new("1.1.0", "1.2.2").unwrap();

    assert_eq!(
        range.to_vec(),
        vec![
            "1.1", "1.1.1", "1.1.2", "1.1.3", "1.1.4", "1.1.5", "1.1.6", "1.1.7", "1.1.8", "1.1.9",
            "1.2", "1.2.1",
        ]
    );
}

#[test]
fn range_correctly_increments_versions() {
    assert_eq!(
        VersionRange::new("0.1.9", "0.2").unwrap().to_vec(),
        vec!["0.1.9"]
    );
    assert_eq!(
        VersionRange::new("0.9.9", "1").unwrap().to_vec(),
        vec!["0.9.9"]
    );
}

#[test]
fn range_built_from_version_copy_loses_literal_depth() {
    let lower = v("1.1.0");

    let from_copy = VersionRange::new(&lower, "1.2").unwrap();
    let from_string = VersionRange::new("1.1.0", "1.2").unwrap();

    assert_eq!(from_copy.to_vec(), vec!["1.1"]);
    assert_eq!(from_string.to_vec().len(), 10);
    assert_eq!(from_string.to_vec().last().map(String::as_str), Some("1.1.9"));
}
