//! Metadata stripping for generic resource documents

use serde_yaml::{Mapping, Value};

/// Paths removed from every non-Secret `-o yaml` document.
///
/// `metadata.uid` as a single top-level key never occurs in kubectl output;
/// it is kept to match the historical field list.
pub const STRIPPED_PATHS: &[&[&str]] = &[
    &["metadata", "creationTimestamp"],
    &["metadata", "uid"],
    &["metadata.uid"],
    &["status"],
];

/// Remove the value at `path`, returning it if it was present
///
/// Missing intermediate keys or non-mapping parents leave the document untouched.
pub fn remove_path(value: &mut Value, path: &[&str]) -> Option<Value> {
    let (last, parents) = path.split_last()?;

    let mut current = value;
    for key in parents {
        current = current.as_mapping_mut()?.get_mut(*key)?;
    }

    current.as_mapping_mut()?.shift_remove(*last)
}

/// Drop the noisy server-populated fields from a resource document
pub fn strip_metadata(doc: &mut Value) {
    for path in STRIPPED_PATHS {
        if remove_path(doc, path).is_some() {
            tracing::debug!("stripped {}", path.join("."));
        }
    }
}

/// Parse one YAML document for stripping
///
/// The top level must be a mapping; an empty document is treated as an empty mapping.
pub fn parse_document(yaml: &str) -> Result<Value, serde_yaml::Error> {
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        Value::Mapping(m) => Ok(Value::Mapping(m)),
        // Re-run through the Mapping deserializer to get its error message
        _ => serde_yaml::from_str::<Mapping>(yaml).map(Value::Mapping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
        path.iter()
            .try_fold(value, |current, key| current.as_mapping()?.get(*key))
    }

    fn doc(yaml: &str) -> Value {
        parse_document(yaml).unwrap()
    }

    const POD: &str = r#"apiVersion: v1
kind: Pod
metadata:
  name: x
  namespace: default
  creationTimestamp: "2024-01-01"
  uid: 1234
  labels:
    app: web
spec:
  containers:
  - name: web
    image: nginx
status:
  phase: Running
"#;

    #[test]
    fn test_lookup_path() {
        let d = doc(POD);
        assert_eq!(lookup_path(&d, &["metadata", "name"]), Some(&Value::from("x")));
        assert_eq!(lookup_path(&d, &["metadata", "missing"]), None);
        assert_eq!(lookup_path(&d, &["kind", "nested"]), None);
        assert_eq!(lookup_path(&d, &[]), Some(&d));
    }

    #[test]
    fn test_remove_path() {
        let mut d = doc(POD);
        assert_eq!(
            remove_path(&mut d, &["status", "phase"]),
            Some(Value::from("Running"))
        );
        assert_eq!(remove_path(&mut d, &["status", "phase"]), None);
        assert_eq!(remove_path(&mut d, &["spec", "containers", "name"]), None);
        assert_eq!(remove_path(&mut d, &[]), None);
    }

    #[test]
    fn test_strip_metadata_keeps_siblings() {
        let mut d = doc(POD);
        strip_metadata(&mut d);

        let metadata = d["metadata"].as_mapping().unwrap();
        assert!(!metadata.contains_key("creationTimestamp"));
        assert!(!metadata.contains_key("uid"));
        assert_eq!(d["metadata"]["name"], "x");
        assert_eq!(d["metadata"]["namespace"], "default");
        assert_eq!(d["metadata"]["labels"]["app"], "web");
    }

    #[test]
    fn test_strip_status_keeps_top_level() {
        let original = doc(POD);
        let mut d = original.clone();
        strip_metadata(&mut d);

        let top = d.as_mapping().unwrap();
        assert!(!top.contains_key("status"));
        for key in ["apiVersion", "kind", "spec"] {
            assert_eq!(top.get(key), original.get(key));
        }
    }

    #[test]
    fn test_dotted_key_is_removed_literally() {
        let mut d = doc("metadata.uid: abc\nmetadata:\n  name: y\n");
        strip_metadata(&mut d);
        assert!(!d.as_mapping().unwrap().contains_key("metadata.uid"));
        assert_eq!(d["metadata"]["name"], "y");
    }

    #[test]
    fn test_strip_without_metadata() {
        let mut d = doc("kind: List\nitems: []\n");
        strip_metadata(&mut d);
        assert_eq!(d["kind"], "List");
    }

    #[test]
    fn test_nested_fields_untouched() {
        let mut d = doc(
            "kind: Deployment\nspec:\n  template:\n    metadata:\n      creationTimestamp: null\n",
        );
        strip_metadata(&mut d);
        assert!(
            lookup_path(&d, &["spec", "template", "metadata", "creationTimestamp"]).is_some()
        );
    }

    #[test]
    fn test_parse_document_edge_cases() {
        assert_eq!(doc(""), Value::Mapping(Mapping::new()));
        assert!(parse_document("- a\n- b\n").is_err());
        assert!(parse_document("just text").is_err());
        assert!(parse_document("a: 1\n---\nb: 2\n").is_err());
    }
}
