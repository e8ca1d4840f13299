//! The manifest compiler.
//!
//! Takes the raw `manifest.json` text plus the resolved build parameters and
//! produces the vendor-correct document: vendor-prefixed keys are collapsed
//! or dropped, missing metadata fields are filled from the project
//! descriptor, and the background-script wiring the vendor needs is spliced
//! in. Every step operates on an owned copy; the caller's input is never
//! mutated, so repeated compilation in watch mode is aliasing-free.

use serde_json::{Map, Value};
use tracing::debug;
use wext_config::Vendor;

use crate::error::{ManifestError, Result};

/// Script name the compatibility shim is exposed under in the output tree.
pub const POLYFILL_SCRIPT: &str = "browser_polyfill.js";

/// Script name of the reload helper entry.
pub const RELOAD_SCRIPT: &str = "auto-reload.js";

/// Parameters bound to one compilation, resolved by the assembler.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CompileParams {
    pub vendor: Vendor,
    pub auto_reload: bool,
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}

/// Compile a raw manifest for one vendor.
///
/// Pure function of its inputs: the same `(raw, params)` pair always yields
/// byte-identical output.
pub fn compile(raw: &str, params: &CompileParams) -> Result<String> {
    let document: Value =
        serde_json::from_str(raw).map_err(|e| ManifestError::Parse(e.to_string()))?;

    let Value::Object(fields) = document else {
        return Err(ManifestError::Parse("manifest root must be an object".to_string()));
    };

    let mut fields = resolve_vendor_keys(fields, params.vendor);
    overlay_metadata(&mut fields, params);
    apply_vendor_edits(&mut fields, params)?;

    debug!(vendor = %params.vendor, "compiled manifest");

    // serde_json maps are sorted, so serialization is deterministic
    serde_json::to_string_pretty(&Value::Object(fields))
        .map_err(|e| ManifestError::Transform(e.to_string()))
}

/// Split a `__<vendor>__<field>` key into its parts, if it is one.
fn split_vendor_key(key: &str) -> Option<(Vendor, &str)> {
    let rest = key.strip_prefix("__")?;
    let sep = rest.find("__")?;
    let (vendor, field) = (&rest[..sep], &rest[sep + 2..]);
    if field.is_empty() {
        return None;
    }
    Vendor::parse(vendor).ok().map(|v| (v, field))
}

/// Collapse `__<vendor>__` prefixed keys for the target vendor and drop the
/// rest, recursively. A vendor-specific key always overrides a plain key of
/// the same name.
fn resolve_vendor_keys(fields: Map<String, Value>, vendor: Vendor) -> Map<String, Value> {
    let mut plain = Map::new();
    let mut matched = Vec::new();

    for (key, value) in fields {
        let value = resolve_value(value, vendor);
        match split_vendor_key(&key) {
            Some((owner, field)) if owner == vendor => {
                matched.push((field.to_string(), value));
            }
            Some(_) => {} // other vendor's key, dropped
            None => {
                plain.insert(key, value);
            }
        }
    }

    for (field, value) in matched {
        plain.insert(field, value);
    }
    plain
}

fn resolve_value(value: Value, vendor: Vendor) -> Value {
    match value {
        Value::Object(map) => Value::Object(resolve_vendor_keys(map, vendor)),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| resolve_value(v, vendor)).collect())
        }
        other => other,
    }
}

/// Fill `name`/`version`/`description` from the project descriptor when the
/// manifest omits them. Values the author wrote are never overwritten.
fn overlay_metadata(fields: &mut Map<String, Value>, params: &CompileParams) {
    if !fields.contains_key("name") {
        fields.insert("name".to_string(), Value::String(params.name.clone()));
    }
    if !fields.contains_key("version") {
        fields.insert("version".to_string(), Value::String(params.version.clone()));
    }
    if !fields.contains_key("description") {
        if let Some(description) = &params.description {
            fields.insert("description".to_string(), Value::String(description.clone()));
        }
    }
}

/// Apply the structural edits the vendor profile asks for.
///
/// Idempotent: compiling an already-compiled manifest adds no duplicate
/// entries. Vendors needing neither edit leave the document untouched - an
/// absent `background` section is only created when an edit needs it.
fn apply_vendor_edits(fields: &mut Map<String, Value>, params: &CompileParams) -> Result<()> {
    let profile = params.vendor.profile();

    if profile.needs_compat_shim {
        let scripts = background_scripts(fields)?;
        if !contains_script(scripts, POLYFILL_SCRIPT) {
            scripts.insert(0, Value::String(POLYFILL_SCRIPT.to_string()));
        }
    }

    if params.auto_reload && profile.supports_auto_reload {
        let scripts = background_scripts(fields)?;
        if !contains_script(scripts, RELOAD_SCRIPT) {
            scripts.push(Value::String(RELOAD_SCRIPT.to_string()));
        }
    }

    Ok(())
}

fn contains_script(scripts: &[Value], name: &str) -> bool {
    scripts.iter().any(|s| s.as_str() == Some(name))
}

/// Fetch `background.scripts`, creating the sections on demand.
///
/// Existing keys of the wrong JSON type fail the transform rather than being
/// clobbered.
fn background_scripts(fields: &mut Map<String, Value>) -> Result<&mut Vec<Value>> {
    let background = fields
        .entry("background".to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(background) = background else {
        return Err(ManifestError::Transform(
            "`background` must be an object".to_string(),
        ));
    };

    let scripts = background
        .entry("scripts".to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    match scripts {
        Value::Array(scripts) => Ok(scripts),
        _ => Err(ManifestError::Transform(
            "`background.scripts` must be an array".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(vendor: Vendor, auto_reload: bool) -> CompileParams {
        CompileParams {
            vendor,
            auto_reload,
            name: "Foo".to_string(),
            version: "1.2.3".to_string(),
            description: Some("An extension".to_string()),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = compile("{not json", &params(Vendor::Firefox, false)).unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn non_object_root_is_a_parse_error() {
        let err = compile("[1, 2]", &params(Vendor::Firefox, false)).unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn fills_missing_metadata_from_params() {
        let out = compile("{}", &params(Vendor::Firefox, false)).unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["name"], "Foo");
        assert_eq!(doc["version"], "1.2.3");
        assert_eq!(doc["description"], "An extension");
    }

    #[test]
    fn manifest_values_win_over_params() {
        let raw = r#"{"version": "9.9.9"}"#;
        let out = compile(raw, &params(Vendor::Firefox, false)).unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["version"], "9.9.9");
    }

    #[test]
    fn vendor_keys_never_leak_across_vendors() {
        let raw = r#"{
            "__firefox__applications": {"gecko": {"id": "foo@bar"}},
            "__chrome__minimum_chrome_version": "50"
        }"#;

        let firefox = compile(raw, &params(Vendor::Firefox, false)).unwrap();
        let doc: Value = serde_json::from_str(&firefox).unwrap();
        assert_eq!(doc["applications"]["gecko"]["id"], "foo@bar");
        assert!(doc.get("minimum_chrome_version").is_none());
        assert!(doc.get("__chrome__minimum_chrome_version").is_none());

        let chrome = compile(raw, &params(Vendor::Chrome, false)).unwrap();
        let doc: Value = serde_json::from_str(&chrome).unwrap();
        assert_eq!(doc["minimum_chrome_version"], "50");
        assert!(doc.get("applications").is_none());
    }

    #[test]
    fn vendor_key_overrides_plain_key() {
        let raw = r#"{"name": "Generic", "__opera__name": "Opera build"}"#;
        let out = compile(raw, &params(Vendor::Opera, false)).unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["name"], "Opera build");
    }

    #[test]
    fn vendor_keys_resolve_in_nested_sections() {
        let raw = r#"{"background": {"__edge__persistent": false, "scripts": ["bg.js"]}}"#;
        let out = compile(raw, &params(Vendor::Edge, false)).unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["background"]["persistent"], false);
    }

    #[test]
    fn shim_vendor_gets_polyfill_prepended() {
        let raw = r#"{"background": {"scripts": ["bg.js"]}}"#;
        let out = compile(raw, &params(Vendor::Chrome, false)).unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        let scripts = doc["background"]["scripts"].as_array().unwrap();
        assert_eq!(scripts[0], POLYFILL_SCRIPT);
        assert_eq!(scripts[1], "bg.js");
    }

    #[test]
    fn compile_is_idempotent_over_its_own_output() {
        let raw = r#"{"background": {"scripts": ["bg.js"]}}"#;
        let p = params(Vendor::Chrome, true);
        let once = compile(raw, &p).unwrap();
        let twice = compile(&once, &p).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn compile_is_a_pure_function() {
        let raw = r#"{"name": "Foo", "background": {"scripts": ["bg.js"]}}"#;
        let p = params(Vendor::Opera, true);
        assert_eq!(compile(raw, &p).unwrap(), compile(raw, &p).unwrap());
    }

    #[test]
    fn auto_reload_is_skipped_for_unsupported_vendor() {
        let raw = r#"{"background": {"scripts": ["bg.js"]}}"#;
        let with = compile(raw, &params(Vendor::Firefox, true)).unwrap();
        let without = compile(raw, &params(Vendor::Firefox, false)).unwrap();
        assert_eq!(with, without);
        assert!(!with.contains(RELOAD_SCRIPT));
    }

    #[test]
    fn auto_reload_appends_helper_for_supported_vendor() {
        let raw = r#"{"background": {"scripts": ["bg.js"]}}"#;
        let out = compile(raw, &params(Vendor::Chrome, true)).unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        let scripts = doc["background"]["scripts"].as_array().unwrap();
        assert_eq!(scripts.last().unwrap(), RELOAD_SCRIPT);
    }

    #[test]
    fn background_section_is_created_on_demand() {
        let out = compile("{}", &params(Vendor::Chrome, false)).unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        let scripts = doc["background"]["scripts"].as_array().unwrap();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0], POLYFILL_SCRIPT);
    }

    #[test]
    fn untouched_vendor_leaves_background_absent() {
        let out = compile("{}", &params(Vendor::Firefox, true)).unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        assert!(doc.get("background").is_none());
    }

    #[test]
    fn wrong_background_type_is_a_transform_error() {
        let raw = r#"{"background": "bg.html"}"#;
        let err = compile(raw, &params(Vendor::Chrome, false)).unwrap_err();
        assert!(matches!(err, ManifestError::Transform(_)));
    }

    #[test]
    fn wrong_scripts_type_is_a_transform_error() {
        let raw = r#"{"background": {"scripts": "bg.js"}}"#;
        let err = compile(raw, &params(Vendor::Opera, true)).unwrap_err();
        assert!(matches!(err, ManifestError::Transform(_)));
    }
}
