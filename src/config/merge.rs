//! Key-by-key override merging against the default schema.
//!
//! Overrides are walked recursively against a serialized copy of the
//! defaults: every override path must already exist in the schema and carry
//! a compatible value kind. The merged tree is deserialized back into
//! [`Hparams`], so the result is always fully populated.

use crate::config::flatten::{join_path, value_kind};
use crate::config::types::Hparams;
use crate::error::{Error, Result};
use serde_yaml::Value;

/// Merge a nested override mapping over a fresh copy of the defaults.
///
/// The input is not mutated; the returned tree is independent of both the
/// defaults and the override source.
pub fn merge_overrides(overrides: &Value) -> Result<Hparams> {
    if !matches!(overrides, Value::Mapping(_)) {
        return Err(Error::NotAMapping {
            found: value_kind(overrides),
        });
    }
    let mut tree =
        serde_yaml::to_value(Hparams::default()).map_err(|e| Error::ConfigSerialize { source: e })?;
    merge_value(&mut tree, overrides, "")?;
    serde_yaml::from_value(tree).map_err(|e| Error::InvalidHparams { source: e })
}

fn merge_value(base: &mut Value, overlay: &Value, path: &str) -> Result<()> {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                let Some(name) = key.as_str() else {
                    return Err(Error::NonStringKey {
                        path: path.to_string(),
                    });
                };
                let child_path = join_path(path, name);
                let Some(slot) = base_map.get_mut(key) else {
                    return Err(Error::UnknownKey { path: child_path });
                };
                merge_value(slot, value, &child_path)?;
            }
            Ok(())
        }
        (base, overlay) => {
            if !kinds_compatible(base, overlay) {
                return Err(Error::TypeMismatch {
                    path: path.to_string(),
                    expected: value_kind(base),
                    found: value_kind(overlay),
                });
            }
            *base = overlay.clone();
            Ok(())
        }
    }
}

/// Leaf compatibility: equal kinds always merge; `null` on either side
/// merges with any scalar or list (optional fields), never with a mapping.
fn kinds_compatible(base: &Value, overlay: &Value) -> bool {
    if matches!(base, Value::Mapping(_)) || matches!(overlay, Value::Mapping(_)) {
        return false;
    }
    matches!(base, Value::Null)
        || matches!(overlay, Value::Null)
        || value_kind(base) == value_kind(overlay)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap_or(Value::Null)
    }

    #[test]
    fn test_merge_overrides_scalar() {
        let merged = merge_overrides(&parse("EXP_NAME: occlusion\nSEED_VALUE: 42\n"));
        let hparams = merged.unwrap_or_default();
        assert_eq!(hparams.exp_name, "occlusion");
        assert_eq!(hparams.seed_value, 42);
        assert_eq!(hparams.method, "spin");
    }

    #[test]
    fn test_merge_overrides_nested_section() {
        let merged = merge_overrides(&parse(
            "DATASET:\n  BATCH_SIZE: 32\nSSPA:\n  SURFACE_LOSS_WEIGHT: 1.0\n",
        ));
        let hparams = merged.unwrap_or_default();
        assert_eq!(hparams.dataset.batch_size, 32);
        assert!((hparams.sspa.surface_loss_weight - 1.0).abs() < f64::EPSILON);
        // untouched siblings keep their defaults
        assert_eq!(hparams.dataset.num_workers, 8);
        assert!((hparams.sspa.keypoint_loss_weight - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_merge_fills_optional_field() {
        let merged = merge_overrides(&parse("TRAINING:\n  RESUME: ckpt/last.ckpt\n"));
        let hparams = merged.unwrap_or_default();
        assert_eq!(
            hparams.training.resume,
            Some(std::path::PathBuf::from("ckpt/last.ckpt"))
        );
    }

    #[test]
    fn test_merge_rejects_unknown_key() {
        let result = merge_overrides(&parse("DATASET:\n  BOGUS: 1\n"));
        assert!(
            matches!(result, Err(Error::UnknownKey { ref path }) if path == "DATASET.BOGUS")
        );
    }

    #[test]
    fn test_merge_rejects_unknown_section() {
        let result = merge_overrides(&parse("RENDERER:\n  MESH: true\n"));
        assert!(matches!(result, Err(Error::UnknownKey { ref path }) if path == "RENDERER"));
    }

    #[test]
    fn test_merge_rejects_kind_mismatch() {
        let result = merge_overrides(&parse("DATASET:\n  BATCH_SIZE: [32, 64]\n"));
        assert!(matches!(
            result,
            Err(Error::TypeMismatch { ref path, expected: "number", found: "list" })
                if path == "DATASET.BATCH_SIZE"
        ));
    }

    #[test]
    fn test_merge_rejects_section_replaced_by_scalar() {
        let result = merge_overrides(&parse("DATASET: 5\n"));
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_merge_rejects_non_mapping_source() {
        let result = merge_overrides(&Value::from(3));
        assert!(matches!(result, Err(Error::NotAMapping { found: "number" })));
    }

    #[test]
    fn test_empty_override_returns_defaults() {
        let merged = merge_overrides(&parse("{}"));
        assert_eq!(merged.unwrap_or_default(), Hparams::default());
    }

    #[test]
    fn test_merge_round_trips_through_flatten() {
        use crate::config::flatten::{flatten, unflatten};

        let overrides = parse("DATASET:\n  TRAIN_DS: coco\nOPTIMIZER:\n  LR: 0.001\n");
        let rebuilt = unflatten(flatten(&overrides).unwrap_or_default());
        assert_eq!(rebuilt, overrides);
        let merged = merge_overrides(&rebuilt).unwrap_or_default();
        assert_eq!(merged.dataset.train_ds, "coco");
    }
}
