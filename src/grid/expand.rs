//! Cartesian-product expansion of multi-valued hyperparameters.
//!
//! Any flattened key holding a list of two or more values is a grid axis.
//! Values keep their YAML kind through the product, so booleans come back
//! as booleans and numbers as numbers in every variant.

use crate::config::{Hparams, flatten, merge_overrides, unflatten};
use crate::error::{Error, Result};
use serde_yaml::Value;

/// Separator joining the values of an excluded multi-valued key.
pub const EXCLUDED_JOIN_SEPARATOR: char = '+';

/// One fully-resolved point of the hyperparameter grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentVariant {
    /// Fully-populated configuration for this grid point.
    pub hparams: Hparams,

    /// Identifier built from the varying hyperparameter values, empty when
    /// the grid has a single point.
    pub label: String,
}

/// Expand a raw override tree into one [`ExperimentVariant`] per point of
/// the grid, merging each combination over the defaults.
///
/// Returns the variants together with the dotted paths of the grid axes,
/// in flattened key order. A tree without multi-valued keys yields exactly
/// one variant and an empty axis list.
pub fn expand(
    config: &Value,
    excluded_keys: &[String],
) -> Result<(Vec<ExperimentVariant>, Vec<String>)> {
    let (combos, hyper_params) = expand_values(config, excluded_keys)?;
    let mut variants = Vec::with_capacity(combos.len());
    for (tree, label) in combos {
        variants.push(ExperimentVariant {
            hparams: merge_overrides(&tree)?,
            label,
        });
    }
    Ok((variants, hyper_params))
}

/// Schema-free expansion: one `(nested tree, label)` pair per combination,
/// plus the axis key list.
///
/// Keys named in `excluded_keys` never become axes; their list values are
/// collapsed into a single [`EXCLUDED_JOIN_SEPARATOR`]-joined string that
/// appears verbatim in every combination. An excluded key absent from the
/// flattened tree is an error, as is an empty candidate list.
pub fn expand_values(
    config: &Value,
    excluded_keys: &[String],
) -> Result<(Vec<(Value, String)>, Vec<String>)> {
    let flat = flatten(config)?;

    for key in excluded_keys {
        if !flat.iter().any(|(path, _)| path == key) {
            return Err(Error::ExcludedKeyNotFound { path: key.clone() });
        }
    }

    // Every key becomes an axis; fixed keys just have a single candidate.
    let mut axes: Vec<(String, Vec<Value>)> = Vec::with_capacity(flat.len());
    let mut hyper_params = Vec::new();
    for (path, value) in flat {
        let candidates = match value {
            Value::Sequence(items) if excluded_keys.contains(&path) => {
                vec![Value::String(join_excluded(&items))]
            }
            Value::Sequence(items) => {
                if items.is_empty() {
                    return Err(Error::EmptyValueList { path });
                }
                if items.len() > 1 {
                    hyper_params.push(path.clone());
                }
                items
            }
            scalar => vec![scalar],
        };
        axes.push((path, candidates));
    }

    let mut combos = Vec::new();
    expand_axes(&axes, 0, Vec::new(), &mut combos);

    let expanded = combos
        .into_iter()
        .map(|combo| {
            let label = variant_label(&combo, &hyper_params);
            (unflatten(combo), label)
        })
        .collect();
    Ok((expanded, hyper_params))
}

fn expand_axes(
    axes: &[(String, Vec<Value>)],
    idx: usize,
    current: Vec<(String, Value)>,
    out: &mut Vec<Vec<(String, Value)>>,
) {
    if idx == axes.len() {
        out.push(current);
        return;
    }
    let (key, candidates) = &axes[idx];
    for value in candidates {
        let mut next = current.clone();
        next.push((key.clone(), value.clone()));
        expand_axes(axes, idx + 1, next, out);
    }
}

/// Label fragment order matches the axis order, so labels are comparable
/// across variants of one expansion.
fn variant_label(combo: &[(String, Value)], hyper_params: &[String]) -> String {
    let mut label = String::new();
    for axis in hyper_params {
        if let Some((_, value)) = combo.iter().find(|(path, _)| path == axis) {
            label.push_str(&axis.to_lowercase().replace('_', ""));
            label.push('-');
            label.push_str(&scalar_repr(value));
        }
    }
    label
}

fn join_excluded(items: &[Value]) -> String {
    let parts: Vec<String> = items.iter().map(scalar_repr).collect();
    parts.join(&EXCLUDED_JOIN_SEPARATOR.to_string())
}

fn scalar_repr(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Sequence(items) => {
            let parts: Vec<String> = items.iter().map(scalar_repr).collect();
            parts.join(",")
        }
        Value::Mapping(_) => String::new(),
        Value::Tagged(tagged) => scalar_repr(&tagged.value),
    }
}
