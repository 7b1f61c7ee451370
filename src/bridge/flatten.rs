//! Flattening of grouped attributes into prefixed key-value pairs

use crate::core::{Field, FieldValue};

/// Separator between group names and attribute keys.
pub const GROUP_SEPARATOR: &str = ".";

/// Qualify `name` with `prefix`. An empty prefix adds no separator.
pub fn add_group_prefix(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        let mut key = String::with_capacity(prefix.len() + GROUP_SEPARATOR.len() + name.len());
        key.push_str(prefix);
        key.push_str(GROUP_SEPARATOR);
        key.push_str(name);
        key
    }
}

/// Append the flattened form of `attrs` to `out`, in order.
///
/// Attributes with an empty key are dropped, except group values, whose
/// members are inlined under the current prefix. Group values with a key
/// extend the prefix for their members.
pub fn flatten_into<'a, I>(out: &mut Vec<Field>, prefix: &str, attrs: I)
where
    I: IntoIterator<Item = &'a Field>,
{
    for attr in attrs {
        match &attr.value {
            FieldValue::Group(members) if attr.key.is_empty() => {
                flatten_into(out, prefix, members);
            }
            FieldValue::Group(members) => {
                flatten_into(out, &add_group_prefix(prefix, &attr.key), members);
            }
            _ if attr.key.is_empty() => {}
            value => out.push(Field {
                key: add_group_prefix(prefix, &attr.key),
                value: value.clone(),
            }),
        }
    }
}

/// Flattened copy of `attrs`.
pub fn flatten<'a, I>(prefix: &str, attrs: I) -> Vec<Field>
where
    I: IntoIterator<Item = &'a Field>,
{
    let mut out = Vec::new();
    flatten_into(&mut out, prefix, attrs);
    out
}
