//! Backing-field name derivation.

/// Derive the backing-field name of a property with the default `_` prefix.
///
/// `_` + lower-case(first character) + the rest unchanged:
///
/// | property | field    |
/// |----------|----------|
/// | `Age`    | `_age`   |
/// | `ID`     | `_iD`    |
/// | `X`      | `_x`     |
/// | `Élan`   | `_élan`  |
/// | `@Class` | `_class` |
///
/// Lower-casing uses [`char::to_lowercase`], so a first character whose
/// lower-case form is several characters contributes all of them. A leading
/// `@` (verbatim identifier marker) is dropped first.
pub fn backing_field_name(property: &str) -> String {
    derive_field_name("_", property)
}

pub(crate) fn derive_field_name(prefix: &str, property: &str) -> String {
    let property = property.strip_prefix('@').unwrap_or(property);
    let mut chars = property.chars();
    let mut name = String::with_capacity(prefix.len() + property.len() + 2);
    name.push_str(prefix);
    if let Some(first) = chars.next() {
        name.extend(first.to_lowercase());
        name.push_str(chars.as_str());
    }
    name
}
