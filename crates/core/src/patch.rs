//! Explicit presence tracking for partial updates.
//!
//! A JSON merge-patch body distinguishes three states per field: omitted,
//! `null`, and a value. [`Patch<T>`] records whether the key was present at
//! all; nullability is expressed by the inner type, so a nullable column is
//! `Patch<Option<T>>` and `{"description": null}` becomes
//! `Patch::Present(None)`.
//!
//! Fields must be annotated with `#[serde(default)]` so omitted keys
//! deserialize to [`Patch::Absent`].

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was not in the request; keep the stored value.
    Absent,
    /// The key was in the request; overwrite with this value.
    Present(T),
}

impl<T> Patch<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Patch::Present(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Patch::Present(value) => Some(value),
            Patch::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Present(value) => Some(value),
            Patch::Absent => None,
        }
    }

    /// Return the patched value, or `current` when the field was absent.
    pub fn unwrap_or(self, current: T) -> T {
        self.into_option().unwrap_or(current)
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Present)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        color: Patch<String>,
        #[serde(default)]
        note: Patch<Option<String>>,
    }

    #[test]
    fn omitted_keys_are_absent() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.color, Patch::Absent);
        assert_eq!(body.note, Patch::Absent);
    }

    #[test]
    fn present_values_are_captured() {
        let body: Body = serde_json::from_str(r#"{"color": "Red", "note": "dent"}"#).unwrap();
        assert_eq!(body.color, Patch::Present("Red".to_string()));
        assert_eq!(body.note, Patch::Present(Some("dent".to_string())));
    }

    #[test]
    fn explicit_null_clears_nullable_field() {
        let body: Body = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(body.note, Patch::Present(None));
        assert!(!body.color.is_present());
    }

    #[test]
    fn null_for_required_field_is_rejected() {
        assert!(serde_json::from_str::<Body>(r#"{"color": null}"#).is_err());
    }

    #[test]
    fn unwrap_or_keeps_current_when_absent() {
        assert_eq!(Patch::<i32>::Absent.unwrap_or(2020), 2020);
        assert_eq!(Patch::Present(2024).unwrap_or(2020), 2024);
    }
}
