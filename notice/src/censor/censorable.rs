//! Traversal layer: types that contain censorable text.
//!
//! - [`Censorable`]: walked by a [`CensorPolicy`], rewritten in place
//! - [`Censor`]: user-facing `.censor()` with the default word list
//!
//! ## Field Handling
//!
//! `#[derive(Censor)]` generates a `Censorable` impl per type:
//!
//! | Annotation | Generated Code | Behavior |
//! |------------|----------------|----------|
//! | None | nothing | Field untouched (external types work) |
//! | `#[censor]` | `Censorable::censor_with` | Field rewritten in place |
//!
//! ## Container Implementations
//!
//! `Option`, `Vec`, slices, arrays, `Box` and maps forward to their contents.
//! Map keys are never rewritten: changing a key could merge two entries.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

use super::policy::CensorPolicy;

/// A value that can have forbidden words masked in place.
///
/// Implemented by `String` and `Cow<str>` (the leaves), by the std containers
/// wrapping them, and by every type deriving `Censor`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be censored",
    label = "this type has no `Censorable` implementation",
    note = "use `#[derive(Censor)]` on the type definition",
    note = "or remove `#[censor]` from the field to leave it untouched"
)]
pub trait Censorable {
    /// Masks every word of `policy` found in `self`.
    fn censor_with(&mut self, policy: &CensorPolicy);
}

/// Public entrypoint for censoring with the default word list.
///
/// Blanket-implemented for all [`Censorable`] types.
pub trait Censor: Censorable {
    /// Masks `dang`, `shoot` and `heck` in place.
    fn censor(&mut self) {
        self.censor_with(&CensorPolicy::default());
    }
}

impl<T> Censor for T where T: Censorable + ?Sized {}

/// Masks the default forbidden words in `message`.
///
/// The caller's string is rewritten: after the call it holds the censored text.
///
/// ```rust
/// let mut message = String::from("dang them to heck");
/// notice::remove_profanity(&mut message);
/// assert_eq!(message, "**** them to ****");
/// ```
pub fn remove_profanity(message: &mut String) {
    message.censor();
}

impl Censorable for String {
    fn censor_with(&mut self, policy: &CensorPolicy) {
        policy.apply_in_place(self);
    }
}

impl Censorable for Cow<'_, str> {
    fn censor_with(&mut self, policy: &CensorPolicy) {
        if !policy.is_clean(self) {
            *self = Cow::Owned(policy.apply_to(self));
        }
    }
}

impl<T> Censorable for Option<T>
where
    T: Censorable,
{
    fn censor_with(&mut self, policy: &CensorPolicy) {
        if let Some(value) = self {
            value.censor_with(policy);
        }
    }
}

impl<T> Censorable for [T]
where
    T: Censorable,
{
    fn censor_with(&mut self, policy: &CensorPolicy) {
        for value in self {
            value.censor_with(policy);
        }
    }
}

impl<T, const N: usize> Censorable for [T; N]
where
    T: Censorable,
{
    fn censor_with(&mut self, policy: &CensorPolicy) {
        self.as_mut_slice().censor_with(policy);
    }
}

impl<T> Censorable for Vec<T>
where
    T: Censorable,
{
    fn censor_with(&mut self, policy: &CensorPolicy) {
        self.as_mut_slice().censor_with(policy);
    }
}

impl<T> Censorable for Box<T>
where
    T: Censorable + ?Sized,
{
    fn censor_with(&mut self, policy: &CensorPolicy) {
        (**self).censor_with(policy);
    }
}

impl<K, V, S> Censorable for HashMap<K, V, S>
where
    V: Censorable,
{
    fn censor_with(&mut self, policy: &CensorPolicy) {
        for value in self.values_mut() {
            value.censor_with(policy);
        }
    }
}

impl<K, V> Censorable for BTreeMap<K, V>
where
    V: Censorable,
{
    fn censor_with(&mut self, policy: &CensorPolicy) {
        for value in self.values_mut() {
            value.censor_with(policy);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        borrow::Cow,
        collections::{BTreeMap, HashMap},
    };

    use super::{remove_profanity, Censor, Censorable};
    use crate::{CensorPolicy, Censor as DeriveCensor};

    #[derive(Debug, DeriveCensor)]
    struct Note {
        #[censor]
        body: String,
        author: String,
    }

    #[test]
    fn remove_profanity_updates_caller_string() {
        let mut message = "well shoot, this is awful".to_string();
        remove_profanity(&mut message);
        assert_eq!(message, "well *****, this is awful");
    }

    #[test]
    fn borrowed_cow_stays_borrowed_when_clean() {
        let mut value: Cow<'static, str> = Cow::Borrowed("nothing to see");
        value.censor();
        assert!(matches!(value, Cow::Borrowed("nothing to see")));
    }

    #[test]
    fn borrowed_cow_becomes_owned_when_censored() {
        let mut value: Cow<'static, str> = Cow::Borrowed("aw heck");
        value.censor();
        match value {
            Cow::Owned(value) => assert_eq!(value, "aw ****"),
            Cow::Borrowed(_) => panic!("censored Cow should be owned"),
        }
    }

    #[test]
    fn option_and_vec_forward_to_contents() {
        let mut values = vec![Some("dang".to_string()), None, Some("fine".to_string())];
        values.censor();
        assert_eq!(
            values,
            vec![Some("****".to_string()), None, Some("fine".to_string())]
        );
    }

    #[test]
    fn arrays_and_boxed_slices_are_walked() {
        let mut array = ["shoot".to_string(), "heck".to_string()];
        array.censor();
        assert_eq!(array, ["*****".to_string(), "****".to_string()]);

        let mut boxed: Box<[String]> = vec!["dang it".to_string()].into_boxed_slice();
        boxed.censor();
        assert_eq!(&*boxed, ["**** it".to_string()].as_slice());
    }

    #[test]
    fn map_keys_are_never_censored() {
        let mut map: HashMap<String, String> = HashMap::new();
        map.insert("heck".to_string(), "heck".to_string());
        map.censor();
        assert_eq!(map["heck"], "****");

        let mut map: BTreeMap<String, Note> = BTreeMap::new();
        map.insert(
            "dang".to_string(),
            Note {
                body: "dang".to_string(),
                author: "dang".to_string(),
            },
        );
        map.censor();
        let note = &map["dang"];
        assert_eq!(note.body, "****");
        assert_eq!(note.author, "dang");
    }

    #[test]
    fn derived_impl_walks_only_marked_fields() {
        let mut note = Note {
            body: "heck no".to_string(),
            author: "heckler".to_string(),
        };
        note.censor_with(&CensorPolicy::default());
        assert_eq!(note.body, "**** no");
        assert_eq!(note.author, "heckler");
    }
}
