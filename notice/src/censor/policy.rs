//! Censor policies for string-like values.
//!
//! Policies are pure string transformations. They do not traverse structures;
//! that is the job of [`super::Censorable`].

use std::borrow::Cow;

/// Words masked by [`CensorPolicy::default`], in replacement order.
pub const DEFAULT_WORDS: [&str; 3] = ["dang", "shoot", "heck"];

/// Character used to build mask runs unless overridden.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Errors raised while building a custom [`CensorPolicy`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// A censored word must contain at least one character.
    #[error("censored words cannot be empty")]
    EmptyWord,
    /// The word is already part of the policy.
    #[error("`{0}` is already censored")]
    DuplicateWord(String),
    /// A word containing the mask character could be re-formed by a mask run.
    #[error("censored word `{word}` contains the mask character `{mask_char}`")]
    MaskInWord {
        /// The offending word.
        word: String,
        /// The configured mask character.
        mask_char: char,
    },
}

/// An ordered list of forbidden words and the character used to mask them.
///
/// Matching is literal and case-sensitive, with no word-boundary checks:
/// `"heck"` is masked inside `"checker"` too. Every occurrence of each word is
/// replaced by a run of the mask character as long as the word (counted in
/// Unicode scalar values). Words are applied in the order they were added.
///
/// A mask run can never re-form a forbidden word, so applying a policy twice
/// gives the same result as applying it once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CensorPolicy {
    words: Vec<Cow<'static, str>>,
    mask_char: char,
}

impl CensorPolicy {
    /// A policy that censors nothing, masking with [`DEFAULT_MASK_CHAR`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: Vec::new(),
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    /// Appends a word to the end of the replacement order.
    pub fn with_word<W>(mut self, word: W) -> Result<Self, PolicyError>
    where
        W: Into<Cow<'static, str>>,
    {
        let word = word.into();
        if word.is_empty() {
            return Err(PolicyError::EmptyWord);
        }
        if self.words.contains(&word) {
            return Err(PolicyError::DuplicateWord(word.into_owned()));
        }
        if word.contains(self.mask_char) {
            return Err(PolicyError::MaskInWord {
                word: word.into_owned(),
                mask_char: self.mask_char,
            });
        }
        self.words.push(word);
        Ok(self)
    }

    /// Uses a specific masking character.
    pub fn with_mask_char(mut self, mask_char: char) -> Result<Self, PolicyError> {
        if let Some(word) = self.words.iter().find(|word| word.contains(mask_char)) {
            return Err(PolicyError::MaskInWord {
                word: word.clone().into_owned(),
                mask_char,
            });
        }
        self.mask_char = mask_char;
        Ok(self)
    }

    /// The censored words, in replacement order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(|word| &**word)
    }

    /// The character mask runs are built from.
    #[must_use]
    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Returns `true` when `value` contains none of the censored words.
    #[must_use]
    pub fn is_clean(&self, value: &str) -> bool {
        !self.words.iter().any(|word| value.contains(&**word))
    }

    /// Applies the policy to `value`, returning the censored copy.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        let mut censored = value.to_owned();
        self.apply_in_place(&mut censored);
        censored
    }

    /// Rewrites `value` in place.
    ///
    /// A value without matches is left untouched and is not reallocated.
    pub fn apply_in_place(&self, value: &mut String) {
        for word in &self.words {
            if value.contains(&**word) {
                *value = value.replace(&**word, &self.mask_for(word));
            }
        }
    }

    fn mask_for(&self, word: &str) -> String {
        std::iter::repeat_n(self.mask_char, word.chars().count()).collect()
    }
}

impl Default for CensorPolicy {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().copied().map(Cow::Borrowed).collect(),
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CensorPolicy, PolicyError, DEFAULT_WORDS};

    #[test]
    fn default_policy_masks_each_word_with_its_length() {
        let policy = CensorPolicy::default();
        assert_eq!(policy.apply_to("dang"), "****");
        assert_eq!(policy.apply_to("shoot"), "*****");
        assert_eq!(policy.apply_to("heck"), "****");
    }

    #[test]
    fn default_policy_keeps_word_order() {
        let policy = CensorPolicy::default();
        assert!(policy.words().eq(DEFAULT_WORDS));
    }

    #[test]
    fn every_occurrence_is_masked() {
        let policy = CensorPolicy::default();
        assert_eq!(policy.apply_to("dang dang dang"), "**** **** ****");
    }

    #[test]
    fn matching_ignores_word_boundaries() {
        let policy = CensorPolicy::default();
        assert_eq!(policy.apply_to("checkers"), "c****ers");
        assert_eq!(policy.apply_to("dangerous"), "****erous");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let policy = CensorPolicy::default();
        assert_eq!(policy.apply_to("Dang HECK Shoot"), "Dang HECK Shoot");
    }

    #[test]
    fn clean_input_is_not_reallocated() {
        let policy = CensorPolicy::default();
        let mut value = String::with_capacity(64);
        value.push_str("all good here");
        let before = value.as_ptr();
        policy.apply_in_place(&mut value);
        assert_eq!(value, "all good here");
        assert_eq!(value.as_ptr(), before);
    }

    #[test]
    fn custom_mask_char_is_used() {
        let policy = CensorPolicy::default().with_mask_char('#').unwrap();
        assert_eq!(policy.apply_to("oh heck"), "oh ####");
    }

    #[test]
    fn mask_length_counts_scalar_values() {
        let policy = CensorPolicy::empty().with_word("zût").unwrap();
        assert_eq!(policy.apply_to("zût alors"), "*** alors");
    }

    #[test]
    fn empty_word_is_rejected() {
        let err = CensorPolicy::empty().with_word("").unwrap_err();
        assert_eq!(err, PolicyError::EmptyWord);
    }

    #[test]
    fn duplicate_word_is_rejected() {
        let err = CensorPolicy::default().with_word("heck").unwrap_err();
        assert_eq!(err, PolicyError::DuplicateWord("heck".to_string()));
    }

    #[test]
    fn word_containing_mask_char_is_rejected() {
        let err = CensorPolicy::empty().with_word("f*ck").unwrap_err();
        assert_eq!(
            err,
            PolicyError::MaskInWord {
                word: "f*ck".to_string(),
                mask_char: '*',
            }
        );

        let err = CensorPolicy::default().with_mask_char('o').unwrap_err();
        assert_eq!(
            err,
            PolicyError::MaskInWord {
                word: "shoot".to_string(),
                mask_char: 'o',
            }
        );
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(
            PolicyError::DuplicateWord("heck".into()).to_string(),
            "`heck` is already censored"
        );
    }

    #[test]
    fn empty_policy_is_a_no_op() {
        let policy = CensorPolicy::empty();
        assert!(policy.is_clean("dang"));
        assert_eq!(policy.apply_to("dang"), "dang");
    }
}
