//! Lexical gender inference for characters whose roster gender code is
//! unreliable.

use rustc_hash::FxHashMap;

use crate::schema::character::Gender;

/// Male-indicating lemmas carry weight −1, female-indicating +1.
const MALE: i32 = -1;
const FEMALE: i32 = 1;

const BUILTIN_WEIGHTS: &[(&str, i32)] = &[
    ("Mr.", MALE),
    ("he", MALE),
    ("his", MALE),
    ("him", MALE),
    ("himself", MALE),
    ("Ms.", FEMALE),
    ("Mrs.", FEMALE),
    ("she", FEMALE),
    ("her", FEMALE),
    ("hers", FEMALE),
    ("herself", FEMALE),
];

/// A signed-weight table over gender-indicating lemmas. Injected into the
/// extractor so tests can swap it out; `Default` carries the built-in
/// pronoun/title table.
#[derive(Debug, Clone)]
pub struct GenderLexicon {
    weights: FxHashMap<String, i32>,
}

impl Default for GenderLexicon {
    fn default() -> Self {
        Self::from_weights(BUILTIN_WEIGHTS.iter().map(|&(lemma, w)| (lemma, w)))
    }
}

impl GenderLexicon {
    /// An empty lexicon; every lemma weighs 0.
    pub fn empty() -> Self {
        Self {
            weights: FxHashMap::default(),
        }
    }

    pub fn from_weights<'a, I>(weights: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        Self {
            weights: weights
                .into_iter()
                .map(|(lemma, w)| (lemma.to_string(), w))
                .collect(),
        }
    }

    /// The signed weight of a lemma; 0 for anything not in the table.
    pub fn weight(&self, lemma: &str) -> i32 {
        self.weights.get(lemma).copied().unwrap_or(0)
    }

    /// Infer a gender from the lemmas attributed to one character: sum
    /// the weights; negative means male, positive female, zero unknown.
    pub fn infer<'a, I>(&self, lemmas: I) -> Gender
    where
        I: IntoIterator<Item = &'a str>,
    {
        let score: i32 = lemmas.into_iter().map(|lemma| self.weight(lemma)).sum();
        match score {
            s if s < 0 => Gender::Male,
            s if s > 0 => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_male_from_pronouns() {
        let lexicon = GenderLexicon::default();
        let gender = lexicon.infer(["he", "walk", "his", "the"]);
        assert_eq!(gender, Gender::Male);
    }

    #[test]
    fn infer_female_from_titles_and_pronouns() {
        let lexicon = GenderLexicon::default();
        let gender = lexicon.infer(["Mrs.", "say", "she", "her"]);
        assert_eq!(gender, Gender::Female);
    }

    #[test]
    fn tie_resolves_to_unknown() {
        let lexicon = GenderLexicon::default();
        let gender = lexicon.infer(["he", "she"]);
        assert_eq!(gender, Gender::Unknown);
    }

    #[test]
    fn no_gendered_lemmas_yields_unknown() {
        let lexicon = GenderLexicon::default();
        assert_eq!(lexicon.infer(["walk", "garden", "letter"]), Gender::Unknown);
        assert_eq!(lexicon.infer([]), Gender::Unknown);
    }

    #[test]
    fn custom_weights_override_builtin_table() {
        let lexicon = GenderLexicon::from_weights([("captain", -2), ("lady", 1)]);
        assert_eq!(lexicon.infer(["captain", "lady"]), Gender::Male);
        // Built-in table is replaced, not merged.
        assert_eq!(lexicon.weight("he"), 0);
    }
}
