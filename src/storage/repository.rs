//! In-memory word and morpheme repository.
//!
//! The repository owns every record for the lifetime of the process. It holds
//! two keyed stores (morphemes by `(text, kind)`, words by surface form) and
//! one id counter per store. Creating a record under an existing key replaces
//! the stored record; the id counter advances either way.
//!
//! Callers that share a repository across tasks wrap it in a single lock (see
//! `transport::http::AppState`) so id assignment and insertion never interleave.

use super::ordered::OrderedStore;
use crate::domain::model::{
    Morpheme, MorphemeKey, MorphemeKind, MorphemePart, NewMorpheme, NewWord, Word, WordBreakdown,
};
use crate::domain::seed;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Repository {
    morphemes: OrderedStore<MorphemeKey, Morpheme>,
    words: OrderedStore<String, Word>,
    next_morpheme_id: u64,
    next_word_id: u64,
}

impl Repository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            morphemes: OrderedStore::new(),
            words: OrderedStore::new(),
            next_morpheme_id: 1,
            next_word_id: 1,
        }
    }

    /// Creates a repository loaded with the reference dataset.
    pub fn seeded() -> Self {
        let mut repo = Self::new();
        for m in seed::morphemes() {
            repo.create_morpheme(m);
        }
        for w in seed::words() {
            repo.create_word(w);
        }
        info!(
            morphemes = repo.morpheme_count(),
            words = repo.word_count(),
            "seed dataset loaded"
        );
        repo
    }

    /// Startup repository: seeded when `seed_data` is set, empty otherwise.
    pub fn initial(seed_data: bool) -> Self {
        if seed_data {
            Self::seeded()
        } else {
            info!("seed dataset disabled, starting with an empty repository");
            Self::new()
        }
    }

    pub fn create_morpheme(&mut self, new: NewMorpheme) -> Morpheme {
        let id = self.next_morpheme_id;
        self.next_morpheme_id += 1;

        let morpheme = Morpheme {
            id,
            text: new.text,
            kind: new.kind,
            definition: new.definition,
            examples: new.examples,
        };
        let (stored, replaced) = self.morphemes.upsert(morpheme.key(), morpheme);
        if replaced {
            info!(id, text = %stored.text, kind = %stored.kind, "morpheme replaced");
        } else {
            debug!(id, text = %stored.text, kind = %stored.kind, "morpheme created");
        }
        stored.clone()
    }

    /// Exact lookup by `(text, kind)`.
    pub fn get_morpheme(&self, text: &str, kind: MorphemeKind) -> Option<&Morpheme> {
        self.morphemes.get(&MorphemeKey::new(text, kind))
    }

    /// Morphemes of one kind in creation order.
    pub fn list_morphemes_by_kind(&self, kind: MorphemeKind) -> Vec<&Morpheme> {
        self.morphemes.values().filter(|m| m.kind == kind).collect()
    }

    pub fn create_word(&mut self, new: NewWord) -> Word {
        let id = self.next_word_id;
        self.next_word_id += 1;

        let word = Word {
            id,
            word: new.word,
            definition: new.definition,
            components: new.components.normalized(),
        };
        let (stored, replaced) = self.words.upsert(word.word.clone(), word);
        if replaced {
            info!(id, word = %stored.word, "word replaced");
        } else {
            debug!(id, word = %stored.word, "word created");
        }
        stored.clone()
    }

    /// Exact lookup by surface form.
    pub fn get_word(&self, word: &str) -> Option<&Word> {
        self.words.get(word)
    }

    /// All words in creation order, or only those whose surface form contains
    /// `search` ignoring case.
    pub fn list_words(&self, search: Option<&str>) -> Vec<&Word> {
        match search.map(str::to_lowercase) {
            Some(needle) => self
                .words
                .values()
                .filter(|w| w.word.to_lowercase().contains(&needle))
                .collect(),
            None => self.words.values().collect(),
        }
    }

    /// Resolves each component of a stored word to the morpheme stored under
    /// the same text and kind, if any.
    pub fn breakdown(&self, word: &str) -> Option<WordBreakdown> {
        let word = self.get_word(word)?;
        let parts = word
            .components
            .parts()
            .map(|(kind, text)| MorphemePart {
                text: text.to_string(),
                kind,
                morpheme: self.get_morpheme(text, kind).cloned(),
            })
            .collect();
        Some(WordBreakdown {
            word: word.clone(),
            parts,
        })
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn morpheme_count(&self) -> usize {
        self.morphemes.len()
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Components;

    fn dis() -> NewMorpheme {
        NewMorpheme::new("dis-", MorphemeKind::Prefix, "not", ["disagree"])
    }

    #[test]
    fn created_records_read_back_equal() {
        let mut repo = Repository::new();
        let m = repo.create_morpheme(dis());
        assert_eq!(repo.get_morpheme("dis-", MorphemeKind::Prefix), Some(&m));

        let w = repo.create_word(NewWord::new(
            "dishonesty",
            "deceit",
            Components::new("honest").with_prefix("dis-").with_suffix("-y"),
        ));
        assert_eq!(repo.get_word("dishonesty"), Some(&w));
    }

    #[test]
    fn ids_advance_on_overwrite() {
        let mut repo = Repository::new();
        let first = repo.create_morpheme(dis());
        let second = repo.create_morpheme(NewMorpheme::new(
            "dis-",
            MorphemeKind::Prefix,
            "apart",
            Vec::<String>::new(),
        ));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.morpheme_count(), 1);

        let stored = repo.get_morpheme("dis-", MorphemeKind::Prefix).unwrap();
        assert_eq!(stored.definition, "apart");
        assert_eq!(stored.id, 2);
    }

    #[test]
    fn initial_follows_seed_flag() {
        let seeded = Repository::initial(true);
        assert_eq!(seeded.word_count(), 9);
        assert_eq!(seeded.morpheme_count(), 16);

        let empty = Repository::initial(false);
        assert_eq!(empty.word_count(), 0);
        assert_eq!(empty.morpheme_count(), 0);
    }

    #[test]
    fn same_text_different_kind_are_distinct() {
        let mut repo = Repository::new();
        repo.create_morpheme(NewMorpheme::new("like", MorphemeKind::Root, "enjoy", ["liking"]));
        repo.create_morpheme(NewMorpheme::new(
            "like",
            MorphemeKind::Suffix,
            "resembling",
            ["childlike"],
        ));
        assert_eq!(repo.morpheme_count(), 2);
        assert_eq!(
            repo.get_morpheme("like", MorphemeKind::Suffix).map(|m| m.definition.as_str()),
            Some("resembling")
        );
        assert!(repo.get_morpheme("like", MorphemeKind::Prefix).is_none());
    }

    #[test]
    fn word_overwrite_leaves_one_record() {
        let mut repo = Repository::new();
        repo.create_word(NewWord::new("x", "d1", Components::new("r1")));
        repo.create_word(NewWord::new("y", "d", Components::new("r")));
        repo.create_word(NewWord::new("x", "d2", Components::new("r2")));

        let x = repo.get_word("x").unwrap();
        assert_eq!(x.definition, "d2");
        assert_eq!(x.components.root, "r2");
        assert_eq!(x.id, 3);

        let listed: Vec<_> = repo.list_words(None).iter().map(|w| w.word.as_str()).collect();
        assert_eq!(listed, vec!["x", "y"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut repo = Repository::new();
        for w in ["disagree", "Disappear", "honesty", "undisputed"] {
            repo.create_word(NewWord::new(w, "", Components::new("r")));
        }
        let hits: Vec<_> = repo
            .list_words(Some("DIS"))
            .iter()
            .map(|w| w.word.as_str())
            .collect();
        assert_eq!(hits, vec!["disagree", "Disappear", "undisputed"]);
        assert_eq!(repo.list_words(Some("")).len(), 4);
        assert!(repo.list_words(Some("zzz")).is_empty());
    }

    #[test]
    fn list_by_kind_keeps_creation_order() {
        let repo = Repository::seeded();
        let prefixes: Vec<_> = repo
            .list_morphemes_by_kind(MorphemeKind::Prefix)
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(prefixes, vec!["dis-", "un-", "re-"]);
        assert!(repo
            .list_morphemes_by_kind(MorphemeKind::Root)
            .iter()
            .all(|m| m.kind == MorphemeKind::Root));
        assert_eq!(Repository::new().list_morphemes_by_kind(MorphemeKind::Suffix).len(), 0);
    }

    #[test]
    fn breakdown_marks_unstored_components() {
        let mut repo = Repository::new();
        repo.create_morpheme(dis());
        repo.create_word(NewWord::new(
            "dispel",
            "drive away",
            Components::new("pel").with_prefix("dis-"),
        ));

        let b = repo.breakdown("dispel").unwrap();
        assert_eq!(b.parts.len(), 2);
        assert_eq!(b.parts[0].kind, MorphemeKind::Prefix);
        assert!(b.parts[0].morpheme.is_some());
        assert_eq!(b.parts[1].text, "pel");
        assert!(b.parts[1].morpheme.is_none());
        assert!(repo.breakdown("nonexistent").is_none());
    }

    #[test]
    fn seeded_dishonesty_scenario() {
        let repo = Repository::seeded();
        assert_eq!(repo.morpheme_count(), 16);
        assert_eq!(repo.word_count(), 9);

        let w = repo.get_word("dishonesty").unwrap();
        assert_eq!(w.components.root, "honest");
        assert!(!repo
            .get_morpheme("dis-", MorphemeKind::Prefix)
            .unwrap()
            .definition
            .is_empty());
        assert_eq!(repo.list_words(Some("honesty")).len(), 1);
        assert!(repo.get_word("nonexistent").is_none());

        // Seeded words without a suffix store it as absent.
        assert_eq!(repo.get_word("disagree").unwrap().components.suffix, None);
    }

    #[test]
    fn reads_are_idempotent() {
        let repo = Repository::seeded();
        assert_eq!(repo.list_words(Some("dis")), repo.list_words(Some("dis")));
        assert_eq!(
            repo.list_morphemes_by_kind(MorphemeKind::Suffix),
            repo.list_morphemes_by_kind(MorphemeKind::Suffix)
        );
        assert_eq!(repo.breakdown("unhappiness"), repo.breakdown("unhappiness"));
    }
}
