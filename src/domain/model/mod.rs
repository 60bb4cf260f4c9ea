//! Word and morpheme records.
//!
//! Words refer to morphemes by surface text only. Nothing here checks that a
//! word's components exist as stored morphemes; the join happens at query time.

pub mod morpheme;
pub mod validation;
pub mod word;

pub use morpheme::{Morpheme, MorphemeKey, MorphemeKind, NewMorpheme};
pub use validation::ValidationError;
pub use word::{Components, MorphemePart, NewWord, Word, WordBreakdown};
