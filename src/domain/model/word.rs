use super::morpheme::{Morpheme, MorphemeKind};
use super::validation::{require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The prefix/root/suffix split of a word.
///
/// Components are soft references: plain morpheme texts, resolved against the
/// morpheme table only when a caller asks for a [`WordBreakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Components {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl Components {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            prefix: None,
            root: root.into(),
            suffix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Empty prefix/suffix strings mean "absent".
    pub fn normalized(self) -> Self {
        Self {
            prefix: self.prefix.filter(|p| !p.is_empty()),
            root: self.root,
            suffix: self.suffix.filter(|s| !s.is_empty()),
        }
    }

    /// Present components in reading order.
    pub fn parts(&self) -> impl Iterator<Item = (MorphemeKind, &str)> {
        [
            self.prefix.as_deref().map(|p| (MorphemeKind::Prefix, p)),
            Some((MorphemeKind::Root, self.root.as_str())),
            self.suffix.as_deref().map(|s| (MorphemeKind::Suffix, s)),
        ]
        .into_iter()
        .flatten()
    }
}

/// A stored word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Word {
    pub id: u64,
    pub word: String,
    pub definition: String,
    pub components: Components,
}

/// Creation payload for a word (`POST /api/words`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewWord {
    pub word: String,
    pub definition: String,
    pub components: Components,
}

impl NewWord {
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        components: Components,
    ) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            components,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("word", &self.word)?;
        require_non_empty("components.root", &self.components.root)?;
        Ok(())
    }
}

/// One block of a word, paired with the morpheme stored under the same text and kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MorphemePart {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MorphemeKind,
    /// `None` when no morpheme is stored for this component.
    pub morpheme: Option<Morpheme>,
}

/// A word with its components resolved against the morpheme table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WordBreakdown {
    pub word: Word,
    pub parts: Vec<MorphemePart>,
}
