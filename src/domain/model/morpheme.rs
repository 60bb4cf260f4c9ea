use super::validation::{require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Position a morpheme takes inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MorphemeKind {
    Prefix,
    Root,
    Suffix,
}

impl MorphemeKind {
    pub const ALL: [MorphemeKind; 3] = [
        MorphemeKind::Prefix,
        MorphemeKind::Root,
        MorphemeKind::Suffix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MorphemeKind::Prefix => "prefix",
            MorphemeKind::Root => "root",
            MorphemeKind::Suffix => "suffix",
        }
    }
}

impl fmt::Display for MorphemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MorphemeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefix" => Ok(MorphemeKind::Prefix),
            "root" => Ok(MorphemeKind::Root),
            "suffix" => Ok(MorphemeKind::Suffix),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// Identity of a morpheme: the same surface text may exist once per kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MorphemeKey {
    pub text: String,
    pub kind: MorphemeKind,
}

impl MorphemeKey {
    pub fn new(text: impl Into<String>, kind: MorphemeKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A stored morpheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Morpheme {
    pub id: u64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MorphemeKind,
    pub definition: String,
    /// Words illustrating the morpheme. They need not be stored words.
    pub examples: Vec<String>,
}

impl Morpheme {
    pub fn key(&self) -> MorphemeKey {
        MorphemeKey::new(self.text.clone(), self.kind)
    }
}

/// Creation payload for a morpheme (`POST /api/morphemes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewMorpheme {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MorphemeKind,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl NewMorpheme {
    pub fn new<I, S>(
        text: impl Into<String>,
        kind: MorphemeKind,
        definition: impl Into<String>,
        examples: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            kind,
            definition: definition.into(),
            examples: examples.into_iter().map(Into::into).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("text", &self.text)?;
        require_non_empty("definition", &self.definition)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in MorphemeKind::ALL {
            assert_eq!(kind.as_str().parse::<MorphemeKind>(), Ok(kind));
        }
        assert_eq!(
            "infix".parse::<MorphemeKind>(),
            Err(ValidationError::UnknownKind("infix".to_string()))
        );
    }

    #[test]
    fn kind_is_serialized_under_type() {
        let m = Morpheme {
            id: 7,
            text: "-y".to_string(),
            kind: MorphemeKind::Suffix,
            definition: "state of being".to_string(),
            examples: vec![],
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["type"], "suffix");
        assert!(v.get("kind").is_none());
    }

    #[test]
    fn payload_examples_default_to_empty() {
        let p: NewMorpheme = serde_json::from_value(json!({
            "text": "pre-",
            "type": "prefix",
            "definition": "before"
        }))
        .unwrap();
        assert!(p.examples.is_empty());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn payload_rejects_unknown_type_and_blank_text() {
        let bad_type = serde_json::from_value::<NewMorpheme>(json!({
            "text": "pre-",
            "type": "infix",
            "definition": "before"
        }));
        assert!(bad_type.is_err());

        let blank = NewMorpheme::new(" ", MorphemeKind::Prefix, "before", Vec::<String>::new());
        assert_eq!(blank.validate(), Err(ValidationError::EmptyField("text")));
    }
}
