//! Reference dataset loaded into a fresh repository at startup.

use crate::domain::model::{Components, MorphemeKind, NewMorpheme, NewWord};

pub fn morphemes() -> Vec<NewMorpheme> {
    use MorphemeKind::{Prefix, Root, Suffix};

    vec![
        NewMorpheme::new(
            "dis-",
            Prefix,
            "Means \"not\" or \"opposite of\" - reverses the meaning of the root word",
            ["disagree", "disappear", "disconnect", "dislike", "disturb"],
        ),
        NewMorpheme::new(
            "honest",
            Root,
            "From Latin \"honestus\" meaning honorable, decent, or truthful",
            ["honestly", "honesty", "dishonest", "honester"],
        ),
        NewMorpheme::new(
            "-y",
            Suffix,
            "Forms nouns meaning \"quality of\" or \"state of being\"",
            ["honesty", "happiness", "darkness", "weakness"],
        ),
        NewMorpheme::new(
            "un-",
            Prefix,
            "Means \"not\" or \"reverse of\"",
            ["unhappy", "unlock", "undo", "unfair"],
        ),
        NewMorpheme::new(
            "happy",
            Root,
            "Feeling or showing pleasure or contentment",
            ["happiness", "unhappy", "happily", "happier"],
        ),
        NewMorpheme::new(
            "-ness",
            Suffix,
            "Forms nouns expressing a state or condition",
            ["happiness", "sadness", "kindness", "darkness"],
        ),
        NewMorpheme::new(
            "re-",
            Prefix,
            "Again, back, or anew",
            ["rebuild", "return", "remake", "reconstruct"],
        ),
        NewMorpheme::new(
            "construct",
            Root,
            "To build or form by putting together parts",
            ["construction", "reconstruct", "constructive", "constructor"],
        ),
        NewMorpheme::new(
            "-ion",
            Suffix,
            "Forms nouns indicating action or process",
            ["construction", "creation", "education", "celebration"],
        ),
        NewMorpheme::new(
            "respect",
            Root,
            "A feeling of deep admiration for someone or something",
            ["respectful", "disrespect", "respectable", "respectfully"],
        ),
        NewMorpheme::new(
            "-ful",
            Suffix,
            "Full of, characterized by",
            ["respectful", "helpful", "beautiful", "wonderful"],
        ),
        NewMorpheme::new(
            "agree",
            Root,
            "To have the same opinion; to consent",
            ["agreement", "disagree", "agreeable", "agreeing"],
        ),
        NewMorpheme::new(
            "appear",
            Root,
            "To come into sight; to seem",
            ["appearance", "disappear", "apparent", "appearing"],
        ),
        NewMorpheme::new(
            "connect",
            Root,
            "To join or link together",
            ["connection", "disconnect", "connected", "connector"],
        ),
        NewMorpheme::new(
            "like",
            Root,
            "To find agreeable or satisfactory",
            ["likely", "dislike", "likable", "liking"],
        ),
        NewMorpheme::new(
            "turb",
            Root,
            "To disturb or confuse",
            ["disturb", "turbulent", "turbulence", "perturb"],
        ),
    ]
}

pub fn words() -> Vec<NewWord> {
    let full = |prefix: &str, root: &str, suffix: &str| {
        Components::new(root).with_prefix(prefix).with_suffix(suffix)
    };
    let dis = |root: &str| Components::new(root).with_prefix("dis-");

    vec![
        NewWord::new(
            "dishonesty",
            "the quality of being fraudulent or deceitful",
            full("dis-", "honest", "-y"),
        ),
        NewWord::new(
            "unhappiness",
            "the feeling of not being happy; sadness",
            full("un-", "happy", "-ness"),
        ),
        NewWord::new(
            "reconstruction",
            "the action of building something again",
            full("re-", "construct", "-ion"),
        ),
        NewWord::new(
            "disrespectful",
            "showing a lack of respect; rude",
            full("dis-", "respect", "-ful"),
        ),
        NewWord::new("disagree", "to have a different opinion; not agree", dis("agree")),
        NewWord::new("disappear", "to go out of sight; vanish", dis("appear")),
        NewWord::new("disconnect", "to break the connection of; unplug", dis("connect")),
        NewWord::new("dislike", "to regard with distaste or aversion", dis("like")),
        NewWord::new("disturb", "to interfere with the normal arrangement", dis("turb")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_payloads_pass_boundary_validation() {
        for m in morphemes() {
            m.validate().unwrap();
        }
        for w in words() {
            w.validate().unwrap();
        }
    }

    #[test]
    fn seed_sizes() {
        assert_eq!(morphemes().len(), 16);
        assert_eq!(words().len(), 9);
    }
}
