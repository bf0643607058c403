//! Part-of-speech tags and tag translation.
//!
//! Tokens carry a [`PosTag`] from the Penn Treebank tagset. The lexical
//! database and the inflector only care about four coarse categories, so
//! [`CoarsePos`] and [`translate`] reduce a tag to the convention each
//! collaborator expects. Anything outside the four categories translates to
//! `None`, which downstream stages treat as "leave this token alone".
//!
//! # Examples
//!
//! ```
//! use reword::analysis::tag::{translate, CoarsePos, PosTag, TagConvention};
//!
//! let tag: PosTag = "VBD".parse().unwrap();
//! assert_eq!(CoarsePos::from_tag(&tag), Some(CoarsePos::Verb));
//! assert_eq!(translate(&tag, TagConvention::SenseDatabase), Some("v"));
//! assert_eq!(translate(&tag, TagConvention::Inflector), Some("VERB"));
//!
//! let det: PosTag = "DT".parse().unwrap();
//! assert_eq!(translate(&det, TagConvention::Inflector), None);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A Penn Treebank part-of-speech tag.
///
/// Tags the tagset does not define are kept verbatim in
/// [`PosTag::Unknown`] so that no tagger output is ever rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Existential "there"
    EX,
    /// Foreign word
    FW,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Adjective, comparative
    JJR,
    /// Adjective, superlative
    JJS,
    /// List item marker
    LS,
    /// Modal
    MD,
    /// Noun, singular or mass
    NN,
    /// Noun, plural
    NNS,
    /// Proper noun, singular
    NNP,
    /// Proper noun, plural
    NNPS,
    /// Predeterminer
    PDT,
    /// Possessive ending
    POS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun
    PRPS,
    /// Adverb
    RB,
    /// Adverb, comparative
    RBR,
    /// Adverb, superlative
    RBS,
    /// Particle
    RP,
    /// Symbol
    SYM,
    /// "to"
    TO,
    /// Interjection
    UH,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Possessive wh-pronoun
    WPS,
    /// Wh-adverb
    WRB,
    /// Sentence-final punctuation
    Period,
    /// Comma
    Comma,
    /// Colon, semicolon, dash or ellipsis
    Colon,
    /// Opening bracket
    OpenBracket,
    /// Closing bracket
    CloseBracket,
    /// Opening quotation mark
    OpenQuote,
    /// Closing quotation mark
    CloseQuote,
    /// Dollar sign
    Dollar,
    /// Pound sign
    Hash,
    /// Anything else the tagger produced
    Unknown(String),
}

impl PosTag {
    /// The Penn Treebank label for this tag.
    pub fn as_str(&self) -> &str {
        match self {
            PosTag::CC => "CC",
            PosTag::CD => "CD",
            PosTag::DT => "DT",
            PosTag::EX => "EX",
            PosTag::FW => "FW",
            PosTag::IN => "IN",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::LS => "LS",
            PosTag::MD => "MD",
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::PDT => "PDT",
            PosTag::POS => "POS",
            PosTag::PRP => "PRP",
            PosTag::PRPS => "PRP$",
            PosTag::RB => "RB",
            PosTag::RBR => "RBR",
            PosTag::RBS => "RBS",
            PosTag::RP => "RP",
            PosTag::SYM => "SYM",
            PosTag::TO => "TO",
            PosTag::UH => "UH",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::WDT => "WDT",
            PosTag::WP => "WP",
            PosTag::WPS => "WP$",
            PosTag::WRB => "WRB",
            PosTag::Period => ".",
            PosTag::Comma => ",",
            PosTag::Colon => ":",
            PosTag::OpenBracket => "(",
            PosTag::CloseBracket => ")",
            PosTag::OpenQuote => "``",
            PosTag::CloseQuote => "''",
            PosTag::Dollar => "$",
            PosTag::Hash => "#",
            PosTag::Unknown(label) => label,
        }
    }

    /// Proper noun, singular or plural.
    pub fn is_proper_noun(&self) -> bool {
        matches!(self, PosTag::NNP | PosTag::NNPS)
    }

    /// Whether the tag came from outside the Penn Treebank tagset.
    pub fn is_unknown(&self) -> bool {
        matches!(self, PosTag::Unknown(_))
    }

    /// Placeholder for tokens a tagger has not seen yet.
    pub fn untagged() -> Self {
        PosTag::Unknown(String::new())
    }
}

impl FromStr for PosTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "CC" => PosTag::CC,
            "CD" => PosTag::CD,
            "DT" => PosTag::DT,
            "EX" => PosTag::EX,
            "FW" => PosTag::FW,
            "IN" => PosTag::IN,
            "JJ" => PosTag::JJ,
            "JJR" => PosTag::JJR,
            "JJS" => PosTag::JJS,
            "LS" => PosTag::LS,
            "MD" => PosTag::MD,
            "NN" => PosTag::NN,
            "NNS" => PosTag::NNS,
            "NNP" => PosTag::NNP,
            "NNPS" => PosTag::NNPS,
            "PDT" => PosTag::PDT,
            "POS" => PosTag::POS,
            "PRP" => PosTag::PRP,
            "PRP$" => PosTag::PRPS,
            "RB" => PosTag::RB,
            "RBR" => PosTag::RBR,
            "RBS" => PosTag::RBS,
            "RP" => PosTag::RP,
            "SYM" => PosTag::SYM,
            "TO" => PosTag::TO,
            "UH" => PosTag::UH,
            "VB" => PosTag::VB,
            "VBD" => PosTag::VBD,
            "VBG" => PosTag::VBG,
            "VBN" => PosTag::VBN,
            "VBP" => PosTag::VBP,
            "VBZ" => PosTag::VBZ,
            "WDT" => PosTag::WDT,
            "WP" => PosTag::WP,
            "WP$" => PosTag::WPS,
            "WRB" => PosTag::WRB,
            "." => PosTag::Period,
            "," => PosTag::Comma,
            ":" => PosTag::Colon,
            "(" | "-LRB-" => PosTag::OpenBracket,
            ")" | "-RRB-" => PosTag::CloseBracket,
            "``" => PosTag::OpenQuote,
            "''" => PosTag::CloseQuote,
            "$" => PosTag::Dollar,
            "#" => PosTag::Hash,
            other => PosTag::Unknown(other.to_string()),
        };
        Ok(tag)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PosTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PosTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        let Ok(tag) = label.parse::<PosTag>();
        Ok(tag)
    }
}

/// The four word classes that have senses and inflections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoarsePos {
    Noun,
    Verb,
    #[serde(rename = "adj")]
    Adjective,
    #[serde(rename = "adv")]
    Adverb,
}

impl CoarsePos {
    /// All coarse categories, in WordNet file order.
    pub const ALL: [CoarsePos; 4] = [
        CoarsePos::Noun,
        CoarsePos::Verb,
        CoarsePos::Adjective,
        CoarsePos::Adverb,
    ];

    /// Reduce a fine-grained tag to its coarse category.
    ///
    /// Follows the leading letter of the Penn label (`N*`, `V*`, `J*`,
    /// `R*`), except that the particle tag `RP` has no coarse category.
    pub fn from_tag(tag: &PosTag) -> Option<CoarsePos> {
        match tag {
            PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS => Some(CoarsePos::Noun),
            PosTag::VB
            | PosTag::VBD
            | PosTag::VBG
            | PosTag::VBN
            | PosTag::VBP
            | PosTag::VBZ => Some(CoarsePos::Verb),
            PosTag::JJ | PosTag::JJR | PosTag::JJS => Some(CoarsePos::Adjective),
            PosTag::RB | PosTag::RBR | PosTag::RBS => Some(CoarsePos::Adverb),
            _ => None,
        }
    }

    /// WordNet's single-letter part-of-speech code.
    pub fn wordnet_code(self) -> &'static str {
        match self {
            CoarsePos::Noun => "n",
            CoarsePos::Verb => "v",
            CoarsePos::Adjective => "a",
            CoarsePos::Adverb => "r",
        }
    }

    /// Universal POS label used by inflection tables.
    pub fn upos(self) -> &'static str {
        match self {
            CoarsePos::Noun => "NOUN",
            CoarsePos::Verb => "VERB",
            CoarsePos::Adjective => "ADJ",
            CoarsePos::Adverb => "ADV",
        }
    }

    /// WordNet dictionary file suffix (`index.noun`, `verb.exc`, ...).
    pub fn file_suffix(self) -> &'static str {
        match self {
            CoarsePos::Noun => "noun",
            CoarsePos::Verb => "verb",
            CoarsePos::Adjective => "adj",
            CoarsePos::Adverb => "adv",
        }
    }
}

impl fmt::Display for CoarsePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}

/// The label convention a collaborator expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagConvention {
    /// Sense database letters: `n`, `v`, `a`, `r`.
    SenseDatabase,
    /// Inflector labels: `NOUN`, `VERB`, `ADJ`, `ADV`.
    Inflector,
}

/// Translate a tag into the label of the given convention.
///
/// Returns `None` for tags outside the four coarse categories.
pub fn translate(tag: &PosTag, convention: TagConvention) -> Option<&'static str> {
    let coarse = CoarsePos::from_tag(tag)?;
    Some(match convention {
        TagConvention::SenseDatabase => coarse.wordnet_code(),
        TagConvention::Inflector => coarse.upos(),
    })
}
