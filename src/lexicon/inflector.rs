//! Rule-based English inflection.
//!
//! [`RuleInflector`] turns a base form into the surface form a Penn tag asks
//! for: plural nouns, third person and past verb forms, gerunds and the
//! comparative and superlative degrees. Irregular forms come from static
//! tables; everything else follows the regular spelling rules (consonant
//! doubling, `y -> ie`, silent `e` dropping).
//!
//! Words that already carry the requested inflection ("walked" for `VBD`,
//! "sat" for `VBD`) are returned unchanged, so feeding an inflected word
//! whose lemma could not be resolved does not double the suffix.
//!
//! # Examples
//!
//! ```
//! use reword::analysis::tag::PosTag;
//! use reword::lexicon::{Inflector, RuleInflector};
//!
//! let inflector = RuleInflector::new();
//! assert_eq!(inflector.inflections("sit", &PosTag::VBD), vec!["sat"]);
//! assert_eq!(inflector.inflections("city", &PosTag::NNS), vec!["cities"]);
//! assert_eq!(inflector.inflections("stop", &PosTag::VBG), vec!["stopping"]);
//! assert_eq!(inflector.inflections("good", &PosTag::JJS), vec!["best"]);
//! assert!(inflector.inflections("the", &PosTag::DT).is_empty());
//! ```

use ahash::AHashMap;
use lazy_static::lazy_static;

use crate::analysis::tag::PosTag;
use crate::lexicon::Inflector;

/// Irregular verbs as (base, past, past participle).
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("arise", "arose", "arisen"),
    ("awake", "awoke", "awoken"),
    ("bear", "bore", "borne"),
    ("beat", "beat", "beaten"),
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("bend", "bent", "bent"),
    ("bet", "bet", "bet"),
    ("bind", "bound", "bound"),
    ("bite", "bit", "bitten"),
    ("bleed", "bled", "bled"),
    ("blow", "blew", "blown"),
    ("break", "broke", "broken"),
    ("breed", "bred", "bred"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("buy", "bought", "bought"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("cling", "clung", "clung"),
    ("come", "came", "come"),
    ("cost", "cost", "cost"),
    ("creep", "crept", "crept"),
    ("cut", "cut", "cut"),
    ("deal", "dealt", "dealt"),
    ("dig", "dug", "dug"),
    ("do", "did", "done"),
    ("draw", "drew", "drawn"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feed", "fed", "fed"),
    ("feel", "felt", "felt"),
    ("fight", "fought", "fought"),
    ("find", "found", "found"),
    ("flee", "fled", "fled"),
    ("fly", "flew", "flown"),
    ("forbid", "forbade", "forbidden"),
    ("forget", "forgot", "forgotten"),
    ("forgive", "forgave", "forgiven"),
    ("freeze", "froze", "frozen"),
    ("get", "got", "gotten"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("grind", "ground", "ground"),
    ("grow", "grew", "grown"),
    ("hang", "hung", "hung"),
    ("have", "had", "had"),
    ("hear", "heard", "heard"),
    ("hide", "hid", "hidden"),
    ("hit", "hit", "hit"),
    ("hold", "held", "held"),
    ("hurt", "hurt", "hurt"),
    ("keep", "kept", "kept"),
    ("kneel", "knelt", "knelt"),
    ("know", "knew", "known"),
    ("lay", "laid", "laid"),
    ("lead", "led", "led"),
    ("leave", "left", "left"),
    ("lend", "lent", "lent"),
    ("let", "let", "let"),
    ("lie", "lay", "lain"),
    ("light", "lit", "lit"),
    ("lose", "lost", "lost"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("pay", "paid", "paid"),
    ("put", "put", "put"),
    ("quit", "quit", "quit"),
    ("read", "read", "read"),
    ("ride", "rode", "ridden"),
    ("ring", "rang", "rung"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("seek", "sought", "sought"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("set", "set", "set"),
    ("shake", "shook", "shaken"),
    ("shine", "shone", "shone"),
    ("shoot", "shot", "shot"),
    ("show", "showed", "shown"),
    ("shut", "shut", "shut"),
    ("sing", "sang", "sung"),
    ("sink", "sank", "sunk"),
    ("sit", "sat", "sat"),
    ("sleep", "slept", "slept"),
    ("slide", "slid", "slid"),
    ("speak", "spoke", "spoken"),
    ("speed", "sped", "sped"),
    ("spend", "spent", "spent"),
    ("spin", "spun", "spun"),
    ("split", "split", "split"),
    ("spread", "spread", "spread"),
    ("spring", "sprang", "sprung"),
    ("stand", "stood", "stood"),
    ("steal", "stole", "stolen"),
    ("stick", "stuck", "stuck"),
    ("sting", "stung", "stung"),
    ("stink", "stank", "stunk"),
    ("strike", "struck", "struck"),
    ("swear", "swore", "sworn"),
    ("sweep", "swept", "swept"),
    ("swim", "swam", "swum"),
    ("swing", "swung", "swung"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tear", "tore", "torn"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("understand", "understood", "understood"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("weep", "wept", "wept"),
    ("win", "won", "won"),
    ("wind", "wound", "wound"),
    ("write", "wrote", "written"),
];

/// Irregular noun plurals.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("person", "people"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("life", "lives"),
    ("leaf", "leaves"),
    ("half", "halves"),
    ("wolf", "wolves"),
    ("shelf", "shelves"),
    ("thief", "thieves"),
    ("loaf", "loaves"),
    ("calf", "calves"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("hero", "heroes"),
    ("echo", "echoes"),
    ("sheep", "sheep"),
    ("deer", "deer"),
    ("fish", "fish"),
    ("series", "series"),
    ("species", "species"),
    ("aircraft", "aircraft"),
];

/// Irregular degrees as (base, comparative, superlative).
const IRREGULAR_DEGREES: &[(&str, &str, &str)] = &[
    ("good", "better", "best"),
    ("well", "better", "best"),
    ("bad", "worse", "worst"),
    ("badly", "worse", "worst"),
    ("far", "farther", "farthest"),
    ("little", "less", "least"),
    ("much", "more", "most"),
    ("many", "more", "most"),
];

/// Verbs whose present and progressive forms are irregular, as
/// (base, third person singular, present participle).
const IRREGULAR_PRESENT: &[(&str, &str, &str)] = &[
    ("be", "is", "being"),
    ("have", "has", "having"),
    ("do", "does", "doing"),
    ("go", "goes", "going"),
];

lazy_static! {
    static ref VERB_FORMS: AHashMap<&'static str, (&'static str, &'static str)> = IRREGULAR_VERBS
        .iter()
        .map(|&(base, past, participle)| (base, (past, participle)))
        .collect();
    static ref PAST_FORMS: AHashMap<&'static str, &'static str> = IRREGULAR_VERBS
        .iter()
        .map(|&(base, past, _)| (past, base))
        .collect();
    static ref PARTICIPLE_FORMS: AHashMap<&'static str, &'static str> = IRREGULAR_VERBS
        .iter()
        .map(|&(base, _, participle)| (participle, base))
        .collect();
    static ref PLURALS: AHashMap<&'static str, &'static str> =
        IRREGULAR_PLURALS.iter().copied().collect();
    static ref PLURAL_FORMS: AHashMap<&'static str, &'static str> = IRREGULAR_PLURALS
        .iter()
        .map(|&(singular, plural)| (plural, singular))
        .collect();
    static ref DEGREES: AHashMap<&'static str, (&'static str, &'static str)> = IRREGULAR_DEGREES
        .iter()
        .map(|&(base, comparative, superlative)| (base, (comparative, superlative)))
        .collect();
    static ref PRESENT: AHashMap<&'static str, (&'static str, &'static str)> = IRREGULAR_PRESENT
        .iter()
        .map(|&(base, third, participle)| (base, (third, participle)))
        .collect();
}

/// Which inflection a tag asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    Base,
    Plural,
    ThirdPerson,
    Past,
    Participle,
    Gerund,
    Comparative,
    Superlative,
}

impl Form {
    fn from_tag(tag: &PosTag) -> Option<Form> {
        match tag {
            PosTag::NN | PosTag::NNP | PosTag::VB | PosTag::VBP | PosTag::JJ | PosTag::RB => {
                Some(Form::Base)
            }
            PosTag::NNS | PosTag::NNPS => Some(Form::Plural),
            PosTag::VBZ => Some(Form::ThirdPerson),
            PosTag::VBD => Some(Form::Past),
            PosTag::VBN => Some(Form::Participle),
            PosTag::VBG => Some(Form::Gerund),
            PosTag::JJR | PosTag::RBR => Some(Form::Comparative),
            PosTag::JJS | PosTag::RBS => Some(Form::Superlative),
            _ => None,
        }
    }
}

/// English inflector driven by irregular tables and spelling rules.
#[derive(Clone, Debug, Default)]
pub struct RuleInflector;

impl RuleInflector {
    /// Create a new rule inflector.
    pub fn new() -> Self {
        RuleInflector
    }

    fn inflect(&self, word: &str, form: Form) -> String {
        match form {
            Form::Base => word.to_string(),
            Form::Plural => plural(word),
            Form::ThirdPerson => third_person(word),
            Form::Past => past(word),
            Form::Participle => participle(word),
            Form::Gerund => gerund(word),
            Form::Comparative => degree(word, true),
            Form::Superlative => degree(word, false),
        }
    }
}

impl Inflector for RuleInflector {
    fn inflections(&self, word: &str, tag: &PosTag) -> Vec<String> {
        let Some(form) = Form::from_tag(tag) else {
            return Vec::new();
        };
        if word.is_empty() {
            return Vec::new();
        }
        vec![self.inflect(word, form)]
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Approximate syllable count from vowel groups.
fn syllables(word: &str) -> usize {
    let mut count = 0;
    let mut in_group = false;
    for (i, c) in word.chars().enumerate() {
        let vowel = is_vowel(c) || (c == 'y' && i > 0);
        if vowel && !in_group {
            count += 1;
        }
        in_group = vowel;
    }
    if count > 1 && word.ends_with('e') && !word.ends_with("le") {
        count -= 1;
    }
    count.max(1)
}

/// A one-syllable word ending consonant-vowel-consonant doubles its final
/// consonant before a vowel suffix ("stop" -> "stopping").
fn doubles_final(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n < 3 || syllables(word) != 1 {
        return false;
    }
    let (a, b, c) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    !is_vowel(a) && is_vowel(b) && !is_vowel(c) && !matches!(c, 'w' | 'x' | 'y')
}

fn ends_consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    matches!((rev.next(), rev.next()), (Some('y'), Some(c)) if !is_vowel(c))
}

fn sibilant(word: &str) -> bool {
    ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
}

fn looks_plural(word: &str) -> bool {
    word.chars().count() > 3
        && word.ends_with('s')
        && !["ss", "us", "is"].iter().any(|suffix| word.ends_with(suffix))
}

fn plural(word: &str) -> String {
    if let Some(plural) = PLURALS.get(word) {
        return (*plural).to_string();
    }
    if PLURAL_FORMS.contains_key(word) || looks_plural(word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("sis") {
        return format!("{stem}ses");
    }
    if sibilant(word) {
        return format!("{word}es");
    }
    if ends_consonant_y(word) {
        return format!("{}ies", &word[..word.len() - 1]);
    }
    format!("{word}s")
}

fn third_person(word: &str) -> String {
    if let Some((third, _)) = PRESENT.get(word) {
        return (*third).to_string();
    }
    if word == "am" || word == "are" || looks_plural(word) {
        return word.to_string();
    }
    if sibilant(word) || word.ends_with('o') {
        return format!("{word}es");
    }
    if ends_consonant_y(word) {
        return format!("{}ies", &word[..word.len() - 1]);
    }
    format!("{word}s")
}

fn regular_past(word: &str) -> String {
    if word.chars().count() > 4 && word.ends_with("ed") {
        return word.to_string();
    }
    if word.ends_with('e') {
        return format!("{word}d");
    }
    if ends_consonant_y(word) {
        return format!("{}ied", &word[..word.len() - 1]);
    }
    if doubles_final(word) {
        if let Some(last) = word.chars().last() {
            return format!("{word}{last}ed");
        }
    }
    format!("{word}ed")
}

fn past(word: &str) -> String {
    if word == "be" {
        return "was".to_string();
    }
    if let Some((past, _)) = VERB_FORMS.get(word) {
        return (*past).to_string();
    }
    if matches!(word, "was" | "were") || PAST_FORMS.contains_key(word) {
        return word.to_string();
    }
    regular_past(word)
}

fn participle(word: &str) -> String {
    if word == "be" {
        return "been".to_string();
    }
    if let Some((_, participle)) = VERB_FORMS.get(word) {
        return (*participle).to_string();
    }
    if PARTICIPLE_FORMS.contains_key(word) {
        return word.to_string();
    }
    if let Some(base) = PAST_FORMS.get(word) {
        if let Some((_, participle)) = VERB_FORMS.get(base) {
            return (*participle).to_string();
        }
    }
    regular_past(word)
}

fn gerund(word: &str) -> String {
    if let Some((_, participle)) = PRESENT.get(word) {
        return (*participle).to_string();
    }
    if word.chars().count() > 5 && word.ends_with("ing") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ie") {
        return format!("{stem}ying");
    }
    if word.ends_with('e') && !["ee", "ye", "oe"].iter().any(|s| word.ends_with(s)) {
        return format!("{}ing", &word[..word.len() - 1]);
    }
    if doubles_final(word) {
        if let Some(last) = word.chars().last() {
            return format!("{word}{last}ing");
        }
    }
    format!("{word}ing")
}

/// Comparative (`comparative == true`) or superlative degree.
fn degree(word: &str, comparative: bool) -> String {
    let (suffix, periphrastic) = if comparative {
        ("er", "more")
    } else {
        ("est", "most")
    };
    if let Some((better, best)) = DEGREES.get(word) {
        let form = if comparative { better } else { best };
        return form.to_string();
    }
    if word.chars().count() > 4 && word.ends_with(suffix) {
        return word.to_string();
    }

    let count = syllables(word);
    let short_form = count == 1
        || (count == 2
            && (ends_consonant_y(word) || ["le", "er", "ow"].iter().any(|s| word.ends_with(s))));
    if (word.ends_with("ly") && word.chars().count() > 4) || !short_form {
        return format!("{periphrastic} {word}");
    }

    if word.ends_with('e') {
        return format!("{word}{}", &suffix[1..]);
    }
    if ends_consonant_y(word) {
        return format!("{}i{suffix}", &word[..word.len() - 1]);
    }
    if doubles_final(word) {
        if let Some(last) = word.chars().last() {
            return format!("{word}{last}{suffix}");
        }
    }
    format!("{word}{suffix}")
}
