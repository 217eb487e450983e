//! Common English words that may not start an n-gram window

use std::collections::HashSet;
use std::sync::LazyLock;

/// The stopword list, lowercase, one entry per word
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all", "almost", "alone", "along",
    "already", "also", "although", "always", "among", "an", "and", "another", "any", "anybody",
    "anyone", "anything", "anywhere", "are", "area", "areas", "around", "as", "ask", "asked",
    "asking", "asks", "at", "away", "back", "backed", "backing", "backs", "be", "became", "because",
    "become", "becomes", "been", "before", "began", "behind", "being", "beings", "best", "better",
    "between", "big", "both", "but", "by", "came", "can", "cannot", "case", "cases", "certain",
    "certainly", "clear", "clearly", "come", "could", "did", "differ", "different", "differently",
    "do", "does", "done", "down", "downed", "downing", "downs", "during", "each", "early", "either",
    "end", "ended", "ending", "ends", "enough", "even", "evenly", "ever", "every", "everybody",
    "everyone", "everything", "everywhere", "face", "faces", "fact", "facts", "far", "felt", "few",
    "find", "finds", "first", "for", "four", "from", "full", "fully", "further", "furthered",
    "furthering", "furthers", "gave", "general", "generally", "get", "gets", "give", "given",
    "gives", "go", "going", "good", "goods", "got", "great", "greater", "greatest", "group",
    "grouped", "grouping", "groups", "had", "has", "have", "having", "he", "her", "here", "herself",
    "high", "higher", "highest", "him", "himself", "his", "how", "however", "i", "if", "important",
    "in", "interest", "interested", "interesting", "interests", "into", "is", "it", "its", "itself",
    "just", "keep", "keeps", "kind", "knew", "know", "known", "knows", "large", "largely", "last",
    "later", "latest", "least", "less", "let", "lets", "like", "likely", "long", "longer",
    "longest", "made", "make", "making", "man", "many", "may", "me", "member", "members", "men",
    "might", "more", "most", "mostly", "mr", "mrs", "much", "must", "my", "myself", "necessary",
    "need", "needed", "needing", "needs", "never", "new", "newer", "newest", "next", "no", "nobody",
    "non", "noone", "not", "nothing", "now", "nowhere", "number", "numbers", "of", "off", "often",
    "old", "older", "oldest", "on", "once", "one", "only", "open", "opened", "opening", "opens",
    "or", "order", "ordered", "ordering", "orders", "other", "others", "our", "out", "over", "part",
    "parted", "parting", "parts", "per", "perhaps", "place", "places", "point", "pointed",
    "pointing", "points", "possible", "present", "presented", "presenting", "presents", "problem",
    "problems", "put", "puts", "quite", "rather", "really", "right", "room", "rooms", "said",
    "same", "saw", "say", "says", "second", "seconds", "see", "seem", "seemed", "seeming", "seems",
    "sees", "several", "shall", "she", "should", "show", "showed", "showing", "shows", "side",
    "sides", "since", "small", "smaller", "smallest", "so", "some", "somebody", "someone",
    "something", "somewhere", "state", "states", "still", "such", "sure", "take", "taken", "than",
    "that", "the", "their", "them", "then", "there", "therefore", "these", "they", "thing",
    "things", "think", "thinks", "this", "those", "though", "thought", "thoughts", "three",
    "through", "thus", "to", "today", "together", "too", "took", "toward", "turn", "turned",
    "turning", "turns", "two", "under", "until", "up", "upon", "us", "use", "used", "uses", "very",
    "want", "wanted", "wanting", "wants", "was", "way", "ways", "we", "well", "wells", "went",
    "were", "what", "when", "where", "whether", "which", "while", "who", "whole", "whose", "why",
    "will", "with", "within", "without", "work", "worked", "working", "works", "would", "year",
    "years", "yet", "you", "young", "younger", "youngest", "your", "yours",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Immutable, process-wide stopword set
#[derive(Debug, Clone, Copy)]
pub struct StopwordSet {
    words: &'static HashSet<&'static str>,
}

impl StopwordSet {
    /// The built-in English stopword set, initialized on first use
    #[must_use]
    pub fn english() -> Self {
        Self {
            words: &STOPWORD_SET,
        }
    }

    /// Membership test on an already lowercased word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership test that lowercases `word` first
    #[must_use]
    pub fn contains_folded(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.contains(&word.to_lowercase())
        } else {
            self.contains(word)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english()
    }
}
