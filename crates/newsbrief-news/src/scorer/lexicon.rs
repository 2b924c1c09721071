//! Word lists backing the two sentiment signals.

/// Valence on a `[-4.0, 4.0]` scale, used by the compound signal.
pub(crate) const VALENCE: &[(&str, f64)] = &[
    // Positive
    ("advantage", 1.0),
    ("approve", 1.8),
    ("approved", 1.8),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("best", 3.2),
    ("better", 1.9),
    ("boost", 1.7),
    ("boosts", 1.3),
    ("breakthrough", 2.0),
    ("celebrate", 2.7),
    ("confidence", 2.3),
    ("confident", 2.2),
    ("efficient", 1.8),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("favorable", 2.1),
    ("gain", 2.4),
    ("gains", 1.9),
    ("good", 1.9),
    ("great", 3.1),
    ("growth", 1.6),
    ("happy", 2.7),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("innovation", 1.6),
    ("innovative", 1.9),
    ("leading", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("opportunities", 1.6),
    ("opportunity", 1.8),
    ("optimism", 2.5),
    ("optimistic", 1.3),
    ("outstanding", 3.0),
    ("popular", 1.8),
    ("positive", 2.6),
    ("praise", 2.6),
    ("praised", 2.2),
    ("profit", 1.9),
    ("profits", 1.9),
    ("rally", 1.2),
    ("rallies", 1.2),
    ("recover", 1.5),
    ("recovery", 1.4),
    ("reward", 2.0),
    ("rise", 0.8),
    ("rises", 0.8),
    ("robust", 1.7),
    ("rose", 0.8),
    ("secure", 1.4),
    ("soar", 2.0),
    ("soared", 2.0),
    ("soars", 2.0),
    ("solid", 1.2),
    ("stable", 1.2),
    ("strong", 2.3),
    ("stronger", 2.0),
    ("success", 2.7),
    ("successful", 2.8),
    ("thriving", 2.6),
    ("upbeat", 1.8),
    ("upgrade", 1.6),
    ("upgraded", 1.5),
    ("win", 2.8),
    ("wins", 2.7),
    ("won", 2.7),
    // Negative
    ("angry", -2.3),
    ("awful", -2.0),
    ("ban", -2.6),
    ("banned", -2.0),
    ("bad", -2.5),
    ("bankrupt", -2.6),
    ("bankruptcy", -2.6),
    ("breach", -1.8),
    ("concern", -1.3),
    ("concerns", -1.3),
    ("crash", -1.7),
    ("crisis", -3.1),
    ("criticism", -1.9),
    ("criticized", -2.0),
    ("cut", -1.1),
    ("cuts", -1.1),
    ("damage", -2.2),
    ("debt", -1.5),
    ("decline", -1.1),
    ("declined", -1.1),
    ("delay", -1.3),
    ("delayed", -1.3),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("downturn", -1.6),
    ("drop", -1.1),
    ("dropped", -1.1),
    ("drops", -1.1),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fall", -1.0),
    ("falls", -1.0),
    ("fear", -2.2),
    ("fears", -1.8),
    ("fell", -1.0),
    ("fined", -1.7),
    ("fraud", -2.8),
    ("hack", -1.4),
    ("hurt", -2.4),
    ("investigation", -1.0),
    ("lawsuit", -1.6),
    ("layoffs", -2.0),
    ("lose", -1.7),
    ("loss", -1.3),
    ("losses", -1.5),
    ("lost", -1.3),
    ("missed", -1.2),
    ("outage", -1.6),
    ("penalty", -2.0),
    ("plunge", -2.0),
    ("plunged", -2.0),
    ("plunges", -2.0),
    ("poor", -2.1),
    ("probe", -0.8),
    ("problem", -1.7),
    ("problems", -1.7),
    ("recall", -1.2),
    ("recalls", -1.2),
    ("risk", -1.1),
    ("risks", -1.1),
    ("scandal", -2.6),
    ("scrutiny", -1.1),
    ("slump", -1.8),
    ("struggle", -1.7),
    ("struggles", -1.7),
    ("struggling", -1.8),
    ("sue", -1.6),
    ("sued", -1.6),
    ("terrible", -2.5),
    ("threat", -2.4),
    ("trouble", -1.7),
    ("uncertain", -1.2),
    ("uncertainty", -1.4),
    ("volatile", -1.2),
    ("warn", -1.4),
    ("warning", -1.4),
    ("warns", -1.4),
    ("weak", -1.9),
    ("weaker", -1.9),
    ("worries", -1.8),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
];

/// Per-word polarity on a `[-1.0, 1.0]` scale, used by the polarity estimate.
pub(crate) const POLARITY: &[(&str, f64)] = &[
    // Positive
    ("amazing", 0.6),
    ("best", 1.0),
    ("better", 0.5),
    ("excellent", 1.0),
    ("exciting", 0.3),
    ("favorable", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("high", 0.16),
    ("higher", 0.25),
    ("impressive", 1.0),
    ("innovative", 0.5),
    ("new", 0.136),
    ("optimistic", 0.5),
    ("outstanding", 0.5),
    ("popular", 0.6),
    ("positive", 0.227),
    ("robust", 0.5),
    ("solid", 0.3),
    ("stable", 0.2),
    ("strong", 0.433),
    ("successful", 0.75),
    ("upbeat", 0.4),
    // Negative
    ("angry", -0.5),
    ("awful", -1.0),
    ("bad", -0.7),
    ("dangerous", -0.6),
    ("difficult", -0.5),
    ("disappointing", -0.6),
    ("failed", -0.5),
    ("fraudulent", -0.6),
    ("harmful", -0.6),
    ("illegal", -0.5),
    ("negative", -0.3),
    ("poor", -0.4),
    ("risky", -0.5),
    ("sad", -0.5),
    ("serious", -0.333),
    ("slow", -0.3),
    ("terrible", -1.0),
    ("uncertain", -0.3),
    ("volatile", -0.3),
    ("weak", -0.375),
    ("worried", -0.4),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Degree adverbs that push the following word's valence away from zero
/// (positive increment) or toward it (negative increment).
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("barely", -0.293),
    ("extremely", 0.293),
    ("highly", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("less", -0.293),
    ("marginally", -0.293),
    ("more", 0.293),
    ("most", 0.293),
    ("partly", -0.293),
    ("really", 0.293),
    ("sharply", 0.293),
    ("significantly", 0.293),
    ("slightly", -0.293),
    ("so", 0.293),
    ("somewhat", -0.293),
    ("very", 0.293),
];

/// Multipliers applied to the next word's polarity.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("barely", 0.4),
    ("extremely", 1.5),
    ("fairly", 0.8),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.3),
    ("slightly", 0.5),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("very", 1.3),
];

pub(crate) const NEGATORS: &[&str] = &[
    "cannot", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing", "without",
];

/// True for negation words, including any `n't` contraction.
pub(crate) fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

/// Lowercased word tokens with surrounding punctuation removed.
///
/// Curly apostrophes are folded to `'` so contractions match [`is_negator`].
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .filter_map(|raw| {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if word.is_empty() {
                return None;
            }
            Some(Token {
                raw: word,
                lower: word.to_lowercase().replace('\u{2019}', "'"),
            })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub(crate) struct Token<'a> {
    /// Word as written, used for emphasis detection.
    pub raw: &'a str,
    pub lower: String,
}
