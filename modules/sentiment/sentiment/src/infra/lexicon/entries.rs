//! Built-in English lexicon.
//!
//! Polarities follow the adjective-centric scale used by pattern-style
//! analyzers: strong evaluative words sit near the ends of `[-1.0, 1.0]`,
//! mild ones close to zero.

/// Sentiment-bearing terms and their polarity.
pub const TERMS: &[(&str, f64)] = &[
    // positive
    ("ok", 0.5),
    ("okay", 0.5),
    ("fine", 0.4167),
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("perfect", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("wonderful", 1.0),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("fantastic", 0.4),
    ("brilliant", 0.9),
    ("superb", 1.0),
    ("outstanding", 0.5),
    ("magnificent", 1.0),
    ("marvelous", 1.0),
    ("terrific", 1.0),
    ("impressive", 1.0),
    ("incredible", 0.9),
    ("exceptional", 0.6667),
    ("remarkable", 0.75),
    ("lovely", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("loves", 0.5),
    ("loving", 0.6),
    ("like", 0.2),
    ("liked", 0.3),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("enjoyable", 0.4),
    ("happy", 0.8),
    ("glad", 0.5),
    ("pleased", 0.5),
    ("delighted", 0.7),
    ("satisfied", 0.5),
    ("beautiful", 0.85),
    ("pretty", 0.25),
    ("nice", 0.6),
    ("cool", 0.35),
    ("fun", 0.3),
    ("funny", 0.25),
    ("friendly", 0.375),
    ("helpful", 0.5),
    ("useful", 0.3),
    ("easy", 0.4333),
    ("fast", 0.2),
    ("quick", 0.3333),
    ("reliable", 0.5),
    ("clean", 0.3667),
    ("clear", 0.1),
    ("smooth", 0.4),
    ("comfortable", 0.4),
    ("convenient", 0.3),
    ("elegant", 0.5),
    ("solid", 0.3),
    ("fresh", 0.3),
    ("tasty", 0.6),
    ("delicious", 1.0),
    ("recommend", 0.3),
    ("recommended", 0.3),
    ("worth", 0.3),
    ("positive", 0.2273),
    ("correct", 0.3),
    ("right", 0.2857),
    ("fair", 0.7),
    ("kind", 0.6),
    ("polite", 0.3),
    ("gorgeous", 0.7),
    ("charming", 0.5),
    ("exciting", 0.3),
    ("excited", 0.375),
    ("interesting", 0.5),
    ("favorite", 0.5),
    ("favourite", 0.5),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("wow", 0.1),
    ("success", 0.3),
    ("successful", 0.75),
    ("win", 0.8),
    ("winner", 0.5),
    ("calm", 0.3),
    ("safe", 0.5),
    ("healthy", 0.5),
    ("strong", 0.4333),
    ("smart", 0.2143),
    ("clever", 0.5),
    ("wise", 0.7),
    ("generous", 0.5),
    ("honest", 0.6),
    ("cheap", 0.4),
    ("affordable", 0.3),
    ("improved", 0.3),
    ("superior", 0.7),
    ("ideal", 0.9),
    ("glorious", 0.8),
    ("grateful", 0.5),
    ("hopeful", 0.5),
    ("proud", 0.8),
    ("joy", 0.8),
    ("pleasant", 0.7333),
    // negative
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("dreadful", -0.8),
    ("disgusting", -1.0),
    ("pathetic", -1.0),
    ("atrocious", -1.0),
    ("abysmal", -1.0),
    ("lousy", -0.8),
    ("poor", -0.4),
    ("hate", -0.8),
    ("hated", -0.9),
    ("hates", -0.8),
    ("dislike", -0.5),
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("annoyed", -0.4),
    ("frustrating", -0.4),
    ("frustrated", -0.7),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("boring", -1.0),
    ("bored", -0.5),
    ("dull", -0.3125),
    ("ugly", -0.7),
    ("stupid", -0.8),
    ("dumb", -0.375),
    ("useless", -0.5),
    ("broken", -0.4),
    ("slow", -0.3),
    ("difficult", -0.5),
    ("hard", -0.2917),
    ("confusing", -0.3),
    ("wrong", -0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.3167),
    ("problem", -0.2),
    ("buggy", -0.4),
    ("expensive", -0.5),
    ("overpriced", -0.6),
    ("rude", -0.3),
    ("dirty", -0.6),
    ("noisy", -0.1),
    ("weak", -0.375),
    ("cheesy", -0.25),
    ("mediocre", -0.3),
    ("unacceptable", -0.8),
    ("unfortunate", -0.5),
    ("unfortunately", -0.5),
    ("painful", -0.7),
    ("sick", -0.7143),
    ("scary", -0.5),
    ("afraid", -0.6),
    ("worried", -0.4),
    ("nasty", -1.0),
    ("evil", -1.0),
    ("cruel", -1.0),
    ("miserable", -1.0),
    ("depressing", -0.4),
    ("depressed", -0.6),
    ("lonely", -0.3),
    ("negative", -0.3),
    ("incorrect", -0.5),
    ("unreliable", -0.5),
    ("unusable", -0.7),
    ("waste", -0.2),
    ("wasted", -0.2),
    ("ridiculous", -0.3333),
    ("absurd", -0.5),
    ("sucks", -0.3),
    ("crap", -0.8),
    ("shame", -0.3),
    ("sorry", -0.5),
    ("tired", -0.4),
    ("bland", -0.3),
    ("inferior", -0.5),
    ("harmful", -0.6),
    ("dangerous", -0.6),
    ("fake", -0.5),
    ("lazy", -0.25),
    ("mess", -0.4),
    ("messy", -0.4),
    ("upset", -0.4),
    ("furious", -0.8),
    ("hopeless", -0.7),
];

/// Emoticons are matched verbatim, before lowercasing.
pub const EMOTICONS: &[(&str, f64)] = &[
    (":)", 0.5),
    (":-)", 0.5),
    ("(:", 0.5),
    (":]", 0.5),
    (";)", 0.4),
    (";-)", 0.4),
    (":D", 1.0),
    (":-D", 1.0),
    ("<3", 1.0),
    (":P", 0.25),
    (":(", -0.5),
    (":-(", -0.5),
    ("):", -0.5),
    (":[", -0.5),
    (":'(", -0.75),
    (":/", -0.25),
    (":-/", -0.25),
    ("</3", -1.0),
];

/// Words that scale the polarity of the next sentiment-bearing term.
pub const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("so", 1.2),
    ("too", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("absolutely", 1.5),
    ("totally", 1.4),
    ("completely", 1.4),
    ("utterly", 1.5),
    ("truly", 1.3),
    ("highly", 1.3),
    ("especially", 1.2),
    ("most", 1.3),
    ("more", 1.2),
    ("quite", 1.1),
    ("fairly", 0.8),
    ("rather", 0.8),
    ("somewhat", 0.7),
    ("kinda", 0.7),
    ("slightly", 0.5),
    ("barely", 0.4),
    ("hardly", 0.4),
];

/// Negations flip and dampen the next sentiment-bearing term.
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nor", "neither", "nobody", "nothing", "none", "nowhere", "cannot",
    "without", "dont", "doesnt", "didnt", "isnt", "arent", "wasnt", "werent", "wont", "wouldnt",
    "cant", "couldnt", "shouldnt", "aint", "havent", "hasnt",
];

/// Multiplier applied to a negated term.
pub const NEGATION_FACTOR: f64 = -0.5;

/// Function words that may sit between a modifier and its term without
/// breaking the chain ("not at all good", "not a good idea").
pub const TRANSPARENT: &[&str] = &["a", "an", "the", "at", "all", "that"];
