//! Word polarity tables.
//!
//! Polarities live in [-1, 1]. Intensifiers scale the polarity of the word
//! that directly follows them; negations flip and dampen the next scored
//! word within a short window.

/// A scoring lexicon for one language.
#[derive(Debug)]
pub struct Lexicon {
    /// Human-readable name, shown in the status bar.
    pub name: &'static str,
    pub words: &'static [(&'static str, f64)],
    pub intensifiers: &'static [(&'static str, f64)],
    pub negations: &'static [&'static str],
}

/// French financial-news lexicon.
pub static FRENCH: Lexicon = Lexicon {
    name: "lexique français",
    words: &[
        // rising / good news
        ("hausse", 0.5),
        ("hausses", 0.5),
        ("progresse", 0.4),
        ("progression", 0.4),
        ("bond", 0.5),
        ("bondit", 0.6),
        ("grimpe", 0.5),
        ("rebond", 0.4),
        ("rebondit", 0.4),
        ("envole", 0.6),
        ("envolée", 0.6),
        ("embellie", 0.5),
        ("reprise", 0.3),
        ("croissance", 0.5),
        ("succès", 0.7),
        ("réussite", 0.7),
        ("victoire", 0.7),
        ("record", 0.5),
        ("records", 0.5),
        ("bénéfice", 0.5),
        ("bénéfices", 0.5),
        ("profit", 0.5),
        ("profits", 0.5),
        ("gain", 0.5),
        ("gains", 0.5),
        ("gagne", 0.5),
        ("remporte", 0.5),
        ("solide", 0.5),
        ("solides", 0.5),
        ("fort", 0.4),
        ("forte", 0.4),
        ("bon", 0.6),
        ("bonne", 0.6),
        ("bons", 0.6),
        ("bonnes", 0.6),
        ("excellent", 0.9),
        ("excellente", 0.9),
        ("excellents", 0.9),
        ("meilleur", 0.6),
        ("meilleure", 0.6),
        ("meilleurs", 0.6),
        ("positif", 0.6),
        ("positive", 0.6),
        ("positifs", 0.6),
        ("optimiste", 0.6),
        ("optimisme", 0.6),
        ("confiance", 0.5),
        ("favorable", 0.5),
        ("favorables", 0.5),
        ("prometteur", 0.6),
        ("prometteuse", 0.6),
        ("rentable", 0.5),
        ("rentabilité", 0.4),
        ("améliore", 0.5),
        ("amélioration", 0.5),
        ("dépasse", 0.4),
        ("surperforme", 0.6),
        ("relève", 0.3),
        ("accélère", 0.3),
        ("innovation", 0.4),
        ("leader", 0.4),
        ("dividende", 0.3),
        ("soutien", 0.3),
        ("accord", 0.3),
        ("contrat", 0.2),
        ("investit", 0.2),
        ("investissement", 0.2),
        ("acquisition", 0.2),
        ("stable", 0.2),
        // falling / bad news
        ("baisse", -0.5),
        ("baisses", -0.5),
        ("recul", -0.4),
        ("recule", -0.4),
        ("chute", -0.6),
        ("chutes", -0.6),
        ("chuter", -0.6),
        ("plonge", -0.7),
        ("plongeon", -0.7),
        ("effondre", -0.8),
        ("effondrement", -0.8),
        ("dégringole", -0.7),
        ("perte", -0.5),
        ("pertes", -0.5),
        ("déficit", -0.5),
        ("dette", -0.3),
        ("dettes", -0.3),
        ("crise", -0.6),
        ("risque", -0.3),
        ("risques", -0.3),
        ("menace", -0.5),
        ("menaces", -0.5),
        ("inquiétude", -0.5),
        ("inquiétudes", -0.5),
        ("inquiète", -0.5),
        ("crainte", -0.5),
        ("craintes", -0.5),
        ("mauvais", -0.6),
        ("mauvaise", -0.6),
        ("mauvaises", -0.6),
        ("faible", -0.4),
        ("faibles", -0.4),
        ("négatif", -0.6),
        ("négative", -0.6),
        ("pessimiste", -0.6),
        ("échec", -0.7),
        ("grève", -0.5),
        ("grèves", -0.5),
        ("licenciement", -0.6),
        ("licenciements", -0.6),
        ("suppression", -0.4),
        ("suppressions", -0.4),
        ("amende", -0.5),
        ("sanction", -0.5),
        ("sanctions", -0.5),
        ("enquête", -0.3),
        ("scandale", -0.8),
        ("fraude", -0.8),
        ("procès", -0.4),
        ("plainte", -0.4),
        ("alerte", -0.4),
        ("avertissement", -0.4),
        ("dégradation", -0.5),
        ("dégrade", -0.5),
        ("abaisse", -0.4),
        ("ralentissement", -0.4),
        ("ralentit", -0.3),
        ("décevant", -0.6),
        ("décevante", -0.6),
        ("déception", -0.6),
        ("difficile", -0.4),
        ("difficultés", -0.5),
        ("tension", -0.4),
        ("tensions", -0.4),
        ("conflit", -0.5),
        ("litige", -0.4),
        ("panne", -0.5),
        ("cyberattaque", -0.7),
        ("faillite", -0.9),
        ("pire", -0.8),
        ("catastrophe", -0.9),
        ("sombre", -0.5),
        ("morose", -0.5),
    ],
    intensifiers: &[
        ("très", 1.3),
        ("fortement", 1.3),
        ("nettement", 1.2),
        ("largement", 1.2),
        ("vraiment", 1.2),
        ("trop", 1.2),
        ("extrêmement", 1.5),
        ("légèrement", 0.6),
        ("peu", 0.5),
    ],
    negations: &["ne", "n", "pas", "jamais", "aucun", "aucune", "sans", "ni"],
};

/// General-purpose English lexicon.
pub static GENERIC: Lexicon = Lexicon {
    name: "generic english",
    words: &[
        ("up", 0.2),
        ("gain", 0.5),
        ("gains", 0.5),
        ("rise", 0.4),
        ("rises", 0.4),
        ("rally", 0.5),
        ("rallies", 0.5),
        ("surge", 0.6),
        ("surges", 0.6),
        ("soar", 0.7),
        ("soars", 0.7),
        ("jump", 0.5),
        ("jumps", 0.5),
        ("beat", 0.4),
        ("beats", 0.4),
        ("record", 0.5),
        ("profit", 0.5),
        ("profits", 0.5),
        ("growth", 0.5),
        ("strong", 0.4),
        ("good", 0.7),
        ("great", 0.8),
        ("excellent", 1.0),
        ("best", 1.0),
        ("better", 0.5),
        ("positive", 0.2),
        ("optimistic", 0.6),
        ("upgrade", 0.5),
        ("win", 0.8),
        ("wins", 0.8),
        ("success", 0.7),
        ("boost", 0.5),
        ("boosts", 0.5),
        ("bullish", 0.6),
        ("down", -0.2),
        ("fall", -0.4),
        ("falls", -0.4),
        ("drop", -0.4),
        ("drops", -0.4),
        ("decline", -0.4),
        ("declines", -0.4),
        ("plunge", -0.7),
        ("plunges", -0.7),
        ("slump", -0.6),
        ("crash", -0.8),
        ("loss", -0.5),
        ("losses", -0.5),
        ("deficit", -0.5),
        ("debt", -0.3),
        ("crisis", -0.6),
        ("risk", -0.3),
        ("risks", -0.3),
        ("threat", -0.5),
        ("concern", -0.4),
        ("concerns", -0.4),
        ("fear", -0.5),
        ("fears", -0.5),
        ("bad", -0.7),
        ("weak", -0.4),
        ("negative", -0.3),
        ("pessimistic", -0.6),
        ("failure", -0.7),
        ("fails", -0.6),
        ("strike", -0.4),
        ("layoffs", -0.6),
        ("cuts", -0.3),
        ("lawsuit", -0.5),
        ("probe", -0.3),
        ("scandal", -0.8),
        ("fraud", -0.8),
        ("warning", -0.4),
        ("downgrade", -0.5),
        ("slowdown", -0.4),
        ("disappointing", -0.6),
        ("miss", -0.4),
        ("misses", -0.4),
        ("bearish", -0.6),
        ("worse", -0.6),
        ("worst", -1.0),
        ("bankruptcy", -0.9),
    ],
    intensifiers: &[
        ("very", 1.3),
        ("extremely", 1.5),
        ("highly", 1.3),
        ("really", 1.2),
        ("sharply", 1.3),
        ("slightly", 0.6),
    ],
    negations: &[
        "not", "no", "never", "without", "nor", "isn", "doesn", "didn", "wasn", "aren", "don",
    ],
};
