/// Search seeds for one business niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Niche {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub hashtags: &'static [&'static str],
    pub seeds: &'static [&'static str],
}

pub const NICHES: &[Niche] = &[
    Niche {
        name: "confeitaria",
        keywords: &[
            "confeitaria artesanal",
            "confeiteira",
            "bolo decorado",
            "cake designer brasileira",
            "doceria artesanal",
            "bolos personalizados",
        ],
        hashtags: &[
            "confeitariaartesanal",
            "confeiteira",
            "bolosdecorados",
            "cakedesign",
            "doceriaartesanal",
            "bolospersonalizados",
        ],
        seeds: &[
            "lojasantoantonio",
            "magoindustria",
            "_mavalerio",
            "mixingredientes",
            "confeitariabrasilcursosonline",
            "confeitariaanacristina",
            "brunarebelo",
        ],
    },
    Niche {
        name: "nails",
        keywords: &[
            "manicure profissional",
            "nail designer",
            "unhas decoradas",
            "manicure e pedicure",
        ],
        hashtags: &[
            "unhasdecoradas",
            "naildesigner",
            "manicureprofissional",
            "unhasdegel",
        ],
        seeds: &[
            "voliacosmeticos",
            "institutonati",
            "manicuresinceraoficial",
            "manicur3profissional",
            "natiakemioficial",
        ],
    },
    Niche {
        name: "hair",
        keywords: &[
            "cabeleireira",
            "salao de beleza",
            "colorista capilar",
            "hair stylist brasileira",
        ],
        hashtags: &[
            "cabeleireira",
            "hairstylistbrasil",
            "salaodebeleza",
            "coloristacapilar",
        ],
        seeds: &[
            "wellaprobrasil",
            "cadiveu",
            "itallianhairtech",
            "lowelloficial",
            "institutoembelleze",
        ],
    },
    Niche {
        name: "marmiteira",
        keywords: &[
            "marmitex delivery",
            "marmita fitness",
            "marmita caseira",
            "quentinha delivery",
            "comida caseira delivery",
            "refeicao congelada caseira",
        ],
        hashtags: &[
            "marmitex",
            "marmitafitness",
            "marmitacaseira",
            "comidacaseira",
            "quentinha",
            "marmitacongelada",
        ],
        seeds: &["isaaborges.fit", "maborges_fit", "fitfoodcozinhasaudavel"],
    },
    Niche {
        name: "costureira",
        keywords: &[
            "costureira",
            "atelie de costura",
            "costura sob medida",
            "conserto de roupas",
            "ajuste de roupas",
            "costureira profissional",
        ],
        hashtags: &[
            "costureira",
            "ateliedecostura",
            "costurasobmedida",
            "costuracriativa",
            "ajustederoupas",
            "costureiraempreendedora",
        ],
        seeds: &["abordarcomsonia", "atelie_crisaguiar", "profissaocostureira"],
    },
    Niche {
        name: "diarista",
        keywords: &[
            "diarista",
            "faxineira profissional",
            "limpeza residencial",
            "diarista autonoma",
            "servico de limpeza",
        ],
        hashtags: &[
            "diarista",
            "faxineira",
            "limpezaresidencial",
            "diaristaautonoma",
            "limpezaprofissional",
            "organizacaodecasa",
        ],
        seeds: &["a_diarista_da_vez", "faborges_organize", "organizecomanozes"],
    },
];

/// Small-business accounts relevant to every niche.
pub const MEI_ACCOUNTS: &[&str] = &[
    "sebrae",
    "raphafalcaof",
    "redemulherempreendedora",
    "contabilizei",
];

/// First path segments on instagram.com that are not profiles.
pub const IGNORED_SEGMENTS: &[&str] = &[
    "p",
    "reel",
    "reels",
    "explore",
    "stories",
    "accounts",
    "directory",
    "about",
    "legal",
    "developer",
    "help",
    "privacy",
    "terms",
    "tags",
    "instagram",
    "popular",
    "search",
    "tv",
    "static",
    "web",
];

pub fn find_niche(name: &str) -> Option<&'static Niche> {
    NICHES.iter().find(|niche| niche.name == name)
}

pub fn niche_names() -> Vec<&'static str> {
    NICHES.iter().map(|niche| niche.name).collect()
}

impl Niche {
    pub fn is_seed(&self, username: &str) -> bool {
        self.seeds
            .iter()
            .any(|seed| seed.eq_ignore_ascii_case(username))
    }

    pub fn hashtag_url(hashtag: &str) -> String {
        format!("https://www.instagram.com/explore/tags/{hashtag}/")
    }
}

pub fn is_mei_account(username: &str) -> bool {
    MEI_ACCOUNTS.contains(&username)
}

pub fn is_ignored_segment(username: &str) -> bool {
    IGNORED_SEGMENTS.contains(&username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_niche_has_enough_keywords_and_seeds() {
        for niche in NICHES {
            assert!(niche.keywords.len() >= 4, "{}", niche.name);
            assert!(niche.seeds.len() >= 3, "{}", niche.name);
            assert!(!niche.hashtags.is_empty(), "{}", niche.name);
        }
    }

    #[test]
    fn niches_are_looked_up_by_name() {
        assert_eq!(find_niche("nails").map(|n| n.name), Some("nails"));
        assert!(find_niche("padaria").is_none());
        assert_eq!(niche_names().len(), 6);
    }

    #[test]
    fn seed_match_ignores_case() {
        let niche = find_niche("confeitaria").unwrap();
        assert!(niche.is_seed("BrunaRebelo"));
        assert!(!niche.is_seed("sebrae"));
        assert!(is_mei_account("sebrae"));
        assert!(is_ignored_segment("reels"));
    }
}
