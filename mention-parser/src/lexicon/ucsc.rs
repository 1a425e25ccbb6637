//! Built-in UCSC department table

/// Canonical department codes listed in the registrar catalog.
pub(crate) const DEPARTMENTS: &[&str] = &[
    "acen", "ams", "anth", "aplx", "art", "artg", "astr", "bioc", "bioe", "biol", "bme", "chem",
    "chin", "clei", "clni", "clte", "cmmu", "cmpe", "cmpm", "cmps", "cowl", "cres", "crwn", "danm",
    "eart", "econ", "educ", "ee", "eeb", "envs", "film", "fmst", "fren", "game", "germ", "gree",
    "havc", "hebr", "his", "hisc", "ital", "japn", "jwst", "krsg", "laad", "lals", "latn", "lgst",
    "ling", "lit", "ltcr", "ltel", "ltfr", "ltge", "ltgr", "ltin", "ltit", "ltmo", "ltpr", "ltsp",
    "ltwl", "math", "mcdb", "merr", "metx", "musc", "oaks", "ocea", "phil", "phye", "phys", "poli",
    "port", "prtr", "psyc", "punj", "russ", "scic", "socd", "socy", "span", "sphs", "stev", "thea",
    "tim", "ucdc", "writ", "yidd",
];

/// Informal codes students write instead of the catalog code.
pub(crate) const ALIASES: &[(&str, &str)] = &[("cs", "cmps"), ("ce", "cmpe")];

/// The literature page lists several departments, one heading per sub-name.
pub(crate) const LITERATURE_PAGE: (&str, &[(&str, &str)]) = (
    "lit",
    &[
        ("Literature", "lit"),
        ("Creative Writing", "ltcr"),
        ("English-Language Literatures", "ltel"),
        ("French Literature", "ltfr"),
        ("German Literature", "ltge"),
        ("Greek Literature", "ltgr"),
        ("Latin Literature", "ltin"),
        ("Italian Literature", "ltit"),
        ("Modern Literary Studies", "ltmo"),
        ("Pre- and Early Modern Literature", "ltpr"),
        ("Spanish/Latin American/Latino Literatures", "ltsp"),
        ("World Literature and Cultural Studies", "ltwl"),
    ],
);
