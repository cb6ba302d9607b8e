// src/matching/aliases.rs - Static alias dictionary for place-name normalization
//
// All keys are lowercase. Canonical forms must not themselves contain a key of
// a later expansion stage, since each stage runs exactly once.

/// Abbreviations written with a trailing period, expanded before anything else.
pub const PERIOD_ABBREVIATIONS: &[(&str, &str)] = &[
    ("st", "saint"),
    ("ste", "sainte"),
    ("mt", "mount"),
    ("co", "company"),
    ("ft", "fort"),
    ("pt", "point"),
    ("dr", "doctor"),
    ("bros", "brothers"),
    ("inc", "incorporated"),
    ("corp", "corporation"),
    ("assn", "association"),
    ("dept", "department"),
    ("hosp", "hospital"),
    ("sta", "station"),
    ("jct", "junction"),
    ("ave", "avenue"),
    ("rd", "road"),
    ("blvd", "boulevard"),
    ("univ", "university"),
    ("mfg", "manufacturing"),
    ("no", "number"),
    ("bldg", "building"),
    ("natl", "national"),
    ("hwy", "highway"),
];

/// Multi-word phrases. Matched whole-phrase; longer phrases win over shorter
/// ones regardless of their position in this table.
pub const PHRASE_ALIASES: &[(&str, &str)] = &[
    // Railroads
    ("rail road", "railroad"),
    ("rail way", "railway"),
    ("b & o", "baltimore and ohio"),
    ("c & o", "chesapeake and ohio"),
    ("d & h", "delaware and hudson"),
    ("d l & w", "delaware lackawanna and western"),
    ("n & w", "norfolk and western"),
    ("n y central", "new york central"),
    ("train station", "station"),
    ("train depot", "station"),
    ("railway station", "railroad station"),
    ("rail station", "railroad station"),
    ("passenger station", "station"),
    ("passenger depot", "station"),
    ("freight house", "freight station"),
    ("freight depot", "freight station"),
    ("round house", "roundhouse"),
    ("engine house", "roundhouse"),
    ("signal tower", "interlocking tower"),
    ("switch tower", "interlocking tower"),
    ("car barn", "carbarn"),
    ("trolley barn", "carbarn"),
    ("street car", "streetcar"),
    ("el station", "elevated station"),
    // Schools
    ("h s", "high school"),
    ("jr high", "junior high"),
    ("grammar school", "elementary school"),
    ("grade school", "elementary school"),
    ("primary school", "elementary school"),
    ("school house", "schoolhouse"),
    ("reform school", "reformatory"),
    ("training school", "reformatory"),
    // Health and welfare
    ("insane asylum", "state hospital"),
    ("lunatic asylum", "state hospital"),
    ("mental hospital", "psychiatric hospital"),
    ("psych center", "psychiatric center"),
    ("tb hospital", "tuberculosis sanatorium"),
    ("tb sanatorium", "tuberculosis sanatorium"),
    ("poor farm", "county home"),
    ("poor house", "county home"),
    ("county poorhouse", "county home"),
    ("alms house", "almshouse"),
    ("orphan asylum", "orphanage"),
    ("childrens home", "orphanage"),
    ("old age home", "nursing home"),
    ("retirement home", "nursing home"),
    ("funeral parlor", "funeral home"),
    ("work house", "workhouse"),
    // Justice
    ("state prison", "penitentiary"),
    ("state penitentiary", "penitentiary"),
    ("correctional facility", "prison"),
    ("corr facility", "prison"),
    ("court house", "courthouse"),
    // Civic
    ("fire house", "firehouse"),
    ("fire station", "firehouse"),
    ("fire hall", "firehouse"),
    ("police dept", "police department"),
    ("p o", "post office"),
    ("meeting house", "meetinghouse"),
    ("light house", "lighthouse"),
    ("life saving station", "lifesaving station"),
    // Industry
    ("ware house", "warehouse"),
    ("power house", "powerhouse"),
    ("power plant", "power station"),
    ("generating station", "power station"),
    ("steam plant", "power station"),
    ("grist mill", "gristmill"),
    ("flour mill", "gristmill"),
    ("grain mill", "gristmill"),
    ("saw mill", "sawmill"),
    ("steel works", "steelworks"),
    ("iron works", "ironworks"),
    ("glass works", "glassworks"),
    ("brick works", "brickworks"),
    ("gas works", "gasworks"),
    ("water works", "waterworks"),
    ("pumping station", "pumphouse"),
    ("pump house", "pumphouse"),
    ("ice house", "icehouse"),
    ("gate house", "gatehouse"),
    ("lime kiln", "limekiln"),
    ("coal breaker", "breaker"),
    ("dry dock", "drydock"),
    // Commerce and leisure
    ("shopping center", "mall"),
    ("shopping mall", "mall"),
    ("dept store", "department store"),
    ("movie theater", "theater"),
    ("movie theatre", "theater"),
    ("drive in", "drive-in"),
    ("theme park", "amusement park"),
    ("motor inn", "motel"),
    ("motor lodge", "motel"),
    ("motor court", "motel"),
];

/// Single-word abbreviations and variant spellings, expanded token by token.
pub const WORD_ALIASES: &[(&str, &str)] = &[
    // Railroads
    ("prr", "pennsylvania railroad"),
    ("nycrr", "new york central railroad"),
    ("nyc&stl", "new york chicago and saint louis"),
    ("b&o", "baltimore and ohio"),
    ("c&o", "chesapeake and ohio"),
    ("d&h", "delaware and hudson"),
    ("dl&w", "delaware lackawanna and western"),
    ("n&w", "norfolk and western"),
    ("lvrr", "lehigh valley railroad"),
    ("drgw", "denver and rio grande western"),
    ("atsf", "atchison topeka and santa fe"),
    ("rr", "railroad"),
    ("ry", "railway"),
    ("rwy", "railway"),
    ("sta", "station"),
    ("stn", "station"),
    ("depot", "station"),
    ("jct", "junction"),
    ("junc", "junction"),
    ("xing", "crossing"),
    ("yd", "yard"),
    ("term", "terminal"),
    ("frt", "freight"),
    ("twr", "tower"),
    // Streets and landforms
    ("st", "street"),
    ("ave", "avenue"),
    ("av", "avenue"),
    ("blvd", "boulevard"),
    ("rd", "road"),
    ("hwy", "highway"),
    ("pkwy", "parkway"),
    ("ln", "lane"),
    ("dr", "drive"),
    ("ct", "court"),
    ("pl", "place"),
    ("sq", "square"),
    ("ter", "terrace"),
    ("cir", "circle"),
    ("tpke", "turnpike"),
    ("rte", "route"),
    ("rt", "route"),
    ("fwy", "freeway"),
    ("expy", "expressway"),
    ("mt", "mount"),
    ("mtn", "mountain"),
    ("ft", "fort"),
    ("pt", "point"),
    ("pk", "park"),
    ("isl", "island"),
    ("lk", "lake"),
    ("crk", "creek"),
    ("riv", "river"),
    ("spg", "spring"),
    ("spgs", "springs"),
    ("hts", "heights"),
    ("vly", "valley"),
    ("vlg", "village"),
    ("twp", "township"),
    ("co", "county"),
    ("cty", "county"),
    ("bch", "beach"),
    ("hbr", "harbor"),
    ("harbour", "harbor"),
    ("br", "bridge"),
    ("brg", "bridge"),
    ("tnl", "tunnel"),
    ("viad", "viaduct"),
    ("trl", "trail"),
    ("gdn", "garden"),
    ("gdns", "gardens"),
    ("grv", "grove"),
    ("res", "reservoir"),
    // Compass points
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
    ("ne", "northeast"),
    ("nw", "northwest"),
    ("se", "southeast"),
    ("sw", "southwest"),
    ("upr", "upper"),
    ("lwr", "lower"),
    // States
    ("ny", "new york"),
    ("nj", "new jersey"),
    ("pa", "pennsylvania"),
    ("penna", "pennsylvania"),
    ("penn", "pennsylvania"),
    ("md", "maryland"),
    ("wv", "west virginia"),
    ("nc", "north carolina"),
    ("sc", "south carolina"),
    ("ri", "rhode island"),
    ("nh", "new hampshire"),
    ("vt", "vermont"),
    ("mass", "massachusetts"),
    ("conn", "connecticut"),
    ("calif", "california"),
    ("mich", "michigan"),
    ("minn", "minnesota"),
    ("tenn", "tennessee"),
    ("wisc", "wisconsin"),
    // Institutions
    ("hosp", "hospital"),
    ("sch", "school"),
    ("schl", "school"),
    ("hs", "high school"),
    ("jhs", "junior high school"),
    ("elem", "elementary"),
    ("univ", "university"),
    ("coll", "college"),
    ("acad", "academy"),
    ("inst", "institute"),
    ("sem", "seminary"),
    ("sanitarium", "sanatorium"),
    ("sanitorium", "sanatorium"),
    ("psych", "psychiatric"),
    ("infirm", "infirmary"),
    ("orph", "orphanage"),
    ("vets", "veterans"),
    ("ctr", "center"),
    ("cntr", "center"),
    ("centre", "center"),
    ("bldg", "building"),
    ("bldgs", "buildings"),
    ("hq", "headquarters"),
    ("dept", "department"),
    ("assn", "association"),
    ("assoc", "association"),
    ("natl", "national"),
    ("intl", "international"),
    ("mem", "memorial"),
    ("meml", "memorial"),
    ("mus", "museum"),
    ("lib", "library"),
    ("fd", "fire department"),
    ("vfd", "volunteer fire department"),
    ("pd", "police department"),
    ("po", "post office"),
    ("afb", "air force base"),
    ("afs", "air force station"),
    ("nas", "naval air station"),
    ("uscg", "coast guard"),
    ("govt", "government"),
    ("admin", "administration"),
    // Churches and cemeteries
    ("ch", "church"),
    ("chr", "church"),
    ("cath", "cathedral"),
    ("meth", "methodist"),
    ("presb", "presbyterian"),
    ("bapt", "baptist"),
    ("luth", "lutheran"),
    ("epis", "episcopal"),
    ("cong", "congregational"),
    ("evang", "evangelical"),
    ("cem", "cemetery"),
    ("cemy", "cemetery"),
    // Buildings and business
    ("mfg", "manufacturing"),
    ("mfr", "manufacturer"),
    ("corp", "corporation"),
    ("inc", "incorporated"),
    ("ltd", "limited"),
    ("bros", "brothers"),
    ("whse", "warehouse"),
    ("pwr", "power"),
    ("plt", "plant"),
    ("elec", "electric"),
    ("mkt", "market"),
    ("htl", "hotel"),
    ("theatre", "theater"),
    ("thtr", "theater"),
    ("apts", "apartments"),
    ("apt", "apartment"),
    ("mnr", "manor"),
    ("&", "and"),
];
