//! Locale word pools backing the built-in catalog.
//!
//! Each locale is a set of static word lists the generators sample from.
//! Lookup is by BCP 47-ish tag; region suffixes are ignored (`de-AT`
//! selects the German pools) and unknown tags fall back to English.

/// Static word pools for one locale.
pub struct LocaleData {
    pub tag: &'static str,
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub streets: &'static [&'static str],
    pub countries: &'static [&'static str],
    pub words: &'static [&'static str],
    pub free_email_domains: &'static [&'static str],
    pub tlds: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
    pub job_titles: &'static [&'static str],
}

pub static EN: LocaleData = LocaleData {
    tag: "en",
    first_names: &[
        "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda",
        "William", "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
        "Thomas", "Sarah", "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
        "Anthony", "Margaret", "Mark", "Betty", "Donald", "Sandra", "Steven", "Ashley",
        "Paul", "Dorothy", "Andrew", "Kimberly", "Joshua", "Emily", "Kenneth", "Donna",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
        "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
        "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
        "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
    ],
    cities: &[
        "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton",
        "Fairview", "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Dover",
        "Oxford", "Jackson", "Burlington", "Manchester", "Milton", "Newport", "Auburn",
    ],
    streets: &[
        "Main Street", "Oak Avenue", "Maple Drive", "Cedar Lane", "Park Road",
        "Washington Boulevard", "Lake View", "Hillcrest Avenue", "Sunset Drive",
        "Elm Street", "Pine Street", "River Road", "Church Street", "Highland Avenue",
    ],
    countries: &[
        "United States", "Canada", "United Kingdom", "Australia", "Ireland",
        "New Zealand", "Germany", "France", "Spain", "Italy", "Netherlands", "Sweden",
        "Norway", "Japan", "Brazil", "Mexico", "India", "South Africa",
    ],
    words: &[
        "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
        "sed", "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua",
        "enim", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco",
        "laboris", "nisi", "aliquip", "commodo", "consequat", "duis", "aute", "irure",
    ],
    free_email_domains: &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"],
    tlds: &["com", "net", "org", "io", "dev"],
    company_suffixes: &["Inc", "LLC", "Group", "and Sons", "Ltd"],
    job_titles: &[
        "Software Engineer", "Product Manager", "Data Analyst", "Account Executive",
        "Operations Coordinator", "Marketing Specialist", "Research Scientist",
        "Customer Success Manager", "Financial Controller", "Solutions Architect",
    ],
};

pub static DE: LocaleData = LocaleData {
    tag: "de",
    first_names: &[
        "Lukas", "Anna", "Leon", "Lena", "Finn", "Emma", "Jonas", "Mia", "Paul",
        "Hannah", "Felix", "Laura", "Maximilian", "Lea", "Elias", "Marie", "Noah",
        "Sophie", "Ben", "Julia", "Moritz", "Clara", "Jan", "Katharina",
    ],
    last_names: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner",
        "Becker", "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter",
        "Klein", "Wolf", "Schröder", "Neumann", "Schwarz", "Zimmermann", "Braun",
        "Krüger", "Hofmann", "Hartmann",
    ],
    cities: &[
        "Berlin", "Hamburg", "München", "Köln", "Frankfurt", "Stuttgart",
        "Düsseldorf", "Leipzig", "Dortmund", "Essen", "Bremen", "Dresden",
        "Hannover", "Nürnberg", "Duisburg", "Bochum",
    ],
    streets: &[
        "Hauptstraße", "Schulstraße", "Gartenstraße", "Bahnhofstraße", "Dorfstraße",
        "Bergstraße", "Birkenweg", "Lindenstraße", "Kirchplatz", "Waldweg",
        "Ringstraße", "Amselweg",
    ],
    countries: &[
        "Deutschland", "Österreich", "Schweiz", "Frankreich", "Italien", "Spanien",
        "Niederlande", "Belgien", "Polen", "Dänemark", "Schweden", "Norwegen",
    ],
    words: &[
        "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
        "sed", "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua",
    ],
    free_email_domains: &["gmail.com", "web.de", "gmx.de", "t-online.de"],
    tlds: &["de", "com", "net", "org", "eu"],
    company_suffixes: &["GmbH", "AG", "KG", "und Söhne", "e.V."],
    job_titles: &[
        "Softwareentwickler", "Produktmanager", "Datenanalyst", "Vertriebsleiter",
        "Projektkoordinator", "Marketingreferent", "Wissenschaftler",
        "Kundenberater", "Finanzbuchhalter", "Systemarchitekt",
    ],
};

/// Resolve a locale tag to its word pools, falling back to English.
pub fn lookup(tag: &str) -> &'static LocaleData {
    let base = tag
        .split(['-', '_'])
        .next()
        .unwrap_or(tag)
        .to_ascii_lowercase();
    match base.as_str() {
        "de" => &DE,
        _ => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_tag() {
        assert_eq!(lookup("en").tag, "en");
        assert_eq!(lookup("de").tag, "de");
    }

    #[test]
    fn test_lookup_region_suffix() {
        assert_eq!(lookup("de-AT").tag, "de");
        assert_eq!(lookup("de_CH").tag, "de");
        assert_eq!(lookup("en-GB").tag, "en");
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_english() {
        assert_eq!(lookup("fr").tag, "en");
        assert_eq!(lookup("").tag, "en");
        assert_eq!(lookup("klingon").tag, "en");
    }

    #[test]
    fn test_pools_are_non_empty() {
        for locale in [&EN, &DE] {
            assert!(!locale.first_names.is_empty());
            assert!(!locale.last_names.is_empty());
            assert!(!locale.cities.is_empty());
            assert!(!locale.streets.is_empty());
            assert!(!locale.words.is_empty());
            assert!(!locale.free_email_domains.is_empty());
            assert!(!locale.tlds.is_empty());
        }
    }
}
