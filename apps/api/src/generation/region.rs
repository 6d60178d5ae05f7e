//! Region profiles: market-specific formatting conventions keyed by country code.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionProfile {
    pub code: &'static str,
    pub market_name: &'static str,
    pub phone_format: &'static str,
    pub location_format: &'static str,
    pub companies: &'static [&'static str],
    pub resume_style: &'static str,
}

pub const GLOBAL_CODE: &str = "global";

static REGIONS: &[RegionProfile] = &[
    RegionProfile {
        code: "US",
        market_name: "United States",
        phone_format: "+1 (XXX) XXX-XXXX",
        location_format: "City, State, USA",
        companies: &["Google", "Microsoft", "Amazon", "Meta", "Apple"],
        resume_style: "one-page US résumé, no photo, no date of birth",
    },
    RegionProfile {
        code: "UK",
        market_name: "United Kingdom",
        phone_format: "+44 XXXX XXXXXX",
        location_format: "City, United Kingdom",
        companies: &["Revolut", "Monzo", "Deliveroo", "Arm", "DeepMind"],
        resume_style: "British CV, up to two pages, no photo",
    },
    RegionProfile {
        code: "CA",
        market_name: "Canada",
        phone_format: "+1 (XXX) XXX-XXXX",
        location_format: "City, Province, Canada",
        companies: &["Shopify", "RBC", "Wealthsimple", "OpenText", "Amazon"],
        resume_style: "one-page Canadian résumé, no photo",
    },
    RegionProfile {
        code: "IN",
        market_name: "Indian",
        phone_format: "+91 XXXXXXXXXX",
        location_format: "City, State, India",
        companies: &["TCS", "Infosys", "Flipkart", "Zomato", "Razorpay"],
        resume_style: "ATS-optimized fresher résumé with CGPA",
    },
    RegionProfile {
        code: "DE",
        market_name: "German",
        phone_format: "+49 XXX XXXXXXX",
        location_format: "City, Germany",
        companies: &["SAP", "Siemens", "Zalando", "Bosch", "Delivery Hero"],
        resume_style: "tabular Lebenslauf, reverse chronological",
    },
    RegionProfile {
        code: "AU",
        market_name: "Australian",
        phone_format: "+61 X XXXX XXXX",
        location_format: "City, State, Australia",
        companies: &["Atlassian", "Canva", "Commonwealth Bank", "Telstra", "Afterpay"],
        resume_style: "two-page Australian résumé with referees on request",
    },
    RegionProfile {
        code: "FR",
        market_name: "French",
        phone_format: "+33 X XX XX XX XX",
        location_format: "City, France",
        companies: &["Dassault Systèmes", "Capgemini", "Doctolib", "BlaBlaCar", "Criteo"],
        resume_style: "one-page French CV",
    },
    RegionProfile {
        code: "SG",
        market_name: "Singapore",
        phone_format: "+65 XXXX XXXX",
        location_format: "Singapore",
        companies: &["Grab", "Shopee", "DBS Bank", "Sea Group", "GovTech"],
        resume_style: "concise two-page Singapore résumé",
    },
    RegionProfile {
        code: "AE",
        market_name: "UAE",
        phone_format: "+971 XX XXX XXXX",
        location_format: "City, United Arab Emirates",
        companies: &["Emirates Group", "Careem", "Noon", "e&", "ADNOC"],
        resume_style: "Gulf-style CV with nationality and visa status",
    },
    RegionProfile {
        code: "NL",
        market_name: "Dutch",
        phone_format: "+31 X XXXXXXXX",
        location_format: "City, Netherlands",
        companies: &["Booking.com", "Adyen", "ASML", "Philips", "Mollie"],
        resume_style: "direct, two-page Dutch CV",
    },
    RegionProfile {
        code: "SE",
        market_name: "Swedish",
        phone_format: "+46 XX XXX XX XX",
        location_format: "City, Sweden",
        companies: &["Spotify", "Klarna", "Ericsson", "King", "Volvo Group"],
        resume_style: "modest two-page Swedish CV",
    },
    RegionProfile {
        code: "IE",
        market_name: "Irish",
        phone_format: "+353 XX XXX XXXX",
        location_format: "City, Ireland",
        companies: &["Stripe", "Intercom", "Workday", "Fenergo", "Google Dublin"],
        resume_style: "two-page Irish CV",
    },
    RegionProfile {
        code: "NZ",
        market_name: "New Zealand",
        phone_format: "+64 XX XXX XXXX",
        location_format: "City, New Zealand",
        companies: &["Xero", "Rocket Lab", "Trade Me", "Fisher & Paykel", "Air New Zealand"],
        resume_style: "two-page New Zealand CV",
    },
    RegionProfile {
        code: "JP",
        market_name: "Japanese",
        phone_format: "+81 XX XXXX XXXX",
        location_format: "City, Prefecture, Japan",
        companies: &["Rakuten", "Sony", "Mercari", "LINE Yahoo", "Toyota"],
        resume_style: "rirekisho-compatible résumé with shokumu keirekisho summary",
    },
    RegionProfile {
        code: "BR",
        market_name: "Brazilian",
        phone_format: "+55 XX XXXXX-XXXX",
        location_format: "City, State, Brazil",
        companies: &["Nubank", "iFood", "Mercado Livre", "Stone", "Itaú"],
        resume_style: "one-page Brazilian currículo",
    },
];

static GLOBAL: RegionProfile = RegionProfile {
    code: GLOBAL_CODE,
    market_name: "global",
    phone_format: "+XX XXX XXX XXXX",
    location_format: "City, Country",
    companies: &["Google", "Microsoft", "Amazon", "Accenture", "IBM"],
    resume_style: "international one-page ATS-friendly résumé",
};

impl RegionProfile {
    /// Resolves a country code (case-insensitive) or alias to its profile.
    /// Missing or unknown codes resolve to the global profile.
    pub fn resolve(code: Option<&str>) -> &'static RegionProfile {
        code.and_then(Self::lookup).unwrap_or_else(Self::global)
    }

    /// Strict lookup: `None` for anything that isn't a known code or alias.
    pub fn lookup(code: &str) -> Option<&'static RegionProfile> {
        let code = code.trim();
        let canonical = if code.eq_ignore_ascii_case("india") {
            "IN"
        } else if code.eq_ignore_ascii_case("gb") {
            "UK"
        } else {
            code
        };

        if canonical.eq_ignore_ascii_case(GLOBAL_CODE) {
            return Some(&GLOBAL);
        }

        REGIONS
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(canonical))
    }

    pub fn global() -> &'static RegionProfile {
        &GLOBAL
    }

    pub fn companies_list(&self) -> String {
        self.companies.join(", ")
    }
}
