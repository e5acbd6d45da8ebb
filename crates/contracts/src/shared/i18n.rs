//! UI chrome labels.
//!
//! Lookup falls back to English, then to the key itself, so a missing
//! translation never breaks rendering.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
        }
    }

    /// Accepts region tags, e.g. `hi-IN`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::En, Language::Hi]
    }
}

const EN: &[(&str, &str)] = &[
    ("select_role", "Select a portal"),
    ("dashboard", "Dashboard"),
    ("management", "Management"),
    ("users", "Users"),
    ("stations", "Stations"),
    ("workshops", "Workshops"),
    ("add_workshop", "Add Workshop"),
    ("products", "Products"),
    ("orders", "Orders"),
    ("vendor_registration", "Vendor Registration"),
    ("add_supplier", "Add Supplier"),
    ("account", "Account"),
    ("profile", "Profile"),
    ("change_password", "Change Password"),
    ("settings", "Settings"),
    ("logout", "Logout"),
    ("login", "Login"),
    ("login_as", "Login as"),
    ("register", "Register"),
    ("back_to_login", "Back to login"),
    ("username", "Username"),
    ("password", "Password"),
    ("search", "Search"),
    ("next", "Next"),
    ("back", "Back"),
    ("submit", "Submit"),
    ("theme", "Theme"),
    ("light", "Light"),
    ("dark", "Dark"),
    ("font_size", "Font size"),
    ("language", "Language"),
    ("no_records", "No records found"),
    ("loading", "Loading..."),
    ("full_name", "Full name"),
    ("email", "Email"),
    ("phone", "Phone"),
    ("confirm_password", "Confirm password"),
    ("current_password", "Current password"),
    ("new_password", "New password"),
    ("create_account", "Create account"),
    ("save", "Save"),
    ("reset", "Reset"),
    ("close", "Close"),
    ("actions", "Actions"),
    ("status", "Status"),
    ("review", "Review"),
    ("submitted_forms", "Submitted forms"),
    ("submitted", "Submitted successfully"),
    ("reference", "Reference"),
    ("start_over", "Start over"),
];

const HI: &[(&str, &str)] = &[
    ("select_role", "पोर्टल चुनें"),
    ("dashboard", "डैशबोर्ड"),
    ("management", "प्रबंधन"),
    ("users", "उपयोगकर्ता"),
    ("stations", "स्टेशन"),
    ("workshops", "वर्कशॉप"),
    ("add_workshop", "वर्कशॉप जोड़ें"),
    ("products", "उत्पाद"),
    ("orders", "ऑर्डर"),
    ("account", "खाता"),
    ("profile", "प्रोफ़ाइल"),
    ("change_password", "पासवर्ड बदलें"),
    ("settings", "सेटिंग्स"),
    ("logout", "लॉग आउट"),
    ("login", "लॉग इन"),
    ("username", "उपयोगकर्ता नाम"),
    ("password", "पासवर्ड"),
    ("search", "खोजें"),
    ("next", "आगे"),
    ("back", "पीछे"),
    ("submit", "जमा करें"),
    ("theme", "थीम"),
    ("light", "हल्का"),
    ("dark", "गहरा"),
    ("font_size", "फ़ॉन्ट आकार"),
    ("language", "भाषा"),
    ("no_records", "कोई रिकॉर्ड नहीं मिला"),
    ("email", "ईमेल"),
    ("phone", "फ़ोन"),
    ("save", "सहेजें"),
    ("close", "बंद करें"),
    ("status", "स्थिति"),
];

static CATALOG: Lazy<HashMap<Language, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    HashMap::from([
        (Language::En, EN.iter().copied().collect()),
        (Language::Hi, HI.iter().copied().collect()),
    ])
});

/// Translate `key` into `lang`.
pub fn translate(lang: Language, key: &str) -> String {
    let lookup = |l: Language| CATALOG.get(&l).and_then(|m| m.get(key)).copied();
    lookup(lang)
        .or_else(|| lookup(Language::En))
        .unwrap_or(key)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Language::En, "logout"), "Logout");
        assert_eq!(translate(Language::Hi, "logout"), "लॉग आउट");
    }

    #[test]
    fn test_missing_translation_falls_back_to_english() {
        assert_eq!(translate(Language::Hi, "login_as"), "Login as");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(translate(Language::Hi, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_parse_language_codes() {
        assert_eq!(Language::parse("hi-IN"), Some(Language::Hi));
        assert_eq!(Language::parse("EN"), Some(Language::En));
        assert_eq!(Language::parse("fr"), None);
    }
}
