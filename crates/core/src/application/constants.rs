// User-facing text (Dutch). Printed verbatim.

pub const WELCOME: &str = "Welkom bij Procenten (Nederlandstalige CLI)";
pub const FAREWELL: &str = "Tot ziens!";

pub const MENU_HEADER: &str = "Kies een optie:";
pub const MENU_ENTRIES: [&str; 9] = [
    "0) Overzicht / Theorie (met voorbeelden)",
    "1) Hoeveel is x% van y? (x% * y)",
    "2) Hoeveel % is a van b? (a / b * 100)",
    "3) Gegeven deel en procent -> zoek totaal (deel = pct% van totaal)",
    "4) Verhoog of verlaag een waarde met %",
    "5) Gegeven nieuwe waarde na verandering -> zoek oorspronkelijke waarde",
    "6) Procentuele verandering (van oud naar nieuw)",
    "7) Samengestelde procenten (meerdere procenten achter elkaar)",
    "8) Afsluiten",
];
pub const CHOICE_PROMPT: &str = "Welke optie kies je? ";

// Validation
pub const INVALID_NUMBER: &str =
    "Ongeldige invoer. Voer een getal in (bijv. 12.5 of 12,5). Probeer opnieuw.";
pub const INVALID_OPTION: &str = "Ongeldige optie. Kies 1-8.";
pub const INVALID_DIRECTION: &str = "Ongeldige keuze. Typ v (verhogen) of l (verlagen).";
pub const INVALID_PERCENT_LIST: &str =
    "Ongeldige procentlijst; gebruik komma's en getallen (bijv. 10, -20).";

// Undefined results, one per call site
pub const UNDEFINED_PERCENT_OF_TOTAL: &str = "Kan niet delen door 0 (b is 0).";
pub const UNDEFINED_TOTAL: &str = "Kan geen totaal berekenen met pct = 0.";
pub const UNDEFINED_ORIGINAL: &str = "Kan originele waarde niet berekenen (factor is 0).";
pub const UNDEFINED_PERCENT_CHANGE: &str =
    "Kan geen procentuele verandering berekenen wanneer de oude waarde 0 is.";

// 1) x% van y
pub const PROMPT_X: &str = "Voer x (procent) in: ";
pub const PROMPT_Y: &str = "Voer y (totaal) in: ";

// 2) a van b
pub const PROMPT_A: &str = "Voer a (deel) in: ";
pub const PROMPT_B: &str = "Voer b (totaal) in: ";

// 3) totaal uit deel
pub const PROMPT_PART: &str = "Voer het deel (a) in: ";
pub const PROMPT_PART_PCT: &str = "Voer het percentage (pct) in: ";

// 4) verhogen / verlagen
pub const PROMPT_START_VALUE: &str = "Voer de beginwaarde in: ";
pub const PROMPT_CHANGE_PCT: &str = "Voer het percentage in (bijv. 10 voor 10%): ";
pub const PROMPT_CHANGE_DIRECTION: &str = "Wil je verhogen of verlagen? (v/verh / l/verl): ";

// 5) terugrekenen
pub const PROMPT_NEW_VALUE: &str = "Voer de nieuwe waarde (na verandering) in: ";
pub const PROMPT_CHANGED_PCT: &str =
    "Voer het percentage waarmee veranderd is (bijv. 10 voor 10%): ";
pub const PROMPT_CHANGED_DIRECTION: &str = "Was het een verhoging of verlaging? (v/l): ";

// 6) procentuele verandering
pub const PROMPT_OLD: &str = "Voer de oude waarde in: ";
pub const PROMPT_NEW: &str = "Voer de nieuwe waarde in: ";

// 7) samengestelde procenten
pub const PROMPT_COMPOUND_START: &str = "Voer beginwaarde in: ";
pub const PROMPT_PERCENT_LIST: &str =
    "Voer procenten achtereenvolgens in, gescheiden door komma's (bijv. 10, -20, 5): ";

// Tokens
pub const EXIT_TOKENS: [&str; 4] = ["8", "q", "quit", "exit"];
pub const INCREASE_WORDS: [&str; 4] = ["v", "verhogen", "verhoging", "+"];
pub const DECREASE_WORDS: [&str; 4] = ["l", "verlagen", "verlaging", "-"];
