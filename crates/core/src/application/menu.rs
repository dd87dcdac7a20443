// Menu choices (closed set of actions)

use super::constants::EXIT_TOKENS;

/// Action selected from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Overview,
    PercentOf,
    PercentOfTotal,
    TotalFromPart,
    ChangeByPercent,
    OriginalBeforeChange,
    PercentChange,
    CompoundPercents,
    Exit,
}

impl MenuChoice {
    /// Map a typed token to a choice; `None` for anything unrecognized
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let choice = match token {
            "0" => MenuChoice::Overview,
            "1" => MenuChoice::PercentOf,
            "2" => MenuChoice::PercentOfTotal,
            "3" => MenuChoice::TotalFromPart,
            "4" => MenuChoice::ChangeByPercent,
            "5" => MenuChoice::OriginalBeforeChange,
            "6" => MenuChoice::PercentChange,
            "7" => MenuChoice::CompoundPercents,
            _ if EXIT_TOKENS.contains(&token) => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}
