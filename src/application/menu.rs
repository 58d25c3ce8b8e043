//! Menu choices offered by the interactive session

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Menu input that matches none of the choices; the session reports it and asks again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid option '{0}', try again")]
pub struct InvalidOption(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddLead,
    AddEmployee,
    PrintStructure,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::AddLead,
        MenuChoice::AddEmployee,
        MenuChoice::PrintStructure,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::AddLead => "1",
            MenuChoice::AddEmployee => "2",
            MenuChoice::PrintStructure => "3",
            MenuChoice::Exit => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddLead => "Add Team Lead (root)",
            MenuChoice::AddEmployee => "Add Employee",
            MenuChoice::PrintStructure => "Print Team Structure",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == key)
            .ok_or_else(|| InvalidOption(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_padded_key_when_parsing_then_selects_choice() {
        assert_eq!(" 3\n".parse::<MenuChoice>().unwrap(), MenuChoice::PrintStructure);
    }

    #[test]
    fn given_unknown_key_when_parsing_then_invalid_option() {
        let err = "5".parse::<MenuChoice>().unwrap_err();
        assert_eq!(err, InvalidOption("5".to_string()));
        assert_eq!(err.to_string(), "invalid option '5', try again");
    }

    #[test]
    fn test_menu_line() {
        assert_eq!(MenuChoice::Exit.to_string(), "4. Exit");
    }
}
