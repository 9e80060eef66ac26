use crate::error::CliError;

pub const MENU: &str = "\n\nMENU\n\
1. Add new item\n\
2. Sell item\n\
3. Find item\n\
4. Edit item\n\
5. List items\n\
6. Exit\n\
\nEnter your choice: ";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Sell,
    Find,
    Edit,
    List,
    Exit,
}

impl core::str::FromStr for MenuChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidMenuChoice(s.to_string());
        match s.trim().parse::<u8>().map_err(|_| invalid())? {
            1 => Ok(Self::Add),
            2 => Ok(Self::Sell),
            3 => Ok(Self::Find),
            4 => Ok(Self::Edit),
            5 => Ok(Self::List),
            6 => Ok(Self::Exit),
            _ => Err(invalid()),
        }
    }
}
