use crate::error::{Error, Result};
use std::str::FromStr;

pub const MENU_TEXT: &str = "Select from the following options:
1. Generate Graph
2. Display Network Topology
3. Display Network Shortest-Path Summary
4. Find Shortest Path Between Two Nodes
0. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit = 0,
    Generate = 1,
    Display = 2,
    Summary = 3,
    Route = 4,
}

impl TryFrom<i64> for MenuChoice {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(MenuChoice::Exit),
            1 => Ok(MenuChoice::Generate),
            2 => Ok(MenuChoice::Display),
            3 => Ok(MenuChoice::Summary),
            4 => Ok(MenuChoice::Route),
            other => Err(Error::InvalidSelection(other)),
        }
    }
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| Error::NotANumber(trimmed.to_string()))?;
        MenuChoice::try_from(value)
    }
}

/// Parses a node count for the generate action: a positive integer.
pub fn parse_node_count(s: &str) -> Result<usize> {
    let trimmed = s.trim();
    match trimmed.parse::<usize>() {
        Ok(0) | Err(_) => Err(Error::InvalidNodeCount(trimmed.to_string())),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Generate);
        assert_eq!(" 0\n".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert_eq!("4".parse::<MenuChoice>().unwrap(), MenuChoice::Route);
        assert_eq!(MenuChoice::Summary as i64, 3);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "abc".parse::<MenuChoice>(),
            Err(Error::NotANumber(s)) if s == "abc"
        ));
        assert!(matches!(
            "7".parse::<MenuChoice>(),
            Err(Error::InvalidSelection(7))
        ));
        assert!(matches!(
            "-1".parse::<MenuChoice>(),
            Err(Error::InvalidSelection(-1))
        ));
    }

    #[test]
    fn test_node_count() {
        assert_eq!(parse_node_count("12\n").unwrap(), 12);
        assert!(matches!(parse_node_count("0"), Err(Error::InvalidNodeCount(_))));
        assert!(matches!(parse_node_count("-3"), Err(Error::InvalidNodeCount(_))));
        assert!(matches!(parse_node_count("five"), Err(Error::InvalidNodeCount(_))));
    }
}
