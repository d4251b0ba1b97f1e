use crate::domain::model::ProductId;
use crate::utils::error::CartError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add(ProductId),
    Remove(ProductId),
    Confirm,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let verb = parts
            .next()
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| command_error(input, "empty command"))?;

        let command = match verb.as_str() {
            "add" | "a" => Command::Add(parse_id(input, parts.next())?),
            "remove" | "rm" | "r" => Command::Remove(parse_id(input, parts.next())?),
            "confirm" => Command::Confirm,
            "show" | "ls" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(command_error(input, &format!("unknown command '{}'", other))),
        };

        if parts.next().is_some() {
            return Err(command_error(input, "too many arguments"));
        }
        Ok(command)
    }
}

fn parse_id(input: &str, raw: Option<&str>) -> Result<ProductId, CartError> {
    let raw = raw.ok_or_else(|| command_error(input, "missing product id"))?;
    raw.parse()
        .map_err(|_| command_error(input, &format!("'{}' is not a product id", raw)))
}

fn command_error(input: &str, reason: &str) -> CartError {
    CartError::CommandError {
        input: input.trim().to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("add 1".parse::<Command>().unwrap(), Command::Add(1));
        assert_eq!("  ADD   12 ".parse::<Command>().unwrap(), Command::Add(12));
        assert_eq!("remove 3".parse::<Command>().unwrap(), Command::Remove(3));
        assert_eq!("rm 3".parse::<Command>().unwrap(), Command::Remove(3));
        assert_eq!("Confirm".parse::<Command>().unwrap(), Command::Confirm);
        assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "   ", "add", "add x", "add -1", "remove 1 2", "checkout"] {
            match bad.parse::<Command>() {
                Err(CartError::CommandError { .. }) => {}
                other => panic!("expected command error for {:?}, got {:?}", bad, other),
            }
        }
    }
}
