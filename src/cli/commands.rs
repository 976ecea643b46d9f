//! Console command parsing.

use crate::error::{BookError, BookResult};

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    /// Replace `old` (or the first phone when `old` is `None`) with `new`.
    Change {
        name: String,
        old: Option<String>,
        new: String,
    },
    Phone {
        name: String,
    },
    Birthday {
        name: String,
    },
    Delete {
        name: String,
    },
    Search {
        term: String,
    },
    ShowAll,
    Export,
    Exit,
}

const ADD_USAGE: &str = "add <name> <phone> [YYYY-MM-DD]";
const CHANGE_USAGE: &str = "change <name> [<old phone>] <new phone>";
const PHONE_USAGE: &str = "phone <name>";
const BIRTHDAY_USAGE: &str = "birthday <name>";
const DELETE_USAGE: &str = "delete <name>";
const SEARCH_USAGE: &str = "search <name or phone>";

impl Command {
    /// Parse one line of input.
    ///
    /// Keywords are case-insensitive; arguments are whitespace separated
    /// and kept verbatim. Blank lines parse to `Ok(None)`.
    pub fn parse(line: &str) -> BookResult<Option<Self>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match keyword.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => match args {
                [name, phone, rest @ ..] => Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    birthday: rest.first().map(|b| b.to_string()),
                },
                _ => return Err(missing("add", ADD_USAGE)),
            },
            "change" => match args {
                [name, old, new, ..] => Self::Change {
                    name: name.to_string(),
                    old: Some(old.to_string()),
                    new: new.to_string(),
                },
                [name, new] => Self::Change {
                    name: name.to_string(),
                    old: None,
                    new: new.to_string(),
                },
                _ => return Err(missing("change", CHANGE_USAGE)),
            },
            "phone" => Self::Phone {
                name: first_arg(args, "phone", PHONE_USAGE)?,
            },
            "birthday" => Self::Birthday {
                name: first_arg(args, "birthday", BIRTHDAY_USAGE)?,
            },
            "delete" => Self::Delete {
                name: first_arg(args, "delete", DELETE_USAGE)?,
            },
            "search" if !args.is_empty() => Self::Search {
                term: args.join(" "),
            },
            "search" => return Err(missing("search", SEARCH_USAGE)),
            "show" if is_word(args.first(), "all") => Self::ShowAll,
            "good" if is_word(args.first(), "bye") => Self::Exit,
            "close" | "exit" | "." => Self::Exit,
            "export" => Self::Export,
            _ => return Err(BookError::UnknownCommand(line.trim().to_string())),
        };

        Ok(Some(command))
    }
}

fn missing(command: &'static str, usage: &'static str) -> BookError {
    BookError::MissingArguments { command, usage }
}

fn first_arg(args: &[&str], command: &'static str, usage: &'static str) -> BookResult<String> {
    args.first()
        .map(|arg| arg.to_string())
        .ok_or_else(|| missing(command, usage))
}

fn is_word(token: Option<&&str>, word: &str) -> bool {
    token.is_some_and(|t| t.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t").unwrap(), None);
    }

    #[test]
    fn test_simple_keywords() {
        assert_eq!(parse("hello"), Command::Hello);
        assert_eq!(parse("HeLLo"), Command::Hello);
        assert_eq!(parse("show all"), Command::ShowAll);
        assert_eq!(parse("SHOW ALL"), Command::ShowAll);
        assert_eq!(parse("export"), Command::Export);
    }

    #[test]
    fn test_exit_forms() {
        for line in ["good bye", "Good Bye", "close", "exit", "EXIT", ".", "  exit  "] {
            assert_eq!(parse(line), Command::Exit, "{line:?}");
        }
    }

    #[test]
    fn test_add() {
        assert_eq!(
            parse("add John 1112223333"),
            Command::Add {
                name: "John".to_string(),
                phone: "1112223333".to_string(),
                birthday: None,
            }
        );
        assert_eq!(
            parse("ADD John 1112223333 1990-05-17"),
            Command::Add {
                name: "John".to_string(),
                phone: "1112223333".to_string(),
                birthday: Some("1990-05-17".to_string()),
            }
        );
    }

    #[test]
    fn test_arguments_keep_case() {
        assert_eq!(
            parse("phone JoHn"),
            Command::Phone {
                name: "JoHn".to_string()
            }
        );
    }

    #[test]
    fn test_change_forms() {
        assert_eq!(
            parse("change John 4445556666"),
            Command::Change {
                name: "John".to_string(),
                old: None,
                new: "4445556666".to_string(),
            }
        );
        assert_eq!(
            parse("change John 1112223333 4445556666"),
            Command::Change {
                name: "John".to_string(),
                old: Some("1112223333".to_string()),
                new: "4445556666".to_string(),
            }
        );
    }

    #[test]
    fn test_single_name_commands() {
        assert_eq!(
            parse("birthday John"),
            Command::Birthday {
                name: "John".to_string()
            }
        );
        assert_eq!(
            parse("delete John"),
            Command::Delete {
                name: "John".to_string()
            }
        );
    }

    #[test]
    fn test_search_joins_terms() {
        assert_eq!(
            parse("search john   doe"),
            Command::Search {
                term: "john doe".to_string()
            }
        );
    }

    #[test]
    fn test_missing_arguments() {
        for line in ["add", "add John", "change John", "phone", "birthday", "delete", "search"] {
            match Command::parse(line) {
                Err(BookError::MissingArguments { .. }) => {}
                other => panic!("{line:?}: expected MissingArguments, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_commands() {
        for line in ["hi", "show", "show everything", "good", "good night", "remove John"] {
            match Command::parse(line) {
                Err(BookError::UnknownCommand(text)) => assert_eq!(text, line),
                other => panic!("{line:?}: expected UnknownCommand, got {other:?}"),
            }
        }
    }
}
