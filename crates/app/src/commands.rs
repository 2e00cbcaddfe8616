use std::path::PathBuf;

use engine::{EngineError, MoneyCents, TransactionKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Register { username: String, password: String },
    Login { username: String, password: String },
    Add {
        kind: TransactionKind,
        category: String,
        amount: MoneyCents,
    },
    /// `set budget` and `edit budget`; only the confirmation differs.
    SetBudget {
        category: String,
        amount: MoneyCents,
        edit: bool,
    },
    Stats { categories: Vec<String> },
    Transfer { to: String, amount: MoneyCents },
    Export { path: PathBuf },
    Import { path: PathBuf },
    ListCategories,
    Logout,
    Help,
    Exit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Type must be 'income' or 'expense'. Usage: add <income|expense> <category> <amount>")]
    InvalidKind,
    #[error(transparent)]
    Amount(#[from] EngineError),
}

const REGISTER_USAGE: &str = "register <username> <password>";
const LOGIN_USAGE: &str = "login <username> <password>";
const ADD_USAGE: &str = "add <income|expense> <category> <amount>";
const SET_USAGE: &str = "set budget <category> <amount>";
const EDIT_USAGE: &str = "edit budget <category> <amount>";
const TRANSFER_USAGE: &str = "transfer <to_user> <amount>";
const EXPORT_USAGE: &str = "export <file.json>";
const IMPORT_USAGE: &str = "import <file.json>";

/// Parses one input line.
///
/// Tokens are separated by whitespace; the action is case-insensitive, the
/// arguments are taken verbatim.
pub(crate) fn parse(input: &str) -> Result<Command, ParseError> {
    let mut tokens = input.split_whitespace();
    let action = tokens.next().ok_or(ParseError::Empty)?.to_lowercase();
    let args: Vec<&str> = tokens.collect();

    match action.as_str() {
        "register" => {
            let [username, password] = exact(&args, REGISTER_USAGE)?;
            Ok(Command::Register {
                username: username.to_string(),
                password: password.to_string(),
            })
        }
        "login" => {
            let [username, password] = exact(&args, LOGIN_USAGE)?;
            Ok(Command::Login {
                username: username.to_string(),
                password: password.to_string(),
            })
        }
        "add" => {
            let [kind, category, amount] = exact(&args, ADD_USAGE)?;
            let kind = match kind.to_lowercase().as_str() {
                "income" => TransactionKind::Income,
                "expense" => TransactionKind::Expense,
                _ => return Err(ParseError::InvalidKind),
            };
            Ok(Command::Add {
                kind,
                category: category.to_string(),
                amount: amount.parse()?,
            })
        }
        "set" | "edit" => {
            let edit = action == "edit";
            let usage = if edit { EDIT_USAGE } else { SET_USAGE };
            let Some((&"budget", rest)) = args.split_first() else {
                return Err(ParseError::Usage(usage));
            };
            let [category, amount] = exact(rest, usage)?;
            Ok(Command::SetBudget {
                category: category.to_string(),
                amount: amount.parse()?,
                edit,
            })
        }
        "stats" => {
            let categories = match args.split_first() {
                Some((&"categories", rest)) => rest,
                _ => &args[..],
            };
            Ok(Command::Stats {
                categories: categories.iter().map(ToString::to_string).collect(),
            })
        }
        "transfer" => {
            let [to, amount] = exact(&args, TRANSFER_USAGE)?;
            Ok(Command::Transfer {
                to: to.to_string(),
                amount: amount.parse()?,
            })
        }
        "export" => {
            let path = args.first().ok_or(ParseError::Usage(EXPORT_USAGE))?;
            Ok(Command::Export {
                path: PathBuf::from(path),
            })
        }
        "import" => {
            let path = args.first().ok_or(ParseError::Usage(IMPORT_USAGE))?;
            Ok(Command::Import {
                path: PathBuf::from(path),
            })
        }
        "list" => Ok(Command::ListCategories),
        "logout" => Ok(Command::Logout),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(ParseError::Unknown(action)),
    }
}

fn exact<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> Result<[&'a str; N], ParseError> {
    <[&str; N]>::try_from(args).map_err(|_| ParseError::Usage(usage))
}
