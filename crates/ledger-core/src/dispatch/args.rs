//! Flag extraction for dispatcher commands
//!
//! The token list is read once. A recognized flag takes the token right
//! after it as its value, whatever that token looks like; only the first
//! occurrence of each flag counts.

use ledger_fs::path::parent_dir_or_current;

/// Flags understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Output,
    Ledger,
    Dir,
}

impl Flag {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Output => "-o",
            Self::Ledger => "-l",
            Self::Dir => "-d",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "-o" => Some(Self::Output),
            "-l" => Some(Self::Ledger),
            "-d" => Some(Self::Dir),
            _ => None,
        }
    }
}

/// What the token list said about one flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlagValue {
    /// Flag not given
    #[default]
    Absent,
    /// Flag given as the last token, with nothing after it
    Dangling,
    /// Flag followed by a value
    Value(String),
}

impl FlagValue {
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Dangling => None,
        }
    }
}

/// Arguments following the command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    /// First token after the command, used by `index` as its directory
    pub positional: Option<String>,
    pub output: FlagValue,
    pub ledger: FlagValue,
    pub dir: FlagValue,
}

impl CommandArgs {
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut args = Self {
            positional: tokens.first().map(|t| t.as_ref().to_string()),
            ..Self::default()
        };

        for (idx, token) in tokens.iter().enumerate() {
            let Some(flag) = Flag::from_token(token.as_ref()) else {
                continue;
            };
            let slot = args.flag_mut(flag);
            if slot.is_present() {
                continue;
            }
            *slot = match tokens.get(idx + 1) {
                Some(value) => FlagValue::Value(value.as_ref().to_string()),
                None => FlagValue::Dangling,
            };
        }

        args
    }

    pub fn flag(&self, flag: Flag) -> &FlagValue {
        match flag {
            Flag::Output => &self.output,
            Flag::Ledger => &self.ledger,
            Flag::Dir => &self.dir,
        }
    }

    fn flag_mut(&mut self, flag: Flag) -> &mut FlagValue {
        match flag {
            Flag::Output => &mut self.output,
            Flag::Ledger => &mut self.ledger,
            Flag::Dir => &mut self.dir,
        }
    }

    /// Images directory for `ledger`: `-d` when it has a value, otherwise
    /// the ledger's own directory.
    pub fn images_dir_for(&self, ledger: &str) -> String {
        self.dir
            .value()
            .map(str::to_string)
            .unwrap_or_else(|| parent_dir_or_current(ledger))
    }
}
