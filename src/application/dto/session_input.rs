use crate::search::state::ViewEvent;

/// Something the user did in the search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Replace the search field contents
    Type(String),
    SelectForm(String),
    SelectStrength(String),
    SelectPacking(String),
}

impl UserAction {
    pub fn into_event(self) -> ViewEvent {
        match self {
            UserAction::Type(query) => ViewEvent::QueryChanged(query),
            UserAction::SelectForm(form) => ViewEvent::FormSelected(form),
            UserAction::SelectStrength(strength) => ViewEvent::StrengthSelected(strength),
            UserAction::SelectPacking(packing) => ViewEvent::PackingSelected(packing),
        }
    }
}

/// One line of interactive input.
///
/// A plain line replaces the query. Lines starting with `:` are commands
/// (`:form X`, `:strength X`, `:packing X`, `:quit`); `::` escapes a query
/// that really starts with a colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Action(UserAction),
    Quit,
    Invalid(String),
}

impl SessionInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(literal) = line.strip_prefix("::") {
            return SessionInput::Action(UserAction::Type(format!(":{}", literal)));
        }

        let Some(command) = line.strip_prefix(':') else {
            return SessionInput::Action(UserAction::Type(line.to_string()));
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command, ""),
        };

        match name {
            "q" | "quit" | "exit" => SessionInput::Quit,
            "form" | "strength" | "packing" if argument.is_empty() => {
                SessionInput::Invalid(format!(":{} needs a value, e.g. ':{} <name>'", name, name))
            }
            "form" => SessionInput::Action(UserAction::SelectForm(argument.to_string())),
            "strength" => SessionInput::Action(UserAction::SelectStrength(argument.to_string())),
            "packing" => SessionInput::Action(UserAction::SelectPacking(argument.to_string())),
            other => SessionInput::Invalid(format!(
                "Unknown command ':{}'. Available: :form, :strength, :packing, :quit",
                other
            )),
        }
    }
}
