/// What a line typed into the search box asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    /// `/add [word]`; the argument keeps its original case.
    Add(Option<String>),
    List,
    Test,
    Search(String),
}

/// Routes a line either to a command or to a search.
///
/// Only `/add`, `/list` and `/test` are commands (token matched case-insensitively).
/// Any other text, including unknown slash commands, is searched as typed.
pub fn parse(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    if line.starts_with('/') {
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        match &command.to_lowercase()[..] {
            "/add" => {
                let arg = (!arg.is_empty()).then(|| arg.to_string());
                return Input::Add(arg);
            }
            "/list" => return Input::List,
            "/test" => return Input::Test,
            _ => {}
        }
    }
    Input::Search(line.to_string())
}
