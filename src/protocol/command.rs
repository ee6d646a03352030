//! Command line splitting

/// A protocol command: the keyword and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

/// Parse one input line, ignoring blank lines and `#` comments
pub fn parse_command(input: &str) -> Option<Command<'_>> {
    let input = input.split('#').next().unwrap_or_default().trim();
    let mut parts = input.split_whitespace();
    let name = parts.next()?;

    Some(Command {
        name,
        args: parts.collect(),
    })
}
