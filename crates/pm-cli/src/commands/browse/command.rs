/// One line of input in a `pm browse` session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Follow a navigation link by its literal identifier.
    Nav(String),
    /// Open a record by grid position (1-based), id, or name.
    Open(String),
    Back,
    Search(String),
    Category(String),
    /// Reset search and category.
    Clear,
    /// Print the serialized view-model.
    State,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse a line. Blank lines yield `Ok(None)`.
    ///
    /// Arguments are everything after the first space, untrimmed, so a search
    /// term keeps its inner and trailing whitespace.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return Ok(None);
        }

        let (verb, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        let verb = verb.to_ascii_lowercase();
        let command = match verb.as_str() {
            "home" | "trending" | "about" | "authors" => Self::Nav(verb.clone()),
            "nav" | "go" => Self::Nav(rest.trim().to_string()),
            "open" | "select" => {
                let key = rest.trim();
                if key.is_empty() {
                    anyhow::bail!("usage: open <number|id|name>");
                }
                Self::Open(key.to_string())
            }
            "back" => Self::Back,
            "search" => Self::Search(rest.to_string()),
            "category" | "cat" => {
                let category = rest.trim();
                if category.is_empty() {
                    anyhow::bail!("usage: category <name>");
                }
                Self::Category(category.to_string())
            }
            "clear" => Self::Clear,
            "state" => Self::State,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => anyhow::bail!("unknown command '{other}'; type 'help' for commands"),
        };

        Ok(Some(command))
    }
}

pub const HELP: &str = "\
commands:
  home | trending | about | authors   switch screen
  nav <id>                            follow a link id (e.g. case-studies)
  open <n|id|name>                    open a case study
  back                                leave the current screen
  search <term>                       filter the home grid (empty term clears it)
  category <name>                     filter the home grid by category
  clear                               reset search and category
  state                               print the view state as JSON
  quit                                end the session";
