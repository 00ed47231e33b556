/// Everything a shell can ask of the game. Shells translate their own input
/// (typed text, buttons, key presses) into one of these and hand it to
/// [`Session::handle`](crate::Session::handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Take(String),
    Use(String),
    Examine(String),
    Look,
    Inventory,
    Nudge(Nudge),
    NewGame,
    Help,
    Quit,
    /// A known verb without its object; carries the question to ask back.
    Incomplete(&'static str),
    Unknown(String),
}

/// One step of the player marker on the pickup field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

impl Nudge {
    pub fn parse(word: &str) -> Option<Nudge> {
        match word {
            "up" => Some(Nudge::Up),
            "down" => Some(Nudge::Down),
            "left" => Some(Nudge::Left),
            "right" => Some(Nudge::Right),
            _ => None,
        }
    }

    pub fn delta(self, step: i32) -> (i32, i32) {
        match self {
            Nudge::Up => (0, -step),
            Nudge::Down => (0, step),
            Nudge::Left => (-step, 0),
            Nudge::Right => (step, 0),
        }
    }
}

impl Command {
    /// Interpret a line of player input. Matching is done on the lowercased,
    /// whitespace-normalised text.
    pub fn parse(input: &str) -> Command {
        let lower = input
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ")
            .to_lowercase();

        match lower.as_str() {
            "quit" | "exit" => return Command::Quit,
            "look" | "examine" | "l" => return Command::Look,
            "inventory" | "inv" | "i" => return Command::Inventory,
            "help" | "?" => return Command::Help,
            "new" | "new game" | "reset" | "restart" => return Command::NewGame,
            _ => {}
        }

        let (verb, rest) = match lower.split_once(' ') {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (lower.as_str(), ""),
        };

        match verb {
            "go" | "move" | "walk" => object_or(rest, "Go where?", Command::Go),
            "take" | "get" => object_or(rest, "Take what?", Command::Take),
            "pick" => match rest.strip_prefix("up") {
                Some(obj) if obj.is_empty() || obj.starts_with(' ') => {
                    object_or(obj.trim(), "Pick up what?", Command::Take)
                }
                _ => Command::Unknown(lower.clone()),
            },
            "use" => object_or(rest, "Use what?", Command::Use),
            "examine" | "x" => object_or(rest, "Examine what?", Command::Examine),
            "look" => match rest.strip_prefix("at") {
                Some(obj) if obj.is_empty() || obj.starts_with(' ') => {
                    object_or(obj.trim(), "Look at what?", Command::Examine)
                }
                _ => Command::Unknown(lower.clone()),
            },
            "step" => match Nudge::parse(rest) {
                Some(nudge) => Command::Nudge(nudge),
                None => Command::Incomplete("Step which way? (up, down, left, right)"),
            },
            _ => Command::Unknown(lower.clone()),
        }
    }
}

fn object_or(rest: &str, question: &'static str, make: fn(String) -> Command) -> Command {
    if rest.is_empty() {
        Command::Incomplete(question)
    } else {
        make(rest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_commands_ignore_case() {
        assert_eq!(Command::parse("QUIT"), Command::Quit);
        assert_eq!(Command::parse(" Exit "), Command::Quit);
        assert_eq!(Command::parse("Look"), Command::Look);
        assert_eq!(Command::parse("examine"), Command::Look);
        assert_eq!(Command::parse("INVENTORY"), Command::Inventory);
        assert_eq!(Command::parse("new  game"), Command::NewGame);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn verbs_with_objects() {
        assert_eq!(Command::parse("take Sword"), Command::Take("sword".into()));
        assert_eq!(Command::parse("get old  map"), Command::Take("old map".into()));
        assert_eq!(Command::parse("pick up key"), Command::Take("key".into()));
        assert_eq!(Command::parse("go North"), Command::Go("north".into()));
        assert_eq!(Command::parse("use lamp"), Command::Use("lamp".into()));
        assert_eq!(Command::parse("x lamp"), Command::Examine("lamp".into()));
        assert_eq!(Command::parse("look at lamp"), Command::Examine("lamp".into()));
        assert_eq!(Command::parse("step left"), Command::Nudge(Nudge::Left));
    }

    #[test]
    fn verbs_without_objects_ask_back() {
        assert_eq!(Command::parse("take"), Command::Incomplete("Take what?"));
        assert_eq!(Command::parse("go"), Command::Incomplete("Go where?"));
        assert_eq!(Command::parse("pick up"), Command::Incomplete("Pick up what?"));
        assert!(matches!(Command::parse("step sideways"), Command::Incomplete(_)));
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(Command::parse("north"), Command::Unknown("north".into()));
        assert_eq!(Command::parse("look around"), Command::Unknown("look around".into()));
        assert_eq!(Command::parse("picky"), Command::Unknown("picky".into()));
        assert_eq!(Command::parse("look atlas"), Command::Unknown("look atlas".into()));
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    }

    #[test]
    fn nudge_deltas() {
        assert_eq!(Nudge::Up.delta(20), (0, -20));
        assert_eq!(Nudge::Right.delta(20), (20, 0));
    }
}
