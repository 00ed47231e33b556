use serde::Serialize;

use crate::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum OutputBlock {
    /// Result of a command that went through.
    Text(String),
    /// A command the model turned down (wrong way, item not here...).
    Refusal(String),
    /// Session-level notices such as a new game starting.
    Event(String),
}

impl OutputBlock {
    pub fn text(&self) -> &str {
        match self {
            OutputBlock::Text(s) | OutputBlock::Refusal(s) | OutputBlock::Event(s) => s,
        }
    }
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn refuse(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Refusal(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    /// Routes a model result to `say` or `refuse` by its success flag.
    pub fn outcome(&mut self, outcome: Outcome) {
        if outcome.success {
            self.say(outcome.message);
        } else {
            self.refuse(outcome.message);
        }
    }

    /// All block texts in order; convenient for shells that print plainly.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks.iter().map(OutputBlock::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_messages_are_dropped() {
        let mut out = Output::new();
        out.say("   ");
        out.refuse("");
        out.event("\n");
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn outcome_is_routed_by_success() {
        let mut out = Output::new();
        out.outcome(Outcome::ok("You used the lamp."));
        out.outcome(Outcome::fail("You can't go that way."));
        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Text("You used the lamp.".to_string()),
                OutputBlock::Refusal("You can't go that way.".to_string()),
            ]
        );
        assert_eq!(out.lines(), vec!["You used the lamp.", "You can't go that way."]);
    }

    #[test]
    fn blocks_serialize_with_a_kind_tag() {
        let json = serde_json::to_string(&OutputBlock::Event("New game started!".into())).unwrap();
        assert_eq!(json, r#"{"kind":"event","text":"New game started!"}"#);
    }
}
