#[derive(Debug, PartialEq)]
pub enum CongaCommand {
    End(String),
    Front(String),
    Behind(String, String),
    Before(String, String),
    Spot(String, usize),
    Leave(usize),
    Find(String),
    Ends,
    Line,
    Save(String),
    Load(String),
    Help,
    Quit,
}

impl CongaCommand {
    pub fn from_tokens(tokens: &[&str]) -> Option<CongaCommand> {
        match tokens[0] {
            "end" => Some(CongaCommand::End(tokens.get(1)?.to_string())),
            "front" => Some(CongaCommand::Front(tokens.get(1)?.to_string())),
            "behind" => Some(CongaCommand::Behind(
                tokens.get(1)?.to_string(),
                tokens.get(2)?.to_string(),
            )),
            "before" => Some(CongaCommand::Before(
                tokens.get(1)?.to_string(),
                tokens.get(2)?.to_string(),
            )),
            "spot" => Some(CongaCommand::Spot(
                tokens.get(1)?.to_string(),
                tokens.get(2)?.parse().ok()?,
            )),
            "leave" => Some(CongaCommand::Leave(tokens.get(1)?.parse().ok()?)),
            "find" => Some(CongaCommand::Find(tokens.get(1)?.to_string())),
            "ends" => Some(CongaCommand::Ends),
            "line" => Some(CongaCommand::Line),
            "save" => Some(CongaCommand::Save(tokens.get(1)?.to_string())),
            "load" => Some(CongaCommand::Load(tokens.get(1)?.to_string())),
            "h" | "help" => Some(CongaCommand::Help),
            "q" | "quit" => Some(CongaCommand::Quit),
            // Default case:
            _ => None,
        }
    }
}
