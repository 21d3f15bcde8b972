#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Board,
    Moves(Option<String>),
    Move(String),
    Click { x: i64, y: i64 },
    Undo,
    Position(Vec<String>),
    Fen,
    Perft(usize),
    SetOption(Vec<String>),
    Help,
    Quit,
    Unknown(String),
}

/// A bare token shaped like `e2e4`.
fn looks_like_move(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 4
        && bytes[0].is_ascii_lowercase()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_lowercase()
        && bytes[3].is_ascii_digit()
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();
    let unknown = || ConsoleCommand::Unknown(trimmed.to_string());

    let cmd = match parts[0] {
        "board" | "d" => ConsoleCommand::Board,
        "moves" => ConsoleCommand::Moves(parts.get(1).map(|v| (*v).to_string())),
        "move" => match parts.get(1) {
            Some(mv) => ConsoleCommand::Move((*mv).to_string()),
            None => unknown(),
        },
        "click" => {
            let coord = |i: usize| parts.get(i).and_then(|v| v.parse::<i64>().ok());
            match (coord(1), coord(2)) {
                (Some(x), Some(y)) => ConsoleCommand::Click { x, y },
                _ => unknown(),
            }
        }
        "undo" | "z" => ConsoleCommand::Undo,
        "position" => ConsoleCommand::Position(owned_parts()),
        "fen" => ConsoleCommand::Fen,
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<usize>().ok()).unwrap_or(1);
            ConsoleCommand::Perft(depth)
        }
        "setoption" => ConsoleCommand::SetOption(owned_parts()),
        "help" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        token if parts.len() == 1 && looks_like_move(token) => {
            ConsoleCommand::Move(token.to_string())
        }
        _ => unknown(),
    };

    Some(cmd)
}

/// Split `setoption name <name...> [value <value...>]` into name and value.
#[must_use]
pub fn parse_setoption(parts: &[String]) -> Option<(String, Option<String>)> {
    if parts.first().map(String::as_str) != Some("setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut in_value = None;

    for part in parts.iter().skip(1) {
        match part.as_str() {
            "name" => in_value = Some(false),
            "value" => in_value = Some(true),
            other => match in_value {
                Some(false) => name_parts.push(other),
                Some(true) => value_parts.push(other),
                None => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };
    Some((name_parts.join(" "), value))
}
