use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use chess_state::board::GameState;
use chess_state::config::RULES_ENV;

fn run_console(args: &[&str], input: &str) -> (String, Option<i32>) {
    let exe = env!("CARGO_BIN_EXE_chess_state");
    let mut child = Command::new(exe)
        .args(args)
        .env_remove(RULES_ENV)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    (String::from_utf8_lossy(&output.stdout).into_owned(), output.status.code())
}

#[test]
fn console_plays_and_undoes_moves() {
    let (stdout, code) = run_console(&[], "e2e4\nmove e7e5\nfen\nundo\nundo\nundo\nquit\n");
    assert_eq!(code, Some(0));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "played e2e4",
            "played e7e5",
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w",
            "undone e7e5",
            "undone e2e4",
            "nothing to undo",
        ]
    );
}

#[test]
fn console_moves_are_candidates_of_the_library() {
    let exe = env!("CARGO_BIN_EXE_chess_state");
    let mut child = Command::new(exe)
        .env_remove(RULES_ENV)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout);

    stdin.write_all(b"position startpos moves e2e4\nmoves\n").unwrap();

    let mut listed = None;
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            break;
        }
        if line.starts_with("moves ") {
            break;
        }
        listed = Some(line);
    }

    stdin.write_all(b"quit\n").unwrap();
    let _ = child.wait();

    let listed = listed.expect("no move list printed");
    let mut game = GameState::new();
    game.apply_move(game.parse_move("e2e4").unwrap());
    let expected: Vec<String> = game.valid_moves().iter().map(|m| m.chess_notation()).collect();
    let printed: Vec<&str> = listed.split_whitespace().collect();
    assert_eq!(printed, expected);
}

#[test]
fn console_rules_flag_and_setoption() {
    let (stdout, _) = run_console(&["--rules", "mirrored"], "perft 2\nsetoption name Rules value legacy\nperft 2\n");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["perft 2 nodes 400", "perft 2 nodes 520"]);
}

#[test]
fn console_reports_errors_without_exiting() {
    let (stdout, code) = run_console(&[], "jump\nposition fen 9/8\nclick 300 420\nclick 300 300\nquit\n");
    assert_eq!(code, Some(0));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "error: Unknown command 'jump'");
    assert!(lines[1].starts_with("error: Invalid FEN"));
    assert_eq!(&lines[2..], ["selected e2", "played e2e4"]);
}

#[test]
fn console_rejects_bad_flags() {
    let (_, code) = run_console(&["--rules", "sideways"], "");
    assert_eq!(code, Some(2));
}

#[test]
fn console_ends_at_end_of_input() {
    let (stdout, code) = run_console(&["--glyphs"], "d\n");
    assert_eq!(code, Some(0));
    assert!(stdout.starts_with("8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜\n"));
    assert!(stdout.ends_with("side White\n"));
}
