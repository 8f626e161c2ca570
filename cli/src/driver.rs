use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tinysweep_core::Game;

const PROMPT: &str = "Enter row and column (e.g., 1 2): ";
const MALFORMED: &str = "Please enter two numbers, e.g. 1 2.";

/// Whitespace-separated input tokens, a move may span several lines.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads one coordinate, `Ok(None)` at end of input.
    fn next_coord(&mut self) -> io::Result<Option<Result<isize, String>>> {
        Ok(self
            .next_token()?
            .map(|token| token.parse().map_err(|_| token)))
    }

    fn discard_pending(&mut self) {
        self.pending.clear();
    }
}

#[derive(Debug, PartialEq)]
enum Move {
    /// 0-indexed `(row, col)`
    Reveal(isize, isize),
    Malformed(String),
    EndOfInput,
}

/// Reads a 1-indexed `column row` pair and converts it to 0-indexed `(row, col)`.
fn read_move<R: BufRead>(tokens: &mut Tokens<R>) -> io::Result<Move> {
    let col = match tokens.next_coord()? {
        None => return Ok(Move::EndOfInput),
        Some(Err(token)) => {
            tokens.discard_pending();
            return Ok(Move::Malformed(token));
        }
        Some(Ok(col)) => col,
    };
    let row = match tokens.next_coord()? {
        None => return Ok(Move::EndOfInput),
        Some(Err(token)) => {
            tokens.discard_pending();
            return Ok(Move::Malformed(token));
        }
        Some(Ok(row)) => row,
    };
    Ok(Move::Reveal(row.saturating_sub(1), col.saturating_sub(1)))
}

/// Plays until a mine is hit or `input` runs out.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> anyhow::Result<()> {
    let mut tokens = Tokens::new(input);

    while !game.game_over() {
        write!(out, "{}", game.display_board())?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let (row, col) = match read_move(&mut tokens)? {
            Move::Reveal(row, col) => (row, col),
            Move::Malformed(token) => {
                log::debug!("Malformed move token: {:?}", token);
                writeln!(out, "{MALFORMED}")?;
                continue;
            }
            Move::EndOfInput => {
                writeln!(out)?;
                log::info!("End of input, leaving game");
                return Ok(());
            }
        };

        match game.play(row, col) {
            Ok(outcome) => {
                writeln!(out, "{outcome}")?;
                if outcome.ends_game() {
                    break;
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    write!(out, "{}", game.display_board())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinysweep_core::Board;

    fn play_script(game: &mut Game, script: &str) -> String {
        let mut out = Vec::new();
        run(game, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn moves(script: &str) -> Vec<Move> {
        let mut tokens = Tokens::new(script.as_bytes());
        let mut moves = Vec::new();
        loop {
            let next = read_move(&mut tokens).unwrap();
            if next == Move::EndOfInput {
                return moves;
            }
            moves.push(next);
        }
    }

    fn corner_game() -> Game {
        Game::from_board(Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap())
    }

    #[test]
    fn move_is_column_then_row() {
        assert_eq!(moves("3 1\n"), vec![Move::Reveal(0, 2)]);
        assert_eq!(moves("  1   1  "), vec![Move::Reveal(0, 0)]);
        assert_eq!(moves("0 5"), vec![Move::Reveal(4, -1)]);
    }

    #[test]
    fn move_may_span_lines() {
        assert_eq!(moves("1\n2\n"), vec![Move::Reveal(1, 0)]);
        assert_eq!(moves("\n\n2\n\n1"), vec![Move::Reveal(0, 1)]);
    }

    #[test]
    fn several_moves_on_one_line() {
        assert_eq!(
            moves("1 2 2 1\n"),
            vec![Move::Reveal(1, 0), Move::Reveal(0, 1)]
        );
    }

    #[test]
    fn malformed_token_drops_rest_of_line() {
        assert_eq!(
            moves("a b\n1 x 3\n2 2\n"),
            vec![
                Move::Malformed("a".to_owned()),
                Move::Malformed("x".to_owned()),
                Move::Reveal(1, 1),
            ]
        );
    }

    #[test]
    fn dangling_coordinate_is_end_of_input() {
        assert_eq!(moves("1"), vec![]);
    }

    #[test]
    fn loss_ends_loop_and_shows_mine() {
        let mut game = corner_game();
        let out = play_script(&mut game, "2 1\n1 1\n2 2\n");

        assert!(game.game_over());
        assert!(out.contains("Cell is a number. Keep playing."));
        assert!(out.contains("Game Over! You hit a mine."));
        assert!(out.ends_with("Game Over! You hit a mine.\n* 1 \n- - \n"));
        // third move is never consumed
        assert_eq!(game.revealed_count(), 2);
    }

    #[test]
    fn split_move_is_played() {
        let mut game = corner_game();
        let out = play_script(&mut game, "2\n2\n");

        assert!(out.contains("Cell is a number. Keep playing."));
        assert!(!out.contains(MALFORMED));
        assert!(game.board()[(1, 1)].is_revealed());
    }

    #[test]
    fn rejections_are_reported() {
        let mut game = corner_game();
        let out = play_script(&mut game, "2 2\n2 2\n0 1\nhello\n");

        assert!(out.contains("Cell already revealed. Try again."));
        assert!(out.contains("Invalid move. Try again."));
        assert!(out.contains(MALFORMED));
        assert!(!game.game_over());
        assert_eq!(game.revealed_count(), 1);
    }

    #[test]
    fn end_of_input_stops_without_error() {
        let mut game = corner_game();
        let out = play_script(&mut game, "");

        assert_eq!(out, format!("- - \n- - \n{PROMPT}\n"));
        assert!(!game.game_over());
    }
}
