//! Protocol command handling

use std::io::Write;
use anyhow::{bail, ensure, Context, Result};
use indoc::indoc;
use tracing::debug;

use crate::{
    core::{Coord, Game},
    engine::{Engine, SearchOptions},
};

use super::command::Command;

const HELP: &str = indoc! {"
    draughts                      identify the engine
    isready                       check the engine is alive
    position startpos | fen <f>   set up a position
    move <sq> <sq> [<sq>...]      move for the side to move, e.g. move 6B 5C
    endturn                       hand the move to the other side
    go [depth n] [movetime ms] [nodes n]
                                  let the engine reply and end the turn
    setoption name <n> value <v>  strictmode | player | depth
    display                       print the board
    getfen                        print the position text
    eval                          static evaluation for the side to move
    quit                          exit
"};

/// Whether the command loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Quit,
}

fn report_winner(engine: &Engine, out: &mut impl Write) -> Result<()> {
    if let Some(winner) = engine.winner() {
        writeln!(out, "info result winner {}", winner)?;
    }
    Ok(())
}

/// Handle a protocol command, writing replies to `out`
pub fn handle_command(cmd: &Command, engine: &mut Engine, out: &mut impl Write) -> Result<Status> {
    let args = &cmd.args;
    debug!(command = cmd.name, ?args, "handling command");

    match cmd.name {
        "draughts" => {
            writeln!(out, "id name Draughts")?;
            writeln!(out, "option name strictmode type bool default false")?;
            writeln!(out, "option name player type combo default minimax var minimax var random")?;
            writeln!(out, "option name depth type spin default {}", engine.options.depth)?;
            writeln!(out, "draughtsok")?;
        }
        "isready" => {
            writeln!(out, "readyok")?;
        }
        "setoption" => {
            ensure!(args.len() == 4 && args[0] == "name" && args[2] == "value",
                "invalid setoption command");

            engine.set_option(args[1], args[3])?;
        }
        "position" => {
            ensure!(!args.is_empty(), "position command requires an argument");

            match args[0] {
                "startpos" => engine.reset_game(),
                "fen" if args.len() >= 2 => {
                    let fen = args[1..].join(" ");
                    engine.set_game(Game::from_fen(&fen)?);
                }
                _ => bail!("invalid position command")
            }
        }
        "move" => {
            let path = args.iter()
                .map(|s| s.parse::<Coord>())
                .collect::<Result<Vec<_>>>()
                .context("invalid move")?;

            engine.do_move(&path)?;
            report_winner(engine, out)?;
        }
        "endturn" => {
            engine.end_turn();
        }
        "go" => {
            let search_options = args.join(" ").parse::<SearchOptions>()?;

            match engine.go(&search_options) {
                Some(result) => {
                    writeln!(out, "info depth {} score {:.2} nodes {} time {}",
                        result.depth, result.score, result.nodes, result.elapsed.as_millis())?;
                    writeln!(out, "bestmove {}", result.best_move)?;
                    report_winner(engine, out)?;
                }
                None => writeln!(out, "bestmove none")?,
            }
        }
        "display" => {
            write!(out, "{}", engine.game)?;
        }
        "getfen" => {
            writeln!(out, "{}", engine.game.to_fen()?)?;
        }
        "eval" => {
            writeln!(out, "info eval {:.2}", engine.eval())?;
        }
        "help" => {
            write!(out, "{}", HELP)?;
        }
        "quit" => {
            return Ok(Status::Quit);
        }
        name => {
            bail!("Unknown command: {}", name);
        }
    }

    Ok(Status::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::parse_command;

    fn run(engine: &mut Engine, line: &str) -> Result<String> {
        let mut out = Vec::new();
        let cmd = parse_command(line).context("empty command")?;
        handle_command(&cmd, engine, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_handshake() {
        let mut engine = Engine::new();
        let reply = run(&mut engine, "draughts").unwrap();
        assert!(reply.starts_with("id name Draughts"));
        assert!(reply.ends_with("draughtsok\n"));
        assert_eq!(run(&mut engine, "isready").unwrap(), "readyok\n");
    }

    #[test]
    fn test_move_and_getfen() {
        let mut engine = Engine::new();
        run(&mut engine, "move 6B 5C").unwrap();
        let fen = run(&mut engine, "getfen").unwrap();
        assert!(fen.contains("/2o7/"));
        assert!(fen.trim_end().ends_with(" 0"));

        run(&mut engine, "endturn").unwrap();
        assert!(run(&mut engine, "getfen").unwrap().trim_end().ends_with(" 1"));
    }

    #[test]
    fn test_bad_move_is_reported() {
        let mut engine = Engine::new();
        let err = run(&mut engine, "move 6B 4D").unwrap_err();
        assert!(format!("{:#}", err).contains("attack failed"));
        assert!(run(&mut engine, "move 6B").is_err());
        assert!(run(&mut engine, "move 6B 5Z").is_err());
    }

    #[test]
    fn test_go_reports_winner() {
        let mut engine = Engine::new();
        run(&mut engine, "position fen 0/0/0/0/0/4x5/3o6/0/0/0 1").unwrap();
        let reply = run(&mut engine, "go depth 2").unwrap();
        assert!(reply.contains("bestmove 6D 4F"));
        assert!(reply.contains("info result winner White"));
    }

    #[test]
    fn test_go_without_moves() {
        let mut engine = Engine::new();
        run(&mut engine, "position fen 0/0/0/0/0/0/0/2x7/1x8/o9 1").unwrap();
        assert_eq!(run(&mut engine, "go").unwrap(), "bestmove none\n");
    }

    #[test]
    fn test_setoption() {
        let mut engine = Engine::new();
        run(&mut engine, "setoption name depth value 2").unwrap();
        assert_eq!(engine.options.depth, 2);
        assert!(run(&mut engine, "setoption name depth 2").is_err());
    }

    #[test]
    fn test_unknown_and_quit() {
        let mut engine = Engine::new();
        assert!(run(&mut engine, "fly").is_err());

        let cmd = parse_command("quit").unwrap();
        let status = handle_command(&cmd, &mut engine, &mut Vec::new()).unwrap();
        assert_eq!(status, Status::Quit);
    }
}
