use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_search::arrayboard::*;
use connect4_search::board::Player;
use connect4_search::config::*;
use connect4_search::search::{Algorithm, Searcher};

fn read_line(stdin: &Stdin, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    stdout().flush()?;
    let mut buffer = String::new();
    stdin.read_line(&mut buffer)?;
    Ok(buffer)
}

fn ask_ai_controlled(stdin: &Stdin, player: Player) -> Result<bool> {
    loop {
        let buffer = read_line(stdin, &format!("Is player {} AI controlled? y/n: ", player.number()))?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_search_config(stdin: &Stdin, player: Player, default: SearchConfig) -> Result<SearchConfig> {
    let algorithm = loop {
        println!("Search algorithms for player {}:", player.number());
        println!("  1) Minimax\n  2) Alpha-beta pruning\n  3) Expectimax");
        let buffer = read_line(
            stdin,
            &format!("Choose an algorithm (blank for {}): ", default.algorithm),
        )?;
        match buffer.trim() {
            "" => break default.algorithm,
            "1" => break Algorithm::Minimax,
            "2" => break Algorithm::AlphaBeta,
            "3" => break Algorithm::Expectimax,
            other => match other.parse::<Algorithm>() {
                Ok(algorithm) => break algorithm,
                Err(err) => println!("{}", err),
            },
        }
    };

    loop {
        let buffer = read_line(
            stdin,
            &format!("Search depth 1-{} (blank for {}): ", MAX_DEPTH, default.depth),
        )?;
        let depth = match buffer.trim() {
            "" => default.depth,
            input => match input.parse::<usize>() {
                Ok(depth) => depth,
                Err(_) => {
                    println!("Invalid number: {}", input);
                    continue;
                }
            },
        };
        match SearchConfig::new(algorithm, depth) {
            Ok(config) => return Ok(config),
            Err(err) => println!("{}", err),
        }
    }
}

fn main() -> Result<()> {
    init_tracing(DEFAULT_LOG_LEVEL)?;

    let mut board = ArrayBoard::new();
    let default_config = SearchConfig::from_env()?;

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose AI control of each player
    let mut ai_players: [Option<Searcher>; 2] = [None, None];
    let mut depths = [default_config.depth; 2];
    for (i, &player) in [Player::One, Player::Two].iter().enumerate() {
        if ask_ai_controlled(&stdin, player)? {
            let config = ask_search_config(&stdin, player, default_config)?;
            ai_players[i] = Some(Searcher::new(config.algorithm, player));
            depths[i] = config.depth;
        }
    }
    let both_ai = ai_players.iter().all(Option::is_some);

    // game loop
    loop {
        board.display()?;

        match board.state {
            GameState::Playing => {
                let player = board.next_player();
                let index = player.number() - 1;

                let next_move = match ai_players[index].as_mut() {
                    // AI player
                    Some(searcher) => {
                        println!("AI is thinking...");
                        stdout().flush()?;

                        // slow down play if both players are AI
                        if both_ai {
                            std::thread::sleep(std::time::Duration::new(3, 0));
                        }

                        let nodes_before = searcher.node_count;
                        let result = searcher.search(&board, depths[index]);
                        match result.column {
                            Some(column) => {
                                println!(
                                    "{} chose column {} (score {:.1}, {} positions searched)",
                                    searcher.algorithm(),
                                    column + 1,
                                    result.score,
                                    searcher.node_count - nodes_before
                                );
                                column + 1
                            }
                            None => {
                                println!("Player {} gives up!", player.number());
                                break;
                            }
                        }
                    }

                    // human player
                    None => {
                        let input_str = read_line(&stdin, "Move input > ")?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    }
                };

                if let Err(err) = board.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
