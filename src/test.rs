#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::arena::openings;
    use crate::arrayboard::ArrayBoard;
    use crate::board::{Board, Player};
    use crate::eval::evaluate;
    use crate::search::{alphabeta, expectimax, minimax, Algorithm, Searcher};

    #[test]
    pub fn deterministic() -> Result<()> {
        for moves in ["", "4453", "151627", "3344557"].iter() {
            let board = ArrayBoard::from_str(moves)?;
            let player = board.next_player();
            for &algorithm in Algorithm::ALL.iter() {
                let first = algorithm.search(player, &board, 3);
                let second = algorithm.search(player, &board, 3);
                assert_eq!(first, second, "{} on '{}'", algorithm, moves);
            }
        }
        Ok(())
    }

    #[test]
    pub fn pruning_keeps_decisions() -> Result<()> {
        let mut boards = Vec::new();
        for opening in openings(1).iter().chain(openings(2).iter()) {
            boards.push(ArrayBoard::from_str(opening)?);
        }
        boards.push(ArrayBoard::from_str("151627")?);
        boards.push(ArrayBoard::from_str("172737")?);

        for board in boards.iter() {
            let player = board.next_player();
            for depth in 1..=4 {
                let plain = minimax(player, board, depth);
                let pruned = alphabeta(player, board, depth);
                assert_eq!(
                    plain.column,
                    pruned.column,
                    "'{}' at depth {}",
                    board.moves(),
                    depth
                );
                // the root is searched with a full window, so its value is exact
                assert_eq!(plain.score, pruned.score);
            }
        }
        Ok(())
    }

    #[test]
    pub fn evaluation_is_zero_sum() -> Result<()> {
        for opening in openings(3).iter() {
            let board = ArrayBoard::from_str(opening)?;
            assert_eq!(
                evaluate(Player::One, &board),
                -evaluate(Player::Two, &board),
                "{}",
                opening
            );
        }
        Ok(())
    }

    #[test]
    pub fn empty_board() -> Result<()> {
        let board = ArrayBoard::new();
        assert_eq!(evaluate(Player::One, &board), 0.0);
        assert_eq!(evaluate(Player::Two, &board), 0.0);

        // the centre column sits on the most lines
        for &algorithm in Algorithm::ALL.iter() {
            let result = algorithm.search(Player::One, &board, 1);
            assert_eq!(result.column, Some(3), "{}", algorithm);
            assert_eq!(result.score, 7.0);
        }
        Ok(())
    }

    #[test]
    pub fn completes_a_line() -> Result<()> {
        //
        //
        //
        //       Y
        //       Y
        // RRR___Y >>> 172737
        let board = ArrayBoard::from_str("172737")?;

        for depth in 1..=4 {
            assert_eq!(minimax(Player::One, &board, depth).column, Some(3));
            assert_eq!(alphabeta(Player::One, &board, depth).column, Some(3));
        }
        for depth in 1..=2 {
            assert_eq!(expectimax(Player::One, &board, depth).column, Some(3));
        }
        // deeper expectimax searches prefer lines of their own against a
        // random opponent over the immediate win
        for depth in 3..=4 {
            let result = expectimax(Player::One, &board, depth);
            assert_eq!(result.column, Some(4), "depth {}", depth);
            assert!(result.score > 1003.0);
        }
        Ok(())
    }

    #[test]
    pub fn blocks_a_threat() -> Result<()> {
        //
        //
        //
        //
        // R
        // RR__YYY >>> 151627
        let board = ArrayBoard::from_str("151627")?;

        for depth in 2..=4 {
            assert_eq!(minimax(Player::One, &board, depth).column, Some(3));
            assert_eq!(alphabeta(Player::One, &board, depth).column, Some(3));
        }
        Ok(())
    }

    #[test]
    pub fn won_board_is_a_leaf() -> Result<()> {
        // player two has won, whoever searches gets no move
        let board = ArrayBoard::from_str("71212121")?;
        assert_eq!(board.who_wins(), Some(Player::Two));

        for &player in [Player::One, Player::Two].iter() {
            for &algorithm in Algorithm::ALL.iter() {
                let mut searcher = Searcher::new(algorithm, player);
                let result = searcher.search(&board, 4);
                assert_eq!(result.column, None);
                assert_eq!(result.score, evaluate(player, &board));
                assert_eq!(searcher.node_count, 1);
            }
        }
        Ok(())
    }

    #[test]
    pub fn node_counts() -> Result<()> {
        let board = ArrayBoard::from_str("4453")?;

        for &algorithm in Algorithm::ALL.iter() {
            let mut searcher = Searcher::new(algorithm, Player::One);
            searcher.search(&board, 2);
            let after_one = searcher.node_count;
            searcher.search(&board, 2);

            // counts accumulate across searches
            assert_eq!(searcher.node_count, 2 * after_one);
        }

        let mut searcher = Searcher::new(Algorithm::Expectimax, Player::One);
        searcher.search(&board, 2);
        // expectimax never prunes
        assert_eq!(searcher.node_count, 1 + 7 + 49);
        Ok(())
    }
}
