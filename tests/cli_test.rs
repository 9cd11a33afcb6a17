#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use herogrid::ui::render_board;
    use herogrid::{parse_move, Board, CliAgent, Direction, MoveRequest, Player, Position, DEFAULT_FORMATION};

    #[test]
    fn test_cli_agent_instantiation() {
        let _agent = CliAgent::new();
    }

    #[test]
    fn test_parse_direction_move() {
        assert_eq!(
            parse_move("0 2 F", Player::A),
            Some(MoveRequest::step(Player::A, Position::new(0, 2), Direction::Forward))
        );
        assert_eq!(
            parse_move("  4 1   fl \n", Player::B),
            Some(MoveRequest::step(Player::B, Position::new(4, 1), Direction::ForwardLeft))
        );
    }

    #[test]
    fn test_parse_cell_move() {
        assert_eq!(
            parse_move("4 0 2 0", Player::B),
            Some(MoveRequest::to_cell(Player::B, Position::new(4, 0), Position::new(2, 0)))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "0 2", "0 2 X", "a b F", "0 2 F extra stuff", "-1 0 F"] {
            assert_eq!(parse_move(input, Player::A), None, "{:?}", input);
        }
    }

    #[test]
    fn test_render_initial_board() {
        let board = Board::with_formations(&DEFAULT_FORMATION, &DEFAULT_FORMATION).unwrap();
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].ends_with("A1 A2 AP A2 A1"));
        assert!(lines[3].ends_with(".. .. .. .. .."));
        assert!(lines[5].ends_with("B1 B2 BP B2 B1"));
    }
}
