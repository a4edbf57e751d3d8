//! Unit tests for mars-robot.

use mars_core::{Command, GridPos, Heading, RobotId};

use crate::Robot;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn robot(x: i32, y: i32, heading: Heading) -> Robot {
    Robot::new(RobotId(0), GridPos::new(x, y), heading, vec![])
}

fn robot_with(x: i32, y: i32, heading: Heading, line: &str) -> Robot {
    Robot::new(RobotId(0), GridPos::new(x, y), heading, Command::parse_sequence(line))
}

// ── Primitives ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod primitives {
    use super::*;
    use crate::RobotError;

    #[test]
    fn forward_moves_one_axis() {
        let cases = [
            (Heading::East,  GridPos::new(3, 2)),
            (Heading::West,  GridPos::new(1, 2)),
            (Heading::North, GridPos::new(2, 3)),
            (Heading::South, GridPos::new(2, 1)),
        ];
        for (heading, expected) in cases {
            let mut r = robot(2, 2, heading);
            r.move_forward().unwrap();
            assert_eq!(r.pos, expected, "heading {heading}");
            assert_eq!(r.heading, heading);
        }
    }

    #[test]
    fn backward_undoes_forward() {
        for heading in Heading::CARDINALS {
            let mut r = robot(4, 4, heading);
            r.move_forward().unwrap();
            r.move_backward().unwrap();
            assert_eq!(r.pos, GridPos::new(4, 4));
        }
    }

    #[test]
    fn turns_do_not_move() {
        let mut r = robot(1, 1, Heading::North);
        r.turn_right().unwrap();
        assert_eq!(r.heading, Heading::East);
        r.turn_left().unwrap();
        r.turn_left().unwrap();
        assert_eq!(r.heading, Heading::West);
        assert_eq!(r.pos, GridPos::new(1, 1));
    }

    #[test]
    fn forward_below_origin_goes_negative() {
        let mut r = robot(0, 0, Heading::South);
        r.move_forward().unwrap();
        assert_eq!(r.pos, GridPos::new(0, -1));
    }

    #[test]
    fn unknown_heading_fails_every_primitive() {
        let mut r = robot(1, 1, Heading::Unknown('Q'));
        assert_eq!(r.turn_right(), Err(RobotError::UnsupportedDirection('Q')));
        assert_eq!(r.turn_left(), Err(RobotError::UnsupportedDirection('Q')));
        assert_eq!(r.move_forward(), Err(RobotError::UnsupportedDirection('Q')));
        assert_eq!(r.move_backward(), Err(RobotError::UnsupportedDirection('Q')));
        assert_eq!(r.pos, GridPos::new(1, 1));
        assert_eq!(r.heading, Heading::Unknown('Q'));
    }

    #[test]
    fn execute_dispatches() {
        let mut r = robot(0, 0, Heading::East);
        r.execute(Command::Forward).unwrap();
        r.execute(Command::Left).unwrap();
        r.execute(Command::Forward).unwrap();
        assert_eq!(r.pos, GridPos::new(1, 1));
        assert_eq!(r.heading, Heading::North);
        r.execute(Command::Right).unwrap();
        assert_eq!(r.heading, Heading::East);
    }

    #[test]
    fn execute_rejects_unknown_command() {
        let mut r = robot(0, 0, Heading::East);
        assert_eq!(r.execute(Command::Unknown('B')), Err(RobotError::UnsupportedCommand('B')));
        assert_eq!(r.pos, GridPos::new(0, 0));
        assert_eq!(r.heading, Heading::East);
    }

    #[test]
    fn forward_past_i32_range_fails_in_place() {
        let mut r = robot(0, i32::MIN, Heading::South);
        assert_eq!(
            r.move_forward(),
            Err(RobotError::PositionOverflow(GridPos::new(0, i32::MIN)))
        );
        assert_eq!(r.pos, GridPos::new(0, i32::MIN));

        let mut r = robot(i32::MAX, 0, Heading::West);
        assert_eq!(
            r.move_backward(),
            Err(RobotError::PositionOverflow(GridPos::new(i32::MAX, 0)))
        );
        assert_eq!(r.pos, GridPos::new(i32::MAX, 0));
        assert_eq!(r.heading, Heading::West);
    }

    #[test]
    fn mark_lost_reverts_last_step() {
        let mut r = robot_with(3, 3, Heading::North, "FFF");
        r.next_command();
        r.move_forward().unwrap();
        r.mark_lost().unwrap();
        assert!(r.lost);
        assert!(r.is_done());
        assert_eq!(r.pos, GridPos::new(3, 3));
        assert!(r.remaining().is_empty());
    }
}

// ── Instruction cursor ───────────────────────────────────────────────────────

#[cfg(test)]
mod cursor {
    use super::*;

    #[test]
    fn yields_in_order_then_stops() {
        let mut r = robot_with(0, 0, Heading::North, "LRF");
        assert_eq!(r.next_command(), Some((0, Command::Left)));
        assert_eq!(r.next_command(), Some((1, Command::Right)));
        assert_eq!(r.remaining(), &[Command::Forward]);
        assert_eq!(r.next_command(), Some((2, Command::Forward)));
        assert_eq!(r.next_command(), None);
        assert!(r.is_done());
        assert_eq!(r.consumed(), 3);
    }

    #[test]
    fn empty_instructions_are_done() {
        let r = robot(0, 0, Heading::North);
        assert!(r.is_done());
    }

    #[test]
    fn finish_drops_remaining() {
        let mut r = robot_with(0, 0, Heading::North, "FFFF");
        r.next_command();
        r.finish();
        assert!(r.is_done());
        assert_eq!(r.next_command(), None);
        assert!(!r.lost);
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod display {
    use super::*;

    #[test]
    fn active_robot() {
        assert_eq!(robot(3, 1, Heading::South).to_string(), "3 1 S");
    }

    #[test]
    fn lost_robot() {
        let mut r = robot(4, 1, Heading::North);
        r.lost = true;
        assert_eq!(r.to_string(), "4 1 N LOST");
    }

    #[test]
    fn status_matches_robot() {
        let r = robot(-2, 0, Heading::Unknown('Q'));
        let status = r.status();
        assert_eq!((status.pos, status.heading, status.lost), (GridPos::new(-2, 0), r.heading, false));
        assert_eq!(status.to_string(), r.to_string());
        assert_eq!(status.to_string(), "-2 0 Q");
    }
}

// ── Laws ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod laws {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn right_then_left_restores_state(
            h in prop::sample::select(Heading::CARDINALS.to_vec()),
            x in 0i32..=50,
            y in 0i32..=50,
        ) {
            let mut r = robot(x, y, h);
            r.turn_right().unwrap();
            r.turn_left().unwrap();
            prop_assert_eq!(r, robot(x, y, h));
        }

        #[test]
        fn four_right_turns_are_identity(h in prop::sample::select(Heading::CARDINALS.to_vec())) {
            let mut r = robot(0, 0, h);
            for _ in 0..4 {
                r.execute(Command::Right).unwrap();
            }
            prop_assert_eq!(r.heading, h);
        }
    }
}
