// tests/properties.rs
use glam::IVec2;
use martian_robots::{Grid, Orientation, Robot, drive};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::North),
        Just(Orientation::East),
        Just(Orientation::South),
        Just(Orientation::West),
    ]
}

fn instructions() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('L'), Just('R'), Just('F')], 0..60)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn four_turns_close_the_cycle(o in orientation()) {
        let mut left = Robot::new(IVec2::ZERO, o);
        let mut right = Robot::new(IVec2::ZERO, o);
        for _ in 0..4 {
            left.turn_left();
            right.turn_right();
        }
        prop_assert_eq!(left.orientation, o);
        prop_assert_eq!(right.orientation, o);
    }

    #[test]
    fn left_and_right_are_inverses(o in orientation()) {
        let mut robot = Robot::new(IVec2::ZERO, o);
        robot.turn_left();
        robot.turn_right();
        prop_assert_eq!(robot.orientation, o);
        robot.turn_right();
        robot.turn_left();
        prop_assert_eq!(robot.orientation, o);
    }

    #[test]
    fn forward_moves_one_cell(x in -50i32..50, y in -50i32..50, o in orientation()) {
        let mut robot = Robot::new(IVec2::new(x, y), o);
        robot.move_forward();
        let expected = match o {
            Orientation::North => IVec2::new(x, y + 1),
            Orientation::East => IVec2::new(x + 1, y),
            Orientation::South => IVec2::new(x, y - 1),
            Orientation::West => IVec2::new(x - 1, y),
        };
        prop_assert_eq!(robot.position, expected);
    }

    #[test]
    fn robots_never_leave_the_grid(
        x_bound in 0i32..=50,
        y_bound in 0i32..=50,
        start in (0i32..=50, 0i32..=50),
        o in orientation(),
        program in instructions(),
    ) {
        let mut grid = Grid::new(x_bound, y_bound);
        let start = IVec2::new(start.0.min(x_bound), start.1.min(y_bound));
        let mut robot = Robot::new(start, o);

        drive(&mut grid, &mut robot, 0, &program).unwrap();

        prop_assert!(grid.in_bounds(robot.position));
        prop_assert_eq!(grid.scent_count(), usize::from(!robot.alive));
        if !robot.alive {
            prop_assert!(grid.is_scented(robot.position));
        }
    }

    #[test]
    fn scented_cells_never_lose_a_robot(
        cell in (0i32..=4, 0i32..=4),
        o in orientation(),
    ) {
        // Every cell scented: no robot can be lost anywhere.
        let mut grid = Grid::new(4, 4);
        for x in 0..=4 {
            for y in 0..=4 {
                grid.mark_scented(IVec2::new(x, y));
            }
        }
        let mut robot = Robot::new(IVec2::new(cell.0, cell.1), o);

        drive(&mut grid, &mut robot, 0, "FFFFFFRFFFFFFRFFFFFFRFFFFFF").unwrap();

        prop_assert!(robot.alive);
        prop_assert!(grid.in_bounds(robot.position));
    }
}
