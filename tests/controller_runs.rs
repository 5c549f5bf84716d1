// tests/controller_runs.rs
use glam::IVec2;
use mars_rover::{
    BlockCause, Command, ConfigError, Controller, Orientation, RoverConfig, Status,
};

fn controller(obstacles: Vec<IVec2>) -> Controller {
    let config = RoverConfig {
        obstacles,
        ..RoverConfig::default()
    };
    Controller::new(config.build().unwrap())
}

#[test]
fn test_default_scenario_trace() {
    let mut ctl = Controller::new(RoverConfig::default().build().unwrap());
    let steps = [
        ("M", IVec2::new(0, 1), Orientation::North),
        ("M", IVec2::new(0, 2), Orientation::North),
        ("R", IVec2::new(0, 2), Orientation::East),
        ("M", IVec2::new(1, 2), Orientation::East),
        ("L", IVec2::new(1, 2), Orientation::North),
        ("M", IVec2::new(1, 3), Orientation::North),
    ];

    for (token, pos, orientation) in steps {
        assert!(ctl.add_commands(token).is_empty());
        let report = ctl.execute();
        assert!(report.completed());
        assert_eq!(ctl.rover().position(), pos, "after {token}");
        assert_eq!(ctl.rover().orientation(), orientation, "after {token}");
    }
}

#[test]
fn test_default_scenario_in_one_run() {
    let mut ctl = Controller::new(RoverConfig::default().build().unwrap());
    ctl.add_commands("MMRMLM");

    let report = ctl.execute();

    assert!(report.completed());
    assert_eq!(report.executed, 6);
    assert_eq!(report.discarded, 0);
    assert_eq!(ctl.rover().position(), IVec2::new(1, 3));
    assert_eq!(ctl.rover().orientation(), Orientation::North);
    assert_eq!(ctl.rover().status(), Status::Clear);
    assert_eq!(
        ctl.rover().final_position(),
        "Final Position: (1, 3, NORTH)"
    );
}

#[test]
fn test_first_obstacle_halts_run() {
    let mut ctl = controller(vec![IVec2::new(0, 1)]);
    ctl.add_commands("MM");

    let report = ctl.execute();

    let err = report.halted_by.expect("run should halt");
    assert_eq!(err.target, IVec2::new(0, 1));
    assert_eq!(err.cause, BlockCause::Obstacle);
    assert_eq!(report.executed, 0);
    assert_eq!(report.discarded, 1, "second M never runs");
    assert_eq!(ctl.rover().position(), IVec2::ZERO);
    assert_eq!(ctl.rover().orientation(), Orientation::North);
    assert_eq!(ctl.rover().status(), Status::ObstacleAt(IVec2::new(0, 1)));
}

#[test]
fn test_commands_after_halt_do_not_run() {
    // Hits the west edge on the second command; the trailing R must not rotate.
    let mut ctl = controller(vec![]);
    ctl.add_commands("LMR");

    let report = ctl.execute();

    assert_eq!(report.executed, 1);
    assert_eq!(report.discarded, 1);
    assert_eq!(
        report.halted_by.map(|e| e.cause),
        Some(BlockCause::OutOfBounds)
    );
    assert_eq!(ctl.rover().orientation(), Orientation::West);
}

#[test]
fn test_queue_drains_across_executes() {
    let mut ctl = controller(vec![IVec2::new(0, 1)]);
    ctl.add_commands("MRM");
    assert_eq!(ctl.pending().len(), 3);

    let first = ctl.execute();
    assert!(!first.completed());
    assert!(ctl.pending().is_empty());

    let second = ctl.execute();
    assert_eq!(second, Default::default());
    assert_eq!(ctl.rover().position(), IVec2::ZERO);

    ctl.add_commands("RM");
    let third = ctl.execute();
    assert!(third.completed());
    assert_eq!(ctl.into_rover().position(), IVec2::new(1, 0));
}

#[test]
fn test_add_commands_preserves_call_order() {
    let mut ctl = controller(vec![]);
    let warnings = ctl.add_commands("M?");
    assert_eq!(warnings.len(), 1);
    ctl.add_commands("LR");

    assert_eq!(
        ctl.pending(),
        &[Command::Move, Command::TurnLeft, Command::TurnRight]
    );
}

#[test]
fn test_config_validation() {
    let config = RoverConfig {
        grid_width: 0,
        ..RoverConfig::default()
    };
    assert_eq!(
        config.build().unwrap_err(),
        ConfigError::EmptyGrid {
            width: 0,
            height: 10
        }
    );
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "grid_width": 5,
        "grid_height": 4,
        "obstacles": [[1, 1]],
        "start": [0, 3],
        "orientation": "E"
    }"#;
    let config: RoverConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.orientation, Orientation::East);

    let rover = config.build().unwrap();
    assert_eq!(rover.position(), IVec2::new(0, 3));
    assert_eq!(rover.grid().width(), 5);
    assert!(rover.grid().has_obstacle(IVec2::new(1, 1)));
}

#[test]
fn test_huge_grid_edge_halts_instead_of_overflowing() {
    let config = RoverConfig {
        grid_width: u32::MAX,
        grid_height: u32::MAX,
        obstacles: vec![],
        start: IVec2::new(i32::MAX, 0),
        orientation: Orientation::East,
    };
    let mut ctl = Controller::new(config.build().unwrap());
    ctl.add_commands("MR");

    let report = ctl.execute();

    assert_eq!(report.executed, 0);
    assert_eq!(report.discarded, 1);
    assert_eq!(
        report.halted_by.map(|e| e.cause),
        Some(BlockCause::OutOfBounds)
    );
    assert_eq!(ctl.rover().position(), IVec2::new(i32::MAX, 0));
    assert_eq!(ctl.rover().orientation(), Orientation::East);
}
