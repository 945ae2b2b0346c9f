use crate::core::scenes::journey::{rail_fill, scene_layer};
use crate::core::scenes::mockup::{BoardColumn, CALENDAR_FOCUS_DAY};
use crate::core::scenes::{
    JOURNEY_SCENES, JourneyFrame, JourneyScene, MOCKUP_SCENES, MockupFrame, MockupScene,
};
use crate::core::sequencer::{
    EndBehavior, MotionPreference, ScrollSequencer, SequencerState, TimedSequencer,
};

/// Frame interval the browser loop accrues in
const FRAME_MS: f64 = 100.0;

fn cycle_ms() -> f64 {
    MOCKUP_SCENES.iter().map(|s| s.duration_ms).sum()
}

fn mockup_frame(sequencer: &TimedSequencer) -> MockupFrame {
    let state = sequencer.state();
    MockupScene::from_index(state.current_scene_index)
        .unwrap()
        .render(state.progress_within_scene)
}

#[test]
fn test_mockup_cycle_visits_every_scene_in_order() {
    let mut sequencer = TimedSequencer::new(&MOCKUP_SCENES, EndBehavior::Wrap).unwrap();
    let mut visited = vec![0usize];

    let frames = (cycle_ms() / FRAME_MS) as usize;
    for _ in 0..frames - 1 {
        let index = sequencer.tick(FRAME_MS).current_scene_index;
        if visited.last() != Some(&index) {
            visited.push(index);
        }
    }

    assert_eq!(visited, (0..MOCKUP_SCENES.len()).collect::<Vec<_>>());

    // One more frame completes the loop
    sequencer.tick(FRAME_MS);
    assert_eq!(sequencer.state(), SequencerState::default());
}

#[test]
fn test_mockup_frame_matches_active_scene() {
    let mut sequencer = TimedSequencer::new(&MOCKUP_SCENES, EndBehavior::Wrap).unwrap();

    for _ in 0..(cycle_ms() / FRAME_MS) as usize {
        let state = sequencer.tick(FRAME_MS);
        let scene = MockupScene::from_index(state.current_scene_index).unwrap();
        let matches = matches!(
            (scene, mockup_frame(&sequencer)),
            (MockupScene::Priority, MockupFrame::Priority(_))
                | (MockupScene::DragDrop, MockupFrame::DragDrop(_))
                | (MockupScene::RenameStatus, MockupFrame::RenameStatus(_))
                | (MockupScene::Tabs, MockupFrame::Tabs(_))
                | (MockupScene::Calendar, MockupFrame::Calendar(_))
                | (MockupScene::Notifications, MockupFrame::Notifications(_))
                | (MockupScene::TeamChat, MockupFrame::TeamChat(_))
                | (MockupScene::TeamAssign, MockupFrame::TeamAssign(_))
                | (MockupScene::Payment, MockupFrame::Payment(_))
        );
        assert!(matches, "frame does not belong to {:?}", scene);
    }
}

#[test]
fn test_hover_pause_freezes_the_mockup() {
    let mut sequencer = TimedSequencer::new(&MOCKUP_SCENES, EndBehavior::Wrap).unwrap();
    for _ in 0..25 {
        sequencer.tick(FRAME_MS);
    }
    let before = mockup_frame(&sequencer);

    sequencer.pause();
    for _ in 0..50 {
        sequencer.tick(FRAME_MS);
    }
    assert_eq!(mockup_frame(&sequencer), before);

    sequencer.resume();
    sequencer.tick(FRAME_MS);
    assert_ne!(sequencer.state().progress_within_scene, 0.0);
}

#[test]
fn test_drag_drop_scene_ends_in_ready_column() {
    let frame = MockupScene::DragDrop.render(1.0);
    let MockupFrame::DragDrop(frame) = frame else {
        panic!("expected the drag and drop frame");
    };
    assert_eq!(frame.column, BoardColumn::Ready);
    assert!(!frame.dragging);
}

#[test]
fn test_calendar_scene_focuses_one_day() {
    let MockupFrame::Calendar(frame) = MockupScene::Calendar.render(0.5) else {
        panic!("expected the calendar frame");
    };
    assert!(frame.hovered_day.is_none() || frame.hovered_day == Some(CALENDAR_FOCUS_DAY));
}

#[test]
fn test_reduced_motion_freezes_mockup_on_first_scene() {
    let mut sequencer = TimedSequencer::new(&MOCKUP_SCENES, EndBehavior::Wrap).unwrap();
    sequencer.tick(5_000.0);
    sequencer.set_motion_preference(MotionPreference::Reduced);
    sequencer.tick(10_000.0);

    assert_eq!(sequencer.state(), SequencerState::default());
    assert!(matches!(mockup_frame(&sequencer), MockupFrame::Priority(_)));
}

#[test]
fn test_journey_scroll_walkthrough() {
    let mut sequencer = ScrollSequencer::new(&JOURNEY_SCENES).unwrap();
    let count = JOURNEY_SCENES.len();

    let state = sequencer.update(0.5);
    assert_eq!(state.current_scene_index, 2);
    assert!((state.progress_within_scene - 0.5).abs() < 1e-9);
    assert_eq!(
        JourneyScene::from_index(2),
        Some(JourneyScene::CollaborateReview)
    );

    // Active layer fully visible, neighbours dimmed, rail filled behind
    let active = scene_layer(2, state, count);
    assert!((active.opacity - 1.0).abs() < 1e-9);
    assert!(active.interactive);
    assert!(scene_layer(1, state, count).opacity <= 0.2);
    assert_eq!(scene_layer(4, state, count).opacity, 0.0);
    assert_eq!(rail_fill(0, state), 1.0);
    assert_eq!(rail_fill(3, state), 0.0);
}

#[test]
fn test_journey_end_shows_completed_dashboard() {
    let mut sequencer = ScrollSequencer::new(&JOURNEY_SCENES).unwrap();
    let state = sequencer.update(1.0);

    assert_eq!(state.current_scene_index, JOURNEY_SCENES.len() - 1);
    let JourneyFrame::ApproveComplete(frame) =
        JourneyScene::ApproveComplete.render(state.progress_within_scene)
    else {
        panic!("expected the approval frame");
    };
    assert_eq!(frame.completed_count, 13);
    assert!(frame.celebrating);
}

#[test]
fn test_journey_scroll_is_monotonic() {
    let mut sequencer = ScrollSequencer::new(&JOURNEY_SCENES).unwrap();
    let mut last = 0.0;
    for i in 0..=500 {
        sequencer.update(i as f64 / 500.0);
        let overall = sequencer.overall_progress();
        assert!(overall + 1e-9 >= last, "overall progress went backwards");
        last = overall;
    }
    assert!((last - 1.0).abs() < 1e-9);
}

#[test]
fn test_every_journey_scene_settles_before_the_handoff() {
    for scene in JourneyScene::ALL {
        assert_eq!(scene.render(0.8), scene.render(1.0), "{:?}", scene);
    }
}
