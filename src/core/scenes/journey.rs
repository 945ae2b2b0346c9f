//! Scroll journey scenes
//!
//! The "See how FlowShot works" section pins itself and scrubs through five
//! scenes as the visitor scrolls. Each scene's mini animation is a cue table
//! over within-scene progress; the scripts finish at 80% so the final state
//! is readable before the next scene fades in.

use crate::core::sequencer::{Scene, SequencerState};
use crate::core::steps::{Step, StepTrack};

pub static JOURNEY_SCENES: [Scene; 5] = [
    Scene::scrolled("preset-library", "Preset Library"),
    Scene::scrolled("create-project", "Create Project"),
    Scene::scrolled("collaborate-review", "Collaborate & Review"),
    Scene::scrolled("schedule-notify", "Schedule & Notify"),
    Scene::scrolled("approve-complete", "Approve & Complete"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyScene {
    PresetLibrary,
    CreateProject,
    CollaborateReview,
    ScheduleNotify,
    ApproveComplete,
}

impl JourneyScene {
    pub const ALL: [JourneyScene; 5] = [
        JourneyScene::PresetLibrary,
        JourneyScene::CreateProject,
        JourneyScene::CollaborateReview,
        JourneyScene::ScheduleNotify,
        JourneyScene::ApproveComplete,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn scene(&self) -> &'static Scene {
        &JOURNEY_SCENES[*self as usize]
    }

    pub fn title(&self) -> &'static str {
        self.scene().display_text
    }

    pub fn caption(&self) -> &'static str {
        match self {
            JourneyScene::PresetLibrary => {
                "No setup. No spreadsheets. Just ready-made presets for every shoot."
            }
            JourneyScene::CreateProject => {
                "Start your next shoot using saved presets: photo, video, or both."
            }
            JourneyScene::CollaborateReview => {
                "Preview videos, leave timeline comments, and update status in real time."
            }
            JourneyScene::ScheduleNotify => {
                "Calendar view with smart notifications for every deadline."
            }
            JourneyScene::ApproveComplete => {
                "Mark client approval, confirm payments, and celebrate completion."
            }
        }
    }

    pub fn sub_caption(&self) -> &'static str {
        match self {
            JourneyScene::PresetLibrary => "",
            JourneyScene::CreateProject => "Create once, manage everything together.",
            JourneyScene::CollaborateReview => "Team communication that stays synced.",
            JourneyScene::ScheduleNotify => "Never miss an editing deadline or client approval.",
            JourneyScene::ApproveComplete => "Your dashboard updates automatically.",
        }
    }

    /// Tinted backdrop behind the scene mockup
    pub fn background(&self) -> &'static str {
        match self {
            JourneyScene::PresetLibrary => "#E7F0FF",
            JourneyScene::CreateProject => "#E9F7F2",
            JourneyScene::CollaborateReview => "#FFF5EB",
            JourneyScene::ScheduleNotify => "#FFF0F3",
            JourneyScene::ApproveComplete => "#F5F0FF",
        }
    }

    fn cues(&self) -> StepTrack<u8> {
        StepTrack::new(match self {
            JourneyScene::PresetLibrary => &PRESET_CUES[..],
            JourneyScene::CreateProject => &CREATE_CUES[..],
            JourneyScene::CollaborateReview => &REVIEW_CUES[..],
            JourneyScene::ScheduleNotify => &SCHEDULE_CUES[..],
            JourneyScene::ApproveComplete => &APPROVE_CUES[..],
        })
    }

    /// Number of cues in this scene's script
    pub fn cue_count(&self) -> u8 {
        (self.cues().len() - 1) as u8
    }

    /// Render this scene at within-scene progress `progress`
    pub fn render(&self, progress: f64) -> JourneyFrame {
        let step = self.cues().state_or(progress, 0);

        match self {
            JourneyScene::PresetLibrary => JourneyFrame::PresetLibrary(PresetLibraryFrame {
                visible_presets: step as usize,
            }),
            JourneyScene::CreateProject => JourneyFrame::CreateProject(CreateProjectFrame {
                new_button_visible: step >= 1,
                new_button_pressed: step == 1,
                modal_open: (2..9).contains(&step),
                name_typed: step >= 3,
                photo_selected: step >= 4,
                video_selected: step >= 5,
                preset_applied: step >= 6,
                addon_added: step >= 7,
                create_pressed: step == 8,
                card_visible: step >= 9,
                tooltip_visible: step >= 10,
            }),
            JourneyScene::CollaborateReview => {
                JourneyFrame::CollaborateReview(CollaborateReviewFrame {
                    preview_visible: step >= 1,
                    playing: step == 2,
                    playhead_percent: if step >= 2 { 45.0 } else { 0.0 },
                    timeline_marker: step >= 3,
                    comment_visible: step >= 4,
                    reply_visible: step >= 5,
                    status_changed: step >= 6,
                    notification_visible: step >= 7,
                })
            }
            JourneyScene::ScheduleNotify => JourneyFrame::ScheduleNotify(ScheduleNotifyFrame {
                calendar_visible: step >= 1,
                event_hovered: (2..4).contains(&step),
                tooltip_visible: step == 3,
                bell_active: step >= 4,
                bell_ringing: step == 4,
                modal_open: (5..7).contains(&step),
                reminder_on: step >= 6,
                success_visible: step >= 7,
            }),
            JourneyScene::ApproveComplete => JourneyFrame::ApproveComplete(ApproveCompleteFrame {
                details_visible: (1..5).contains(&step),
                status_dropdown_open: step == 2,
                client_approved: step >= 3,
                editor_paid: step >= 4,
                dashboard_visible: step >= 6,
                completed_count: if step >= 7 { 13 } else { 12 },
                celebrating: step >= 8,
            }),
        }
    }
}

// Cue thresholds, normalised so every script has settled by 0.8

static PRESET_CUES: [Step<u8>; 14] = [
    Step::new(0.0, 0),
    Step::new(0.05, 1),
    Step::new(0.105, 2),
    Step::new(0.16, 3),
    Step::new(0.215, 4),
    Step::new(0.27, 5),
    Step::new(0.325, 6),
    Step::new(0.38, 7),
    Step::new(0.435, 8),
    Step::new(0.49, 9),
    Step::new(0.545, 10),
    Step::new(0.6, 11),
    Step::new(0.655, 12),
    Step::new(0.71, 13),
];

static CREATE_CUES: [Step<u8>; 11] = [
    Step::new(0.0, 0),
    Step::new(0.06, 1),
    Step::new(0.12, 2),
    Step::new(0.22, 3),
    Step::new(0.31, 4),
    Step::new(0.37, 5),
    Step::new(0.46, 6),
    Step::new(0.55, 7),
    Step::new(0.65, 8),
    Step::new(0.71, 9),
    Step::new(0.8, 10),
];

static REVIEW_CUES: [Step<u8>; 8] = [
    Step::new(0.0, 0),
    Step::new(0.05, 1),
    Step::new(0.15, 2),
    Step::new(0.3, 3),
    Step::new(0.4, 4),
    Step::new(0.55, 5),
    Step::new(0.7, 6),
    Step::new(0.8, 7),
];

static SCHEDULE_CUES: [Step<u8>; 8] = [
    Step::new(0.0, 0),
    Step::new(0.06, 1),
    Step::new(0.14, 2),
    Step::new(0.29, 3),
    Step::new(0.46, 4),
    Step::new(0.54, 5),
    Step::new(0.69, 6),
    Step::new(0.8, 7),
];

static APPROVE_CUES: [Step<u8>; 9] = [
    Step::new(0.0, 0),
    Step::new(0.05, 1),
    Step::new(0.125, 2),
    Step::new(0.225, 3),
    Step::new(0.35, 4),
    Step::new(0.5, 5),
    Step::new(0.6, 6),
    Step::new(0.7, 7),
    Step::new(0.8, 8),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JourneyFrame {
    PresetLibrary(PresetLibraryFrame),
    CreateProject(CreateProjectFrame),
    CollaborateReview(CollaborateReviewFrame),
    ScheduleNotify(ScheduleNotifyFrame),
    ApproveComplete(ApproveCompleteFrame),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetLibraryFrame {
    /// Preset tags popped in so far, in catalogue order
    pub visible_presets: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateProjectFrame {
    pub new_button_visible: bool,
    pub new_button_pressed: bool,
    pub modal_open: bool,
    pub name_typed: bool,
    pub photo_selected: bool,
    pub video_selected: bool,
    pub preset_applied: bool,
    pub addon_added: bool,
    pub create_pressed: bool,
    pub card_visible: bool,
    pub tooltip_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollaborateReviewFrame {
    pub preview_visible: bool,
    pub playing: bool,
    pub playhead_percent: f64,
    pub timeline_marker: bool,
    pub comment_visible: bool,
    pub reply_visible: bool,
    pub status_changed: bool,
    pub notification_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleNotifyFrame {
    pub calendar_visible: bool,
    pub event_hovered: bool,
    pub tooltip_visible: bool,
    pub bell_active: bool,
    pub bell_ringing: bool,
    pub modal_open: bool,
    pub reminder_on: bool,
    pub success_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproveCompleteFrame {
    pub details_visible: bool,
    pub status_dropdown_open: bool,
    pub client_approved: bool,
    pub editor_paid: bool,
    pub dashboard_visible: bool,
    pub completed_count: u32,
    pub celebrating: bool,
}

/// Which side of the active scene a layer sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerPosition {
    Past,
    Active,
    Future,
}

/// Cross-fade state of one stacked scene layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayer {
    pub position: LayerPosition,
    pub opacity: f64,
    pub scale: f64,
    pub interactive: bool,
}

impl SceneLayer {
    /// Inline style for the layer; `offset_px` is the vertical slide distance
    pub fn style(&self, offset_px: f64) -> String {
        let y = match self.position {
            LayerPosition::Past => -offset_px,
            LayerPosition::Active => 0.0,
            LayerPosition::Future => offset_px,
        };
        format!(
            "opacity: {:.3}; transform: translateY({:.0}px) scale({:.2}); pointer-events: {};",
            self.opacity,
            y,
            self.scale,
            if self.interactive { "auto" } else { "none" }
        )
    }
}

/// Cross-fade of layer `index` given the sequencer state over `count` scenes.
///
/// The active layer holds a dim 0.2 until 15% in and ramps to full by 40%;
/// the previous layer lingers at 0.2 and fades out between 60% and 85%; the
/// next layer peeks in up to 0.05. The first and last scenes never dim.
pub fn scene_layer(index: usize, state: SequencerState, count: usize) -> SceneLayer {
    let current = state.current_scene_index;
    let t = crate::core::steps::clamp_progress(state.progress_within_scene);
    let last = count.saturating_sub(1);

    let position = if index == current {
        LayerPosition::Active
    } else if index < current {
        LayerPosition::Past
    } else {
        LayerPosition::Future
    };

    let opacity = if index == current {
        if index == 0 || index == last {
            1.0
        } else if t < 0.15 {
            0.2
        } else {
            0.2 + ((t - 0.15) / 0.25).min(1.0).powf(2.5) * 0.8
        }
    } else if index + 1 == current {
        if t < 0.6 {
            0.2
        } else {
            0.2 * (1.0 - ((t - 0.6) / 0.25).min(1.0).powf(2.5))
        }
    } else if index == current + 1 {
        0.05 * t
    } else {
        0.0
    };

    SceneLayer {
        position,
        opacity: opacity.clamp(0.0, 1.0),
        scale: match position {
            LayerPosition::Active => 1.0,
            LayerPosition::Future => 1.05,
            LayerPosition::Past => 0.98,
        },
        interactive: position == LayerPosition::Active,
    }
}

/// Fill of the progress rail segment after scene `index`, in `[0, 1]`
pub fn rail_fill(index: usize, state: SequencerState) -> f64 {
    use std::cmp::Ordering;

    match index.cmp(&state.current_scene_index) {
        Ordering::Less => 1.0,
        Ordering::Equal => crate::core::steps::clamp_progress(state.progress_within_scene),
        Ordering::Greater => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(index: usize, progress: f64) -> SequencerState {
        SequencerState {
            current_scene_index: index,
            progress_within_scene: progress,
        }
    }

    #[test]
    fn test_catalogue_lines_up() {
        assert_eq!(JOURNEY_SCENES.len(), JourneyScene::ALL.len());
        for (i, scene) in JourneyScene::ALL.iter().enumerate() {
            assert_eq!(JourneyScene::from_index(i), Some(*scene));
            assert!(!scene.title().is_empty());
            assert!(!scene.caption().is_empty());
            assert!(scene.background().starts_with('#'));
        }
        assert_eq!(JourneyScene::from_index(5), None);
    }

    #[test]
    fn test_cue_tables_ascend_and_finish_by_eighty_percent() {
        for scene in JourneyScene::ALL {
            let cues = scene.cues();
            assert_eq!(cues.state_at(0.0), Some(0));
            assert_eq!(cues.state_at(0.8), Some(scene.cue_count()));
            assert_eq!(cues.state_at(1.0), Some(scene.cue_count()));

            let mut previous = 0;
            for i in 0..=100 {
                let step = cues.state_or(i as f64 / 100.0, 0);
                assert!(step >= previous);
                previous = step;
            }
        }
    }

    #[test]
    fn test_preset_library_pops_tags_in_order() {
        let JourneyFrame::PresetLibrary(start) = JourneyScene::PresetLibrary.render(0.0) else {
            panic!("wrong frame");
        };
        assert_eq!(start.visible_presets, 0);

        let JourneyFrame::PresetLibrary(end) = JourneyScene::PresetLibrary.render(0.9) else {
            panic!("wrong frame");
        };
        assert_eq!(end.visible_presets, 13);
    }

    #[test]
    fn test_create_project_modal_hands_off_to_card() {
        let JourneyFrame::CreateProject(mid) = JourneyScene::CreateProject.render(0.4) else {
            panic!("wrong frame");
        };
        assert!(mid.modal_open && mid.photo_selected && mid.video_selected);
        assert!(!mid.card_visible);

        let JourneyFrame::CreateProject(end) = JourneyScene::CreateProject.render(0.85) else {
            panic!("wrong frame");
        };
        assert!(!end.modal_open && end.card_visible && end.tooltip_visible);
    }

    #[test]
    fn test_approve_complete_increments_counter() {
        let JourneyFrame::ApproveComplete(before) = JourneyScene::ApproveComplete.render(0.3)
        else {
            panic!("wrong frame");
        };
        assert!(before.details_visible && before.client_approved);
        assert_eq!(before.completed_count, 12);

        let JourneyFrame::ApproveComplete(after) = JourneyScene::ApproveComplete.render(0.95)
        else {
            panic!("wrong frame");
        };
        assert!(!after.details_visible && after.dashboard_visible && after.celebrating);
        assert_eq!(after.completed_count, 13);
    }

    #[test]
    fn test_renderers_clamp_out_of_range_progress() {
        for scene in JourneyScene::ALL {
            assert_eq!(scene.render(-2.0), scene.render(0.0));
            assert_eq!(scene.render(3.0), scene.render(1.0));
        }
    }

    #[test]
    fn test_active_layer_fades_in() {
        assert_eq!(scene_layer(2, state(2, 0.1), 5).opacity, 0.2);
        let ramping = scene_layer(2, state(2, 0.3), 5).opacity;
        assert!(ramping > 0.2 && ramping < 1.0);
        assert!((scene_layer(2, state(2, 0.5), 5).opacity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_and_last_layers_never_dim() {
        assert_eq!(scene_layer(0, state(0, 0.0), 5).opacity, 1.0);
        assert_eq!(scene_layer(4, state(4, 0.05), 5).opacity, 1.0);
    }

    #[test]
    fn test_previous_layer_fades_out_and_next_peeks_in() {
        assert_eq!(scene_layer(1, state(2, 0.5), 5).opacity, 0.2);
        assert!(scene_layer(1, state(2, 0.9), 5).opacity.abs() < 1e-9);

        let next = scene_layer(3, state(2, 0.5), 5);
        assert!((next.opacity - 0.025).abs() < 1e-9);
        assert_eq!(next.position, LayerPosition::Future);
        assert!(!next.interactive);

        assert_eq!(scene_layer(0, state(3, 0.5), 5).opacity, 0.0);
    }

    #[test]
    fn test_rail_fill() {
        let s = state(2, 0.4);
        assert_eq!(rail_fill(0, s), 1.0);
        assert_eq!(rail_fill(2, s), 0.4);
        assert_eq!(rail_fill(3, s), 0.0);
    }
}
