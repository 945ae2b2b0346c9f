//! Product mockup scenes
//!
//! The hero mockup plays nine short scripted interactions on a timer. Each
//! scene is described by a step table; the renderer picks the active step
//! for the current progress and derives everything the view needs from it.

use super::{CursorPose, lerp};
use crate::core::sequencer::Scene;
use crate::core::steps::{Step, StepTrack};

/// Mockup scenes in play order, durations in milliseconds
pub static MOCKUP_SCENES: [Scene; 9] = [
    Scene::new("priority", 3000.0, "Set priority"),
    Scene::new("drag-drop", 4000.0, "Drag & drop"),
    Scene::new("rename-status", 3500.0, "Customize statuses"),
    Scene::new("tabs", 4500.0, "Intuitive interface"),
    Scene::new("calendar", 3500.0, "Plan events"),
    Scene::new("notifications", 4000.0, "Never miss important"),
    Scene::new("team-chat", 3500.0, "Team chat"),
    Scene::new("team-assign", 4000.0, "Assign editors"),
    Scene::new("payment", 3500.0, "Track payments"),
];

/// Renderer key for each entry of [`MOCKUP_SCENES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockupScene {
    Priority,
    DragDrop,
    RenameStatus,
    Tabs,
    Calendar,
    Notifications,
    TeamChat,
    TeamAssign,
    Payment,
}

impl MockupScene {
    pub const ALL: [MockupScene; 9] = [
        MockupScene::Priority,
        MockupScene::DragDrop,
        MockupScene::RenameStatus,
        MockupScene::Tabs,
        MockupScene::Calendar,
        MockupScene::Notifications,
        MockupScene::TeamChat,
        MockupScene::TeamAssign,
        MockupScene::Payment,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        MOCKUP_SCENES
            .iter()
            .position(|scene| scene.name == name)
            .and_then(Self::from_index)
    }

    pub fn scene(&self) -> &'static Scene {
        &MOCKUP_SCENES[*self as usize]
    }

    /// Render this scene at `progress`
    pub fn render(&self, progress: f64) -> MockupFrame {
        match self {
            MockupScene::Priority => MockupFrame::Priority(render_priority(progress)),
            MockupScene::DragDrop => MockupFrame::DragDrop(render_drag_drop(progress)),
            MockupScene::RenameStatus => MockupFrame::RenameStatus(render_rename(progress)),
            MockupScene::Tabs => MockupFrame::Tabs(render_tabs(progress)),
            MockupScene::Calendar => MockupFrame::Calendar(render_calendar(progress)),
            MockupScene::Notifications => {
                MockupFrame::Notifications(render_notifications(progress))
            }
            MockupScene::TeamChat => MockupFrame::TeamChat(render_team_chat(progress)),
            MockupScene::TeamAssign => MockupFrame::TeamAssign(render_team_assign(progress)),
            MockupScene::Payment => MockupFrame::Payment(render_payment(progress)),
        }
    }
}

/// Visual state of one mockup scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockupFrame {
    Priority(PriorityFrame),
    DragDrop(DragDropFrame),
    RenameStatus(RenameFrame),
    Tabs(TabsFrame),
    Calendar(CalendarFrame),
    Notifications(NotificationsFrame),
    TeamChat(TeamChatFrame),
    TeamAssign(TeamAssignFrame),
    Payment(PaymentFrame),
}

impl MockupFrame {
    pub fn cursor(&self) -> CursorPose {
        match self {
            MockupFrame::Priority(f) => f.cursor,
            MockupFrame::DragDrop(f) => f.cursor,
            MockupFrame::RenameStatus(f) => f.cursor,
            MockupFrame::Tabs(f) => f.cursor,
            MockupFrame::Calendar(f) => f.cursor,
            MockupFrame::Notifications(f) => f.cursor,
            MockupFrame::TeamChat(f) => f.cursor,
            MockupFrame::TeamAssign(f) => f.cursor,
            MockupFrame::Payment(f) => f.cursor,
        }
    }
}

// ============================================================================
// Priority
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityStep {
    Idle,
    Hover,
    Press,
    Click,
    Browse,
    HighSelected,
    Confirmed,
    Settled,
}

static PRIORITY_STEPS: [Step<PriorityStep>; 8] = [
    Step::new(0.0, PriorityStep::Idle),
    Step::new(0.2, PriorityStep::Hover),
    Step::new(0.25, PriorityStep::Press),
    Step::new(0.3, PriorityStep::Click),
    Step::new(0.35, PriorityStep::Browse),
    Step::new(0.6, PriorityStep::HighSelected),
    Step::new(0.8, PriorityStep::Confirmed),
    Step::new(0.95, PriorityStep::Settled),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityFrame {
    pub step: PriorityStep,
    /// The "Brand Campaign" card is hovered
    pub hover_project: bool,
    pub show_dropdown: bool,
    pub high_selected: bool,
    pub show_tooltip: bool,
    /// The flame button bounces while being pressed
    pub pulse_button: bool,
    pub cursor: CursorPose,
}

pub fn render_priority(progress: f64) -> PriorityFrame {
    use PriorityStep::*;

    let step = StepTrack::new(&PRIORITY_STEPS).state_or(progress, Idle);
    let mut cursor = CursorPose::at(
        if step < Click { 280.0 } else { 300.0 },
        if step < HighSelected { 100.0 } else { 130.0 },
    );
    if step == Click {
        cursor = cursor.pressed();
    }

    PriorityFrame {
        step,
        hover_project: (Hover..=HighSelected).contains(&step),
        show_dropdown: step >= Click,
        high_selected: step >= HighSelected,
        show_tooltip: step == Confirmed,
        pulse_button: matches!(step, Press | Click),
        cursor,
    }
}

// ============================================================================
// Drag & drop
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DragDropStep {
    Resting,
    Hovering,
    PickingUp,
    ToReview,
    ToReady,
    Dropped,
    Confirmed,
}

static DRAG_DROP_STEPS: [Step<DragDropStep>; 7] = [
    Step::new(0.0, DragDropStep::Resting),
    Step::new(0.1, DragDropStep::Hovering),
    Step::new(0.2, DragDropStep::PickingUp),
    Step::new(0.35, DragDropStep::ToReview),
    Step::new(0.55, DragDropStep::ToReady),
    Step::new(0.75, DragDropStep::Dropped),
    Step::new(0.85, DragDropStep::Confirmed),
];

/// Kanban column the dragged card sits over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardColumn {
    Editing,
    Review,
    Ready,
}

impl BoardColumn {
    pub fn label(&self) -> &'static str {
        match self {
            BoardColumn::Editing => "Editing",
            BoardColumn::Review => "Review",
            BoardColumn::Ready => "Ready",
        }
    }
}

/// Offset of the dragged card from its resting slot, in percent of the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub scale: f64,
}

impl CardTransform {
    const RESTING: CardTransform = CardTransform {
        x: CARD_START_X,
        y: CARD_START_Y,
        rotate: 0.0,
        scale: 1.0,
    };

    pub fn style(&self) -> String {
        format!(
            "transform: translate({:.2}%, {:.1}px) rotate({:.1}deg) scale({:.2});",
            self.x, self.y, self.rotate, self.scale
        )
    }
}

const CARD_START_X: f64 = 12.0;
const CARD_START_Y: f64 = 36.0;
/// One column plus the gap, three times over in board percent
const COLUMN_HOP: f64 = (33.33 + 1.0) * 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDropFrame {
    pub step: DragDropStep,
    pub column: BoardColumn,
    pub card: CardTransform,
    /// The card is lifted off the board
    pub dragging: bool,
    pub hovering: bool,
    pub show_tooltip: bool,
    pub cursor: CursorPose,
}

pub fn render_drag_drop(progress: f64) -> DragDropFrame {
    use DragDropStep::*;

    let track = StepTrack::new(&DRAG_DROP_STEPS);
    let step = track.state_or(progress, Resting);
    let t = track.local_progress(progress);

    let (card, column) = match step {
        Resting | Hovering => (CardTransform::RESTING, BoardColumn::Editing),
        PickingUp => (
            CardTransform {
                x: CARD_START_X,
                y: CARD_START_Y - 40.0,
                rotate: 4.0,
                scale: 1.2,
            },
            BoardColumn::Editing,
        ),
        ToReview => (
            CardTransform {
                x: lerp(CARD_START_X, CARD_START_X + COLUMN_HOP, t),
                y: CARD_START_Y - 50.0,
                rotate: 8.0,
                scale: 1.2,
            },
            if t > 0.5 {
                BoardColumn::Review
            } else {
                BoardColumn::Editing
            },
        ),
        ToReady => (
            CardTransform {
                x: lerp(
                    CARD_START_X + COLUMN_HOP,
                    CARD_START_X + COLUMN_HOP * 2.0,
                    t,
                ),
                y: CARD_START_Y - 50.0,
                rotate: 8.0,
                scale: 1.2,
            },
            if t > 0.5 {
                BoardColumn::Ready
            } else {
                BoardColumn::Review
            },
        ),
        Dropped | Confirmed => (
            CardTransform {
                x: CARD_START_X + COLUMN_HOP * 2.0,
                ..CardTransform::RESTING
            },
            BoardColumn::Ready,
        ),
    };

    let cursor = CursorPose::at(
        match step {
            Resting | Hovering | PickingUp => 60.0,
            ToReview => 180.0,
            _ => 280.0,
        },
        match step {
            Resting | Hovering | PickingUp => 100.0,
            ToReview | ToReady => 90.0,
            _ => 100.0,
        },
    );

    DragDropFrame {
        step,
        column,
        card,
        dragging: matches!(step, PickingUp | ToReview | ToReady),
        hovering: step == Hovering,
        show_tooltip: step == Confirmed,
        cursor: if step == PickingUp {
            cursor.pressed()
        } else {
            cursor
        },
    }
}

// ============================================================================
// Rename status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenameStep {
    Idle,
    Renaming,
    PickingColor,
    Recolored,
    Saved,
}

static RENAME_STEPS: [Step<RenameStep>; 5] = [
    Step::new(0.0, RenameStep::Idle),
    Step::new(0.25, RenameStep::Renaming),
    Step::new(0.5, RenameStep::PickingColor),
    Step::new(0.7, RenameStep::Recolored),
    Step::new(0.75, RenameStep::Saved),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenameFrame {
    pub step: RenameStep,
    /// Inline rename field is open on the first status
    pub renaming: bool,
    pub show_color_picker: bool,
    /// First status switched to its new color
    pub recolored: bool,
    pub cursor: CursorPose,
}

pub fn render_rename(progress: f64) -> RenameFrame {
    use RenameStep::*;

    let step = StepTrack::new(&RENAME_STEPS).state_or(progress, Idle);
    let picker = step >= PickingColor;

    RenameFrame {
        step,
        renaming: (Renaming..Saved).contains(&step),
        show_color_picker: picker,
        recolored: step >= Recolored,
        cursor: if picker {
            CursorPose::at(150.0, 125.0)
        } else {
            CursorPose::at(120.0, 90.0)
        },
    }
}

// ============================================================================
// Project detail tabs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProjectTab {
    ProjectInfo,
    ClientInfo,
    Discussion,
    ShootingDay,
}

impl ProjectTab {
    pub const ALL: [ProjectTab; 4] = [
        ProjectTab::ProjectInfo,
        ProjectTab::ClientInfo,
        ProjectTab::Discussion,
        ProjectTab::ShootingDay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectTab::ProjectInfo => "Project Info",
            ProjectTab::ClientInfo => "Client Info",
            ProjectTab::Discussion => "Discussion",
            ProjectTab::ShootingDay => "Shooting Day",
        }
    }
}

static TAB_STEPS: [Step<ProjectTab>; 4] = [
    Step::new(0.0, ProjectTab::ProjectInfo),
    Step::new(0.3, ProjectTab::ClientInfo),
    Step::new(0.55, ProjectTab::Discussion),
    Step::new(0.8, ProjectTab::ShootingDay),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabsFrame {
    pub active_tab: ProjectTab,
    pub cursor: CursorPose,
}

pub fn render_tabs(progress: f64) -> TabsFrame {
    let active_tab = StepTrack::new(&TAB_STEPS).state_or(progress, ProjectTab::ProjectInfo);

    TabsFrame {
        active_tab,
        cursor: CursorPose::at(60.0 + active_tab as usize as f64 * 70.0, 70.0),
    }
}

// ============================================================================
// Calendar
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CalendarStep {
    Browse,
    Hover,
    Tooltip,
    Popup,
    PopupOnly,
    ReminderOn,
}

static CALENDAR_STEPS: [Step<CalendarStep>; 6] = [
    Step::new(0.0, CalendarStep::Browse),
    Step::new(0.2, CalendarStep::Hover),
    Step::new(0.3, CalendarStep::Tooltip),
    Step::new(0.6, CalendarStep::Popup),
    Step::new(0.7, CalendarStep::PopupOnly),
    Step::new(0.85, CalendarStep::ReminderOn),
];

/// Day of the month the pointer lingers on
pub const CALENDAR_FOCUS_DAY: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarFrame {
    pub step: CalendarStep,
    pub hovered_day: Option<u8>,
    pub show_tooltip: bool,
    pub show_popup: bool,
    pub reminder_on: bool,
    pub cursor: CursorPose,
}

pub fn render_calendar(progress: f64) -> CalendarFrame {
    use CalendarStep::*;

    let step = StepTrack::new(&CALENDAR_STEPS).state_or(progress, Browse);
    let show_popup = matches!(step, Popup | PopupOnly);

    CalendarFrame {
        step,
        hovered_day: (Hover..=Popup)
            .contains(&step)
            .then_some(CALENDAR_FOCUS_DAY),
        show_tooltip: step == Tooltip,
        show_popup,
        reminder_on: step == ReminderOn,
        cursor: if show_popup {
            CursorPose::at(50.0, 240.0)
        } else {
            CursorPose::at(240.0, 150.0)
        },
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationsStep {
    Ringing,
    InboxOpen,
    Quiet,
    First,
    Second,
    HoverToggle,
    Checked,
}

static NOTIFICATION_STEPS: [Step<NotificationsStep>; 7] = [
    Step::new(0.0, NotificationsStep::Ringing),
    Step::new(0.15, NotificationsStep::InboxOpen),
    Step::new(0.2, NotificationsStep::Quiet),
    Step::new(0.3, NotificationsStep::First),
    Step::new(0.5, NotificationsStep::Second),
    Step::new(0.7, NotificationsStep::HoverToggle),
    Step::new(0.85, NotificationsStep::Checked),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotificationsFrame {
    pub step: NotificationsStep,
    pub bell_ringing: bool,
    pub show_inbox: bool,
    /// How many inbox entries have slid in
    pub visible_notifications: usize,
    pub hover_toggle: bool,
    pub toggle_checked: bool,
    pub cursor: CursorPose,
}

pub fn render_notifications(progress: f64) -> NotificationsFrame {
    use NotificationsStep::*;

    let step = StepTrack::new(&NOTIFICATION_STEPS).state_or(progress, Ringing);
    let hover_toggle = step >= HoverToggle;

    NotificationsFrame {
        step,
        bell_ringing: step <= InboxOpen,
        show_inbox: step >= InboxOpen,
        visible_notifications: match step {
            Ringing | InboxOpen | Quiet => 0,
            First => 1,
            _ => 2,
        },
        hover_toggle,
        toggle_checked: step >= Checked,
        cursor: if hover_toggle {
            CursorPose::at(80.0, 200.0)
        } else {
            CursorPose::at(280.0, 60.0)
        },
    }
}

// ============================================================================
// Team chat
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TeamChatStep {
    Empty,
    OneMessage,
    TwoMessages,
    ThreeMessages,
    Typing,
    Replied,
}

static TEAM_CHAT_STEPS: [Step<TeamChatStep>; 6] = [
    Step::new(0.0, TeamChatStep::Empty),
    Step::new(0.15, TeamChatStep::OneMessage),
    Step::new(0.35, TeamChatStep::TwoMessages),
    Step::new(0.55, TeamChatStep::ThreeMessages),
    Step::new(0.75, TeamChatStep::Typing),
    Step::new(0.9, TeamChatStep::Replied),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamChatFrame {
    pub step: TeamChatStep,
    pub visible_messages: usize,
    pub typing: bool,
    pub cursor: CursorPose,
}

pub fn render_team_chat(progress: f64) -> TeamChatFrame {
    use TeamChatStep::*;

    let step = StepTrack::new(&TEAM_CHAT_STEPS).state_or(progress, Empty);

    TeamChatFrame {
        step,
        visible_messages: match step {
            Empty => 0,
            OneMessage => 1,
            TwoMessages => 2,
            ThreeMessages | Typing => 3,
            Replied => 4,
        },
        typing: step == Typing,
        // The pointer drifts to the composer halfway through
        cursor: if crate::core::steps::clamp_progress(progress) < 0.5 {
            CursorPose::at(80.0, 120.0)
        } else {
            CursorPose::at(200.0, 220.0)
        },
    }
}

// ============================================================================
// Team assignment
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TeamAssignStep {
    Hidden,
    CardShown,
    AvatarPulse,
    DropdownOpen,
    Browse,
    EditorSelected,
    Assigned,
}

static TEAM_ASSIGN_STEPS: [Step<TeamAssignStep>; 7] = [
    Step::new(0.0, TeamAssignStep::Hidden),
    Step::new(0.1, TeamAssignStep::CardShown),
    Step::new(0.25, TeamAssignStep::AvatarPulse),
    Step::new(0.3, TeamAssignStep::DropdownOpen),
    Step::new(0.35, TeamAssignStep::Browse),
    Step::new(0.5, TeamAssignStep::EditorSelected),
    Step::new(0.75, TeamAssignStep::Assigned),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamAssignFrame {
    pub step: TeamAssignStep,
    pub show_card: bool,
    pub pulse_avatar: bool,
    pub show_dropdown: bool,
    pub editor_selected: bool,
    pub editor_assigned: bool,
    pub cursor: CursorPose,
}

pub fn render_team_assign(progress: f64) -> TeamAssignFrame {
    use TeamAssignStep::*;

    let step = StepTrack::new(&TEAM_ASSIGN_STEPS).state_or(progress, Hidden);

    TeamAssignFrame {
        step,
        show_card: step >= CardShown,
        pulse_avatar: matches!(step, AvatarPulse | DropdownOpen),
        show_dropdown: (DropdownOpen..Assigned).contains(&step),
        editor_selected: step >= EditorSelected,
        editor_assigned: step >= Assigned,
        cursor: match step {
            Hidden | CardShown | AvatarPulse => CursorPose::at(280.0, 80.0),
            Assigned => CursorPose::at(120.0, 120.0),
            _ => CursorPose::at(200.0, 140.0),
        },
    }
}

// ============================================================================
// Payment toggle
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PaymentStep {
    Top,
    Scrolled,
    Highlight,
    Toggling,
    Enabled,
    HighlightOff,
    Confirmed,
}

static PAYMENT_STEPS: [Step<PaymentStep>; 7] = [
    Step::new(0.0, PaymentStep::Top),
    Step::new(0.2, PaymentStep::Scrolled),
    Step::new(0.4, PaymentStep::Highlight),
    Step::new(0.5, PaymentStep::Toggling),
    Step::new(0.65, PaymentStep::Enabled),
    Step::new(0.8, PaymentStep::HighlightOff),
    Step::new(0.85, PaymentStep::Confirmed),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentFrame {
    pub step: PaymentStep,
    pub scrolled: bool,
    pub highlight_payment: bool,
    pub toggling: bool,
    pub payment_enabled: bool,
    pub show_confirm: bool,
    pub cursor: CursorPose,
}

pub fn render_payment(progress: f64) -> PaymentFrame {
    use PaymentStep::*;

    let step = StepTrack::new(&PAYMENT_STEPS).state_or(progress, Top);
    let toggling = step >= Toggling;

    PaymentFrame {
        step,
        scrolled: step >= Scrolled,
        highlight_payment: (Highlight..HighlightOff).contains(&step),
        toggling,
        payment_enabled: step >= Enabled,
        show_confirm: step >= Confirmed,
        cursor: if toggling {
            CursorPose::at(260.0, 185.0)
        } else {
            CursorPose::at(200.0, 80.0)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> impl Iterator<Item = f64> {
        (0..=200).map(|i| i as f64 / 200.0)
    }

    #[test]
    fn test_catalogue_matches_renderers() {
        assert_eq!(MOCKUP_SCENES.len(), MockupScene::ALL.len());
        for (index, scene) in MockupScene::ALL.iter().enumerate() {
            assert_eq!(MockupScene::from_index(index), Some(*scene));
            assert_eq!(MockupScene::from_name(scene.scene().name), Some(*scene));
            assert!(scene.scene().duration_ms > 0.0);
        }
        assert_eq!(MockupScene::from_index(9), None);
        assert_eq!(MockupScene::from_name("unknown"), None);
    }

    #[test]
    fn test_step_tables_are_ascending_from_zero() {
        fn check<T>(steps: &[Step<T>]) {
            assert_eq!(steps[0].at, 0.0);
            assert!(steps.windows(2).all(|w| w[0].at < w[1].at));
            assert!(steps.iter().all(|s| (0.0..=1.0).contains(&s.at)));
        }
        check(&PRIORITY_STEPS);
        check(&DRAG_DROP_STEPS);
        check(&RENAME_STEPS);
        check(&TAB_STEPS);
        check(&CALENDAR_STEPS);
        check(&NOTIFICATION_STEPS);
        check(&TEAM_CHAT_STEPS);
        check(&TEAM_ASSIGN_STEPS);
        check(&PAYMENT_STEPS);
    }

    #[test]
    fn test_renderers_are_deterministic_and_clamp() {
        for scene in MockupScene::ALL {
            for t in samples() {
                assert_eq!(scene.render(t), scene.render(t));
            }
            assert_eq!(scene.render(-1.0), scene.render(0.0));
            assert_eq!(scene.render(7.5), scene.render(1.0));
            assert_eq!(scene.render(f64::NAN), scene.render(0.0));
        }
    }

    #[test]
    fn test_priority_script() {
        let start = render_priority(0.0);
        assert!(!start.hover_project && !start.show_dropdown);
        assert_eq!(start.cursor, CursorPose::at(280.0, 100.0));

        let click = render_priority(0.32);
        assert_eq!(click.step, PriorityStep::Click);
        assert!(click.show_dropdown && click.pulse_button);
        assert_eq!(click.cursor.scale, 0.9);

        let selected = render_priority(0.7);
        assert!(selected.high_selected && selected.hover_project);
        assert!(!selected.show_tooltip);

        let confirmed = render_priority(0.9);
        assert!(confirmed.show_tooltip && !confirmed.hover_project);

        assert!(!render_priority(0.97).show_tooltip);
    }

    #[test]
    fn test_drag_drop_moves_card_across_columns() {
        assert_eq!(render_drag_drop(0.05).column, BoardColumn::Editing);
        assert!(render_drag_drop(0.15).hovering);

        let lifted = render_drag_drop(0.25);
        assert!(lifted.dragging);
        assert_eq!(lifted.card.scale, 1.2);

        let early = render_drag_drop(0.4);
        let late = render_drag_drop(0.5);
        assert!(late.card.x > early.card.x);
        assert_eq!(early.column, BoardColumn::Editing);
        assert_eq!(late.column, BoardColumn::Review);

        assert_eq!(render_drag_drop(0.7).column, BoardColumn::Ready);

        let dropped = render_drag_drop(0.8);
        assert!(!dropped.dragging);
        assert_eq!(dropped.card.rotate, 0.0);
        assert_eq!(dropped.column, BoardColumn::Ready);
        assert!(!dropped.show_tooltip);
        assert!(render_drag_drop(0.9).show_tooltip);
    }

    #[test]
    fn test_drag_drop_card_is_continuous_between_hops() {
        let end_of_review = render_drag_drop(0.5499).card.x;
        let start_of_ready = render_drag_drop(0.55).card.x;
        assert!((end_of_review - start_of_ready).abs() < 0.5);
    }

    #[test]
    fn test_tabs_cycle_in_order() {
        let tabs: Vec<ProjectTab> = [0.1, 0.4, 0.6, 0.9]
            .iter()
            .map(|t| render_tabs(*t).active_tab)
            .collect();
        assert_eq!(tabs, ProjectTab::ALL.to_vec());
        assert_eq!(render_tabs(0.9).cursor.x, 60.0 + 3.0 * 70.0);
    }

    #[test]
    fn test_calendar_popup_and_reminder() {
        assert_eq!(render_calendar(0.1).hovered_day, None);
        assert_eq!(render_calendar(0.25).hovered_day, Some(CALENDAR_FOCUS_DAY));
        assert!(render_calendar(0.4).show_tooltip);

        let popup = render_calendar(0.65);
        assert!(popup.show_popup && !popup.show_tooltip);
        assert_eq!(popup.hovered_day, Some(CALENDAR_FOCUS_DAY));

        let popup_only = render_calendar(0.75);
        assert!(popup_only.show_popup);
        assert_eq!(popup_only.hovered_day, None);

        let done = render_calendar(0.9);
        assert!(done.reminder_on && !done.show_popup);
    }

    #[test]
    fn test_notifications_count_up() {
        let counts: Vec<usize> = [0.1, 0.35, 0.6, 0.9]
            .iter()
            .map(|t| render_notifications(*t).visible_notifications)
            .collect();
        assert_eq!(counts, vec![0, 1, 2, 2]);
        assert!(render_notifications(0.1).bell_ringing);
        assert!(render_notifications(0.17).show_inbox);
        assert!(!render_notifications(0.25).bell_ringing);
        assert!(render_notifications(0.9).toggle_checked);
    }

    #[test]
    fn test_team_chat_typing_then_reply() {
        assert_eq!(render_team_chat(0.0).visible_messages, 0);
        let typing = render_team_chat(0.8);
        assert!(typing.typing);
        assert_eq!(typing.visible_messages, 3);

        let replied = render_team_chat(0.95);
        assert!(!replied.typing);
        assert_eq!(replied.visible_messages, 4);
    }

    #[test]
    fn test_team_assign_dropdown_closes_on_assignment() {
        assert!(!render_team_assign(0.05).show_card);
        assert!(render_team_assign(0.27).pulse_avatar);

        let selecting = render_team_assign(0.6);
        assert!(selecting.show_dropdown && selecting.editor_selected);
        assert!(!selecting.editor_assigned);

        let assigned = render_team_assign(0.8);
        assert!(assigned.editor_assigned && !assigned.show_dropdown);
    }

    #[test]
    fn test_payment_toggle() {
        assert!(!render_payment(0.1).scrolled);
        let highlight = render_payment(0.45);
        assert!(highlight.highlight_payment && !highlight.toggling);

        let enabled = render_payment(0.7);
        assert!(enabled.payment_enabled && enabled.highlight_payment);

        let confirmed = render_payment(0.9);
        assert!(confirmed.show_confirm && !confirmed.highlight_payment);
    }

    #[test]
    fn test_frame_cursor_accessor() {
        let frame = MockupScene::Tabs.render(0.4);
        assert_eq!(frame.cursor(), CursorPose::at(130.0, 70.0));
    }
}
