//! Hero product mockup
//!
//! A browser-window mockup cycling through nine short product interactions.
//! The timing lives in a [`TimedSequencer`]; each scene component receives
//! the within-scene progress and derives its frame from the pure renderers
//! in `core::scenes::mockup`.

use leptos::prelude::*;

use crate::core::scenes::MOCKUP_SCENES;
use crate::core::scenes::mockup::{
    BoardColumn, CALENDAR_FOCUS_DAY, MockupScene, ProjectTab, RenameStep, render_calendar,
    render_drag_drop, render_notifications, render_payment, render_priority, render_rename,
    render_tabs, render_team_assign, render_team_chat,
};
use crate::core::sequencer::{EndBehavior, MotionPreference, SequencerState, TimedSequencer};
use crate::ui::motion::{use_narrow_viewport, use_reduced_motion};

/// Elapsed time is handed to the sequencer in steps of at least this many ms
pub const ACCRUAL_STEP_MS: f64 = 100.0;

#[component]
pub fn AnimatedMockup() -> impl IntoView {
    let sequencer = match TimedSequencer::new(&MOCKUP_SCENES, EndBehavior::Wrap) {
        Ok(sequencer) => StoredValue::new(sequencer),
        Err(err) => {
            leptos::logging::error!("mockup disabled: {}", err);
            return ().into_any();
        }
    };

    let reduced_motion = use_reduced_motion();
    let narrow = use_narrow_viewport();
    let hovered = RwSignal::new(false);
    let state = RwSignal::new(SequencerState::default());

    // Mirror viewport, motion preference and hover into the sequencer
    Effect::new(move |_| {
        let motion = if reduced_motion.get() {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        };
        let enabled = !narrow.get();
        let paused = hovered.get();

        sequencer.update_value(|s| {
            s.set_motion_preference(motion);
            s.set_enabled(enabled);
            if paused {
                s.pause();
            } else {
                s.resume();
            }
        });
        state.set(sequencer.with_value(TimedSequencer::state));
    });

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::motion::AnimationLoop;

        let animation = StoredValue::new_local(None::<AnimationLoop>);

        // Only keep a frame loop alive while the mockup can actually move
        Effect::new(move |_| {
            let active = !reduced_motion.get() && !narrow.get();
            animation.set_value(active.then(|| {
                let mut pending = 0.0;
                AnimationLoop::start(move |delta| {
                    pending += delta;
                    if pending < ACCRUAL_STEP_MS {
                        return;
                    }
                    let step = std::mem::take(&mut pending);
                    if let Some(next) = sequencer.try_update_value(|s| s.tick(step)) {
                        if state.get_untracked() != next {
                            state.set(next);
                        }
                    }
                })
            }));
        });

        on_cleanup(move || {
            let _ = animation.try_update_value(|slot| slot.take());
        });
    }

    let scene = Memo::new(move |_| state.with(|s| MockupScene::from_index(s.current_scene_index)));
    let progress = Signal::derive(move || state.with(|s| s.progress_within_scene));
    let hint = move || scene.get().map(|s| s.scene().display_text).unwrap_or_default();
    let cursor = Memo::new(move |_| {
        scene
            .get()
            .map(|s| s.render(progress.get()).cursor().transform())
            .unwrap_or_default()
    });

    view! {
        <Show when=move || !narrow.get()>
            <div
                class="mockup"
                on:mouseenter=move |_| hovered.set(true)
                on:mouseleave=move |_| hovered.set(false)
            >
                <div class="mockup-glow" aria-hidden="true"></div>

                <div class="mockup-window">
                    <div class="mockup-titlebar">
                        <div class="mockup-dots">
                            <span class="dot dot-red"></span>
                            <span class="dot dot-yellow"></span>
                            <span class="dot dot-green"></span>
                        </div>
                        <div class="mockup-live">
                            <span class="live-dot"></span>
                            <span>"Live"</span>
                        </div>
                    </div>

                    <div class="mockup-content">
                        {move || match scene.get() {
                            Some(MockupScene::Priority) => view! { <PriorityScene progress=progress/> }.into_any(),
                            Some(MockupScene::DragDrop) => view! { <DragDropScene progress=progress/> }.into_any(),
                            Some(MockupScene::RenameStatus) => view! { <RenameStatusScene progress=progress/> }.into_any(),
                            Some(MockupScene::Tabs) => view! { <TabsScene progress=progress/> }.into_any(),
                            Some(MockupScene::Calendar) => view! { <CalendarScene progress=progress/> }.into_any(),
                            Some(MockupScene::Notifications) => view! { <NotificationsScene progress=progress/> }.into_any(),
                            Some(MockupScene::TeamChat) => view! { <TeamChatScene progress=progress/> }.into_any(),
                            Some(MockupScene::TeamAssign) => view! { <TeamAssignScene progress=progress/> }.into_any(),
                            Some(MockupScene::Payment) => view! { <PaymentScene progress=progress/> }.into_any(),
                            None => ().into_any(),
                        }}
                        <Cursor style=cursor/>
                    </div>
                </div>

                <div class="mockup-hint">
                    <p>{hint}</p>
                </div>
            </div>
        </Show>
    }
    .into_any()
}

/// Fake pointer drawn over the mockup
#[component]
fn Cursor(#[prop(into)] style: Signal<String>) -> impl IntoView {
    view! {
        <div class="mockup-cursor" style=move || style.get() aria-hidden="true">
            <svg width="20" height="20" viewBox="0 0 24 24">
                <path d="M5 3l14 8-6 2-3 6z" fill="#111827" stroke="white" stroke-width="1.5" stroke-linejoin="round"/>
            </svg>
        </div>
    }
}

struct BoardProject {
    name: &'static str,
    client: &'static str,
    kind: &'static str,
    date: &'static str,
}

static PROJECTS: [BoardProject; 3] = [
    BoardProject {
        name: "Corporate Event",
        client: "TechCorp Inc.",
        kind: "Video",
        date: "May 20",
    },
    BoardProject {
        name: "Brand Campaign",
        client: "Fashion Studio",
        kind: "Photo",
        date: "May 22",
    },
    BoardProject {
        name: "Wedding Editorial",
        client: "Sarah & James",
        kind: "Photo + Video",
        date: "May 25",
    },
];

const PRIORITIES: [&str; 4] = ["Urgent", "High", "Medium", "Normal"];

#[component]
fn PriorityScene(progress: Signal<f64>) -> impl IntoView {
    let frame = Memo::new(move |_| render_priority(progress.get()));

    view! {
        <div class="scene scene-priority">
            <h4 class="scene-title">"Active Projects"</h4>
            <div class="project-list">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        // The second card is the one being edited
                        let target = i == 1;
                        view! {
                            <div
                                class="project-card"
                                class:hovered=move || target && frame.get().hover_project
                            >
                                <div>
                                    <p class="project-name">{project.name}</p>
                                    <p class="project-meta">{project.client}" • "{project.kind}</p>
                                </div>
                                <div class="project-side">
                                    <Show when=move || target && frame.get().high_selected>
                                        <span class="priority-badge">"High"</span>
                                    </Show>
                                    <span class="project-date">{project.date}</span>
                                    {target.then(|| view! {
                                        <button
                                            class="flame-button"
                                            class:pulse=move || frame.get().pulse_button
                                            tabindex="-1"
                                        >
                                            "🔥"
                                        </button>
                                    })}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || frame.get().show_dropdown>
                <ul class="priority-dropdown">
                    {PRIORITIES
                        .iter()
                        .map(|label| {
                            let high = *label == "High";
                            view! {
                                <li class:selected=move || high && frame.get().high_selected>
                                    {*label}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>

            <Show when=move || frame.get().show_tooltip>
                <div class="scene-toast">"Priority set to High"</div>
            </Show>
        </div>
    }
}

#[component]
fn DragDropScene(progress: Signal<f64>) -> impl IntoView {
    let frame = Memo::new(move |_| render_drag_drop(progress.get()));
    let columns = [BoardColumn::Editing, BoardColumn::Review, BoardColumn::Ready];

    view! {
        <div class="scene scene-board">
            <h4 class="scene-title">"Project Board"</h4>
            <div class="board">
                {columns
                    .into_iter()
                    .map(|column| {
                        view! {
                            <div
                                class="board-column"
                                class:drop-target=move || {
                                    let f = frame.get();
                                    f.dragging && f.column == column
                                }
                            >
                                <p class="board-column-title">{column.label()}</p>
                            </div>
                        }
                    })
                    .collect_view()}

                <div
                    class="board-card"
                    class:dragging=move || frame.get().dragging
                    class:hovered=move || frame.get().hovering
                    style=move || frame.get().card.style()
                >
                    <p class="project-name">"Wedding Editorial"</p>
                    <p class="project-meta">"Sarah & James"</p>
                </div>
            </div>

            <Show when=move || frame.get().show_tooltip>
                <div class="scene-toast">"Moved to Ready"</div>
            </Show>
        </div>
    }
}

const STATUSES: [(&str, &str); 4] = [
    ("Editing", "status-blue"),
    ("Ready", "status-green"),
    ("Uploaded", "status-purple"),
    ("Delivered", "status-teal"),
];

const STATUS_COLORS: [&str; 5] = [
    "status-blue",
    "status-amber",
    "status-green",
    "status-purple",
    "status-teal",
];

#[component]
fn RenameStatusScene(progress: Signal<f64>) -> impl IntoView {
    let frame = Memo::new(move |_| render_rename(progress.get()));

    view! {
        <div class="scene scene-statuses">
            <h4 class="scene-title">"Custom Statuses"</h4>
            <ul class="status-list">
                {STATUSES
                    .iter()
                    .enumerate()
                    .map(|(i, (label, color))| {
                        let first = i == 0;
                        let color = *color;
                        let dot_class = move || {
                            let color = if first && frame.get().recolored { "status-amber" } else { color };
                            format!("status-dot {}", color)
                        };
                        view! {
                            <li class="status-row">
                                <span class=dot_class></span>
                                {move || {
                                    let f = frame.get();
                                    if first && f.renaming {
                                        view! {
                                            <input class="status-input" value="In Review" readonly tabindex="-1"/>
                                        }
                                        .into_any()
                                    } else if first && f.step >= RenameStep::Saved {
                                        view! { <span>"In Review"</span> }.into_any()
                                    } else {
                                        view! { <span>{*label}</span> }.into_any()
                                    }
                                }}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <Show when=move || frame.get().show_color_picker>
                <div class="color-picker">
                    {STATUS_COLORS
                        .iter()
                        .map(|color| {
                            let amber = *color == "status-amber";
                            view! {
                                <span
                                    class=format!("status-dot {}", color)
                                    class:selected=move || amber && frame.get().recolored
                                ></span>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn TabsScene(progress: Signal<f64>) -> impl IntoView {
    let frame = Memo::new(move |_| render_tabs(progress.get()));
    let active = Memo::new(move |_| frame.get().active_tab);

    view! {
        <div class="scene scene-tabs">
            <h4 class="scene-title">"Wedding Project"</h4>
            <div class="tab-bar" role="tablist">
                {ProjectTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <span class="tab" class:active=move || active.get() == tab>
                                {tab.label()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="tab-panel">
                {move || match active.get() {
                    ProjectTab::ProjectInfo => view! {
                        <dl class="detail-list">
                            <dt>"Type:"</dt><dd>"Photo + Video"</dd>
                            <dt>"Date:"</dt><dd>"May 25, 2026"</dd>
                            <dt>"Location:"</dt><dd>"Garden Venue"</dd>
                        </dl>
                    }
                    .into_any(),
                    ProjectTab::ClientInfo => view! {
                        <dl class="detail-list">
                            <dt>"Name:"</dt><dd>"Sarah & James"</dd>
                            <dt>"Email:"</dt><dd>"sarah@email.com"</dd>
                        </dl>
                    }
                    .into_any(),
                    ProjectTab::Discussion => view! {
                        <p class="detail-note">"Latest comment: \"Looks great!\""</p>
                    }
                    .into_any(),
                    ProjectTab::ShootingDay => view! {
                        <dl class="detail-list">
                            <dt>"Photographer:"</dt><dd>"Alex"</dd>
                            <dt>"Videographer:"</dt><dd>"Sam"</dd>
                            <dt>"Time:"</dt><dd>"2:00 PM"</dd>
                        </dl>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// Booked days of the calendar month: (day, couple, services)
const BOOKINGS: [(u8, &str, &str); 7] = [
    (8, "Emma & Leo", "Photo"),
    (12, "Olivia & Noah", "Video"),
    (15, "Sophia & Liam", "Photo + Video"),
    (18, "Ava & Mason", "Photo"),
    (22, "Mia & Ethan", "Video"),
    (25, "Isabella & Lucas", "Photo + Video"),
    (29, "Charlotte & Jack", "Photo"),
];

/// May 2026 starts on a Friday; the grid starts on Monday
const FIRST_WEEKDAY_OFFSET: usize = 4;

#[component]
fn CalendarScene(progress: Signal<f64>) -> impl IntoView {
    let frame = Memo::new(move |_| render_calendar(progress.get()));
    let focus = BOOKINGS
        .iter()
        .find(|(day, _, _)| *day == CALENDAR_FOCUS_DAY)
        .map(|(_, names, services)| format!("{} • {}", names, services))
        .unwrap_or_default();

    view! {
        <div class="scene scene-calendar">
            <h4 class="scene-title">"May 2026"</h4>
            <div class="calendar-grid">
                {["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                    .into_iter()
                    .map(|day| view! { <span class="calendar-weekday">{day}</span> })
                    .collect_view()}
                {(0..FIRST_WEEKDAY_OFFSET)
                    .map(|_| view! { <span class="calendar-day empty"></span> })
                    .collect_view()}
                {(1..=31u8)
                    .map(|day| {
                        let booked = BOOKINGS.iter().any(|(d, _, _)| *d == day);
                        view! {
                            <span
                                class="calendar-day"
                                class:booked=booked
                                class:hovered=move || frame.get().hovered_day == Some(day)
                            >
                                {day}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || frame.get().show_tooltip>
                <div class="calendar-tooltip">{focus.clone()}</div>
            </Show>

            <Show when=move || frame.get().show_popup>
                <div class="calendar-popup">
                    <p class="popup-label">"Event Date"</p>
                    <p class="popup-value">"May 25, 2026"</p>
                    <label class="popup-toggle">
                        <span class="toggle" class:on=move || frame.get().reminder_on></span>
                        "Send deadline reminder"
                    </label>
                </div>
            </Show>

            <Show when=move || frame.get().reminder_on>
                <div class="scene-toast">"Reminder scheduled"</div>
            </Show>
        </div>
    }
}

const NOTIFICATIONS: [(&str, &str); 2] = [
    ("Status changed to Uploaded", "Brand Campaign • 5 min ago"),
    ("Files ready for download", "Wedding Editorial • 1 hour ago"),
];

#[component]
fn NotificationsScene(progress: Signal<f64>) -> impl IntoView {
    let frame = Memo::new(move |_| render_notifications(progress.get()));

    view! {
        <div class="scene scene-notifications">
            <div class="scene-header">
                <h4 class="scene-title">"Notifications"</h4>
                <span class="bell" class:ringing=move || frame.get().bell_ringing>"🔔"</span>
            </div>

            <Show when=move || frame.get().show_inbox>
                <ul class="inbox">
                    {NOTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, meta))| {
                            view! {
                                <Show when=move || { frame.get().visible_notifications > i }>
                                    <li class="inbox-item">
                                        <p class="inbox-title">{*title}</p>
                                        <p class="inbox-meta">{*meta}</p>
                                    </li>
                                </Show>
                            }
                        })
                        .collect_view()}
                </ul>
                <label class="popup-toggle" class:hovered=move || frame.get().hover_toggle>
                    <span class="toggle" class:on=move || frame.get().toggle_checked></span>
                    "Notify me when Uploaded"
                </label>
            </Show>
        </div>
    }
}

struct ChatMessage {
    author: &'static str,
    time: &'static str,
    text: &'static str,
    outgoing: bool,
}

static CHAT: [ChatMessage; 4] = [
    ChatMessage {
        author: "Alex",
        time: "2:34 PM",
        text: "Hey team! Just finished shooting Isabella & Lucas wedding 📸",
        outgoing: false,
    },
    ChatMessage {
        author: "You",
        time: "2:35 PM",
        text: "Great! Can you upload the RAW files? I'll start editing today",
        outgoing: true,
    },
    ChatMessage {
        author: "Alex",
        time: "2:36 PM",
        text: "Sure! Uploading now... 450 photos",
        outgoing: false,
    },
    ChatMessage {
        author: "You",
        time: "2:37 PM",
        text: "Perfect! I'll have them ready by Friday 👍",
        outgoing: true,
    },
];

#[component]
fn TeamChatScene(progress: Signal<f64>) -> impl IntoView {
    let frame = Memo::new(move |_| render_team_chat(progress.get()));

    view! {
        <div class="scene scene-chat">
            <div class="scene-header">
                <h4 class="scene-title">"Wedding Project"</h4>
                <span class="chat-online">"3 members online"</span>
            </div>
            <div class="chat-log">
                {CHAT
                    .iter()
                    .enumerate()
                    .map(|(i, message)| {
                        let initial = message.author.chars().next().unwrap_or('?');
                        view! {
                            <Show when=move || { frame.get().visible_messages > i }>
                                <div class="chat-message" class:outgoing=message.outgoing>
                                    <span class="avatar">{initial.to_string()}</span>
                                    <div class="chat-bubble-wrap">
                                        <p class="chat-meta">{message.author}" "{message.time}</p>
                                        <p class="chat-bubble">{message.text}</p>
                                    </div>
                                </div>
                            </Show>
                        }
                    })
                    .collect_view()}
                <Show when=move || frame.get().typing>
                    <div class="chat-message">
                        <span class="avatar">"A"</span>
                        <p class="chat-bubble typing">
                            <span></span><span></span><span></span>
                        </p>
                    </div>
                </Show>
            </div>
        </div>
    }
}

const TEAM: [(&str, &str); 3] = [
    ("Alex", "Photographer"),
    ("Maria", "Editor"),
    ("Sam", "Videographer"),
];

#[component]
fn TeamAssignScene(progress: Signal<f64>) -> impl IntoView {
    let frame = Memo::new(move |_| render_team_assign(progress.get()));

    view! {
        <div class="scene scene-team">
            <Show when=move || frame.get().show_card>
                <div class="team-card">
                    <h4 class="scene-title">"Wedding Project"</h4>
                    <p class="popup-label">"Team Members"</p>
                    <div class="team-row">
                        <span class="avatar">"A"</span>
                        <Show when=move || frame.get().editor_assigned>
                            <span class="avatar avatar-new">"M"</span>
                        </Show>
                        <button
                            class="avatar avatar-add"
                            class:pulse=move || frame.get().pulse_avatar
                            tabindex="-1"
                            title="Assign Member"
                        >
                            "+"
                        </button>
                    </div>

                    <Show when=move || frame.get().show_dropdown>
                        <ul class="team-dropdown">
                            <li class="dropdown-title">"Assign Member"</li>
                            {TEAM
                                .iter()
                                .map(|(name, role)| {
                                    let editor = *role == "Editor";
                                    view! {
                                        <li class:selected=move || editor && frame.get().editor_selected>
                                            <span>{*name}</span>
                                            <span class="role">{*role}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </div>
            </Show>

            <Show when=move || frame.get().editor_assigned>
                <div class="scene-toast">"Maria assigned to project!"</div>
            </Show>
        </div>
    }
}

#[component]
fn PaymentScene(progress: Signal<f64>) -> impl IntoView {
    let frame = Memo::new(move |_| render_payment(progress.get()));

    view! {
        <div class="scene scene-payment">
            <div class="payment-sheet" class:scrolled=move || frame.get().scrolled>
                <h4 class="scene-title">"Wedding Project"</h4>
                <dl class="detail-list">
                    <dt>"Client"</dt><dd>"Sarah & James"</dd>
                    <dt>"Service"</dt><dd>"Photo + Video"</dd>
                    <dt>"Event Date"</dt><dd>"May 25, 2026"</dd>
                    <dt>"Project Value"</dt><dd>"$3,200"</dd>
                </dl>
                <div class="payment-row" class:highlight=move || frame.get().highlight_payment>
                    <span>"Payment Status"</span>
                    <span class="toggle" class:on=move || frame.get().payment_enabled></span>
                    <span class="payment-state">
                        {move || if frame.get().payment_enabled { "Received" } else { "Pending" }}
                    </span>
                </div>
            </div>

            <Show when=move || frame.get().show_confirm>
                <div class="scene-toast">"Payment marked as received"</div>
            </Show>
        </div>
    }
}
