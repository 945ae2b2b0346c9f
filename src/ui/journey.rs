//! "See how FlowShot works" scroll journey
//!
//! A tall section whose inner stage sticks to the viewport. Scrolling
//! through it feeds a [`ScrollSequencer`], which picks the active scene and
//! its within-scene progress; the stacked scene layers cross-fade using
//! [`scene_layer`] and the side rail fills with [`rail_fill`].
//!
//! Under reduced motion the section is not pinned and every scene is shown
//! in its final state, one after another.

use leptos::html;
use leptos::prelude::*;

use crate::core::scenes::journey::{
    ApproveCompleteFrame, CollaborateReviewFrame, CreateProjectFrame, PresetLibraryFrame,
    ScheduleNotifyFrame, rail_fill, scene_layer,
};
use crate::core::scenes::{JOURNEY_SCENES, JourneyFrame, JourneyScene};
use crate::core::sequencer::{ScrollSequencer, SequencerState};
use crate::ui::motion::{ScrollTracker, use_reduced_motion};

/// Scroll distance per scene, in viewport heights
const SCENE_SCROLL_VH: usize = 75;

/// Vertical slide of a layer entering or leaving, in pixels
const LAYER_SLIDE_PX: f64 = 40.0;

#[component]
pub fn ProjectJourney() -> impl IntoView {
    let sequencer = match ScrollSequencer::new(&JOURNEY_SCENES) {
        Ok(sequencer) => StoredValue::new(sequencer),
        Err(err) => {
            leptos::logging::error!("journey disabled: {}", err);
            return ().into_any();
        }
    };

    let section = NodeRef::<html::Section>::new();
    let reduced_motion = use_reduced_motion();
    let state = RwSignal::new(SequencerState::default());
    let tracker = StoredValue::new(ScrollTracker::new());

    Effect::new(move |_| {
        if reduced_motion.get() {
            tracker.update_value(ScrollTracker::teardown);
            return;
        }
        if section.get().is_none() {
            return;
        }

        tracker.update_value(|t| {
            t.init(section, move |p| {
                if let Some(next) = sequencer.try_update_value(|s| s.update(p)) {
                    if state.get_untracked() != next {
                        state.set(next);
                    }
                }
            })
        });
    });

    on_cleanup(move || {
        let _ = tracker.try_update_value(ScrollTracker::teardown);
    });

    let section_style = move || {
        if reduced_motion.get() {
            String::new()
        } else {
            format!("height: {}vh;", 100 + JOURNEY_SCENES.len() * SCENE_SCROLL_VH)
        }
    };

    view! {
        <section
            id="project-journey"
            node_ref=section
            class="journey"
            class:journey-static=move || reduced_motion.get()
            style=section_style
        >
            <div class="journey-pin">
                <div class="journey-header">
                    <h2 class="journey-title">
                        "See how "<span class="text-gradient">"FlowShot"</span>" works"
                    </h2>
                    <p class="journey-subtitle">
                        "Scroll through the complete workflow, from creating a project to delivering the final result"
                    </p>
                </div>

                <Show
                    when=move || reduced_motion.get()
                    fallback=move || view! { <PinnedStage state=state/> }
                >
                    <StaticStages/>
                </Show>
            </div>
        </section>
    }
    .into_any()
}

/// Stacked, cross-fading scenes with the progress rail and caption
#[component]
fn PinnedStage(#[prop(into)] state: Signal<SequencerState>) -> impl IntoView {
    let count = JOURNEY_SCENES.len();
    let active = Memo::new(move |_| state.with(|s| JourneyScene::from_index(s.current_scene_index)));

    view! {
        <div class="journey-stage">
            <ol class="journey-rail">
                {JourneyScene::ALL
                    .into_iter()
                    .enumerate()
                    .map(|(i, scene)| {
                        let fill = move || format!("height: {:.1}%;", rail_fill(i, state.get()) * 100.0);
                        view! {
                            <li
                                class="rail-step"
                                class:active=move || state.with(|s| s.current_scene_index == i)
                                class:done=move || state.with(|s| s.current_scene_index > i)
                            >
                                <span class="rail-dot">{i + 1}</span>
                                <span class="rail-label">{scene.title()}</span>
                                {(i + 1 < count).then(|| view! {
                                    <span class="rail-track">
                                        <span class="rail-fill" style=fill></span>
                                    </span>
                                })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <div class="journey-layers">
                {JourneyScene::ALL
                    .into_iter()
                    .enumerate()
                    .map(|(i, scene)| {
                        let layer = move || scene_layer(i, state.get(), count).style(LAYER_SLIDE_PX);
                        // Past layers hold their final frame, future ones their first
                        let progress = Signal::derive(move || {
                            state.with(|s| match i.cmp(&s.current_scene_index) {
                                std::cmp::Ordering::Less => 1.0,
                                std::cmp::Ordering::Equal => s.progress_within_scene,
                                std::cmp::Ordering::Greater => 0.0,
                            })
                        });
                        view! {
                            <div
                                class="journey-layer"
                                style=move || format!("background: {}; {}", scene.background(), layer())
                                aria-hidden=move || state.with(|s| s.current_scene_index != i).to_string()
                            >
                                <JourneyStage scene=scene progress=progress/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="journey-caption" aria-live="polite">
                {move || active.get().map(|scene| view! {
                    <p class="caption-main">{scene.caption()}</p>
                    {(!scene.sub_caption().is_empty()).then(|| view! {
                        <p class="caption-sub">{scene.sub_caption()}</p>
                    })}
                })}
            </div>

            <Show when=move || state.with(|s| s.current_scene_index == 0 && s.progress_within_scene < 0.1)>
                <div class="journey-scroll-hint" aria-hidden="true">
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none">
                        <path d="M12 5v14M19 12l-7 7-7-7" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                    </svg>
                </div>
            </Show>
        </div>
    }
}

/// Every scene in its settled state, for visitors who prefer reduced motion
#[component]
fn StaticStages() -> impl IntoView {
    view! {
        <ol class="journey-static-list">
            {JourneyScene::ALL
                .into_iter()
                .map(|scene| {
                    view! {
                        <li class="journey-static-item">
                            <h3 class="static-title">{scene.title()}</h3>
                            <div class="journey-layer" style=format!("background: {};", scene.background())>
                                <JourneyStage scene=scene progress=Signal::stored(1.0)/>
                            </div>
                            <p class="caption-main">{scene.caption()}</p>
                            {(!scene.sub_caption().is_empty()).then(|| view! {
                                <p class="caption-sub">{scene.sub_caption()}</p>
                            })}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn JourneyStage(scene: JourneyScene, progress: Signal<f64>) -> impl IntoView {
    let frame = Memo::new(move |_| scene.render(progress.get()));

    move || match frame.get() {
        JourneyFrame::PresetLibrary(f) => preset_library(f).into_any(),
        JourneyFrame::CreateProject(f) => create_project(f).into_any(),
        JourneyFrame::CollaborateReview(f) => collaborate_review(f).into_any(),
        JourneyFrame::ScheduleNotify(f) => schedule_notify(f).into_any(),
        JourneyFrame::ApproveComplete(f) => approve_complete(f).into_any(),
    }
}

/// Preset tags in pop-in order: (name, category)
const PRESET_TAGS: [(&str, &str); 13] = [
    ("Wedding", "Event Type"),
    ("Photo", "Service"),
    ("Video", "Service"),
    ("Full Day", "Package"),
    ("Maria", "Editor"),
    ("Teaser", "Add-on"),
    ("Drone", "Add-on"),
    ("Highlight", "Format"),
    ("Film", "Format"),
    ("Corporate", "Event Type"),
    ("Half Day", "Package"),
    ("John", "Editor"),
    ("Reel", "Format"),
];

fn tag_class(category: &str) -> &'static str {
    match category {
        "Event Type" => "tag tag-pink",
        "Service" => "tag tag-blue",
        "Package" => "tag tag-green",
        "Editor" => "tag tag-orange",
        "Add-on" => "tag tag-indigo",
        _ => "tag tag-yellow",
    }
}

fn preset_library(frame: PresetLibraryFrame) -> impl IntoView {
    view! {
        <div class="stage stage-presets">
            <p class="stage-kicker">"Building presets..."</p>
            <div class="tag-cloud">
                {PRESET_TAGS
                    .iter()
                    .take(frame.visible_presets)
                    .map(|(name, category)| view! {
                        <span class=tag_class(category)>
                            <span class="tag-category">{*category}</span>
                            {*name}
                        </span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn create_project(frame: CreateProjectFrame) -> impl IntoView {
    view! {
        <div class="stage stage-create">
            <div class="stage-toolbar">
                <p class="stage-kicker">"Active Projects"</p>
                {frame.new_button_visible.then(|| view! {
                    <span class="stage-button" class:pressed=frame.new_button_pressed>"+ New Project"</span>
                })}
            </div>

            {frame.card_visible.then(|| view! {
                <div class="stage-card">
                    <p class="project-name">"Emma & Ryan"</p>
                    <p class="project-meta">"Full Wedding Package + Add-on"</p>
                </div>
            })}
            {frame.tooltip_visible.then(|| view! {
                <div class="scene-toast">"Created using your saved presets ✓"</div>
            })}

            {frame.modal_open.then(|| view! {
                <div class="stage-modal">
                    <p class="stage-modal-title">"Create New Project"</p>
                    <label class="stage-field">
                        <span>"Project Name"</span>
                        <span class="stage-input">{if frame.name_typed { "Emma & Ryan" } else { "" }}</span>
                    </label>
                    <div class="stage-field">
                        <span>"Type"</span>
                        <div class="stage-chips">
                            <span class="chip" class:selected=frame.photo_selected>"Photo"</span>
                            <span class="chip" class:selected=frame.video_selected>"Video"</span>
                        </div>
                    </div>
                    {frame.preset_applied.then(|| view! {
                        <div class="stage-field">
                            <span>"Choose from presets"</span>
                            <span class="stage-input">"Full Wedding Package"</span>
                        </div>
                    })}
                    {frame.addon_added.then(|| view! {
                        <span class="chip selected">"+ 60 sec Teaser"</span>
                    })}
                    <span class="stage-button" class:pressed=frame.create_pressed>"Create"</span>
                </div>
            })}
        </div>
    }
}

fn collaborate_review(frame: CollaborateReviewFrame) -> impl IntoView {
    view! {
        <div class="stage stage-review">
            {frame.preview_visible.then(|| view! {
                <div class="video-preview" class:playing=frame.playing>
                    <span class="video-play">{if frame.playing { "❚❚" } else { "▶" }}</span>
                    <div class="video-timeline">
                        <span class="video-playhead" style=format!("left: {:.0}%;", frame.playhead_percent)></span>
                        {frame.timeline_marker.then(|| view! {
                            <span class="video-marker" style="left: 45%;"></span>
                        })}
                    </div>
                </div>
            })}

            <div class="stage-comments">
                <p class="stage-kicker">"Comments"</p>
                {frame.comment_visible.then(|| view! {
                    <div class="chat-message">
                        <span class="avatar">"M"</span>
                        <p class="chat-bubble">"Cut before vows"</p>
                    </div>
                })}
                {frame.reply_visible.then(|| view! {
                    <div class="chat-message outgoing">
                        <span class="avatar">"Y"</span>
                        <p class="chat-bubble">"Got it 👍"</p>
                    </div>
                })}
            </div>

            <div class="stage-status">
                <span>"Status"</span>
                <span class="status-pill" class:changed=frame.status_changed>
                    {if frame.status_changed { "In Review" } else { "In Progress" }}
                </span>
            </div>

            {frame.notification_visible.then(|| view! {
                <div class="scene-toast">"Emma & Ryan → Synced"</div>
            })}
        </div>
    }
}

fn schedule_notify(frame: ScheduleNotifyFrame) -> impl IntoView {
    view! {
        <div class="stage stage-schedule">
            <div class="stage-toolbar">
                <p class="stage-kicker">"Dashboard"</p>
                <span class="bell" class:active=frame.bell_active class:ringing=frame.bell_ringing>
                    "🔔"
                    {frame.bell_active.then(|| view! { <span class="bell-count">"1 new"</span> })}
                </span>
            </div>

            {frame.calendar_visible.then(|| view! {
                <div class="mini-calendar">
                    {(1..=28u8)
                        .map(|day| {
                            let event = day == 25;
                            view! {
                                <span
                                    class="calendar-day"
                                    class:booked=event
                                    class:hovered=event && frame.event_hovered
                                >
                                    {day}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            })}
            {frame.tooltip_visible.then(|| view! {
                <div class="calendar-tooltip">"Editing due Oct 25 – Maria"</div>
            })}

            {frame.modal_open.then(|| view! {
                <div class="stage-modal">
                    <p class="stage-modal-title">"Notification Settings"</p>
                    <label class="popup-toggle">
                        <span class="toggle" class:on=frame.reminder_on></span>
                        "Notify me when status = Uploaded"
                    </label>
                </div>
            })}
            {frame.success_visible.then(|| view! {
                <div class="scene-toast">"Reminder set ✓"</div>
            })}
        </div>
    }
}

fn approve_complete(frame: ApproveCompleteFrame) -> impl IntoView {
    view! {
        <div class="stage stage-approve">
            {frame.details_visible.then(|| view! {
                <div class="stage-card">
                    <p class="project-name">"Sarah & James"</p>
                    <div class="stage-status">
                        <span>"Status"</span>
                        <span class="status-pill" class:changed=frame.client_approved>
                            {if frame.client_approved { "Ready" } else { "In Review" }}
                        </span>
                    </div>
                    {frame.status_dropdown_open.then(|| view! {
                        <ul class="team-dropdown">
                            <li>"In Review"</li>
                            <li class="selected">"Ready"</li>
                        </ul>
                    })}
                    <label class="popup-toggle">
                        <span class="toggle" class:on=frame.editor_paid></span>
                        "Editor Payment · Maria (Editor)"
                    </label>
                </div>
            })}

            {frame.dashboard_visible.then(|| view! {
                <div class="stage-dashboard" class:celebrating=frame.celebrating>
                    <p class="stage-kicker">"Recent Completions"</p>
                    <p class="completed-count">{frame.completed_count}</p>
                    <p class="project-meta">"projects delivered"</p>
                    {frame.celebrating.then(|| view! { <span class="confetti" aria-hidden="true">"🎉"</span> })}
                </div>
            })}
        </div>
    }
}
