//! Root app component and screen dispatch.

use dioxus::prelude::*;
use vibe_core::screens::NewPlot;
use vibe_core::{NavEvent, NavState, Screen, Tab};
use vibe_ui::{AppLayout, ThemedRoot};

use crate::config::AppConfig;
use crate::screens::{
    AuthScreen, ChatRoomScreen, ChatsScreen, CreatePlotScreen, CrewDetailScreen, CrewsScreen,
    FeedScreen, MapScreen, PlotDetailScreen, ProfileScreen,
};
use crate::state::AppContext;

fn dispatch(mut nav: Signal<NavState>, event: NavEvent) {
    nav.write().apply(event);
}

/// Root application component.
#[component]
pub fn App() -> Element {
    use_context_provider(AppContext::seeded);
    let nav = use_signal(|| AppConfig::current().initial_nav());

    let state = nav.read().clone();
    let go = move |screen: Screen| dispatch(nav, NavEvent::NavigateTo(screen));

    let body = match state.visible_screen() {
        Screen::Auth => {
            return rsx! {
                ThemedRoot {
                    AuthScreen { on_complete: move |_| dispatch(nav, NavEvent::CompleteAuth) }
                }
            };
        }
        Screen::Feed => rsx! {
            FeedScreen {
                on_create_plot: move |_| go(Screen::CreatePlot),
                on_open_plot: move |id: String| go(Screen::plot_detail(id)),
            }
        },
        Screen::CreatePlot => rsx! {
            CreatePlotScreen {
                on_close: move |_| go(Screen::Feed),
                on_submit: move |plot: NewPlot| {
                    tracing::info!(
                        vibe = %plot.vibe,
                        location = plot.location.as_deref().unwrap_or("-"),
                        chars = plot.content.chars().count(),
                        "Plot posted"
                    );
                    go(Screen::Feed);
                },
            }
        },
        Screen::PlotDetail { plot_id } => rsx! {
            PlotDetailScreen { plot_id, on_back: move |_| go(Screen::Feed) }
        },
        Screen::Chats => rsx! {
            ChatsScreen { on_open_chat: move |id: String| go(Screen::chat_room(id)) }
        },
        Screen::ChatRoom { chat_id } => rsx! {
            ChatRoomScreen { chat_id, on_back: move |_| go(Screen::Chats) }
        },
        Screen::Crews => rsx! {
            CrewsScreen { on_open_crew: move |id: String| go(Screen::crew_detail(id)) }
        },
        Screen::CrewDetail { crew_id } => rsx! {
            CrewDetailScreen {
                crew_id,
                on_back: move |_| go(Screen::Crews),
                on_open_chat: move |id: String| go(Screen::chat_room(id)),
            }
        },
        Screen::Map => rsx! {
            MapScreen { on_open_chat: move |id: String| go(Screen::chat_room(id)) }
        },
        Screen::Profile => rsx! { ProfileScreen {} },
    };

    rsx! {
        ThemedRoot {
            AppLayout {
                active_tab: state.active_tab,
                hide_nav: state.hide_nav(),
                on_tab_change: move |tab: Tab| dispatch(nav, NavEvent::ChangeTab(tab)),
                {body}
            }
        }
    }
}
