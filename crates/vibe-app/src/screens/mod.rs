//! One component per screen. Screens own their local state and report
//! navigation intents to the root through event handlers.

mod auth;
mod chat_room;
mod chats;
mod create_plot;
mod crew_detail;
mod crews;
mod feed;
mod map;
mod plot_detail;
mod profile;

pub use auth::AuthScreen;
pub use chat_room::ChatRoomScreen;
pub use chats::ChatsScreen;
pub use create_plot::CreatePlotScreen;
pub use crew_detail::CrewDetailScreen;
pub use crews::CrewsScreen;
pub use feed::FeedScreen;
pub use map::MapScreen;
pub use plot_detail::PlotDetailScreen;
pub use profile::ProfileScreen;
