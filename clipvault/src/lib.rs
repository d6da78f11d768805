pub mod error;

pub mod config;

pub mod logging;
pub use logging::Logger;

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::EventLoop;

    pub mod history_controller;
    pub use history_controller::HistoryController;

    pub mod session;
    pub use session::run_session;
}

pub mod model {
    pub mod ui_state;
    pub use ui_state::{HistoryRow, Notification, NotificationLevel, UIOverlay, UIState};
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::{RenderStats, UIRenderer};

    pub mod components {
        pub mod banner;
        pub use banner::Banner;
        pub mod dialog_overlay;
        pub use dialog_overlay::DialogOverlay;
        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
        pub mod history_list;
        pub use history_list::HistoryList;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }

    pub use components::*;
}

pub use error::AppError;
