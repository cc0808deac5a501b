mod navbar;
mod card;
mod message;
mod loading;
mod empty_state;

pub use navbar::Navbar;
pub use card::Card;
pub use message::Message;
pub use loading::Loading;
pub use empty_state::EmptyState;
