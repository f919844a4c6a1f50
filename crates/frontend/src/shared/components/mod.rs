pub mod card_animated;
pub mod content_card;

pub use card_animated::CardAnimated;
pub use content_card::ContentCard;
