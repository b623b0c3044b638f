pub mod deck;
pub mod flashcard;
pub mod rating;
pub mod review_state;

pub use deck::Deck;
pub use flashcard::Flashcard;
pub use rating::Rating;
pub use review_state::ReviewState;
