/// Child records
pub mod child;
/// Diary entries (bitácora)
pub mod diary;
/// Donation records
pub mod donation;
/// Event records
pub mod event;
/// Serialization and date helpers for backend records
pub mod serialization;
/// Sponsorship records
pub mod sponsorship;

pub use child::Child;
pub use diary::DiaryEntry;
pub use donation::Donation;
pub use event::Event;
pub use sponsorship::Sponsorship;
