pub mod card;
pub mod deck;
pub mod filter;
pub mod page;

pub use card::*;
pub use deck::*;
pub use filter::*;
pub use page::*;
