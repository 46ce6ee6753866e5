pub mod alphabet;
pub mod bags;
pub mod classify;
pub mod paa;
pub mod sax;
pub mod tfidf;
