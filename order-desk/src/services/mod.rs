pub mod suggest_service;

pub use suggest_service::{AddressSuggester, DadataSuggester, SuggestError, Suggestion};
