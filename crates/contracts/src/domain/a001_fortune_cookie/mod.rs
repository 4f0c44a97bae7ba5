//! Fortune cookie phrases served by the fortune-cookie service.

pub mod aggregate;

pub use aggregate::{
    clamp_phrase_input, normalize_phrase, CreateFortuneRequest, FortuneCookieRecord,
    FortuneListResponse, FortunePhrase, PHRASE_MAX_CHARS,
};
