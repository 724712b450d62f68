pub mod i18n;
pub mod utils;

pub use i18n::Locale;
