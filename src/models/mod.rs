pub mod user_prefs;

pub use user_prefs::UserPrefs;
