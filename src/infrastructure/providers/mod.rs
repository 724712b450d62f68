pub mod notifier;

pub use notifier::{LogNotifier, RecordingNotifier};
