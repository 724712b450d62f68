use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    /// Current calendar date in the business timezone
    fn today(&self) -> NaiveDate;
}
