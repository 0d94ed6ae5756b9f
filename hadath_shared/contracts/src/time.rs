use chrono::NaiveDate;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TimeService: Send + Sync + 'static {
    /// Returns the current local calendar date.
    fn today(&self) -> NaiveDate;
}

#[cfg(feature = "mock")]
impl MockTimeService {
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.expect_today().once().return_const(today);
        self
    }
}
