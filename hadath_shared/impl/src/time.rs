use chrono::{Local, NaiveDate};
use hadath_di::Build;
use hadath_shared_contracts::time::TimeService;
use hadath_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
