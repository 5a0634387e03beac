/// What the classifier saw in a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySignals {
    pub historical: Vec<String>,
    pub time_sensitive: Vec<String>,
    pub outdated_years: Vec<i32>,
    pub present_years: Vec<i32>,
}

impl QuerySignals {
    pub fn has_historical_intent(&self) -> bool {
        !self.historical.is_empty()
    }

    pub fn is_time_sensitive(&self) -> bool {
        !self.time_sensitive.is_empty()
    }

    pub fn mentions_outdated_year(&self) -> bool {
        !self.outdated_years.is_empty()
    }

    pub fn mentions_present_year(&self) -> bool {
        !self.present_years.is_empty()
    }
}
