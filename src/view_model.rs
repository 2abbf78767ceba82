//! Dashboard state and derived views
//!
//! `ViewModel` owns the loaded records and the current search/category
//! selection. Each change of the selection recomputes every derived view in
//! one synchronous pass, replacing the previous one.

use anyhow::Result;
use tracing::debug;

use crate::error::PaperError;
use crate::papers::aggregate::{self, CategoryCount, CategoryShare, MonthBucket};
use crate::papers::filter;
use crate::papers::{DateKey, PaperRecord, local_date_today};
use crate::settings::DashboardSettings;

/// Which slice of the full dataset a pie chart covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareWindow {
    /// Every record
    Overall,
    /// Records first read within the configured recency window
    Recent,
}

/// Totals shown above the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub printed: usize,
    pub printed_and_read: usize,
    pub total_reads: u64,
    /// Records whose `firstRead` does not parse
    pub undated: usize,
}

/// Views recomputed on every state change
#[derive(Debug, Clone, Default)]
struct DerivedViews {
    /// Indices into `ViewModel::records`, latest first
    table: Vec<usize>,
    histogram: Vec<MonthBucket>,
    histogram_categories: CategoryCount,
    overall_shares: Vec<CategoryShare>,
    recent_shares: Vec<CategoryShare>,
}

#[derive(Debug)]
pub struct ViewModel {
    records: Vec<PaperRecord>,
    categories: Vec<String>,
    settings: DashboardSettings,
    query: String,
    category: String,
    today: DateKey,
    views: DerivedViews,
}

impl ViewModel {
    /// Build the view model with empty filters, dated to the local today
    pub fn new(records: Vec<PaperRecord>, settings: DashboardSettings) -> Result<Self> {
        Self::with_today(records, settings, DateKey::from_date(local_date_today()))
    }

    /// Build the view model with an explicit current month
    ///
    /// Fails when `settings` are out of range.
    pub fn with_today(
        records: Vec<PaperRecord>,
        settings: DashboardSettings,
        today: DateKey,
    ) -> Result<Self> {
        settings.validate()?;

        let mut categories: Vec<String> = records.iter().map(|r| r.category.clone()).collect();
        categories.sort();
        categories.dedup();

        let mut model = Self {
            records,
            categories,
            settings,
            query: String::new(),
            category: String::new(),
            today,
            views: DerivedViews::default(),
        };
        model.refresh();
        Ok(model)
    }

    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Selected category; empty means all categories
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn today(&self) -> DateKey {
        self.today
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.refresh();
    }

    /// Set both controls with a single recomputation
    pub fn set_filter(&mut self, query: impl Into<String>, category: impl Into<String>) {
        self.query = query.into();
        self.category = category.into();
        self.refresh();
    }

    /// Filtered records, latest first
    pub fn table_rows(&self) -> impl Iterator<Item = &PaperRecord> {
        self.views.table.iter().map(|&idx| &self.records[idx])
    }

    /// Printed-and-read records of the current selection, per month
    pub fn histogram(&self) -> &[MonthBucket] {
        &self.views.histogram
    }

    /// Printed-and-read records of the current selection, per category
    pub fn histogram_categories(&self) -> &CategoryCount {
        &self.views.histogram_categories
    }

    /// Pie-chart segments; independent of the search and category controls
    pub fn shares(&self, window: ShareWindow) -> &[CategoryShare] {
        match window {
            ShareWindow::Overall => &self.views.overall_shares,
            ShareWindow::Recent => &self.views.recent_shares,
        }
    }

    /// Records first read within the last `months` months, latest first
    pub fn recent(&self, months: u32) -> Vec<&PaperRecord> {
        let all: Vec<&PaperRecord> = self.records.iter().collect();
        let mut recent = filter::by_recency(&all, months, self.today);
        filter::sort_by_first_read_desc(&mut recent);
        recent
    }

    pub fn summary(&self) -> Summary {
        self.records.iter().fold(Summary::default(), |mut s, r| {
            s.total += 1;
            s.total_reads += u64::from(r.times_read);
            if r.printed {
                s.printed += 1;
            }
            if r.is_printed_and_read() {
                s.printed_and_read += 1;
            }
            if r.first_read_key().is_err() {
                s.undated += 1;
            }
            s
        })
    }

    fn refresh(&mut self) {
        let all: Vec<&PaperRecord> = self.records.iter().collect();

        // 1-2: filtered table, latest first
        let mut table: Vec<(usize, &PaperRecord)> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| filter::matches(r, &self.query, &self.category))
            .collect();
        table.sort_by_cached_key(|(_, r)| filter::newest_first_key(r));

        // 3: histogram over the printed-and-read part of the selection
        let printed_read = filter::apply(&all, &self.query, &self.category, true);
        let histogram = aggregate::month_buckets(&printed_read);
        let histogram_categories = aggregate::category_counts(&printed_read);

        // 4: pie charts over the unfiltered set
        let threshold = self.settings.other_threshold_percent;
        let overall_shares = shares_or_empty(&all, threshold);
        let recent = filter::by_recency(&all, self.settings.recency_months, self.today);
        let recent_shares = shares_or_empty(&recent, threshold);

        debug!(
            query = %self.query,
            category = %self.category,
            rows = table.len(),
            months = histogram.len(),
            "recomputed dashboard views"
        );

        self.views = DerivedViews {
            table: table.into_iter().map(|(idx, _)| idx).collect(),
            histogram,
            histogram_categories,
            overall_shares,
            recent_shares,
        };
    }
}

fn shares_or_empty(records: &[&PaperRecord], threshold: f64) -> Vec<CategoryShare> {
    match aggregate::category_shares(records, threshold) {
        Ok(shares) => shares,
        Err(PaperError::EmptyInput) => {
            debug!("no records for share computation");
            Vec::new()
        }
        Err(e) => {
            debug!("share computation failed: {}", e);
            Vec::new()
        }
    }
}
