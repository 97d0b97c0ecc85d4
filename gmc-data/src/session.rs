//! Event layer between the UI widgets and [`recompute`].
//!
//! The slider and the map each emit events; the session folds every event
//! into a fresh immutable [`Selection`] stamped with a generation number,
//! recomputes, and publishes. A result carrying an older generation than the
//! one on display is dropped, so overlapping interactions settle on the
//! newest selection.

use crate::config::DashboardConfig;
use crate::models::DerivedView;
use crate::recompute::recompute;
use crate::selection::Selection;
use gmc_core::Dataset;
use std::sync::Arc;

/// A single UI interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The year slider moved
    YearChanged(i32),
    /// The map was clicked; `None` clears the clicked country
    MapClicked(Option<String>),
    /// Back to the default year with no clicked country
    Reset,
}

/// The view currently on display and the selection it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Published {
    pub generation: u64,
    pub selection: Selection,
    pub view: DerivedView,
}

pub struct DashboardSession {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
    selection: Selection,
    generation: u64,
    published: Option<Published>,
}

impl DashboardSession {
    /// Start a session at the configured default year with no clicked country.
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        let selection = Selection::new(config.clamp_year(config.default_year), None);
        Self {
            dataset,
            config,
            selection,
            generation: 0,
            published: None,
        }
    }

    /// The latest merged selection, which may not be published yet.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The view on display, if anything has been published.
    pub fn current(&self) -> Option<&Published> {
        self.published.as_ref()
    }

    /// Fold an event into a new selection and return it with its generation.
    pub fn begin(&mut self, event: SelectionEvent) -> (u64, Selection) {
        self.selection = match event {
            SelectionEvent::YearChanged(year) => self.selection.with_year(self.config.clamp_year(year)),
            SelectionEvent::MapClicked(country) => self.selection.with_country(country),
            SelectionEvent::Reset => {
                Selection::new(self.config.clamp_year(self.config.default_year), None)
            }
        };
        self.generation += 1;
        (self.generation, self.selection.clone())
    }

    /// Recompute a view for a selection against the shared dataset.
    pub fn compute(&self, selection: &Selection) -> DerivedView {
        recompute(&self.dataset, selection, &self.config)
    }

    /// Publish a finished view unless a newer generation is already shown.
    ///
    /// Returns whether the view was accepted.
    pub fn publish(&mut self, generation: u64, selection: Selection, view: DerivedView) -> bool {
        if let Some(current) = &self.published {
            if generation < current.generation {
                log::warn!(
                    "[GMC] session: dropping stale view (generation {} < {})",
                    generation,
                    current.generation
                );
                return false;
            }
        }
        self.published = Some(Published {
            generation,
            selection,
            view,
        });
        true
    }

    /// Begin, recompute and publish in one step.
    pub fn handle(&mut self, event: SelectionEvent) -> &Published {
        let (generation, selection) = self.begin(event);
        let view = self.compute(&selection);
        self.published.insert(Published {
            generation,
            selection,
            view,
        })
    }

    /// Compute and publish the view for the current selection, e.g. on first render.
    pub fn refresh(&mut self) -> &Published {
        let selection = self.selection.clone();
        self.generation += 1;
        let view = self.compute(&selection);
        self.published.insert(Published {
            generation: self.generation,
            selection,
            view,
        })
    }
}
