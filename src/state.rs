//! Applicatiestatus: geselecteerd bestand, dataset, tabbladen en selectie.
//!
//! Every field changes through one method, so the views only have to
//! compare [`AppState::render_epoch`] with the epoch they last drew.

use serde::Serialize;
use thiserror::Error;

use crate::config::SectionConfig;
use crate::geometry::Point2;
use crate::model::BoreholeData;
use crate::section::{SelectionState, build_layout};

/// Top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Map,
    Boreholes,
    Diagram,
}

impl Tab {
    /// Parses the name the host page uses for a tab.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "map" => Some(Self::Map),
            "boreholes" => Some(Self::Boreholes),
            "diagram" => Some(Self::Diagram),
            _ => None,
        }
    }
}

/// Sub-views of the borehole details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoTab {
    #[default]
    Info,
    Layers,
}

impl InfoTab {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "info" => Some(Self::Info),
            "layers" => Some(Self::Layers),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("geen bestand geselecteerd")]
    NoFileSelected,
    #[error("geen boorgatgegevens geladen")]
    NoData,
    #[error("tabblad {0:?} is nog niet beschikbaar")]
    TabDisabled(Tab),
    #[error("onbekend boorgat `{0}`")]
    UnknownBorehole(String),
}

/// Snapshot of the navigation bar and details view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub active_tab: Tab,
    pub info_tab: InfoTab,
    pub map_enabled: bool,
    pub boreholes_enabled: bool,
    pub diagram_enabled: bool,
    pub cross_section_generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_borehole: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    selected_file: Option<String>,
    data: Option<BoreholeData>,
    active_tab: Tab,
    info_tab: InfoTab,
    cross_section_generated: bool,
    selected_borehole: Option<String>,
    selection: SelectionState,
    render_epoch: u64,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    #[must_use]
    pub fn data(&self) -> Option<&BoreholeData> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn info_tab(&self) -> InfoTab {
        self.info_tab
    }

    #[must_use]
    pub fn is_cross_section_generated(&self) -> bool {
        self.cross_section_generated
    }

    /// Id of the borehole shown in the details view.
    #[must_use]
    pub fn selected_borehole(&self) -> Option<&str> {
        self.selected_borehole.as_deref()
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Selects the layer under `point` of the section drawn with `config`.
    /// Returns `true` when a layer was hit.
    pub fn click_section(&mut self, config: &SectionConfig, point: Point2) -> Result<bool, StateError> {
        let data = self.data.as_ref().ok_or(StateError::NoData)?;
        let layout = build_layout(data, config);
        Ok(self.selection.click(&layout, point))
    }

    pub fn dismiss_selection(&mut self) {
        self.selection.dismiss();
    }

    /// Bumped whenever the section has to be drawn again.
    #[must_use]
    pub fn render_epoch(&self) -> u64 {
        self.render_epoch
    }

    pub fn invalidate(&mut self) {
        self.render_epoch = self.render_epoch.wrapping_add(1);
    }

    pub fn select_file(&mut self, name: &str) {
        let name = name.trim();
        self.selected_file = (!name.is_empty()).then(|| name.to_owned());
    }

    /// Replaces the dataset and returns to the map.
    pub fn import(&mut self, data: BoreholeData) -> Result<(), StateError> {
        if self.selected_file.is_none() {
            return Err(StateError::NoFileSelected);
        }
        log::debug!(
            "Dataset `{}` geïmporteerd met {} boorgaten",
            data.name,
            data.boreholes.len()
        );
        self.selected_borehole = data.boreholes.first().map(|borehole| borehole.id.clone());
        self.data = Some(data);
        self.cross_section_generated = false;
        self.selection.dismiss();
        self.active_tab = Tab::Map;
        self.info_tab = InfoTab::Info;
        self.invalidate();
        Ok(())
    }

    pub fn generate_cross_section(&mut self) -> Result<(), StateError> {
        if self.data.is_none() {
            return Err(StateError::NoData);
        }
        self.cross_section_generated = true;
        self.active_tab = Tab::Diagram;
        self.invalidate();
        Ok(())
    }

    #[must_use]
    pub fn is_tab_enabled(&self, tab: Tab) -> bool {
        match tab {
            Tab::Map | Tab::Boreholes => self.data.is_some(),
            Tab::Diagram => self.cross_section_generated,
        }
    }

    pub fn set_tab(&mut self, tab: Tab) -> Result<(), StateError> {
        if !self.is_tab_enabled(tab) {
            return Err(StateError::TabDisabled(tab));
        }
        self.active_tab = tab;
        Ok(())
    }

    pub fn set_info_tab(&mut self, tab: InfoTab) {
        self.info_tab = tab;
    }

    #[must_use]
    pub fn navigation(&self) -> Navigation {
        Navigation {
            active_tab: self.active_tab,
            info_tab: self.info_tab,
            map_enabled: self.is_tab_enabled(Tab::Map),
            boreholes_enabled: self.is_tab_enabled(Tab::Boreholes),
            diagram_enabled: self.is_tab_enabled(Tab::Diagram),
            cross_section_generated: self.cross_section_generated,
            selected_file: self.selected_file.clone(),
            selected_borehole: self.selected_borehole.clone(),
        }
    }

    pub fn select_borehole(&mut self, id: &str) -> Result<(), StateError> {
        let known = self
            .data
            .as_ref()
            .is_some_and(|data| data.borehole(id).is_some());
        if !known {
            return Err(StateError::UnknownBorehole(id.to_owned()));
        }
        self.selected_borehole = Some(id.to_owned());
        Ok(())
    }
}
