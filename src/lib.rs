#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod details;
pub mod geometry;
pub mod map;
pub mod model;
pub mod section;
pub mod state;
pub mod surface;

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

use config::{ConfigError, SectionConfig};
use details::{InfoRow, LayerRow, info_rows, layer_rows};
use geometry::{Point2, Rect};
use map::{FitOptions, LineStyle, MapView};
use model::{Borehole, ImportError, ValidationReport, parse_dataset, validate};
use section::{RenderDiagnostics, SelectionDetails, render_section, scale_pointer};
use state::{AppState, InfoTab, Navigation, StateError, Tab};
use surface::{DrawCommand, RecordingSurface, SurfaceError};

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Fouten van de engine, omgezet naar `JsError` aan de JavaScript-grens.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("onbekend tabblad `{0}`")]
    UnknownTab(String),
}

/// Public entry point for consumers.
#[wasm_bindgen]
pub struct Engine {
    state: AppState,
    config: SectionConfig,
    validation: ValidationReport,
    diagnostics: RenderDiagnostics,
    display_list: Vec<DrawCommand>,
    drawn_epoch: Option<u64>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine {
            state: AppState::new(),
            config: SectionConfig::default(),
            validation: ValidationReport::default(),
            diagnostics: RenderDiagnostics::default(),
            display_list: Vec::new(),
            drawn_epoch: None,
        }
    }

    /// Onthoudt welk bestand de gebruiker gekozen heeft.
    #[wasm_bindgen]
    pub fn select_file(&mut self, name: &str) {
        self.state.select_file(name);
    }

    /// Laad een JSON-dataset met boorgaten. Vereist een geselecteerd bestand.
    #[wasm_bindgen]
    pub fn load_dataset(&mut self, json: &str) -> Result<(), JsValue> {
        self.import_json(json).map(|_| ()).map_err(to_js_error)
    }

    /// Vervang de tekenconfiguratie; ontbrekende velden krijgen standaardwaarden.
    #[wasm_bindgen]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: SectionConfig = serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        self.configure(config).map_err(to_js_error)
    }

    /// Stel de canvasafmeting in pixels in.
    #[wasm_bindgen]
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.resize(width, height).map_err(to_js_error)
    }

    /// Geeft terug of de doorsnede sinds de laatste tekening veranderd is.
    #[wasm_bindgen]
    pub fn needs_redraw(&self) -> bool {
        self.drawn_epoch != Some(self.state.render_epoch())
    }

    /// Teken de doorsnede en geef de lijst met tekenopdrachten terug.
    #[wasm_bindgen]
    pub fn render(&mut self) -> Result<JsValue, JsValue> {
        let commands = self.draw().map_err(to_js_error)?;
        to_js(commands)
    }

    /// Selecteer de laag onder een punt in canvaspixels.
    #[wasm_bindgen]
    pub fn click(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let details = self.click_point(Point2::new(x, y)).map_err(to_js_error)?;
        to_js(&details)
    }

    /// Selecteer de laag onder de muis, met `getBoundingClientRect`-waarden
    /// van het canvas om CSS-schaling te corrigeren.
    #[wasm_bindgen]
    pub fn click_client(
        &mut self,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Result<JsValue, JsValue> {
        let point = self.canvas_point(Point2::new(client_x, client_y), Rect::new(left, top, width, height));
        let details = self.click_point(point).map_err(to_js_error)?;
        to_js(&details)
    }

    /// Sluit het detailvenster van de geselecteerde laag.
    #[wasm_bindgen]
    pub fn dismiss_selection(&mut self) {
        self.state.dismiss_selection();
    }

    #[wasm_bindgen]
    pub fn get_selection(&self) -> Result<JsValue, JsValue> {
        to_js(&self.selection_details())
    }

    /// Kaartgegevens: middelpunt, grenzen, markers en doorsnedelijn.
    #[wasm_bindgen]
    pub fn get_map_view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.map_view())
    }

    #[wasm_bindgen]
    pub fn get_borehole_info(&self, id: &str) -> Result<JsValue, JsValue> {
        let rows = self.borehole_info(id).map_err(to_js_error)?;
        to_js(&rows)
    }

    #[wasm_bindgen]
    pub fn get_borehole_layers(&self, id: &str) -> Result<JsValue, JsValue> {
        let rows = self.borehole_layers(id).map_err(to_js_error)?;
        to_js(&rows)
    }

    /// Problemen die bij het importeren gevonden zijn.
    #[wasm_bindgen]
    pub fn get_validation(&self) -> Result<JsValue, JsValue> {
        to_js(&self.validation)
    }

    /// Samenvatting van de laatste tekening.
    #[wasm_bindgen]
    pub fn get_diagnostics(&self) -> Result<JsValue, JsValue> {
        to_js(&self.diagnostics)
    }

    #[wasm_bindgen]
    pub fn generate_cross_section(&mut self) -> Result<(), JsValue> {
        self.state.generate_cross_section().map_err(to_js_error)
    }

    /// Wissel van tabblad (`map`, `boreholes` of `diagram`).
    #[wasm_bindgen]
    pub fn set_tab(&mut self, name: &str) -> Result<(), JsValue> {
        self.switch_tab(name).map_err(to_js_error)
    }

    /// Wissel tussen `info` en `layers` in de boorgatdetails.
    #[wasm_bindgen]
    pub fn set_info_tab(&mut self, name: &str) -> Result<(), JsValue> {
        let tab = InfoTab::from_name(name).ok_or_else(|| js_error(&format!("onbekend tabblad `{name}`")))?;
        self.state.set_info_tab(tab);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn select_borehole(&mut self, id: &str) -> Result<(), JsValue> {
        self.state.select_borehole(id).map_err(to_js_error)
    }

    /// Actief tabblad, beschikbare tabbladen en geselecteerd boorgat.
    #[wasm_bindgen]
    pub fn get_navigation(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.navigation())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Engine {
    /// Teken de doorsnede rechtstreeks op een canvas-context.
    #[wasm_bindgen]
    pub fn render_to_canvas(&mut self, ctx: &web_sys::CanvasRenderingContext2d) -> Result<JsValue, JsValue> {
        let data = self
            .state
            .data()
            .ok_or_else(|| to_js_error(StateError::NoData))?;
        let mut canvas = surface::canvas::CanvasSurface::new(ctx, (self.config.width, self.config.height));
        let diagnostics = render_section(&mut canvas, data, &self.config).map_err(to_js_error)?;
        debug_log!("Doorsnede op canvas getekend: {} kolommen", diagnostics.columns);
        self.diagnostics = diagnostics;
        self.drawn_epoch = Some(self.state.render_epoch());
        to_js(&self.diagnostics)
    }
}

impl Engine {
    /// Parses, validates and imports a dataset document.
    pub fn import_json(&mut self, json: &str) -> Result<&ValidationReport, EngineError> {
        let data = parse_dataset(json)?;
        let report = validate(&data);
        self.state.import(data)?;
        debug_log!("Dataset geladen met {} validatiemeldingen", report.len());
        self.validation = report;
        self.display_list.clear();
        self.diagnostics = RenderDiagnostics::default();
        Ok(&self.validation)
    }

    pub fn configure(&mut self, config: SectionConfig) -> Result<(), EngineError> {
        config.validate()?;
        self.config = config;
        self.state.invalidate();
        Ok(())
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), EngineError> {
        let config = SectionConfig {
            width,
            height,
            ..self.config.clone()
        };
        self.configure(config)
    }

    #[must_use]
    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Renders the section into the display list.
    pub fn draw(&mut self) -> Result<&[DrawCommand], EngineError> {
        let data = self.state.data().ok_or(StateError::NoData)?;
        let mut recording = RecordingSurface::new(self.config.width, self.config.height);
        let diagnostics = render_section(&mut recording, data, &self.config)?;

        self.display_list = recording.into_commands();
        self.diagnostics = diagnostics;
        self.drawn_epoch = Some(self.state.render_epoch());
        Ok(&self.display_list)
    }

    #[must_use]
    pub fn display_list(&self) -> &[DrawCommand] {
        &self.display_list
    }

    /// Maps a pointer position in page pixels onto the canvas.
    #[must_use]
    pub fn canvas_point(&self, client: Point2, bounds: Rect) -> Point2 {
        scale_pointer(client, bounds, (self.config.width, self.config.height))
    }

    /// Updates the selection from a canvas pixel position and returns what
    /// is selected afterwards.
    pub fn click_point(&mut self, point: Point2) -> Result<Option<SelectionDetails>, EngineError> {
        self.state.click_section(&self.config, point)?;
        Ok(self.selection_details())
    }

    #[must_use]
    pub fn selection_details(&self) -> Option<SelectionDetails> {
        self.state.selection().current().map(section::Selection::details)
    }

    #[must_use]
    pub fn map_view(&self) -> Option<MapView> {
        let data = self.state.data()?;
        MapView::of_dataset(data, FitOptions::default(), LineStyle::default())
    }

    pub fn borehole_info(&self, id: &str) -> Result<Vec<InfoRow>, EngineError> {
        Ok(info_rows(self.find_borehole(id)?))
    }

    pub fn borehole_layers(&self, id: &str) -> Result<Vec<LayerRow>, EngineError> {
        Ok(layer_rows(self.find_borehole(id)?))
    }

    #[must_use]
    pub fn validation(&self) -> &ValidationReport {
        &self.validation
    }

    #[must_use]
    pub fn diagnostics(&self) -> &RenderDiagnostics {
        &self.diagnostics
    }

    pub fn switch_tab(&mut self, name: &str) -> Result<(), EngineError> {
        let tab = Tab::from_name(name).ok_or_else(|| EngineError::UnknownTab(name.to_owned()))?;
        self.state.set_tab(tab)?;
        Ok(())
    }

    #[must_use]
    pub fn navigation(&self) -> Navigation {
        self.state.navigation()
    }

    fn find_borehole(&self, id: &str) -> Result<&Borehole, EngineError> {
        let data = self.state.data().ok_or(StateError::NoData)?;
        data.borehole(id)
            .ok_or_else(|| StateError::UnknownBorehole(id.to_owned()).into())
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()).into())
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
