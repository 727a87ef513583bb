use std::collections::BTreeMap;

use crate::data::model::TableData;
use crate::data::schema::Module;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Currently selected dashboard module.
    pub module: Module,

    /// Per-module upload slots. Switching modules never clears another
    /// module's data, matching independent uploaders per view.
    pub datasets: BTreeMap<Module, TableData>,

    /// Load-error message shown in the top bar.
    pub status_message: Option<String>,

    /// URI of the registered background image, if the asset was found.
    pub background_uri: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            module: Module::ProductionForecast,
            datasets: BTreeMap::new(),
            status_message: None,
            background_uri: None,
        }
    }
}

impl AppState {
    /// Store a freshly loaded table in the active module's slot.
    pub fn set_dataset(&mut self, table: TableData) {
        self.datasets.insert(self.module, table);
        self.status_message = None;
    }

    /// The table uploaded for the active module, if any.
    pub fn active_dataset(&self) -> Option<&TableData> {
        self.datasets.get(&self.module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    #[test]
    fn upload_slots_are_independent_per_module() {
        let mut state = AppState::default();
        state.module = Module::ProductionForecast;
        state.set_dataset(TableData::new(
            vec!["Year".into()],
            vec![vec![CellValue::Integer(2020)]],
        ));

        state.module = Module::EnergyMix;
        assert!(state.active_dataset().is_none());

        state.module = Module::ProductionForecast;
        assert_eq!(state.active_dataset().unwrap().len(), 1);
    }

    #[test]
    fn loading_a_dataset_clears_the_error_status() {
        let mut state = AppState::default();
        state.status_message = Some("Error: bad file".into());
        state.set_dataset(TableData::default());
        assert!(state.status_message.is_none());
    }
}
