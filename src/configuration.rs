use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::distribution::uniform::Uniform;
use crate::math::distribution::uniformmanager::UniformManager;
use crate::math::interpolation::interpolatorgenerator::InterpolatorGenerator;
use crate::math::interpolation::interpolatorgeneratormanager::InterpolatorGeneratorManager;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    interpolator: Vec<serde_json::Value>,
    #[serde(default)]
    distribution: Vec<serde_json::Value>
}

pub struct Configuration {
    interpolator_generator_manager: Manager<Rc<InterpolatorGenerator>>,
    uniform_manager: Manager<Uniform>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            interpolator_generator_manager: InterpolatorGeneratorManager::new(),
            uniform_manager: UniformManager::new()
        }
    }

    pub fn interpolator_generator_manager(&self) -> &Manager<Rc<InterpolatorGenerator>> {
        &self.interpolator_generator_manager
    }

    pub fn uniform_manager(&self) -> &Manager<Uniform> {
        &self.uniform_manager
    }

    pub fn load_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        self.interpolator_generator_manager.insert_obj_from_json_vec(&json_prop.interpolator)?;
        self.uniform_manager.insert_obj_from_json_vec(&json_prop.distribution)?;
        Ok(())
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let json_value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
        self.load_json(json_value)?;
        tracing::info!(
            "Loaded {} interpolators and {} distributions from {}",
            self.interpolator_generator_manager.len(),
            self.uniform_manager.len(),
            file_path.display()
        );
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
