use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::distribution::uniform::Uniform;

#[derive(Deserialize)]
struct UniformJsonProp {
    min: f64,
    max: f64
}

fn get_uniform_from_json(json_value: serde_json::Value) -> Result<Uniform, ManagerError> {
    let json_prop: UniformJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(Uniform::new(json_prop.min, json_prop.max)?)
}

pub struct UniformManager;

impl UniformManager {
    pub fn new() -> Manager<Uniform> {
        Manager::new(get_uniform_from_json)
    }
}
