use std::rc::Rc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::interpolation::interpolatorgenerator::{
    InterpolationMethod,
    InterpolatorGenerator
};

#[derive(Deserialize)]
struct InterpolatorGeneratorJsonProp {
    method: InterpolationMethod,
    x: Vec<f64>,
    y: Vec<f64>
}

fn get_interpolator_generator_from_json(json_value: serde_json::Value) -> Result<Rc<InterpolatorGenerator>, ManagerError> {
    let json_prop: InterpolatorGeneratorJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let generator = InterpolatorGenerator::new(json_prop.method, json_prop.x, json_prop.y)?;
    Ok(Rc::new(generator))
}

pub struct InterpolatorGeneratorManager;

impl InterpolatorGeneratorManager {
    pub fn new() -> Manager<Rc<InterpolatorGenerator>> {
        Manager::new(get_interpolator_generator_from_json)
    }
}
