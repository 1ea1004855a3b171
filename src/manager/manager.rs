use std::cell::{
    Ref,
    RefCell
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::managererror::ManagerError;

#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}

/// Name → object registry filled from JSON objects carrying a `name` field.
pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, HashMap<String, V>>;

    fn insert(&self, name: String, value: V);

    fn build_from_json(&self, json_value: serde_json::Value) -> Result<V, ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn len(&self) -> usize {
        self.map().len()
    }

    fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let value = self.build_from_json(json_value)?;
        tracing::debug!("Registered '{}'", named_object.name);
        self.insert(named_object.name, value);
        Ok(())
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for json_value in json_vec {
            self.insert_obj_from_json(json_value.clone())?;
        }
        Ok(())
    }

    /// Loads either a JSON array of named objects or a single named object.
    fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let json_value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
        match json_value {
            serde_json::Value::Array(json_array) => self.insert_obj_from_json_vec(&json_array),
            json_object => self.insert_obj_from_json(json_object),
        }
    }
}

pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, HashMap<String, V>> {
        self.map_cell.borrow()
    }

    fn insert(&self, name: String, value: V) {
        self.map_cell.borrow_mut().insert(name, value);
    }

    fn build_from_json(&self, json_value: serde_json::Value) -> Result<V, ManagerError> {
        (self.get_obj_from_json)(json_value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn double_from_json(json_value: serde_json::Value) -> Result<f64, ManagerError> {
        #[derive(Deserialize)]
        struct Prop {
            value: f64,
        }
        let prop: Prop = ManagerError::from_json_or_json_parse_error(json_value)?;
        Ok(prop.value * 2.0)
    }

    #[test]
    fn registers_by_name() {
        let manager = Manager::new(double_from_json);
        manager
            .insert_obj_from_json_vec(&[
                json!({"name": "a", "value": 1.5}),
                json!({"name": "b", "value": -2.0}),
            ])
            .unwrap();
        assert_eq!(manager.get("a").unwrap(), 3.0);
        assert_eq!(manager.get("b").unwrap(), -4.0);
        assert_eq!(manager.names(), vec!["a".to_owned(), "b".to_owned()]);
        assert!(matches!(
            manager.get("c"),
            Err(ManagerError::NameNotFoundError(name)) if name == "c"
        ));
    }

    #[test]
    fn missing_name_is_a_parse_error() {
        let manager = Manager::new(double_from_json);
        let error = manager.insert_obj_from_json(json!({"value": 1.0})).unwrap_err();
        assert!(matches!(error, ManagerError::JsonParseError(_)));
        assert!(manager.is_empty());
    }
}
